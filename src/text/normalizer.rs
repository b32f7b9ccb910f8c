use once_cell::sync::Lazy;
use regex::Regex;

/// Any Unicode punctuation character (`\p{P}`), not just the ASCII set.
static PUNCTUATION: Lazy<Regex> = Lazy::new(|| Regex::new(r"\p{P}+").expect("invalid regex"));

/// Integer or decimal literal covering the whole token.
static NUMBER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+(\.\d+)?$").expect("invalid regex"));

/// Sentinel every numeric literal collapses to.
pub const NUM_SENTINEL: &str = "NUM";

/// Canonicalize a single surface token:
/// strip punctuation, fold case, collapse numeric literals to [`NUM_SENTINEL`].
///
/// Pure and total: any input, including the empty string, maps to a
/// (possibly empty) string. The sentinel itself is a fixed point, which makes
/// the transform idempotent.
///
/// # Examples
/// ```
/// use ngram_analyzer::text::normalizer::normalize;
/// assert_eq!(normalize("Don't"), "dont");
/// assert_eq!(normalize("30"), "NUM");
/// assert_eq!(normalize("0.12"), "NUM");
/// ```
pub fn normalize(token: &str) -> String {
    if token == NUM_SENTINEL {
        return NUM_SENTINEL.to_string();
    }
    let stripped = PUNCTUATION.replace_all(token, "");
    let folded = stripped.to_lowercase();
    if NUMBER.is_match(&folded) {
        NUM_SENTINEL.to_string()
    } else {
        folded
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_unicode_punctuation_and_folds_case() {
        assert_eq!(normalize("Place."), "place");
        assert_eq!(normalize("A#a"), "aa");
        assert_eq!(normalize("A'a"), "aa");
        // em-dash and guillemets are punctuation outside the ASCII range
        assert_eq!(normalize("wait\u{2014}what"), "waitwhat");
        assert_eq!(normalize("\u{ab}Oui\u{bb}"), "oui");
    }

    #[test]
    fn numeric_literals_collapse_to_sentinel() {
        assert_eq!(normalize("000"), NUM_SENTINEL);
        assert_eq!(normalize("30"), NUM_SENTINEL);
        // the dot is stripped as punctuation first, leaving digits only
        assert_eq!(normalize("0.12"), NUM_SENTINEL);
    }

    #[test]
    fn mixed_alphanumerics_are_not_numbers() {
        assert_eq!(normalize("A0a"), "a0a");
        assert_eq!(normalize("30th"), "30th");
    }

    #[test]
    fn empty_input_is_fine() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("..."), "");
    }

    #[test]
    fn idempotent() {
        for raw in ["Don't", "30", "0.12", "NUM", "A0a", "", "...", "Place."] {
            let once = normalize(raw);
            assert_eq!(normalize(&once), once, "normalize not idempotent for {raw:?}");
        }
    }
}
