pub mod ngram;
pub mod normalizer;
pub mod stemmer;
pub mod stopwords;
pub mod tokenizer;

use self::stemmer::SnowballAdapter;

/// The canonicalization applied to every surface token: normalize, then stem.
///
/// Stopword lines are pushed through the *same* pipeline at load time.
/// Anything else and stopword matching silently fails, because the corpus
/// side compares canonical forms, not surface forms.
#[derive(Debug, Clone, Default)]
pub struct TokenPipeline {
    stemmer: SnowballAdapter,
}

impl TokenPipeline {
    /// Pipeline with the English Snowball stemmer.
    pub fn english() -> Self {
        Self {
            stemmer: SnowballAdapter::english(),
        }
    }

    /// Normalize then stem one surface token. An empty canonical form means
    /// the token carried no lexical content (pure punctuation, for example).
    #[inline]
    pub fn canonical(&self, raw: &str) -> String {
        let normalized = normalizer::normalize(raw);
        if normalized.is_empty() {
            return normalized;
        }
        self.stemmer.stem(&normalized)
    }

    /// The normalization stage alone, exposed for diagnostics.
    #[inline]
    pub fn normalized(&self, raw: &str) -> String {
        normalizer::normalize(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_composes_normalize_and_stem() {
        let pipeline = TokenPipeline::english();
        assert_eq!(pipeline.canonical("Foxes,"), "fox");
        assert_eq!(pipeline.canonical("RUNNING"), "run");
    }

    #[test]
    fn numeric_sentinel_survives_stemming() {
        let pipeline = TokenPipeline::english();
        assert_eq!(pipeline.canonical("42"), "NUM");
        assert_eq!(pipeline.canonical("0.12"), "NUM");
    }

    #[test]
    fn punctuation_only_tokens_canonicalize_to_empty() {
        let pipeline = TokenPipeline::english();
        assert_eq!(pipeline.canonical("..."), "");
        assert_eq!(pipeline.canonical(""), "");
    }
}
