use rust_stemmers::{Algorithm, Stemmer};

/// Adapter over the external Snowball stemming algorithm.
///
/// Reduces a normalized token to its linguistic stem. When the algorithm
/// reports no transformation the input comes back unchanged.
pub struct SnowballAdapter {
    stemmer: Stemmer,
    algorithm: Algorithm,
}

impl SnowballAdapter {
    /// Create an adapter for the given Snowball algorithm.
    pub fn new(algorithm: Algorithm) -> Self {
        Self {
            stemmer: Stemmer::create(algorithm),
            algorithm,
        }
    }

    /// English stemmer, the corpus default.
    pub fn english() -> Self {
        Self::new(Algorithm::English)
    }

    /// Stem a single token.
    #[inline]
    pub fn stem(&self, token: &str) -> String {
        self.stemmer.stem(token).into_owned()
    }
}

impl Clone for SnowballAdapter {
    fn clone(&self) -> Self {
        // Stemmer does not implement Clone; rebuild from the algorithm
        Self::new(self.algorithm)
    }
}

impl std::fmt::Debug for SnowballAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SnowballAdapter")
            .field("algorithm", &self.algorithm)
            .finish()
    }
}

impl Default for SnowballAdapter {
    fn default() -> Self {
        Self::english()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stems_english_suffixes() {
        let stemmer = SnowballAdapter::english();
        assert_eq!(stemmer.stem("running"), "run");
        assert_eq!(stemmer.stem("foxes"), "fox");
        assert_eq!(stemmer.stem("jumped"), "jump");
    }

    #[test]
    fn unstemmable_tokens_pass_through() {
        let stemmer = SnowballAdapter::english();
        assert_eq!(stemmer.stem("fox"), "fox");
        assert_eq!(stemmer.stem("i"), "i");
        assert_eq!(stemmer.stem(""), "");
    }
}
