use unicode_segmentation::UnicodeSegmentation;

/// Boundary trait for the external word tokenizer.
///
/// The pipeline treats tokenization as a black box: an ordered sequence of
/// surface tokens out of raw text. Swap implementations to plug a different
/// segmenter into [`crate::DocAnalyzer`].
pub trait WordTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String>;
}

/// Default tokenizer segmenting on Unicode word boundaries (UAX #29).
#[derive(Debug, Default, Clone)]
pub struct UnicodeWordTokenizer;

impl WordTokenizer for UnicodeWordTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        text.unicode_words().map(str::to_string).collect()
    }
}
