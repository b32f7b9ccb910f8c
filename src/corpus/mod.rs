use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::AnalyzeResult;

/// One customer review.
///
/// Immutable after ingestion and owned exclusively by the analyzer's corpus
/// collection. The surface token sequence is assigned by the ingestor after
/// tokenization; it is not part of the wire format.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Review {
    #[serde(rename = "ReviewID", default)]
    id: Option<String>,
    #[serde(rename = "Content", default)]
    content: Option<String>,
    #[serde(skip)]
    tokens: Vec<String>,
}

impl Review {
    pub fn new(id: impl Into<String>, content: impl Into<String>) -> Self {
        Review {
            id: Some(id.into()),
            content: Some(content.into()),
            tokens: Vec::new(),
        }
    }

    /// Review identifier, or a placeholder when the record carried none.
    pub fn id(&self) -> &str {
        self.id.as_deref().unwrap_or("<unknown>")
    }

    /// Raw text content; `None` marks a malformed record.
    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }

    /// Surface tokens, in document order (empty before ingestion).
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub(crate) fn set_tokens(&mut self, tokens: Vec<String>) {
        self.tokens = tokens;
    }
}

/// Wire format of one corpus file: `{"Reviews": [ ... ]}`.
#[derive(Debug, Clone, Deserialize)]
pub struct ReviewBatch {
    #[serde(rename = "Reviews")]
    pub reviews: Vec<Review>,
}

/// Parse one corpus file into a batch of reviews.
pub fn read_batch<P: AsRef<Path>>(path: P) -> AnalyzeResult<ReviewBatch> {
    let file = File::open(path)?;
    let batch = serde_json::from_reader(BufReader::new(file))?;
    Ok(batch)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn batch_parses_reviews_array() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"Reviews":[{{"ReviewID":"r1","Content":"Great coffee."}},{{"ReviewID":"r2"}}]}}"#
        )
        .unwrap();

        let batch = read_batch(file.path()).unwrap();
        assert_eq!(batch.reviews.len(), 2);
        assert_eq!(batch.reviews[0].id(), "r1");
        assert_eq!(batch.reviews[0].content(), Some("Great coffee."));
        // missing Content is represented, not rejected; the ingestor skips it
        assert_eq!(batch.reviews[1].content(), None);
    }

    #[test]
    fn malformed_json_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{not json").unwrap();
        assert!(read_batch(file.path()).is_err());
    }

    #[test]
    fn missing_reviews_key_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"Items":[]}}"#).unwrap();
        assert!(read_batch(file.path()).is_err());
    }
}
