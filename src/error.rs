use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalyzeError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Snapshot Encoding Error: {0}")]
    Snapshot(#[from] serde_cbor::Error),

    #[error("Review '{0}' has no content")]
    MissingContent(String),

    #[error("Invalid n-gram order {0}: order must be at least 1")]
    InvalidOrder(usize),
}

pub type AnalyzeResult<T> = Result<T, AnalyzeError>;
