//! Errors raised at the request boundary. The sorters themselves cannot fail.

#[derive(Debug, thiserror::Error)]
pub enum TraceError {
    #[error("Unsupported algorithm: {0}")]
    UnknownAlgorithm(String),

    #[error("Invalid array: {0}")]
    InvalidArray(String),

    #[error("Missing argument: {0}")]
    MissingArgument(&'static str),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
