use thiserror::Error;

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;

/// Errors that can occur during line analysis
#[derive(Error, Debug)]
pub enum EngineError {
    /// Content bytes were not valid UTF-8
    #[error("Content is not valid UTF-8: {0}")]
    Decoding(#[from] std::string::FromUtf8Error),

    /// Random selection attempted on a document with zero lines
    #[error("Document '{0}' has no lines")]
    EmptyDocument(String),
}
