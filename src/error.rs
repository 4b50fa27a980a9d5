use thiserror::Error;

/// Custom error types for the think-tool server
#[derive(Error, Debug)]
pub enum ThinkToolError {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Thought log lock poisoned")]
    LockPoisoned,

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, ThinkToolError>;
