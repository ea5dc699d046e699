//! Error types for the rate graph.

use thiserror::Error;

/// Rate graph error type
#[derive(Debug, Error)]
pub enum GraphError {
    /// Terminal or file IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Chart rendering error
    #[error("Render error: {0}")]
    Render(String),
}

impl GraphError {
    /// Create a rendering error
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }
}

/// Result alias for rate graph operations
pub type Result<T> = std::result::Result<T, GraphError>;
