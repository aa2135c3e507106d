//! Error types for agent-core

use thiserror::Error;

/// Result type alias for agent-core
pub type Result<T> = std::result::Result<T, Error>;

/// Error type surfaced to the agent runtime when a tool cannot be run
#[derive(Error, Debug)]
pub enum Error {
    /// Tool arguments did not match the tool's input schema
    #[error("Invalid parameters: {0}")]
    InvalidParameters(String),

    /// No tool registered under the requested name
    #[error("Tool not found: {0}")]
    ToolNotFound(String),

    /// Tool processing failed outside of its result envelope
    #[error("Tool processing failed: {0}")]
    ProcessingFailed(String),
}

impl Error {
    /// Build an `InvalidParameters` error from anything displayable
    pub fn invalid_parameters(reason: impl std::fmt::Display) -> Self {
        Self::InvalidParameters(reason.to_string())
    }
}
