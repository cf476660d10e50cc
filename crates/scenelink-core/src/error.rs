//! Error types for SceneLink

use thiserror::Error;

/// Result type for SceneLink operations
pub type Result<T> = std::result::Result<T, SceneLinkError>;

/// SceneLink error types
#[derive(Debug, Error)]
pub enum SceneLinkError {
    /// Structurally malformed input to an encoder function
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Response did not match any expected shape for the command
    #[error("Protocol mismatch: {0}")]
    ProtocolMismatch(String),

    /// Transport communication error
    #[error("IPC error: {0}")]
    IpcError(String),
}
