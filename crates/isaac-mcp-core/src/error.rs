//! Error types for the Isaac Sim MCP client

use thiserror::Error;

/// Result type for Isaac MCP operations
pub type Result<T> = std::result::Result<T, IsaacMcpError>;

/// Isaac MCP error types
#[derive(Debug, Error)]
pub enum IsaacMcpError {
    /// Could not reach the MCP extension
    #[error("Connection error: {0}")]
    Connection(String),

    /// Socket write or read failed after connecting
    #[error("IO error: {0}")]
    Io(String),

    /// Request could not be encoded or reply could not be decoded
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Request is structurally wrong before it reaches the wire
    #[error("Protocol error: {0}")]
    Protocol(String),
}

impl From<serde_json::Error> for IsaacMcpError {
    fn from(err: serde_json::Error) -> Self {
        IsaacMcpError::Serialization(err.to_string())
    }
}
