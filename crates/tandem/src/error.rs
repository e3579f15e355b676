//! Error types for the node layer.

use thiserror::Error;

use tandem_core::LinkError;

/// Errors that can occur running a node's operator-facing loops.
#[derive(Debug, Error)]
pub enum NodeError {
    /// Operator input failed at the I/O level.
    #[error("input error: {0}")]
    Input(#[from] std::io::Error),

    /// A locally built record failed link validation.
    #[error("append rejected: {0}")]
    Append(#[from] LinkError),
}

/// Result type for node operations.
pub type Result<T> = std::result::Result<T, NodeError>;
