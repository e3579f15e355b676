//! Error types for the sync layer.

use thiserror::Error;

use tandem_chain::ChainError;

/// Errors that can occur framing or carrying snapshots.
#[derive(Debug, Error)]
pub enum SyncError {
    /// Stream-level I/O failure.
    #[error("transport error: {0}")]
    Io(#[from] std::io::Error),

    /// A snapshot could not be encoded as a frame.
    #[error("frame encode error: {0}")]
    Encode(serde_json::Error),

    /// An inbound frame was not a well-formed snapshot.
    #[error("malformed frame: {0}")]
    MalformedFrame(serde_json::Error),

    /// An inbound snapshot failed full-chain verification.
    #[error("invalid candidate chain: {0}")]
    InvalidChain(#[from] ChainError),
}

/// Result type for sync operations.
pub type Result<T> = std::result::Result<T, SyncError>;
