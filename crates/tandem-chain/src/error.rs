//! Error types for ledger state and chain verification.

use thiserror::Error;

use tandem_core::LinkError;

/// Why a record sequence fails full-chain verification.
#[derive(Debug, Error)]
pub enum ChainError {
    #[error("chain has no records")]
    Empty,

    #[error("genesis record malformed: {0}")]
    BadGenesis(String),

    #[error("broken link at position {position}: {source}")]
    BrokenLink { position: u64, source: LinkError },
}
