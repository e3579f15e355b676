//! Error types for the core primitives.

use thiserror::Error;

use crate::digest::Digest;

/// Errors parsing a digest from its wire rendering.
#[derive(Debug, Error)]
pub enum DigestError {
    #[error("digest must be 64 hex characters, got {0}")]
    Length(usize),

    #[error("digest is not valid hex: {0}")]
    Hex(#[from] hex::FromHexError),
}

/// Why a candidate record does not extend a reference record.
///
/// Link checks run in a fixed order; the error names the first one that
/// failed.
#[derive(Debug, Error)]
pub enum LinkError {
    #[error("position mismatch: expected {expected}, got {got}")]
    PositionMismatch { expected: u64, got: u64 },

    #[error("previous hash mismatch: expected {expected:?}, got {got:?}")]
    PreviousHashMismatch {
        expected: Digest,
        got: Option<Digest>,
    },

    #[error("digest mismatch: computed {computed:?}, embedded {embedded:?}")]
    DigestMismatch { computed: Digest, embedded: Digest },
}
