//! # Tandem Core
//!
//! Pure primitives for the Tandem ledger: records, digests, and link
//! validation.
//!
//! This crate contains no I/O, no locking, no networking. It is pure
//! computation over hash-chained data.
//!
//! ## Key Types
//!
//! - [`Record`] - One measurement entry in the ledger
//! - [`Digest`] - SHA-256 integrity digest, hex-rendered on the wire
//! - [`check_link`] / [`is_valid_link`] - Successor validation
//!
//! ## Digest preimage
//!
//! A record's digest is SHA-256 over the concatenation of its decimal
//! position, its timestamp string, its decimal payload, and the lowercase
//! hex of its previous hash (empty for genesis). Both peers must derive
//! identical bytes for identical records, so this concatenation is fixed.

pub mod digest;
pub mod error;
pub mod link;
pub mod record;

pub use digest::Digest;
pub use error::{DigestError, LinkError};
pub use link::{check_link, is_valid_link};
pub use record::{Record, GENESIS_PAYLOAD};
