//! # Tandem Testkit
//!
//! Testing utilities for Tandem.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Golden vectors**: record chains with pinned SHA-256 digests for cross-implementation verification
//! - **Generators**: Proptest strategies for property-based testing
//! - **Fixtures**: deterministic chains, scripted operator I/O, and a frozen clock
//!
//! ## Golden Vectors
//!
//! Golden vectors pin the digest preimage both peers must agree on:
//!
//! ```rust
//! use tandem_testkit::vectors::verify_all_vectors;
//!
//! for (name, matches, hash) in verify_all_vectors() {
//!     assert!(matches, "{name} diverged: {hash}");
//! }
//! ```
//!
//! ## Property Testing
//!
//! Use the generators with proptest:
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use tandem_testkit::generators::{chain_from_params, ChainParams};
//!
//! proptest! {
//!     #[test]
//!     fn chains_rebuild_identically(params: ChainParams) {
//!         prop_assert_eq!(chain_from_params(&params), chain_from_params(&params));
//!     }
//! }
//! ```
//!
//! ## Test Fixtures
//!
//! Quickly set up test scenarios:
//!
//! ```rust
//! use tandem_testkit::fixtures::{sample_chain, CaptureDisplay};
//!
//! let records = sample_chain(3);
//! assert_eq!(records.len(), 3);
//!
//! let display = CaptureDisplay::new();
//! assert!(display.lines().is_empty());
//! ```

pub mod fixtures;
pub mod generators;
pub mod vectors;

pub use fixtures::{
    init_test_logging, link, sample_chain, sample_ledger, tampered_chain, CaptureDisplay,
    FixedClock, ScriptedInput, FIXED_STAMP,
};
pub use generators::{chain, chain_from_params, ChainParams};
pub use vectors::{all_vectors, chain_from_vectors, verify_all_vectors, GoldenVector};
