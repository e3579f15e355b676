//! # Tandem Chain
//!
//! The ledger state layer: a genesis-rooted record sequence and the
//! shared-handle lock discipline every task goes through to touch it.
//!
//! ## Key Types
//!
//! - [`Ledger`] - The record sequence and its invariants
//! - [`SharedLedger`] - Cloneable handle over one exclusive lock
//! - [`Reconciliation`] - Outcome of longer-wins snapshot reconciliation
//!
//! ## Access discipline
//!
//! All reads that decide a write and all writes happen inside a single
//! short critical section on [`SharedLedger`]; no lock is held across an
//! await. Divergence between peers is resolved by [`Ledger::reconcile`]:
//! a strictly longer snapshot replaces the local sequence wholesale,
//! anything else is discarded.

pub mod error;
pub mod ledger;
pub mod shared;

pub use error::ChainError;
pub use ledger::{verify_records, Ledger, Reconciliation};
pub use shared::SharedLedger;
