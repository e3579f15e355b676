//! # Tandem Sync
//!
//! Peer synchronization for the Tandem ledger: full-snapshot exchange over
//! a duplex byte stream, newline-delimited JSON framing, longer-wins
//! convergence.
//!
//! ## Overview
//!
//! A [`SyncSession`] owns one peer connection and runs two long-lived
//! tasks over its halves:
//!
//! - the **inbound listener** reads one frame per line, strictly decodes
//!   it, optionally re-validates the whole candidate chain, and applies
//!   longer-wins reconciliation under the ledger lock;
//! - the **outbound publisher** is the only writer to the stream. It emits
//!   the full local snapshot on a fixed cadence and immediately when a
//!   [`PublishHandle`] asks for it, so frame bytes never interleave.
//!
//! ## Key Properties
//!
//! - **Length-monotonic**: the local ledger never shrinks
//! - **Idempotent**: re-delivered or tied snapshots change nothing
//! - **Non-fatal decode**: a malformed frame drops, it does not kill the
//!   session (configurable)
//!
//! ## Frame Flow
//!
//! ```text
//! Node A                                  Node B
//!   |-------- [r0..rN]\n ---------------->|   periodic broadcast
//!   |-------- [r0..rN+1]\n -------------->|   triggered by local append
//!   |<------- [r0..rM]\n -----------------|   periodic broadcast
//!   |              ...                    |
//! ```
//!
//! Reconnection, peer discovery, and transport setup are the caller's
//! concern; a session lives exactly as long as its stream.

pub mod error;
pub mod session;
pub mod wire;

pub use error::{Result, SyncError};
pub use session::{
    CloseReason, MalformedFramePolicy, PublishHandle, SessionHandle, SyncConfig, SyncEvent,
    SyncSession,
};
pub use wire::{decode_frame, encode_frame, Frame};
