//! # Tandem
//!
//! A two-node replicated append-only ledger. Each node keeps a hash-linked
//! chain of operator-entered integers, streams full snapshots to its peer
//! over a newline-delimited JSON protocol, and adopts whichever chain is
//! strictly longer.
//!
//! ## Overview
//!
//! A [`Node`] owns one [`SharedLedger`] bootstrapped with a genesis record.
//! Attaching an open peer connection spawns a session (see
//! [`tandem_sync`]) whose listener and publisher run until the connection
//! ends. The operator loops tie the rest together: one turns input lines
//! into appends and triggered publishes, the other renders snapshots the
//! session adopted from the peer.
//!
//! ## Key Concepts
//!
//! - **Record**: position, timestamp, integer payload, and a SHA-256 digest
//!   linking it to its predecessor ([`Record`]).
//! - **Longer wins**: a peer snapshot replaces the local chain only when it
//!   is strictly longer ([`tandem_chain::Reconciliation`]).
//! - **Seams**: wall clock and operator I/O sit behind [`Clock`],
//!   [`OperatorInput`], and [`OperatorDisplay`] so tests can script them.
//!
//! ## Usage
//!
//! ```no_run
//! use tandem::{Node, NodeConfig, StdinInput, StdoutDisplay, SystemClock};
//!
//! #[tokio::main]
//! async fn main() {
//!     let node = Node::new(NodeConfig::default(), SystemClock);
//!
//!     // `stream` is an established peer connection, e.g. a TcpStream.
//!     # let (stream, _other) = tokio::io::duplex(4096);
//!     let session = node.attach(stream);
//!
//!     let mut input = StdinInput::new();
//!     let display = StdoutDisplay;
//!     tokio::select! {
//!         result = node.run_input_loop(&mut input, &display, &session.publisher) => {
//!             result.unwrap();
//!         }
//!         _ = node.run_session_events(session.events, &display) => {}
//!     }
//! }
//! ```
//!
//! ## Re-exports
//!
//! The component crates are available as [`core`], [`chain`], and
//! [`sync`]; the types most callers need are re-exported at the root.

pub mod clock;
pub mod error;
pub mod io;
pub mod node;
pub mod render;

// Component crates under their short names.
pub use tandem_chain as chain;
pub use tandem_core as core;
pub use tandem_sync as sync;

pub use clock::{Clock, SystemClock};
pub use error::{NodeError, Result};
pub use io::{OperatorDisplay, OperatorInput, StdinInput, StdoutDisplay};
pub use node::{Node, NodeConfig};

pub use tandem_chain::{Ledger, Reconciliation, SharedLedger};
pub use tandem_core::{Digest, Record};
pub use tandem_sync::{SyncConfig, SyncEvent};
