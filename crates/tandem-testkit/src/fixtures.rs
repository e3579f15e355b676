//! Test fixtures and helpers.
//!
//! Common setup code for integration tests: deterministic chains, a fixed
//! clock, scripted operator I/O, and in-memory peer links.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::io::{self, DuplexStream};

use tandem::{Clock, OperatorDisplay, OperatorInput};
use tandem_chain::{Ledger, SharedLedger};
use tandem_core::Record;

/// Timestamp stamped on every fixture record.
pub const FIXED_STAMP: &str = "2026-01-14T12:00:00Z";

/// A deterministic valid chain of `len` records, genesis included.
///
/// Payloads follow `position * 7` and every record carries
/// [`FIXED_STAMP`], so two calls produce identical chains. Fixtures built
/// this way share a genesis with a node using [`FixedClock::default`],
/// which lets them adopt each other's snapshots.
pub fn sample_chain(len: usize) -> Vec<Record> {
    assert!(len >= 1, "a chain holds at least its genesis");
    let mut records = vec![Record::genesis(FIXED_STAMP)];
    for position in 1..len {
        let next = Record::next(&records[position - 1], position as i64 * 7, FIXED_STAMP);
        records.push(next);
    }
    records
}

/// [`sample_chain`] with the payload at index `at` bumped and the digest
/// left stale, so full verification fails at that record.
pub fn tampered_chain(len: usize, at: usize) -> Vec<Record> {
    let mut records = sample_chain(len);
    records[at].payload += 1;
    records
}

/// A shared ledger already holding [`sample_chain`]`(len)`.
pub fn sample_ledger(len: usize) -> SharedLedger {
    let mut records = sample_chain(len).into_iter();
    let mut ledger = Ledger::new(records.next().expect("chain holds at least genesis"));
    for record in records {
        ledger.try_append(record).expect("sample chain links");
    }
    SharedLedger::new(ledger)
}

/// An in-memory duplex byte stream pair standing in for a peer socket.
///
/// Attach one end to each node; what one writes the other reads.
pub fn link() -> (DuplexStream, DuplexStream) {
    io::duplex(64 * 1024)
}

/// Clock frozen at a single instant.
#[derive(Debug, Clone)]
pub struct FixedClock {
    stamp: String,
}

impl FixedClock {
    pub fn new(stamp: impl Into<String>) -> Self {
        Self {
            stamp: stamp.into(),
        }
    }
}

impl Default for FixedClock {
    /// Frozen at [`FIXED_STAMP`], matching the fixture chains.
    fn default() -> Self {
        Self::new(FIXED_STAMP)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> String {
        self.stamp.clone()
    }
}

/// Operator input that replays a fixed script, then reports end of input.
pub struct ScriptedInput {
    lines: VecDeque<String>,
}

impl ScriptedInput {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }
}

#[async_trait]
impl OperatorInput for ScriptedInput {
    async fn read_line(&mut self) -> io::Result<Option<String>> {
        Ok(self.lines.pop_front())
    }
}

/// Display that captures everything it is asked to show.
#[derive(Clone, Default)]
pub struct CaptureDisplay {
    lines: Arc<Mutex<Vec<String>>>,
}

impl CaptureDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything shown so far, in order.
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().expect("display lock poisoned").clone()
    }

    /// True if any shown line contains `needle`.
    pub fn saw(&self, needle: &str) -> bool {
        self.lines().iter().any(|line| line.contains(needle))
    }
}

impl OperatorDisplay for CaptureDisplay {
    fn show(&self, text: &str) {
        self.lines
            .lock()
            .expect("display lock poisoned")
            .push(text.to_string());
    }
}

/// Route traced output into the test harness's captured writer.
///
/// Safe to call from every test; only the first call installs a
/// subscriber.
pub fn init_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing_subscriber::filter::LevelFilter::DEBUG)
        .with_test_writer()
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use tandem_chain::verify_records;

    #[test]
    fn test_sample_chain_verifies() {
        let records = sample_chain(5);
        assert_eq!(records.len(), 5);
        assert!(verify_records(&records).is_ok());
        assert_eq!(records[3].payload, 21);
    }

    #[test]
    fn test_sample_chains_share_prefixes() {
        let short = sample_chain(2);
        let long = sample_chain(6);
        assert_eq!(short[..], long[..2]);
    }

    #[test]
    fn test_tampered_chain_fails_verification() {
        let records = tampered_chain(5, 2);
        assert!(verify_records(&records).is_err());
    }

    #[tokio::test]
    async fn test_sample_ledger_matches_chain() {
        let ledger = sample_ledger(4);
        assert_eq!(ledger.snapshot().await, sample_chain(4));
    }

    #[tokio::test]
    async fn test_scripted_input_drains() {
        let mut input = ScriptedInput::new(["70", "85"]);
        assert_eq!(input.read_line().await.unwrap(), Some("70".into()));
        assert_eq!(input.read_line().await.unwrap(), Some("85".into()));
        assert_eq!(input.read_line().await.unwrap(), None);
    }

    #[test]
    fn test_capture_display_records_in_order() {
        let display = CaptureDisplay::new();
        display.show("first");
        display.show("second");

        assert_eq!(display.lines(), vec!["first", "second"]);
        assert!(display.saw("sec"));
        assert!(!display.saw("third"));
    }
}
