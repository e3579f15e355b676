//! The shared-ledger handle: one exclusive lock over the ledger value.

use std::sync::Arc;

use tokio::sync::Mutex;

use tandem_core::{LinkError, Record};

use crate::ledger::{Ledger, Reconciliation};

/// Cloneable handle to the process-wide ledger.
///
/// Every task that writes the ledger, or reads it to decide a write, goes
/// through one of these methods. Each method body is a single critical
/// section under the one exclusive lock; no lock is ever held across an
/// await.
#[derive(Clone)]
pub struct SharedLedger {
    inner: Arc<Mutex<Ledger>>,
}

impl SharedLedger {
    /// Wrap a ledger in a shared handle.
    pub fn new(ledger: Ledger) -> Self {
        Self {
            inner: Arc::new(Mutex::new(ledger)),
        }
    }

    /// A fresh ledger rooted at a genesis record with the given timestamp.
    pub fn with_genesis(timestamp: impl Into<String>) -> Self {
        Self::new(Ledger::new(Record::genesis(timestamp)))
    }

    /// Construct, validate, and append the successor record carrying
    /// `payload`, all inside one critical section.
    ///
    /// Construction and validation see the same tip, so no concurrent
    /// append can invalidate the candidate between the two. On rejection
    /// the candidate is dropped and the error names the failing check.
    pub async fn append(
        &self,
        payload: i64,
        timestamp: impl Into<String>,
    ) -> Result<Record, LinkError> {
        let mut ledger = self.inner.lock().await;
        let record = Record::next(ledger.tip(), payload, timestamp);
        ledger.try_append(record.clone())?;
        Ok(record)
    }

    /// Consistent snapshot of the full sequence, oldest first.
    ///
    /// The clone happens under the lock; callers never observe a torn mix
    /// of records from different ledger states.
    pub async fn snapshot(&self) -> Vec<Record> {
        self.inner.lock().await.records().to_vec()
    }

    /// Longer-wins compare-and-swap: the length comparison and the
    /// wholesale replacement happen in one critical section.
    pub async fn adopt_if_longer(&self, candidate: Vec<Record>) -> Reconciliation {
        self.inner.lock().await.reconcile(candidate)
    }

    /// Clone of the most recent record.
    pub async fn tip(&self) -> Record {
        self.inner.lock().await.tip().clone()
    }

    /// Current length, genesis included.
    pub async fn len(&self) -> usize {
        self.inner.lock().await.len()
    }
}
