//! The ledger value: a genesis-rooted, hash-linked record sequence.

use tandem_core::{check_link, LinkError, Record};

use crate::error::ChainError;

/// Outcome of reconciling an inbound snapshot against the local ledger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reconciliation {
    /// The candidate was strictly longer; the ledger now holds its records.
    Adopted { length: usize },
    /// The candidate was equal or shorter; the ledger is unchanged.
    Retained { length: usize },
}

/// An append-only sequence of hash-linked records, rooted at genesis.
///
/// Adjacency invariant: positions increase by exactly one and each record
/// embeds the digest of its predecessor. A `Ledger` is a plain value;
/// concurrent tasks share one through [`SharedLedger`](crate::SharedLedger).
#[derive(Debug, Clone)]
pub struct Ledger {
    records: Vec<Record>,
}

impl Ledger {
    /// Create a ledger holding only `genesis`.
    pub fn new(genesis: Record) -> Self {
        Self {
            records: vec![genesis],
        }
    }

    /// Number of records, genesis included.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The most recent record.
    pub fn tip(&self) -> &Record {
        // Non-empty by construction: rooted at genesis and only ever grown
        // or swapped for a longer sequence.
        self.records.last().expect("ledger holds at least genesis")
    }

    /// All records, oldest first.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Validate `record` against the tip and append it.
    ///
    /// On rejection the ledger is unchanged and the error names the
    /// failing link check.
    pub fn try_append(&mut self, record: Record) -> Result<(), LinkError> {
        check_link(&record, self.tip())?;
        self.records.push(record);
        Ok(())
    }

    /// Longer-wins reconciliation: adopt `candidate` wholesale iff it is
    /// strictly longer than the current sequence.
    ///
    /// Total: never fails. Ties and shorter candidates retain the local
    /// records untouched.
    pub fn reconcile(&mut self, candidate: Vec<Record>) -> Reconciliation {
        if candidate.len() > self.records.len() {
            self.records = candidate;
            Reconciliation::Adopted {
                length: self.records.len(),
            }
        } else {
            Reconciliation::Retained {
                length: self.records.len(),
            }
        }
    }

    /// Re-validate the whole sequence: genesis shape plus every adjacent
    /// link, digests recomputed.
    pub fn verify(&self) -> Result<(), ChainError> {
        verify_records(&self.records)
    }
}

/// Validate an arbitrary record sequence as a complete chain.
///
/// Requires a non-empty sequence whose first record is genesis-shaped
/// (position 0, no predecessor, digest matching its own fields) and whose
/// every adjacent pair passes [`check_link`].
pub fn verify_records(records: &[Record]) -> Result<(), ChainError> {
    let genesis = records.first().ok_or(ChainError::Empty)?;

    if genesis.position != 0 {
        return Err(ChainError::BadGenesis(format!(
            "expected position 0, got {}",
            genesis.position
        )));
    }
    if genesis.previous_hash.is_some() {
        return Err(ChainError::BadGenesis("unexpected previous hash".into()));
    }
    if genesis.computed_hash() != genesis.hash {
        return Err(ChainError::BadGenesis(
            "digest does not match fields".into(),
        ));
    }

    for pair in records.windows(2) {
        check_link(&pair[1], &pair[0]).map_err(|source| ChainError::BrokenLink {
            position: pair[1].position,
            source,
        })?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tandem_core::Digest;

    fn make_chain(len: usize) -> Vec<Record> {
        let mut records = vec![Record::genesis("t0")];
        for i in 1..len {
            let next = Record::next(records.last().unwrap(), 60 + i as i64, format!("t{i}"));
            records.push(next);
        }
        records
    }

    #[test]
    fn test_new_holds_genesis() {
        let ledger = Ledger::new(Record::genesis("t0"));
        assert_eq!(ledger.len(), 1);
        assert!(ledger.tip().is_genesis());
        assert!(ledger.verify().is_ok());
    }

    #[test]
    fn test_try_append_grows_chain() {
        let mut ledger = Ledger::new(Record::genesis("t0"));
        let record = Record::next(ledger.tip(), 72, "t1");

        ledger.try_append(record.clone()).unwrap();
        assert_eq!(ledger.len(), 2);
        assert_eq!(ledger.tip(), &record);
        assert!(ledger.verify().is_ok());
    }

    #[test]
    fn test_try_append_rejects_stale_candidate() {
        let mut ledger = Ledger::new(Record::genesis("t0"));
        let first = Record::next(ledger.tip(), 72, "t1");
        let stale = Record::next(ledger.tip(), 85, "t1b");

        ledger.try_append(first).unwrap();

        // Built against the old tip; position no longer advances.
        let result = ledger.try_append(stale);
        assert!(matches!(result, Err(LinkError::PositionMismatch { .. })));
        assert_eq!(ledger.len(), 2);
    }

    #[test]
    fn test_reconcile_adopts_strictly_longer() {
        let mut ledger = Ledger::new(Record::genesis("t0"));
        let candidate = make_chain(3);

        let outcome = ledger.reconcile(candidate.clone());
        assert_eq!(outcome, Reconciliation::Adopted { length: 3 });
        assert_eq!(ledger.records(), &candidate[..]);
    }

    #[test]
    fn test_reconcile_retains_on_equal_length() {
        let local = make_chain(3);
        let mut ledger = Ledger::new(Record::genesis("t0"));
        ledger.reconcile(local.clone());

        // Same length, different contents: strictly-longer means no swap.
        let mut rival = make_chain(3);
        rival[2].payload = 999;

        let outcome = ledger.reconcile(rival);
        assert_eq!(outcome, Reconciliation::Retained { length: 3 });
        assert_eq!(ledger.records(), &local[..]);
    }

    #[test]
    fn test_reconcile_retains_on_shorter() {
        let mut ledger = Ledger::new(Record::genesis("t0"));
        ledger.reconcile(make_chain(4));

        let outcome = ledger.reconcile(make_chain(2));
        assert_eq!(outcome, Reconciliation::Retained { length: 4 });
        assert_eq!(ledger.len(), 4);
    }

    #[test]
    fn test_reconcile_empty_candidate_is_noop() {
        let mut ledger = Ledger::new(Record::genesis("t0"));
        let outcome = ledger.reconcile(Vec::new());
        assert_eq!(outcome, Reconciliation::Retained { length: 1 });
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn test_verify_accepts_valid_chain() {
        assert!(verify_records(&make_chain(5)).is_ok());
    }

    #[test]
    fn test_verify_rejects_empty() {
        assert!(matches!(verify_records(&[]), Err(ChainError::Empty)));
    }

    #[test]
    fn test_verify_rejects_nonzero_genesis_position() {
        // A chain missing its genesis: starts at position 1.
        let chain = make_chain(3);
        let result = verify_records(&chain[1..]);
        assert!(matches!(result, Err(ChainError::BadGenesis(_))));
    }

    #[test]
    fn test_verify_rejects_tampered_genesis() {
        let mut chain = make_chain(3);
        chain[0].payload = 7;

        let result = verify_records(&chain);
        assert!(matches!(result, Err(ChainError::BadGenesis(_))));
    }

    #[test]
    fn test_verify_rejects_broken_middle_link() {
        let mut chain = make_chain(5);
        chain[2].previous_hash = Some(Digest::from_bytes([0xee; 32]));

        let result = verify_records(&chain);
        assert!(matches!(
            result,
            Err(ChainError::BrokenLink { position: 2, .. })
        ));
    }

    #[test]
    fn test_verify_rejects_tampered_middle_payload() {
        let mut chain = make_chain(5);
        chain[3].payload = -1;

        let result = verify_records(&chain);
        assert!(matches!(
            result,
            Err(ChainError::BrokenLink { position: 3, .. })
        ));
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn test_reconcile_is_length_monotonic(
                local in 1usize..6,
                candidate in 0usize..9,
            ) {
                let mut ledger = Ledger::new(Record::genesis("t0"));
                ledger.reconcile(make_chain(local));
                let before = ledger.len();

                ledger.reconcile(make_chain(candidate));

                prop_assert!(ledger.len() >= before);
                prop_assert_eq!(ledger.len(), before.max(candidate));
            }

            #[test]
            fn test_generated_chains_verify(len in 1usize..12) {
                prop_assert!(verify_records(&make_chain(len)).is_ok());
            }
        }
    }
}
