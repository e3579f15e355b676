//! Proptest generators for property-based testing.

use proptest::prelude::*;

use tandem_core::Record;

/// Generate any operator payload.
pub fn payload() -> impl Strategy<Value = i64> {
    any::<i64>()
}

/// Generate a printable timestamp string.
///
/// Timestamps are advisory and never parsed, so generation covers
/// arbitrary printable ASCII rather than well-formed dates.
pub fn timestamp() -> impl Strategy<Value = String> {
    "[ -~]{0,32}".prop_map(String::from)
}

/// Parameters that fully determine a chain.
#[derive(Debug, Clone)]
pub struct ChainParams {
    pub genesis_timestamp: String,
    /// Payload and timestamp for each record after genesis.
    pub entries: Vec<(i64, String)>,
}

impl Arbitrary for ChainParams {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        (
            timestamp(),
            prop::collection::vec((payload(), timestamp()), 0..8),
        )
            .prop_map(|(genesis_timestamp, entries)| ChainParams {
                genesis_timestamp,
                entries,
            })
            .boxed()
    }
}

/// Build the chain a node would grow from these parameters.
pub fn chain_from_params(params: &ChainParams) -> Vec<Record> {
    let mut records = vec![Record::genesis(params.genesis_timestamp.clone())];
    for (payload, timestamp) in &params.entries {
        let next = Record::next(&records[records.len() - 1], *payload, timestamp.clone());
        records.push(next);
    }
    records
}

/// Generate a valid chain of up to `max_entries` records after genesis.
pub fn chain(max_entries: usize) -> impl Strategy<Value = Vec<Record>> {
    (
        timestamp(),
        prop::collection::vec((payload(), timestamp()), 0..=max_entries),
    )
        .prop_map(|(genesis_timestamp, entries)| {
            chain_from_params(&ChainParams {
                genesis_timestamp,
                entries,
            })
        })
}
