//! The hash-chained ledger record.

use serde::{Deserialize, Serialize};

use crate::digest::{hex_or_empty, Digest};

/// Payload carried by the genesis record.
pub const GENESIS_PAYLOAD: i64 = 0;

/// One entry in the replicated ledger.
///
/// The wire spellings of the fields are fixed by the frame format:
/// `position`, `timestamp`, `payload`, `hash`, `previousHash`. Decoding is
/// strict: unknown fields and wrong types are rejected.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Record {
    /// Zero-based height in the ledger; successors increase by exactly one.
    pub position: u64,

    /// Creation time as produced by the node clock. Advisory only: never
    /// validated for format or monotonicity, but part of the digest
    /// preimage.
    pub timestamp: String,

    /// Operator-entered measurement. Any `i64` is acceptable.
    pub payload: i64,

    /// SHA-256 over this record's position, timestamp, payload, and
    /// previous hash.
    pub hash: Digest,

    /// Digest of the predecessor record; `None` only for genesis.
    #[serde(with = "hex_or_empty")]
    pub previous_hash: Option<Digest>,
}

impl Record {
    /// Build the genesis record: position 0, fixed payload, no predecessor.
    pub fn genesis(timestamp: impl Into<String>) -> Self {
        Self::build(0, timestamp.into(), GENESIS_PAYLOAD, None)
    }

    /// Build the successor of `tip` carrying `payload`.
    ///
    /// Pure construction: the result is not validated or appended here.
    pub fn next(tip: &Record, payload: i64, timestamp: impl Into<String>) -> Self {
        Self::build(tip.position + 1, timestamp.into(), payload, Some(tip.hash))
    }

    fn build(
        position: u64,
        timestamp: String,
        payload: i64,
        previous_hash: Option<Digest>,
    ) -> Self {
        let hash = digest_fields(position, &timestamp, payload, previous_hash.as_ref());
        Self {
            position,
            timestamp,
            payload,
            hash,
            previous_hash,
        }
    }

    /// Recompute the digest from this record's own fields.
    ///
    /// Equal to `self.hash` iff the record is untampered.
    pub fn computed_hash(&self) -> Digest {
        digest_fields(
            self.position,
            &self.timestamp,
            self.payload,
            self.previous_hash.as_ref(),
        )
    }

    /// True for the fixed index-0 shape: position 0 and no predecessor.
    pub fn is_genesis(&self) -> bool {
        self.position == 0 && self.previous_hash.is_none()
    }
}

// Preimage: decimal position ++ timestamp ++ decimal payload ++ lowercase
// hex previous hash (empty for genesis). Fixed; both peers must derive
// identical bytes for identical records.
fn digest_fields(
    position: u64,
    timestamp: &str,
    payload: i64,
    previous_hash: Option<&Digest>,
) -> Digest {
    let prev_hex = previous_hash.map(Digest::to_hex).unwrap_or_default();
    let preimage = format!("{position}{timestamp}{payload}{prev_hex}");
    Digest::hash(preimage.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_genesis_shape() {
        let genesis = Record::genesis("2026-01-01T00:00:00Z");
        assert_eq!(genesis.position, 0);
        assert_eq!(genesis.payload, GENESIS_PAYLOAD);
        assert_eq!(genesis.previous_hash, None);
        assert_eq!(genesis.hash, genesis.computed_hash());
        assert!(genesis.is_genesis());
    }

    #[test]
    fn test_next_links_to_tip() {
        let genesis = Record::genesis("t0");
        let record = Record::next(&genesis, 72, "t1");

        assert_eq!(record.position, 1);
        assert_eq!(record.payload, 72);
        assert_eq!(record.previous_hash, Some(genesis.hash));
        assert_eq!(record.hash, record.computed_hash());
        assert!(!record.is_genesis());
    }

    #[test]
    fn test_digest_covers_every_field() {
        let genesis = Record::genesis("t0");
        let base = Record::next(&genesis, 72, "t1");

        let other_payload = Record::next(&genesis, 73, "t1");
        assert_ne!(base.hash, other_payload.hash);

        let other_timestamp = Record::next(&genesis, 72, "t2");
        assert_ne!(base.hash, other_timestamp.hash);

        let other_parent = Record::next(&base, 72, "t1");
        assert_ne!(base.hash, other_parent.hash);
    }

    #[test]
    fn test_digest_detects_tamper() {
        let genesis = Record::genesis("t0");
        let mut record = Record::next(&genesis, 72, "t1");

        record.payload = 180;
        assert_ne!(record.hash, record.computed_hash());
    }

    #[test]
    fn test_negative_payload_digests() {
        let genesis = Record::genesis("t0");
        let record = Record::next(&genesis, -40, "t1");
        assert_eq!(record.hash, record.computed_hash());
    }

    #[test]
    fn test_wire_field_names() {
        let genesis = Record::genesis("2026-01-01T00:00:00Z");
        let value = serde_json::to_value(&genesis).unwrap();

        assert_eq!(value["position"], 0);
        assert_eq!(value["timestamp"], "2026-01-01T00:00:00Z");
        assert_eq!(value["payload"], 0);
        assert_eq!(value["hash"], genesis.hash.to_hex());
        assert_eq!(value["previousHash"], "");
        assert_eq!(value.as_object().unwrap().len(), 5);
    }

    #[test]
    fn test_wire_previous_hash_rendering() {
        let genesis = Record::genesis("t0");
        let record = Record::next(&genesis, 72, "t1");
        let value = serde_json::to_value(&record).unwrap();

        assert_eq!(value["previousHash"], genesis.hash.to_hex());
    }

    #[test]
    fn test_json_roundtrip() {
        let genesis = Record::genesis("t0");
        let record = Record::next(&genesis, 72, "t1");

        let json = serde_json::to_string(&record).unwrap();
        let back: Record = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn test_decode_rejects_unknown_fields() {
        let genesis = Record::genesis("t0");
        let mut value = serde_json::to_value(&genesis).unwrap();
        value["nonce"] = serde_json::json!(7);

        let result: Result<Record, _> = serde_json::from_value(value);
        assert!(result.is_err());
    }

    #[test]
    fn test_decode_rejects_wrong_types() {
        let genesis = Record::genesis("t0");
        let mut value = serde_json::to_value(&genesis).unwrap();
        value["payload"] = serde_json::json!("72");

        let result: Result<Record, _> = serde_json::from_value(value);
        assert!(result.is_err());
    }
}
