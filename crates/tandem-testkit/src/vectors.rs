//! Golden test vectors for deterministic verification.
//!
//! Two peers only converge if they derive identical digests for identical
//! records, so the digest preimage is pinned here as concrete
//! input/output pairs. A drift in the preimage spelling shows up as a
//! hash mismatch against these vectors rather than as a silent adoption
//! failure between peers.

use tandem_core::Record;

/// A golden test vector: one record's inputs and its expected digests.
#[derive(Debug, Clone)]
pub struct GoldenVector {
    /// Human-readable name for the vector.
    pub name: &'static str,
    /// Zero-based height in the chain.
    pub position: u64,
    /// Timestamp exactly as digested.
    pub timestamp: &'static str,
    /// Operator payload.
    pub payload: i64,
    /// Expected predecessor digest (hex), empty for genesis.
    pub expected_previous: &'static str,
    /// Expected digest of this record (hex).
    pub expected_hash: &'static str,
}

/// Get all golden test vectors. In order they form one valid chain.
pub fn all_vectors() -> Vec<GoldenVector> {
    vec![
        GoldenVector {
            name: "genesis",
            position: 0,
            timestamp: "2026-01-14T12:00:00Z",
            payload: 0,
            expected_previous: "",
            expected_hash: "6ba8054d7ff21239e2bffa76c2b8844abefe42bf2e273f46486c8e17b8f7f586",
        },
        GoldenVector {
            name: "first operator record",
            position: 1,
            timestamp: "2026-01-14T12:05:00Z",
            payload: 70,
            expected_previous: "6ba8054d7ff21239e2bffa76c2b8844abefe42bf2e273f46486c8e17b8f7f586",
            expected_hash: "d0ad88fc9c614130dfe65bd9320b73e0639c20ba4ae0ba9d22f1f01638431400",
        },
        GoldenVector {
            name: "negative payload",
            position: 2,
            timestamp: "2026-01-14T12:10:00Z",
            payload: -3,
            expected_previous: "d0ad88fc9c614130dfe65bd9320b73e0639c20ba4ae0ba9d22f1f01638431400",
            expected_hash: "3a782afb0717d351f975e2db8ab3b37d564328ceff1c7d948dd415e51f5adfed",
        },
    ]
}

/// Build the chain the vectors describe, through the real constructors.
pub fn chain_from_vectors() -> Vec<Record> {
    let vectors = all_vectors();
    let mut records = vec![Record::genesis(vectors[0].timestamp)];
    for vector in &vectors[1..] {
        let next = Record::next(&records[records.len() - 1], vector.payload, vector.timestamp);
        records.push(next);
    }
    records
}

/// Verify every vector against the chain the constructors produce.
///
/// Returns `(name, matches, actual_hex)` per vector.
pub fn verify_all_vectors() -> Vec<(String, bool, String)> {
    let records = chain_from_vectors();
    all_vectors()
        .iter()
        .zip(&records)
        .map(|(vector, record)| {
            let actual = record.hash.to_hex();
            let matches = actual == vector.expected_hash;
            (vector.name.to_string(), matches, actual)
        })
        .collect()
}
