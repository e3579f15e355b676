//! Frame codec: newline-delimited JSON snapshots.
//!
//! Each frame is one line of text terminated by `\n`, containing a JSON
//! array with a full ledger snapshot, oldest first. A line that is empty
//! or only whitespace is a heartbeat and carries nothing.

use bytes::Bytes;

use tandem_core::Record;

use crate::error::{Result, SyncError};

/// One decoded inbound line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Frame {
    /// Empty or whitespace-only line; ignored by receivers.
    Heartbeat,
    /// A full ledger snapshot, oldest first.
    Snapshot(Vec<Record>),
}

/// Encode a snapshot as a single newline-terminated frame.
///
/// The JSON is compact, so the frame never contains an interior newline.
pub fn encode_frame(records: &[Record]) -> Result<Bytes> {
    let mut buf = serde_json::to_vec(records).map_err(SyncError::Encode)?;
    buf.push(b'\n');
    Ok(Bytes::from(buf))
}

/// Decode one inbound line.
///
/// Strict: a non-heartbeat line must be exactly a record array with the
/// five known fields per record. Unknown fields, wrong types, and trailing
/// garbage are all malformed.
pub fn decode_frame(line: &str) -> Result<Frame> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Ok(Frame::Heartbeat);
    }
    let records = serde_json::from_str(trimmed).map_err(SyncError::MalformedFrame)?;
    Ok(Frame::Snapshot(records))
}
