//! Ledger renderings for the operator display.
//!
//! Two views, used at two moments: a green indented-JSON view when an
//! inbound snapshot replaces the ledger, and a structural dump after every
//! local append attempt. Observability only, never parsed back.

use colored::Colorize;

use tandem_core::Record;

/// Indented JSON of the full ledger, colored green.
///
/// Shown when an adopted peer snapshot replaces the local records.
pub fn adopted(records: &[Record]) -> String {
    let json = serde_json::to_string_pretty(records)
        .unwrap_or_else(|e| format!("<render failed: {e}>"));
    json.green().to_string()
}

/// Verbose structural dump of the full ledger, every field of every
/// record.
///
/// Shown after every local input attempt, whether or not the append
/// succeeded.
pub fn dump(records: &[Record]) -> String {
    format!("{records:#?}")
}
