//! Timestamp source for new records.

use chrono::Utc;

/// Source of record timestamps.
///
/// Timestamps are advisory strings: they ride along in the digest preimage
/// but are never validated for format or monotonicity. The seam exists so
/// tests can pin them.
pub trait Clock: Send + Sync {
    /// The current moment, rendered as a record timestamp.
    fn now(&self) -> String;
}

/// RFC 3339 timestamps from the system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> String {
        Utc::now().to_rfc3339()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_clock_emits_rfc3339() {
        let stamp = SystemClock.now();
        assert!(chrono::DateTime::parse_from_rfc3339(&stamp).is_ok());
    }
}
