//! SHA-256 digest newtype and its wire rendering.
//!
//! On the wire a digest is a 64-character lowercase hex string; an absent
//! previous hash (genesis only) is the empty string. The [`hex_or_empty`]
//! serde adapter handles that mapping.

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use sha2::{Digest as _, Sha256};
use std::fmt;

use crate::error::DigestError;

/// A 32-byte SHA-256 digest.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Digest(pub [u8; 32]);

impl Digest {
    /// Compute the SHA-256 digest of data.
    pub fn hash(data: &[u8]) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(data);
        Self(hasher.finalize().into())
    }

    /// Create from raw bytes.
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Get raw bytes.
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Convert to the wire rendering: 64 chars of lowercase hex.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Parse from a 64-char hex string.
    pub fn from_hex(s: &str) -> Result<Self, DigestError> {
        if s.len() != 64 {
            return Err(DigestError::Length(s.len()));
        }
        let bytes = hex::decode(s)?;
        let mut arr = [0u8; 32];
        arr.copy_from_slice(&bytes);
        Ok(Self(arr))
    }
}

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digest({}...)", &self.to_hex()[..8])
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; 32]> for Digest {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

impl Serialize for Digest {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Digest {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Digest::from_hex(&s).map_err(de::Error::custom)
    }
}

/// Serde adapter for previous-hash fields: hex when present, `""` for
/// genesis.
pub mod hex_or_empty {
    use serde::{de, Deserialize, Deserializer, Serializer};

    use super::Digest;

    pub fn serialize<S>(value: &Option<Digest>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(digest) => serializer.serialize_str(&digest.to_hex()),
            None => serializer.serialize_str(""),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Digest>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        if s.is_empty() {
            return Ok(None);
        }
        Digest::from_hex(&s).map(Some).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_deterministic() {
        let h1 = Digest::hash(b"test");
        let h2 = Digest::hash(b"test");
        assert_eq!(h1, h2);

        let h3 = Digest::hash(b"different");
        assert_ne!(h1, h3);
    }

    #[test]
    fn test_hex_roundtrip() {
        let digest = Digest::hash(b"roundtrip");
        let hex = digest.to_hex();
        assert_eq!(hex.len(), 64);
        assert_eq!(Digest::from_hex(&hex).unwrap(), digest);
    }

    #[test]
    fn test_from_hex_rejects_bad_length() {
        let result = Digest::from_hex("abcd");
        assert!(matches!(result, Err(DigestError::Length(4))));
    }

    #[test]
    fn test_from_hex_rejects_non_hex() {
        let s = "zz".repeat(32);
        assert!(matches!(Digest::from_hex(&s), Err(DigestError::Hex(_))));
    }

    #[test]
    fn test_serde_hex_string() {
        let digest = Digest::from_bytes([0x5a; 32]);
        let json = serde_json::to_string(&digest).unwrap();
        assert_eq!(json, format!("\"{}\"", "5a".repeat(32)));

        let back: Digest = serde_json::from_str(&json).unwrap();
        assert_eq!(back, digest);
    }

    #[test]
    fn test_serde_rejects_truncated_hex() {
        let result: Result<Digest, _> = serde_json::from_str("\"5a5a\"");
        assert!(result.is_err());
    }
}
