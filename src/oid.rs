//! Content identifiers: SHA-256 digests of raw input bytes

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use sha2::{Digest, Sha256};
use std::fmt;

/// A 32-byte SHA-256 digest identifying a blob of content.
///
/// Identical byte content always produces the same `Oid`; any byte
/// difference produces a different one (standard cryptographic-digest
/// assumption). Serialized as the 64-character lowercase hex string.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Oid([u8; 32]);

impl Oid {
    /// Hash arbitrary data
    pub fn digest(data: &[u8]) -> Self {
        Oid(Sha256::digest(data).into())
    }

    /// Create an oid from raw digest bytes
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Oid(bytes)
    }

    /// Get the raw digest bytes
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Convert to a lowercase hex string
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Parse from a hex string
    pub fn from_hex(s: &str) -> Result<Self, hex::FromHexError> {
        let bytes = hex::decode(s)?;
        if bytes.len() != 32 {
            return Err(hex::FromHexError::InvalidStringLength);
        }
        let mut arr = [0u8; 32];
        arr.copy_from_slice(&bytes);
        Ok(Oid(arr))
    }

    /// Get a short prefix for display (first 7 chars, like git)
    pub fn short(&self) -> String {
        self.to_hex()[..7].to_string()
    }
}

impl fmt::Display for Oid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl fmt::Debug for Oid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Oid({})", self.short())
    }
}

impl AsRef<[u8]> for Oid {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl Serialize for Oid {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Oid {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Oid::from_hex(&s).map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digest_deterministic() {
        let h1 = Oid::digest(b"hello");
        let h2 = Oid::digest(b"hello");
        let h3 = Oid::digest(b"world");

        assert_eq!(h1, h2);
        assert_ne!(h1, h3);
    }

    #[test]
    fn test_digest_sensitivity() {
        // A single flipped byte must change the digest
        let h1 = Oid::digest(b"hello world");
        let h2 = Oid::digest(b"hello worle");
        assert_ne!(h1, h2);
    }

    #[test]
    fn test_known_digest() {
        let oid = Oid::digest(b"hello world");
        assert_eq!(
            oid.to_hex(),
            "b94d27b9934d3e08a52e52d7da7dabfac484efe37a5380ee9088f7ace2efcde9"
        );
    }

    #[test]
    fn test_empty_input_digest() {
        let oid = Oid::digest(b"");
        assert_eq!(
            oid.to_hex(),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn test_hex_roundtrip() {
        let h1 = Oid::digest(b"test data");
        let hex = h1.to_hex();
        let h2 = Oid::from_hex(&hex).unwrap();
        assert_eq!(h1, h2);
    }

    #[test]
    fn test_from_hex_rejects_bad_length() {
        assert!(Oid::from_hex("abcd").is_err());
    }

    #[test]
    fn test_short() {
        let h = Oid::digest(b"test");
        assert_eq!(h.short().len(), 7);
    }

    #[test]
    fn test_serde_as_hex_string() {
        let oid = Oid::digest(b"hello world");
        let json = serde_json::to_string(&oid).unwrap();
        assert_eq!(
            json,
            "\"b94d27b9934d3e08a52e52d7da7dabfac484efe37a5380ee9088f7ace2efcde9\""
        );
        let back: Oid = serde_json::from_str(&json).unwrap();
        assert_eq!(oid, back);
    }
}
