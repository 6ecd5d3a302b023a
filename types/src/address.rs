//! Account address type with `coll_` prefix rendering.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A 20-byte account address.
///
/// Derived from an Ed25519 public key as the trailing 20 bytes of its
/// Blake2b-256 hash (see `collector_crypto::derive_address`). The all-zero
/// address is the null identity: signature recovery never legitimately
/// yields it, and nothing can be credited to it.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Address([u8; 20]);

impl Address {
    /// The null identity.
    pub const ZERO: Self = Self([0u8; 20]);

    /// Display prefix for all Collector addresses.
    pub const PREFIX: &'static str = "coll_";

    pub fn new(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 20]
    }

    /// Parse a `coll_`-prefixed, 40-hex-char address string.
    ///
    /// Returns `None` on a missing prefix, wrong length, or non-hex input.
    pub fn parse(s: &str) -> Option<Self> {
        let encoded = s.strip_prefix(Self::PREFIX)?;
        if encoded.len() != 40 {
            return None;
        }
        let mut bytes = [0u8; 20];
        for (i, chunk) in encoded.as_bytes().chunks(2).enumerate() {
            let hi = hex::decode_digit(chunk[0])?;
            let lo = hex::decode_digit(chunk[1])?;
            bytes[i] = (hi << 4) | lo;
        }
        Some(Self(bytes))
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", Self::PREFIX, hex::encode(&self.0))
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address(coll_{}..)", hex::encode(&self.0[..4]))
    }
}

// Inline hex helpers to keep this crate dependency-free beyond serde.
mod hex {
    pub fn encode(bytes: &[u8]) -> String {
        bytes.iter().map(|b| format!("{:02x}", b)).collect()
    }

    pub fn decode_digit(c: u8) -> Option<u8> {
        match c {
            b'0'..=b'9' => Some(c - b'0'),
            b'a'..=b'f' => Some(c - b'a' + 10),
            b'A'..=b'F' => Some(c - b'A' + 10),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_parse_roundtrip() {
        let addr = Address::new([0xAB; 20]);
        let rendered = addr.to_string();
        assert!(rendered.starts_with("coll_"));
        assert_eq!(rendered.len(), 5 + 40);
        assert_eq!(Address::parse(&rendered), Some(addr));
    }

    #[test]
    fn zero_is_zero() {
        assert!(Address::ZERO.is_zero());
        assert!(!Address::new([1; 20]).is_zero());
    }

    #[test]
    fn parse_rejects_bad_input() {
        assert_eq!(Address::parse("coll_"), None);
        assert_eq!(Address::parse("coll_zz"), None);
        assert_eq!(
            Address::parse("brst_abababababababababababababababababababab"),
            None
        );
        // 39 hex chars
        assert_eq!(
            Address::parse("coll_ababababababababababababababababababab_"),
            None
        );
    }

    #[test]
    fn parse_accepts_uppercase_hex() {
        let addr = Address::new([0xCD; 20]);
        let upper = format!("coll_{}", "CD".repeat(20));
        assert_eq!(Address::parse(&upper), Some(addr));
    }
}
