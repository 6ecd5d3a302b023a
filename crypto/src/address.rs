//! Address derivation from public keys.
//!
//! An account address is the trailing 20 bytes of Blake2b-256 over the
//! Ed25519 public key. Deriving an address can therefore never produce
//! `Address::ZERO` for any key anyone actually holds — hitting it would
//! require a preimage of an all-zero hash suffix.

use collector_types::{Address, PublicKey};

/// Derive the account address for a public key.
pub fn derive_address(public_key: &PublicKey) -> Address {
    let hash = crate::blake2b_256(public_key.as_bytes());
    let mut bytes = [0u8; 20];
    bytes.copy_from_slice(&hash[12..]);
    Address::new(bytes)
}
