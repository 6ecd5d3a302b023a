//! Cryptographic primitives for Collector governance.
//!
//! Ed25519 keys and signatures, Blake2b-256 hashing, address derivation,
//! and the ballot digest / signer recovery used by the vote aggregator.
//! Everything here is a pure function; admissibility decisions belong to
//! the governance engine.

pub mod address;
pub mod ballot;
pub mod hash;
pub mod keys;

pub use address::derive_address;
pub use ballot::{ballot_digest, recover_voter, sign_ballot, BallotSignature};
pub use hash::{blake2b_256, blake2b_256_multi};
pub use keys::{
    generate_keypair, keypair_from_seed, public_from_private, sign_message, verify_signature,
};
