//! Fundamental types for the Collector governance protocol.
//!
//! This crate defines the types shared by every other crate in the
//! workspace: account addresses, native-currency amounts, proposal ids,
//! timestamps, Ed25519 key material, the ballot signing domain, and the
//! governance parameters.

pub mod address;
pub mod amount;
pub mod domain;
pub mod id;
pub mod keys;
pub mod network;
pub mod params;
pub mod time;
pub mod vote;

pub use address::Address;
pub use amount::{Amount, UNIT};
pub use domain::BallotDomain;
pub use id::ProposalId;
pub use keys::{KeyPair, PrivateKey, PublicKey, Signature};
pub use network::NetworkId;
pub use params::GovernanceParams;
pub use time::Timestamp;
pub use vote::VoteSupport;
