//! Membership-gated governance engine.
//!
//! Accounts buy a membership with a one-time fee, members submit
//! proposals carrying a batch of external calls, votes arrive as
//! off-line-signed ballots (individually or in bulk), and a proposal
//! that wins its vote executes exactly once after a timelock delay.
//!
//! All state lives in [`GovernanceEngine`]; every transition is a
//! synchronous, deterministic function of the engine state and a
//! caller-supplied clock.

pub mod engine;
pub mod error;
pub mod events;
pub mod executor;
pub mod membership;
pub mod proposal;
pub mod votes;

pub use engine::GovernanceEngine;
pub use error::GovernanceError;
pub use events::GovernanceEvent;
pub use executor::{CallExecutor, CallFailure};
pub use membership::MembershipLedger;
pub use proposal::{Proposal, ProposalCall, ProposalState, VoteTally};
pub use votes::{VoteRecord, VoteStatus};
