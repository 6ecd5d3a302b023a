//! Proposals and their derived lifecycle state.

use collector_types::{Address, Amount, ProposalId, Timestamp, VoteSupport};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One external call carried by a proposal.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ProposalCall {
    /// Account the call is dispatched against.
    pub target: Address,
    /// Native currency forwarded with the call.
    pub value: Amount,
    /// Human-readable function signature, e.g. `buyItem(uint256,uint256)`.
    pub signature: String,
    /// Opaque call payload, forwarded verbatim.
    pub calldata: Vec<u8>,
}

/// Running vote tallies for a proposal.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub struct VoteTally {
    pub for_votes: u64,
    pub against_votes: u64,
    pub abstain_votes: u64,
}

impl VoteTally {
    pub(crate) fn record(&mut self, support: VoteSupport) {
        match support {
            VoteSupport::For => self.for_votes += 1,
            VoteSupport::Against => self.against_votes += 1,
            VoteSupport::Abstain => self.abstain_votes += 1,
        }
    }

    /// Total ballots recorded, all positions.
    pub fn total(&self) -> u64 {
        self.for_votes + self.against_votes + self.abstain_votes
    }
}

/// Lifecycle states of a proposal.
///
/// Derived on every read from the clock, the stored timestamps, the
/// tallies, and the executed flag — never stored, so it cannot go stale.
/// `Defeated` and `Executed` are terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProposalState {
    /// Before the voting window opens.
    Pending,
    /// Voting window is open.
    Active,
    /// Window closed without a winning tally or quorum. Terminal.
    Defeated,
    /// Succeeded; waiting out the timelock delay.
    Queued,
    /// Timelock elapsed; may be executed.
    Executable,
    /// Calls performed. Terminal.
    Executed,
}

impl fmt::Display for ProposalState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Pending => "pending",
            Self::Active => "active",
            Self::Defeated => "defeated",
            Self::Queued => "queued",
            Self::Executable => "executable",
            Self::Executed => "executed",
        };
        f.write_str(s)
    }
}

/// A governance proposal: an ordered batch of external calls pending
/// community approval.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Proposal {
    pub id: ProposalId,
    pub proposer: Address,
    /// The call batch. Length is fixed at creation and always ≥ 1.
    pub calls: Vec<ProposalCall>,
    pub description: String,
    pub created_at: Timestamp,
    /// End of the voting window (`created_at` + voting duration).
    pub vote_end: Timestamp,
    /// Earliest execution time once succeeded (`vote_end` + timelock
    /// delay). Fixed at creation; meaningful only if the tally succeeds.
    pub queued_until: Timestamp,
    pub tally: VoteTally,
    pub executed: bool,
}

impl Proposal {
    /// Whether ballots are still admissible at `now`.
    pub fn voting_open(&self, now: Timestamp) -> bool {
        now < self.vote_end
    }

    /// Whether for-votes represent at least `quorum_bps` of the member
    /// count. Integer arithmetic in u128 so no realistic member count or
    /// tally can overflow.
    pub fn quorum_reached(&self, member_count: u64, quorum_bps: u32) -> bool {
        u128::from(self.tally.for_votes) * 10_000
            >= u128::from(member_count) * u128::from(quorum_bps)
    }

    /// Derived lifecycle state at `now`.
    pub fn state(&self, now: Timestamp, member_count: u64, quorum_bps: u32) -> ProposalState {
        if self.executed {
            return ProposalState::Executed;
        }
        if now < self.created_at {
            return ProposalState::Pending;
        }
        if now < self.vote_end {
            return ProposalState::Active;
        }
        let won = self.tally.for_votes > self.tally.against_votes;
        if !won || !self.quorum_reached(member_count, quorum_bps) {
            return ProposalState::Defeated;
        }
        if now < self.queued_until {
            ProposalState::Queued
        } else {
            ProposalState::Executable
        }
    }
}
