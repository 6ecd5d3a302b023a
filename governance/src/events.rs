//! Events emitted by the engine for the host to observe.

use collector_types::{Address, ProposalId, VoteSupport};

/// Governance events, queued on the engine and drained by the host.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GovernanceEvent {
    /// A new member paid the fee and was activated. Not emitted on
    /// repeat purchases.
    MemberJoined { member: Address },
    /// A proposal was created.
    ProposalCreated {
        id: ProposalId,
        proposer: Address,
    },
    /// A ballot was recorded and tallied.
    VoteCast {
        id: ProposalId,
        voter: Address,
        support: VoteSupport,
    },
    /// A proposal's calls were all performed; it is now terminal.
    ProposalExecuted { id: ProposalId },
}
