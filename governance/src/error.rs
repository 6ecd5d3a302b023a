use crate::proposal::ProposalState;
use collector_types::{Address, ProposalId};
use thiserror::Error;

/// Every way a governance operation can be rejected.
///
/// Rejections never leave partial state behind; the one documented
/// exception is bulk vote submission, which applies each ballot
/// independently and reports one of these per element.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GovernanceError {
    #[error("insufficient payment: sent {paid} raw, membership costs {required} raw")]
    InsufficientPayment { paid: u128, required: u128 },

    #[error("{0} is not an active member")]
    NotAMember(Address),

    #[error("proposal call arrays must be non-empty and of equal length")]
    MalformedProposal,

    #[error("batch arrays differ in length: {ids} ids, {supports} supports, {signatures} signatures")]
    MalformedBatch {
        ids: usize,
        supports: usize,
        signatures: usize,
    },

    #[error("ballot signature is invalid")]
    InvalidSignature,

    #[error("{voter} has already voted on proposal {proposal}")]
    DuplicateVote {
        proposal: ProposalId,
        voter: Address,
    },

    #[error("voting has closed for proposal {0}")]
    VotingClosed(ProposalId),

    #[error("proposal {0} not found")]
    ProposalNotFound(ProposalId),

    #[error("proposal can only be executed if it is queued (state is {0})")]
    InvalidProposalState(ProposalState),

    #[error("call {index} reverted: {reason}")]
    CallReverted { index: usize, reason: String },
}
