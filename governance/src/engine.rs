//! The governance engine — owns every table and drives every state
//! transition.
//!
//! One engine instance is one deployment: its ballot domain and
//! parameters are fixed at construction. All mutations take `&mut self`
//! and a caller-supplied `now`, so the host's serial call order is the
//! only ordering there is, and replaying the same calls reproduces the
//! same state.

use crate::error::GovernanceError;
use crate::events::GovernanceEvent;
use crate::executor::CallExecutor;
use crate::membership::MembershipLedger;
use crate::proposal::{Proposal, ProposalCall, ProposalState, VoteTally};
use crate::votes::{VoteRecord, VoteStatus};
use collector_crypto::{recover_voter, BallotSignature};
use collector_types::{
    Address, Amount, BallotDomain, GovernanceParams, ProposalId, Timestamp, VoteSupport,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The authoritative governance state: membership, proposals, votes,
/// the id counter, and the fixed deployment identity.
#[derive(Serialize, Deserialize)]
pub struct GovernanceEngine {
    params: GovernanceParams,
    domain: BallotDomain,
    deployer: Address,
    membership: MembershipLedger,
    proposals: HashMap<ProposalId, Proposal>,
    /// One record per (proposal, voter); first writer wins.
    votes: HashMap<(ProposalId, Address), VoteRecord>,
    /// Last-writer-wins pointer: proposer → most recent proposal.
    recent_proposals: HashMap<Address, ProposalId>,
    next_id: u64,
    #[serde(skip)]
    pending_events: Vec<GovernanceEvent>,
}

impl GovernanceEngine {
    /// Create an empty deployment. `deployer` is recorded for queries
    /// only; it holds no special powers.
    pub fn new(deployer: Address, domain: BallotDomain, params: GovernanceParams) -> Self {
        Self {
            params,
            domain,
            deployer,
            membership: MembershipLedger::new(),
            proposals: HashMap::new(),
            votes: HashMap::new(),
            recent_proposals: HashMap::new(),
            next_id: 1,
            pending_events: Vec::new(),
        }
    }

    pub fn params(&self) -> &GovernanceParams {
        &self.params
    }

    /// The ballot signing domain voters must scope their signatures to.
    pub fn domain(&self) -> &BallotDomain {
        &self.domain
    }

    pub fn deployer(&self) -> Address {
        self.deployer
    }

    /// Drain the queued events since the last drain.
    pub fn drain_events(&mut self) -> Vec<GovernanceEvent> {
        std::mem::take(&mut self.pending_events)
    }

    // ── Membership ───────────────────────────────────────────────────

    /// Accept a membership fee payment from `payer`.
    ///
    /// Underpayment is rejected with `InsufficientPayment`; qualifying
    /// repeat payments are accepted no-ops.
    pub fn purchase_membership(
        &mut self,
        payer: Address,
        payment: Amount,
        now: Timestamp,
    ) -> Result<(), GovernanceError> {
        let newly_activated =
            self.membership
                .purchase(payer, payment, self.params.membership_fee, now)?;
        if newly_activated {
            tracing::info!(member = %payer, count = self.membership.member_count(), "membership activated");
            self.pending_events
                .push(GovernanceEvent::MemberJoined { member: payer });
        } else {
            tracing::debug!(member = %payer, "repeat membership purchase ignored");
        }
        Ok(())
    }

    pub fn is_member(&self, addr: &Address) -> bool {
        self.membership.is_member(addr)
    }

    pub fn member_count(&self) -> u64 {
        self.membership.member_count()
    }

    // ── Proposals ────────────────────────────────────────────────────

    /// Create a proposal from four parallel call arrays.
    ///
    /// Only active members may propose. The arrays must be non-empty and
    /// of equal length; they are zipped into the stored call batch, which
    /// fixes the batch length for the proposal's lifetime.
    #[allow(clippy::too_many_arguments)]
    pub fn propose(
        &mut self,
        proposer: Address,
        targets: &[Address],
        values: &[Amount],
        signatures: &[String],
        calldatas: &[Vec<u8>],
        description: &str,
        now: Timestamp,
    ) -> Result<ProposalId, GovernanceError> {
        if !self.membership.is_member(&proposer) {
            return Err(GovernanceError::NotAMember(proposer));
        }
        if targets.is_empty()
            || targets.len() != values.len()
            || targets.len() != signatures.len()
            || targets.len() != calldatas.len()
        {
            return Err(GovernanceError::MalformedProposal);
        }

        let calls: Vec<ProposalCall> = targets
            .iter()
            .zip(values)
            .zip(signatures)
            .zip(calldatas)
            .map(|(((target, value), signature), calldata)| ProposalCall {
                target: *target,
                value: *value,
                signature: signature.clone(),
                calldata: calldata.clone(),
            })
            .collect();

        let id = ProposalId::new(self.next_id);
        self.next_id += 1;

        let vote_end = now.plus_secs(self.params.voting_duration_secs);
        let proposal = Proposal {
            id,
            proposer,
            calls,
            description: description.to_owned(),
            created_at: now,
            vote_end,
            queued_until: vote_end.plus_secs(self.params.timelock_delay_secs),
            tally: VoteTally::default(),
            executed: false,
        };
        self.proposals.insert(id, proposal);
        self.recent_proposals.insert(proposer, id);

        tracing::info!(proposal = %id, proposer = %proposer, vote_end = %vote_end, "proposal created");
        self.pending_events
            .push(GovernanceEvent::ProposalCreated { id, proposer });
        Ok(id)
    }

    pub fn proposal(&self, id: ProposalId) -> Option<&Proposal> {
        self.proposals.get(&id)
    }

    /// The most recent proposal id created by `proposer`, regardless of
    /// how many they have created.
    pub fn most_recent_proposal_of(&self, proposer: &Address) -> Option<ProposalId> {
        self.recent_proposals.get(proposer).copied()
    }

    /// Derived lifecycle state of a proposal at `now`.
    pub fn proposal_state(
        &self,
        id: ProposalId,
        now: Timestamp,
    ) -> Result<ProposalState, GovernanceError> {
        let proposal = self
            .proposals
            .get(&id)
            .ok_or(GovernanceError::ProposalNotFound(id))?;
        Ok(proposal.state(now, self.membership.member_count(), self.params.quorum_bps))
    }

    // ── Voting ───────────────────────────────────────────────────────

    /// Record a vote from a host-authenticated caller.
    ///
    /// Admission order: membership, proposal existence, no prior vote,
    /// window still open. On success the matching tally increments
    /// atomically with the record insert.
    pub fn cast_vote(
        &mut self,
        voter: Address,
        id: ProposalId,
        support: VoteSupport,
        now: Timestamp,
    ) -> Result<(), GovernanceError> {
        if !self.membership.is_member(&voter) {
            return Err(GovernanceError::NotAMember(voter));
        }
        let proposal = self
            .proposals
            .get_mut(&id)
            .ok_or(GovernanceError::ProposalNotFound(id))?;
        if self.votes.contains_key(&(id, voter)) {
            return Err(GovernanceError::DuplicateVote {
                proposal: id,
                voter,
            });
        }
        if !proposal.voting_open(now) {
            return Err(GovernanceError::VotingClosed(id));
        }

        self.votes.insert(
            (id, voter),
            VoteRecord {
                voter,
                support,
                cast_at: now,
            },
        );
        proposal.tally.record(support);

        tracing::debug!(proposal = %id, voter = %voter, support = %support, "vote recorded");
        self.pending_events.push(GovernanceEvent::VoteCast {
            id,
            voter,
            support,
        });
        Ok(())
    }

    /// Submit a batch of pre-signed ballots.
    ///
    /// The three arrays must be equal length (`MalformedBatch`). Each
    /// element is processed independently — recover the signer, then the
    /// same admission checks as [`cast_vote`](Self::cast_vote) — and the
    /// return carries one result per element, the recovered voter on
    /// success. A rejected element never rolls back earlier ones.
    pub fn submit_bulk_votes(
        &mut self,
        ids: &[ProposalId],
        supports: &[VoteSupport],
        signatures: &[BallotSignature],
        now: Timestamp,
    ) -> Result<Vec<Result<Address, GovernanceError>>, GovernanceError> {
        if ids.len() != supports.len() || ids.len() != signatures.len() {
            return Err(GovernanceError::MalformedBatch {
                ids: ids.len(),
                supports: supports.len(),
                signatures: signatures.len(),
            });
        }

        let mut outcomes = Vec::with_capacity(ids.len());
        for ((&id, &support), ballot) in ids.iter().zip(supports).zip(signatures) {
            let outcome = match recover_voter(&self.domain, id, support, ballot) {
                None => Err(GovernanceError::InvalidSignature),
                Some(voter) => self.cast_vote(voter, id, support, now).map(|()| voter),
            };
            if let Err(ref e) = outcome {
                tracing::debug!(proposal = %id, error = %e, "ballot rejected");
            }
            outcomes.push(outcome);
        }
        Ok(outcomes)
    }

    /// Whether (and how) `voter` has voted on a proposal.
    pub fn vote_status(&self, id: ProposalId, voter: &Address) -> VoteStatus {
        match self.votes.get(&(id, *voter)) {
            Some(record) => VoteStatus::recorded(record),
            None => VoteStatus::none(),
        }
    }

    // ── Execution ────────────────────────────────────────────────────

    /// Execute an eligible proposal's call batch, in stored order.
    ///
    /// Callable by anyone. Fails with `InvalidProposalState` unless the
    /// derived state is `Executable`. A failing call aborts with
    /// `CallReverted` and leaves the proposal non-executed, so the
    /// attempt can be retried; after every call succeeds the proposal is
    /// marked executed exactly once.
    pub fn execute_proposal(
        &mut self,
        id: ProposalId,
        now: Timestamp,
        executor: &mut dyn CallExecutor,
    ) -> Result<(), GovernanceError> {
        let member_count = self.membership.member_count();
        let quorum_bps = self.params.quorum_bps;
        let proposal = self
            .proposals
            .get_mut(&id)
            .ok_or(GovernanceError::ProposalNotFound(id))?;

        let state = proposal.state(now, member_count, quorum_bps);
        if state != ProposalState::Executable {
            return Err(GovernanceError::InvalidProposalState(state));
        }

        for (index, call) in proposal.calls.iter().enumerate() {
            executor
                .execute(call)
                .map_err(|failure| GovernanceError::CallReverted {
                    index,
                    reason: failure.0,
                })?;
        }
        proposal.executed = true;

        tracing::info!(proposal = %id, calls = proposal.calls.len(), "proposal executed");
        self.pending_events
            .push(GovernanceEvent::ProposalExecuted { id });
        Ok(())
    }
}
