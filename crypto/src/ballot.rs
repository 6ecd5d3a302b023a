//! Ballot digests and signer recovery.
//!
//! A ballot is the pair (proposal id, support code) signed under a
//! deployment's [`BallotDomain`]. The digest mixes a schema tag, every
//! domain field, and the payload, so a signature is only ever valid for
//! one proposal, one support value, and one deployment.
//!
//! Recovery is verify-then-derive: the detached ballot carries the
//! claimed public key alongside the R‖s signature halves, and the voter's
//! address is derived from the key only after the signature checks out.
//! A failed verification — or a derived null address — recovers nothing.

use crate::address::derive_address;
use crate::hash::blake2b_256_multi;
use crate::keys::{sign_message, verify_signature};
use collector_types::{Address, BallotDomain, KeyPair, ProposalId, PublicKey, Signature, VoteSupport};
use serde::{Deserialize, Serialize};

/// Schema tag hashed into every ballot digest. Versioned so a future
/// payload change cannot collide with outstanding v1 ballots.
const BALLOT_SCHEMA: &[u8] = b"collector/ballot/v1";

/// A detached, off-line-signed ballot: the claimed signer plus the two
/// signature halves — three 32-byte words on the wire.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BallotSignature {
    pub signer: PublicKey,
    pub signature: Signature,
}

/// Canonical structured digest for a ballot payload under a domain.
pub fn ballot_digest(
    domain: &BallotDomain,
    proposal: ProposalId,
    support: VoteSupport,
) -> [u8; 32] {
    blake2b_256_multi(&[
        BALLOT_SCHEMA,
        &(domain.name.len() as u64).to_le_bytes(),
        domain.name.as_bytes(),
        &domain.network.chain_id().to_le_bytes(),
        domain.instance.as_bytes(),
        &proposal.value().to_le_bytes(),
        &[support.code()],
    ])
}

/// Sign a ballot with a key pair, producing the detached wire form.
pub fn sign_ballot(
    domain: &BallotDomain,
    proposal: ProposalId,
    support: VoteSupport,
    keypair: &KeyPair,
) -> BallotSignature {
    let digest = ballot_digest(domain, proposal, support);
    BallotSignature {
        signer: keypair.public,
        signature: sign_message(&digest, &keypair.private),
    }
}

/// Recover the voter identity from a detached ballot signature.
///
/// Returns `None` when the signature does not verify over the canonical
/// digest, when the claimed key is malformed, or when the derived
/// identity is the null address. Pure function: admissibility (membership,
/// duplicates, timing) is the caller's job.
pub fn recover_voter(
    domain: &BallotDomain,
    proposal: ProposalId,
    support: VoteSupport,
    ballot: &BallotSignature,
) -> Option<Address> {
    let digest = ballot_digest(domain, proposal, support);
    if !verify_signature(&digest, &ballot.signature, &ballot.signer) {
        return None;
    }
    let voter = derive_address(&ballot.signer);
    if voter.is_zero() {
        return None;
    }
    Some(voter)
}
