//! Vote records.

use collector_types::{Address, Timestamp, VoteSupport};
use serde::{Deserialize, Serialize};

/// A recorded ballot for one (proposal, voter) pair.
///
/// Created at most once per pair; a second ballot for the same pair is
/// rejected, never merged or overwritten.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct VoteRecord {
    pub voter: Address,
    pub support: VoteSupport,
    pub cast_at: Timestamp,
}

/// Answer to a vote-status query.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VoteStatus {
    pub has_voted: bool,
    /// The recorded position, when `has_voted`.
    pub support: Option<VoteSupport>,
}

impl VoteStatus {
    pub(crate) fn none() -> Self {
        Self {
            has_voted: false,
            support: None,
        }
    }

    pub(crate) fn recorded(record: &VoteRecord) -> Self {
        Self {
            has_voted: true,
            support: Some(record.support),
        }
    }
}
