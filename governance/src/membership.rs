//! Membership ledger — who has paid the fee, and how many members exist.

use crate::error::GovernanceError;
use collector_types::{Address, Amount, Timestamp};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One membership record. Never destroyed once created.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Member {
    pub active: bool,
    pub joined_at: Timestamp,
}

/// The authoritative membership table plus the global member count.
///
/// Read-only to every other component; only fee payments mutate it.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct MembershipLedger {
    members: HashMap<Address, Member>,
    member_count: u64,
}

impl MembershipLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accept a membership payment.
    ///
    /// Rejects payments below `fee` without touching state. Otherwise
    /// activates the payer; returns `true` only on first activation
    /// (which is when the global count increments). Repeat purchases are
    /// accepted no-ops.
    pub(crate) fn purchase(
        &mut self,
        payer: Address,
        payment: Amount,
        fee: Amount,
        now: Timestamp,
    ) -> Result<bool, GovernanceError> {
        if payment < fee {
            return Err(GovernanceError::InsufficientPayment {
                paid: payment.raw(),
                required: fee.raw(),
            });
        }
        match self.members.get(&payer) {
            Some(member) if member.active => Ok(false),
            _ => {
                self.members.insert(
                    payer,
                    Member {
                        active: true,
                        joined_at: now,
                    },
                );
                self.member_count += 1;
                Ok(true)
            }
        }
    }

    /// Whether `addr` is an active member.
    pub fn is_member(&self, addr: &Address) -> bool {
        self.members.get(addr).is_some_and(|m| m.active)
    }

    /// Total number of activated members (the quorum denominator).
    pub fn member_count(&self) -> u64 {
        self.member_count
    }
}
