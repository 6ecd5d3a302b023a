//! Governance parameters.
//!
//! Every tunable of the governance process is a named field here; nothing
//! is hard-coded in the engine. A deployment picks its values once at
//! construction.

use crate::amount::Amount;
use serde::{Deserialize, Serialize};

/// Configuration of one governance deployment.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GovernanceParams {
    /// Minimum payment (raw units) that activates a membership.
    pub membership_fee: Amount,

    /// Length of a proposal's voting window, in seconds from creation.
    pub voting_duration_secs: u64,

    /// Mandatory delay between a proposal succeeding and it becoming
    /// executable, in seconds from the end of the voting window.
    pub timelock_delay_secs: u64,

    /// Quorum threshold in basis points: for-votes must represent at
    /// least this fraction of the total member count.
    pub quorum_bps: u32,
}

impl GovernanceParams {
    /// Collector defaults — the intended live configuration.
    pub fn collector_defaults() -> Self {
        Self {
            membership_fee: Amount::from_units(1),
            voting_duration_secs: 7 * 24 * 3600, // 1 week
            timelock_delay_secs: 2 * 24 * 3600,  // 2 days
            quorum_bps: 2500,                    // 25%
        }
    }
}

impl Default for GovernanceParams {
    fn default() -> Self {
        Self::collector_defaults()
    }
}
