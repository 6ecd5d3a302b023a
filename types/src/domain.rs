//! Ballot signing domain.

use crate::address::Address;
use crate::network::NetworkId;
use serde::{Deserialize, Serialize};

/// The fixed (name, network, instance) triple scoping every ballot
/// signature to one deployment.
///
/// Set once at engine construction and never mutated. Two deployments
/// that differ in any field produce disjoint ballot digests, so signed
/// ballots cannot be replayed across deployments or networks.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BallotDomain {
    /// Governance instance name, e.g. `"Collector"`.
    pub name: String,
    /// Network the instance is deployed on.
    pub network: NetworkId,
    /// Address of the governance instance itself.
    pub instance: Address,
}

impl BallotDomain {
    pub fn new(name: impl Into<String>, network: NetworkId, instance: Address) -> Self {
        Self {
            name: name.into(),
            network,
            instance,
        }
    }
}
