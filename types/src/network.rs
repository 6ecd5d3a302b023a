//! Network identifier.

use serde::{Deserialize, Serialize};

/// Identifies which network a governance deployment lives on.
///
/// Part of the ballot signing domain: a ballot signed for one network can
/// never be replayed on another.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NetworkId {
    /// The production network.
    Main,
    /// The public test network.
    Test,
    /// Local development network.
    Dev,
}

impl NetworkId {
    /// Chain identifier mixed into ballot digests.
    pub fn chain_id(&self) -> u64 {
        match self {
            Self::Main => 1,
            Self::Test => 5,
            Self::Dev => 1337,
        }
    }

    /// Human-readable name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Main => "main",
            Self::Test => "test",
            Self::Dev => "dev",
        }
    }
}
