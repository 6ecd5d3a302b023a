//! Ballot support values.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A voter's position on a proposal.
///
/// Wire codes are fixed by the ballot schema and must never change:
/// Against = 0, For = 1, Abstain = 2. The code is what gets signed, so a
/// renumbering would invalidate every outstanding ballot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VoteSupport {
    /// Against the proposal.
    Against,
    /// In favor of the proposal.
    For,
    /// Abstain (recorded, but counts for neither side).
    Abstain,
}

impl VoteSupport {
    /// The signed wire code.
    pub fn code(&self) -> u8 {
        match self {
            Self::Against => 0,
            Self::For => 1,
            Self::Abstain => 2,
        }
    }

    /// Decode a wire code. `None` for anything outside {0, 1, 2}.
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::Against),
            1 => Some(Self::For),
            2 => Some(Self::Abstain),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Against => "against",
            Self::For => "for",
            Self::Abstain => "abstain",
        }
    }
}

impl fmt::Display for VoteSupport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_stable() {
        assert_eq!(VoteSupport::Against.code(), 0);
        assert_eq!(VoteSupport::For.code(), 1);
        assert_eq!(VoteSupport::Abstain.code(), 2);
    }

    #[test]
    fn from_code_roundtrip() {
        for support in [VoteSupport::Against, VoteSupport::For, VoteSupport::Abstain] {
            assert_eq!(VoteSupport::from_code(support.code()), Some(support));
        }
        assert_eq!(VoteSupport::from_code(3), None);
        assert_eq!(VoteSupport::from_code(255), None);
    }
}
