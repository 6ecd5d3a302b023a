//! Execution of proposal calls through a collaborator trait.
//!
//! The engine guarantees only that target, value, signature, and
//! calldata reach the executor faithfully and in order; what a call
//! actually does is the host's concern. The engine depends only on the
//! trait, so tests drive execution with in-memory doubles.

use crate::proposal::ProposalCall;
use thiserror::Error;

/// Why a dispatched call failed.
#[derive(Clone, Debug, Error)]
#[error("{0}")]
pub struct CallFailure(pub String);

impl CallFailure {
    pub fn new(reason: impl Into<String>) -> Self {
        Self(reason.into())
    }
}

/// Dispatches one proposal call against its target.
///
/// An `Err` aborts the proposal's execution at that call: the engine
/// reports `CallReverted`, leaves the proposal non-executed, and the
/// host is responsible for undoing any external effects of the aborted
/// attempt (the engine itself has none to undo).
pub trait CallExecutor {
    fn execute(&mut self, call: &ProposalCall) -> Result<(), CallFailure>;
}
