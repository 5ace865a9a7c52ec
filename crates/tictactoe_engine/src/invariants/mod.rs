//! Board invariants checked across a single placement.
//!
//! Each invariant looks at the board before and after a successful
//! `place_mark` and reports whether the transition was legal. Only properties
//! of one placement belong here; turn order is the caller's business.

mod monotonic_board;

pub use monotonic_board::MonotonicBoardInvariant;

use crate::Board;

/// A logical property that must hold across a state transition.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the transition `before -> after`.
    fn holds(before: &S, after: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// Checks the invariants every placement must preserve.
pub fn check_placement(before: &Board, after: &Board) -> Result<(), InvariantViolation> {
    if MonotonicBoardInvariant::holds(before, after) {
        Ok(())
    } else {
        Err(InvariantViolation::new(
            MonotonicBoardInvariant::description(),
        ))
    }
}
