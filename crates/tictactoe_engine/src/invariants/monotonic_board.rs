//! Monotonic board invariant: cells never change once marked.

use super::Invariant;
use crate::Board;

/// Invariant: exactly one empty cell became marked and nothing else changed.
pub struct MonotonicBoardInvariant;

impl Invariant<Board> for MonotonicBoardInvariant {
    fn holds(before: &Board, after: &Board) -> bool {
        let mut changed = 0;
        for (old, new) in before.cells().zip(after.cells()) {
            if old == new {
                continue;
            }
            if !old.is_empty() || new.is_empty() {
                return false;
            }
            changed += 1;
        }
        changed == 1
    }

    fn description() -> &'static str {
        "Board cells are monotonic (exactly one empty cell marked per placement)"
    }
}
