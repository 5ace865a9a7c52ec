//! Line scanning shared by row, column, and diagonal checks.

use crate::{Board, Mark, Player};

/// Direction a line scan advances in, as (row, column) deltas.
///
/// Only the four constants exist, so a scan always leaves the board after at
/// most three cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    row: isize,
    column: isize,
}

impl Step {
    /// Left to right along a row.
    pub const RIGHT: Step = Step { row: 0, column: 1 };
    /// Top to bottom along a column.
    pub const DOWN: Step = Step { row: 1, column: 0 };
    /// Top-left to bottom-right.
    pub const DOWN_RIGHT: Step = Step { row: 1, column: 1 };
    /// Top-right to bottom-left.
    pub const DOWN_LEFT: Step = Step { row: 1, column: -1 };
}

/// Returns the player whose mark fills the line starting at (row, column).
///
/// The scan stops at the first empty cell or the first mark that differs from
/// the starting one; either means the line is not won.
pub fn scan_line(board: &Board, row: usize, column: usize, step: Step) -> Option<Player> {
    let first = board.get(row, column)?;
    let owner = first.player()?;

    let mut row = row as isize + step.row;
    let mut column = column as isize + step.column;
    while let Some(mark) = cell_at(board, row, column) {
        match mark {
            Mark::Empty => return None,
            mark if mark != first => return None,
            _ => {}
        }
        row += step.row;
        column += step.column;
    }

    Some(owner)
}

fn cell_at(board: &Board, row: isize, column: isize) -> Option<Mark> {
    let row = usize::try_from(row).ok()?;
    let column = usize::try_from(column).ok()?;
    board.get(row, column)
}
