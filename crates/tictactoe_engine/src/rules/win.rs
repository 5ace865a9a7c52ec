//! Win detection logic for tic-tac-toe.

use super::line::{Step, scan_line};
use crate::{BOARD_SIZE, Board, Player};
use tracing::instrument;

/// The 8 lines of the board as (start row, start column, step), in the order
/// they are checked: rows, columns, then both diagonals.
pub fn lines() -> impl Iterator<Item = (usize, usize, Step)> {
    let rows = (0..BOARD_SIZE).map(|row| (row, 0, Step::RIGHT));
    let columns = (0..BOARD_SIZE).map(|column| (0, column, Step::DOWN));
    let diagonals = [
        (0, 0, Step::DOWN_RIGHT),
        (0, BOARD_SIZE - 1, Step::DOWN_LEFT),
    ];
    rows.chain(columns).chain(diagonals)
}

/// Checks if there is a winner on the board.
///
/// Returns the owner of the first complete line found, `None` otherwise.
#[instrument]
pub fn check_winner(board: &Board) -> Option<Player> {
    lines().find_map(|(row, column, step)| scan_line(board, row, column, step))
}
