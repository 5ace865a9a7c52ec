//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`]. Rules are kept apart from the board
//! storage so the evaluation can be tested without driving a whole game.

pub mod draw;
pub mod line;
pub mod win;

pub use draw::is_full;
pub use line::{Step, scan_line};
pub use win::{check_winner, lines};

use crate::{Board, GameResult};
use tracing::instrument;

/// Evaluates the board: a complete line wins, otherwise a full board is a draw.
#[instrument]
pub fn evaluate(board: &Board) -> GameResult {
    match check_winner(board) {
        Some(player) => GameResult::won_by(player),
        None if is_full(board) => GameResult::Draw,
        None => GameResult::NoWinner,
    }
}
