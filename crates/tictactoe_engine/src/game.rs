//! Game engine: the board plus whose turn it is.

use crate::invariants::check_placement;
use crate::{Board, GameResult, MoveError, Player, rules};
use serde::Serialize;
use tracing::instrument;

/// Complete game state.
///
/// Starts with an empty board and cross to move. Placing a mark and passing
/// the turn are separate steps: the caller evaluates the board in between and
/// only passes the turn while the game is still undecided.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameState {
    board: Board,
    turn_player: Player,
}

impl GameState {
    /// Creates a new game.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            turn_player: Player::Cross,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player whose turn it is.
    pub fn current_player(&self) -> Player {
        self.turn_player
    }

    /// Paints the current player's mark at (row, column).
    ///
    /// Does not pass the turn, and does not check whose turn it should be:
    /// placing twice in a row paints two marks for the same player. The board
    /// is untouched on error.
    ///
    /// # Errors
    ///
    /// - [`MoveError::PositionOutOfBounds`] if either coordinate is outside `0..3`.
    /// - [`MoveError::MarkAlreadyExists`] if the cell is occupied.
    #[instrument(skip(self), fields(player = %self.turn_player))]
    pub fn place_mark(&mut self, row: i64, column: i64) -> Result<(), MoveError> {
        let Some((r, c)) = Board::index(row, column) else {
            return Err(MoveError::PositionOutOfBounds { row, column });
        };

        if !self.board.get(r, c).is_some_and(|mark| mark.is_empty()) {
            return Err(MoveError::MarkAlreadyExists { row, column });
        }

        let before = self.board;
        self.board.set(r, c, self.turn_player.mark());
        debug_assert!(
            check_placement(&before, &self.board).is_ok(),
            "board invariants violated placing at ({row},{column})"
        );

        Ok(())
    }

    /// Passes the turn to the other player.
    #[instrument(skip(self), fields(from = %self.turn_player))]
    pub fn next_turn(&mut self) {
        self.turn_player = self.turn_player.opponent();
    }

    /// Evaluates the board without changing it.
    #[instrument(skip(self))]
    pub fn evaluate(&self) -> GameResult {
        rules::evaluate(&self.board)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
