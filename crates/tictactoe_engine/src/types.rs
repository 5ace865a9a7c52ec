//! Core domain types for tic-tac-toe.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Number of rows and columns on the board.
pub const BOARD_SIZE: usize = 3;

/// Player taking turns at the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter)]
#[serde(rename_all = "lowercase")]
pub enum Player {
    /// Cross (moves first).
    Cross,
    /// Circle (moves second).
    Circle,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::Cross => Player::Circle,
            Player::Circle => Player::Cross,
        }
    }

    /// Returns the mark this player paints on the board.
    pub fn mark(self) -> Mark {
        match self {
            Player::Cross => Mark::Cross,
            Player::Circle => Mark::Circle,
        }
    }

    /// Canonical display name.
    pub fn name(self) -> &'static str {
        match self {
            Player::Cross => "cross",
            Player::Circle => "circle",
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Content of a single cell.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
pub enum Mark {
    /// Nobody has played here.
    #[default]
    Empty,
    /// Cell holds a cross.
    Cross,
    /// Cell holds a circle.
    Circle,
}

impl Mark {
    /// Returns the player owning this mark, `None` for an empty cell.
    pub fn player(self) -> Option<Player> {
        match self {
            Mark::Empty => None,
            Mark::Cross => Some(Player::Cross),
            Mark::Circle => Some(Player::Circle),
        }
    }

    /// Checks if the cell is empty.
    pub fn is_empty(self) -> bool {
        matches!(self, Mark::Empty)
    }
}

impl From<Player> for Mark {
    fn from(player: Player) -> Self {
        player.mark()
    }
}

/// 3x3 tic-tac-toe board, indexed by (row, column).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Board {
    cells: [[Mark; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Creates a new empty board.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a board from explicit rows, top to bottom.
    pub fn from_rows(cells: [[Mark; BOARD_SIZE]; BOARD_SIZE]) -> Self {
        Self { cells }
    }

    /// Gets the mark at (row, column), `None` when off the board.
    pub fn get(&self, row: usize, column: usize) -> Option<Mark> {
        self.cells.get(row)?.get(column).copied()
    }

    /// Converts signed coordinates into board indices, `None` when outside the grid.
    pub fn index(row: i64, column: i64) -> Option<(usize, usize)> {
        let row = usize::try_from(row).ok().filter(|r| *r < BOARD_SIZE)?;
        let column = usize::try_from(column).ok().filter(|c| *c < BOARD_SIZE)?;
        Some((row, column))
    }

    /// Writes a mark. Callers have already bounds-checked the indices.
    pub(crate) fn set(&mut self, row: usize, column: usize, mark: Mark) {
        self.cells[row][column] = mark;
    }

    /// Returns the rows, top to bottom.
    pub fn rows(&self) -> &[[Mark; BOARD_SIZE]; BOARD_SIZE] {
        &self.cells
    }

    /// Iterates over all 9 cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Mark> + '_ {
        self.cells.iter().flatten().copied()
    }

    /// Counts the cells holding `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        self.cells().filter(|cell| *cell == mark).count()
    }
}

/// Outcome of evaluating a board. Derived on demand, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameResult {
    /// No line is complete and empty cells remain.
    NoWinner,
    /// Cross completed a line.
    CrossWon,
    /// Circle completed a line.
    CircleWon,
    /// Board is full with no complete line.
    Draw,
}

impl GameResult {
    /// Result for a line completed by `player`.
    pub fn won_by(player: Player) -> Self {
        match player {
            Player::Cross => GameResult::CrossWon,
            Player::Circle => GameResult::CircleWon,
        }
    }

    /// Returns the winner if there is one.
    pub fn winner(self) -> Option<Player> {
        match self {
            GameResult::CrossWon => Some(Player::Cross),
            GameResult::CircleWon => Some(Player::Circle),
            GameResult::NoWinner | GameResult::Draw => None,
        }
    }

    /// Returns true once the game can accept no further moves.
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameResult::NoWinner)
    }
}
