//! Move legality errors.

use derive_more::{Display, Error};

/// Error returned when a mark cannot be placed.
///
/// Both variants carry the coordinates exactly as requested, so a caller can
/// report them back before asking for another position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// Requested cell lies outside the 3x3 grid.
    #[display("position ({row},{column}) is out of bounds.")]
    PositionOutOfBounds {
        /// Requested row.
        row: i64,
        /// Requested column.
        column: i64,
    },

    /// Requested cell is already occupied.
    #[display("position ({row},{column}) already has a mark on it.")]
    MarkAlreadyExists {
        /// Requested row.
        row: i64,
        /// Requested column.
        column: i64,
    },
}

impl MoveError {
    /// Row of the rejected move.
    pub fn row(&self) -> i64 {
        match self {
            MoveError::PositionOutOfBounds { row, .. } | MoveError::MarkAlreadyExists { row, .. } => {
                *row
            }
        }
    }

    /// Column of the rejected move.
    pub fn column(&self) -> i64 {
        match self {
            MoveError::PositionOutOfBounds { column, .. }
            | MoveError::MarkAlreadyExists { column, .. } => *column,
        }
    }
}
