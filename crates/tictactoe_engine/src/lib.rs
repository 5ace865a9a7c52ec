//! Pure tic-tac-toe game logic.
//!
//! The crate owns the 3x3 board, the turn order, move legality, and the
//! win/draw evaluation. It does no I/O: a driving loop asks [`GameState`] for
//! the current player, feeds it coordinates through
//! [`GameState::place_mark`], checks [`GameState::evaluate`], and passes the
//! turn with [`GameState::next_turn`] while the game is undecided.
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{GameResult, GameState};
//!
//! let mut game = GameState::new();
//! for (row, column) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
//!     game.place_mark(row, column).unwrap();
//!     if game.evaluate().is_terminal() {
//!         break;
//!     }
//!     game.next_turn();
//! }
//! assert_eq!(game.evaluate(), GameResult::CrossWon);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod game;
pub mod invariants;
pub mod rules;
mod types;

pub use error::MoveError;
pub use game::GameState;
pub use types::{BOARD_SIZE, Board, GameResult, Mark, Player};
