//! Two-player tic-tac-toe on the console.
//!
//! The game rules live in [`tictactoe_engine`]; this crate supplies the
//! collaborators around them.
//!
//! # Architecture
//!
//! - **Input**: [`MoveSource`] yields raw (row, column) requests; [`TokenMoveSource`]
//!   reads them as integer tokens from any buffered reader.
//! - **Render**: [`RenderSink`] shows the board, turns, rejected moves, and the
//!   result; [`TextRenderer`] writes plain text.
//! - **Session**: [`Session`] drives one game between a source and a sink.
//! - **Config**: [`ConsoleConfig`] holds presentation settings loaded from TOML.
//!
//! # Example
//!
//! ```
//! use std::io::Cursor;
//! use tictactoe_console::{ConsoleConfig, GameResult, Session, TextRenderer, TokenMoveSource};
//!
//! let input = Cursor::new("0 0\n1 0\n0 1\n1 1\n0 2\n");
//! let config = ConsoleConfig::default();
//! let mut session = Session::new(
//!     TokenMoveSource::new(input),
//!     TextRenderer::new(Vec::new(), &config),
//! );
//! assert_eq!(session.play().unwrap(), GameResult::CrossWon);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod input;
mod render;
mod session;

pub use config::{ConfigError, ConsoleConfig};
pub use input::{InputError, MoveSource, TokenMoveSource};
pub use render::{RenderSink, Symbols, TextRenderer, format_board};
pub use session::{Session, SessionError};

pub use tictactoe_engine::{Board, GameResult, GameState, Mark, MoveError, Player};
