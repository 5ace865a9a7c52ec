//! The driving loop of a console game.

use crate::input::{InputError, MoveSource};
use crate::render::RenderSink;
use derive_more::{Display, Error, From};
use tictactoe_engine::{GameResult, GameState};
use tracing::{debug, info, instrument, warn};

/// Error that ends a session before the game is decided.
#[derive(Debug, Display, Error, From)]
pub enum SessionError {
    /// No further move could be read.
    #[display("could not read a move")]
    Input {
        /// What went wrong with the input.
        source: InputError,
    },

    /// Output could not be written.
    #[display("failed to write output")]
    Render {
        /// Underlying I/O error.
        source: std::io::Error,
    },
}

/// One game played between a move source and a render sink.
///
/// The session owns the only [`GameState`] for its lifetime.
#[derive(Debug)]
pub struct Session<S, R> {
    game: GameState,
    source: S,
    sink: R,
}

impl<S: MoveSource, R: RenderSink> Session<S, R> {
    /// Creates a session with a fresh game.
    pub fn new(source: S, sink: R) -> Self {
        Self {
            game: GameState::new(),
            source,
            sink,
        }
    }

    /// Returns the game being played.
    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Splits the session into the game, the source, and the sink.
    pub fn into_parts(self) -> (GameState, S, R) {
        (self.game, self.source, self.sink)
    }

    /// Plays until the board is won or drawn.
    ///
    /// Each turn announces the player, draws the board, and asks for moves
    /// until one is legal. A decided game is drawn once more with its result.
    /// Calling this on a decided game returns the result without playing.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError`] when input runs out or fails, or when output
    /// cannot be written.
    #[instrument(skip(self))]
    pub fn play(&mut self) -> Result<GameResult, SessionError> {
        let result = self.game.evaluate();
        if result.is_terminal() {
            debug!(?result, "Game already decided");
            return Ok(result);
        }

        loop {
            self.sink.announce_turn(self.game.current_player())?;
            self.sink.render(self.game.board())?;

            self.take_turn()?;

            let result = self.game.evaluate();
            if result.is_terminal() {
                self.sink.render(self.game.board())?;
                self.sink.announce_result(result)?;
                info!(?result, "Game over");
                return Ok(result);
            }

            self.game.next_turn();
            self.sink.end_turn()?;
        }
    }

    /// Asks for moves until one is placed.
    #[instrument(skip(self), fields(player = %self.game.current_player()))]
    fn take_turn(&mut self) -> Result<(), SessionError> {
        loop {
            let (row, column) = match self.source.next_move() {
                Ok(request) => request,
                Err(err) if err.is_recoverable() => {
                    warn!(%err, "Unreadable move");
                    self.sink.reject_move(&err)?;
                    continue;
                }
                Err(err) => return Err(err.into()),
            };

            match self.game.place_mark(row, column) {
                Ok(()) => return Ok(()),
                Err(err) => {
                    debug!(row = err.row(), column = err.column(), %err, "Move rejected");
                    self.sink.reject_move(&err)?;
                }
            }
        }
    }
}
