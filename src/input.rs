//! Move sources: where (row, column) requests come from.

use derive_more::{Display, Error};
use std::collections::VecDeque;
use std::io::BufRead;
use tracing::{debug, instrument, trace};

/// Something that can be asked, again and again, for the next move attempt.
pub trait MoveSource {
    /// Returns the next requested (row, column) pair.
    ///
    /// The pair is not validated; the engine decides whether it is legal.
    fn next_move(&mut self) -> Result<(i64, i64), InputError>;
}

/// Error reading a move request.
#[derive(Debug, Display, Error)]
pub enum InputError {
    /// A token was not an integer.
    #[display("could not read a position from '{token}'")]
    Malformed {
        /// The offending token.
        token: String,
    },

    /// The input ended before a move could be read.
    #[display("input ended before the game finished")]
    Closed,

    /// The underlying reader failed.
    #[display("failed to read input")]
    Io {
        /// Underlying I/O error.
        source: std::io::Error,
    },
}

impl InputError {
    /// Whether asking again can produce a usable move.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, InputError::Malformed { .. })
    }
}

impl From<std::io::Error> for InputError {
    fn from(source: std::io::Error) -> Self {
        InputError::Io { source }
    }
}

/// Reads whitespace-separated integers from a buffered reader.
///
/// A move is any two integer tokens, on one line or split across lines. When a
/// token fails to parse, the rest of its line is discarded.
#[derive(Debug)]
pub struct TokenMoveSource<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> TokenMoveSource<R> {
    /// Wraps a reader.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }

    fn next_token(&mut self) -> Result<String, InputError> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(token);
            }

            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                debug!("Input closed");
                return Err(InputError::Closed);
            }
            trace!(line = line.trim_end(), "Read input line");
            self.pending.extend(line.split_whitespace().map(str::to_owned));
        }
    }

    fn next_coordinate(&mut self) -> Result<i64, InputError> {
        let token = self.next_token()?;
        match token.parse::<i64>() {
            Ok(value) => Ok(value),
            Err(_) => {
                self.pending.clear();
                Err(InputError::Malformed { token })
            }
        }
    }
}

impl<R: BufRead> MoveSource for TokenMoveSource<R> {
    #[instrument(skip(self))]
    fn next_move(&mut self) -> Result<(i64, i64), InputError> {
        let row = self.next_coordinate()?;
        let column = self.next_coordinate()?;
        debug!(row, column, "Move requested");
        Ok((row, column))
    }
}
