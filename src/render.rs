//! Text rendering of the board and game messages.

use crate::config::ConsoleConfig;
use std::fmt::Display;
use std::io::{self, Write};
use tictactoe_engine::{BOARD_SIZE, Board, GameResult, Mark, Player};
use tracing::{debug, instrument};

/// Receives everything the player should see.
pub trait RenderSink {
    /// Announces whose turn it is.
    fn announce_turn(&mut self, player: Player) -> io::Result<()>;

    /// Draws the full board.
    fn render(&mut self, board: &Board) -> io::Result<()>;

    /// Reports why a move attempt was not accepted and asks again.
    fn reject_move(&mut self, reason: &dyn Display) -> io::Result<()>;

    /// Separates one turn from the next.
    fn end_turn(&mut self) -> io::Result<()>;

    /// Announces how the game ended.
    fn announce_result(&mut self, result: GameResult) -> io::Result<()>;
}

/// Characters used to draw each kind of cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Symbols {
    /// Cross.
    pub cross: char,
    /// Circle.
    pub circle: char,
    /// Empty cell.
    pub empty: char,
}

impl Symbols {
    /// Symbol for a single cell.
    pub fn of(&self, mark: Mark) -> char {
        match mark {
            Mark::Empty => self.empty,
            Mark::Cross => self.cross,
            Mark::Circle => self.circle,
        }
    }
}

impl Default for Symbols {
    fn default() -> Self {
        Symbols::from(&ConsoleConfig::default())
    }
}

impl From<&ConsoleConfig> for Symbols {
    fn from(config: &ConsoleConfig) -> Self {
        Self {
            cross: *config.cross_symbol(),
            circle: *config.circle_symbol(),
            empty: *config.empty_symbol(),
        }
    }
}

/// Formats the board as rows of ` X | O |  ` separated by dashed lines.
pub fn format_board(board: &Board, symbols: &Symbols) -> String {
    let mut out = String::new();
    for (i, row) in board.rows().iter().enumerate() {
        for (j, mark) in row.iter().enumerate() {
            out.push(' ');
            out.push(symbols.of(*mark));
            if j != BOARD_SIZE - 1 {
                out.push_str(" |");
            }
        }
        if i != BOARD_SIZE - 1 {
            out.push_str("\n------------");
        }
        out.push('\n');
    }
    out
}

/// Writes the game as plain text.
#[derive(Debug)]
pub struct TextRenderer<W> {
    out: W,
    symbols: Symbols,
    prompt: String,
}

impl<W: Write> TextRenderer<W> {
    /// Creates a renderer writing to `out` with the configured symbols and prompt.
    pub fn new(out: W, config: &ConsoleConfig) -> Self {
        Self {
            out,
            symbols: Symbols::from(config),
            prompt: config.prompt().clone(),
        }
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> RenderSink for TextRenderer<W> {
    fn announce_turn(&mut self, player: Player) -> io::Result<()> {
        writeln!(self.out, "next player to place a mark is: {}", player)
    }

    fn render(&mut self, board: &Board) -> io::Result<()> {
        self.out.write_all(format_board(board, &self.symbols).as_bytes())?;
        self.out.flush()
    }

    fn reject_move(&mut self, reason: &dyn Display) -> io::Result<()> {
        writeln!(self.out, "{}", reason)?;
        write!(self.out, "please re-enter a position:\n{}", self.prompt)?;
        self.out.flush()
    }

    fn end_turn(&mut self) -> io::Result<()> {
        writeln!(self.out)
    }

    #[instrument(skip(self))]
    fn announce_result(&mut self, result: GameResult) -> io::Result<()> {
        match result {
            GameResult::CrossWon | GameResult::CircleWon => {
                let winner = result.winner().map_or("nobody", Player::name);
                writeln!(self.out, "{} won the game!", winner)?;
            }
            GameResult::Draw => writeln!(self.out, "the game has ended with a draw!")?,
            GameResult::NoWinner => debug!("Result announced before the game ended"),
        }
        self.out.flush()
    }
}
