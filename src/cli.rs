//! Command-line interface for the console game.

use clap::Parser;
use std::path::PathBuf;

/// Two-player tic-tac-toe on the console
///
/// Enter moves as two integers, row then column, each from 0 to 2.
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(version)]
pub struct Cli {
    /// TOML file with presentation settings (symbols, prompt)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Log game decisions to stderr at debug level (RUST_LOG overrides)
    #[arg(short, long)]
    pub verbose: bool,
}
