//! Console tic-tac-toe.
//!
//! Game text goes to stdout; logs go to stderr.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use std::io;
use tictactoe_console::{ConsoleConfig, Session, TextRenderer, TokenMoveSource};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = ConsoleConfig::load(cli.config.as_deref())
        .context("Failed to load console configuration")?;

    let source = TokenMoveSource::new(io::stdin().lock());
    let sink = TextRenderer::new(io::stdout().lock(), &config);
    let mut session = Session::new(source, sink);

    let result = session.play().context("Game ended before a result")?;
    info!(?result, "Session finished");

    Ok(())
}

/// Installs the stderr subscriber, honouring `RUST_LOG` when set.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(io::stderr)
        .init();
}
