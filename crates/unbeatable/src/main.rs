//! Unbeatable - unified CLI.

#![warn(missing_docs)]

use anyhow::{Result, bail};
use clap::Parser;
use std::path::Path;
use tracing::info;
use unbeatable::{
    AppConfig,
    cli::{Cli, Command},
    logging, suggest, tui, verify,
};
use unbeatable_core::Side;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play { config } => run_play(&config),
        Command::Suggest { board, side } => run_suggest(&board, side.map(Side::from)),
        Command::Verify => run_verify(),
    }
}

/// Run the terminal UI
fn run_play(config_path: &Path) -> Result<()> {
    let config = AppConfig::load(config_path)?;
    logging::init_file(config.log_file(), config.log_filter())?;

    info!(config = %config_path.display(), "Starting Unbeatable");
    tui::run(config)
}

/// Print the best move for a position
fn run_suggest(board: &str, side: Option<Side>) -> Result<()> {
    logging::init_stderr("warn");

    let suggestion = suggest::suggest(board, side)?;
    println!("{}", suggestion);
    Ok(())
}

/// Play every human line and fail if any of them beats the engine
fn run_verify() -> Result<()> {
    logging::init_stderr("info");

    let report = verify::verify();
    println!("{}", report);

    if !report.computer_never_lost() {
        bail!("The player won {} games", report.player_wins);
    }
    Ok(())
}
