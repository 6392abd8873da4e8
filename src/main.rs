//! Maru-batsu - command-line entry point.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use marubatsu::cli::{Cli, Command};
use marubatsu::{AppConfig, logging, play, tui};
use tracing::info;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::load(cli.config.as_deref())?;

    match cli.command {
        Command::Tui => tui::run_tui(config),
        Command::Play { json, moves } => {
            logging::init_stderr(config.log_filter());
            info!(count = moves.len(), "Playing scripted moves");
            let mut stdout = std::io::stdout().lock();
            play::run_play(&moves, json, &config, &mut stdout)?;
            Ok(())
        }
    }
}
