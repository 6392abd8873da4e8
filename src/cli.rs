//! Command-line interface for marubatsu.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Maru-batsu - two-player tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "marubatsu")]
#[command(about = "Two-player maru-batsu (tic-tac-toe)", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (defaults to ./marubatsu.toml if present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively in the terminal
    Tui,

    /// Apply a list of moves and print the resulting game
    Play {
        /// Print a JSON snapshot instead of the board
        #[arg(long)]
        json: bool,

        /// Moves as keypad numbers (1-9, top-left to bottom-right) or labels
        #[arg(required = true)]
        moves: Vec<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_play() {
        let cli = Cli::parse_from(["marubatsu", "play", "--json", "5", "center"]);
        match cli.command {
            Command::Play { json, moves } => {
                assert!(json);
                assert_eq!(moves, vec!["5", "center"]);
            }
            Command::Tui => panic!("expected play"),
        }
    }

    #[test]
    fn test_parse_global_config() {
        let cli = Cli::parse_from(["marubatsu", "tui", "--config", "my.toml"]);
        assert_eq!(cli.config, Some(PathBuf::from("my.toml")));
        assert!(matches!(cli.command, Command::Tui));
    }

    #[test]
    fn test_play_requires_moves() {
        assert!(Cli::try_parse_from(["marubatsu", "play"]).is_err());
    }
}
