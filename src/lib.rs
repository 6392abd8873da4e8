//! Maru-batsu terminal front end.
//!
//! The game itself lives in [`marubatsu_core`]; this crate wires it to a
//! command line, a TUI and a scripted `play` mode.
//!
//! # Architecture
//!
//! - **Config**: optional TOML file for glyphs and logging
//! - **Play**: applies a move list through a transcript presenter
//! - **TUI**: ratatui front end implementing the presentation port

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod logging;
pub mod play;
pub mod tui;

pub use config::{AppConfig, ConfigError};
