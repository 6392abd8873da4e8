//! Non-interactive play: apply a move list and print the result.

use crate::config::AppConfig;
use anyhow::{Context, Result, anyhow};
use marubatsu_core::{Coord, GameEngine, Player, Presenter, Session, status_message_with};
use std::io::Write;
use tracing::{info, instrument, warn};

/// Presenter that records everything it is asked to show as text lines.
#[derive(Debug)]
pub struct TranscriptPresenter<'a> {
    config: &'a AppConfig,
    lines: Vec<String>,
}

impl<'a> TranscriptPresenter<'a> {
    /// Creates an empty transcript using the configured glyphs.
    pub fn new(config: &'a AppConfig) -> Self {
        Self {
            config,
            lines: Vec::new(),
        }
    }

    /// Lines recorded so far.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    fn note(&mut self, line: String) {
        self.lines.push(line);
    }
}

impl Presenter for TranscriptPresenter<'_> {
    fn render_cell(&mut self, coord: Coord, player: Player) {
        let line = format!("{} -> {}", self.config.glyph(player), coord);
        self.note(line);
    }

    fn show_message(&mut self, message: &str) {
        self.note(format!("  {}", message));
    }

    fn glyph(&self, player: Player) -> &str {
        self.config.glyph(player)
    }
}

/// Renders a board using the configured glyphs.
pub fn render_board(engine: &GameEngine, config: &AppConfig) -> String {
    engine.board().render_with(|player| config.glyph(player))
}

/// Parses move tokens, failing on the first one that names no cell.
pub fn parse_moves(tokens: &[String]) -> Result<Vec<Coord>> {
    tokens
        .iter()
        .map(|token| {
            Coord::from_label_or_number(token)
                .ok_or_else(|| anyhow!("Not a cell: {:?} (use 1-9 or a label like \"center\")", token))
        })
        .collect()
}

/// Plays `tokens` in order and writes the transcript and final board to `out`.
///
/// Rejected moves are reported and skipped.
#[instrument(skip(config, out), fields(count = tokens.len()))]
pub fn run_play(
    tokens: &[String],
    json: bool,
    config: &AppConfig,
    out: &mut impl Write,
) -> Result<GameEngine> {
    let moves = parse_moves(tokens)?;
    let mut session = Session::new(TranscriptPresenter::new(config));

    for (index, coord) in moves.into_iter().enumerate() {
        if !session.on_cell_tapped(coord) {
            warn!(index, coord = %coord, "Move ignored");
            session
                .presenter_mut()
                .note(format!("{} ignored (cell taken or game over)", coord));
        }
    }

    let engine = session.engine().clone();
    info!(outcome = %engine.outcome(), "Play finished");

    if json {
        let snapshot =
            serde_json::to_string_pretty(&engine.snapshot()).context("Failed to encode snapshot")?;
        writeln!(out, "{}", snapshot)?;
    } else {
        for line in session.presenter().lines() {
            writeln!(out, "{}", line)?;
        }
        writeln!(out)?;
        writeln!(out, "{}", render_board(&engine, config))?;
        writeln!(out)?;
        writeln!(
            out,
            "{}",
            status_message_with(&engine, |player| config.glyph(player))
        )?;
    }
    Ok(engine)
}

#[cfg(test)]
mod tests {
    use super::*;
    use marubatsu_core::Outcome;

    fn tokens(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_moves_rejects_unknown_token() {
        let err = parse_moves(&tokens(&["5", "nowhere"])).unwrap_err();
        assert!(err.to_string().contains("nowhere"));
    }

    #[test]
    fn test_transcript_and_board() {
        let config = AppConfig::default();
        let mut out = Vec::new();
        let engine = run_play(&tokens(&["1", "4", "2", "5", "3"]), false, &config, &mut out).unwrap();
        assert_eq!(engine.outcome(), Outcome::Won(Player::Maru));

        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("O -> Top-left\n  X's turn\n"));
        assert!(text.contains("O|O|O\n-+-+-\nX|X|6\n-+-+-\n7|8|9"));
        assert!(text.trim_end().ends_with("O win!"));
    }

    #[test]
    fn test_ignored_move_is_reported() {
        let config = AppConfig::default();
        let mut out = Vec::new();
        let engine = run_play(&tokens(&["center", "5"]), false, &config, &mut out).unwrap();
        assert_eq!(engine.remaining_cells(), 8);
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Center ignored"));
    }

    #[test]
    fn test_json_output() {
        let config = AppConfig::default();
        let mut out = Vec::new();
        run_play(&tokens(&["5"]), true, &config, &mut out).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["remaining_cells"], 8);
        assert_eq!(value["board"][1][1], "O");
    }
}
