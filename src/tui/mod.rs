//! Terminal UI for maru-batsu.

mod app;
mod input;
mod ui;

pub use app::{App, TuiPresenter};

use crate::config::AppConfig;
use crate::logging;
use anyhow::Result;
use crossterm::{
    cursor::Show,
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use tracing::{error, info, instrument, warn};

type Term = Terminal<CrosstermBackend<Stdout>>;

/// Raw mode and alternate screen, restored when dropped.
///
/// Created before anything else touches the terminal so every exit path,
/// including early `?` returns and panics, leaves it usable.
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> Result<Self> {
        enable_raw_mode()?;
        let guard = Self;
        execute!(io::stdout(), EnterAlternateScreen)?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(err) = disable_raw_mode() {
            warn!(error = %err, "Failed to disable raw mode");
        }
        if let Err(err) = execute!(io::stdout(), LeaveAlternateScreen, Show) {
            warn!(error = %err, "Failed to leave alternate screen");
        }
    }
}

/// Runs the interactive game until the user quits.
pub fn run_tui(config: AppConfig) -> Result<()> {
    // Log to a file so tracing output does not tear the screen
    logging::init_file(config.log_file(), config.log_filter())?;

    info!("Starting maru-batsu TUI");

    let res = {
        let _guard = TerminalGuard::enter()?;
        Terminal::new(CrosstermBackend::new(io::stdout()))
            .map_err(anyhow::Error::from)
            .and_then(|mut terminal| run_loop(&mut terminal, App::new(config)))
    };

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    res
}

#[instrument(skip_all)]
fn run_loop(terminal: &mut Term, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, &app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if !app.handle_key(key.code) {
                return Ok(());
            }
        }
    }
}
