//! Application state and key handling.

use super::input::{digit_cell, move_cursor};
use crate::config::AppConfig;
use crossterm::event::KeyCode;
use marubatsu_core::{Coord, GameEngine, Player, Presenter, SIZE, Session, status_message_with};
use tracing::{debug, info};

/// What the cells and status line currently show.
///
/// Filled in only through the [`Presenter`] calls, the way the nine text
/// cells of a touch UI would be.
#[derive(Debug, Clone)]
pub struct TuiPresenter {
    cells: [[Option<Player>; SIZE]; SIZE],
    status: String,
    maru: String,
    batsu: String,
}

impl TuiPresenter {
    fn new(engine: &GameEngine, config: &AppConfig) -> Self {
        let mut presenter = Self {
            cells: [[None; SIZE]; SIZE],
            status: String::new(),
            maru: config.maru_glyph().clone(),
            batsu: config.batsu_glyph().clone(),
        };
        let status = status_message_with(engine, |player| presenter.glyph(player));
        presenter.status = status;
        presenter
    }

    /// Mark drawn at `coord`, if any.
    pub fn cell(&self, coord: Coord) -> Option<Player> {
        self.cells[coord.row()][coord.column()]
    }

    /// Current status line.
    pub fn status(&self) -> &str {
        &self.status
    }
}

impl Presenter for TuiPresenter {
    fn render_cell(&mut self, coord: Coord, player: Player) {
        self.cells[coord.row()][coord.column()] = Some(player);
    }

    fn show_message(&mut self, message: &str) {
        self.status = message.to_string();
    }

    fn glyph(&self, player: Player) -> &str {
        match player {
            Player::Maru => &self.maru,
            Player::Batsu => &self.batsu,
        }
    }
}

/// Main application state.
pub struct App {
    session: Session<TuiPresenter>,
    cursor: Coord,
    config: AppConfig,
}

impl App {
    /// Creates an application with a fresh game.
    pub fn new(config: AppConfig) -> Self {
        Self {
            session: new_session(&config),
            cursor: Coord::CENTER,
            config,
        }
    }

    /// Returns the running session.
    pub fn session(&self) -> &Session<TuiPresenter> {
        &self.session
    }

    /// Returns the cell under the cursor.
    pub fn cursor(&self) -> Coord {
        self.cursor
    }

    /// Returns the configuration.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Handles a key press. Returns `false` when the user asked to quit.
    pub fn handle_key(&mut self, key: KeyCode) -> bool {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => {
                info!("User quit");
                return false;
            }
            KeyCode::Char('n') => self.restart(),
            KeyCode::Enter | KeyCode::Char(' ') => self.tap(self.cursor),
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = move_cursor(self.cursor, key);
            }
            other => {
                if let Some(coord) = digit_cell(other) {
                    self.cursor = coord;
                    self.tap(coord);
                }
            }
        }
        true
    }

    fn tap(&mut self, coord: Coord) {
        if !self.session.on_cell_tapped(coord) {
            debug!(coord = %coord, "Tap ignored");
        }
    }

    /// Starts a new game; the old engine is dropped, not reset.
    pub fn restart(&mut self) {
        info!("Starting new game");
        self.session = new_session(&self.config);
        self.cursor = Coord::CENTER;
    }
}

fn new_session(config: &AppConfig) -> Session<TuiPresenter> {
    let presenter = TuiPresenter::new(&GameEngine::new(), config);
    Session::new(presenter)
}
