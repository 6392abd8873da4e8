//! Presentation port and the session that drives it.
//!
//! A host UI implements [`Presenter`] and forwards taps (clicks, key
//! presses) to [`Session::on_cell_tapped`]. The session keeps the engine
//! and tells the presenter what to draw.

use super::coord::Coord;
use super::engine::GameEngine;
use super::error::EngineError;
use super::outcome::Outcome;
use super::types::{Cell, Player};
use tracing::{debug, instrument};

/// Output side of a host UI.
pub trait Presenter {
    /// Draws `player`'s mark in the cell at `coord`.
    fn render_cell(&mut self, coord: Coord, player: Player);

    /// Replaces the status line.
    fn show_message(&mut self, message: &str);

    /// Glyph this presenter draws for `player`; also used in status lines.
    fn glyph(&self, player: Player) -> &str {
        player.glyph()
    }
}

/// Status line for the engine's current state, using the default glyphs.
pub fn status_message(engine: &GameEngine) -> String {
    status_message_with(engine, Player::glyph)
}

/// Status line for the engine's current state, naming players by `glyph`.
pub fn status_message_with<'g>(engine: &GameEngine, glyph: impl Fn(Player) -> &'g str) -> String {
    match engine.outcome() {
        Outcome::Ongoing => format!("{}'s turn", glyph(engine.current_player())),
        Outcome::Won(player) => format!("{} win!", glyph(player)),
        Outcome::Draw => "Draw :(".to_string(),
    }
}

/// One game, bound to one presenter.
#[derive(Debug)]
pub struct Session<P> {
    engine: GameEngine,
    presenter: P,
}

impl<P: Presenter> Session<P> {
    /// Starts a new game drawn on `presenter`.
    pub fn new(presenter: P) -> Self {
        Self {
            engine: GameEngine::new(),
            presenter,
        }
    }

    /// Handles a tap on the cell at `coord`.
    ///
    /// Rejected moves are ignored: nothing is rendered and `false` is
    /// returned.
    #[instrument(skip(self), fields(coord = %coord))]
    pub fn on_cell_tapped(&mut self, coord: Coord) -> bool {
        if !self.engine.place(coord) {
            return false;
        }

        if let Cell::Occupied(player) = self.engine.cell(coord) {
            self.presenter.render_cell(coord, player);
        }
        let message = status_message_with(&self.engine, |player| self.presenter.glyph(player));
        debug!(%message, "Status updated");
        self.presenter.show_message(&message);
        true
    }

    /// Handles a tap at raw `(row, column)` coordinates.
    pub fn on_cell_tapped_at(&mut self, row: usize, column: usize) -> Result<bool, EngineError> {
        let coord = Coord::new(row, column)?;
        Ok(self.on_cell_tapped(coord))
    }

    /// Returns the engine.
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Returns the presenter.
    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    /// Returns the presenter mutably.
    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    /// Ends the session, handing the presenter back.
    pub fn into_presenter(self) -> P {
        self.presenter
    }
}
