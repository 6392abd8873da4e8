//! Maru-batsu game engine.
//!
//! A two-player 3x3 game: Maru (`O`) moves first, Batsu (`X`) second, and
//! the first to complete a row, column or diagonal wins.
//!
//! # Example
//!
//! ```
//! use marubatsu_core::{Coord, GameEngine, Outcome, Player};
//!
//! let mut engine = GameEngine::new();
//! assert!(engine.place(Coord::CENTER));
//! assert!(!engine.place(Coord::CENTER)); // occupied
//! assert_eq!(engine.current_player(), Player::Batsu);
//! assert_eq!(engine.outcome(), Outcome::Ongoing);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod coord;
mod engine;
mod error;
pub mod invariants;
mod outcome;
pub mod rules;
mod session;
mod types;

pub use coord::{CELL_COUNT, Coord, SIZE};
pub use engine::{GameEngine, Snapshot};
pub use error::EngineError;
pub use outcome::Outcome;
pub use session::{Presenter, Session, status_message, status_message_with};
pub use types::{Board, Cell, Player};
