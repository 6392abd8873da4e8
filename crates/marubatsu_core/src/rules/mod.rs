//! Game rules for maru-batsu.
//!
//! Pure functions over a board snapshot. Rules are kept apart from the
//! engine's mutable state so each line check can be tested on its own.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{
    anti_diagonal_winner, column_winner, main_diagonal_winner, row_winner, winner_through,
};
