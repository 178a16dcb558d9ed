//! Game rules for the grid game.
//!
//! Rules are pure functions over board snapshots, kept apart from the
//! engine so they can be checked on any board in the history.

pub mod win;

pub use win::{Direction, WinningLine, detect};
