//! Three-in-a-row on a board of any size, for any number of players.

mod action;
mod engine;
mod error;
pub mod invariants;
mod marks;
pub mod rules;
mod state;
mod types;

pub use action::{MoveError, Placement};
pub use engine::GameEngine;
pub use error::{HistoryError, SetupError};
pub use marks::MarkSequence;
pub use rules::{Direction, WinningLine, detect};
pub use state::{GameState, GameStatus};
pub use types::{Board, Dimensions, Mark, Square};
