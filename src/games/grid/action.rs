//! Moves and their outcomes.
//!
//! A move is identified by the square it targets; the mark is never
//! chosen by the caller because it follows from the history position.

use super::types::Mark;
use derive_new::new;
use serde::{Deserialize, Serialize};

/// An accepted move: which mark went where, and at which history index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, new)]
pub struct Placement {
    /// Square that was marked.
    pub index: usize,
    /// Mark that was placed.
    pub mark: Mark,
    /// History index of the board produced by this move (1 for the first move).
    pub move_number: usize,
}

impl std::fmt::Display for Placement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}: {} -> {}", self.move_number, self.mark, self.index)
    }
}

/// Reason a move was rejected. The game is unchanged in every case.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The square index is past the end of the board.
    #[display("Square {} is outside a board of {} squares", index, cells)]
    OutOfBounds {
        /// Requested square.
        index: usize,
        /// Number of squares on the board.
        cells: usize,
    },

    /// The square already holds a mark.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(usize),

    /// The current board already has a winning line.
    #[display("Game is already won by {}", _0)]
    GameOver(Mark),

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}
