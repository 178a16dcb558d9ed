//! Errors raised while configuring a game or travelling through its history.

use super::types::Mark;
use derive_more::{Display, Error};

/// Invalid board dimensions or mark sequence.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum SetupError {
    /// Height or width is zero.
    #[display("Board dimensions must be positive, got {}x{}", height, width)]
    ZeroDimension {
        /// Requested number of rows.
        height: usize,
        /// Requested number of columns.
        width: usize,
    },

    /// The board would exceed [`Dimensions::MAX_CELLS`](super::Dimensions::MAX_CELLS) squares.
    #[display("Board of {}x{} squares is too large", height, width)]
    TooManyCells {
        /// Requested number of rows.
        height: usize,
        /// Requested number of columns.
        width: usize,
    },

    /// The mark sequence is empty.
    #[display("At least one player mark is required")]
    NoMarks,

    /// The same mark appears twice in the sequence.
    #[display("Mark {} appears more than once", _0)]
    DuplicateMark(#[error(not(source))] Mark),
}

/// A jump target outside the recorded history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum HistoryError {
    /// Target index is past the last recorded board.
    #[display("Move {} is not in a history of {} boards", target, len)]
    OutOfRange {
        /// Requested history index.
        target: usize,
        /// Number of recorded boards.
        len: usize,
    },
}
