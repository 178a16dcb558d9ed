//! Three-in-a-row detection on boards of any size.

use super::super::types::{Mark, Square};
use serde::Serialize;
use strum::IntoEnumIterator;
use tracing::instrument;

/// Length of a winning run.
pub const RUN_LENGTH: usize = 3;

/// Direction a line extends from its first square.
///
/// Variant order is the order lines are tried for each square.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, strum::EnumIter, strum::Display,
)]
pub enum Direction {
    /// Left to right along a row.
    #[strum(to_string = "horizontal")]
    Horizontal,
    /// Top to bottom along a column.
    #[strum(to_string = "vertical")]
    Vertical,
    /// Down and to the right.
    #[strum(to_string = "diagonal down-right")]
    DiagonalDownRight,
    /// Down and to the left.
    #[strum(to_string = "diagonal down-left")]
    DiagonalDownLeft,
}

impl Direction {
    /// Index distance between consecutive squares of a line.
    fn stride(self, width: usize) -> usize {
        match self {
            Direction::Horizontal => 1,
            Direction::Vertical => width,
            Direction::DiagonalDownRight => width + 1,
            Direction::DiagonalDownLeft => width - 1,
        }
    }

    /// Whether a line starting at column `x`, row `y` stays on the board.
    fn fits(self, x: usize, y: usize, width: usize, rows: usize) -> bool {
        let room_right = x + RUN_LENGTH - 1 < width;
        let room_left = x >= RUN_LENGTH - 1;
        let room_down = y + RUN_LENGTH - 1 < rows;
        match self {
            Direction::Horizontal => room_right,
            Direction::Vertical => room_down,
            Direction::DiagonalDownRight => room_right && room_down,
            Direction::DiagonalDownLeft => room_left && room_down,
        }
    }
}

/// Three aligned squares holding the same mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct WinningLine {
    /// Square indices, starting at the scanned square.
    cells: [usize; RUN_LENGTH],
    /// Direction the line runs in.
    direction: Direction,
    /// Mark held by all three squares.
    mark: Mark,
}

impl WinningLine {
    /// Square indices of the line.
    pub fn cells(&self) -> [usize; RUN_LENGTH] {
        self.cells
    }

    /// Direction the line runs in.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Mark held by all three squares.
    pub fn mark(&self) -> Mark {
        self.mark
    }

    /// Checks whether a square is part of the line.
    pub fn contains(&self, index: usize) -> bool {
        self.cells.contains(&index)
    }
}

/// Finds the first winning line on a row-major board.
///
/// Squares are scanned in index order and, for each square, directions in
/// [`Direction`] order; the first line whose squares all hold the same mark
/// wins. Boards narrower or shorter than three squares never have a line,
/// not even along their long side.
#[instrument(skip(squares), fields(cells = squares.len()))]
pub fn detect(squares: &[Square], width: usize) -> Option<WinningLine> {
    if width < RUN_LENGTH {
        return None;
    }
    let rows = squares.len() / width;
    if rows < RUN_LENGTH {
        return None;
    }

    for i in 0..squares.len() {
        let (x, y) = (i % width, i / width);
        for direction in Direction::iter() {
            if !direction.fits(x, y, width, rows) {
                continue;
            }
            let stride = direction.stride(width);
            let cells = [i, i + stride, i + 2 * stride];
            if let Some(mark) = uniform(squares, cells) {
                return Some(WinningLine {
                    cells,
                    direction,
                    mark,
                });
            }
        }
    }

    None
}

/// Returns the mark shared by all of `cells`, if any.
fn uniform(squares: &[Square], cells: [usize; RUN_LENGTH]) -> Option<Mark> {
    let first = squares.get(cells[0])?.mark()?;
    cells[1..]
        .iter()
        .all(|&c| squares.get(c) == Some(&Square::Occupied(first)))
        .then_some(first)
}
