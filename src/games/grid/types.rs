//! Core domain types for the grid game.

use super::error::SetupError;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A player's symbol on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Mark(char);

impl Mark {
    /// Creates a mark from its symbol.
    pub const fn new(symbol: char) -> Self {
        Self(symbol)
    }

    /// Returns the symbol drawn for this mark.
    pub fn symbol(self) -> char {
        self.0
    }
}

impl From<char> for Mark {
    fn from(symbol: char) -> Self {
        Self(symbol)
    }
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A square on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a mark.
    Occupied(Mark),
}

impl Square {
    /// Returns the mark in this square, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Square::Empty => None,
            Square::Occupied(mark) => Some(mark),
        }
    }
}

/// Board size in rows and columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dimensions {
    /// Number of rows.
    height: usize,
    /// Number of squares per row.
    width: usize,
}

impl Dimensions {
    /// Board the game opens with.
    pub const DEFAULT: Self = Self {
        height: 6,
        width: 5,
    };

    /// Largest number of squares a board may have (256 × 256).
    ///
    /// Every move keeps a full snapshot, so history grows with the square
    /// of this number.
    pub const MAX_CELLS: usize = 1 << 16;

    /// Validates and creates board dimensions.
    ///
    /// # Errors
    ///
    /// Returns [`SetupError::ZeroDimension`] if either side is zero and
    /// [`SetupError::TooManyCells`] if the board would hold more than
    /// [`Dimensions::MAX_CELLS`] squares.
    #[instrument]
    pub fn new(height: usize, width: usize) -> Result<Self, SetupError> {
        if height == 0 || width == 0 {
            return Err(SetupError::ZeroDimension { height, width });
        }
        if height
            .checked_mul(width)
            .is_none_or(|cells| cells > Self::MAX_CELLS)
        {
            return Err(SetupError::TooManyCells { height, width });
        }
        Ok(Self { height, width })
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of squares per row.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of squares on a board of this size.
    pub fn cells(&self) -> usize {
        self.height * self.width
    }
}

impl Default for Dimensions {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl std::fmt::Display for Dimensions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.height, self.width)
    }
}

/// One snapshot of the board in row-major order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Board {
    /// Size of the board.
    dimensions: Dimensions,
    /// Squares in row-major order, `height * width` of them.
    squares: Vec<Square>,
}

impl Board {
    /// Creates an empty board.
    #[instrument]
    pub fn new(dimensions: Dimensions) -> Self {
        Self {
            dimensions,
            squares: vec![Square::Empty; dimensions.cells()],
        }
    }

    /// Returns the board size.
    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    /// Gets the square at the given index.
    pub fn get(&self, index: usize) -> Option<Square> {
        self.squares.get(index).copied()
    }

    /// Checks if a square is empty. Out-of-range indices are not empty.
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Square::Empty))
    }

    /// Returns all squares in row-major order.
    pub fn squares(&self) -> &[Square] {
        &self.squares
    }

    /// Number of squares on the board.
    pub fn len(&self) -> usize {
        self.squares.len()
    }

    /// Checks if no square is left empty.
    pub fn is_full(&self) -> bool {
        self.squares.iter().all(|s| *s != Square::Empty)
    }

    /// Returns a copy of this board with one square marked.
    ///
    /// Callers check bounds and occupancy first.
    pub(crate) fn with_mark(&self, index: usize, mark: Mark) -> Self {
        let mut next = self.clone();
        next.squares[index] = Square::Occupied(mark);
        next
    }

    /// Formats the board as a human-readable grid.
    pub fn display(&self) -> String {
        let width = self.dimensions.width();
        self.squares
            .chunks(width)
            .map(|row| {
                row.iter()
                    .map(|square| match square {
                        Square::Empty => ".".to_string(),
                        Square::Occupied(mark) => mark.to_string(),
                    })
                    .collect::<Vec<_>>()
                    .join("|")
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
impl Board {
    /// Test hook for writing squares directly.
    pub(crate) fn set(&mut self, index: usize, square: Square) {
        self.squares[index] = square;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_dimensions_rejected() {
        assert_eq!(
            Dimensions::new(0, 5),
            Err(SetupError::ZeroDimension {
                height: 0,
                width: 5
            })
        );
        assert!(Dimensions::new(3, 0).is_err());
    }

    #[test]
    fn test_overflowing_dimensions_rejected() {
        assert!(matches!(
            Dimensions::new(usize::MAX, 2),
            Err(SetupError::TooManyCells { .. })
        ));
    }

    #[test]
    fn test_cell_ceiling() {
        assert!(Dimensions::new(256, 256).is_ok());
        assert_eq!(
            Dimensions::new(256, 257),
            Err(SetupError::TooManyCells {
                height: 256,
                width: 257
            })
        );
        assert!(Dimensions::new(1, Dimensions::MAX_CELLS + 1).is_err());
    }

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new(Dimensions::new(6, 5).unwrap());
        assert_eq!(board.len(), 30);
        assert!(board.squares().iter().all(|s| *s == Square::Empty));
        assert!(!board.is_full());
    }

    #[test]
    fn test_with_mark_leaves_source_untouched() {
        let board = Board::new(Dimensions::new(3, 3).unwrap());
        let next = board.with_mark(4, Mark::new('X'));
        assert!(board.is_empty(4));
        assert_eq!(next.get(4), Some(Square::Occupied(Mark::new('X'))));
    }

    #[test]
    fn test_out_of_range_is_not_empty() {
        let board = Board::new(Dimensions::new(2, 2).unwrap());
        assert!(!board.is_empty(4));
        assert_eq!(board.get(4), None);
    }

    #[test]
    fn test_display_grid() {
        let board = Board::new(Dimensions::new(2, 3).unwrap()).with_mark(1, Mark::new('O'));
        assert_eq!(board.display(), ".|O|.\n.|.|.");
    }
}
