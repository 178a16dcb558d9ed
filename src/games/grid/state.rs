//! Consolidated game state and the status derived from it.

use super::marks::MarkSequence;
use super::rules::{WinningLine, detect};
use super::types::{Board, Dimensions, Mark};
use serde::Serialize;
use tracing::instrument;

/// What the current board says about the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GameStatus {
    /// A mark has three in a row.
    Won {
        /// The winning mark.
        mark: Mark,
        /// Where the three are.
        line: WinningLine,
    },
    /// No winner yet; this mark plays next.
    NextTurn(Mark),
}

impl GameStatus {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            GameStatus::Won { mark, .. } => Some(*mark),
            GameStatus::NextTurn(_) => None,
        }
    }

    /// Returns true if a mark has won.
    pub fn is_won(&self) -> bool {
        matches!(self, GameStatus::Won { .. })
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::Won { mark, .. } => write!(f, "You're winner: {}", mark),
            GameStatus::NextTurn(mark) => write!(f, "Next player: {}", mark),
        }
    }
}

/// Complete game state: marks, every board so far, and where we are.
///
/// The mark to play is not stored; it follows from `current_move`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameState {
    /// Players in turn order.
    pub(crate) marks: MarkSequence,
    /// Board snapshots, starting with the empty board.
    pub(crate) history: Vec<Board>,
    /// Index of the board being shown and played on.
    pub(crate) current_move: usize,
}

impl GameState {
    /// Creates a fresh state with one empty board.
    #[instrument(skip(marks))]
    pub fn new(dimensions: Dimensions, marks: MarkSequence) -> Self {
        Self {
            marks,
            history: vec![Board::new(dimensions)],
            current_move: 0,
        }
    }

    /// Returns the board at the current position.
    pub fn current_board(&self) -> &Board {
        &self.history[self.current_move]
    }

    /// Returns every recorded board.
    pub fn history(&self) -> &[Board] {
        &self.history
    }

    /// Returns the current history index.
    pub fn current_move(&self) -> usize {
        self.current_move
    }

    /// Returns the players in turn order.
    pub fn marks(&self) -> &MarkSequence {
        &self.marks
    }

    /// Size of the boards in this game.
    pub fn dimensions(&self) -> Dimensions {
        self.history[0].dimensions()
    }

    /// Mark whose turn it is at the current position.
    pub fn active_mark(&self) -> Mark {
        self.marks.for_move(self.current_move)
    }

    /// Winning line on the current board, if any.
    pub fn winning_line(&self) -> Option<WinningLine> {
        let board = self.current_board();
        detect(board.squares(), board.dimensions().width())
    }

    /// Winner or next player at the current position.
    #[instrument(skip(self), fields(current_move = self.current_move))]
    pub fn status(&self) -> GameStatus {
        match self.winning_line() {
            Some(line) => GameStatus::Won {
                mark: line.mark(),
                line,
            },
            None => GameStatus::NextTurn(self.active_mark()),
        }
    }
}
