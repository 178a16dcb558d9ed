//! Game engine: moves, history travel and restarts.

use super::action::{MoveError, Placement};
use super::error::{HistoryError, SetupError};
use super::marks::MarkSequence;
use super::rules::WinningLine;
use super::state::{GameState, GameStatus};
use super::types::{Board, Dimensions, Mark};
use tracing::{debug, info, instrument, warn};

/// Grid game engine.
///
/// Owns the only copy of the game state. Every operation either fully
/// applies or leaves the state exactly as it was.
#[derive(Debug, Clone)]
pub struct GameEngine {
    state: GameState,
}

impl GameEngine {
    /// Creates a new game with an empty board.
    #[instrument(skip(marks), fields(players = marks.len()))]
    pub fn new(dimensions: Dimensions, marks: MarkSequence) -> Self {
        Self {
            state: GameState::new(dimensions, marks),
        }
    }

    /// Returns the current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Places the active mark on `index` of the current board.
    ///
    /// If the current position is behind the end of history, the boards
    /// after it are discarded before the new one is appended.
    ///
    /// # Errors
    ///
    /// - [`MoveError::OutOfBounds`] if `index` is not on the board.
    /// - [`MoveError::SquareOccupied`] if the square holds a mark.
    /// - [`MoveError::GameOver`] if the current board already has a winner.
    /// - [`MoveError::InvariantViolation`] in debug builds if the move would
    ///   corrupt history; the move is rolled back.
    #[instrument(skip(self), fields(current_move = self.state.current_move))]
    pub fn apply_move(&mut self, index: usize) -> Result<Placement, MoveError> {
        let board = self.state.current_board();

        if index >= board.len() {
            warn!(index, cells = board.len(), "Rejected move outside board");
            return Err(MoveError::OutOfBounds {
                index,
                cells: board.len(),
            });
        }

        if !board.is_empty(index) {
            warn!(index, "Rejected move on occupied square");
            return Err(MoveError::SquareOccupied(index));
        }

        if let Some(line) = self.state.winning_line() {
            warn!(index, winner = %line.mark(), "Rejected move after win");
            return Err(MoveError::GameOver(line.mark()));
        }

        let mark = self.state.active_mark();
        let next = board.with_mark(index, mark);
        let previous_move = self.state.current_move;

        let discarded = self.state.history.split_off(previous_move + 1);
        self.state.history.push(next);
        self.state.current_move = self.state.history.len() - 1;

        // Postcondition: verify history in debug builds
        #[cfg(debug_assertions)]
        self.check_postcondition(previous_move, &discarded)?;

        let placement = Placement::new(index, mark, self.state.current_move);
        debug!(
            %placement,
            discarded = discarded.len(),
            "Move applied"
        );
        Ok(placement)
    }

    /// Rolls the last move back if the state broke an engine invariant.
    #[cfg(debug_assertions)]
    fn check_postcondition(
        &mut self,
        previous_move: usize,
        discarded: &[Board],
    ) -> Result<(), MoveError> {
        use super::invariants::{EngineInvariants, InvariantSet};

        let Err(violations) = EngineInvariants::check_all(&self.state) else {
            return Ok(());
        };
        let descriptions = violations
            .iter()
            .map(|v| v.description)
            .collect::<Vec<_>>()
            .join("; ");
        warn!(%descriptions, "Postcondition failed, rolling back move");
        self.state.history.pop();
        self.state.history.extend(discarded.iter().cloned());
        self.state.current_move = previous_move;
        Err(MoveError::InvariantViolation(format!(
            "Postcondition failed: {}",
            descriptions
        )))
    }

    /// Moves the current position to history index `target`.
    ///
    /// The active mark follows from the new position.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError::OutOfRange`] if no board is recorded at
    /// `target`; the position is left unchanged.
    #[instrument(skip(self), fields(current_move = self.state.current_move))]
    pub fn jump_to(&mut self, target: usize) -> Result<(), HistoryError> {
        let len = self.state.history.len();
        if target >= len {
            warn!(target, len, "Rejected jump outside history");
            return Err(HistoryError::OutOfRange { target, len });
        }
        self.state.current_move = target;
        debug!(target, next = %self.state.active_mark(), "Jumped in history");
        Ok(())
    }

    /// Starts over on an empty board of the given size.
    ///
    /// # Errors
    ///
    /// Returns a [`SetupError`] for invalid dimensions; the current game is
    /// kept in that case.
    #[instrument(skip(self))]
    pub fn reset(&mut self, height: usize, width: usize) -> Result<(), SetupError> {
        let dimensions = Dimensions::new(height, width)?;
        self.state.history = vec![Board::new(dimensions)];
        self.state.current_move = 0;
        info!(%dimensions, "Game reset");
        Ok(())
    }

    /// Winner or next player at the current position.
    pub fn status(&self) -> GameStatus {
        self.state.status()
    }

    /// Board at the current position.
    pub fn current_board(&self) -> &Board {
        self.state.current_board()
    }

    /// Number of recorded boards, including the empty start.
    pub fn history_len(&self) -> usize {
        self.state.history.len()
    }

    /// Every recorded board.
    pub fn history(&self) -> &[Board] {
        self.state.history()
    }

    /// Current history index.
    pub fn current_move(&self) -> usize {
        self.state.current_move()
    }

    /// Winning line on the current board, for highlighting.
    pub fn winning_line(&self) -> Option<WinningLine> {
        self.state.winning_line()
    }

    /// Mark whose turn it is at the current position.
    pub fn active_mark(&self) -> Mark {
        self.state.active_mark()
    }

    /// Size of the current board.
    pub fn dimensions(&self) -> Dimensions {
        self.state.dimensions()
    }

    /// Players in turn order.
    pub fn marks(&self) -> &MarkSequence {
        self.state.marks()
    }

    /// True until the first move of this game has been made.
    pub fn is_unplayed(&self) -> bool {
        self.state.history.len() == 1
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new(Dimensions::default(), MarkSequence::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::grid::Square;

    fn three_by_three(marks: &[char]) -> GameEngine {
        let marks = MarkSequence::new(marks.iter().copied().map(Mark::new)).unwrap();
        GameEngine::new(Dimensions::new(3, 3).unwrap(), marks)
    }

    #[test]
    fn test_first_move_uses_first_mark() {
        let mut engine = GameEngine::default();
        let placement = engine.apply_move(7).unwrap();
        assert_eq!(placement, Placement::new(7, Mark::new('X'), 1));
        assert_eq!(engine.current_board().get(7), Some(Square::Occupied(Mark::new('X'))));
        assert_eq!(engine.active_mark(), Mark::new('O'));
    }

    #[test]
    fn test_out_of_bounds_rejected() {
        let mut engine = three_by_three(&['X', 'O']);
        assert_eq!(
            engine.apply_move(9),
            Err(MoveError::OutOfBounds { index: 9, cells: 9 })
        );
        assert_eq!(engine.history_len(), 1);
    }

    #[test]
    fn test_occupied_rejected_before_game_over() {
        let mut engine = three_by_three(&['X', 'O']);
        for index in [0, 1, 3, 4, 6] {
            engine.apply_move(index).unwrap();
        }
        assert_eq!(engine.apply_move(0), Err(MoveError::SquareOccupied(0)));
        assert_eq!(engine.apply_move(8), Err(MoveError::GameOver(Mark::new('X'))));
    }

    #[test]
    fn test_jump_rejects_out_of_range() {
        let mut engine = three_by_three(&['X', 'O']);
        engine.apply_move(4).unwrap();
        assert_eq!(
            engine.jump_to(2),
            Err(HistoryError::OutOfRange { target: 2, len: 2 })
        );
        assert_eq!(engine.current_move(), 1);
    }

    #[test]
    fn test_jump_rederives_active_mark() {
        let mut engine = three_by_three(&['X', 'O', 'A']);
        for index in [0, 1, 2, 3] {
            engine.apply_move(index).unwrap();
        }
        engine.jump_to(2).unwrap();
        assert_eq!(engine.active_mark(), Mark::new('A'));
        engine.jump_to(0).unwrap();
        assert_eq!(engine.active_mark(), Mark::new('X'));
    }

    #[test]
    fn test_branch_discards_tail() {
        let mut engine = three_by_three(&['X', 'O']);
        for index in [0, 1, 2, 3] {
            engine.apply_move(index).unwrap();
        }
        engine.jump_to(1).unwrap();
        let placement = engine.apply_move(8).unwrap();
        assert_eq!(placement.move_number, 2);
        assert_eq!(engine.history_len(), 3);
        assert!(engine.current_board().is_empty(1));
    }

    #[test]
    fn test_reset_invalid_keeps_game() {
        let mut engine = three_by_three(&['X', 'O']);
        engine.apply_move(4).unwrap();
        assert!(engine.reset(0, 4).is_err());
        assert_eq!(engine.history_len(), 2);
        assert_eq!(engine.dimensions(), Dimensions::new(3, 3).unwrap());
    }

    #[test]
    fn test_reset_too_large_keeps_game() {
        let mut engine = three_by_three(&['X', 'O']);
        engine.apply_move(4).unwrap();
        assert_eq!(
            engine.reset(usize::MAX / 4, 2),
            Err(SetupError::TooManyCells {
                height: usize::MAX / 4,
                width: 2
            })
        );
        assert_eq!(engine.history_len(), 2);
        assert_eq!(engine.current_board().len(), 9);
    }

    #[test]
    fn test_reset_changes_size_and_keeps_marks() {
        let mut engine = three_by_three(&['X', 'O']);
        engine.apply_move(4).unwrap();
        engine.reset(4, 7).unwrap();
        assert!(engine.is_unplayed());
        assert_eq!(engine.current_board().len(), 28);
        assert_eq!(engine.marks().len(), 2);
        assert_eq!(engine.status(), GameStatus::NextTurn(Mark::new('X')));
    }

    #[test]
    #[cfg(debug_assertions)]
    fn test_corrupt_history_rolls_back_move() {
        let mut engine = three_by_three(&['X', 'O']);
        engine.apply_move(0).unwrap();
        engine.apply_move(1).unwrap();
        engine.jump_to(1).unwrap();
        engine.state.history[1].set(5, Square::Occupied(Mark::new('O')));
        let before = engine.state().clone();

        assert!(matches!(
            engine.apply_move(8),
            Err(MoveError::InvariantViolation(_))
        ));
        assert_eq!(engine.state(), &before);
        assert_eq!(engine.history_len(), 3);
    }

    #[test]
    fn test_single_mark_plays_every_turn() {
        let mut engine = three_by_three(&['Z']);
        for index in [0, 1, 2] {
            engine.apply_move(index).unwrap();
        }
        assert_eq!(engine.status().winner(), Some(Mark::new('Z')));
    }
}
