//! History rooted invariant: history starts empty and the position is inside it.

use super::super::{GameState, Square};
use super::Invariant;

/// Invariant: history begins with an empty board and stays on one size.
///
/// Every snapshot shares the first board's dimensions and square count,
/// and the current position indexes a recorded board.
pub struct HistoryRootedInvariant;

impl Invariant<GameState> for HistoryRootedInvariant {
    fn holds(state: &GameState) -> bool {
        let Some(root) = state.history.first() else {
            return false;
        };
        let dimensions = root.dimensions();

        root.squares().iter().all(|s| *s == Square::Empty)
            && state.current_move < state.history.len()
            && state
                .history
                .iter()
                .all(|b| b.dimensions() == dimensions && b.len() == dimensions.cells())
    }

    fn description() -> &'static str {
        "History starts with an empty board of fixed size and contains the current position"
    }
}
