//! Single step invariant: each move marks exactly one empty square.

use super::super::{GameState, Square};
use super::{Invariant, changed_square};

/// Invariant: consecutive snapshots differ in exactly one square.
///
/// That square was empty before and holds a mark after. Snapshots are
/// never edited in place, so no earlier board can change.
pub struct SingleStepInvariant;

impl Invariant<GameState> for SingleStepInvariant {
    fn holds(state: &GameState) -> bool {
        state.history.windows(2).all(|pair| {
            match changed_square(&pair[0], &pair[1]) {
                Some((index, Square::Occupied(_))) => pair[0].is_empty(index),
                _ => false,
            }
        })
    }

    fn description() -> &'static str {
        "Each history step marks exactly one previously empty square"
    }
}
