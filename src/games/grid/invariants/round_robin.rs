//! Round robin invariant: marks take turns in sequence order.

use super::super::GameState;
use super::{Invariant, changed_square};

/// Invariant: the mark placed at history index `n` is `marks[(n - 1) % len]`.
pub struct RoundRobinInvariant;

impl Invariant<GameState> for RoundRobinInvariant {
    fn holds(state: &GameState) -> bool {
        state
            .history
            .windows(2)
            .enumerate()
            .all(|(step, pair)| match changed_square(&pair[0], &pair[1]) {
                Some((_, square)) => square.mark() == Some(state.marks.for_move(step)),
                None => false,
            })
    }

    fn description() -> &'static str {
        "Marks are placed in round-robin order"
    }
}
