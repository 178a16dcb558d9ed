//! Properties every reachable game state satisfies.
//!
//! Each invariant is a zero-sized type checked against a [`GameState`]
//! snapshot. The engine runs [`EngineInvariants`] after each accepted move
//! in debug builds.
//!
//! [`GameState`]: super::GameState

use derive_more::Display;

/// A property of a state `S`.
pub trait Invariant<S> {
    /// True if `state` has the property.
    fn holds(state: &S) -> bool;

    /// What the property says, for logs and errors.
    fn description() -> &'static str;
}

/// An invariant that did not hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[display("{}", description)]
pub struct InvariantViolation {
    /// The broken property.
    pub description: &'static str,
}

/// Invariants checked as a group, in order.
pub trait InvariantSet<S> {
    /// Collects every violated invariant; `Ok` when all hold.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, A, B, C> InvariantSet<S> for (A, B, C)
where
    A: Invariant<S>,
    B: Invariant<S>,
    C: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let checks: [(fn(&S) -> bool, &'static str); 3] = [
            (A::holds, A::description()),
            (B::holds, B::description()),
            (C::holds, C::description()),
        ];
        let violations: Vec<_> = checks
            .into_iter()
            .filter(|(holds, _)| !holds(state))
            .map(|(_, description)| InvariantViolation { description })
            .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

pub mod history_rooted;
pub mod round_robin;
pub mod single_step;

pub use history_rooted::HistoryRootedInvariant;
pub use round_robin::RoundRobinInvariant;
pub use single_step::SingleStepInvariant;

/// All engine invariants as a composable set.
pub type EngineInvariants = (
    HistoryRootedInvariant,
    SingleStepInvariant,
    RoundRobinInvariant,
);

/// Square that changed between two consecutive boards, if exactly one did.
pub(crate) fn changed_square(
    before: &super::Board,
    after: &super::Board,
) -> Option<(usize, super::Square)> {
    if before.len() != after.len() {
        return None;
    }
    let mut changed = before
        .squares()
        .iter()
        .zip(after.squares())
        .enumerate()
        .filter(|(_, (b, a))| b != a);
    let (index, (_, square)) = changed.next()?;
    match changed.next() {
        Some(_) => None,
        None => Some((index, *square)),
    }
}
