//! Move scripts: replay a sequence of moves and jumps against an engine.
//!
//! A script is a list of steps separated by commas or whitespace. A bare
//! number places the active mark on that square; `@k` jumps to history
//! index `k`. For example `0, 1, @1, 4`.

use crate::games::grid::{GameEngine, Placement};
use derive_more::{Display, Error};
use serde::Serialize;
use std::str::FromStr;
use tracing::{debug, instrument, warn};

/// One step of a move script.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
pub enum ScriptStep {
    /// Place the active mark on a square.
    #[display("{}", _0)]
    Move(usize),
    /// Jump to a history index.
    #[display("@{}", _0)]
    Jump(usize),
}

/// Malformed script text.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum ScriptError {
    /// A step is neither a square index nor `@` followed by a history index.
    #[display("Invalid script step '{}'", _0)]
    InvalidStep(#[error(not(source))] String),
}

impl FromStr for ScriptStep {
    type Err = ScriptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ScriptError::InvalidStep(s.to_string());
        match s.strip_prefix('@') {
            Some(target) => target.parse().map(ScriptStep::Jump).map_err(|_| invalid()),
            None => s.parse().map(ScriptStep::Move).map_err(|_| invalid()),
        }
    }
}

/// Parses a whole script.
#[instrument]
pub fn parse_script(script: &str) -> Result<Vec<ScriptStep>, ScriptError> {
    script
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(str::parse)
        .collect()
}

/// A step the engine refused.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rejection {
    /// The refused step.
    pub step: ScriptStep,
    /// Why it was refused.
    pub reason: String,
}

/// What happened while running a script.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScriptReport {
    /// Moves the engine accepted, in order.
    pub applied: Vec<Placement>,
    /// Steps the engine refused, in order.
    pub rejected: Vec<Rejection>,
}

/// Runs every step against `engine`. Refused steps are recorded, not fatal.
#[instrument(skip(engine, steps), fields(steps = steps.len()))]
pub fn run_script(engine: &mut GameEngine, steps: &[ScriptStep]) -> ScriptReport {
    let mut report = ScriptReport::default();

    for &step in steps {
        let outcome = match step {
            ScriptStep::Move(index) => engine
                .apply_move(index)
                .map(|placement| report.applied.push(placement))
                .map_err(|e| e.to_string()),
            ScriptStep::Jump(target) => engine.jump_to(target).map_err(|e| e.to_string()),
        };
        if let Err(reason) = outcome {
            warn!(%step, %reason, "Script step rejected");
            report.rejected.push(Rejection { step, reason });
        }
    }

    debug!(
        applied = report.applied.len(),
        rejected = report.rejected.len(),
        "Script finished"
    );
    report
}
