//! Strictly Triples library - three-in-a-row on boards of any size
//!
//! A generalized tic-tac-toe: any `height × width` board, any number of
//! players taking turns in a fixed order, three in a row to win, and a
//! history of every board that can be revisited and branched from.
//!
//! # Architecture
//!
//! - **Engine**: owns the game state and applies moves, jumps and resets
//! - **Rules**: pure win detection over a row-major board
//! - **Invariants**: properties checked after every accepted move
//! - **TUI / script**: front ends that only talk to the engine
//!
//! # Example
//!
//! ```
//! use strictly_triples::{Dimensions, GameEngine, GameStatus, Mark, MarkSequence};
//!
//! let marks = MarkSequence::new([Mark::new('X'), Mark::new('O')])?;
//! let mut engine = GameEngine::new(Dimensions::new(3, 3)?, marks);
//!
//! for square in [0, 1, 3, 4, 6] {
//!     engine.apply_move(square)?;
//! }
//! assert_eq!(engine.status().winner(), Some(Mark::new('X')));
//! assert_eq!(engine.winning_line().map(|line| line.cells()), Some([0, 3, 6]));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod games;
mod script;

/// Terminal front end.
pub mod tui;

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig};

// Crate-level exports - Move scripts
pub use script::{Rejection, ScriptError, ScriptReport, ScriptStep, parse_script, run_script};

// Crate-level exports - Game types
pub use games::grid::{
    Board, Dimensions, Direction, GameEngine, GameState, GameStatus, HistoryError, Mark,
    MarkSequence, MoveError, Placement, SetupError, Square, WinningLine, detect,
};

// Crate-level exports - Invariants
pub use games::grid::invariants::{
    EngineInvariants, HistoryRootedInvariant, Invariant, InvariantSet, InvariantViolation,
    RoundRobinInvariant, SingleStepInvariant,
};
