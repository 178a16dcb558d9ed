//! Application state and key handling.

use crate::games::grid::{GameEngine, GameStatus};
use crossterm::event::KeyCode;
use tracing::{debug, info, instrument};

use super::input::move_cursor;

/// Which panel receives arrow keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// Arrow keys move the board cursor.
    Board,
    /// Arrow keys pick a history entry.
    History,
}

/// Whether the event loop keeps going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Keep running.
    Continue,
    /// Leave the game.
    Quit,
}

/// Label of a history entry in the move list.
pub fn move_label(index: usize) -> String {
    if index == 0 {
        "Go to game start".to_string()
    } else {
        format!("Go to move #{}", index)
    }
}

/// Main application state.
///
/// Holds the engine plus what only the screen cares about: cursor,
/// focus, and the board size to use at the next restart.
#[derive(Debug)]
pub struct App {
    engine: GameEngine,
    cursor: usize,
    focus: Focus,
    selected: usize,
    pending_height: usize,
    pending_width: usize,
    message: Option<String>,
}

impl App {
    /// Creates a new application around an engine.
    pub fn new(engine: GameEngine) -> Self {
        let dimensions = engine.dimensions();
        Self {
            engine,
            cursor: 0,
            focus: Focus::Board,
            selected: 0,
            pending_height: dimensions.height(),
            pending_width: dimensions.width(),
            message: None,
        }
    }

    /// Gets the engine.
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Board square under the cursor.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Panel receiving arrow keys.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Highlighted history entry.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Board size applied on the next restart.
    pub fn pending_dimensions(&self) -> (usize, usize) {
        (self.pending_height, self.pending_width)
    }

    /// Status line: winner or next player, plus the last rejection.
    pub fn status_line(&self) -> String {
        let status = self.engine.status();
        let mut line = status.to_string();
        if let GameStatus::NextTurn(_) = status
            && self.engine.current_board().is_full()
        {
            line.push_str(" (no squares left, press r to restart)");
        }
        if let Some(message) = &self.message {
            line.push_str(" | ");
            line.push_str(message);
        }
        line
    }

    /// Labels for every history entry.
    pub fn history_labels(&self) -> Vec<String> {
        (0..self.engine.history_len()).map(move_label).collect()
    }

    /// Handles one key press.
    #[instrument(skip(self), fields(focus = ?self.focus))]
    pub fn handle_key(&mut self, key: KeyCode) -> Control {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => return Control::Quit,
            KeyCode::Tab => self.toggle_focus(),
            KeyCode::Char('r') => self.restart(),
            KeyCode::Char('h') => self.pending_height = self.pending_height.saturating_sub(1),
            KeyCode::Char('H') => self.pending_height = self.pending_height.saturating_add(1),
            KeyCode::Char('w') => self.pending_width = self.pending_width.saturating_sub(1),
            KeyCode::Char('W') => self.pending_width = self.pending_width.saturating_add(1),
            _ => match self.focus {
                Focus::Board => self.handle_board_key(key),
                Focus::History => self.handle_history_key(key),
            },
        }
        Control::Continue
    }

    fn handle_board_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Enter | KeyCode::Char(' ') => self.place(),
            _ => self.cursor = move_cursor(self.cursor, key, self.engine.dimensions()),
        }
    }

    fn handle_history_key(&mut self, key: KeyCode) {
        let last = self.engine.history_len() - 1;
        match key {
            KeyCode::Up => self.selected = self.selected.saturating_sub(1),
            KeyCode::Down => self.selected = (self.selected + 1).min(last),
            KeyCode::Enter | KeyCode::Char(' ') => self.jump(),
            _ => {}
        }
    }

    fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Board => {
                self.selected = self.engine.current_move();
                Focus::History
            }
            Focus::History => Focus::Board,
        };
    }

    fn place(&mut self) {
        match self.engine.apply_move(self.cursor) {
            Ok(placement) => {
                debug!(%placement, "Move applied to UI state");
                self.selected = self.engine.current_move();
                self.message = None;
            }
            Err(e) => self.message = Some(e.to_string()),
        }
    }

    fn jump(&mut self) {
        match self.engine.jump_to(self.selected) {
            Ok(()) => self.message = None,
            Err(e) => self.message = Some(e.to_string()),
        }
    }

    /// Restarts the game with the pending board size.
    pub fn restart(&mut self) {
        match self.engine.reset(self.pending_height, self.pending_width) {
            Ok(()) => {
                info!(
                    height = self.pending_height,
                    width = self.pending_width,
                    "Restarting game"
                );
                self.cursor = 0;
                self.selected = 0;
                self.message = Some(format!("Restarted on a {} board", self.engine.dimensions()));
            }
            Err(e) => self.message = Some(e.to_string()),
        }
    }
}
