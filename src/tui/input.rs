//! Cursor movement for keyboard navigation.

use crate::games::grid::Dimensions;
use crossterm::event::KeyCode;

/// Moves cursor based on arrow keys, stopping at the board edges.
pub fn move_cursor(cursor: usize, key: KeyCode, dimensions: Dimensions) -> usize {
    let width = dimensions.width();
    let (x, y) = (cursor % width, cursor / width);

    match key {
        KeyCode::Right if x + 1 < width => cursor + 1,
        KeyCode::Left if x > 0 => cursor - 1,
        KeyCode::Down if y + 1 < dimensions.height() => cursor + width,
        KeyCode::Up if y > 0 => cursor - width,
        // No change for other keys or edge cases
        _ => cursor,
    }
}
