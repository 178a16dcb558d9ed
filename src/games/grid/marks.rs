//! Round-robin player marks.

use super::error::SetupError;
use super::types::Mark;
use serde::Serialize;
use tracing::instrument;

/// Ordered, non-empty list of distinct marks taking turns in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct MarkSequence {
    marks: Vec<Mark>,
}

impl MarkSequence {
    /// Validates and creates a mark sequence.
    ///
    /// # Errors
    ///
    /// Returns [`SetupError::NoMarks`] for an empty list and
    /// [`SetupError::DuplicateMark`] if a mark repeats.
    #[instrument(skip(marks))]
    pub fn new(marks: impl IntoIterator<Item = Mark>) -> Result<Self, SetupError> {
        let marks: Vec<Mark> = marks.into_iter().collect();
        if marks.is_empty() {
            return Err(SetupError::NoMarks);
        }
        for (i, mark) in marks.iter().enumerate() {
            if marks[..i].contains(mark) {
                return Err(SetupError::DuplicateMark(*mark));
            }
        }
        Ok(Self { marks })
    }

    /// Mark that plays after `moves_made` moves.
    pub fn for_move(&self, moves_made: usize) -> Mark {
        self.marks[moves_made % self.marks.len()]
    }

    /// Number of players.
    pub fn len(&self) -> usize {
        self.marks.len()
    }

    /// Always false; a sequence holds at least one mark.
    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }

    /// Returns the marks in turn order.
    pub fn as_slice(&self) -> &[Mark] {
        &self.marks
    }
}

impl Default for MarkSequence {
    fn default() -> Self {
        Self {
            marks: vec![Mark::new('X'), Mark::new('O'), Mark::new('A')],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_x_o_a() {
        let marks = MarkSequence::default();
        let symbols: String = marks.as_slice().iter().map(|m| m.symbol()).collect();
        assert_eq!(symbols, "XOA");
    }

    #[test]
    fn test_rotation_wraps() {
        let marks = MarkSequence::default();
        assert_eq!(marks.for_move(0), Mark::new('X'));
        assert_eq!(marks.for_move(2), Mark::new('A'));
        assert_eq!(marks.for_move(3), Mark::new('X'));
        assert_eq!(marks.for_move(7), Mark::new('O'));
    }

    #[test]
    fn test_empty_rejected() {
        assert_eq!(MarkSequence::new(Vec::<Mark>::new()), Err(SetupError::NoMarks));
    }

    #[test]
    fn test_duplicate_rejected() {
        let result = MarkSequence::new(['X', 'O', 'X'].map(Mark::new));
        assert_eq!(result, Err(SetupError::DuplicateMark(Mark::new('X'))));
    }
}
