//! Error taxonomy shared by both engines.
//!
//! Every engine operation either succeeds or returns a `PuzzleError` the
//! caller can act on (shake the row, ignore the gesture, fix the config).
//! A word that cannot be placed during generation is not an error: it is
//! reported on `Generated::skipped`.

use crate::guess::AttemptStatus;
use crate::search::Cell;

/// Errors returned by the puzzle engines.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PuzzleError {
    /// Guess length differs from the configured word length.
    #[error("guess has {actual} letters, expected {expected}")]
    LengthMismatch { expected: usize, actual: usize },

    /// Input contained something other than A-Z.
    #[error("non-alphabetic character {ch:?}")]
    NonAlphabetic { ch: char },

    /// Guess submitted to an attempt that is already won or lost.
    #[error("attempt is already {status}")]
    AttemptFinished { status: AttemptStatus },

    /// Level cannot advance while its attempt is still being played.
    #[error("current attempt is still in progress")]
    AttemptInProgress,

    /// Selection endpoints are not on a horizontal, vertical or diagonal line.
    #[error("selection {start} -> {end} is not a straight line")]
    NotStraightLine { start: Cell, end: Cell },

    /// Cell lies outside the grid.
    #[error("cell {cell} is outside a {size}x{size} grid")]
    OutOfBounds { cell: Cell, size: usize },

    /// Configuration values are out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Two targets share the same id.
    #[error("duplicate target word {0}")]
    DuplicateTarget(String),

    /// Word cannot fit along any line of the grid.
    #[error("word {word} does not fit in a {size}x{size} grid")]
    WordTooLong { word: String, size: usize },

    /// Word with no letters.
    #[error("word is empty")]
    EmptyWord,

    /// Target id not present in the puzzle.
    #[error("unknown target word {0}")]
    UnknownTarget(String),
}

impl PuzzleError {
    /// True for rejections caused by player input rather than setup.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            PuzzleError::LengthMismatch { .. }
                | PuzzleError::NonAlphabetic { .. }
                | PuzzleError::AttemptFinished { .. }
                | PuzzleError::AttemptInProgress
                | PuzzleError::NotStraightLine { .. }
                | PuzzleError::OutOfBounds { .. }
        )
    }
}

/// Result alias for puzzle operations.
pub type PuzzleResult<T> = Result<T, PuzzleError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = PuzzleError::LengthMismatch { expected: 5, actual: 3 };
        assert_eq!(err.to_string(), "guess has 3 letters, expected 5");

        let err = PuzzleError::NotStraightLine {
            start: Cell::new(0, 0),
            end: Cell::new(1, 2),
        };
        assert_eq!(err.to_string(), "selection (0, 0) -> (1, 2) is not a straight line");

        let err = PuzzleError::AttemptFinished { status: AttemptStatus::Won };
        assert_eq!(err.to_string(), "attempt is already won");
    }

    #[test]
    fn test_validation_classification() {
        assert!(PuzzleError::NonAlphabetic { ch: '3' }.is_validation());
        assert!(!PuzzleError::EmptyWord.is_validation());
        assert!(!PuzzleError::DuplicateTarget("CAT".into()).is_validation());
    }
}
