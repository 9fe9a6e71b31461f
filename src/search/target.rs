//! Target word definitions.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::core::{ensure_uppercase, PuzzleError, PuzzleResult};

/// A word to hide in the grid.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TargetWord {
    /// Uppercase letters as they appear in the grid, no spaces.
    pub id: String,
    /// Label shown in the word list ("God's Favourite").
    pub display_label: String,
    /// Presentation colour for cells of this word once found.
    pub color_tag: String,
}

impl TargetWord {
    pub fn new(
        id: impl Into<String>,
        display_label: impl Into<String>,
        color_tag: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            display_label: display_label.into(),
            color_tag: color_tag.into(),
        }
    }

    /// Letter count of the id.
    #[must_use]
    pub fn len(&self) -> usize {
        self.id.chars().count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.id.is_empty()
    }
}

/// Check ids are uppercase, distinct and fit a `grid_size` grid.
pub fn validate_targets(targets: &[TargetWord], grid_size: usize) -> PuzzleResult<()> {
    let mut seen = FxHashSet::default();
    for target in targets {
        ensure_uppercase(&target.id)?;
        if target.len() > grid_size {
            return Err(PuzzleError::WordTooLong {
                word: target.id.clone(),
                size: grid_size,
            });
        }
        if !seen.insert(target.id.as_str()) {
            return Err(PuzzleError::DuplicateTarget(target.id.clone()));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_targets() {
        let targets = vec![
            TargetWord::new("CAT", "Cat", "red"),
            TargetWord::new("DOG", "Dog", "blue"),
        ];
        assert!(validate_targets(&targets, 3).is_ok());
    }

    #[test]
    fn test_rejects_duplicates() {
        let targets = vec![
            TargetWord::new("CAT", "Cat", "red"),
            TargetWord::new("CAT", "Again", "blue"),
        ];
        assert_eq!(
            validate_targets(&targets, 5),
            Err(PuzzleError::DuplicateTarget("CAT".into()))
        );
    }

    #[test]
    fn test_rejects_too_long() {
        let targets = vec![TargetWord::new("GODSFAVOURITE", "God's Favourite", "love")];
        assert_eq!(
            validate_targets(&targets, 12),
            Err(PuzzleError::WordTooLong { word: "GODSFAVOURITE".into(), size: 12 })
        );
        assert!(validate_targets(&targets, 13).is_ok());
    }

    #[test]
    fn test_rejects_spaces_and_lowercase() {
        assert!(validate_targets(&[TargetWord::new("GOD LOVES", "", "")], 14).is_err());
        assert!(validate_targets(&[TargetWord::new("Mamas", "", "")], 14).is_err());
        assert_eq!(
            validate_targets(&[TargetWord::new("", "", "")], 14),
            Err(PuzzleError::EmptyWord)
        );
    }
}
