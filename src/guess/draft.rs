//! The guess being typed, before it is submitted.

use serde::{Deserialize, Serialize};

use crate::core::{PuzzleError, PuzzleResult};

/// Letters typed so far, capped at the word length.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Draft {
    letters: String,
    capacity: usize,
}

impl Draft {
    /// Empty draft holding at most `capacity` letters.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            letters: String::with_capacity(capacity),
            capacity,
        }
    }

    /// Append a letter. Returns `Ok(false)` when the draft is already full.
    pub fn push(&mut self, ch: char) -> PuzzleResult<bool> {
        let upper = ch.to_ascii_uppercase();
        if !upper.is_ascii_uppercase() {
            return Err(PuzzleError::NonAlphabetic { ch });
        }
        if self.is_full() {
            return Ok(false);
        }
        self.letters.push(upper);
        Ok(true)
    }

    /// Remove the last letter, if any.
    pub fn pop(&mut self) -> Option<char> {
        self.letters.pop()
    }

    /// Take the letters out, leaving the draft empty.
    pub fn take(&mut self) -> String {
        std::mem::take(&mut self.letters)
    }

    /// Discard everything typed.
    pub fn clear(&mut self) {
        self.letters.clear();
    }

    /// Letters typed so far.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.letters
    }

    /// Number of letters typed.
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.letters.len() >= self.capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_caps_at_capacity() {
        let mut draft = Draft::new(3);
        for ch in "cats".chars() {
            draft.push(ch).unwrap();
        }
        assert_eq!(draft.as_str(), "CAT");
        assert!(draft.is_full());
        assert_eq!(draft.push('x'), Ok(false));
    }

    #[test]
    fn test_push_rejects_non_letters() {
        let mut draft = Draft::new(5);
        assert_eq!(draft.push('!'), Err(PuzzleError::NonAlphabetic { ch: '!' }));
        assert!(draft.is_empty());
    }

    #[test]
    fn test_pop_and_take() {
        let mut draft = Draft::new(5);
        draft.push('L').unwrap();
        draft.push('O').unwrap();
        assert_eq!(draft.pop(), Some('O'));
        assert_eq!(draft.take(), "L");
        assert!(draft.is_empty());
        assert_eq!(draft.pop(), None);
    }
}
