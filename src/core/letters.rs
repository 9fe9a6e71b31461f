//! Letter validation for words and guesses.
//!
//! Puzzle words are plain uppercase ASCII. Input is upper-cased before it
//! is checked, so `"belle"` and `"BELLE"` are the same guess.

use super::error::{PuzzleError, PuzzleResult};

/// The 26 letters used to fill a word-search grid.
pub const ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Upper-case `input` and check every character is A-Z.
///
/// ```
/// use word_puzzles::core::normalize_word;
///
/// assert_eq!(normalize_word("Venus").unwrap(), "VENUS");
/// assert!(normalize_word("V3NUS").is_err());
/// ```
pub fn normalize_word(input: &str) -> PuzzleResult<String> {
    if input.is_empty() {
        return Err(PuzzleError::EmptyWord);
    }
    input
        .chars()
        .map(|ch| {
            let upper = ch.to_ascii_uppercase();
            if upper.is_ascii_uppercase() {
                Ok(upper)
            } else {
                Err(PuzzleError::NonAlphabetic { ch })
            }
        })
        .collect()
}

/// Check `word` is already uppercase A-Z without rewriting it.
pub fn ensure_uppercase(word: &str) -> PuzzleResult<()> {
    if word.is_empty() {
        return Err(PuzzleError::EmptyWord);
    }
    match word.chars().find(|ch| !ch.is_ascii_uppercase()) {
        Some(ch) => Err(PuzzleError::NonAlphabetic { ch }),
        None => Ok(()),
    }
}

/// Reverse a word character by character.
#[must_use]
pub fn reversed(word: &str) -> String {
    word.chars().rev().collect()
}
