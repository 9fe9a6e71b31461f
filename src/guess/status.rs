//! Per-letter scoring of a guess against the puzzle word.
//!
//! ## Duplicate letters
//!
//! Scoring runs in two passes over a working copy of the target:
//!
//! 1. Exact positional matches become `Correct` and consume that letter.
//! 2. Remaining guess letters, left to right, become `Present` if an
//!    unconsumed copy exists anywhere (consuming the first one), else `Absent`.
//!
//! A letter is therefore never credited more times than it occurs in the
//! target.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{PuzzleError, PuzzleResult};

/// Status of one guessed letter.
///
/// Ordered by dominance: `Absent < Present < Correct`. "Unseen" is the
/// absence of a status.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum LetterStatus {
    /// Letter is not in the word (or all its copies are already credited).
    Absent,
    /// Letter is in the word at another position.
    Present,
    /// Letter is in the word at this position.
    Correct,
}

impl LetterStatus {
    /// Keep whichever of two statuses dominates.
    #[must_use]
    pub fn merge(self, other: LetterStatus) -> LetterStatus {
        self.max(other)
    }
}

/// One status per guess position.
pub type Score = SmallVec<[LetterStatus; 8]>;

/// Score `guess` against `target`.
///
/// Both must be the same length; comparison is exact, so normalize case
/// first.
///
/// ```
/// use word_puzzles::guess::{score, LetterStatus::*};
///
/// let result = score("SPEED", "ABIDE").unwrap();
/// assert_eq!(result.as_slice(), &[Absent, Absent, Present, Absent, Present]);
/// ```
pub fn score(guess: &str, target: &str) -> PuzzleResult<Score> {
    let guess: SmallVec<[char; 8]> = guess.chars().collect();
    let mut remaining: SmallVec<[Option<char>; 8]> = target.chars().map(Some).collect();

    if guess.len() != remaining.len() {
        return Err(PuzzleError::LengthMismatch {
            expected: remaining.len(),
            actual: guess.len(),
        });
    }

    let mut statuses: Score = SmallVec::from_elem(LetterStatus::Absent, guess.len());

    for (i, &ch) in guess.iter().enumerate() {
        if remaining[i] == Some(ch) {
            statuses[i] = LetterStatus::Correct;
            remaining[i] = None;
        }
    }

    for (i, &ch) in guess.iter().enumerate() {
        if statuses[i] == LetterStatus::Correct {
            continue;
        }
        if let Some(slot) = remaining.iter_mut().find(|slot| **slot == Some(ch)) {
            statuses[i] = LetterStatus::Present;
            *slot = None;
        }
    }

    Ok(statuses)
}

#[cfg(test)]
mod tests {
    use super::LetterStatus::*;
    use super::*;

    #[test]
    fn test_all_correct() {
        assert_eq!(score("BELLE", "BELLE").unwrap().as_slice(), &[Correct; 5]);
    }

    #[test]
    fn test_all_absent() {
        assert_eq!(score("QUICK", "BELLE").unwrap().as_slice(), &[Absent; 5]);
    }

    #[test]
    fn test_repeated_guess_letter_consumes_target() {
        // ERASE holds two E's, so both guessed E's are credited; S takes the lone S.
        assert_eq!(
            score("SPEED", "ERASE").unwrap().as_slice(),
            &[Present, Absent, Present, Present, Absent]
        );
    }

    #[test]
    fn test_single_target_copy_credited_once() {
        assert_eq!(
            score("SPEED", "ABIDE").unwrap().as_slice(),
            &[Absent, Absent, Present, Absent, Present]
        );
    }

    #[test]
    fn test_correct_claims_before_present() {
        // Both E's in BELLE are taken by exact matches, leaving nothing for index 0.
        assert_eq!(
            score("EERIE", "BELLE").unwrap().as_slice(),
            &[Absent, Correct, Absent, Absent, Correct]
        );
        assert_eq!(
            score("LLAMA", "BELLE").unwrap().as_slice(),
            &[Present, Present, Absent, Absent, Absent]
        );
        assert_eq!(
            score("ALLOT", "BELLE").unwrap().as_slice(),
            &[Absent, Present, Correct, Absent, Absent]
        );
    }

    #[test]
    fn test_length_mismatch() {
        assert_eq!(
            score("CAT", "BELLE"),
            Err(PuzzleError::LengthMismatch { expected: 5, actual: 3 })
        );
    }

    #[test]
    fn test_merge_dominance() {
        assert_eq!(Absent.merge(Present), Present);
        assert_eq!(Correct.merge(Absent), Correct);
        assert_eq!(Present.merge(Correct), Correct);
    }
}
