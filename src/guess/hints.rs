//! Keyboard hint state: the best status seen for each letter.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::status::LetterStatus;

/// On-screen keyboard rows, top to bottom.
pub const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// Letter -> best status seen across an attempt.
///
/// Statuses only move up the dominance order: once a letter is `Correct`
/// no later `Present` or `Absent` changes it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyboardHints {
    seen: FxHashMap<char, LetterStatus>,
}

impl KeyboardHints {
    /// Empty hints, every letter unseen.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one scored guess into the hints.
    pub fn record(&mut self, guess: &str, statuses: &[LetterStatus]) {
        for (ch, &status) in guess.chars().zip(statuses) {
            self.seen
                .entry(ch)
                .and_modify(|best| *best = best.merge(status))
                .or_insert(status);
        }
    }

    /// Best status for `letter`, `None` if unseen.
    #[must_use]
    pub fn get(&self, letter: char) -> Option<LetterStatus> {
        self.seen.get(&letter.to_ascii_uppercase()).copied()
    }

    /// Number of letters seen so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.seen.len()
    }

    /// True before any guess has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }

    /// Keyboard rows with the hint for every key, for rendering.
    pub fn rows(&self) -> impl Iterator<Item = Vec<(char, Option<LetterStatus>)>> + '_ {
        KEYBOARD_ROWS
            .iter()
            .map(move |row| row.chars().map(|ch| (ch, self.get(ch))).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::LetterStatus::*;
    use super::*;

    #[test]
    fn test_record_sets_unseen() {
        let mut hints = KeyboardHints::new();
        hints.record("CAT", &[Absent, Present, Correct]);

        assert_eq!(hints.get('C'), Some(Absent));
        assert_eq!(hints.get('a'), Some(Present));
        assert_eq!(hints.get('T'), Some(Correct));
        assert_eq!(hints.get('Z'), None);
        assert_eq!(hints.len(), 3);
    }

    #[test]
    fn test_never_downgrades() {
        let mut hints = KeyboardHints::new();
        hints.record("E", &[Correct]);
        hints.record("E", &[Present]);
        hints.record("E", &[Absent]);
        assert_eq!(hints.get('E'), Some(Correct));
    }

    #[test]
    fn test_upgrades() {
        let mut hints = KeyboardHints::new();
        hints.record("E", &[Absent]);
        hints.record("E", &[Present]);
        assert_eq!(hints.get('E'), Some(Present));
        hints.record("E", &[Correct]);
        assert_eq!(hints.get('E'), Some(Correct));
    }

    #[test]
    fn test_same_guess_mixed_statuses() {
        // Second E is absent in the same guess but the first was correct.
        let mut hints = KeyboardHints::new();
        hints.record("EE", &[Correct, Absent]);
        assert_eq!(hints.get('E'), Some(Correct));
    }

    #[test]
    fn test_rows_cover_alphabet() {
        let hints = KeyboardHints::new();
        let keys: usize = hints.rows().map(|row| row.len()).sum();
        assert_eq!(keys, 26);
        assert!(hints.rows().flatten().all(|(_, status)| status.is_none()));
    }
}
