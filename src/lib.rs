//! # word-puzzles
//!
//! Engines for two small word puzzles, independent of any UI.
//!
//! ## Design Principles
//!
//! 1. **Value In, Value Out**: Engine calls take the current state and
//!    return the next one. The caller owns all state between input events.
//!
//! 2. **Typed Rejections**: Bad input comes back as a `PuzzleError`; nothing
//!    panics on player input.
//!
//! 3. **Injectable Randomness**: Generation draws from a seeded
//!    `PuzzleRng`, so a seed reproduces a grid exactly.
//!
//! ## Modules
//!
//! - `core`: Errors, configuration, RNG, letter validation
//! - `guess`: Wordle-style scoring, attempts, keyboard hints, level runs
//! - `search`: Word-search generation, selection and matching
//! - `presets`: Reference puzzle content

pub mod core;
pub mod guess;
pub mod presets;
pub mod search;

// Re-export commonly used types
pub use crate::core::{
    DiagonalBias, GuessConfig, PuzzleError, PuzzleResult, PuzzleRng, PuzzleRngState,
    WordSearchConfig,
};

pub use crate::guess::{
    score, Attempt, AttemptStatus, Draft, GuessRecord, KeyboardHints, LetterStatus, Level, LevelRun,
    RunProgress, Score,
};

pub use crate::search::{
    generate, match_target, resolve_selection, Cell, Direction, FoundWords, Generated, Grid,
    Placement, Selection, SelectionGesture, TargetWord, WordSearch,
};
