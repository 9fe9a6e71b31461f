//! Core types shared by both engines: errors, configuration, RNG, letters.

pub mod config;
pub mod error;
pub mod letters;
pub mod rng;

pub use config::{DiagonalBias, GuessConfig, WordSearchConfig};
pub use error::{PuzzleError, PuzzleResult};
pub use letters::{ensure_uppercase, normalize_word, reversed, ALPHABET};
pub use rng::{PuzzleRng, PuzzleRngState};
