//! Word-guessing game engine.
//!
//! - `score`: two-pass letter scoring with duplicate-letter handling
//! - `Attempt`: value-in/value-out attempt state (`submit`)
//! - `KeyboardHints`: best status seen per letter, never downgraded
//! - `Draft` and `LevelRun`: caller-side typing and level sequencing

pub mod attempt;
pub mod draft;
pub mod hints;
pub mod level;
pub mod status;

pub use attempt::{Attempt, AttemptStatus, GuessRecord};
pub use draft::Draft;
pub use hints::{KeyboardHints, KEYBOARD_ROWS};
pub use level::{Level, LevelRun, RunProgress};
pub use status::{score, LetterStatus, Score};
