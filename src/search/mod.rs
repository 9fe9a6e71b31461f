//! Word-search engine.
//!
//! - `generate`: place targets longest-first along straight lines, skip
//!   what does not fit, fill the rest with random letters
//! - `resolve_selection` / `match_target`: read a player's line and match it
//!   in either direction
//! - `Grid::locate`: re-derive a word's placement from the letters alone
//! - `WordSearch`: session state tying the above together

pub mod generator;
pub mod grid;
pub mod puzzle;
pub mod selection;
pub mod target;

pub use generator::{generate, Generated};
pub use grid::{Cell, Direction, Grid, Placement};
pub use puzzle::{FoundWords, WordSearch};
pub use selection::{match_target, resolve_selection, Selection, SelectionGesture};
pub use target::{validate_targets, TargetWord};
