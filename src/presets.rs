//! Reference puzzle content.
//!
//! Five guessing levels and the six-word search, as shipped. Callers are
//! free to supply their own lists instead.

use crate::core::{DiagonalBias, WordSearchConfig};
use crate::guess::Level;
use crate::search::TargetWord;

/// The five guessing levels, in play order.
#[must_use]
pub fn guess_levels() -> Vec<Level> {
    vec![
        Level::new("BELLE", "Synonym for Beautiful (French origin)"),
        Level::new("VENUS", "Goddess of Love & Beauty (Gorgeous)"),
        Level::new("PRIZE", "Something extremely Precious"),
        Level::new("TASTY", "Describes the food from a Great Cook"),
        Level::new("LOVER", "You are a Great..."),
    ]
}

/// The word-search targets.
#[must_use]
pub fn search_targets() -> Vec<TargetWord> {
    vec![
        TargetWord::new("BEAUTIFUL", "Beautiful", "bg-rose-500"),
        TargetWord::new("DIVINE", "Divine", "bg-pink-500"),
        TargetWord::new("GODSFAVOURITE", "God's Favourite", "bg-love-600"),
        TargetWord::new("GODLOVESME", "God Loves Me", "bg-red-500"),
        TargetWord::new("PORKIE", "Porkie", "bg-orange-400"),
        TargetWord::new("MAMAS", "Mamas", "bg-yellow-500"),
    ]
}

/// 14x14 grid with BEAUTIFUL leaning diagonal ("slant" clue).
#[must_use]
pub fn search_config() -> WordSearchConfig {
    WordSearchConfig::default()
        .with_grid_size(14)
        .with_diagonal_bias(DiagonalBias::new("BEAUTIFUL"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GuessConfig;
    use crate::guess::LevelRun;
    use crate::search::validate_targets;

    #[test]
    fn test_levels_are_playable() {
        assert!(LevelRun::new(guess_levels(), GuessConfig::default()).is_ok());
    }

    #[test]
    fn test_targets_fit_grid() {
        let config = search_config();
        assert!(config.validate().is_ok());
        assert!(validate_targets(&search_targets(), config.grid_size).is_ok());
    }
}
