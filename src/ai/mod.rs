//! The computer opponent: probabilistic memory and move selection.
//!
//! ## How difficulty works
//!
//! Every difficulty runs the same mechanism: each time a card is revealed,
//! the opponent retains it with the level's probability (a single roll per
//! observation, never re-rolled). Hard is simply probability 1 of that
//! mechanism, so perfect recall and blind guessing are not separate code
//! paths.
//!
//! ## Turn structure
//!
//! Move selection is two pure functions over the same memory and board:
//! the first pick hunts for a known pair, the second pick hunts for the
//! remembered partner of the held card. Both fall back to a uniform random
//! pick among selectable cards.

pub mod decision;
pub mod memory;

pub use decision::choose_move;
pub use memory::Memory;

use serde::{Deserialize, Serialize};

/// Computer opponent difficulty level.
///
/// The level is just a retention probability; see the module docs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    /// Retains 10% of observed cards; mostly random play.
    #[default]
    Easy,
    /// Retains 50% of observed cards.
    Normal,
    /// Retains everything it has seen.
    Hard,
}

impl Difficulty {
    /// Probability of retaining an observed card.
    #[must_use]
    pub const fn retention_rate(self) -> f64 {
        match self {
            Difficulty::Easy => 0.10,
            Difficulty::Normal => 0.50,
            Difficulty::Hard => 1.0,
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "Easy"),
            Difficulty::Normal => write!(f, "Normal"),
            Difficulty::Hard => write!(f, "Hard"),
        }
    }
}
