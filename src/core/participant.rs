//! Participants: seats, humans, and the computer opponent's record.
//!
//! A participant is a tagged variant rather than a trait object: the two
//! kinds differ only in data (the computer carries a memory and a
//! difficulty), and the engine dispatches on the variant where it matters.
//! Scores are non-negative and only ever grow within a session.

use serde::{Deserialize, Serialize};

use crate::ai::{Difficulty, Memory};

/// Fixed display name of the computer opponent.
///
/// The high-score collaborator relies on winners being reported by variant,
/// never by comparing against this name; it exists for display only.
pub const COMPUTER_NAME: &str = "Computer AI";

/// One of the two board seats. `Seat::One` always takes the first turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Seat {
    One,
    Two,
}

impl Seat {
    /// The opposing seat.
    #[must_use]
    pub const fn other(self) -> Seat {
        match self {
            Seat::One => Seat::Two,
            Seat::Two => Seat::One,
        }
    }

    /// 0-based index into per-seat storage.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Seat::One => 0,
            Seat::Two => 1,
        }
    }
}

impl std::fmt::Display for Seat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Seat::One => write!(f, "Player 1"),
            Seat::Two => write!(f, "Player 2"),
        }
    }
}

/// A game participant.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum Participant {
    /// Driven by external UI events.
    Human { name: String, score: u32 },
    /// The computer opponent with its probabilistic memory.
    Computer {
        name: String,
        score: u32,
        memory: Memory,
        difficulty: Difficulty,
    },
}

impl Participant {
    /// Create a human participant with a zero score.
    #[must_use]
    pub fn human(name: impl Into<String>) -> Self {
        Participant::Human {
            name: name.into(),
            score: 0,
        }
    }

    /// Create the computer opponent with an empty memory and a zero score.
    #[must_use]
    pub fn computer(difficulty: Difficulty) -> Self {
        Participant::Computer {
            name: COMPUTER_NAME.to_string(),
            score: 0,
            memory: Memory::new(),
            difficulty,
        }
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Participant::Human { name, .. } | Participant::Computer { name, .. } => name,
        }
    }

    /// Current score.
    #[must_use]
    pub fn score(&self) -> u32 {
        match self {
            Participant::Human { score, .. } | Participant::Computer { score, .. } => *score,
        }
    }

    /// Is this a human participant?
    #[must_use]
    pub fn is_human(&self) -> bool {
        matches!(self, Participant::Human { .. })
    }

    /// The computer's difficulty, if this is the computer.
    #[must_use]
    pub fn difficulty(&self) -> Option<Difficulty> {
        match self {
            Participant::Computer { difficulty, .. } => Some(*difficulty),
            Participant::Human { .. } => None,
        }
    }

    /// The computer's memory, if this is the computer.
    #[must_use]
    pub fn memory(&self) -> Option<&Memory> {
        match self {
            Participant::Computer { memory, .. } => Some(memory),
            Participant::Human { .. } => None,
        }
    }

    /// Add points for a found match. Called by the engine; scores never
    /// decrease within a session.
    pub fn add_score(&mut self, points: u32) {
        match self {
            Participant::Human { score, .. } | Participant::Computer { score, .. } => {
                *score += points;
            }
        }
    }

    /// Reset the score to zero for a fresh session with the same roster.
    pub fn reset_score(&mut self) {
        match self {
            Participant::Human { score, .. } | Participant::Computer { score, .. } => *score = 0,
        }
    }
}
