//! Card records: identity, board position, and table state.
//!
//! ## Identity vs Instance
//!
//! A pair is represented by two distinct `Card` instances sharing the same
//! `CardIdentity` (rank + suit). Instance identity is the card's `CardId`,
//! its position in the session's board list. Match evaluation compares
//! identities; the AI memory and the selection state machine track `CardId`s.
//!
//! ## State
//!
//! A card is face-down and unmatched when dealt. Only the game engine flips
//! or matches cards. A matched card is permanently face-up and can never be
//! selected again.

use serde::{Deserialize, Serialize};

/// Card rank, ace (1) through king (13).
///
/// Stored as a raw value so non-standard rank sets can be used for custom
/// boards; the deck builder's standard inputs cover 1..=13.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rank(pub u8);

impl Rank {
    /// Create a rank from its raw value.
    #[must_use]
    pub const fn new(value: u8) -> Self {
        Self(value)
    }

    /// Get the raw rank value.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// The thirteen standard ranks in ascending order.
    pub fn standard() -> impl Iterator<Item = Rank> {
        (1..=13).map(Rank)
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Card suit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
}

impl Suit {
    /// All four suits in asset-key order.
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

    /// Single-letter code used in asset keys ("c", "d", "h", "s").
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Suit::Clubs => 'c',
            Suit::Diamonds => 'd',
            Suit::Hearts => 'h',
            Suit::Spades => 's',
        }
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// The (rank, suit) pair that determines whether two cards match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardIdentity {
    pub rank: Rank,
    pub suit: Suit,
}

impl CardIdentity {
    /// Create an identity.
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Stable key for the asset loader, e.g. `"1c"` or `"13h"`.
    ///
    /// Front-image files are named after this key; whether the asset
    /// resolves has no bearing on gameplay.
    #[must_use]
    pub fn asset_key(self) -> String {
        format!("{}{}", self.rank, self.suit)
    }
}

impl std::fmt::Display for CardIdentity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

/// Board position of a card within a session.
///
/// Positions are 0-based indices into the session's card list. Two cards of
/// one pair always have different `CardId`s.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a card ID from a board index.
    #[must_use]
    pub const fn new(index: u32) -> Self {
        Self(index)
    }

    /// Get the board index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// A single card on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    identity: CardIdentity,
    face_up: bool,
    matched: bool,
}

impl Card {
    /// Deal a new card: face-down, unmatched.
    #[must_use]
    pub const fn new(identity: CardIdentity) -> Self {
        Self {
            identity,
            face_up: false,
            matched: false,
        }
    }

    /// The card's match identity.
    #[must_use]
    pub const fn identity(&self) -> CardIdentity {
        self.identity
    }

    /// Is the front image currently visible?
    ///
    /// Matched cards stay face-up for the rest of the session.
    #[must_use]
    pub const fn is_face_up(&self) -> bool {
        self.face_up
    }

    /// Has this card been paired off?
    #[must_use]
    pub const fn is_matched(&self) -> bool {
        self.matched
    }

    /// Can the card legally be selected? (face-down and unmatched)
    #[must_use]
    pub const fn is_selectable(&self) -> bool {
        !self.face_up && !self.matched
    }

    /// Do two cards form a match? True iff rank AND suit are equal.
    #[must_use]
    pub fn matches(&self, other: &Card) -> bool {
        self.identity == other.identity
    }

    pub(crate) fn turn_up(&mut self) {
        self.face_up = true;
    }

    pub(crate) fn turn_down(&mut self) {
        // Matched cards never go back face-down.
        if !self.matched {
            self.face_up = false;
        }
    }

    pub fn mark_matched(&mut self) {
        self.matched = true;
        self.face_up = true;
    }
}
