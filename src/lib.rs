//! # memory-duel
//!
//! A turn-based card-matching ("memory") game engine for two participants,
//! one of whom may be a computer opponent.
//!
//! ## Design Principles
//!
//! 1. **Engine-only**: rendering, animation delays, input widgets, and
//!    high-score files are external collaborators. The core exposes two
//!    entry points — a card was selected, and the turn should switch — and
//!    trusts the caller to sequence them.
//!
//! 2. **Explicit state machine**: the turn position is one enum field
//!    inspected at the top of every mutating operation, not a processing
//!    flag scattered across checks.
//!
//! 3. **One AI mechanism**: every difficulty is the same probabilistic
//!    retention, Hard is just probability 1. No separate "perfect
//!    knowledge" code path.
//!
//! 4. **Deterministic**: all randomness flows through a seeded RNG, so a
//!    session is reproducible from its configuration.
//!
//! ## Modules
//!
//! - `core`: cards, participants, RNG
//! - `deck`: board generation and asset resolution
//! - `ai`: the opponent's memory and move selection
//! - `engine`: the turn/match state machine
//! - `session`: configuration, AI observation wiring, score handoff

pub mod ai;
pub mod core;
pub mod deck;
pub mod engine;
pub mod error;
pub mod session;

// Re-export commonly used types
pub use crate::core::{Card, CardId, CardIdentity, GameRng, Participant, Rank, Seat, Suit, COMPUTER_NAME};

pub use crate::ai::{choose_move, Difficulty, Memory};

pub use crate::deck::{build_deck, standard_pairs, AssetResolver, DirectoryAssets, NoAssets};

pub use crate::engine::{GameEngine, GameResult, SelectionOutcome, TurnState, MATCH_REWARD};

pub use crate::error::GameError;

pub use crate::session::{Opponent, ScoreSink, Session, SessionConfig};
