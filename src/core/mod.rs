//! Core data records: cards, participants, and the session RNG.
//!
//! These are the passive entities of the game. All mutation of card and
//! score state goes through the engine; this module only defines the shapes
//! and their invariants.

pub mod card;
pub mod participant;
pub mod rng;

pub use card::{Card, CardId, CardIdentity, Rank, Suit};
pub use participant::{Participant, Seat, COMPUTER_NAME};
pub use rng::GameRng;
