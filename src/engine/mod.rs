//! The turn/match state machine.
//!
//! The engine owns the authoritative game state: the board, both
//! participants, the current seat, and the selection state. External callers
//! drive it through two entry points — a card was selected, and the turn
//! should switch — and read card flags and scores for display.

pub mod machine;

pub use machine::{GameEngine, GameResult, SelectionOutcome, TurnState, MATCH_REWARD};
