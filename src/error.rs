//! Error taxonomy.
//!
//! Only two things can go wrong in the core, both at the caller's hand:
//! impossible construction parameters and selecting a card that is not part
//! of the session. Gameplay rejections ("already face-up", "mid-resolution")
//! are ordinary [`SelectionOutcome::Rejected`](crate::engine::SelectionOutcome)
//! control flow, not errors.

use thiserror::Error;

use crate::core::CardId;

/// Errors surfaced by deck construction and the game engine.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum GameError {
    /// Deck or session requested with impossible parameters.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A card outside the session's board was selected. This is a contract
    /// violation by the caller; the engine state is unchanged.
    #[error("{0} is not part of this session")]
    UnknownCard(CardId),
}
