//! Board generation.
//!
//! ## Algorithm
//!
//! 1. Build the rank × suit cross product as a prototype pool.
//! 2. Shuffle the pool so each session draws different identities.
//! 3. For pair `i`, take prototype `i mod pool_len` and deal two fresh
//!    cards with its identity.
//! 4. Shuffle the result so pairs are not adjacent on the board.
//!
//! The modulo step means a pair count above the pool size reuses
//! identities, so four or more instances can share a rank/suit. That is
//! accepted behavior for oversized boards, not an error; the engine matches
//! any two of them.

use crate::core::{Card, CardIdentity, GameRng, Rank, Suit};
use crate::error::GameError;

/// Build a board of `pairs` two-card identity groups from the given rank
/// and suit values.
///
/// Returns exactly `2 * pairs` cards, shuffled. Fails with
/// [`GameError::InvalidConfiguration`] when `pairs` is zero or either input
/// list is empty.
pub fn build_deck(
    ranks: &[Rank],
    suits: &[Suit],
    pairs: usize,
    rng: &mut GameRng,
) -> Result<Vec<Card>, GameError> {
    if pairs == 0 {
        return Err(GameError::InvalidConfiguration(
            "pair count must be positive".into(),
        ));
    }
    if ranks.is_empty() || suits.is_empty() {
        return Err(GameError::InvalidConfiguration(
            "rank and suit lists must be non-empty".into(),
        ));
    }

    let mut prototypes: Vec<CardIdentity> = suits
        .iter()
        .flat_map(|&suit| ranks.iter().map(move |&rank| CardIdentity::new(rank, suit)))
        .collect();
    rng.shuffle(&mut prototypes);

    let mut cards = Vec::with_capacity(pairs * 2);
    for i in 0..pairs {
        let identity = prototypes[i % prototypes.len()];
        cards.push(Card::new(identity));
        cards.push(Card::new(identity));
    }
    rng.shuffle(&mut cards);

    log::debug!(
        "built deck: {} pairs from a pool of {} identities",
        pairs,
        prototypes.len()
    );
    Ok(cards)
}

/// Build a board from the standard 52-identity pool (ranks 1..=13, four
/// suits).
pub fn standard_pairs(pairs: usize, rng: &mut GameRng) -> Result<Vec<Card>, GameError> {
    let ranks: Vec<Rank> = Rank::standard().collect();
    build_deck(&ranks, &Suit::ALL, pairs, rng)
}
