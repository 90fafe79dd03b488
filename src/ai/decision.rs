//! Move selection for the computer opponent.
//!
//! Three strategies, tried in order:
//!
//! 1. Second pick: scan the board for the remembered partner of the held
//!    card.
//! 2. First pick: scan memory (insertion order) for two entries sharing an
//!    identity and open with the earlier one. The first qualifying pair
//!    wins; there is no best-pair search.
//! 3. Fallback: a uniform random selectable card.
//!
//! All functions are pure over the board, the memory, and the optional held
//! card; the caller decides when each pick happens.

use smallvec::SmallVec;

use crate::core::{Card, CardId, GameRng};

use super::memory::Memory;

/// Choose the opponent's next board position.
///
/// `first` is the card already selected this turn, if any. Returns `None`
/// only when no selectable card remains (board otherwise fully resolved).
#[must_use]
pub fn choose_move(
    cards: &[Card],
    memory: &Memory,
    first: Option<CardId>,
    rng: &mut GameRng,
) -> Option<CardId> {
    if let Some(held) = first {
        if let Some(id) = find_remembered_partner(cards, memory, held) {
            return Some(id);
        }
    } else if let Some(id) = find_known_pair(cards, memory) {
        return Some(id);
    }

    random_fallback(cards, first, rng)
}

/// Second pick: the first board-order candidate that pairs with `held`,
/// is a distinct instance, and is present in memory.
#[must_use]
pub fn find_remembered_partner(cards: &[Card], memory: &Memory, held: CardId) -> Option<CardId> {
    let target = cards.get(held.index())?.identity();

    cards.iter().enumerate().find_map(|(index, card)| {
        let id = CardId::new(index as u32);
        (id != held && card.identity() == target && memory.contains(id)).then_some(id)
    })
}

/// First pick: the earlier entry of the first remembered pair, provided that
/// entry is still on the board and face-down.
#[must_use]
pub fn find_known_pair(cards: &[Card], memory: &Memory) -> Option<CardId> {
    let known: SmallVec<[CardId; 16]> = memory.iter().collect();

    for (i, &a) in known.iter().enumerate() {
        for &b in &known[i + 1..] {
            let (Some(ca), Some(cb)) = (cards.get(a.index()), cards.get(b.index())) else {
                continue;
            };
            if ca.identity() == cb.identity() && !ca.is_matched() && !ca.is_face_up() {
                return Some(a);
            }
        }
    }
    None
}

/// Uniform random pick among face-down, unmatched cards other than `first`.
#[must_use]
pub fn random_fallback(cards: &[Card], first: Option<CardId>, rng: &mut GameRng) -> Option<CardId> {
    let candidates: SmallVec<[CardId; 32]> = cards
        .iter()
        .enumerate()
        .filter_map(|(index, card)| {
            let id = CardId::new(index as u32);
            (card.is_selectable() && Some(id) != first).then_some(id)
        })
        .collect();

    rng.choose(&candidates).copied()
}
