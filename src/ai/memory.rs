//! The opponent's card memory.
//!
//! An insertion-ordered set of board positions believed known. Membership is
//! probabilistic at insertion time and exact thereafter: once a card is
//! retained it is only ever forgotten when it becomes matched. Iteration
//! order is insertion order, and the first-pick pair search depends on it
//! (the earliest-learned qualifying pair wins).

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::core::{Card, CardId, GameRng};

/// Insertion-ordered set of remembered board positions.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Memory {
    /// Remembered positions, oldest first.
    order: Vec<CardId>,
    /// Membership index over `order`.
    known: FxHashSet<CardId>,
}

impl Memory {
    /// Create an empty memory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Is this position remembered?
    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.known.contains(&id)
    }

    /// Number of remembered positions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Is the memory empty?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Remembered positions in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = CardId> + '_ {
        self.order.iter().copied()
    }

    /// Observe a revealed card, retaining it with probability `rate`.
    ///
    /// Matched and already-known cards are ignored. The retention roll
    /// happens exactly once per observation; a card that fails the roll can
    /// still be retained on a later observation.
    pub fn observe(&mut self, id: CardId, card: &Card, rate: f64, rng: &mut GameRng) {
        if card.is_matched() || self.contains(id) {
            return;
        }
        if rng.gen_bool(rate) {
            self.order.push(id);
            self.known.insert(id);
        }
    }

    /// Purge positions whose cards have been matched off the board.
    ///
    /// Idempotent; a no-op when nothing remembered has been matched.
    pub fn forget_matched(&mut self, cards: &[Card]) {
        self.order.retain(|id| {
            let keep = cards.get(id.index()).is_some_and(|c| !c.is_matched());
            if !keep {
                self.known.remove(id);
            }
            keep
        });
    }

    /// Drop everything remembered.
    pub fn clear(&mut self) {
        self.order.clear();
        self.known.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CardIdentity, Rank, Suit};

    fn card(rank: u8) -> Card {
        Card::new(CardIdentity::new(Rank::new(rank), Suit::Clubs))
    }

    #[test]
    fn test_observe_retains_at_rate_one() {
        let mut rng = GameRng::new(42);
        let mut memory = Memory::new();

        memory.observe(CardId::new(0), &card(1), 1.0, &mut rng);
        assert!(memory.contains(CardId::new(0)));
        assert_eq!(memory.len(), 1);
    }

    #[test]
    fn test_observe_never_retains_at_rate_zero() {
        let mut rng = GameRng::new(42);
        let mut memory = Memory::new();

        for i in 0..100 {
            memory.observe(CardId::new(i), &card(1), 0.0, &mut rng);
        }
        assert!(memory.is_empty());
    }

    #[test]
    fn test_observe_ignores_matched_cards() {
        let mut rng = GameRng::new(42);
        let mut memory = Memory::new();

        let mut matched = card(1);
        matched.mark_matched();

        memory.observe(CardId::new(0), &matched, 1.0, &mut rng);
        assert!(memory.is_empty());
    }

    #[test]
    fn test_observe_does_not_duplicate() {
        let mut rng = GameRng::new(42);
        let mut memory = Memory::new();

        memory.observe(CardId::new(3), &card(1), 1.0, &mut rng);
        memory.observe(CardId::new(3), &card(1), 1.0, &mut rng);
        assert_eq!(memory.len(), 1);
    }

    #[test]
    fn test_iteration_is_insertion_order() {
        let mut rng = GameRng::new(42);
        let mut memory = Memory::new();

        for i in [5, 2, 9, 0] {
            memory.observe(CardId::new(i), &card(1), 1.0, &mut rng);
        }

        let order: Vec<_> = memory.iter().collect();
        assert_eq!(
            order,
            vec![CardId::new(5), CardId::new(2), CardId::new(9), CardId::new(0)]
        );
    }

    #[test]
    fn test_forget_matched_purges_and_is_idempotent() {
        let mut rng = GameRng::new(42);
        let mut memory = Memory::new();
        let mut board = vec![card(1), card(1), card(2), card(2)];

        for i in 0..4 {
            memory.observe(CardId::new(i), &board[i as usize], 1.0, &mut rng);
        }
        assert_eq!(memory.len(), 4);

        board[0].mark_matched();
        board[1].mark_matched();

        memory.forget_matched(&board);
        assert_eq!(memory.len(), 2);
        assert!(!memory.contains(CardId::new(0)));
        assert!(!memory.contains(CardId::new(1)));
        assert!(memory.contains(CardId::new(2)));

        // Second purge with nothing newly matched changes nothing.
        memory.forget_matched(&board);
        assert_eq!(memory.len(), 2);
    }

    #[test]
    fn test_clear() {
        let mut rng = GameRng::new(42);
        let mut memory = Memory::new();
        memory.observe(CardId::new(0), &card(1), 1.0, &mut rng);

        memory.clear();
        assert!(memory.is_empty());
        assert!(!memory.contains(CardId::new(0)));
    }
}
