//! Engine internals: selection handling, match resolution, turn switching.
//!
//! ## State machine
//!
//! ```text
//! AwaitingFirst --select--> AwaitingSecond --select,match--> AwaitingFirst | GameOver
//!                                          --select,miss---> Resolving
//! Resolving --switch_turn--> AwaitingFirst (cards flipped down, seat toggled)
//! ```
//!
//! `Resolving` is the "processing" state: a non-matching pair is on display
//! and every new selection is rejected until the caller switches the turn.
//! The engine never sleeps or schedules; the viewing delay belongs entirely
//! to the caller.

use serde::{Deserialize, Serialize};

use crate::core::{Card, CardId, GameRng, Participant, Seat};
use crate::error::GameError;

/// Points granted to the current participant for a match.
pub const MATCH_REWARD: u32 = 10;

/// Where the engine is within a turn.
///
/// Every mutating operation inspects this first; there is no separate
/// processing flag to keep in sync.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnState {
    /// No card selected yet.
    AwaitingFirst,
    /// One card is face-up awaiting its partner.
    AwaitingSecond { first: CardId },
    /// A non-matching pair is on display, pending the turn switch.
    Resolving { first: CardId, second: CardId },
    /// Every card on the board is matched.
    GameOver,
}

/// What a selection did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectionOutcome {
    /// No state change: mid-resolution, game over, or the card was already
    /// face-up or matched.
    Rejected,
    /// First card of the turn revealed; waiting for the second.
    AwaitingSecond,
    /// The pair matched; the current participant scored and keeps the turn.
    Match,
    /// The pair did not match; call [`GameEngine::switch_turn`] after the
    /// viewing delay.
    NoMatch,
}

/// Final result of a session.
///
/// A draw is its own variant; it must never be confused with a real
/// participant when results are persisted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// The seat with the strictly higher score.
    Winner(Seat),
    /// Equal scores.
    Draw,
}

impl GameResult {
    /// Did this seat win outright?
    #[must_use]
    pub fn is_winner(&self, seat: Seat) -> bool {
        matches!(self, GameResult::Winner(s) if *s == seat)
    }
}

/// The authoritative game state for one session.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameEngine {
    participants: [Participant; 2],
    cards: Vec<Card>,
    current: Seat,
    turn: TurnState,
}

impl GameEngine {
    /// Start a session. Seat one always takes the first turn.
    #[must_use]
    pub fn new(p1: Participant, p2: Participant, cards: Vec<Card>) -> Self {
        Self {
            participants: [p1, p2],
            cards,
            current: Seat::One,
            turn: TurnState::AwaitingFirst,
        }
    }

    /// The full board, in position order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// A single card, if the position exists.
    #[must_use]
    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.cards.get(id.index())
    }

    /// All board positions, in order.
    pub fn card_ids(&self) -> impl Iterator<Item = CardId> {
        (0..self.cards.len() as u32).map(CardId::new)
    }

    /// The participant in a seat.
    #[must_use]
    pub fn participant(&self, seat: Seat) -> &Participant {
        &self.participants[seat.index()]
    }

    /// The seat that may legally make the next selection.
    #[must_use]
    pub fn current_seat(&self) -> Seat {
        self.current
    }

    /// The participant whose turn it is.
    #[must_use]
    pub fn current(&self) -> &Participant {
        self.participant(self.current)
    }

    /// Current turn state.
    #[must_use]
    pub fn turn_state(&self) -> TurnState {
        self.turn
    }

    /// Is a non-matching pair on display, blocking selections?
    #[must_use]
    pub fn is_processing(&self) -> bool {
        matches!(self.turn, TurnState::Resolving { .. })
    }

    /// The first card selected this turn, if one is pending.
    #[must_use]
    pub fn first_selection(&self) -> Option<CardId> {
        match self.turn {
            TurnState::AwaitingSecond { first } | TurnState::Resolving { first, .. } => Some(first),
            TurnState::AwaitingFirst | TurnState::GameOver => None,
        }
    }

    /// Handle a card selection.
    ///
    /// Total for every card on the board: rejections are an ordinary
    /// [`SelectionOutcome::Rejected`]. Selecting a position outside the
    /// board is a contract violation and returns
    /// [`GameError::UnknownCard`] with no state change.
    pub fn select_card(&mut self, id: CardId) -> Result<SelectionOutcome, GameError> {
        let index = id.index();
        if index >= self.cards.len() {
            return Err(GameError::UnknownCard(id));
        }

        match self.turn {
            TurnState::Resolving { .. } | TurnState::GameOver => Ok(SelectionOutcome::Rejected),
            _ if !self.cards[index].is_selectable() => Ok(SelectionOutcome::Rejected),
            TurnState::AwaitingFirst => {
                self.cards[index].turn_up();
                self.turn = TurnState::AwaitingSecond { first: id };
                Ok(SelectionOutcome::AwaitingSecond)
            }
            TurnState::AwaitingSecond { first } => {
                self.cards[index].turn_up();
                if self.cards[first.index()].matches(&self.cards[index]) {
                    self.resolve_match(first, id);
                    Ok(SelectionOutcome::Match)
                } else {
                    log::debug!("{first} and {id} do not match; resolving");
                    self.turn = TurnState::Resolving { first, second: id };
                    Ok(SelectionOutcome::NoMatch)
                }
            }
        }
    }

    fn resolve_match(&mut self, first: CardId, second: CardId) {
        self.cards[first.index()].mark_matched();
        self.cards[second.index()].mark_matched();
        self.participants[self.current.index()].add_score(MATCH_REWARD);

        log::debug!(
            "{} matched {first} and {second} ({} points)",
            self.current,
            self.current().score()
        );

        // The matcher keeps the turn; only game over ends the streak.
        self.turn = if self.is_game_over() {
            log::info!("game over, result: {:?}", self.winner());
            TurnState::GameOver
        } else {
            TurnState::AwaitingFirst
        };
    }

    /// Flip any pending non-matched selections face-down, clear the
    /// selection state, and hand the turn to the other seat.
    ///
    /// Harmless when nothing is pending (only the seat toggles); a complete
    /// no-op once the game is over.
    pub fn switch_turn(&mut self) {
        match self.turn {
            TurnState::GameOver => return,
            TurnState::Resolving { first, second } => {
                self.cards[first.index()].turn_down();
                self.cards[second.index()].turn_down();
            }
            TurnState::AwaitingSecond { first } => {
                self.cards[first.index()].turn_down();
            }
            TurnState::AwaitingFirst => {}
        }

        self.turn = TurnState::AwaitingFirst;
        self.current = self.current.other();
        log::debug!("turn passes to {}", self.current);
    }

    /// True iff every card on the board is matched.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.cards.iter().all(Card::is_matched)
    }

    /// The session result by score comparison.
    ///
    /// Meaningful at any time but usually read once [`Self::is_game_over`]
    /// holds.
    #[must_use]
    pub fn winner(&self) -> GameResult {
        let p1 = self.participants[0].score();
        let p2 = self.participants[1].score();
        match p1.cmp(&p2) {
            std::cmp::Ordering::Greater => GameResult::Winner(Seat::One),
            std::cmp::Ordering::Less => GameResult::Winner(Seat::Two),
            std::cmp::Ordering::Equal => GameResult::Draw,
        }
    }

    /// Display name of the result: the winner's name, or `"Draw"`.
    #[must_use]
    pub fn winner_name(&self) -> &str {
        match self.winner() {
            GameResult::Winner(seat) => self.participant(seat).name(),
            GameResult::Draw => "Draw",
        }
    }

    /// Show a revealed card to the computer opponent (wherever it is
    /// seated) so it can roll for retention.
    pub fn show_to_computer(&mut self, id: CardId, rng: &mut GameRng) {
        let Some(card) = self.card(id).copied() else {
            return;
        };
        for participant in &mut self.participants {
            if let Participant::Computer {
                memory, difficulty, ..
            } = participant
            {
                memory.observe(id, &card, difficulty.retention_rate(), rng);
            }
        }
    }

    /// Purge matched cards from the computer opponent's memory.
    pub fn purge_computer_memory(&mut self) {
        let GameEngine {
            participants,
            cards,
            ..
        } = self;
        for participant in participants.iter_mut() {
            if let Participant::Computer { memory, .. } = participant {
                memory.forget_matched(cards);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CardIdentity, Rank, Suit};

    fn board(ranks: &[u8]) -> Vec<Card> {
        ranks
            .iter()
            .map(|&r| Card::new(CardIdentity::new(Rank::new(r), Suit::Clubs)))
            .collect()
    }

    fn engine(ranks: &[u8]) -> GameEngine {
        GameEngine::new(
            Participant::human("Alice"),
            Participant::human("Bob"),
            board(ranks),
        )
    }

    #[test]
    fn test_seat_one_starts() {
        let engine = engine(&[1, 1]);
        assert_eq!(engine.current_seat(), Seat::One);
        assert_eq!(engine.turn_state(), TurnState::AwaitingFirst);
        assert!(!engine.is_processing());
    }

    #[test]
    fn test_first_selection_awaits_second() {
        let mut engine = engine(&[1, 2, 1, 2]);

        let outcome = engine.select_card(CardId::new(0)).unwrap();
        assert_eq!(outcome, SelectionOutcome::AwaitingSecond);
        assert!(engine.card(CardId::new(0)).unwrap().is_face_up());
        assert_eq!(engine.first_selection(), Some(CardId::new(0)));
    }

    #[test]
    fn test_reselecting_face_up_card_is_rejected() {
        let mut engine = engine(&[1, 2, 1, 2]);
        engine.select_card(CardId::new(0)).unwrap();

        let outcome = engine.select_card(CardId::new(0)).unwrap();
        assert_eq!(outcome, SelectionOutcome::Rejected);
        assert_eq!(
            engine.turn_state(),
            TurnState::AwaitingSecond { first: CardId::new(0) }
        );
    }

    #[test]
    fn test_unknown_card_is_contract_violation() {
        let mut engine = engine(&[1, 1]);
        let err = engine.select_card(CardId::new(7)).unwrap_err();
        assert_eq!(err, GameError::UnknownCard(CardId::new(7)));
        // State untouched.
        assert_eq!(engine.turn_state(), TurnState::AwaitingFirst);
    }

    #[test]
    fn test_match_scores_and_keeps_turn() {
        let mut engine = engine(&[1, 2, 1, 2]);

        engine.select_card(CardId::new(0)).unwrap();
        let outcome = engine.select_card(CardId::new(2)).unwrap();

        assert_eq!(outcome, SelectionOutcome::Match);
        assert_eq!(engine.participant(Seat::One).score(), MATCH_REWARD);
        assert_eq!(engine.current_seat(), Seat::One, "matcher keeps the turn");
        assert_eq!(engine.turn_state(), TurnState::AwaitingFirst);
        assert!(engine.card(CardId::new(0)).unwrap().is_matched());
        assert!(engine.card(CardId::new(2)).unwrap().is_matched());
    }

    #[test]
    fn test_no_match_enters_resolving() {
        let mut engine = engine(&[1, 2, 1, 2]);

        engine.select_card(CardId::new(0)).unwrap();
        let outcome = engine.select_card(CardId::new(1)).unwrap();

        assert_eq!(outcome, SelectionOutcome::NoMatch);
        assert!(engine.is_processing());
        // Both stay on display until the turn switch.
        assert!(engine.card(CardId::new(0)).unwrap().is_face_up());
        assert!(engine.card(CardId::new(1)).unwrap().is_face_up());
    }

    #[test]
    fn test_selection_while_resolving_is_noop() {
        let mut engine = engine(&[1, 2, 1, 2]);
        engine.select_card(CardId::new(0)).unwrap();
        engine.select_card(CardId::new(1)).unwrap();

        let before = engine.clone();
        let outcome = engine.select_card(CardId::new(2)).unwrap();

        assert_eq!(outcome, SelectionOutcome::Rejected);
        assert!(!engine.card(CardId::new(2)).unwrap().is_face_up());
        assert_eq!(engine.turn_state(), before.turn_state());
        assert_eq!(engine.current_seat(), before.current_seat());
    }

    #[test]
    fn test_switch_turn_flips_pending_pair_down() {
        let mut engine = engine(&[1, 2, 1, 2]);
        engine.select_card(CardId::new(0)).unwrap();
        engine.select_card(CardId::new(1)).unwrap();

        engine.switch_turn();

        assert!(!engine.card(CardId::new(0)).unwrap().is_face_up());
        assert!(!engine.card(CardId::new(1)).unwrap().is_face_up());
        assert_eq!(engine.current_seat(), Seat::Two);
        assert!(!engine.is_processing());
        assert_eq!(engine.first_selection(), None);
    }

    #[test]
    fn test_switch_turn_with_nothing_pending_only_toggles_seat() {
        let mut engine = engine(&[1, 2, 1, 2]);
        let cards_before: Vec<_> = engine.cards().to_vec();

        engine.switch_turn();
        assert_eq!(engine.current_seat(), Seat::Two);
        assert_eq!(engine.cards(), &cards_before[..]);

        engine.switch_turn();
        assert_eq!(engine.current_seat(), Seat::One);
    }

    #[test]
    fn test_switch_turn_never_hides_matched_cards() {
        let mut engine = engine(&[1, 2, 1, 2]);
        engine.select_card(CardId::new(0)).unwrap();
        engine.select_card(CardId::new(2)).unwrap();

        engine.switch_turn();
        assert!(engine.card(CardId::new(0)).unwrap().is_face_up());
        assert!(engine.card(CardId::new(2)).unwrap().is_face_up());
    }

    #[test]
    fn test_game_over_after_all_pairs() {
        let mut engine = engine(&[1, 2, 1, 2]);
        assert!(!engine.is_game_over());

        engine.select_card(CardId::new(0)).unwrap();
        engine.select_card(CardId::new(2)).unwrap();
        assert!(!engine.is_game_over(), "one pair left");

        engine.select_card(CardId::new(1)).unwrap();
        engine.select_card(CardId::new(3)).unwrap();
        assert!(engine.is_game_over());
        assert_eq!(engine.turn_state(), TurnState::GameOver);
    }

    #[test]
    fn test_selection_and_switch_after_game_over_are_noops() {
        let mut engine = engine(&[1, 1]);
        engine.select_card(CardId::new(0)).unwrap();
        engine.select_card(CardId::new(1)).unwrap();
        assert!(engine.is_game_over());

        assert_eq!(
            engine.select_card(CardId::new(0)).unwrap(),
            SelectionOutcome::Rejected
        );

        let seat = engine.current_seat();
        engine.switch_turn();
        assert_eq!(engine.current_seat(), seat);
    }

    #[test]
    fn test_second_player_scores_on_their_turn() {
        let mut engine = engine(&[1, 2, 1, 2]);

        // Seat one misses.
        engine.select_card(CardId::new(0)).unwrap();
        engine.select_card(CardId::new(1)).unwrap();
        engine.switch_turn();

        // Seat two matches.
        engine.select_card(CardId::new(0)).unwrap();
        engine.select_card(CardId::new(2)).unwrap();

        assert_eq!(engine.participant(Seat::One).score(), 0);
        assert_eq!(engine.participant(Seat::Two).score(), MATCH_REWARD);
    }

    #[test]
    fn test_winner_by_score_and_draw() {
        let mut engine = engine(&[1, 1]);
        assert_eq!(engine.winner(), GameResult::Draw);
        assert_eq!(engine.winner_name(), "Draw");

        engine.select_card(CardId::new(0)).unwrap();
        engine.select_card(CardId::new(1)).unwrap();
        assert_eq!(engine.winner(), GameResult::Winner(Seat::One));
        assert!(engine.winner().is_winner(Seat::One));
        assert!(!engine.winner().is_winner(Seat::Two));
        assert_eq!(engine.winner_name(), "Alice");
    }
}
