//! Session wiring: configuration, AI observation, and result handoff.
//!
//! A [`Session`] assembles a deck and an engine from a [`SessionConfig`]
//! and layers on the duties the presentation driver would otherwise carry:
//!
//! - every accepted selection is shown to the computer opponent *before*
//!   the engine processes it, whichever side is picking;
//! - the opponent's memory is purged after every match;
//! - the two-step AI turn is exposed as a primitive ([`Session::ai_pick`])
//!   the driver sequences with its own delays;
//! - the final score goes to the [`ScoreSink`] collaborator only when a
//!   human wins.
//!
//! The session never sleeps, draws, or persists anything itself.

use serde::{Deserialize, Serialize};

use crate::ai::{self, Difficulty};
use crate::core::{CardId, GameRng, Participant};
use crate::deck;
use crate::engine::{GameEngine, GameResult, SelectionOutcome, TurnState};
use crate::error::GameError;

/// Receives final scores for persistence. Human winners only; the session
/// never reports draws or the computer opponent.
pub trait ScoreSink {
    /// Record a finished game's winning name and score.
    fn record(&mut self, name: &str, score: u32);
}

/// Who sits in the second seat.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Opponent {
    /// Two-player mode.
    Human { name: String },
    /// Player versus the computer.
    Computer { difficulty: Difficulty },
}

/// Configuration supplied by the presentation layer at session start.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Board dimension; a 4 means a 4x4 grid. Must be even and non-zero so
    /// every card has a partner.
    pub grid_size: usize,
    /// First seat's display name.
    pub p1_name: String,
    /// Second seat.
    pub opponent: Opponent,
    /// RNG seed; the same configuration and seed reproduce the same game.
    pub seed: u64,
}

impl SessionConfig {
    /// Number of pairs the grid needs.
    #[must_use]
    pub fn pair_count(&self) -> usize {
        self.grid_size * self.grid_size / 2
    }
}

/// One complete game from deck creation to game over.
pub struct Session {
    engine: GameEngine,
    rng: GameRng,
}

impl Session {
    /// Build the deck and seat the participants.
    ///
    /// Fails with [`GameError::InvalidConfiguration`] for a zero or odd
    /// grid dimension.
    pub fn new(config: SessionConfig) -> Result<Self, GameError> {
        if config.grid_size == 0 || config.grid_size % 2 != 0 {
            return Err(GameError::InvalidConfiguration(format!(
                "grid dimension must be even and non-zero, got {}",
                config.grid_size
            )));
        }

        let mut rng = GameRng::new(config.seed);
        let pair_count = config.pair_count();
        let cards = deck::standard_pairs(pair_count, &mut rng)?;

        let p1 = Participant::human(config.p1_name);
        let p2 = match config.opponent {
            Opponent::Human { name } => Participant::human(name),
            Opponent::Computer { difficulty } => Participant::computer(difficulty),
        };

        log::info!(
            "session start: {} vs {}, {} pairs, seed {}",
            p1.name(),
            p2.name(),
            pair_count,
            config.seed
        );

        Ok(Self {
            engine: GameEngine::new(p1, p2, cards),
            rng,
        })
    }

    /// The underlying engine, for display reads.
    #[must_use]
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Handle a card selection from either side.
    ///
    /// A selection the engine will accept is first shown to the computer
    /// opponent so it can roll for retention; rejected selections reveal
    /// nothing. After a match the opponent's memory is purged.
    pub fn select(&mut self, id: CardId) -> Result<SelectionOutcome, GameError> {
        let Some(card) = self.engine.card(id).copied() else {
            return Err(GameError::UnknownCard(id));
        };

        let accepted = card.is_selectable()
            && !matches!(
                self.engine.turn_state(),
                TurnState::Resolving { .. } | TurnState::GameOver
            );
        if accepted {
            self.engine.show_to_computer(id, &mut self.rng);
        }

        let outcome = self.engine.select_card(id)?;
        if outcome == SelectionOutcome::Match {
            self.engine.purge_computer_memory();
        }
        Ok(outcome)
    }

    /// Flip the pending miss face-down and pass the turn. Call after the
    /// viewing delay that followed a [`SelectionOutcome::NoMatch`].
    pub fn advance_turn(&mut self) {
        self.engine.switch_turn();
    }

    /// Is it the computer's turn to pick?
    #[must_use]
    pub fn ai_turn_active(&self) -> bool {
        !self.engine.current().is_human()
            && !self.engine.is_processing()
            && !self.engine.is_game_over()
    }

    /// Make one AI selection: the first pick of its turn, or the second if
    /// a card is already held. Returns the chosen position and the engine's
    /// outcome, or `None` when it is not the computer's move or no
    /// selectable card remains.
    ///
    /// The external driver calls this twice per AI turn, inserting whatever
    /// viewing delay it wants between the picks.
    pub fn ai_pick(&mut self) -> Result<Option<(CardId, SelectionOutcome)>, GameError> {
        if !self.ai_turn_active() {
            return Ok(None);
        }

        let first = self.engine.first_selection();
        let Some(choice) = self.ai_choice(first) else {
            return Ok(None);
        };

        log::debug!("computer picks {choice}");
        let outcome = self.select(choice)?;
        Ok(Some((choice, outcome)))
    }

    /// Run a full AI turn (both picks, no delay). Intended for headless
    /// drivers and tests; interactive drivers sequence [`Self::ai_pick`]
    /// themselves.
    pub fn play_ai_turn(&mut self) -> Result<Vec<(CardId, SelectionOutcome)>, GameError> {
        let mut picks = Vec::new();

        if let Some(pick) = self.ai_pick()? {
            let awaiting_second = pick.1 == SelectionOutcome::AwaitingSecond;
            picks.push(pick);
            if awaiting_second {
                if let Some(second) = self.ai_pick()? {
                    picks.push(second);
                }
            }
        }

        Ok(picks)
    }

    /// Has every pair been found?
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.engine.is_game_over()
    }

    /// Final result by score.
    #[must_use]
    pub fn result(&self) -> GameResult {
        self.engine.winner()
    }

    /// Report the final score to the persistence collaborator.
    ///
    /// Records only when the game is over and the winner is a human seat;
    /// draws and computer wins are never recorded. Returns whether a record
    /// was made.
    pub fn report_result(&self, sink: &mut dyn ScoreSink) -> bool {
        if !self.engine.is_game_over() {
            return false;
        }

        match self.engine.winner() {
            GameResult::Winner(seat) => {
                let winner = self.engine.participant(seat);
                if winner.is_human() {
                    log::info!("recording high score: {} {}", winner.name(), winner.score());
                    sink.record(winner.name(), winner.score());
                    true
                } else {
                    false
                }
            }
            GameResult::Draw => false,
        }
    }

    fn ai_choice(&mut self, first: Option<CardId>) -> Option<CardId> {
        let memory = self.engine.current().memory()?;
        ai::choose_move(self.engine.cards(), memory, first, &mut self.rng)
    }
}
