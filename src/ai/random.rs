//! Random bot - makes arbitrary legal moves.
//!
//! Baseline implementation of [`BotPlayer`]: useful for tests and as a
//! template for stronger bots. Seedable for reproducible behavior.

use std::sync::Mutex;

use rand::prelude::*;

use super::trait_def::{BotError, BotPlayer};
use crate::domain::inference::BeliefState;
use crate::domain::moves::{CardClaim, MoveKind};
use crate::domain::player_view::PlayerView;
use crate::domain::sets::cards_of;

pub struct RandomBot {
    // Trait methods take &self; the RNG needs interior mutability.
    rng: Mutex<StdRng>,
}

impl RandomBot {
    /// `seed`: None for system entropy, Some for deterministic behavior.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            rng: Mutex::new(rng),
        }
    }
}

impl BotPlayer for RandomBot {
    fn choose_move(&self, view: &PlayerView, _belief: &BeliefState) -> Result<MoveKind, BotError> {
        let mut rng = self
            .rng
            .lock()
            .map_err(|_| BotError::Internal("rng mutex poisoned".into()))?;

        // Hand the turn on after a call emptied the hand, when possible.
        if view.pending_transfer && view.hand.is_empty() {
            let with_cards: Vec<_> = view
                .teammates()
                .into_iter()
                .filter(|&s| view.players[s as usize].cards > 0)
                .collect();
            if let Some(&to) = with_cards.choose(&mut *rng) {
                return Ok(MoveKind::Transfer { to });
            }
        }

        let targets = view.legal_ask_targets();
        let cards = view.askable_cards();
        if let (Some(&target), Some(&card)) = (targets.choose(&mut *rng), cards.choose(&mut *rng)) {
            return Ok(MoveKind::Ask { target, card });
        }

        // No askable opponent left: resolve an open set with a guess so the
        // game keeps moving. Wrong guesses just score for the opponents.
        let open = view.open_sets();
        let Some(&set) = open.choose(&mut *rng) else {
            return Err(BotError::NoLegalMove);
        };
        let teammates = view.teammates();
        let claim = cards_of(set)
            .into_iter()
            .map(|card| {
                let holder = if view.hand.contains(&card) {
                    view.seat
                } else {
                    teammates.choose(&mut *rng).copied().unwrap_or(view.seat)
                };
                CardClaim { card, holder }
            })
            .collect();
        Ok(MoveKind::Call { set, claim })
    }
}
