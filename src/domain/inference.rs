//! Per-observer belief state over the location of unseen cards.
//!
//! For every in-play card an observer cannot see, the tracker keeps the set
//! of seats that are not provably excluded from holding it. The state is a
//! pure projection of the move log: it is never persisted on its own and is
//! rebuilt by [`BeliefState::replay`]. Bots read it to pick asks and calls;
//! the service reads it to sanity-check the tracker against declarations.

use super::cards::Card;
use super::dealing::deal_hands;
use super::moves::{MoveKind, MoveOutcome, MoveRecord};
use super::rules::{RuleTable, DECK_SIZE};
use super::sets::cards_of;
use super::state::Seat;
use crate::errors::domain::DomainError;

/// One observer's belief about where every in-play card might be.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BeliefState {
    observer: Seat,
    capacity: u8,
    /// Candidate-holder bitmask per catalog card index; bit n = seat n.
    candidates: [u8; DECK_SIZE],
    /// Cards no live hand holds: consumed by a call, or never dealt.
    accounted: [bool; DECK_SIZE],
}

impl BeliefState {
    /// Belief immediately after the deal: own cards are known, every other
    /// dealt card could be with any other seat, sevens are out of play.
    pub fn at_deal(observer: Seat, rules: &RuleTable, own_hand: &[Card]) -> Self {
        let capacity = rules.capacity;
        let everyone_else = mask_all(capacity) & !bit(observer);
        let mut state = Self {
            observer,
            capacity,
            candidates: [0; DECK_SIZE],
            accounted: [true; DECK_SIZE],
        };
        for set in super::sets::all_sets() {
            for card in cards_of(set) {
                state.candidates[card.index()] = everyone_else;
                state.accounted[card.index()] = false;
            }
        }
        for card in own_hand {
            state.candidates[card.index()] = bit(observer);
        }
        state
    }

    pub fn observer(&self) -> Seat {
        self.observer
    }

    /// Seats not provably excluded from holding the card.
    pub fn candidate_seats(&self, card: Card) -> Vec<Seat> {
        let mask = self.candidates[card.index()];
        (0..self.capacity).filter(|s| mask & bit(*s) != 0).collect()
    }

    pub fn candidate_count(&self, card: Card) -> u32 {
        self.candidates[card.index()].count_ones()
    }

    /// The single holder, once the card is fully constrained.
    pub fn known_holder(&self, card: Card) -> Option<Seat> {
        let mask = self.candidates[card.index()];
        if mask.count_ones() == 1 {
            Some(mask.trailing_zeros() as Seat)
        } else {
            None
        }
    }

    /// Whether no live hand holds the card.
    pub fn is_accounted(&self, card: Card) -> bool {
        self.accounted[card.index()]
    }

    /// Fold one recorded move into the belief.
    pub fn observe(&mut self, record: &MoveRecord) -> Result<(), DomainError> {
        match (&record.kind, &record.outcome) {
            (MoveKind::Ask { card, .. }, MoveOutcome::AskHit) => {
                // The card's exact location is now public.
                self.collapse(*card, record.actor);
                Ok(())
            }
            (MoveKind::Ask { target, card }, MoveOutcome::AskMiss) => {
                // The target proved it does not hold the card, and the asker
                // could not have held it either (an ask for a held card is
                // illegal).
                self.exclude(*card, *target)?;
                self.exclude(*card, record.actor)
            }
            (MoveKind::Call { set, .. }, MoveOutcome::CallResolved { .. }) => {
                for card in cards_of(*set) {
                    self.candidates[card.index()] = 0;
                    self.accounted[card.index()] = true;
                }
                Ok(())
            }
            _ => Ok(()),
        }
    }

    /// Rebuild an observer's belief from the full move log.
    ///
    /// Deterministic and idempotent: the deal is recomputed from the seed
    /// recorded on the Start move, then every subsequent move is folded in
    /// log order.
    pub fn replay(
        observer: Seat,
        rules: &RuleTable,
        log: &[MoveRecord],
    ) -> Result<Self, DomainError> {
        let mut state: Option<Self> = None;
        for record in log {
            match (&record.kind, &record.outcome) {
                (MoveKind::Start { .. }, MoveOutcome::Dealt { seed }) => {
                    let hands = deal_hands(rules, *seed)?;
                    let own = hands.get(observer as usize).ok_or_else(|| {
                        DomainError::fault(format!("Observer seat {observer} was never dealt to"))
                    })?;
                    state = Some(Self::at_deal(observer, rules, own));
                }
                _ => {
                    if let Some(belief) = state.as_mut() {
                        belief.observe(record)?;
                    }
                }
            }
        }
        state.ok_or_else(|| DomainError::fault("Move log contains no deal to replay from"))
    }

    fn collapse(&mut self, card: Card, holder: Seat) {
        self.candidates[card.index()] = bit(holder);
    }

    fn exclude(&mut self, card: Card, seat: Seat) -> Result<(), DomainError> {
        let idx = card.index();
        self.candidates[idx] &= !bit(seat);
        if self.candidates[idx] == 0 && !self.accounted[idx] {
            // Someone must hold an unaccounted card; reaching empty means the
            // tracker itself is wrong.
            return Err(DomainError::fault(format!(
                "Candidate set for {card} emptied while the card is still in play (observer {})",
                self.observer
            )));
        }
        Ok(())
    }
}

fn bit(seat: Seat) -> u8 {
    1 << seat
}

fn mask_all(capacity: u8) -> u8 {
    if capacity as usize >= 8 {
        u8::MAX
    } else {
        (1u8 << capacity) - 1
    }
}
