//! The Call (set declaration) and Transfer moves.

use std::collections::HashSet;

use super::events::GameEvent;
use super::lifecycle::check_completion;
use super::moves::CardClaim;
use super::sets::{cards_of, CardSet};
use super::state::{GameState, GameStatus, Seat, TeamId};
use crate::domain::rules::CallScope;
use crate::errors::domain::{DomainError, RuleViolation};

/// What a resolved Call did.
#[derive(Debug, Clone, PartialEq)]
pub struct CallResult {
    pub correct: bool,
    /// Team that scored the set (the caller's team iff `correct`).
    pub awarded_to: TeamId,
    pub events: Vec<GameEvent>,
}

/// Validate and resolve a set declaration.
///
/// Shape errors (wrong size, cross-set cards, duplicate cards, non-teammate
/// holders) reject the move outright. A well-formed claim always resolves
/// the set: the caller's team scores iff every card→holder pair matches the
/// true hands, otherwise the opponents score.
pub fn call_set(
    state: &mut GameState,
    actor: Seat,
    set: CardSet,
    claim: &[CardClaim],
) -> Result<CallResult, DomainError> {
    state.check_status(GameStatus::InProgress, "call")?;
    state.check_turn(actor, "call")?;
    let actor_team = state.team_of(actor)?;

    if state.sets_resolved[set.index()].is_some() {
        return Err(DomainError::rule(
            RuleViolation::InvalidDeclaration,
            format!("Set {set:?} is already resolved"),
        ));
    }

    let set_cards: HashSet<_> = cards_of(set).into_iter().collect();
    if claim.len() != set_cards.len() {
        return Err(DomainError::rule(
            RuleViolation::InvalidDeclaration,
            format!(
                "Declaration must name all {} cards of the set, got {}",
                set_cards.len(),
                claim.len()
            ),
        ));
    }
    let mut claimed: HashSet<_> = HashSet::with_capacity(claim.len());
    for entry in claim {
        if !set_cards.contains(&entry.card) {
            return Err(DomainError::rule(
                RuleViolation::InvalidDeclaration,
                format!("{} is not part of the declared set", entry.card),
            ));
        }
        if !claimed.insert(entry.card) {
            return Err(DomainError::rule(
                RuleViolation::InvalidDeclaration,
                format!("{} claimed twice", entry.card),
            ));
        }
        if state.team_of(entry.holder)? != actor_team {
            return Err(DomainError::rule(
                RuleViolation::InvalidDeclaration,
                format!(
                    "Claimed holder seat {} is not on the caller's team",
                    entry.holder
                ),
            ));
        }
    }

    if state.rules.call_scope == CallScope::CallerMustHoldCard {
        let holds_any = set_cards
            .iter()
            .any(|c| state.hands[actor as usize].contains(c));
        if !holds_any {
            return Err(DomainError::rule(
                RuleViolation::InvalidDeclaration,
                format!("Caller holds no card of {set:?} under the caller-must-hold rule"),
            ));
        }
    }

    // Cross-check against real hands, never against declared belief.
    let correct = claim
        .iter()
        .all(|entry| state.holder_of(entry.card) == Some(entry.holder));
    let awarded_to = if correct { actor_team } else { 1 - actor_team };

    // The set leaves play either way.
    let mut touched = Vec::new();
    for (seat, hand) in state.hands.iter_mut().enumerate() {
        let before = hand.len();
        hand.retain(|c| !set_cards.contains(c));
        if hand.len() != before {
            touched.push(seat as Seat);
        }
    }
    state.sets_resolved[set.index()] = Some(awarded_to);
    if let Some(teams) = state.teams.as_mut() {
        teams[awarded_to as usize].score += 1;
    }

    // A correct call on the caller's turn that emptied their hand opens the
    // transfer window.
    state.pending_transfer = correct && state.hands[actor as usize].is_empty();

    let mut events = vec![
        GameEvent::SetCalled {
            set,
            by: actor,
            correct,
            awarded_to,
        },
        GameEvent::ScoreUpdated {
            scores: state.scores(),
        },
    ];
    for seat in touched {
        events.push(GameEvent::HandUpdated {
            seat,
            hand: state.hands[seat as usize].clone(),
        });
    }
    events.extend(check_completion(state));

    Ok(CallResult {
        correct,
        awarded_to,
        events,
    })
}

/// Pass the turn to a teammate after a correct call left the caller empty-handed.
pub fn transfer_turn(
    state: &mut GameState,
    actor: Seat,
    to: Seat,
) -> Result<Vec<GameEvent>, DomainError> {
    state.check_status(GameStatus::InProgress, "transfer")?;
    state.check_turn(actor, "transfer")?;
    state.player(to)?;

    if !state.hands[actor as usize].is_empty() {
        return Err(DomainError::rule(
            RuleViolation::CannotTransferWithCards,
            format!("Seat {actor} still holds cards"),
        ));
    }
    if !state.pending_transfer {
        return Err(DomainError::rule(
            RuleViolation::TransferNotAvailable,
            "Transfer is only legal immediately after the caller's own correct call",
        ));
    }
    if state.team_of(to)? != state.team_of(actor)? {
        return Err(DomainError::rule(
            RuleViolation::InvalidTransferTarget,
            format!("Seat {to} is not a teammate"),
        ));
    }
    if state.hands[to as usize].is_empty() {
        return Err(DomainError::rule(
            RuleViolation::InvalidTransferTarget,
            format!("Seat {to} has no cards to play with"),
        ));
    }

    state.pending_transfer = false;
    state.turn = Some(to);
    Ok(vec![GameEvent::TurnTransferred { from: actor, to }])
}
