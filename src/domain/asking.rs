//! The Ask move: request a specific card from an opposing player.

use super::cards::Card;
use super::events::GameEvent;
use super::sets::in_play;
use super::state::{GameState, GameStatus, Seat};
use crate::errors::domain::{DomainError, RuleViolation};

/// What an applied Ask did.
#[derive(Debug, Clone, PartialEq)]
pub struct AskResult {
    /// Whether the target held the card (card transferred, turn kept).
    pub hit: bool,
    pub events: Vec<GameEvent>,
}

/// Validate and apply an Ask. All-or-nothing: any rejection leaves the
/// aggregate untouched.
pub fn ask_card(
    state: &mut GameState,
    actor: Seat,
    target: Seat,
    card: Card,
) -> Result<AskResult, DomainError> {
    state.check_status(GameStatus::InProgress, "ask")?;
    state.check_turn(actor, "ask")?;
    state.player(target)?;

    let actor_team = state.team_of(actor)?;
    let target_team = state.team_of(target)?;
    if actor_team == target_team {
        return Err(DomainError::rule(
            RuleViolation::CannotAskFromOwnTeam,
            format!("Seat {target} is on seat {actor}'s own team"),
        ));
    }
    if !in_play(card) {
        return Err(DomainError::rule(
            RuleViolation::CardOutOfPlay,
            format!("{card} belongs to no set and is never dealt"),
        ));
    }
    if state.hands[actor as usize].contains(&card) {
        return Err(DomainError::rule(
            RuleViolation::AlreadyHasCard,
            format!("Seat {actor} already holds {card}"),
        ));
    }
    if state.hands[target as usize].is_empty() {
        return Err(DomainError::rule(
            RuleViolation::TargetHandEmpty,
            format!("Seat {target} has no cards left"),
        ));
    }

    // The transfer window closes as soon as the turn holder does anything else.
    state.pending_transfer = false;

    let pos = state.hands[target as usize].iter().position(|&c| c == card);
    let hit = pos.is_some();
    let mut events = Vec::with_capacity(3);
    events.push(GameEvent::CardAsked {
        asker: actor,
        target,
        card,
        success: hit,
    });

    if let Some(pos) = pos {
        let taken = state.hands[target as usize].remove(pos);
        let hand = &mut state.hands[actor as usize];
        hand.push(taken);
        hand.sort();
        // Turn stays with the asker on a hit.
        events.push(GameEvent::HandUpdated {
            seat: actor,
            hand: state.hands[actor as usize].clone(),
        });
        events.push(GameEvent::HandUpdated {
            seat: target,
            hand: state.hands[target as usize].clone(),
        });
    } else {
        state.turn = Some(target);
    }

    Ok(AskResult { hit, events })
}
