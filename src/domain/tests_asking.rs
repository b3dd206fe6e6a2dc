//! Unit tests for the Ask move.

use crate::domain::asking::ask_card;
use crate::domain::test_state_helpers::{c, game_with_hands};
use crate::domain::GameEvent;
use crate::errors::domain::RuleViolation;

fn fixture() -> crate::domain::GameState {
    // Teams: {0,1,2} vs {3,4,5}; turn is seat 0.
    game_with_hands([
        &["AC", "2C", "3C"],
        &["4C", "5C"],
        &["6C"],
        &["8C", "9C", "TC"],
        &["JC", "QC"],
        &["KC"],
    ])
}

#[test]
fn successful_ask_transfers_card_and_keeps_turn() {
    let mut game = fixture();
    let result = ask_card(&mut game, 0, 3, c("8C")).unwrap();
    assert!(result.hit);
    assert_eq!(game.turn, Some(0), "a hit never changes the turn");
    assert!(game.hands[0].contains(&c("8C")));
    assert!(!game.hands[3].contains(&c("8C")));
    assert!(matches!(
        result.events[0],
        GameEvent::CardAsked { success: true, .. }
    ));
}

#[test]
fn failed_ask_passes_turn_to_target() {
    let mut game = fixture();
    let result = ask_card(&mut game, 0, 3, c("KD")).unwrap();
    assert!(!result.hit);
    assert_eq!(game.turn, Some(3), "a miss always hands the turn over");
    assert_eq!(game.hands[0].len(), 3);
    assert_eq!(game.hands[3].len(), 3);
    assert!(matches!(
        result.events[0],
        GameEvent::CardAsked { success: false, .. }
    ));
    assert_eq!(result.events.len(), 1, "a miss moves no cards");
}

#[test]
fn cannot_ask_own_team() {
    let mut game = fixture();
    let err = ask_card(&mut game, 0, 1, c("4C")).unwrap_err();
    assert_eq!(err.violation(), Some(RuleViolation::CannotAskFromOwnTeam));
    assert_eq!(game.turn, Some(0), "rejection mutates nothing");
}

#[test]
fn cannot_ask_for_held_card() {
    let mut game = fixture();
    let err = ask_card(&mut game, 0, 3, c("AC")).unwrap_err();
    assert_eq!(err.violation(), Some(RuleViolation::AlreadyHasCard));
}

#[test]
fn cannot_ask_empty_hand() {
    let mut game = fixture();
    game.hands[3].clear();
    let err = ask_card(&mut game, 0, 3, c("8D")).unwrap_err();
    assert_eq!(err.violation(), Some(RuleViolation::TargetHandEmpty));
}

#[test]
fn cannot_ask_for_a_seven() {
    let mut game = fixture();
    let err = ask_card(&mut game, 0, 3, c("7C")).unwrap_err();
    assert_eq!(err.violation(), Some(RuleViolation::CardOutOfPlay));
}

#[test]
fn out_of_turn_ask_rejected() {
    let mut game = fixture();
    let err = ask_card(&mut game, 4, 0, c("AC")).unwrap_err();
    assert_eq!(err.violation(), Some(RuleViolation::OutOfTurn));
}

#[test]
fn unknown_target_rejected() {
    let mut game = fixture();
    let err = ask_card(&mut game, 0, 9, c("8C")).unwrap_err();
    assert!(matches!(
        err,
        crate::errors::domain::DomainError::NotFound(
            crate::errors::domain::NotFoundKind::Player,
            _
        )
    ));
}

#[test]
fn rejected_ask_leaves_state_untouched() {
    let game = fixture();
    let mut mutated = game.clone();
    let _ = ask_card(&mut mutated, 0, 1, c("4C"));
    assert_eq!(mutated, game);
}
