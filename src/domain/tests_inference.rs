//! Unit tests for the belief tracker.

use crate::domain::dealing::deal_hands;
use crate::domain::inference::BeliefState;
use crate::domain::moves::{MoveKind, MoveOutcome, MoveRecord};
use crate::domain::rules::RuleTable;
use crate::domain::sets::{cards_of, set_of};
use crate::domain::test_state_helpers::c;

fn record(actor: u8, kind: MoveKind, outcome: MoveOutcome) -> MoveRecord {
    MoveRecord::new(1, actor, kind, outcome)
}

fn dealt_belief(observer: u8, seed: u64) -> BeliefState {
    let rules = RuleTable::default();
    let hands = deal_hands(&rules, seed).unwrap();
    BeliefState::at_deal(observer, &rules, &hands[observer as usize])
}

#[test]
fn deal_initializes_own_cards_and_open_candidates() {
    let rules = RuleTable::default();
    let hands = deal_hands(&rules, 11).unwrap();
    let belief = BeliefState::at_deal(2, &rules, &hands[2]);

    for &card in &hands[2] {
        assert_eq!(belief.known_holder(card), Some(2));
    }
    // A card the observer does not hold could be anywhere else.
    let unseen = hands[0][0];
    assert_eq!(belief.candidate_seats(unseen), vec![0, 1, 3, 4, 5]);
    assert_eq!(belief.candidate_count(unseen), 5);

    // Sevens never enter the tracker.
    assert!(belief.is_accounted(c("7H")));
    assert!(belief.candidate_seats(c("7H")).is_empty());
}

#[test]
fn successful_ask_collapses_to_the_asker() {
    let mut belief = dealt_belief(5, 11);
    let card = c("8C");
    belief
        .observe(&record(
            0,
            MoveKind::Ask { target: 3, card },
            MoveOutcome::AskHit,
        ))
        .unwrap();
    assert_eq!(belief.known_holder(card), Some(0));
}

#[test]
fn failed_ask_excludes_target_and_asker() {
    let rules = RuleTable::default();
    let hands = deal_hands(&rules, 11).unwrap();
    // Observe from a seat that does not hold the probed card so the
    // candidate set starts wide open.
    let card = c("9D");
    let observer = (0..6u8)
        .find(|&s| !hands[s as usize].contains(&card))
        .unwrap();
    let mut belief = BeliefState::at_deal(observer, &rules, &hands[observer as usize]);
    let before = belief.candidate_seats(card);

    // Any asker/target pair distinct from the observer works.
    let asker = (0..6u8).find(|&s| s != observer).unwrap();
    let target = (0..6u8)
        .rev()
        .find(|&s| s != observer && s != asker)
        .unwrap();
    belief
        .observe(&record(
            asker,
            MoveKind::Ask { target, card },
            MoveOutcome::AskMiss,
        ))
        .unwrap();

    let after = belief.candidate_seats(card);
    assert!(!after.contains(&target), "target proved it lacks the card");
    assert!(!after.contains(&asker), "the asker could not legally hold it");
    assert!(after.len() <= before.len().saturating_sub(1));
    assert!(!after.is_empty());
}

#[test]
fn call_resolution_accounts_the_whole_set() {
    let mut belief = dealt_belief(0, 11);
    let set = set_of(c("AC")).unwrap();
    belief
        .observe(&record(
            1,
            MoveKind::Call {
                set,
                claim: Vec::new(),
            },
            MoveOutcome::CallResolved {
                awarded_to: 0,
                correct: true,
            },
        ))
        .unwrap();
    for card in cards_of(set) {
        assert!(belief.is_accounted(card));
        assert!(belief.candidate_seats(card).is_empty());
    }
    // Unrelated candidates are untouched.
    assert!(!belief.is_accounted(c("8D")));
    assert!(belief.candidate_count(c("8D")) >= 1);
}

#[test]
fn exclusion_that_empties_a_live_candidate_set_is_an_engine_fault() {
    let mut belief = dealt_belief(0, 11);
    let card = c("KH");
    // Exhaust the candidate set with contradictory misses.
    let mut result = Ok(());
    for target in 0..6u8 {
        for asker in 0..6u8 {
            if asker == target {
                continue;
            }
            result = belief.observe(&record(
                asker,
                MoveKind::Ask { target, card },
                MoveOutcome::AskMiss,
            ));
            if result.is_err() {
                break;
            }
        }
        if result.is_err() {
            break;
        }
    }
    assert!(matches!(
        result,
        Err(crate::errors::domain::DomainError::Fault(_))
    ));
}

#[test]
fn replay_rebuilds_the_same_belief_as_incremental_observation() {
    let rules = RuleTable::default();
    let seed = 23u64;
    let hands = deal_hands(&rules, seed).unwrap();

    // A hit seat 0 could really score, and a miss that is truthful for
    // asker 0 and target 4.
    let hit_card = hands[3][0];
    let miss_card = hands[5]
        .iter()
        .copied()
        .find(|card| *card != hit_card)
        .unwrap();

    let log = vec![
        record(
            0,
            MoveKind::Start { seed: Some(seed) },
            MoveOutcome::Dealt { seed },
        ),
        record(
            0,
            MoveKind::Ask {
                target: 3,
                card: hit_card,
            },
            MoveOutcome::AskHit,
        ),
        record(
            0,
            MoveKind::Ask {
                target: 4,
                card: miss_card,
            },
            MoveOutcome::AskMiss,
        ),
    ];

    for observer in 0..6u8 {
        let replayed = BeliefState::replay(observer, &rules, &log).unwrap();

        let mut incremental =
            BeliefState::at_deal(observer, &rules, &hands[observer as usize]);
        for rec in &log[1..] {
            incremental.observe(rec).unwrap();
        }
        assert_eq!(replayed, incremental, "observer {observer} diverged");

        // Replay is idempotent.
        let again = BeliefState::replay(observer, &rules, &log).unwrap();
        assert_eq!(replayed, again);
    }
}

#[test]
fn replay_without_a_deal_is_a_fault() {
    let rules = RuleTable::default();
    let log = vec![record(
        0,
        MoveKind::Ask {
            target: 3,
            card: c("8C"),
        },
        MoveOutcome::AskMiss,
    )];
    let err = BeliefState::replay(0, &rules, &log).unwrap_err();
    assert!(matches!(
        err,
        crate::errors::domain::DomainError::Fault(_)
    ));
}

#[test]
fn miss_is_visible_to_every_observer() {
    let rules = RuleTable::default();
    let hands = deal_hands(&rules, 11).unwrap();
    let card = c("8C");
    let holder = (0..6u8)
        .find(|&s| hands[s as usize].contains(&card))
        .unwrap();
    // Any seat other than the holder can legally miss-ask for it.
    let asker = (0..6u8).find(|&s| s != holder).unwrap();
    let target = (0..6u8)
        .rev()
        .find(|&s| s != holder && s != asker)
        .unwrap();

    let miss = record(
        asker,
        MoveKind::Ask { target, card },
        MoveOutcome::AskMiss,
    );
    for observer in 0..6u8 {
        let mut belief = BeliefState::at_deal(observer, &rules, &hands[observer as usize]);
        belief.observe(&miss).unwrap();
        let seats = belief.candidate_seats(card);
        assert!(!seats.contains(&target));
        if observer == holder {
            assert_eq!(belief.known_holder(card), Some(holder));
        }
    }
}
