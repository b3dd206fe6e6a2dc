//! Property tests: whole games driven by bots, with the core invariants
//! checked after every single move.

use std::collections::HashSet;

use proptest::prelude::*;

use crate::ai::random::RandomBot;
use crate::ai::tracker::TrackerBot;
use crate::ai::trait_def::BotPlayer;
use crate::domain::asking::ask_card;
use crate::domain::calling::{call_set, transfer_turn};
use crate::domain::dealing::deal_hands;
use crate::domain::inference::BeliefState;
use crate::domain::lifecycle::start;
use crate::domain::moves::{MoveKind, MoveOutcome, MoveRecord};
use crate::domain::rules::{RuleTable, PLAYING_DECK_SIZE};
use crate::domain::sets::{cards_of, set_of, CardSet, PLAYING_DECK};
use crate::domain::state::{GameState, GameStatus};
use crate::domain::test_gens;
use crate::domain::test_prelude::proptest_config;
use crate::domain::test_state_helpers::ready_game;
use crate::domain::Rank;

/// Every card of the playing deck is either in exactly one hand or part of a
/// resolved set; nothing is duplicated or lost.
fn assert_conservation(game: &GameState) {
    let in_hands = game.cards_in_hands();
    let resolved = game.resolved_set_count();
    assert_eq!(
        in_hands + resolved * 6,
        PLAYING_DECK_SIZE,
        "cards leaked or duplicated"
    );

    let mut seen = HashSet::new();
    for hand in &game.hands {
        for &card in hand {
            assert!(seen.insert(card), "{card} held by two seats");
            let set = set_of(card).expect("hands only hold in-play cards");
            assert!(
                game.sets_resolved[set.index()].is_none(),
                "{card} still in a hand after its set resolved"
            );
        }
    }
}

/// While in progress the turn points at a seated player; once completed it
/// is cleared.
fn assert_turn_legal(game: &GameState) {
    match game.status {
        GameStatus::InProgress => {
            let turn = game.turn.expect("in-progress game must have a turn");
            assert!((turn as usize) < game.players.len());
        }
        GameStatus::Completed => assert_eq!(game.turn, None),
        _ => {}
    }
}

/// Soundness: the true holder of every live card is still a candidate in
/// every observer's belief.
fn assert_beliefs_sound(game: &GameState, beliefs: &[BeliefState]) {
    for &card in PLAYING_DECK.iter() {
        let holder = game.holder_of(card);
        for belief in beliefs {
            match holder {
                Some(seat) => {
                    assert!(
                        belief.candidate_seats(card).contains(&seat),
                        "observer {} ruled out the true holder of {card}",
                        belief.observer()
                    );
                }
                None => {
                    let set = set_of(card).expect("playing deck card");
                    if game.sets_resolved[set.index()].is_some() {
                        assert!(belief.is_accounted(card));
                    }
                }
            }
        }
    }
}

/// Drive one full game with the given bot. Returns the final state and the
/// move log (starting with the deal record).
fn play_game(bot: &dyn BotPlayer, deal_seed: u64, max_moves: usize) -> (GameState, Vec<MoveRecord>) {
    let mut game = ready_game();
    start(&mut game, 0, deal_seed).unwrap();

    let mut log = vec![MoveRecord::new(
        game.game_id,
        0,
        MoveKind::Start {
            seed: Some(deal_seed),
        },
        MoveOutcome::Dealt { seed: deal_seed },
    )];
    let mut beliefs: Vec<BeliefState> = (0..6u8)
        .map(|seat| BeliefState::at_deal(seat, &game.rules, &game.hands[seat as usize]))
        .collect();

    for _ in 0..max_moves {
        if game.status != GameStatus::InProgress {
            break;
        }
        let actor = game.turn.unwrap();
        let view = game.view_for(actor).unwrap();
        let kind = bot
            .choose_move(&view, &beliefs[actor as usize])
            .expect("bot must always find a move on its turn");

        let outcome = match &kind {
            MoveKind::Ask { target, card } => {
                let result = ask_card(&mut game, actor, *target, *card).unwrap();
                if result.hit {
                    MoveOutcome::AskHit
                } else {
                    MoveOutcome::AskMiss
                }
            }
            MoveKind::Call { set, claim } => {
                let result = call_set(&mut game, actor, *set, claim).unwrap();
                MoveOutcome::CallResolved {
                    awarded_to: result.awarded_to,
                    correct: result.correct,
                }
            }
            MoveKind::Transfer { to } => {
                transfer_turn(&mut game, actor, *to).unwrap();
                MoveOutcome::Transferred { to: *to }
            }
            other => panic!("bot proposed a non-play move: {other:?}"),
        };

        let record = MoveRecord::new(game.game_id, actor, kind, outcome);
        for belief in beliefs.iter_mut() {
            belief.observe(&record).unwrap();
        }
        log.push(record);

        assert_conservation(&game);
        assert_turn_legal(&game);
        assert_beliefs_sound(&game, &beliefs);
    }

    // Incremental tracking and full-log replay must land on identical state.
    for seat in 0..6u8 {
        let replayed = BeliefState::replay(seat, &game.rules, &log).unwrap();
        assert_eq!(replayed, beliefs[seat as usize]);
    }

    (game, log)
}

proptest! {
    #![proptest_config(proptest_config())]

    /// Every non-seven card sits in exactly the set that reports it as a
    /// member; sevens sit in none.
    #[test]
    fn set_membership_is_total_off_the_sevens(card in test_gens::card()) {
        match set_of(card) {
            Some(set) => prop_assert!(cards_of(set).contains(&card)),
            None => prop_assert_eq!(card.rank, Rank::Seven),
        }
    }

    #[test]
    fn set_index_round_trips(set in test_gens::card_set()) {
        prop_assert_eq!(CardSet::from_index(set.index()), Some(set));
    }

    /// The same seed always deals the same in-play hands, and the belief
    /// built from a fresh deal pins exactly the observer's own cards.
    #[test]
    fn deal_is_deterministic_and_belief_ready(
        seed in test_gens::deal_seed(),
        observer in test_gens::seat(),
    ) {
        let rules = RuleTable::default();
        let hands = deal_hands(&rules, seed).unwrap();
        prop_assert_eq!(&hands, &deal_hands(&rules, seed).unwrap());

        let belief = BeliefState::at_deal(observer, &rules, &hands[observer as usize]);
        for &card in &hands[observer as usize] {
            prop_assert_eq!(belief.known_holder(card), Some(observer));
        }
    }

    /// An in-play card always belongs to one of the 8 sets.
    #[test]
    fn dealt_cards_always_have_a_set(card in test_gens::in_play_card()) {
        prop_assert!(set_of(card).is_some());
    }

    /// Random play never violates conservation, turn legality, or belief
    /// soundness, no matter the deal or the bot's choices.
    #[test]
    fn random_play_preserves_invariants(
        deal_seed in test_gens::deal_seed(),
        bot_seed in any::<u64>(),
    ) {
        let bot = RandomBot::new(Some(bot_seed));
        play_game(&bot, deal_seed, 1500);
    }

    /// Belief-driven play finishes every game: all 8 sets resolved, hands
    /// empty, scores adding up to 8.
    #[test]
    fn tracker_play_completes_the_game(deal_seed in test_gens::deal_seed()) {
        let bot = TrackerBot::new();
        let (game, log) = play_game(&bot, deal_seed, 5000);

        prop_assert_eq!(game.status, GameStatus::Completed);
        prop_assert_eq!(game.resolved_set_count(), 8);
        prop_assert_eq!(game.cards_in_hands(), 0);
        let [a, b] = game.scores();
        prop_assert_eq!(a + b, 8);
        prop_assert!(log.len() > 8, "at least one move per set plus the deal");
    }
}

#[test]
fn tracker_game_is_deterministic_for_a_fixed_seed() {
    let bot = TrackerBot::new();
    let (first, first_log) = play_game(&bot, 424242, 5000);
    let (second, second_log) = play_game(&bot, 424242, 5000);
    assert_eq!(first, second);
    assert_eq!(first_log.len(), second_log.len());
    for (a, b) in first_log.iter().zip(&second_log) {
        assert_eq!((&a.kind, &a.outcome), (&b.kind, &b.outcome));
    }
}
