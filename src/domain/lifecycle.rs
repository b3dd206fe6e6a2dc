//! Pre-game lifecycle transitions: joining, bot fill, teams, the deal, and
//! the automatic completion check.

use super::dealing::deal_hands;
use super::events::GameEvent;
use super::state::{GameState, GameStatus, PlayerProfile, Seat, Team};
use crate::errors::domain::{DomainError, RuleViolation};

/// Seat a new player. Flips `Created → PlayersReady` at capacity.
///
/// `Created` implies an open seat: the status flips the moment capacity is
/// reached, so a full game is never joinable by status alone.
pub fn join(
    state: &mut GameState,
    name: impl Into<String>,
    avatar: Option<String>,
    is_bot: bool,
) -> Result<(Seat, Vec<GameEvent>), DomainError> {
    state.check_status(GameStatus::Created, "join")?;

    let seat = state.players.len() as Seat;
    let name = name.into();
    state.players.push(PlayerProfile {
        seat,
        name: name.clone(),
        avatar,
        is_bot,
        team: None,
    });

    let mut events = vec![GameEvent::PlayerJoined { seat, name, is_bot }];
    if state.is_full() {
        state.status = GameStatus::PlayersReady;
        events.push(GameEvent::StatusUpdated {
            status: GameStatus::PlayersReady,
        });
    }
    Ok((seat, events))
}

/// Fill every remaining seat with a bot. Creator only.
pub fn add_bots(state: &mut GameState, actor: Seat) -> Result<Vec<GameEvent>, DomainError> {
    state.check_status(GameStatus::Created, "add_bots")?;
    state.check_creator(actor, "add_bots")?;

    let mut events = Vec::new();
    while !state.is_full() {
        let bot_no = state.players.len() + 1;
        let (_, mut joined) = join(state, format!("Bot {bot_no}"), None, true)?;
        events.append(&mut joined);
    }
    Ok(events)
}

/// Form the two teams from explicit membership lists. Creator only.
pub fn create_teams(
    state: &mut GameState,
    actor: Seat,
    first: &[Seat],
    second: &[Seat],
) -> Result<Vec<GameEvent>, DomainError> {
    state.check_status(GameStatus::PlayersReady, "create_teams")?;
    state.check_creator(actor, "create_teams")?;

    let team_size = state.rules.team_size();
    if first.len() != team_size || second.len() != team_size {
        return Err(DomainError::rule(
            RuleViolation::InvalidTeams,
            format!(
                "Each team needs exactly {team_size} members, got {} and {}",
                first.len(),
                second.len()
            ),
        ));
    }

    let mut seen = vec![false; state.rules.capacity as usize];
    for &seat in first.iter().chain(second) {
        let slot = seen.get_mut(seat as usize).ok_or_else(|| {
            DomainError::rule(
                RuleViolation::InvalidTeams,
                format!("Seat {seat} is not in this game"),
            )
        })?;
        if *slot {
            return Err(DomainError::rule(
                RuleViolation::InvalidTeams,
                format!("Seat {seat} appears in both teams"),
            ));
        }
        *slot = true;
    }
    // Equal sizes + no duplicates + capacity seats means full coverage.

    for (team_id, members) in [(0u8, first), (1u8, second)] {
        for &seat in members {
            state.players[seat as usize].team = Some(team_id);
        }
    }
    let teams = [
        Team {
            id: 0,
            name: "Team 1".to_string(),
            members: first.to_vec(),
            score: 0,
        },
        Team {
            id: 1,
            name: "Team 2".to_string(),
            members: second.to_vec(),
            score: 0,
        },
    ];
    state.teams = Some(teams.clone());
    state.status = GameStatus::TeamsCreated;

    Ok(vec![
        GameEvent::TeamsCreated {
            teams: teams.to_vec(),
        },
        GameEvent::StatusUpdated {
            status: GameStatus::TeamsCreated,
        },
    ])
}

/// Deal and open play. Creator only.
pub fn start(state: &mut GameState, actor: Seat, seed: u64) -> Result<Vec<GameEvent>, DomainError> {
    state.check_status(GameStatus::TeamsCreated, "start")?;
    state.check_creator(actor, "start")?;

    state.hands = deal_hands(&state.rules, seed)?;
    state.deal_seed = Some(seed);
    state.status = GameStatus::InProgress;
    state.turn = Some(state.rules.first_turn.unwrap_or(state.creator));

    let mut events = vec![
        GameEvent::StatusUpdated {
            status: GameStatus::InProgress,
        },
        GameEvent::CardsDealt {
            hand_counts: state.hand_counts(),
        },
    ];
    for (seat, hand) in state.hands.iter().enumerate() {
        events.push(GameEvent::HandUpdated {
            seat: seat as Seat,
            hand: hand.clone(),
        });
    }
    Ok(events)
}

/// Terminal transition: fires once every set is resolved and hands are empty.
pub fn check_completion(state: &mut GameState) -> Vec<GameEvent> {
    if state.status != GameStatus::InProgress {
        return Vec::new();
    }
    if state.resolved_set_count() < state.sets_resolved.len() || state.cards_in_hands() > 0 {
        return Vec::new();
    }

    state.status = GameStatus::Completed;
    state.turn = None;
    state.pending_transfer = false;

    let scores = state.scores();
    let winner = match scores[0].cmp(&scores[1]) {
        std::cmp::Ordering::Greater => Some(0),
        std::cmp::Ordering::Less => Some(1),
        std::cmp::Ordering::Equal => None,
    };
    vec![
        GameEvent::StatusUpdated {
            status: GameStatus::Completed,
        },
        GameEvent::GameCompleted { scores, winner },
    ]
}
