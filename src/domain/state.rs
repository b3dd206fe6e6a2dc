//! The authoritative game aggregate and its supporting types.

use serde::{Deserialize, Serialize};

use super::cards::Card;
use super::rules::{RuleTable, SET_COUNT};
use crate::errors::domain::{DomainError, NotFoundKind, RuleViolation};

/// Positional player id, 0..capacity.
pub type Seat = u8;
/// Team id, 0 or 1.
pub type TeamId = u8;
/// External game id, assigned by the store.
pub type GameId = i64;

/// Overall game progression.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GameStatus {
    /// Game created, seats still open.
    Created,
    /// All seats filled, waiting for team formation.
    PlayersReady,
    /// Teams formed, waiting for the deal.
    TeamsCreated,
    /// Cards dealt, moves accepted.
    InProgress,
    /// All sets resolved and hands empty. Terminal.
    Completed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerProfile {
    pub seat: Seat,
    pub name: String,
    pub avatar: Option<String>,
    pub is_bot: bool,
    /// None until teams are formed; immutable afterwards.
    pub team: Option<TeamId>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    pub members: Vec<Seat>,
    /// Monotonically non-decreasing; incremented only by resolved calls.
    pub score: u8,
}

/// Entire game container, sufficient for pure domain operations.
///
/// Hands live here server-side; player-facing reads go through
/// [`super::player_view::PlayerView`] so other hands leak only as counts.
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub game_id: GameId,
    /// Short human-shareable join token, unique while the game is joinable.
    pub join_code: String,
    pub rules: RuleTable,
    /// Seat of the game creator (always 0; the creator joins first).
    pub creator: Seat,
    pub status: GameStatus,
    /// Some(seat) while InProgress, None otherwise.
    pub turn: Option<Seat>,
    pub players: Vec<PlayerProfile>,
    /// Exactly 2 once formed.
    pub teams: Option<[Team; 2]>,
    /// Seat-indexed hands; empty vectors before the deal.
    pub hands: Vec<Vec<Card>>,
    /// Winning team per set index once resolved.
    pub sets_resolved: [Option<TeamId>; SET_COUNT],
    /// Seed the deal was derived from; lets the move log replay hands.
    pub deal_seed: Option<u64>,
    /// Armed when the turn holder's own correct call emptied their hand.
    pub pending_transfer: bool,
}

impl GameState {
    pub fn new(game_id: GameId, join_code: String, rules: RuleTable) -> Self {
        Self {
            game_id,
            join_code,
            rules,
            creator: 0,
            status: GameStatus::Created,
            turn: None,
            players: Vec::with_capacity(rules.capacity as usize),
            teams: None,
            hands: vec![Vec::new(); rules.capacity as usize],
            sets_resolved: [None; SET_COUNT],
            deal_seed: None,
            pending_transfer: false,
        }
    }

    pub fn is_full(&self) -> bool {
        self.players.len() >= self.rules.capacity as usize
    }

    pub fn player(&self, seat: Seat) -> Result<&PlayerProfile, DomainError> {
        self.players.get(seat as usize).ok_or_else(|| {
            DomainError::not_found(NotFoundKind::Player, format!("No player at seat {seat}"))
        })
    }

    pub fn hand(&self, seat: Seat) -> Result<&Vec<Card>, DomainError> {
        self.player(seat)?;
        Ok(&self.hands[seat as usize])
    }

    /// Team of a seated player; faults if teams are not formed yet.
    pub fn team_of(&self, seat: Seat) -> Result<TeamId, DomainError> {
        self.player(seat)?.team.ok_or_else(|| {
            DomainError::fault(format!("Seat {seat} has no team while teams are required"))
        })
    }

    pub fn require_teams(&self) -> Result<&[Team; 2], DomainError> {
        self.teams
            .as_ref()
            .ok_or_else(|| DomainError::fault("Teams must be formed"))
    }

    pub fn require_turn(&self, ctx: &'static str) -> Result<Seat, DomainError> {
        self.turn
            .ok_or_else(|| DomainError::fault(format!("Turn must be set ({ctx})")))
    }

    /// Rejects the move unless it is `actor`'s turn.
    pub fn check_turn(&self, actor: Seat, ctx: &'static str) -> Result<(), DomainError> {
        let turn = self.require_turn(ctx)?;
        if turn != actor {
            return Err(DomainError::rule(
                RuleViolation::OutOfTurn,
                format!("Seat {actor} moved out of turn; turn is seat {turn}"),
            ));
        }
        Ok(())
    }

    pub fn check_status(&self, expected: GameStatus, ctx: &'static str) -> Result<(), DomainError> {
        if self.status != expected {
            return Err(DomainError::rule(
                RuleViolation::InvalidGameStatus,
                format!("{ctx} requires {expected:?}, game is {:?}", self.status),
            ));
        }
        Ok(())
    }

    pub fn check_creator(&self, actor: Seat, ctx: &'static str) -> Result<(), DomainError> {
        if actor != self.creator {
            return Err(DomainError::rule(
                RuleViolation::NotCreator,
                format!("{ctx} is restricted to the game creator"),
            ));
        }
        Ok(())
    }

    /// Which seat currently holds a card, if any live hand does.
    pub fn holder_of(&self, card: Card) -> Option<Seat> {
        self.hands
            .iter()
            .position(|hand| hand.contains(&card))
            .map(|seat| seat as Seat)
    }

    pub fn hand_counts(&self) -> Vec<u8> {
        self.hands.iter().map(|h| h.len() as u8).collect()
    }

    pub fn scores(&self) -> [u8; 2] {
        match &self.teams {
            Some([a, b]) => [a.score, b.score],
            None => [0, 0],
        }
    }

    pub fn resolved_set_count(&self) -> usize {
        self.sets_resolved.iter().filter(|s| s.is_some()).count()
    }

    /// Total cards still held across all hands.
    pub fn cards_in_hands(&self) -> usize {
        self.hands.iter().map(Vec::len).sum()
    }
}
