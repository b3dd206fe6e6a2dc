//! Player view of game state - what one seat is allowed to see.
//!
//! The engine holds the true aggregate server-side; reads go through this
//! redacted projection so other hands are only ever visible as counts. Bots
//! and UI rendering consume the same struct.

use serde::Serialize;

use super::cards::Card;
use super::rules::{RuleTable, SET_COUNT};
use super::sets::{set_of, CardSet, PLAYING_DECK};
use super::state::{GameState, GameStatus, Seat, Team, TeamId};
use crate::errors::domain::DomainError;

/// Public facts about one seated player.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeatPublic {
    pub seat: Seat,
    pub name: String,
    pub is_bot: bool,
    pub team: Option<TeamId>,
    pub cards: u8,
}

/// Everything a single seat may see, plus legal-move helpers for bots.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerView {
    pub game_id: i64,
    pub seat: Seat,
    pub status: GameStatus,
    pub turn: Option<Seat>,
    pub rules: RuleTable,
    /// Own hand, fully visible.
    pub hand: Vec<Card>,
    pub players: Vec<SeatPublic>,
    pub teams: Option<[Team; 2]>,
    pub sets_resolved: [Option<TeamId>; SET_COUNT],
    pub pending_transfer: bool,
}

impl GameState {
    /// The redacted projection for one seat.
    pub fn view_for(&self, seat: Seat) -> Result<PlayerView, DomainError> {
        self.player(seat)?;
        Ok(PlayerView {
            game_id: self.game_id,
            seat,
            status: self.status,
            turn: self.turn,
            rules: self.rules,
            hand: self.hands[seat as usize].clone(),
            players: self
                .players
                .iter()
                .map(|p| SeatPublic {
                    seat: p.seat,
                    name: p.name.clone(),
                    is_bot: p.is_bot,
                    team: p.team,
                    cards: self.hands[p.seat as usize].len() as u8,
                })
                .collect(),
            teams: self.teams.clone(),
            sets_resolved: self.sets_resolved,
            pending_transfer: self.pending_transfer,
        })
    }
}

impl PlayerView {
    pub fn my_team(&self) -> Option<TeamId> {
        self.players.get(self.seat as usize).and_then(|p| p.team)
    }

    pub fn is_my_turn(&self) -> bool {
        self.turn == Some(self.seat)
    }

    /// Teammates other than this seat.
    pub fn teammates(&self) -> Vec<Seat> {
        let mine = self.my_team();
        self.players
            .iter()
            .filter(|p| p.team == mine && mine.is_some() && p.seat != self.seat)
            .map(|p| p.seat)
            .collect()
    }

    /// Opposing seats that still hold cards - the legal ask targets.
    pub fn legal_ask_targets(&self) -> Vec<Seat> {
        let mine = self.my_team();
        self.players
            .iter()
            .filter(|p| p.team.is_some() && p.team != mine && p.cards > 0)
            .map(|p| p.seat)
            .collect()
    }

    /// In-play cards this seat could legally ask for: not held, not resolved.
    pub fn askable_cards(&self) -> Vec<Card> {
        PLAYING_DECK
            .iter()
            .copied()
            .filter(|c| {
                let resolved = set_of(*c)
                    .map(|s| self.sets_resolved[s.index()].is_some())
                    .unwrap_or(true);
                !resolved && !self.hand.contains(c)
            })
            .collect()
    }

    /// Sets not yet resolved.
    pub fn open_sets(&self) -> Vec<CardSet> {
        super::sets::all_sets()
            .into_iter()
            .filter(|s| self.sets_resolved[s.index()].is_none())
            .collect()
    }
}
