use serde::{Deserialize, Serialize};

use crate::errors::domain::{DomainError, RuleViolation};

/// Size of the full card catalog.
pub const DECK_SIZE: usize = 52;
/// Size of the dealt deck (the union of the 8 sets).
pub const PLAYING_DECK_SIZE: usize = 48;
/// Number of half-suit sets.
pub const SET_COUNT: usize = 8;
/// Cards per set.
pub const SET_SIZE: usize = 6;
/// Upper bound on seats; belief state candidate masks are u8 bitmasks.
pub const MAX_SEATS: usize = 8;
/// Teams per game.
pub const TEAMS: usize = 2;

/// Who must hold set cards for a call to be well-formed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CallScope {
    /// The caller's team must collectively hold the set (standard rule).
    TeamCollective,
    /// The caller must additionally hold at least one card of the set.
    CallerMustHoldCard,
}

/// Configurable rule-table entries for one game.
///
/// Everything a variant could reasonably change lives here rather than in
/// the processors, so near-identical game modes stay one engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleTable {
    /// Fixed even player count; the 48-card deck must deal evenly.
    pub capacity: u8,
    pub call_scope: CallScope,
    /// Seat that takes the first turn; defaults to the game creator.
    pub first_turn: Option<u8>,
}

impl Default for RuleTable {
    fn default() -> Self {
        Self {
            capacity: 6,
            call_scope: CallScope::TeamCollective,
            first_turn: None,
        }
    }
}

impl RuleTable {
    pub fn validate(&self) -> Result<(), DomainError> {
        let cap = self.capacity as usize;
        if cap < 4 || cap > MAX_SEATS || cap % 2 != 0 || PLAYING_DECK_SIZE % cap != 0 {
            return Err(DomainError::rule(
                RuleViolation::InvalidTeams,
                format!("Capacity must be even, 4..=8, and divide {PLAYING_DECK_SIZE}, got {cap}"),
            ));
        }
        if let Some(seat) = self.first_turn {
            if seat as usize >= cap {
                return Err(DomainError::rule(
                    RuleViolation::InvalidTeams,
                    format!("First turn seat {seat} outside capacity {cap}"),
                ));
            }
        }
        Ok(())
    }

    /// Cards dealt to each player at start.
    pub fn hand_size(&self) -> usize {
        PLAYING_DECK_SIZE / self.capacity as usize
    }

    /// Players per team.
    pub fn team_size(&self) -> usize {
        self.capacity as usize / TEAMS
    }
}
