//! Domain events emitted by applied moves.
//!
//! Room-scoped events go to every connected player; `player_scope` marks the
//! ones that must only reach a single seat (they carry hidden cards).

use serde::{Deserialize, Serialize};

use super::cards::Card;
use super::sets::CardSet;
use super::state::{GameStatus, Seat, Team, TeamId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GameEvent {
    PlayerJoined {
        seat: Seat,
        name: String,
        is_bot: bool,
    },
    TeamsCreated {
        teams: Vec<Team>,
    },
    CardsDealt {
        hand_counts: Vec<u8>,
    },
    /// Player-scoped: the receiving seat's full hand after a change.
    HandUpdated {
        seat: Seat,
        hand: Vec<Card>,
    },
    CardAsked {
        asker: Seat,
        target: Seat,
        card: Card,
        success: bool,
    },
    SetCalled {
        set: CardSet,
        by: Seat,
        correct: bool,
        awarded_to: TeamId,
    },
    TurnTransferred {
        from: Seat,
        to: Seat,
    },
    ScoreUpdated {
        scores: [u8; 2],
    },
    StatusUpdated {
        status: GameStatus,
    },
    GameCompleted {
        scores: [u8; 2],
        winner: Option<TeamId>,
    },
}

impl GameEvent {
    /// The single seat this event is scoped to, if any.
    pub fn player_scope(&self) -> Option<Seat> {
        match self {
            GameEvent::HandUpdated { seat, .. } => Some(*seat),
            _ => None,
        }
    }
}
