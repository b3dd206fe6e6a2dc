//! Move payloads and the append-only move log entry.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use ulid::Ulid;

use super::cards::Card;
use super::sets::CardSet;
use super::state::{GameId, Seat, TeamId};

/// One card→holder assertion inside a set declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardClaim {
    pub card: Card,
    pub holder: Seat,
}

/// Every move a player can submit.
///
/// Tagged variants instead of per-game subclassing: a different
/// set-collection variant swaps the rule table, not the payload shapes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MoveKind {
    /// Fill all empty seats with bots. Creator only, while joinable.
    AddBots,
    /// Form the two teams. Creator only, once seats are full.
    CreateTeams { first: Vec<Seat>, second: Vec<Seat> },
    /// Deal and begin play. Creator only, once teams exist.
    ///
    /// The seed is optional on the wire; the service fills it in, and the
    /// resolved value is recorded in the move outcome for replay.
    Start { seed: Option<u64> },
    /// Request a specific card from an opposing player.
    Ask { target: Seat, card: Card },
    /// Declare full knowledge of one set's holders.
    Call { set: CardSet, claim: Vec<CardClaim> },
    /// Pass the turn to a teammate after a correct call emptied the hand.
    Transfer { to: Seat },
}

impl MoveKind {
    /// Short tag for logging.
    pub fn tag(&self) -> &'static str {
        match self {
            MoveKind::AddBots => "add_bots",
            MoveKind::CreateTeams { .. } => "create_teams",
            MoveKind::Start { .. } => "start",
            MoveKind::Ask { .. } => "ask",
            MoveKind::Call { .. } => "call",
            MoveKind::Transfer { .. } => "transfer",
        }
    }
}

/// What a recorded move did. Together with [`MoveKind`] this makes the log
/// a complete replayable history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum MoveOutcome {
    /// Administrative move applied as-is.
    Applied,
    /// Cards dealt from this seed.
    Dealt { seed: u64 },
    /// Ask hit: the card moved to the asker, turn unchanged.
    AskHit,
    /// Ask missed: the turn passed to the target.
    AskMiss,
    /// Call resolved; `awarded_to` scored the set.
    CallResolved { awarded_to: TeamId, correct: bool },
    /// Turn handed to a teammate.
    Transferred { to: Seat },
}

/// Append-only log entry. Immutable once recorded; the belief state is
/// rebuildable from the full sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoveRecord {
    pub id: String,
    pub game_id: GameId,
    pub actor: Seat,
    #[serde(flatten)]
    pub kind: MoveKind,
    #[serde(flatten)]
    pub outcome: MoveOutcome,
    #[serde(with = "time::serde::rfc3339")]
    pub at: OffsetDateTime,
}

impl MoveRecord {
    pub fn new(game_id: GameId, actor: Seat, kind: MoveKind, outcome: MoveOutcome) -> Self {
        Self {
            id: Ulid::new().to_string(),
            game_id,
            actor,
            kind,
            outcome,
            at: OffsetDateTime::now_utc(),
        }
    }
}
