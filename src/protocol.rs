//! Wire-facing DTOs for the inbound command contract.
//!
//! The engine does not define a transport; this is the logical shape a
//! request-handling collaborator feeds in and gets back.

use serde::{Deserialize, Serialize};

use crate::domain::events::GameEvent;
use crate::domain::moves::MoveKind;
use crate::domain::state::{GameId, Seat};
use crate::error::EngineError;

/// One proposed move against one game, from a verified actor.
///
/// The auth collaborator vouches for `actor`; the engine trusts it as given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Command {
    pub game_id: GameId,
    pub actor: Seat,
    #[serde(flatten)]
    pub kind: MoveKind,
}

/// Synchronous reply to a command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CommandReply {
    Ok { events: Vec<GameEvent> },
    Error { code: String, message: String },
}

impl CommandReply {
    pub fn from_result(result: Result<Vec<GameEvent>, EngineError>) -> Self {
        match result {
            Ok(events) => CommandReply::Ok { events },
            Err(err) => CommandReply::Error {
                code: err.code().to_string(),
                message: err.to_string(),
            },
        }
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, CommandReply::Ok { .. })
    }
}
