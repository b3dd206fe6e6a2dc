use thiserror::Error;

use crate::errors::domain::{DomainError, NotFoundKind, RuleViolation};

/// Top-level engine error returned by service entry points.
///
/// Rule rejections and infrastructure failures are kept distinct: a caller
/// can retry a `Store` failure, while a `Domain` rejection is final unless
/// the move itself changes.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("{0}")]
    Domain(#[from] DomainError),
    #[error("store error: {detail}")]
    Store { detail: String },
}

impl EngineError {
    pub fn store(detail: impl Into<String>) -> Self {
        Self::Store {
            detail: detail.into(),
        }
    }

    /// Stable error code for the command reply contract.
    pub fn code(&self) -> &'static str {
        match self {
            EngineError::Domain(DomainError::Rule(kind, _)) => match kind {
                RuleViolation::InvalidGameStatus => "INVALID_GAME_STATUS",
                RuleViolation::OutOfTurn => "OUT_OF_TURN",
                RuleViolation::NotCreator => "NOT_CREATOR",
                RuleViolation::CannotAskFromOwnTeam => "CANNOT_ASK_FROM_OWN_TEAM",
                RuleViolation::AlreadyHasCard => "ALREADY_HAS_CARD",
                RuleViolation::TargetHandEmpty => "TARGET_HAND_EMPTY",
                RuleViolation::CardOutOfPlay => "CARD_OUT_OF_PLAY",
                RuleViolation::InvalidDeclaration => "INVALID_DECLARATION",
                RuleViolation::CannotTransferWithCards => "CANNOT_TRANSFER_WITH_CARDS",
                RuleViolation::TransferNotAvailable => "TRANSFER_NOT_AVAILABLE",
                RuleViolation::InvalidTransferTarget => "INVALID_TRANSFER_TARGET",
                RuleViolation::InvalidTeams => "INVALID_TEAMS",
                RuleViolation::ParseCard => "PARSE_CARD",
            },
            EngineError::Domain(DomainError::NotFound(kind, _)) => match kind {
                NotFoundKind::Game => "GAME_NOT_FOUND",
                NotFoundKind::Player => "PLAYER_NOT_FOUND",
            },
            EngineError::Domain(DomainError::Fault(_)) => "ENGINE_FAULT",
            EngineError::Store { .. } => "STORE_UNAVAILABLE",
        }
    }
}
