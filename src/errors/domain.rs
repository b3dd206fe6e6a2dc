//! Domain-level error type used across the engine.
//!
//! This error type is transport- and storage-agnostic. Service entry points
//! return `Result<T, crate::error::EngineError>` and convert from
//! `DomainError` using the provided `From` implementation.

use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Game-rule violations: the move was understood but is illegal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum RuleViolation {
    /// Move attempted outside its legal game status.
    InvalidGameStatus,
    /// Actor is not the current turn holder.
    OutOfTurn,
    /// Administrative move attempted by a non-creator.
    NotCreator,
    /// Ask directed at a teammate.
    CannotAskFromOwnTeam,
    /// Ask for a card the asker already holds.
    AlreadyHasCard,
    /// Ask directed at a player with no cards.
    TargetHandEmpty,
    /// Ask for a card outside the 48-card playing deck.
    CardOutOfPlay,
    /// Malformed or incomplete set declaration.
    InvalidDeclaration,
    /// Transfer attempted while still holding cards.
    CannotTransferWithCards,
    /// Transfer without a preceding successful call by the actor's team.
    TransferNotAvailable,
    /// Transfer to a non-teammate or an empty-handed teammate.
    InvalidTransferTarget,
    /// Team formation lists overlap, omit a player, or are uneven.
    InvalidTeams,
    /// Card token failed to parse.
    ParseCard,
}

/// Domain-level not found entities.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum NotFoundKind {
    Game,
    Player,
}

/// Central domain error type.
#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// A typed game-rule rejection; the move mutates nothing.
    Rule(RuleViolation, String),
    /// Missing resource in domain terms.
    NotFound(NotFoundKind, String),
    /// Internal invariant failure (an engine bug, never a user error).
    Fault(String),
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            DomainError::Rule(kind, d) => write!(f, "rule violation {kind:?}: {d}"),
            DomainError::NotFound(kind, d) => write!(f, "not found {kind:?}: {d}"),
            DomainError::Fault(d) => write!(f, "engine fault: {d}"),
        }
    }
}

impl Error for DomainError {}

impl DomainError {
    pub fn rule(kind: RuleViolation, detail: impl Into<String>) -> Self {
        Self::Rule(kind, detail.into())
    }

    pub fn not_found(kind: NotFoundKind, detail: impl Into<String>) -> Self {
        Self::NotFound(kind, detail.into())
    }

    pub fn fault(detail: impl Into<String>) -> Self {
        Self::Fault(detail.into())
    }

    /// The rule kind, if this is a rule rejection.
    pub fn violation(&self) -> Option<RuleViolation> {
        match self {
            DomainError::Rule(kind, _) => Some(*kind),
            _ => None,
        }
    }
}
