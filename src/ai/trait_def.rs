//! Bot player trait definition.

use std::fmt;

use crate::domain::inference::BeliefState;
use crate::domain::moves::MoveKind;
use crate::domain::player_view::PlayerView;

/// Errors that can occur during bot decision-making.
#[derive(Debug)]
pub enum BotError {
    /// The bot found no legal move in the current position.
    NoLegalMove,
    /// The bot encountered an internal error.
    Internal(String),
}

impl fmt::Display for BotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BotError::NoLegalMove => write!(f, "bot found no legal move"),
            BotError::Internal(msg) => write!(f, "bot internal error: {msg}"),
        }
    }
}

impl std::error::Error for BotError {}

/// Trait for automated players.
///
/// Implementations receive the seat's redacted view plus that seat's belief
/// state and must choose a legal move. Called only when it is the bot's
/// turn in an in-progress game.
pub trait BotPlayer: Send + Sync {
    fn choose_move(&self, view: &PlayerView, belief: &BeliefState) -> Result<MoveKind, BotError>;
}
