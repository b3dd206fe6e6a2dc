#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

//! Rule engine for the Literature set-collection card game.
//!
//! The engine is the authoritative server-side core: it enforces move
//! legality over partially-hidden hands, scores team set declarations,
//! maintains a per-player belief state over unseen cards, and serializes
//! moves per game. Transport, auth, and storage technology live outside;
//! the engine talks to them through [`repos::GameStore`] and
//! [`broadcast::Broadcaster`].

pub mod ai;
pub mod broadcast;
pub mod domain;
pub mod error;
pub mod errors;
pub mod protocol;
pub mod repos;
pub mod services;

// Re-exports for public API
pub use ai::{BotPlayer, RandomBot, TrackerBot};
pub use broadcast::{Broadcaster, LocalBroadcaster};
pub use domain::{
    BeliefState, Card, CardSet, GameEvent, GameState, GameStatus, MoveKind, MoveRecord, PlayerView,
    Rank, RuleTable, Suit,
};
pub use error::EngineError;
pub use errors::domain::{DomainError, RuleViolation};
pub use protocol::{Command, CommandReply};
pub use repos::{GameStore, MemoryStore};
pub use services::GameFlowService;

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    use tracing_subscriber::EnvFilter;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
