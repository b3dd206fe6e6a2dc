//! Event broadcast seam.
//!
//! Events fan out either room-scoped (everyone in the game) or player-scoped
//! (a single seat, for payloads carrying hidden cards). Broadcast is
//! fire-and-forget relative to the move: a failed publish never rolls back
//! or fails the move that produced it.

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;
use tokio::sync::broadcast;

use crate::domain::events::GameEvent;
use crate::domain::state::{GameId, Seat};

#[derive(Error, Debug)]
#[error("broadcast failed: {detail}")]
pub struct BroadcastError {
    pub detail: String,
}

#[async_trait]
pub trait Broadcaster: Send + Sync {
    /// Room-scoped publish: every player in the game.
    async fn publish(&self, game_id: GameId, event: &GameEvent) -> Result<(), BroadcastError>;

    /// Player-scoped publish: a single seat.
    async fn publish_to(
        &self,
        game_id: GameId,
        seat: Seat,
        event: &GameEvent,
    ) -> Result<(), BroadcastError>;
}

/// One published event with its routing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Envelope {
    pub game_id: GameId,
    /// None for room scope.
    pub seat: Option<Seat>,
    #[serde(flatten)]
    pub event: GameEvent,
}

/// In-process broadcaster over a tokio broadcast channel.
///
/// Subscribers receive every envelope and filter on game/seat themselves;
/// the surrounding system owns per-connection routing.
pub struct LocalBroadcaster {
    tx: broadcast::Sender<Envelope>,
}

impl LocalBroadcaster {
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        Self { tx }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Envelope> {
        self.tx.subscribe()
    }

    fn send(&self, envelope: Envelope) {
        // A send error only means there are no subscribers right now.
        let _ = self.tx.send(envelope);
    }
}

impl Default for LocalBroadcaster {
    fn default() -> Self {
        Self::new(256)
    }
}

#[async_trait]
impl Broadcaster for LocalBroadcaster {
    async fn publish(&self, game_id: GameId, event: &GameEvent) -> Result<(), BroadcastError> {
        self.send(Envelope {
            game_id,
            seat: None,
            event: event.clone(),
        });
        Ok(())
    }

    async fn publish_to(
        &self,
        game_id: GameId,
        seat: Seat,
        event: &GameEvent,
    ) -> Result<(), BroadcastError> {
        self.send(Envelope {
            game_id,
            seat: Some(seat),
            event: event.clone(),
        });
        Ok(())
    }
}
