//! Per-game move serialization.
//!
//! Guarantees at-most-one in-flight move per game id: callers queue on the
//! game's async mutex and games stay independent of each other. This
//! replaces per-request lock bookkeeping with one explicit single-writer
//! seam.

use std::sync::Arc;

use dashmap::DashMap;
use tokio::sync::{Mutex, OwnedMutexGuard};

use crate::domain::state::GameId;

#[derive(Default)]
pub struct GameCoordinator {
    locks: DashMap<GameId, Arc<Mutex<()>>>,
}

impl GameCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Block (asynchronously) until this game's previous move finished.
    pub async fn acquire(&self, game_id: GameId) -> OwnedMutexGuard<()> {
        let lock = self
            .locks
            .entry(game_id)
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone();
        lock.lock_owned().await
    }

    /// Drop the lock entry once a game is terminal.
    ///
    /// Callers still queued on the removed mutex keep serializing among
    /// themselves; a later caller minting a fresh lock can only race them on
    /// a completed game, where every move is rejected by status.
    pub fn forget(&self, game_id: GameId) {
        self.locks.remove(&game_id);
    }
}
