//! In-memory store: the reference `GameStore` implementation.

use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use parking_lot::RwLock;

use super::GameStore;
use crate::domain::moves::MoveRecord;
use crate::domain::state::{GameId, GameState, GameStatus};
use crate::error::EngineError;
use crate::errors::domain::{DomainError, NotFoundKind};

#[derive(Default)]
pub struct MemoryStore {
    next_id: AtomicI64,
    games: RwLock<HashMap<GameId, GameState>>,
    moves: RwLock<HashMap<GameId, Vec<MoveRecord>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            next_id: AtomicI64::new(1),
            games: RwLock::new(HashMap::new()),
            moves: RwLock::new(HashMap::new()),
        }
    }
}

#[async_trait]
impl GameStore for MemoryStore {
    async fn next_game_id(&self) -> Result<GameId, EngineError> {
        Ok(self.next_id.fetch_add(1, Ordering::SeqCst))
    }

    async fn load_game(&self, game_id: GameId) -> Result<GameState, EngineError> {
        self.games.read().get(&game_id).cloned().ok_or_else(|| {
            DomainError::not_found(NotFoundKind::Game, format!("Game {game_id} not found")).into()
        })
    }

    async fn save_game(&self, game: &GameState) -> Result<(), EngineError> {
        self.games.write().insert(game.game_id, game.clone());
        Ok(())
    }

    async fn commit_move(
        &self,
        game: &GameState,
        record: &MoveRecord,
    ) -> Result<(), EngineError> {
        // One critical section over both maps: the log never leads or
        // trails the aggregate.
        let mut games = self.games.write();
        let mut moves = self.moves.write();
        games.insert(game.game_id, game.clone());
        moves.entry(record.game_id).or_default().push(record.clone());
        Ok(())
    }

    async fn load_moves(&self, game_id: GameId) -> Result<Vec<MoveRecord>, EngineError> {
        Ok(self
            .moves
            .read()
            .get(&game_id)
            .cloned()
            .unwrap_or_default())
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<GameId>, EngineError> {
        Ok(self
            .games
            .read()
            .values()
            .find(|g| g.join_code == code && g.status == GameStatus::Created)
            .map(|g| g.game_id))
    }
}
