//! Persistence seam.
//!
//! The engine is storage-agnostic: it talks to a [`GameStore`] and treats a
//! move as committed only once the store accepted it. [`MemoryStore`] is the
//! in-process implementation used by tests and embedders.

mod memory;

use async_trait::async_trait;

pub use memory::MemoryStore;

use crate::domain::moves::MoveRecord;
use crate::domain::state::{GameId, GameState};
use crate::error::EngineError;

#[async_trait]
pub trait GameStore: Send + Sync {
    /// Allocate a fresh game id.
    async fn next_game_id(&self) -> Result<GameId, EngineError>;

    async fn load_game(&self, game_id: GameId) -> Result<GameState, EngineError>;

    /// Persist the full aggregate (status, teams, turn, hands).
    async fn save_game(&self, game: &GameState) -> Result<(), EngineError>;

    /// Persist one applied move: the updated aggregate and its log entry
    /// commit together or not at all. The log must never hold a move the
    /// stored aggregate has not seen.
    async fn commit_move(&self, game: &GameState, record: &MoveRecord)
        -> Result<(), EngineError>;

    /// The full move log in append order, for belief replay.
    async fn load_moves(&self, game_id: GameId) -> Result<Vec<MoveRecord>, EngineError>;

    /// Resolve a join code to a game id, while the game is joinable.
    async fn find_by_code(&self, code: &str) -> Result<Option<GameId>, EngineError>;
}
