//! Orchestration layer: per-game serialization plus the service that wires
//! domain processing to the store and broadcaster.

pub mod coordinator;
pub mod game_flow;

pub use coordinator::GameCoordinator;
pub use game_flow::GameFlowService;
