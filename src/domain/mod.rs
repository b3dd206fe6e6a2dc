//! Domain layer: pure game logic types and helpers.

pub mod asking;
pub mod calling;
pub mod cards;
pub mod dealing;
pub mod events;
pub mod inference;
pub mod lifecycle;
pub mod moves;
pub mod player_view;
pub mod rules;
pub mod sets;
pub mod state;

#[cfg(test)]
mod test_gens;
#[cfg(test)]
mod test_prelude;
#[cfg(test)]
mod tests_asking;
#[cfg(test)]
mod tests_inference;
#[cfg(test)]
mod tests_props;

// Re-exports for ergonomics
pub use cards::{try_parse_cards, Card, Rank, Suit};
pub use dealing::deal_hands;
pub use events::GameEvent;
pub use inference::BeliefState;
pub use moves::{CardClaim, MoveKind, MoveOutcome, MoveRecord};
pub use player_view::PlayerView;
pub use rules::{CallScope, RuleTable};
pub use sets::{all_sets, cards_of, set_of, CardSet, SetHalf};
pub use state::{GameId, GameState, GameStatus, PlayerProfile, Seat, Team, TeamId};
