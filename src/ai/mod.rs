//! Bot players for seats without a human behind them.

pub mod random;
pub mod tracker;
pub mod trait_def;

pub use random::RandomBot;
pub use tracker::TrackerBot;
pub use trait_def::{BotError, BotPlayer};
