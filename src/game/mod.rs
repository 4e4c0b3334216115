//! Game orchestration.
//!
//! ## Key Types
//!
//! - `GameEngine`: owns the board, players, dice and listeners
//! - `TurnState`: whose roll it is, or who won
//! - `RollOutcome`: what a single roll did
//! - `GameSnapshot` / `PlayerView`: owned views for renderers

mod engine;
mod snapshot;
mod state;

pub use engine::GameEngine;
pub use snapshot::{position_ranking, wins_leaderboard, GameSnapshot, PlayerView};
pub use state::{RollOutcome, TurnState};
