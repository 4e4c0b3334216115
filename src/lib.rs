//! # snakes-ladders
//!
//! A turn-based Snakes & Ladders engine for 1-4 local seats.
//!
//! ## Design Principles
//!
//! 1. **Headless**: The engine never renders. It returns plain data and
//!    publishes typed events; drawing is the caller's job.
//!
//! 2. **Atomic Transitions**: Every operation either fully applies or is
//!    rejected with a `GameError` and changes nothing.
//!
//! 3. **Configuration Over Convention**: Board tables, history limits, and
//!    the undo policy come from `GameConfig`.
//!
//! ## Architecture
//!
//! - **Flat Board**: Squares live in an array indexed by square number.
//!   Redirects are fixed when the board is built.
//!
//! - **Caller-Driven Scheduling**: The engine has no timers. A scheduler
//!   calls `roll_for_current_player` while `is_computer_turn` holds.
//!
//! - **Deterministic Dice**: A seeded ChaCha8 stream makes every session
//!   reproducible.
//!
//! ## Modules
//!
//! - `core`: Player IDs, players, RNG, configuration, errors
//! - `history`: Moves and bounded undo/redo history
//! - `board`: Squares, shortcuts, occupancy, display layout
//! - `rules`: Roll resolution per difficulty
//! - `events`: Game events and listeners
//! - `game`: The engine, turn state, snapshots

pub mod board;
pub mod core;
pub mod events;
pub mod game;
pub mod history;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    BoardConfig, Difficulty, GameConfig, GameError, GameRng, GameRngState, Player, PlayerId,
    PlayerMap, RulesConfig, SeatConfig, SeatKind, UndoPolicy,
};

pub use crate::board::{Board, BoardSnapshot, Shortcut, ShortcutKind, Square};

pub use crate::history::{Move, MoveHistory};

pub use crate::rules::{Advance, WasteReason};

pub use crate::events::{EventBus, EventKind, GameEvent, ListenerId};

pub use crate::game::{GameEngine, GameSnapshot, PlayerView, RollOutcome, TurnState};
