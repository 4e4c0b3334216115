//! Board topology: squares, snakes, ladders, occupancy.
//!
//! ## Key Types
//!
//! - `Board`: all 100 squares, redirect resolution, occupancy
//! - `Square`: id, fixed redirect target, occupants
//! - `Shortcut` / `ShortcutKind`: a snake or ladder and its derived kind
//! - `BoardSnapshot`: read-only occupancy view for renderers

#[allow(clippy::module_inception)]
mod board;
mod layout;
mod square;

pub use board::{Board, BoardSnapshot, SquareOccupancy};
pub use layout::{serpentine_rows, ROW_LENGTH};
pub use square::{Occupants, Shortcut, ShortcutKind, Square};
