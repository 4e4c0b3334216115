//! Move history for undo/redo.
//!
//! ## Key Types
//!
//! - `Move`: one applied roll `{roll, from, to}`
//! - `MoveHistory`: sliding undo window plus redo stack, with per-cycle caps

mod move_history;
mod record;

pub use move_history::MoveHistory;
pub use record::Move;
