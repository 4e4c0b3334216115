//! Movement rules.
//!
//! Difficulty decides what happens when a roll reaches or passes the final
//! square:
//! - Easy: reaching or passing wins
//! - Medium: exact landing wins, overshooting wastes the roll
//! - Hard: exact landing wins, overshooting bounces back by the excess

mod advance;

pub use advance::{advance, Advance, WasteReason};
