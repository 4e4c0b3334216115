//! Bounded undo/redo history.
//!
//! Two stacks:
//! - the undo stack is a sliding window over the most recent moves; pushing
//!   past the window evicts the oldest move, never the newest
//! - the redo stack holds undone moves and is cleared by any new move
//!
//! Undo and redo are each capped per cycle. What a cycle is depends on the
//! `UndoPolicy`: the engine calls `reset_counts` at turn boundaries under
//! `PerTurn`, and only `reset` clears the counters under `PerGame`.
//!
//! Stacks are `im::Vector`s so cloning a history for a snapshot is O(1).

use im::Vector;
use serde::{Deserialize, Serialize};

use super::record::Move;
use crate::core::RulesConfig;

/// Per-player move history with capped undo/redo.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveHistory {
    /// Oldest at the front, most recent at the back.
    undo_stack: Vector<Move>,
    /// Most recently undone at the back.
    redo_stack: Vector<Move>,
    undo_count: u8,
    redo_count: u8,
    window: usize,
    undo_limit: u8,
    redo_limit: u8,
}

impl Default for MoveHistory {
    fn default() -> Self {
        Self::from_rules(&RulesConfig::default())
    }
}

impl MoveHistory {
    /// Create a history with explicit window and caps.
    #[must_use]
    pub fn new(window: usize, undo_limit: u8, redo_limit: u8) -> Self {
        Self {
            undo_stack: Vector::new(),
            redo_stack: Vector::new(),
            undo_count: 0,
            redo_count: 0,
            window,
            undo_limit,
            redo_limit,
        }
    }

    /// Create a history sized by the rules.
    #[must_use]
    pub fn from_rules(rules: &RulesConfig) -> Self {
        Self::new(rules.history_window, rules.undo_limit, rules.redo_limit)
    }

    /// Record a new move, evicting the oldest past the window.
    ///
    /// Always clears the redo stack.
    pub fn record(&mut self, mv: Move) {
        self.undo_stack.push_back(mv);
        while self.undo_stack.len() > self.window {
            self.undo_stack.pop_front();
        }
        self.redo_stack.clear();
    }

    /// Take back the most recent move.
    ///
    /// Returns `None` if there is nothing to undo or the cap is spent.
    pub fn undo(&mut self) -> Option<Move> {
        if !self.can_undo() {
            return None;
        }

        let mv = self.undo_stack.pop_back()?;
        self.redo_stack.push_back(mv);
        self.undo_count += 1;
        Some(mv)
    }

    /// Re-apply the most recently undone move.
    ///
    /// Returns `None` if there is nothing to redo or the cap is spent.
    pub fn redo(&mut self) -> Option<Move> {
        if !self.can_redo() {
            return None;
        }

        let mv = self.redo_stack.pop_back()?;
        self.undo_stack.push_back(mv);
        self.redo_count += 1;
        Some(mv)
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty() && self.undo_count < self.undo_limit
    }

    #[must_use]
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty() && self.redo_count < self.redo_limit
    }

    /// Rolls in the undo window, most recent first.
    #[must_use]
    pub fn history_snapshot(&self) -> Vec<u8> {
        self.undo_stack.iter().rev().map(|mv| mv.roll).collect()
    }

    /// Moves in the undo window, most recent first.
    pub fn moves(&self) -> impl Iterator<Item = &Move> {
        self.undo_stack.iter().rev()
    }

    /// Most recent move still in the undo window.
    #[must_use]
    pub fn last(&self) -> Option<Move> {
        self.undo_stack.back().copied()
    }

    /// Number of moves in the undo window.
    #[must_use]
    pub fn len(&self) -> usize {
        self.undo_stack.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.undo_stack.is_empty()
    }

    /// Number of moves waiting to be redone.
    #[must_use]
    pub fn redo_len(&self) -> usize {
        self.redo_stack.len()
    }

    #[must_use]
    pub fn undo_count(&self) -> u8 {
        self.undo_count
    }

    #[must_use]
    pub fn redo_count(&self) -> u8 {
        self.redo_count
    }

    /// Start a new undo/redo cycle without touching the stacks.
    pub fn reset_counts(&mut self) {
        self.undo_count = 0;
        self.redo_count = 0;
    }

    /// Clear both stacks and both counters.
    pub fn reset(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
        self.reset_counts();
    }
}
