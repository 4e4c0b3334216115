//! A single recorded move.

use serde::{Deserialize, Serialize};

/// One applied roll: the die value and the squares before and after.
///
/// `to` is the final square after any snake or ladder. Square 0 is the
/// start line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub roll: u8,
    pub from: u8,
    pub to: u8,
}

impl Move {
    #[must_use]
    pub const fn new(roll: u8, from: u8, to: u8) -> Self {
        Self { roll, from, to }
    }

    /// Did this move bring the player onto the board?
    #[must_use]
    pub const fn is_entry(&self) -> bool {
        self.from == 0 && self.to > 0
    }

    /// Signed distance travelled, negative after a snake or a bounce.
    #[must_use]
    pub fn delta(&self) -> i16 {
        i16::from(self.to) - i16::from(self.from)
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "rolled {}: {} -> {}", self.roll, self.from, self.to)
    }
}
