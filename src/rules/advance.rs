//! Roll resolution per difficulty.
//!
//! `advance` decides where a roll takes a player before any snake or ladder
//! is applied. It is pure: the engine commits the result afterwards.

use serde::{Deserialize, Serialize};

use crate::core::{Difficulty, FINAL_SQUARE};

/// Why a roll left the player where they were.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WasteReason {
    /// Still on the start line and did not roll the entry value.
    NeedsEntryRoll,
    /// Medium difficulty: the roll would pass the final square.
    Overshoot,
}

/// Result of applying a roll to a position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Advance {
    /// Leave the start line onto square 1. No shortcut applies on entry.
    Enter,
    /// Position unchanged.
    Wasted(WasteReason),
    /// Land on the square; shortcuts still apply.
    Step(u8),
    /// Hard difficulty: passed the final square and bounced back to here;
    /// shortcuts still apply.
    Bounce(u8),
    /// Reached the final square.
    Finish,
}

impl Advance {
    /// Square reached before shortcuts, given the starting position.
    #[must_use]
    pub fn landing(self, from: u8) -> u8 {
        match self {
            Advance::Enter => 1,
            Advance::Wasted(_) => from,
            Advance::Step(square) | Advance::Bounce(square) => square,
            Advance::Finish => FINAL_SQUARE,
        }
    }

    #[must_use]
    pub fn is_win(self) -> bool {
        self == Advance::Finish
    }
}

/// Resolve `roll` from `position` under `difficulty`.
///
/// Position 0 is the start line: only `roll_to_enter` moves the player, and
/// it moves them to square 1 regardless of its value.
#[must_use]
pub fn advance(position: u8, roll: u8, difficulty: Difficulty, roll_to_enter: u8) -> Advance {
    if position == 0 {
        return if roll == roll_to_enter {
            Advance::Enter
        } else {
            Advance::Wasted(WasteReason::NeedsEntryRoll)
        };
    }

    let candidate = u16::from(position) + u16::from(roll);
    let last = u16::from(FINAL_SQUARE);

    if candidate < last {
        return Advance::Step(candidate as u8);
    }
    if candidate == last {
        return Advance::Finish;
    }

    match difficulty {
        Difficulty::Easy => Advance::Finish,
        Difficulty::Medium => Advance::Wasted(WasteReason::Overshoot),
        Difficulty::Hard => Advance::Bounce((last - (candidate - last)) as u8),
    }
}

impl Difficulty {
    /// Resolve a roll under this difficulty. See [`advance`].
    #[must_use]
    pub fn advance(self, position: u8, roll: u8, roll_to_enter: u8) -> Advance {
        advance(position, roll, self, roll_to_enter)
    }
}
