//! Turn state and roll results.

use serde::{Deserialize, Serialize};

use crate::board::Shortcut;
use crate::core::PlayerId;
use crate::events::GameEvent;
use crate::history::Move;
use crate::rules::Advance;

/// Where the game is in its turn cycle.
///
/// Roll resolution happens inside a single `&mut self` call, so it never
/// shows up as a state of its own.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnState {
    /// Waiting for this seat to roll.
    AwaitingRoll(PlayerId),
    /// This seat reached the final square. Terminal until restart.
    Won(PlayerId),
}

impl TurnState {
    /// The seat the state refers to.
    #[must_use]
    pub fn seat(self) -> PlayerId {
        match self {
            TurnState::AwaitingRoll(player) | TurnState::Won(player) => player,
        }
    }

    #[must_use]
    pub fn is_over(self) -> bool {
        matches!(self, TurnState::Won(_))
    }

    #[must_use]
    pub fn winner(self) -> Option<PlayerId> {
        match self {
            TurnState::Won(player) => Some(player),
            TurnState::AwaitingRoll(_) => None,
        }
    }
}

/// Everything one roll did.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollOutcome {
    /// Seat that rolled.
    pub player: PlayerId,
    pub roll: u8,
    /// How the roll resolved before any shortcut.
    pub advance: Advance,
    /// The recorded move. `None` when the position did not change, even if
    /// a shortcut was taken.
    pub mv: Option<Move>,
    /// Snake or ladder taken on landing.
    pub shortcut: Option<Shortcut>,
    pub won: bool,
    /// Same seat rolls again.
    pub extra_turn: bool,
    /// Events in the order they were published.
    pub events: Vec<GameEvent>,
}

impl RollOutcome {
    /// Square the roller ends on.
    #[must_use]
    pub fn position(&self) -> Option<u8> {
        self.mv.map(|mv| mv.to)
    }

    #[must_use]
    pub fn moved(&self) -> bool {
        self.mv.is_some()
    }
}
