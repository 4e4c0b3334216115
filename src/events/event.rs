//! Game event types.
//!
//! Events describe what the engine just did. Renderers use them to animate
//! moves, show win messages, and refresh turn indicators without reaching
//! into engine state.

use serde::{Deserialize, Serialize};

use crate::board::Shortcut;
use crate::core::PlayerId;
use crate::history::Move;
use crate::rules::WasteReason;

/// Event discriminant, used to filter subscriptions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventKind {
    TurnChanged,
    MoveApplied,
    RollWasted,
    PlayerWon,
    MoveUndone,
    MoveRedone,
    GameRestarted,
}

/// Something that happened in the game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// The turn passed to another seat.
    TurnChanged { from: PlayerId, to: PlayerId },

    /// A roll moved a player. `shortcut` is the snake or ladder taken, if any.
    ///
    /// When a shortcut carries the player back to `mv.from`, the event is
    /// still published but the move is not recorded in history.
    MoveApplied {
        player: PlayerId,
        mv: Move,
        shortcut: Option<Shortcut>,
    },

    /// A roll left the player in place.
    RollWasted {
        player: PlayerId,
        roll: u8,
        reason: WasteReason,
    },

    /// A player reached the final square. `wins` is their new total.
    PlayerWon { player: PlayerId, wins: u32 },

    /// A move was taken back; the player is on `mv.from` again.
    MoveUndone { player: PlayerId, mv: Move },

    /// An undone move was re-applied; the player is on `mv.to` again.
    MoveRedone { player: PlayerId, mv: Move },

    /// Positions and histories were reset for a fresh game.
    GameRestarted,
}

impl GameEvent {
    /// Discriminant of this event.
    #[must_use]
    pub fn kind(&self) -> EventKind {
        match self {
            GameEvent::TurnChanged { .. } => EventKind::TurnChanged,
            GameEvent::MoveApplied { .. } => EventKind::MoveApplied,
            GameEvent::RollWasted { .. } => EventKind::RollWasted,
            GameEvent::PlayerWon { .. } => EventKind::PlayerWon,
            GameEvent::MoveUndone { .. } => EventKind::MoveUndone,
            GameEvent::MoveRedone { .. } => EventKind::MoveRedone,
            GameEvent::GameRestarted => EventKind::GameRestarted,
        }
    }

    /// The player the event is about, if any.
    ///
    /// For `TurnChanged` this is the player who now has the turn.
    #[must_use]
    pub fn player(&self) -> Option<PlayerId> {
        match self {
            GameEvent::TurnChanged { to, .. } => Some(*to),
            GameEvent::MoveApplied { player, .. }
            | GameEvent::RollWasted { player, .. }
            | GameEvent::PlayerWon { player, .. }
            | GameEvent::MoveUndone { player, .. }
            | GameEvent::MoveRedone { player, .. } => Some(*player),
            GameEvent::GameRestarted => None,
        }
    }
}
