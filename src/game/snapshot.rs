//! Read-only views for renderers.
//!
//! Snapshots are owned copies: holding one never borrows the engine.

use std::cmp::Reverse;

use serde::{Deserialize, Serialize};

use super::state::TurnState;
use crate::board::BoardSnapshot;
use crate::core::{Difficulty, Player, PlayerId, SeatKind};
use crate::history::Move;

/// One player as a renderer sees it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerView {
    pub id: PlayerId,
    pub name: String,
    pub color: String,
    pub image_ref: String,
    pub kind: SeatKind,
    pub position: u8,
    pub last_roll: u8,
    pub wins: u32,
    /// Recent rolls, most recent first.
    pub recent_rolls: Vec<u8>,
}

impl From<&Player> for PlayerView {
    fn from(player: &Player) -> Self {
        Self {
            id: player.id(),
            name: player.name().to_owned(),
            color: player.color().to_owned(),
            image_ref: player.image_ref().to_owned(),
            kind: player.kind(),
            position: player.position(),
            last_roll: player.last_roll(),
            wins: player.wins(),
            recent_rolls: player.history().history_snapshot(),
        }
    }
}

/// Full engine state for one frame.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub state: TurnState,
    pub difficulty: Difficulty,
    /// Players in turn order.
    pub players: Vec<PlayerView>,
    pub board: BoardSnapshot,
    pub last_move: Option<Move>,
    pub can_undo: bool,
    pub can_redo: bool,
}

impl GameSnapshot {
    /// Seat whose turn it is, or the winner.
    #[must_use]
    pub fn current(&self) -> PlayerId {
        self.state.seat()
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&PlayerView> {
        self.players.iter().find(|p| p.id == id)
    }
}

/// Players by wins, most first. Ties keep turn order.
pub fn wins_leaderboard<'a>(players: impl IntoIterator<Item = &'a Player>) -> Vec<&'a Player> {
    let mut ranked: Vec<_> = players.into_iter().collect();
    ranked.sort_by_key(|p| Reverse(p.wins()));
    ranked
}

/// Players by board position, furthest first. Ties keep turn order.
pub fn position_ranking<'a>(players: impl IntoIterator<Item = &'a Player>) -> Vec<&'a Player> {
    let mut ranked: Vec<_> = players.into_iter().collect();
    ranked.sort_by_key(|p| Reverse(p.position()));
    ranked
}
