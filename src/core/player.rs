//! Player identification, per-seat storage, and player state.
//!
//! ## PlayerId
//!
//! Stable turn-order key. Ids are 1-based (`PlayerId(1)` sits in seat 0),
//! matching how players are numbered on screen.
//!
//! ## PlayerMap
//!
//! Per-seat data storage backed by `Vec` for O(1) access by `PlayerId`.
//!
//! ## Player
//!
//! Identity, position, last roll, win count, and the player's own
//! `MoveHistory`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::config::{RulesConfig, SeatConfig, COMPUTER_NAME};
use crate::history::MoveHistory;

/// Player identifier, 1-based.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Player ID for a 0-based seat index.
    #[must_use]
    pub const fn from_seat(seat: usize) -> Self {
        Self(seat as u8 + 1)
    }

    /// Get the 0-based seat index.
    #[must_use]
    pub const fn seat(self) -> usize {
        self.0 as usize - 1
    }

    /// Iterate over all player IDs for a game with `seat_count` seats.
    ///
    /// ```
    /// use snakes_ladders::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all(4).collect();
    /// assert_eq!(players.len(), 4);
    /// assert_eq!(players[0], PlayerId::new(1));
    /// assert_eq!(players[3], PlayerId::new(4));
    /// ```
    pub fn all(seat_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..seat_count).map(PlayerId::from_seat)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Per-seat data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use snakes_ladders::core::{PlayerId, PlayerMap};
///
/// let mut squares: PlayerMap<u8> = PlayerMap::new(4, |_| 0);
/// squares[PlayerId::new(2)] = 17;
/// assert_eq!(squares[PlayerId::new(2)], 17);
/// assert_eq!(squares[PlayerId::new(1)], 0);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    ///
    /// Callers validate the seat count first; an empty map is a bug.
    pub fn new(seat_count: usize, factory: impl FnMut(PlayerId) -> T) -> Self {
        assert!(seat_count > 0, "Must have at least 1 seat");
        assert!(seat_count < u8::MAX as usize, "Too many seats");

        let data = PlayerId::all(seat_count).map(factory).collect();

        Self { data }
    }

    /// Get the number of seats.
    #[must_use]
    pub fn seat_count(&self) -> usize {
        self.data.len()
    }

    /// Check whether an ID belongs to this map.
    #[must_use]
    pub fn contains(&self, player: PlayerId) -> bool {
        player.0 >= 1 && player.seat() < self.data.len()
    }

    /// Get a player's data, or `None` for an unknown ID.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> Option<&T> {
        if self.contains(player) {
            self.data.get(player.seat())
        } else {
            None
        }
    }

    /// Get mutable access to a player's data, or `None` for an unknown ID.
    pub fn get_mut(&mut self, player: PlayerId) -> Option<&mut T> {
        if self.contains(player) {
            self.data.get_mut(player.seat())
        } else {
            None
        }
    }

    /// Iterate over (PlayerId, &T) pairs in seat order.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId::from_seat(i), v))
    }

    /// Iterate over values in seat order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }

    /// Iterate mutably over values in seat order.
    pub fn values_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.data.iter_mut()
    }

    /// Iterate over all player IDs.
    pub fn player_ids(&self) -> impl Iterator<Item = PlayerId> {
        PlayerId::all(self.data.len())
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        &self.data[player.seat()]
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        &mut self.data[player.seat()]
    }
}

/// Who drives a seat.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SeatKind {
    /// Rolls on user input.
    Human,
    /// Rolls whenever the caller's scheduler decides.
    Computer,
}

/// A seated player.
///
/// Position 0 means the player has not entered the board yet.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub(crate) id: PlayerId,
    pub(crate) name: String,
    pub(crate) color: String,
    pub(crate) image_ref: String,
    pub(crate) kind: SeatKind,
    pub(crate) position: u8,
    pub(crate) last_roll: u8,
    pub(crate) wins: u32,
    pub(crate) history: MoveHistory,
}

impl Player {
    /// Create a human player from its seat configuration.
    #[must_use]
    pub fn human(id: PlayerId, seat: &SeatConfig, rules: &RulesConfig) -> Self {
        Self {
            id,
            name: seat.name.clone(),
            color: seat.color.clone(),
            image_ref: seat.image_ref.clone(),
            kind: SeatKind::Human,
            position: 0,
            last_roll: 0,
            wins: 0,
            history: MoveHistory::from_rules(rules),
        }
    }

    /// Create the scripted opponent that fills the second seat in single-player mode.
    #[must_use]
    pub fn computer(id: PlayerId, rules: &RulesConfig) -> Self {
        let seat = SeatConfig::for_seat(id.seat()).with_name(COMPUTER_NAME);
        Self {
            kind: SeatKind::Computer,
            ..Self::human(id, &seat, rules)
        }
    }

    #[must_use]
    pub fn id(&self) -> PlayerId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn color(&self) -> &str {
        &self.color
    }

    /// Opaque image reference for renderers.
    #[must_use]
    pub fn image_ref(&self) -> &str {
        &self.image_ref
    }

    #[must_use]
    pub fn kind(&self) -> SeatKind {
        self.kind
    }

    #[must_use]
    pub fn is_computer(&self) -> bool {
        self.kind == SeatKind::Computer
    }

    /// Current square, 0 when off the board.
    #[must_use]
    pub fn position(&self) -> u8 {
        self.position
    }

    /// Has this player entered the board?
    #[must_use]
    pub fn is_on_board(&self) -> bool {
        self.position > 0
    }

    /// Most recent die value, 0 before the first roll.
    #[must_use]
    pub fn last_roll(&self) -> u8 {
        self.last_roll
    }

    /// Games won this session.
    #[must_use]
    pub fn wins(&self) -> u32 {
        self.wins
    }

    #[must_use]
    pub fn history(&self) -> &MoveHistory {
        &self.history
    }

    /// Back to the start line. Wins are kept.
    pub fn reset_for_new_game(&mut self) {
        self.position = 0;
        self.last_roll = 0;
        self.history.reset();
    }
}
