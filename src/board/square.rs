//! Squares and shortcuts.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{PlayerId, MAX_SEATS};

/// Occupant list sized for a full table without heap allocation.
pub type Occupants = SmallVec<[PlayerId; MAX_SEATS]>;

/// Direction of a shortcut, derived from its endpoints.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShortcutKind {
    /// Leads down the board.
    Snake,
    /// Leads up the board.
    Ladder,
}

/// A snake or ladder: landing on `start` moves the player to `end`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Shortcut {
    pub start: u8,
    pub end: u8,
}

impl Shortcut {
    #[must_use]
    pub const fn new(start: u8, end: u8) -> Self {
        Self { start, end }
    }

    /// Kind derived from direction. `None` when `start == end`.
    #[must_use]
    pub fn kind(&self) -> Option<ShortcutKind> {
        match self.end.cmp(&self.start) {
            std::cmp::Ordering::Less => Some(ShortcutKind::Snake),
            std::cmp::Ordering::Greater => Some(ShortcutKind::Ladder),
            std::cmp::Ordering::Equal => None,
        }
    }
}

impl std::fmt::Display for Shortcut {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind() {
            Some(ShortcutKind::Snake) => write!(f, "snake {} -> {}", self.start, self.end),
            Some(ShortcutKind::Ladder) => write!(f, "ladder {} -> {}", self.start, self.end),
            None => write!(f, "square {}", self.start),
        }
    }
}

/// One board square.
///
/// `redirect_to` is fixed when the board is built; it equals `id` on a plain
/// square.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Square {
    pub(crate) id: u8,
    pub(crate) redirect_to: u8,
    pub(crate) occupants: Occupants,
}

impl Square {
    pub(crate) fn new(id: u8, redirect_to: u8) -> Self {
        Self {
            id,
            redirect_to,
            occupants: SmallVec::new(),
        }
    }

    #[must_use]
    pub fn id(&self) -> u8 {
        self.id
    }

    #[must_use]
    pub fn redirect_to(&self) -> u8 {
        self.redirect_to
    }

    /// The shortcut starting here, if any.
    #[must_use]
    pub fn shortcut(&self) -> Option<Shortcut> {
        let shortcut = Shortcut::new(self.id, self.redirect_to);
        shortcut.kind().map(|_| shortcut)
    }

    #[must_use]
    pub fn kind(&self) -> Option<ShortcutKind> {
        Shortcut::new(self.id, self.redirect_to).kind()
    }

    #[must_use]
    pub fn is_plain(&self) -> bool {
        self.redirect_to == self.id
    }

    /// Players on this square, in arrival order.
    #[must_use]
    pub fn occupants(&self) -> &[PlayerId] {
        &self.occupants
    }

    /// Add a player. Returns `false` if already present.
    pub(crate) fn insert(&mut self, player: PlayerId) -> bool {
        if self.occupants.contains(&player) {
            return false;
        }
        self.occupants.push(player);
        true
    }

    /// Remove a player. Returns `false` if absent.
    pub(crate) fn remove(&mut self, player: PlayerId) -> bool {
        let before = self.occupants.len();
        self.occupants.retain(|p| *p != player);
        self.occupants.len() != before
    }
}
