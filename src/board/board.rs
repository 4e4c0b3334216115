//! Board topology and occupancy.
//!
//! The `Board` owns all squares in a flat array indexed by square number,
//! so redirect lookup and occupancy updates are O(1). It supports:
//! - Construction from snake and ladder tables with validation
//! - Single-step redirect resolution
//! - Occupancy bookkeeping with set semantics
//! - Read-only snapshots for renderers

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

use super::square::{Shortcut, ShortcutKind, Square};
use crate::core::{BoardConfig, ConfigError, PlayerId, FINAL_SQUARE};

/// Which table a shortcut came from, used only to classify collisions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Table {
    Snakes,
    Ladders,
}

/// The 100-square board.
///
/// ## Usage
///
/// ```
/// use snakes_ladders::board::Board;
/// use snakes_ladders::core::PlayerId;
///
/// let mut board = Board::build(&[(20, 6)], &[(4, 25)]).unwrap();
/// assert_eq!(board.resolve_landing(20), 6);
/// assert_eq!(board.resolve_landing(4), 25);
/// assert_eq!(board.resolve_landing(5), 5);
///
/// board.place_player(PlayerId::new(1), 6);
/// assert_eq!(board.occupants_of(6), &[PlayerId::new(1)]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Square `n` lives at index `n - 1`.
    squares: Vec<Square>,
    /// Shortcuts in table order, snakes first.
    shortcuts: Vec<Shortcut>,
    /// Shortcuts whose end is itself a shortcut start.
    chained: Vec<Shortcut>,
}

impl Default for Board {
    fn default() -> Self {
        Self::plain()
    }
}

impl Board {
    /// A board with no snakes or ladders.
    #[must_use]
    pub fn plain() -> Self {
        Self {
            squares: (1..=FINAL_SQUARE).map(|id| Square::new(id, id)).collect(),
            shortcuts: Vec::new(),
            chained: Vec::new(),
        }
    }

    /// Build a board from `(start, end)` tables.
    ///
    /// Fails if a start appears in both tables, appears twice in one table,
    /// lies outside the board, or points at itself. A ladder may not end on
    /// the final square. No board is produced on failure.
    #[instrument(skip_all, fields(snakes = snakes.len(), ladders = ladders.len()))]
    pub fn build(snakes: &[(u8, u8)], ladders: &[(u8, u8)]) -> Result<Self, ConfigError> {
        let mut starts: FxHashMap<u8, Table> = FxHashMap::default();
        let mut shortcuts = Vec::with_capacity(snakes.len() + ladders.len());

        let tables = snakes
            .iter()
            .map(|&entry| (Table::Snakes, entry))
            .chain(ladders.iter().map(|&entry| (Table::Ladders, entry)));

        for (table, (start, end)) in tables {
            for square in [start, end] {
                if !(1..=FINAL_SQUARE).contains(&square) {
                    return Err(ConfigError::SquareOutOfRange {
                        square,
                        max: FINAL_SQUARE,
                    });
                }
            }
            if start == end {
                return Err(ConfigError::DegenerateShortcut { square: start });
            }
            if end == FINAL_SQUARE {
                return Err(ConfigError::EndsOnFinalSquare { start });
            }

            match starts.insert(start, table) {
                Some(previous) if previous == table => {
                    return Err(ConfigError::DuplicateStart { square: start });
                }
                Some(_) => return Err(ConfigError::AmbiguousRedirect { square: start }),
                None => {}
            }

            shortcuts.push(Shortcut::new(start, end));
        }

        let mut board = Self::plain();
        for shortcut in &shortcuts {
            board.squares[Self::slot(shortcut.start)].redirect_to = shortcut.end;
        }

        board.chained = shortcuts
            .iter()
            .copied()
            .filter(|s| starts.contains_key(&s.end))
            .collect();
        for shortcut in &board.chained {
            warn!(%shortcut, "shortcut ends on another shortcut; only the first step is taken");
        }

        board.shortcuts = shortcuts;
        debug!(shortcuts = board.shortcuts.len(), "board built");
        Ok(board)
    }

    /// Build a board from a `BoardConfig`.
    pub fn from_config(config: &BoardConfig) -> Result<Self, ConfigError> {
        Self::build(&config.snakes, &config.ladders)
    }

    fn slot(square: u8) -> usize {
        square as usize - 1
    }

    fn on_board(square: u8) -> bool {
        (1..=FINAL_SQUARE).contains(&square)
    }

    /// Get a square by number. `None` for 0 or past the final square.
    #[must_use]
    pub fn square(&self, id: u8) -> Option<&Square> {
        if Self::on_board(id) {
            self.squares.get(Self::slot(id))
        } else {
            None
        }
    }

    fn square_mut(&mut self, id: u8) -> Option<&mut Square> {
        if Self::on_board(id) {
            self.squares.get_mut(Self::slot(id))
        } else {
            None
        }
    }

    /// Iterate over all squares, 1 first.
    pub fn squares(&self) -> impl Iterator<Item = &Square> {
        self.squares.iter()
    }

    /// Number of squares.
    #[must_use]
    pub fn len(&self) -> usize {
        self.squares.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.squares.is_empty()
    }

    /// Where a player landing on `square` ends up.
    ///
    /// One step only: if the target is itself a shortcut start, it is not
    /// followed. Squares off the board map to themselves.
    #[must_use]
    pub fn resolve_landing(&self, square: u8) -> u8 {
        self.square(square).map_or(square, Square::redirect_to)
    }

    /// Shortcut starting on `square`, if any.
    #[must_use]
    pub fn shortcut_at(&self, square: u8) -> Option<Shortcut> {
        self.square(square).and_then(Square::shortcut)
    }

    /// Snake, ladder, or `None` for a plain square.
    #[must_use]
    pub fn kind_of(&self, square: u8) -> Option<ShortcutKind> {
        self.square(square).and_then(Square::kind)
    }

    /// All shortcuts, snakes first, in table order.
    #[must_use]
    pub fn shortcuts(&self) -> &[Shortcut] {
        &self.shortcuts
    }

    /// Shortcuts that end on another shortcut's start.
    #[must_use]
    pub fn chained_redirects(&self) -> &[Shortcut] {
        &self.chained
    }

    /// Put a player on a square. Repeated placement is a no-op, as is
    /// placement on square 0 (the start line is not on the board).
    pub fn place_player(&mut self, player: PlayerId, square: u8) {
        if let Some(sq) = self.square_mut(square) {
            sq.insert(player);
        }
    }

    /// Take a player off a square. No-op if absent.
    pub fn remove_player(&mut self, square: u8, player: PlayerId) {
        if let Some(sq) = self.square_mut(square) {
            sq.remove(player);
        }
    }

    /// Move a player between squares.
    pub fn move_player(&mut self, player: PlayerId, from: u8, to: u8) {
        self.remove_player(from, player);
        self.place_player(player, to);
    }

    /// Players on a square. Empty for square 0.
    #[must_use]
    pub fn occupants_of(&self, square: u8) -> &[PlayerId] {
        self.square(square).map(Square::occupants).unwrap_or_default()
    }

    /// Square a player is on, if any.
    #[must_use]
    pub fn find_player(&self, player: PlayerId) -> Option<u8> {
        self.squares
            .iter()
            .find(|sq| sq.occupants.contains(&player))
            .map(Square::id)
    }

    /// Empty every square.
    pub fn clear_occupants(&mut self) {
        for square in &mut self.squares {
            square.occupants.clear();
        }
    }

    /// Occupied squares and who is on them, square 1 first.
    #[must_use]
    pub fn snapshot(&self) -> BoardSnapshot {
        let occupied = self
            .squares
            .iter()
            .filter(|sq| !sq.occupants.is_empty())
            .map(|sq| SquareOccupancy {
                square: sq.id,
                occupants: sq.occupants.to_vec(),
            })
            .collect();

        BoardSnapshot { occupied }
    }
}

/// Players on one square.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SquareOccupancy {
    pub square: u8,
    pub occupants: Vec<PlayerId>,
}

/// Renderer view of board occupancy.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub occupied: Vec<SquareOccupancy>,
}

impl BoardSnapshot {
    /// Players on `square` in this snapshot.
    #[must_use]
    pub fn occupants_of(&self, square: u8) -> &[PlayerId] {
        self.occupied
            .iter()
            .find(|o| o.square == square)
            .map(|o| o.occupants.as_slice())
            .unwrap_or_default()
    }
}
