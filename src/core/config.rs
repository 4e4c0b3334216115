//! Game configuration types.
//!
//! Callers configure a session at startup by providing:
//! - `BoardConfig`: snake and ladder tables
//! - `RulesConfig`: history window, undo/redo caps, entry roll, undo policy
//! - `SeatConfig`: name, color, and image reference for each human seat
//! - `GameConfig`: combines all of the above with difficulty and RNG seed
//!
//! `Default` everywhere yields the reference game: five snakes, six ladders,
//! a 7-move history window and 3 undos/redos.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Last square on the board. Reaching it wins.
pub const FINAL_SQUARE: u8 = 100;

/// Number of faces on the die. Rolls are drawn from `1..=DIE_FACES`.
pub const DIE_FACES: u8 = 6;

/// A roll of this value grants the mover another turn.
pub const EXTRA_TURN_ROLL: u8 = 6;

/// Fewest human seats.
pub const MIN_SEATS: usize = 1;

/// Most human seats.
pub const MAX_SEATS: usize = 4;

/// Name given to the scripted seat in single-player mode.
pub const COMPUTER_NAME: &str = "computer";

/// Reference snake table, `(start, end)` with `end < start`.
pub const REFERENCE_SNAKES: [(u8, u8); 5] = [(20, 6), (39, 3), (77, 37), (89, 32), (95, 55)];

/// Reference ladder table, `(start, end)` with `end > start`.
pub const REFERENCE_LADDERS: [(u8, u8); 6] =
    [(4, 25), (13, 46), (50, 69), (42, 63), (62, 81), (74, 92)];

/// Default disc colors, by seat.
pub const SEAT_COLORS: [&str; MAX_SEATS] = ["red", "green", "yellow", "purple"];

/// Win rule applied when a roll would reach or pass the final square.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    /// Reaching or passing the final square wins.
    Easy,
    /// Must land exactly; overshooting wastes the roll.
    #[default]
    Medium,
    /// Must land exactly; overshooting bounces back by the excess.
    Hard,
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        };
        f.write_str(name)
    }
}

/// Unrecognised difficulty name.
#[derive(Clone, Debug, PartialEq, Eq, Display, Error)]
#[display("unknown difficulty '{name}' (expected easy, medium or hard)")]
pub struct ParseDifficultyError {
    pub name: String,
}

impl std::str::FromStr for Difficulty {
    type Err = ParseDifficultyError;

    /// Accepts full names or the single-letter level codes `E`, `M`, `H`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" | "e" => Ok(Difficulty::Easy),
            "medium" | "m" => Ok(Difficulty::Medium),
            "hard" | "h" => Ok(Difficulty::Hard),
            _ => Err(ParseDifficultyError { name: s.to_string() }),
        }
    }
}

/// Scope of the undo/redo counters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UndoPolicy {
    /// Counters persist until the game is restarted.
    #[default]
    PerGame,
    /// Counters reset whenever the turn passes to the player.
    PerTurn,
}

/// Snake and ladder tables.
///
/// Entries are `(start, end)`. The kind of each shortcut is derived from the
/// direction, so the two tables only exist to mirror how boards are described.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    pub snakes: Vec<(u8, u8)>,
    pub ladders: Vec<(u8, u8)>,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            snakes: REFERENCE_SNAKES.to_vec(),
            ladders: REFERENCE_LADDERS.to_vec(),
        }
    }
}

impl BoardConfig {
    /// A board with no shortcuts at all.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            snakes: Vec::new(),
            ladders: Vec::new(),
        }
    }

    /// Add a snake (builder pattern).
    #[must_use]
    pub fn with_snake(mut self, start: u8, end: u8) -> Self {
        self.snakes.push((start, end));
        self
    }

    /// Add a ladder (builder pattern).
    #[must_use]
    pub fn with_ladder(mut self, start: u8, end: u8) -> Self {
        self.ladders.push((start, end));
        self
    }
}

/// Rule constants.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RulesConfig {
    /// Most recent moves kept for undo (oldest evicted).
    pub history_window: usize,

    /// Undos allowed per cycle.
    pub undo_limit: u8,

    /// Redos allowed per cycle.
    pub redo_limit: u8,

    /// Roll needed to enter the board from the start line.
    pub roll_to_enter: u8,

    /// When the undo/redo counters reset.
    pub undo_policy: UndoPolicy,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            history_window: 7,
            undo_limit: 3,
            redo_limit: 3,
            roll_to_enter: 6,
            undo_policy: UndoPolicy::PerGame,
        }
    }
}

impl RulesConfig {
    /// Set the undo/redo counter policy.
    #[must_use]
    pub fn with_undo_policy(mut self, policy: UndoPolicy) -> Self {
        self.undo_policy = policy;
        self
    }

    /// Set the history window.
    #[must_use]
    pub fn with_history_window(mut self, window: usize) -> Self {
        self.history_window = window;
        self
    }

    /// Set both undo and redo caps.
    #[must_use]
    pub fn with_limits(mut self, undo: u8, redo: u8) -> Self {
        self.undo_limit = undo;
        self.redo_limit = redo;
        self
    }

    /// Reject rules no game can finish under.
    ///
    /// The entry roll must be a die face and the history window must hold at
    /// least one move. Zero undo or redo caps are allowed.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=DIE_FACES).contains(&self.roll_to_enter) {
            return Err(ConfigError::InvalidRule {
                rule: "roll_to_enter",
                value: usize::from(self.roll_to_enter),
            });
        }
        if self.history_window == 0 {
            return Err(ConfigError::InvalidRule {
                rule: "history_window",
                value: 0,
            });
        }
        Ok(())
    }
}

/// Presentation data for one human seat. The engine forwards it untouched.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatConfig {
    pub name: String,
    pub color: String,
    pub image_ref: String,
}

impl SeatConfig {
    /// Create a seat with the given name and no color or image.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            color: String::new(),
            image_ref: String::new(),
        }
    }

    /// Default seat for a 0-based seat index: "Player N" with the seat color.
    #[must_use]
    pub fn for_seat(seat: usize) -> Self {
        Self {
            name: format!("Player {}", seat + 1),
            color: SEAT_COLORS.get(seat).copied().unwrap_or_default().to_string(),
            image_ref: format!("player-{}", seat + 1),
        }
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    #[must_use]
    pub fn with_image_ref(mut self, image_ref: impl Into<String>) -> Self {
        self.image_ref = image_ref.into();
        self
    }
}

/// Complete game configuration.
///
/// `mode` is the number of human seats. Mode 1 plays against a computer
/// seat, so the table has two seats.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub board: BoardConfig,
    pub rules: RulesConfig,
    pub difficulty: Difficulty,
    pub mode: usize,
    pub seats: Vec<SeatConfig>,
    pub seed: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(1)
    }
}

impl GameConfig {
    /// Reference configuration with `mode` default human seats.
    ///
    /// The mode is validated when the game is created, not here.
    pub fn new(mode: usize) -> Self {
        Self {
            board: BoardConfig::default(),
            rules: RulesConfig::default(),
            difficulty: Difficulty::default(),
            mode,
            seats: (0..mode).map(SeatConfig::for_seat).collect(),
            seed: 42,
        }
    }

    /// Number of seats at the table, including the computer seat.
    #[must_use]
    pub fn seat_count(&self) -> usize {
        if self.mode == 1 {
            2
        } else {
            self.mode
        }
    }

    #[must_use]
    pub fn with_board(mut self, board: BoardConfig) -> Self {
        self.board = board;
        self
    }

    #[must_use]
    pub fn with_rules(mut self, rules: RulesConfig) -> Self {
        self.rules = rules;
        self
    }

    #[must_use]
    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    /// Replace the human seat configs.
    #[must_use]
    pub fn with_seats(mut self, seats: Vec<SeatConfig>) -> Self {
        self.seats = seats;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}
