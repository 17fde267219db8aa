//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are plain data with no game logic attached, making them usable in
//! any context (engine, presentation layer, input helpers, JSON consumers).
//!
//! # Grid Dimensions
//!
//! The playfield is a fixed 4x4 grid:
//!
//! - **Rows**: 4 (indexed 0-3, top to bottom)
//! - **Columns**: 4 (indexed 0-3, left to right)
//! - **Empty cell**: value `0`
//! - **Tile**: any power of two from 2 up to `MAX_TILE`
//!
//! # Rule Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `WIN_TILE` | 2048 | Tile value that wins the game |
//! | `MAX_TILE` | 131072 | Largest tile a 4x4 grid can hold |
//! | `INITIAL_TILES` | 2 | Tiles seeded by a reset |
//! | `SPAWN_LOW_TILE` | 2 | Common spawn value |
//! | `SPAWN_HIGH_TILE` | 4 | Rare spawn value |
//! | `SPAWN_HIGH_PROBABILITY` | 0.1 | Chance a spawn is `SPAWN_HIGH_TILE` |
//! | `SWIPE_THRESHOLD` | 50.0 | Minimum gesture displacement, in input units |
//!
//! # Examples
//!
//! ```
//! use slide_2048_types::{Direction, GameAction, Pos, GRID_SIZE};
//!
//! // Parse a direction (case-insensitive)
//! let dir = Direction::from_str("Left").unwrap();
//! assert_eq!(dir, Direction::Left);
//! assert_eq!(dir.opposite(), Direction::Right);
//!
//! // Parse a game action
//! let action = GameAction::from_str("newGame").unwrap();
//! assert_eq!(action, GameAction::NewGame);
//!
//! // Positions are row-major
//! assert_eq!(Pos::new(1, 2).index(), 6);
//! assert_eq!(GRID_SIZE, 4);
//! ```

use serde::{Deserialize, Serialize};

/// Grid side length (4 rows, 4 columns)
pub const GRID_SIZE: usize = 4;

/// Number of cells on the grid
pub const CELL_COUNT: usize = GRID_SIZE * GRID_SIZE;

/// Reaching this tile value wins the game
pub const WIN_TILE: Tile = 2048;

/// Largest tile reachable on a 4x4 grid (2^17). Two of these never merge.
pub const MAX_TILE: Tile = 1 << 17;

/// Number of tiles spawned by a reset
pub const INITIAL_TILES: usize = 2;

/// Value of a regular spawn
pub const SPAWN_LOW_TILE: Tile = 2;

/// Value of a rare spawn
pub const SPAWN_HIGH_TILE: Tile = 4;

/// Probability that a spawned tile is [`SPAWN_HIGH_TILE`] instead of [`SPAWN_LOW_TILE`]
pub const SPAWN_HIGH_PROBABILITY: f64 = 0.1;

/// Minimum displacement on either axis before a gesture counts as a swipe
pub const SWIPE_THRESHOLD: f32 = 50.0;

/// A cell value: `0` for empty, otherwise a power of two in `2..=MAX_TILE`.
pub type Tile = u32;

/// Row-major 4x4 matrix of cell values, as handed to presentation code.
pub type Rows = [[Tile; GRID_SIZE]; GRID_SIZE];

/// Check whether `value` may legally sit in a grid cell.
///
/// # Examples
///
/// ```
/// use slide_2048_types::is_tile_value;
///
/// assert!(is_tile_value(0));
/// assert!(is_tile_value(2));
/// assert!(is_tile_value(2048));
/// assert!(!is_tile_value(1));
/// assert!(!is_tile_value(6));
/// assert!(!is_tile_value(1 << 18));
/// ```
pub fn is_tile_value(value: Tile) -> bool {
    value == 0 || ((2..=MAX_TILE).contains(&value) && value.is_power_of_two())
}


/// The four move directions
///
/// Tiles slide toward the named edge:
/// - **Up**: toward row 0
/// - **Down**: toward row 3
/// - **Left**: toward column 0
/// - **Right**: toward column 3
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All directions, in a fixed order
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Parse direction from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use slide_2048_types::Direction;
    ///
    /// assert_eq!(Direction::from_str("up"), Some(Direction::Up));
    /// assert_eq!(Direction::from_str("RIGHT"), Some(Direction::Right));
    /// assert_eq!(Direction::from_str("north"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "up" => Some(Direction::Up),
            "down" => Some(Direction::Down),
            "left" => Some(Direction::Left),
            "right" => Some(Direction::Right),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }

    /// The mirrored direction on the same axis
    pub fn opposite(&self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// True for up/down, whose lines are columns
    pub fn is_vertical(&self) -> bool {
        matches!(self, Direction::Up | Direction::Down)
    }

    /// True when tiles move toward index 3 (down/right)
    pub fn toward_high_index(&self) -> bool {
        matches!(self, Direction::Down | Direction::Right)
    }
}

/// Requests a presentation layer can send to the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GameAction {
    /// Slide all tiles in a direction
    Move(Direction),
    /// Discard the current game and start over ("new game" / "try again")
    NewGame,
}

impl GameAction {
    /// Parse action from string
    ///
    /// Accepts the four direction names plus `newGame` (alias `restart`).
    ///
    /// # Examples
    ///
    /// ```
    /// use slide_2048_types::{Direction, GameAction};
    ///
    /// assert_eq!(GameAction::from_str("left"), Some(GameAction::Move(Direction::Left)));
    /// assert_eq!(GameAction::from_str("restart"), Some(GameAction::NewGame));
    /// assert_eq!(GameAction::from_str("undo"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "newgame" | "restart" => Some(GameAction::NewGame),
            other => Direction::from_str(other).map(GameAction::Move),
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::Move(dir) => dir.as_str(),
            GameAction::NewGame => "newGame",
        }
    }
}

/// Engine lifecycle phase
///
/// `Terminal` dominates `Won`: a won game that runs out of moves is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Playing,
    Won,
    Terminal,
}

impl Phase {
    /// Derive the phase from the engine's sticky flags
    pub fn from_flags(won: bool, terminal: bool) -> Self {
        if terminal {
            Phase::Terminal
        } else if won {
            Phase::Won
        } else {
            Phase::Playing
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Playing => "playing",
            Phase::Won => "won",
            Phase::Terminal => "terminal",
        }
    }
}

/// A cell coordinate, row-major
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Pos {
    pub row: u8,
    pub col: u8,
}

impl Pos {
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Position of the flat row-major index `idx` (must be < `CELL_COUNT`)
    pub const fn from_index(idx: usize) -> Self {
        Self {
            row: (idx / GRID_SIZE) as u8,
            col: (idx % GRID_SIZE) as u8,
        }
    }

    /// Flat row-major index
    pub const fn index(&self) -> usize {
        self.row as usize * GRID_SIZE + self.col as usize
    }

    pub const fn in_bounds(&self) -> bool {
        (self.row as usize) < GRID_SIZE && (self.col as usize) < GRID_SIZE
    }
}

/// A tile placed by the spawn policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SpawnedTile {
    pub pos: Pos,
    pub value: Tile,
}

impl SpawnedTile {
    pub const fn new(pos: Pos, value: Tile) -> Self {
        Self { pos, value }
    }
}
