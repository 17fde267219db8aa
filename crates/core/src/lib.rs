//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the grid engine: the rules, the state, and the spawn
//! policy of the 4x4 sliding-tile merge puzzle. It has **zero dependencies**
//! on rendering, input devices, storage, or timing, making it:
//!
//! - **Deterministic**: Same seed produces identical games
//! - **Testable**: Spawning can be scripted, so every rule is checked exactly
//! - **Portable**: Any presentation layer can drive it through snapshots
//! - **Fast**: Moves run on a flat `[u32; 16]` with no heap allocation
//!
//! # Module Structure
//!
//! - [`grid`]: 4x4 grid, the shared slide/merge line primitive, win and terminal checks
//! - [`game_state`]: The engine: reset, moves, sticky flags, lifecycle phase
//! - [`rng`]: Spawn policy (seeded PCG or scripted placements)
//! - [`snapshot`]: Immutable move results and read-only state views
//! - [`best`]: Best-score tracking over a pluggable store
//!
//! # Game Rules
//!
//! - **Slide**: every tile moves as far as possible toward the chosen edge
//! - **Merge**: two equal neighbours combine into their sum; a merged tile
//!   does not merge again in the same move
//! - **Score**: each merge adds the value of the new tile
//! - **Spawn**: each effective move adds a 2 (90%) or a 4 (10%) on a random empty cell
//! - **Win**: a 2048 tile appears; play may continue
//! - **Terminal**: the grid is full and no neighbours are equal
//!
//! # Example
//!
//! ```
//! use slide_2048_core::GameState;
//! use slide_2048_types::Direction;
//!
//! // Create a seeded game; two tiles are already on the board
//! let mut game = GameState::new(12345);
//! assert_eq!(game.grid().occupied_count(), 2);
//!
//! // Try every direction; at least one is effective on a fresh grid
//! let moved = [Direction::Left, Direction::Up, Direction::Right, Direction::Down]
//!     .into_iter()
//!     .any(|dir| game.apply_move(dir).moved);
//! assert!(moved);
//! assert_eq!(game.moves(), 1);
//! ```

pub mod best;
pub mod game_state;
pub mod grid;
pub mod rng;
pub mod snapshot;

pub use slide_2048_types as types;

// Re-export commonly used types for convenience
pub use best::{BestScore, BestScoreStore, MemoryStore};
pub use game_state::GameState;
pub use grid::{line_positions, slide_line, Grid, GridError, LineOutcome, SlideOutcome};
pub use rng::{RandomSpawner, ScriptedSpawner, TileSpawner};
pub use snapshot::{GridSnapshot, MoveResult};
