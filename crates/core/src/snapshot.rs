use serde::{Deserialize, Serialize};

use crate::types::{Direction, Phase, Rows, SpawnedTile, Tile, GRID_SIZE};

/// Outcome of one `apply_move` call.
///
/// `won` and `terminal` report transitions: they are `true` only on the move
/// that first reached the state. The sticky flags live on [`GridSnapshot`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveResult {
    pub direction: Direction,
    pub grid: Rows,
    pub score: u32,
    pub score_delta: u32,
    pub moved: bool,
    pub won: bool,
    pub terminal: bool,
    pub spawned: Option<SpawnedTile>,
    /// Cells that received a merged tile on this move
    pub merged: [[bool; GRID_SIZE]; GRID_SIZE],
}

impl MoveResult {
    /// Result for a move that changed nothing
    pub fn unchanged(direction: Direction, grid: Rows, score: u32) -> Self {
        Self {
            direction,
            grid,
            score,
            score_delta: 0,
            moved: false,
            won: false,
            terminal: false,
            spawned: None,
            merged: [[false; GRID_SIZE]; GRID_SIZE],
        }
    }

    pub fn merge_count(&self) -> usize {
        self.merged.iter().flatten().filter(|&&m| m).count()
    }
}

/// Read-only view of the engine for presentation code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridSnapshot {
    pub grid: Rows,
    pub score: u32,
    pub won: bool,
    pub terminal: bool,
    pub phase: Phase,
    /// Effective moves since the last reset
    pub moves: u32,
    /// Increments on every reset
    pub game_id: u32,
    pub max_tile: Tile,
}

impl GridSnapshot {
    pub fn playable(&self) -> bool {
        !self.terminal
    }
}

impl Default for GridSnapshot {
    fn default() -> Self {
        Self {
            grid: [[0; GRID_SIZE]; GRID_SIZE],
            score: 0,
            won: false,
            terminal: false,
            phase: Phase::Playing,
            moves: 0,
            game_id: 0,
            max_tile: 0,
        }
    }
}
