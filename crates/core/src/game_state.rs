//! Game state module - the grid engine
//!
//! [`GameState`] owns the grid, the score, the sticky won/terminal flags and
//! the tile spawner for one session. Every mutation goes through `reset` or
//! `apply_move`; callers read state back through accessors, snapshots, and
//! the [`MoveResult`] each move returns.

use arrayvec::ArrayVec;

use crate::grid::{Grid, GridError};
use crate::rng::{RandomSpawner, TileSpawner};
use crate::snapshot::{GridSnapshot, MoveResult};
use crate::types::*;

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState<S = RandomSpawner> {
    grid: Grid,
    score: u32,
    won: bool,
    terminal: bool,
    /// Effective moves since the last reset
    moves: u32,
    /// Monotonic game id (increments on reset).
    game_id: u32,
    last_result: Option<MoveResult>,
    spawner: S,
}

impl GameState<RandomSpawner> {
    /// Create a new game with the given RNG seed, ready to play
    pub fn new(seed: u64) -> Self {
        Self::with_spawner(RandomSpawner::new(seed))
    }

    pub fn seed(&self) -> u64 {
        self.spawner.seed()
    }
}

impl<S: TileSpawner> GameState<S> {
    /// Create a new game drawing tiles from `spawner`, ready to play
    pub fn with_spawner(spawner: S) -> Self {
        let mut state = Self {
            grid: Grid::new(),
            score: 0,
            won: false,
            terminal: false,
            moves: 0,
            game_id: 0,
            last_result: None,
            spawner,
        };
        state.reset();
        state
    }

    /// Adopt an existing position without spawning.
    ///
    /// Won/terminal flags are derived from `grid`.
    pub fn from_grid(grid: Grid, score: u32, spawner: S) -> Self {
        Self {
            won: grid.has_win_tile(),
            terminal: grid.is_terminal(),
            grid,
            score,
            moves: 0,
            game_id: 0,
            last_result: None,
            spawner,
        }
    }

    /// Same as [`from_grid`](Self::from_grid), validating raw rows first
    pub fn from_rows(rows: Rows, score: u32, spawner: S) -> Result<Self, GridError> {
        Ok(Self::from_grid(Grid::from_rows(rows)?, score, spawner))
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Sticky: stays true for the rest of the session once a 2048 appears
    pub fn won(&self) -> bool {
        self.won
    }

    pub fn terminal(&self) -> bool {
        self.terminal
    }

    pub fn phase(&self) -> Phase {
        Phase::from_flags(self.won, self.terminal)
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn game_id(&self) -> u32 {
        self.game_id
    }

    /// Result of the most recent `apply_move` since the last reset
    pub fn last_result(&self) -> Option<&MoveResult> {
        self.last_result.as_ref()
    }

    pub fn spawner(&self) -> &S {
        &self.spawner
    }

    pub fn spawner_mut(&mut self) -> &mut S {
        &mut self.spawner
    }

    pub fn snapshot_into(&self, out: &mut GridSnapshot) {
        self.grid.write_rows(&mut out.grid);
        out.score = self.score;
        out.won = self.won;
        out.terminal = self.terminal;
        out.phase = self.phase();
        out.moves = self.moves;
        out.game_id = self.game_id;
        out.max_tile = self.grid.max_tile();
    }

    pub fn snapshot(&self) -> GridSnapshot {
        let mut s = GridSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Clear the grid and score, then seed the opening tiles
    pub fn reset(&mut self) {
        self.grid.clear();
        self.score = 0;
        self.won = false;
        self.terminal = false;
        self.moves = 0;
        self.last_result = None;
        self.game_id = self.game_id.wrapping_add(1);

        for _ in 0..INITIAL_TILES {
            self.spawn_tile();
        }

        log::debug!(
            "game {} reset with {} tiles",
            self.game_id,
            self.grid.occupied_count()
        );
    }

    /// Place one tile through the spawn policy
    fn spawn_tile(&mut self) -> Option<SpawnedTile> {
        let empty = self.grid.empty_cells();
        if empty.is_empty() {
            return None;
        }

        let tile = self.spawner.choose(&empty)?;
        let legal_value = tile.value == SPAWN_LOW_TILE || tile.value == SPAWN_HIGH_TILE;
        if !legal_value || !self.grid.is_empty_at(tile.pos) {
            log::warn!(
                "spawner produced {} at ({}, {}); ignored",
                tile.value,
                tile.pos.row,
                tile.pos.col
            );
            return None;
        }

        self.grid.set(tile.pos, tile.value);
        Some(tile)
    }

    /// Slide all tiles toward `direction`.
    ///
    /// An ineffective move (nothing slides or merges) and any move after the
    /// game is terminal leave the state untouched and spawn nothing.
    pub fn apply_move(&mut self, direction: Direction) -> MoveResult {
        if self.terminal {
            let result = MoveResult::unchanged(direction, self.grid.rows(), self.score);
            self.last_result = Some(result);
            return result;
        }

        let outcome = self.grid.slide(direction);
        if !outcome.moved {
            log::trace!("move {} had no effect", direction.as_str());
            let result = MoveResult::unchanged(direction, self.grid.rows(), self.score);
            self.last_result = Some(result);
            return result;
        }

        self.grid = outcome.grid;
        self.score = self.score.saturating_add(outcome.gained);
        self.moves += 1;

        let spawned = self.spawn_tile();

        let newly_won = !self.won && self.grid.has_win_tile();
        if newly_won {
            self.won = true;
            log::info!(
                "game {} reached {} after {} moves",
                self.game_id,
                WIN_TILE,
                self.moves
            );
        }

        let newly_terminal = self.grid.is_terminal();
        if newly_terminal {
            self.terminal = true;
            log::info!(
                "game {} over: score {} after {} moves",
                self.game_id,
                self.score,
                self.moves
            );
        }

        let mut merged = [[false; GRID_SIZE]; GRID_SIZE];
        for (idx, &m) in outcome.merged.iter().enumerate() {
            merged[idx / GRID_SIZE][idx % GRID_SIZE] = m;
        }

        let result = MoveResult {
            direction,
            grid: self.grid.rows(),
            score: self.score,
            score_delta: outcome.gained,
            moved: true,
            won: newly_won,
            terminal: newly_terminal,
            spawned,
            merged,
        };
        self.last_result = Some(result);
        result
    }

    /// Apply a game action. Returns whether the state changed.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Move(direction) => self.apply_move(direction).moved,
            GameAction::NewGame => {
                self.reset();
                true
            }
        }
    }

    /// Check whether a move in `direction` would be effective
    pub fn can_move(&self, direction: Direction) -> bool {
        !self.terminal && self.grid.slide(direction).moved
    }

    /// Directions that would currently be effective
    pub fn available_moves(&self) -> ArrayVec<Direction, 4> {
        Direction::ALL
            .into_iter()
            .filter(|&dir| self.can_move(dir))
            .collect()
    }
}

impl Default for GameState<RandomSpawner> {
    fn default() -> Self {
        Self::new(1)
    }
}
