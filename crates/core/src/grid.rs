//! Grid module - the 4x4 tile matrix and the slide/merge primitive
//!
//! The grid is stored as a flat row-major array (`row * 4 + col`) for cache
//! locality and zero-allocation copies. Cell value `0` is empty; any other value
//! is a power of two between 2 and [`MAX_TILE`].
//!
//! All four move directions share a single line primitive, [`slide_line`].
//! A direction only decides which cells make up each line and in which order
//! they are visited ([`line_positions`]); the primitive always works toward
//! index 0 of the line it is given.

use arrayvec::ArrayVec;
use thiserror::Error;

use crate::types::{
    is_tile_value, Direction, Pos, Rows, Tile, CELL_COUNT, GRID_SIZE, MAX_TILE, WIN_TILE,
};

/// Rejected grid construction input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("cell ({row}, {col}) holds {value}, expected 0 or a power of two from 2 to 131072")]
    InvalidTile { row: usize, col: usize, value: Tile },
}

/// Equal occupied tiles below [`MAX_TILE`] combine
#[inline]
fn can_merge(a: Tile, b: Tile) -> bool {
    a == b && a != 0 && a < MAX_TILE
}

/// Result of sliding one line toward its leading end
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineOutcome {
    /// Line contents after slide + merge, leading end first
    pub cells: [Tile; GRID_SIZE],
    /// Sum of the tiles created by merges
    pub gained: u32,
    /// `true` at every slot that received a merged tile
    pub merged: [bool; GRID_SIZE],
    pub merges: u8,
}

/// Slide and merge one line toward index 0.
///
/// Non-zero values are compacted in order, then equal neighbours merge from
/// the leading end. A tile produced by a merge never merges again in the same
/// pass, so `[2, 2, 2, 2]` becomes `[4, 4, 0, 0]`. Two [`MAX_TILE`]s
/// never merge.
pub fn slide_line(line: [Tile; GRID_SIZE]) -> LineOutcome {
    let compact: ArrayVec<Tile, GRID_SIZE> = line.iter().copied().filter(|&v| v != 0).collect();

    let mut cells = [0; GRID_SIZE];
    let mut merged = [false; GRID_SIZE];
    let mut gained = 0u32;
    let mut merges = 0u8;

    let mut read = 0usize;
    let mut write = 0usize;
    while read < compact.len() {
        let value = compact[read];
        if read + 1 < compact.len() && can_merge(value, compact[read + 1]) {
            let sum = value * 2;
            cells[write] = sum;
            merged[write] = true;
            gained = gained.saturating_add(sum);
            merges += 1;
            read += 2;
        } else {
            cells[write] = value;
            read += 1;
        }
        write += 1;
    }

    LineOutcome {
        cells,
        gained,
        merged,
        merges,
    }
}

/// Cells of line `line` (0-3) for `direction`, leading end first.
///
/// Left/right lines are rows, up/down lines are columns. Down and right visit
/// their line in reverse so the leading end is always at index 0.
pub fn line_positions(direction: Direction, line: u8) -> [Pos; GRID_SIZE] {
    let mut out = [Pos::default(); GRID_SIZE];
    for (step, slot) in out.iter_mut().enumerate() {
        let along = if direction.toward_high_index() {
            (GRID_SIZE - 1 - step) as u8
        } else {
            step as u8
        };
        *slot = if direction.is_vertical() {
            Pos::new(along, line)
        } else {
            Pos::new(line, along)
        };
    }
    out
}

/// Result of sliding the whole grid in one direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlideOutcome {
    pub grid: Grid,
    pub gained: u32,
    pub merges: u8,
    /// Any cell changed value, or a merge happened
    pub moved: bool,
    /// Row-major mask of cells that received a merged tile
    pub merged: [bool; CELL_COUNT],
}

/// The game grid - 4 columns x 4 rows using flat array storage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Grid {
    /// Flat array of cells, row-major order (row * GRID_SIZE + col)
    cells: [Tile; CELL_COUNT],
}

impl Grid {
    /// Create an empty grid
    pub fn new() -> Self {
        Self {
            cells: [0; CELL_COUNT],
        }
    }

    /// Build a grid from row-major rows, validating every cell
    pub fn from_rows(rows: Rows) -> Result<Self, GridError> {
        let mut cells = [0; CELL_COUNT];
        for (row, values) in rows.iter().enumerate() {
            for (col, &value) in values.iter().enumerate() {
                if !is_tile_value(value) {
                    return Err(GridError::InvalidTile { row, col, value });
                }
                cells[row * GRID_SIZE + col] = value;
            }
        }
        Ok(Self { cells })
    }

    /// Copy out as row-major rows
    pub fn rows(&self) -> Rows {
        let mut out = [[0; GRID_SIZE]; GRID_SIZE];
        self.write_rows(&mut out);
        out
    }

    /// Write into caller-provided rows (no allocation)
    pub fn write_rows(&self, out: &mut Rows) {
        for (row, dst) in out.iter_mut().enumerate() {
            let start = row * GRID_SIZE;
            dst.copy_from_slice(&self.cells[start..start + GRID_SIZE]);
        }
    }

    /// Get cell at `pos`; `None` if out of bounds
    pub fn get(&self, pos: Pos) -> Option<Tile> {
        pos.in_bounds().then(|| self.cells[pos.index()])
    }

    /// Set cell at `pos`.
    /// Returns false if out of bounds or `value` is not a legal tile value.
    pub fn set(&mut self, pos: Pos, value: Tile) -> bool {
        if !pos.in_bounds() || !is_tile_value(value) {
            return false;
        }
        self.cells[pos.index()] = value;
        true
    }

    pub fn is_empty_at(&self, pos: Pos) -> bool {
        self.get(pos) == Some(0)
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Tile] {
        &self.cells
    }

    /// Empty every cell
    pub fn clear(&mut self) {
        self.cells = [0; CELL_COUNT];
    }

    /// Empty cell positions in row-major order
    pub fn empty_cells(&self) -> ArrayVec<Pos, CELL_COUNT> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, v)| **v == 0)
            .map(|(idx, _)| Pos::from_index(idx))
            .collect()
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|&&v| v != 0).count()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&v| v != 0)
    }

    /// Whether any occupied cell can merge with its right or lower neighbour
    pub fn has_adjacent_match(&self) -> bool {
        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                let value = self.cells[row * GRID_SIZE + col];
                if col + 1 < GRID_SIZE && can_merge(value, self.cells[row * GRID_SIZE + col + 1]) {
                    return true;
                }
                if row + 1 < GRID_SIZE && can_merge(value, self.cells[(row + 1) * GRID_SIZE + col]) {
                    return true;
                }
            }
        }
        false
    }

    /// No empty cell and no equal neighbours: no move can ever be effective
    pub fn is_terminal(&self) -> bool {
        self.is_full() && !self.has_adjacent_match()
    }

    /// Some cell holds exactly [`WIN_TILE`]
    pub fn has_win_tile(&self) -> bool {
        self.contains(WIN_TILE)
    }

    pub fn contains(&self, value: Tile) -> bool {
        self.cells.contains(&value)
    }

    pub fn max_tile(&self) -> Tile {
        self.cells.iter().copied().max().unwrap_or(0)
    }

    /// Sum of all tile values
    pub fn sum(&self) -> u64 {
        self.cells.iter().map(|&v| u64::from(v)).sum()
    }

    /// Read line `line` of `direction`, leading end first
    pub fn line(&self, direction: Direction, line: u8) -> [Tile; GRID_SIZE] {
        line_positions(direction, line).map(|pos| self.cells[pos.index()])
    }

    /// Slide every line toward `direction`. Pure: `self` is untouched and no
    /// tile is spawned.
    pub fn slide(&self, direction: Direction) -> SlideOutcome {
        let mut grid = *self;
        let mut gained = 0u32;
        let mut merges = 0u8;
        let mut changed = false;
        let mut merged = [false; CELL_COUNT];

        for line in 0..GRID_SIZE as u8 {
            let positions = line_positions(direction, line);
            let before = positions.map(|pos| self.cells[pos.index()]);
            let outcome = slide_line(before);

            for (step, pos) in positions.iter().enumerate() {
                grid.cells[pos.index()] = outcome.cells[step];
                merged[pos.index()] = outcome.merged[step];
            }

            changed |= outcome.cells != before;
            gained = gained.saturating_add(outcome.gained);
            merges += outcome.merges;
        }

        SlideOutcome {
            grid,
            gained,
            merges,
            moved: changed || merges > 0,
            merged,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(rows: Rows) -> Grid {
        Grid::from_rows(rows).unwrap()
    }

    #[test]
    fn test_slide_line_compacts_without_merge() {
        let out = slide_line([0, 2, 0, 4]);
        assert_eq!(out.cells, [2, 4, 0, 0]);
        assert_eq!(out.gained, 0);
        assert_eq!(out.merges, 0);
    }

    #[test]
    fn test_slide_line_merges_once_per_tile() {
        let out = slide_line([2, 2, 2, 2]);
        assert_eq!(out.cells, [4, 4, 0, 0]);
        assert_eq!(out.gained, 8);
        assert_eq!(out.merges, 2);
        assert_eq!(out.merged, [true, true, false, false]);
    }

    #[test]
    fn test_slide_line_merged_tile_does_not_chain() {
        assert_eq!(slide_line([2, 0, 2, 2]).cells, [4, 2, 0, 0]);
        assert_eq!(slide_line([4, 4, 8, 0]).cells, [8, 8, 0, 0]);
        assert_eq!(slide_line([2, 2, 4, 4]).cells, [4, 8, 0, 0]);
    }

    #[test]
    fn test_slide_line_leading_pair_wins() {
        let out = slide_line([2, 2, 2, 0]);
        assert_eq!(out.cells, [4, 2, 0, 0]);
        assert_eq!(out.merged, [true, false, false, false]);
    }

    #[test]
    fn test_slide_line_empty_and_full_distinct() {
        assert_eq!(slide_line([0; 4]).cells, [0; 4]);
        assert_eq!(slide_line([2, 4, 8, 16]).cells, [2, 4, 8, 16]);
    }

    #[test]
    fn test_line_positions_cover_grid() {
        for dir in Direction::ALL {
            let mut seen = [false; CELL_COUNT];
            for line in 0..4 {
                for pos in line_positions(dir, line) {
                    assert!(!seen[pos.index()], "{:?} visits {:?} twice", dir, pos);
                    seen[pos.index()] = true;
                }
            }
            assert!(seen.iter().all(|&s| s));
        }
    }

    #[test]
    fn test_line_positions_leading_end() {
        assert_eq!(line_positions(Direction::Left, 1)[0], Pos::new(1, 0));
        assert_eq!(line_positions(Direction::Right, 1)[0], Pos::new(1, 3));
        assert_eq!(line_positions(Direction::Up, 2)[0], Pos::new(0, 2));
        assert_eq!(line_positions(Direction::Down, 2)[0], Pos::new(3, 2));
    }

    #[test]
    fn test_from_rows_rejects_non_powers() {
        let mut rows = [[0; 4]; 4];
        rows[2][1] = 3;
        assert_eq!(
            Grid::from_rows(rows),
            Err(GridError::InvalidTile {
                row: 2,
                col: 1,
                value: 3
            })
        );

        rows[2][1] = 1;
        assert!(Grid::from_rows(rows).is_err());
    }

    #[test]
    fn test_from_rows_rejects_oversized_tiles() {
        let rows = [[1 << 31, 1 << 31, 0, 0], [0; 4], [0; 4], [0; 4]];
        assert_eq!(
            Grid::from_rows(rows),
            Err(GridError::InvalidTile {
                row: 0,
                col: 0,
                value: 1 << 31
            })
        );
    }

    #[test]
    fn test_largest_tiles_do_not_merge() {
        let out = slide_line([0, MAX_TILE, 0, MAX_TILE]);
        assert_eq!(out.cells, [MAX_TILE, MAX_TILE, 0, 0]);
        assert_eq!(out.merges, 0);

        let g = grid([[MAX_TILE, MAX_TILE, 0, 0], [0; 4], [0; 4], [0; 4]]);
        let left = g.slide(Direction::Left);
        assert!(!left.moved);
        assert_eq!(left.gained, 0);
        assert!(g.slide(Direction::Right).moved);
        assert_eq!(g.slide(Direction::Right).grid.max_tile(), MAX_TILE);
    }

    #[test]
    fn test_full_grid_of_largest_pairs_is_terminal() {
        let mut rows = [[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]];
        rows[0][0] = MAX_TILE;
        rows[0][1] = MAX_TILE;
        let g = grid(rows);
        assert!(!g.has_adjacent_match());
        assert!(g.is_terminal());
    }

    #[test]
    fn test_line_reads_leading_end_first() {
        let g = grid([[2, 4, 8, 16], [0; 4], [0; 4], [32, 0, 0, 0]]);
        assert_eq!(g.line(Direction::Left, 0), [2, 4, 8, 16]);
        assert_eq!(g.line(Direction::Right, 0), [16, 8, 4, 2]);
        assert_eq!(g.line(Direction::Up, 0), [2, 0, 0, 32]);
        assert_eq!(g.line(Direction::Down, 0), [32, 0, 0, 2]);
        assert_eq!(slide_line(g.line(Direction::Down, 0)).cells, [32, 2, 0, 0]);
    }

    #[test]
    fn test_set_rejects_out_of_bounds_and_bad_values() {
        let mut g = Grid::new();
        assert!(g.set(Pos::new(0, 0), 2));
        assert!(!g.set(Pos::new(4, 0), 2));
        assert!(!g.set(Pos::new(0, 1), 5));
        assert_eq!(g.get(Pos::new(0, 1)), Some(0));
        assert_eq!(g.get(Pos::new(0, 4)), None);
    }

    #[test]
    fn test_slide_right_mirrors_left() {
        let g = grid([[2, 2, 2, 0], [0; 4], [0; 4], [0; 4]]);
        let out = g.slide(Direction::Right);
        assert_eq!(out.grid.rows()[0], [0, 0, 2, 4]);
        assert_eq!(out.gained, 4);
        assert!(out.merged[3]);
        assert!(!out.merged[2]);
    }

    #[test]
    fn test_slide_columns() {
        let g = grid([[2, 0, 0, 0], [2, 0, 0, 0], [4, 0, 0, 0], [0, 0, 0, 0]]);

        let up = g.slide(Direction::Up).grid.rows();
        assert_eq!([up[0][0], up[1][0], up[2][0], up[3][0]], [4, 4, 0, 0]);

        let down = g.slide(Direction::Down).grid.rows();
        assert_eq!([down[0][0], down[1][0], down[2][0], down[3][0]], [0, 0, 4, 4]);
    }

    #[test]
    fn test_slide_blocked_is_not_moved() {
        let g = grid([[2, 4, 0, 0], [8, 0, 0, 0], [0; 4], [0; 4]]);
        let out = g.slide(Direction::Left);
        assert!(!out.moved);
        assert_eq!(out.grid, g);
        assert_eq!(out.gained, 0);
    }

    #[test]
    fn test_terminal_checkerboard() {
        let g = grid([[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]]);
        assert!(g.is_full());
        assert!(g.is_terminal());
        for dir in Direction::ALL {
            assert!(!g.slide(dir).moved);
        }
    }

    #[test]
    fn test_empty_cells_row_major() {
        let g = grid([[2, 0, 2, 2], [2; 4], [2; 4], [0, 2, 2, 2]]);
        let empty = g.empty_cells();
        assert_eq!(empty.as_slice(), &[Pos::new(0, 1), Pos::new(3, 0)]);
        assert_eq!(g.occupied_count(), 14);
    }

    #[test]
    fn test_win_tile_and_max() {
        let mut g = Grid::new();
        assert!(!g.has_win_tile());
        assert_eq!(g.max_tile(), 0);
        g.set(Pos::new(2, 3), 2048);
        assert!(g.has_win_tile());
        assert_eq!(g.max_tile(), 2048);
        assert_eq!(g.sum(), 2048);
    }
}
