use rand::Rng;

use super::{Cell, Direction};

/// Value added to the board by a default spawn.
pub const DEFAULT_SPAWN: u32 = 2;

/// What a single source tile does during a sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slide {
    /// Swap into the furthest reachable empty cell.
    Move { from: usize, to: usize },
    /// Double the blocking equal tile and empty the source.
    Merge { from: usize, into: usize },
}

/// A `rows x cols` board of cells stored row-major.
///
/// The grid is owned by whoever drives the turns; nothing else holds a
/// reference to it between moves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
    turn: u64,
}

impl Grid {
    /// Allocate an empty grid.
    ///
    /// Panics if either dimension is zero.
    pub fn new(rows: usize, cols: usize) -> Self {
        assert!(rows > 0 && cols > 0, "grid dimensions must be positive, got {rows}x{cols}");
        Grid { rows, cols, cells: vec![Cell::EMPTY; rows * cols], turn: 0 }
    }

    /// Build a grid from row-major tile values (0 for empty).
    ///
    /// Panics on empty or ragged input.
    pub fn from_rows(rows: &[Vec<u32>]) -> Self {
        let cols = rows.first().map_or(0, Vec::len);
        assert!(
            rows.iter().all(|r| r.len() == cols),
            "ragged rows passed to Grid::from_rows"
        );
        let mut grid = Grid::new(rows.len(), cols);
        for (cell, &v) in grid.cells.iter_mut().zip(rows.iter().flatten()) {
            *cell = Cell::with_value(v);
        }
        grid
    }

    /// Showcase board: successive powers of two starting at 2, row-major.
    ///
    /// Tiles are `u32`, so past 2^31 (the 31st cell) the sequence starts
    /// over at 2.
    pub fn sample(rows: usize, cols: usize) -> Self {
        let mut grid = Grid::new(rows, cols);
        let mut value = 1u32;
        for cell in grid.cells.iter_mut() {
            value = value.checked_mul(2).unwrap_or(2);
            *cell = Cell::with_value(value);
        }
        grid
    }

    #[inline]
    pub fn rows(&self) -> usize { self.rows }

    #[inline]
    pub fn cols(&self) -> usize { self.cols }

    /// Number of turns completed via [`Grid::begin_next_turn`].
    #[inline]
    pub fn turn(&self) -> u64 { self.turn }

    /// Borrow the cell at `(row, col)`. Panics when out of bounds.
    #[inline]
    pub fn cell(&self, row: usize, col: usize) -> &Cell {
        &self.cells[self.index(row, col)]
    }

    /// Rows of cells, top to bottom.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks(self.cols)
    }

    /// Snapshot of the tile values, one `Vec` per row.
    pub fn values(&self) -> Vec<Vec<u32>> {
        self.iter_rows()
            .map(|row| row.iter().map(Cell::value).collect())
            .collect()
    }

    pub fn count_empty(&self) -> usize {
        self.cells.iter().filter(|c| c.is_empty()).count()
    }

    /// True iff no cell is empty.
    pub fn is_full(&self) -> bool {
        !self.cells.iter().any(Cell::is_empty)
    }

    /// Total of all tile values.
    pub fn sum(&self) -> u64 {
        self.cells.iter().map(|c| u64::from(c.value())).sum()
    }

    pub fn highest_tile(&self) -> u32 {
        self.cells.iter().map(Cell::value).max().unwrap_or(0)
    }

    /// True iff the grid is full and no direction can change it.
    pub fn is_game_over(&self) -> bool {
        if !self.is_full() {
            return false;
        }
        !Direction::ALL.iter().any(|&dir| self.can_move(dir))
    }

    /// Dry run: would sliding in `direction` change anything?
    pub fn can_move(&self, direction: Direction) -> bool {
        self.scan_order(direction)
            .any(|(row, col)| self.probe(row, col, direction).is_some())
    }

    /// Slide and merge every tile toward `direction`.
    ///
    /// Returns whether the board changed (or, with `dry_run`, whether it
    /// would have). A dry run never mutates the grid.
    pub fn apply_move(&mut self, direction: Direction, dry_run: bool) -> bool {
        if dry_run {
            return self.can_move(direction);
        }
        let mut changed = false;
        for (row, col) in self.scan_order(direction) {
            let Some(slide) = self.probe(row, col, direction) else { continue };
            changed = true;
            match slide {
                Slide::Move { from, to } => self.cells.swap(from, to),
                Slide::Merge { from, into } => {
                    self.cells[into].absorb();
                    self.cells[from].clear();
                }
            }
        }
        changed
    }

    /// Reset per-turn flags on every cell and advance the turn counter.
    pub fn begin_next_turn(&mut self) {
        self.cells.iter_mut().for_each(Cell::begin_next_turn);
        self.turn += 1;
    }

    /// Spawn a [`DEFAULT_SPAWN`] tile on a uniformly chosen empty cell.
    ///
    /// Panics if the grid is full.
    pub fn spawn_tile<R: Rng + ?Sized>(&mut self, rng: &mut R) -> (usize, usize) {
        self.spawn_tile_with(rng, DEFAULT_SPAWN)
    }

    /// Spawn `value` on a uniformly chosen empty cell and return its position.
    ///
    /// Panics if the grid is full.
    pub fn spawn_tile_with<R: Rng + ?Sized>(&mut self, rng: &mut R, value: u32) -> (usize, usize) {
        let empty = self.count_empty();
        assert!(empty > 0, "spawn_tile called on a full grid");
        debug_assert!(value >= 2 && value.is_power_of_two());
        let nth = rng.gen_range(0..empty);
        let idx = self
            .cells
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_empty())
            .nth(nth)
            .map(|(i, _)| i)
            .unwrap_or_else(|| unreachable!("empty cell count changed during spawn"));
        self.cells[idx].spawn(value);
        (idx / self.cols, idx % self.cols)
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> usize {
        assert!(row < self.rows && col < self.cols, "({row},{col}) out of bounds");
        row * self.cols + col
    }

    /// Visit positions leading edge first: an axis travelled in the positive
    /// direction is scanned from its last index down.
    fn scan_order(&self, direction: Direction) -> impl Iterator<Item = (usize, usize)> {
        let (dr, dc) = direction.offsets();
        let (rows, cols) = (self.rows, self.cols);
        (0..rows)
            .map(move |i| if dr == 1 { rows - 1 - i } else { i })
            .flat_map(move |row| {
                (0..cols).map(move |j| (row, if dc == 1 { cols - 1 - j } else { j }))
            })
    }

    /// Work out where the tile at `(row, col)` goes, without touching the grid.
    fn probe(&self, row: usize, col: usize, direction: Direction) -> Option<Slide> {
        let from = self.index(row, col);
        let source = &self.cells[from];
        if source.is_empty() {
            return None;
        }
        let (dr, dc) = direction.offsets();
        let mut target = None;
        let (mut r, mut c) = (row as isize + dr, col as isize + dc);
        while r >= 0 && c >= 0 && (r as usize) < self.rows && (c as usize) < self.cols {
            let to = r as usize * self.cols + c as usize;
            let probed = &self.cells[to];
            if probed.is_empty() {
                target = Some(Slide::Move { from, to });
            } else {
                // Only the nearest blocking tile can merge, and only once.
                if probed.value() == source.value()
                    && !probed.merged_this_turn()
                    && !source.merged_this_turn()
                {
                    target = Some(Slide::Merge { from, into: to });
                }
                break;
            }
            r += dr;
            c += dc;
        }
        target
    }
}
