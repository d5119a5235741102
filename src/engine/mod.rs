//! The grid transition engine: cells, the board, and slide directions.
//!
//! Nothing in here performs I/O or logging; the only source of randomness is
//! the RNG handed to [`Grid::spawn_tile`].
//!
//! ```
//! use term_2048::engine::{Direction, Grid};
//!
//! let mut grid = Grid::from_rows(&[vec![2, 2, 0, 0]]);
//! assert!(grid.apply_move(Direction::Left, false));
//! assert_eq!(grid.values(), vec![vec![4, 0, 0, 0]]);
//! ```

use std::fmt;

mod cell;
mod grid;

pub use cell::Cell;
pub use grid::Grid;

/// A direction to slide/merge tiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Every direction, in the order game-over detection tries them.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Right,
        Direction::Left,
    ];

    /// Unit `(row, col)` step taken when walking in this direction.
    #[inline]
    pub fn offsets(self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets_are_unit_steps_on_one_axis() {
        for dir in Direction::ALL {
            let (dr, dc) = dir.offsets();
            assert_eq!(dr.abs() + dc.abs(), 1, "{dir} is not a unit step");
        }
    }

    #[test]
    fn display_names() {
        assert_eq!(Direction::Up.to_string(), "up");
        assert_eq!(Direction::Right.to_string(), "right");
    }
}
