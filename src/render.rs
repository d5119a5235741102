//! Text rendering of a [`Grid`] for the terminal.

use std::fmt;

use crate::engine::{Cell, Grid};

/// Rendering options.
///
/// - `debug`: widen every column by one marker (`+` on cells merged last turn).
/// - `color`: wrap tile values in ANSI SGR escapes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Renderer {
    pub debug: bool,
    pub color: bool,
}

impl Renderer {
    pub fn new(debug: bool, color: bool) -> Self {
        Renderer { debug, color }
    }

    /// Render the whole grid as a bordered table.
    pub fn render(&self, grid: &Grid) -> String {
        let mut out = String::new();
        self.write_grid(&mut out, grid)
            .expect("writing to a String cannot fail");
        out
    }

    /// Render the turn headline followed by the grid and a blank line.
    pub fn render_turn(&self, grid: &Grid) -> String {
        format!("Turn {}:\n{}\n", grid.turn(), self.render(grid))
    }

    fn write_grid<W: fmt::Write>(&self, out: &mut W, grid: &Grid) -> fmt::Result {
        for row in grid.iter_rows() {
            self.write_divider(out, grid.cols())?;
            for cell in row {
                out.write_char('|')?;
                if self.color {
                    write_colored(out, cell)?;
                } else {
                    write_plain(out, cell)?;
                }
                if self.debug {
                    out.write_char(if cell.merged_last_turn() { '+' } else { ' ' })?;
                }
            }
            out.write_str("|\n")?;
        }
        self.write_divider(out, grid.cols())
    }

    fn write_divider<W: fmt::Write>(&self, out: &mut W, cols: usize) -> fmt::Result {
        let segment = if self.debug { "+-----" } else { "+----" };
        for _ in 0..cols {
            out.write_str(segment)?;
        }
        out.write_str("+\n")
    }
}

fn write_plain<W: fmt::Write>(out: &mut W, cell: &Cell) -> fmt::Result {
    let v = cell.value();
    if cell.is_empty() {
        out.write_str("    ")
    } else if cell.just_spawned() {
        write!(out, " <{v}>")
    } else if v > 999 {
        write!(out, "{v:>4}")
    } else {
        write!(out, "{v:>3} ")
    }
}

fn write_colored<W: fmt::Write>(out: &mut W, cell: &Cell) -> fmt::Result {
    if cell.is_empty() {
        return out.write_str("    ");
    }
    let v = cell.value();
    let (lpad, rpad) = match v {
        0..=9 => (3, 1),
        10..=99 => (2, 1),
        100..=999 => (1, 1),
        1000..=9999 => (1, 0),
        _ => (0, 0),
    };
    write!(
        out,
        "\x1b[{}{:lpad$}{v}{:rpad$}\x1b[m",
        sgr_for(v),
        "",
        "",
    )
}

/// SGR parameters (including the trailing `m`) for a tile value.
fn sgr_for(value: u32) -> &'static str {
    match value {
        2 | 4 => "1;30;47m",
        8 | 16 => "1;34;47m",
        32 | 64 => "1;41m",
        128..=65536 if value.is_power_of_two() => "1;43m",
        _ => "m",
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Renderer::default().write_grid(f, self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Direction;

    #[test]
    fn plain_table_layout() {
        let g = Grid::from_rows(&[vec![0, 2], vec![128, 2048]]);
        let expected = "\
+----+----+
|    |  2 |
+----+----+
|128 |2048|
+----+----+
";
        assert_eq!(g.to_string(), expected);
    }

    #[test]
    fn spawned_tile_is_bracketed() {
        let mut g = Grid::new(1, 1);
        let mut rng = rand::rngs::mock::StepRng::new(0, 1);
        g.spawn_tile(&mut rng);
        assert_eq!(Renderer::default().render(&g), "+----+\n| <2>|\n+----+\n");
    }

    #[test]
    fn debug_marks_last_turn_merges() {
        let mut g = Grid::from_rows(&[vec![2, 2]]);
        g.apply_move(Direction::Left, false);
        g.begin_next_turn();
        let out = Renderer::new(true, false).render(&g);
        assert_eq!(out, "+-----+-----+\n|  4 +|     |\n+-----+-----+\n");
    }

    #[test]
    fn colored_cells_are_padded_and_escaped() {
        let g = Grid::from_rows(&[vec![2, 64, 1024]]);
        let out = Renderer::new(false, true).render(&g);
        assert!(out.contains("\x1b[1;30;47m   2 \x1b[m"));
        assert!(out.contains("\x1b[1;41m  64 \x1b[m"));
        assert!(out.contains("\x1b[1;43m 1024\x1b[m"));
    }

    #[test]
    fn turn_headline() {
        let g = Grid::new(1, 1);
        assert_eq!(Renderer::default().render_turn(&g), "Turn 0:\n+----+\n|    |\n+----+\n\n");
    }
}
