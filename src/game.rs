//! The turn-driving loop: display, read a command, apply it, spawn.
//!
//! [`Game`] is the single owner of the [`Grid`]; every mutation of the board
//! happens through it between two reads of player input.

use std::io::{self, BufRead, Write};
use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, warn};

use crate::config::{Config, ConfigError};
use crate::engine::{Direction, Grid};
use crate::input::{parse_command, Command};
use crate::render::Renderer;

#[derive(thiserror::Error, Debug)]
pub enum GameError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Result of feeding one direction to [`Game::step`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The board changed and the turn advanced.
    Moved,
    /// Nothing could move that way; the turn did not advance.
    Rejected,
    /// No move is possible at all.
    GameOver,
}

/// How a finished session went.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub turns: u64,
    pub highest_tile: u32,
    pub game_over: bool,
    pub elapsed: Duration,
}

pub struct Game<R = StdRng> {
    grid: Grid,
    rng: R,
    spawn_value: u32,
    renderer: Renderer,
    started: Instant,
}

impl Game<StdRng> {
    /// Build a game from validated settings, seeding the RNG from
    /// `config.seed` or from OS entropy.
    pub fn from_config(config: &Config) -> Result<Self, GameError> {
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Ok(Game::new(config, rng))
    }
}

impl<R: Rng> Game<R> {
    /// Panics if `config` has zero dimensions; call [`Config::validate`] first.
    pub fn new(config: &Config, rng: R) -> Self {
        Game {
            grid: Grid::new(config.rows, config.cols),
            rng,
            spawn_value: config.spawn_value,
            renderer: config.renderer(),
            started: Instant::now(),
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Place the opening tile.
    pub fn start(&mut self) {
        self.spawn();
    }

    /// Spawn a tile unless the board is already full.
    fn spawn(&mut self) {
        if self.grid.is_full() {
            debug!(turn = self.grid.turn(), "board full, skipping spawn");
            return;
        }
        let (row, col) = self.grid.spawn_tile_with(&mut self.rng, self.spawn_value);
        debug!(row, col, value = self.spawn_value, "spawned tile");
    }

    /// Apply one player move. On success the per-turn flags roll over; the
    /// caller spawns before the next prompt.
    pub fn step(&mut self, direction: Direction) -> Outcome {
        if self.grid.is_game_over() {
            return Outcome::GameOver;
        }
        if !self.grid.apply_move(direction, false) {
            debug!(%direction, "move rejected");
            return Outcome::Rejected;
        }
        self.grid.begin_next_turn();
        debug!(%direction, turn = self.grid.turn(), "move accepted");
        Outcome::Moved
    }

    /// Play until the game ends or the input asks to quit (or runs dry).
    pub fn run<B: BufRead, W: Write>(&mut self, mut input: B, mut out: W) -> Result<Summary, GameError> {
        info!(rows = self.grid.rows(), cols = self.grid.cols(), "game started");
        let mut game_over = false;
        loop {
            if self.grid.is_game_over() {
                game_over = true;
                break;
            }
            self.spawn();
            write!(out, "{}", self.renderer.render_turn(&self.grid))?;
            if self.grid.is_game_over() {
                game_over = true;
                break;
            }
            if !self.play_turn(&mut input, &mut out)? {
                info!(turn = self.grid.turn(), "player quit");
                break;
            }
            write!(out, "{}", self.renderer.render_turn(&self.grid))?;
        }

        let summary = self.summary(game_over);
        if game_over {
            writeln!(
                out,
                "Game over after {} turns. Highest tile: {}",
                summary.turns, summary.highest_tile
            )?;
        } else {
            writeln!(
                out,
                "Quit after {} turns. Highest tile: {}",
                summary.turns, summary.highest_tile
            )?;
        }
        out.flush()?;
        info!(turns = summary.turns, highest = summary.highest_tile, game_over, "game finished");
        Ok(summary)
    }

    pub fn summary(&self, game_over: bool) -> Summary {
        Summary {
            turns: self.grid.turn(),
            highest_tile: self.grid.highest_tile(),
            game_over,
            elapsed: self.started.elapsed(),
        }
    }

    /// Prompt until a move changes the board. Returns `false` on quit or EOF.
    fn play_turn<B: BufRead, W: Write>(&mut self, input: &mut B, out: &mut W) -> Result<bool, GameError> {
        loop {
            write!(out, "Your move: ")?;
            out.flush()?;
            let mut buf = Vec::new();
            if input.read_until(b'\n', &mut buf)? == 0 {
                writeln!(out)?;
                return Ok(false);
            }
            let line = String::from_utf8_lossy(&buf);
            let direction = match parse_command(&line) {
                Ok(Command::Move(direction)) => direction,
                Ok(Command::Quit) => return Ok(false),
                Err(err) => {
                    warn!(%err, "bad input");
                    writeln!(out, "Invalid move: {:?}", line.trim())?;
                    continue;
                }
            };
            match self.step(direction) {
                Outcome::Moved => return Ok(true),
                Outcome::Rejected => writeln!(out, "Cannot move that way")?,
                Outcome::GameOver => return Ok(true),
            }
        }
    }
}

/// Show the showcase board and wait for Enter.
pub fn show_sample<B: BufRead, W: Write>(
    config: &Config,
    mut input: B,
    mut out: W,
) -> Result<(), GameError> {
    config.validate()?;
    let grid = Grid::sample(config.rows, config.cols);
    write!(out, "{}", config.renderer().render_turn(&grid))?;
    write!(out, "Press enter to continue...")?;
    out.flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn seeded(rows: usize, cols: usize) -> Game {
        let config = Config { rows, cols, seed: Some(5), ..Config::default() };
        Game::from_config(&config).unwrap()
    }

    #[test]
    fn start_places_one_tile() {
        let mut game = seeded(4, 4);
        game.start();
        assert_eq!(game.grid().count_empty(), 15);
        assert_eq!(game.grid().sum(), 2);
    }

    #[test]
    fn rejected_move_does_not_advance_turn() {
        let config = Config::default();
        let mut game = Game::new(&config, StdRng::seed_from_u64(0));
        game.grid = Grid::from_rows(&[vec![2, 4, 0, 0]]);
        assert_eq!(game.step(Direction::Left), Outcome::Rejected);
        assert_eq!(game.grid().turn(), 0);
        assert_eq!(game.step(Direction::Right), Outcome::Moved);
        assert_eq!(game.grid().turn(), 1);
        assert_eq!(game.grid().values(), vec![vec![0, 0, 2, 4]]);
    }

    #[test]
    fn step_reports_game_over() {
        let mut game = seeded(2, 2);
        game.grid = Grid::from_rows(&[vec![2, 4], vec![4, 2]]);
        assert_eq!(game.step(Direction::Up), Outcome::GameOver);
    }

    #[test]
    fn quit_ends_session() {
        let mut game = seeded(4, 4);
        game.start();
        let mut out = Vec::new();
        let summary = game.run(Cursor::new("q\n"), &mut out).unwrap();
        assert!(!summary.game_over);
        assert_eq!(summary.turns, 0);
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("Turn 0:\n"));
        assert!(text.contains("Quit after 0 turns"));
    }

    #[test]
    fn bad_input_is_reported_and_reprompted() {
        let mut game = seeded(4, 4);
        game.start();
        let mut out = Vec::new();
        game.run(Cursor::new("x\n"), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Invalid move: \"x\""));
        assert_eq!(text.matches("Your move: ").count(), 2);
    }

    #[test]
    fn non_utf8_line_is_an_invalid_move() {
        let mut game = seeded(4, 4);
        game.start();
        let mut out = Vec::new();
        let summary = game.run(Cursor::new(&b"\xff\n q\n"[..]), &mut out).unwrap();
        assert!(!summary.game_over);
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Invalid move: \"\u{fffd}\""));
        assert_eq!(text.matches("Your move: ").count(), 2);
        assert!(text.contains("Quit after 0 turns"));
    }

    #[test]
    fn one_by_one_board_is_over_immediately() {
        let mut game = seeded(1, 1);
        game.start();
        let mut out = Vec::new();
        let summary = game.run(Cursor::new(""), &mut out).unwrap();
        assert!(summary.game_over);
        assert_eq!(summary.highest_tile, 2);
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Game over after 0 turns. Highest tile: 2"));
        assert!(!text.contains("Your move"));
    }

    #[test]
    fn sample_waits_for_enter() {
        let mut out = Vec::new();
        show_sample(&Config::default(), Cursor::new("\n"), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("|65536"));
        assert!(text.ends_with("Press enter to continue..."));
    }
}
