//! term-2048: the 2048 sliding-tile puzzle for the terminal.
//!
//! This crate provides:
//! - The grid transition engine (`engine` module): `Cell`, `Grid`, `Direction`
//! - A text/ANSI renderer for grids (`render`)
//! - Line-based command parsing (`input`)
//! - The turn-driving loop (`game`) and its settings (`config`)
//!
//! Quick start:
//! ```
//! use term_2048::engine::{Direction, Grid};
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! // Deterministic spawns with a seeded RNG
//! let mut rng = StdRng::seed_from_u64(42);
//! let mut grid = Grid::new(4, 4);
//! grid.spawn_tile(&mut rng);
//! grid.spawn_tile(&mut rng);
//!
//! if grid.apply_move(Direction::Left, false) {
//!     grid.begin_next_turn();
//!     grid.spawn_tile(&mut rng);
//! }
//! assert!(!grid.is_game_over());
//! ```
//!
//! Full loop against scripted input
//! ```
//! use term_2048::config::Config;
//! use term_2048::game::Game;
//! use std::io::Cursor;
//!
//! let config = Config { seed: Some(7), ..Config::default() };
//! let mut game = Game::from_config(&config).unwrap();
//! game.start();
//! let mut out = Vec::new();
//! let summary = game.run(Cursor::new("l\nu\nr\nd\nq\n"), &mut out).unwrap();
//! assert!(summary.turns <= 4);
//! ```
//!
pub mod config;
pub mod engine;
pub mod game;
pub mod input;
pub mod render;
