//! A depth-limited minimax agent for the board game 'Connect 4'
//!
//! This agent searches a bounded number of plies ahead with alpha-beta
//! pruning and falls back to a pattern-based heuristic when no decided
//! outcome is reachable within the depth budget.
//!
//! # Basic Usage
//!
//! ```
//! use connect4_minimax::{Board, Engine, GameConfig};
//!
//!# use std::error::Error;
//!# fn main() -> Result<(), Box<dyn Error>> {
//! let config = GameConfig::default();
//! let board = Board::from_moves(&config, "4141517")?;
//! let mut engine = Engine::new(config);
//! let best_move = engine.best_move(&board)?;
//!
//! assert_eq!(best_move, 0);
//!# Ok(())
//!# }
//! ```

use static_assertions::*;
pub use anyhow;

pub mod board;

pub mod config;

pub mod error;

pub mod heuristic;

pub mod rules;

pub mod search;

pub mod window;


pub use board::{Board, Cell, Player};
pub use config::GameConfig;
pub use error::{ConfigError, Error};
pub use search::{get_best_move, Engine, SearchResult};

/// The width of the game board in tiles
pub const WIDTH: usize = 7;

/// The height of the game board in tiles
pub const HEIGHT: usize = 6;

/// The number of aligned tiles needed to win
pub const CONNECT: usize = 4;

/// The number of plies searched when no depth is given
pub const DEFAULT_DEPTH: usize = 4;

// a connecting run must fit on the board in at least one direction
const_assert!(CONNECT <= WIDTH || CONNECT <= HEIGHT);
const_assert!(CONNECT >= 3);
const_assert!(DEFAULT_DEPTH > 0);
