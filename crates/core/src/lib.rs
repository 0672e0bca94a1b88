//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the rules of the sliding-tile merging game. It has
//! **no dependencies** on rendering, input devices, persistence or networking.
//! Those collaborators only observe the events the board emits.
//!
//! - **Deterministic**: the only randomness comes from an injected [`TileRng`]
//! - **Size-agnostic**: any N x N grid, 4x4 by default
//! - **Observable**: synchronous, ordered notifications to weakly held listeners
//!
//! # Module Structure
//!
//! - [`board`]: grid storage, construction and read-only inspection
//! - [`moves`]: the move engine (sliding, merging, cascading)
//! - [`spawn`]: random tile placement and game-over detection
//! - [`scoring`]: score rules behind one accessor
//! - [`turn`]: move + spawn + game-over as one turn
//! - [`tile`]: tiles and the arena that owns them
//! - [`listener`]: board and tile observer traits
//! - [`config`]: per-game rule strategies
//! - [`rng`]: seeded and scripted random sources
//! - [`snapshot`]: plain-data board copies for renderers
//!
//! # Game Rules
//!
//! - **Processing order**: within a line, the tile nearest the destination edge moves first
//! - **Cascading merge**: a tile that absorbs a neighbour keeps advancing and may absorb again
//! - **Ineffective moves**: always legal, reported as `changed == false`
//! - **Game over**: exactly when a spawn finds no empty cell
//! - **Score**: sum of tile values (default) or total of merge results
//!
//! # Example
//!
//! ```
//! use tile512_core::{Board, GameConfig, SimpleRng};
//! use tile512_core::types::Direction;
//!
//! // Create a board with two random value-2 tiles
//! let mut board = Board::new(GameConfig::default(), SimpleRng::new(12345)).unwrap();
//! assert_eq!(board.tile_count(), 2);
//!
//! // Play a turn: slide, then spawn
//! let turn = board.play(Direction::Left);
//! assert!(!turn.game_over);
//!
//! // Inspect the result
//! assert!(board.current_score() >= 6);
//! for row in 0..board.size() {
//!     for col in 0..board.size() {
//!         let _ = board.value_at(row, col);
//!     }
//! }
//! ```

pub mod board;
pub mod config;
pub mod error;
pub mod listener;
pub mod moves;
pub mod rng;
pub mod scoring;
pub mod snapshot;
pub mod spawn;
pub mod tile;
pub mod turn;

pub use tile512_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, Cell};
pub use config::{GameConfig, ScoreRule, SpawnPolicy, SpawnValue};
pub use error::{BoardError, NoSpace};
pub use listener::{board_listener, tile_listener, BoardListener, Listeners, TileListener};
pub use moves::MoveResult;
pub use rng::{ScriptedRng, SimpleRng, TileRng};
pub use snapshot::BoardSnapshot;
pub use tile::{Tile, TileArena, TileId};
pub use turn::TurnOutcome;
