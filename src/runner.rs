//! Headless runner.
//!
//! Plays a game without any rendering or input device: directions come from a
//! fixed script or from a seeded generator, and the result is reported as one
//! JSON line. Useful for soak-testing the engine and for reproducing a game
//! from its seed.
//!
//! Configuration is layered by clap: built-in defaults, then `TILE512_SEED`,
//! `TILE512_SIZE` and `TILE512_MOVES` from the environment, then flags.

use std::cell::Cell;
use std::rc::Rc;

use anyhow::Result;
use clap::Parser;
use log::info;
use serde::Serialize;

use crate::core::{
    board_listener, Board, BoardListener, GameConfig, ScoreRule, SimpleRng, SpawnPolicy,
    SpawnValue, Tile, TileRng,
};
use crate::types::{
    Direction, Pos, TileValue, BONUS_TILE_VALUE, DEFAULT_GRID_SIZE, DEFAULT_INITIAL_TILES,
};

const DEFAULT_MOVES: u64 = 1000;

/// Play one sliding-tile game headlessly and print a JSON summary
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "tile512", version)]
pub struct RunConfig {
    /// RNG seed
    #[arg(long, env = "TILE512_SEED", default_value_t = 1)]
    pub seed: u32,

    /// Grid size
    #[arg(long, env = "TILE512_SIZE", default_value_t = DEFAULT_GRID_SIZE)]
    pub size: usize,

    /// Maximum number of turns
    #[arg(long, env = "TILE512_MOVES", default_value_t = DEFAULT_MOVES)]
    pub moves: u64,

    /// Tiles on the starting board
    #[arg(long = "initial", default_value_t = DEFAULT_INITIAL_TILES)]
    pub initial_tiles: usize,

    /// Spawn a 4 with this probability (percent) instead of always 2
    #[arg(long, value_name = "PERCENT", value_parser = clap::value_parser!(u32).range(0..=100))]
    pub four_percent: Option<u32>,

    /// Score by merge totals instead of the tile sum
    #[arg(long)]
    pub merge_score: bool,

    /// Skip the spawn after ineffective moves
    #[arg(long)]
    pub spawn_on_change: bool,

    /// Comma-separated direction script, cycled (random when absent)
    #[arg(long, value_name = "LIST", value_delimiter = ',', value_parser = parse_direction)]
    pub directions: Vec<Direction>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            seed: 1,
            size: DEFAULT_GRID_SIZE,
            moves: DEFAULT_MOVES,
            initial_tiles: DEFAULT_INITIAL_TILES,
            four_percent: None,
            merge_score: false,
            spawn_on_change: false,
            directions: Vec::new(),
        }
    }
}

impl RunConfig {
    /// Rule set for the board
    pub fn game_config(&self) -> GameConfig {
        let spawn_value = match self.four_percent {
            Some(percent) => SpawnValue::Weighted {
                high: BONUS_TILE_VALUE,
                percent,
            },
            None => SpawnValue::default(),
        };
        let spawn_policy = if self.spawn_on_change {
            SpawnPolicy::OnlyWhenChanged
        } else {
            SpawnPolicy::EveryMove
        };
        let score_rule = if self.merge_score {
            ScoreRule::MergeTotal
        } else {
            ScoreRule::BoardSum
        };

        GameConfig::default()
            .with_size(self.size)
            .with_initial_tiles(self.initial_tiles)
            .with_spawn_value(spawn_value)
            .with_spawn_policy(spawn_policy)
            .with_score_rule(score_rule)
    }
}

fn parse_direction(s: &str) -> Result<Direction, String> {
    Direction::from_str(s.trim()).ok_or_else(|| format!("invalid direction: {s:?}"))
}

/// Summary of one headless game
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunReport {
    pub seed: u32,
    pub size: usize,
    pub moves_played: u64,
    pub effective_moves: u64,
    pub score: TileValue,
    pub max_tile: TileValue,
    pub tile_count: usize,
    pub merges: u64,
    pub spawns: u64,
    pub game_over: bool,
    pub board: Vec<Vec<TileValue>>,
}

/// Counts board events as they are emitted
#[derive(Debug, Default)]
struct EventTally {
    spawns: Cell<u64>,
    slides: Cell<u64>,
    merges: Cell<u64>,
    final_score: Cell<Option<TileValue>>,
}

impl BoardListener for EventTally {
    fn tile_spawned(&self, _tile: &Tile) {
        self.spawns.set(self.spawns.get() + 1);
    }

    fn tile_moved(&self, _tile: &Tile, _from: Pos) {
        self.slides.set(self.slides.get() + 1);
    }

    fn tile_merged(&self, _survivor: &Tile, _absorbed: &Tile) {
        self.merges.set(self.merges.get() + 1);
    }

    fn game_over(&self, score: TileValue) {
        self.final_score.set(Some(score));
    }
}

/// Play one game to completion (or until the move limit)
pub fn run(config: &RunConfig) -> Result<RunReport> {
    let mut board = Board::new(config.game_config(), SimpleRng::new(config.seed))?;
    let tally = Rc::new(EventTally::default());
    board.register_listener(board_listener(&tally));

    // Separate stream so the direction choice never perturbs spawn placement.
    let mut chooser = SimpleRng::new(config.seed.wrapping_add(0x9e37_79b9));
    let mut effective_moves = 0u64;

    for turn in 0..config.moves {
        let direction = if config.directions.is_empty() {
            Direction::ALL[chooser.next_below(Direction::ALL.len())]
        } else {
            config.directions[(turn as usize) % config.directions.len()]
        };

        let outcome = board.play(direction);
        if outcome.moved.changed {
            effective_moves += 1;
        }
        if outcome.game_over {
            break;
        }
    }

    info!(
        "seed {}: {} moves, {} slides, score {}\n{}",
        config.seed,
        board.moves_played(),
        tally.slides.get(),
        board.current_score(),
        board
    );
    if let Some(score) = tally.final_score.get() {
        info!("seed {}: game over with score {}", config.seed, score);
    }

    Ok(RunReport {
        seed: config.seed,
        size: board.size(),
        moves_played: board.moves_played(),
        effective_moves,
        score: board.current_score(),
        max_tile: board.max_tile(),
        tile_count: board.tile_count(),
        merges: tally.merges.get(),
        spawns: tally.spawns.get(),
        game_over: board.is_game_over(),
        board: board.to_rows(),
    })
}
