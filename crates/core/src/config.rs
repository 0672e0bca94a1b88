//! Game configuration - the per-game rule strategies
//!
//! Every optional rule is an explicit value injected into the board at
//! construction time. Nothing here is global, so two boards with different
//! rules can coexist and each rule can be tested on its own.

use crate::error::BoardError;
use crate::rng::TileRng;
use crate::types::{
    is_tile_value, TileValue, BASE_TILE_VALUE, BONUS_TILE_VALUE, DEFAULT_BONUS_PERCENT,
    DEFAULT_GRID_SIZE, DEFAULT_INITIAL_TILES,
};

/// How [`Board::current_score`](crate::Board::current_score) is computed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScoreRule {
    /// Sum of all tile values currently on the board, recomputed on demand
    #[default]
    BoardSum,
    /// Sum of the values produced by every merge this game
    MergeTotal,
}

/// When [`Board::play`](crate::Board::play) spawns a tile after a move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpawnPolicy {
    /// After every move, including ineffective ones
    #[default]
    EveryMove,
    /// Only after a move that changed the board
    OnlyWhenChanged,
}

impl SpawnPolicy {
    pub fn should_spawn(&self, changed: bool) -> bool {
        match self {
            SpawnPolicy::EveryMove => true,
            SpawnPolicy::OnlyWhenChanged => changed,
        }
    }
}

/// Value of a newly spawned tile
///
/// This is the single decision point for spawn values; the move engine never
/// looks at it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpawnValue {
    /// Always the given value
    Always(TileValue),
    /// `high` with probability `percent`%, otherwise [`BASE_TILE_VALUE`]
    Weighted { high: TileValue, percent: u32 },
}

impl SpawnValue {
    /// The weighted variant with classic odds (4 at 10%)
    pub const fn classic_weighted() -> Self {
        SpawnValue::Weighted {
            high: BONUS_TILE_VALUE,
            percent: DEFAULT_BONUS_PERCENT,
        }
    }

    /// Draw a value for one spawn
    pub fn pick(&self, rng: &mut dyn TileRng) -> TileValue {
        match *self {
            SpawnValue::Always(value) => value,
            SpawnValue::Weighted { high, percent } => {
                if rng.chance(percent) {
                    high
                } else {
                    BASE_TILE_VALUE
                }
            }
        }
    }

    fn validate(&self) -> Result<(), BoardError> {
        match *self {
            SpawnValue::Always(value) if !is_tile_value(value) => {
                Err(BoardError::SpawnValue(value))
            }
            SpawnValue::Weighted { high, .. } if !is_tile_value(high) => {
                Err(BoardError::SpawnValue(high))
            }
            SpawnValue::Weighted { percent, .. } if percent > 100 => {
                Err(BoardError::BonusPercent(percent))
            }
            _ => Ok(()),
        }
    }
}

impl Default for SpawnValue {
    fn default() -> Self {
        SpawnValue::Always(BASE_TILE_VALUE)
    }
}

/// Complete rule set for one board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Grid is `size` x `size`
    pub size: usize,
    /// Value-2 tiles placed when the board is created
    pub initial_tiles: usize,
    pub spawn_value: SpawnValue,
    pub spawn_policy: SpawnPolicy,
    pub score_rule: ScoreRule,
}

impl GameConfig {
    pub fn with_size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    pub fn with_initial_tiles(mut self, initial_tiles: usize) -> Self {
        self.initial_tiles = initial_tiles;
        self
    }

    pub fn with_spawn_value(mut self, spawn_value: SpawnValue) -> Self {
        self.spawn_value = spawn_value;
        self
    }

    pub fn with_spawn_policy(mut self, spawn_policy: SpawnPolicy) -> Self {
        self.spawn_policy = spawn_policy;
        self
    }

    pub fn with_score_rule(mut self, score_rule: ScoreRule) -> Self {
        self.score_rule = score_rule;
        self
    }

    /// Number of cells on the grid
    pub fn cell_count(&self) -> usize {
        self.size * self.size
    }

    /// Check that the configuration describes a playable board
    pub fn validate(&self) -> Result<(), BoardError> {
        if self.size == 0 {
            return Err(BoardError::ZeroSize);
        }
        if self.initial_tiles > self.cell_count() {
            return Err(BoardError::TooManyInitialTiles {
                requested: self.initial_tiles,
                size: self.size,
            });
        }
        self.spawn_value.validate()
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_GRID_SIZE,
            initial_tiles: DEFAULT_INITIAL_TILES,
            spawn_value: SpawnValue::default(),
            spawn_policy: SpawnPolicy::default(),
            score_rule: ScoreRule::default(),
        }
    }
}
