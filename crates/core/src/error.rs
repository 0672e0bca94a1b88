use thiserror::Error;

use crate::types::TileValue;

/// A spawn was requested but every cell is occupied.
///
/// This is an expected condition, not a failure: the board treats it as the
/// game-over trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no empty cell available for a new tile")]
pub struct NoSpace;

/// Invalid board configuration or construction input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("grid size must be at least 1")]
    ZeroSize,

    #[error("{requested} initial tiles do not fit on a {size}x{size} grid")]
    TooManyInitialTiles { requested: usize, size: usize },

    #[error("bonus spawn chance must be within 0..=100 percent, got {0}")]
    BonusPercent(u32),

    #[error("spawn value {0} is not a power of two >= 2")]
    SpawnValue(TileValue),

    #[error("row {row} has {actual} cells, expected {expected}")]
    RowLength {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("value {value} at ({row}, {col}) is not a power of two >= 2")]
    TileValue {
        row: usize,
        col: usize,
        value: TileValue,
    },
}
