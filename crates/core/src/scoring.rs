//! Scoring module
//!
//! The default rule scores a board by the sum of its tiles, recomputed from
//! the grid on every call so it can never drift from the board state. The
//! alternative rule sums the value of every tile produced by a merge, the way
//! the classic game counts points. Both are served by the same accessor.

use crate::board::Board;
use crate::config::ScoreRule;
use crate::tile::{add_values, Tile};
use crate::types::TileValue;

impl Board {
    /// Score under the configured [`ScoreRule`]
    pub fn current_score(&self) -> TileValue {
        match self.config.score_rule {
            ScoreRule::BoardSum => self.tile_sum(),
            ScoreRule::MergeTotal => self.merge_total,
        }
    }

    /// Sum of all tile values on the board
    pub fn tile_sum(&self) -> TileValue {
        self.tiles().map(Tile::value).fold(0, add_values)
    }

    /// Sum of values produced by merges so far
    pub fn merge_total(&self) -> TileValue {
        self.merge_total
    }
}
