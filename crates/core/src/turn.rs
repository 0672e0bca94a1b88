//! Turn orchestration - move, spawn, game-over check
//!
//! One turn runs the whole controller sequence atomically:
//!
//! 1. [`Board::apply_move`] in the requested direction
//! 2. [`Board::spawn_tile`] if the [`SpawnPolicy`](crate::SpawnPolicy) allows it
//! 3. game over is re-evaluated
//!
//! When the policy skips the spawn on a full board, the turn still ends the
//! game: a spawn attempt there would have found no room.

use log::debug;

use crate::board::Board;
use crate::moves::MoveResult;
use crate::tile::TileId;
use crate::types::Direction;

/// Result of one [`Board::play`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TurnOutcome {
    pub moved: MoveResult,
    /// Tile placed after the move, if any
    pub spawned: Option<TileId>,
    pub game_over: bool,
}

impl Board {
    /// Play one full turn. A finished game ignores further turns.
    pub fn play(&mut self, direction: Direction) -> TurnOutcome {
        if self.game_over {
            debug!("turn {} ignored: game is over", direction);
            return TurnOutcome {
                game_over: true,
                ..TurnOutcome::default()
            };
        }

        let moved = self.apply_move(direction);
        let spawned = if self.config.spawn_policy.should_spawn(moved.changed) {
            self.spawn_tile().ok().map(|tile| tile.id())
        } else {
            if self.is_full() {
                self.finish();
            }
            None
        };

        TurnOutcome {
            moved,
            spawned,
            game_over: self.game_over,
        }
    }
}
