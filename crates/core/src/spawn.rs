//! Spawn module - new tiles and game-over detection
//!
//! A spawn picks one empty cell uniformly at random and places a tile whose
//! value comes from the configured [`SpawnValue`](crate::SpawnValue). When no
//! empty cell exists the spawn reports [`NoSpace`] and the game is over: a full
//! board ends the game even if merges would still be possible.

use log::debug;

use crate::board::Board;
use crate::error::NoSpace;
use crate::tile::Tile;

impl Board {
    /// Place a new tile in a random empty cell.
    ///
    /// On a full board this returns [`NoSpace`] and the board enters game over.
    pub fn spawn_tile(&mut self) -> Result<&Tile, NoSpace> {
        let empties = self.empty_positions();
        if empties.is_empty() {
            self.finish();
            return Err(NoSpace);
        }

        let pos = empties[self.rng.next_below(empties.len())];
        let value = self.config.spawn_value.pick(self.rng.as_mut());
        let idx = self.index(pos);
        let tile = self.tiles.insert_tile(value, pos);
        self.cells[idx] = Some(tile.id());
        debug!("spawned {} at {}", value, pos);

        self.listeners.notify(|l| l.tile_spawned(tile));
        Ok(tile)
    }

    /// True once a spawn attempt has found no empty cell
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Enter game over, notifying observers the first time only
    pub(crate) fn finish(&mut self) {
        if self.game_over {
            return;
        }
        self.game_over = true;
        let score = self.current_score();
        debug!(
            "game over after {} moves, score {}, max tile {}",
            self.moves_played,
            score,
            self.max_tile()
        );
        self.listeners.notify(|l| l.game_over(score));
    }
}

#[cfg(test)]
mod tests {
    use crate::board::Board;
    use crate::config::{GameConfig, SpawnValue};
    use crate::error::NoSpace;
    use crate::rng::{ScriptedRng, SimpleRng};
    use crate::types::{Direction, Pos};

    #[test_log::test]
    fn test_spawn_picks_among_empties() {
        let mut board = Board::from_rows(
            &[[2, 0], [4, 0]],
            GameConfig::default(),
            ScriptedRng::new(vec![1]),
        )
        .unwrap();
        let tile = board.spawn_tile().unwrap();
        // Empties are (0,1) and (1,1); script index 1 picks the second.
        assert_eq!(tile.pos(), Pos::new(1, 1));
        assert_eq!(tile.value(), 2);
        assert_eq!(board.tile_count(), 3);
        board.assert_consistent();
    }

    #[test_log::test]
    fn test_spawn_on_full_board_ends_game() {
        let mut board = Board::from_rows(
            &[[2, 4], [8, 16]],
            GameConfig::default(),
            SimpleRng::new(1),
        )
        .unwrap();
        assert!(!board.is_game_over());
        assert_eq!(board.spawn_tile().map(|t| t.id()), Err(NoSpace));
        assert!(board.is_game_over());
        assert_eq!(board.current_score(), 30);
    }

    #[test]
    fn test_weighted_spawn_value() {
        // First draw picks the cell, second rolls the bonus (3 < 10).
        let config = GameConfig::default().with_spawn_value(SpawnValue::classic_weighted());
        let mut board =
            Board::from_rows(&[[0, 0], [0, 0]], config, ScriptedRng::new(vec![2, 3])).unwrap();
        let tile = board.spawn_tile().unwrap();
        assert_eq!(tile.pos(), Pos::new(1, 0));
        assert_eq!(tile.value(), 4);
    }

    #[test]
    fn test_same_seed_same_placements() {
        let run = |seed| {
            let mut board = Board::empty(GameConfig::default(), SimpleRng::new(seed)).unwrap();
            (0..10)
                .map(|_| board.spawn_tile().map(|t| t.pos()).unwrap())
                .collect::<Vec<_>>()
        };
        assert_eq!(run(2024), run(2024));
    }

    #[test]
    fn test_fill_until_no_space() {
        let mut board = Board::empty(GameConfig::default().with_size(3), SimpleRng::new(8)).unwrap();
        for _ in 0..9 {
            assert!(board.spawn_tile().is_ok());
        }
        assert!(board.is_full());
        assert!(!board.is_game_over());
        assert!(board.spawn_tile().is_err());
        assert!(board.is_game_over());
        board.assert_consistent();
    }

    #[test]
    fn test_spawn_into_recycled_slot() {
        let mut board = Board::from_rows(
            &[[2, 2], [0, 0]],
            GameConfig::default(),
            ScriptedRng::new(vec![0]),
        )
        .unwrap();
        let absorbed = board.cell_at(0, 1).unwrap().id();
        board.apply_move(Direction::Left);
        assert!(board.tile(absorbed).is_none());

        // The freed slot is reused under a new generation.
        let (id, pos) = {
            let tile = board.spawn_tile().unwrap();
            (tile.id(), tile.pos())
        };
        assert_ne!(id, absorbed);
        assert_eq!(pos, Pos::new(0, 1));
        assert_eq!(board.cell_at(0, 1).map(|t| t.id()), Some(id));
        assert!(board.tile(absorbed).is_none());
        board.assert_consistent();
    }
}
