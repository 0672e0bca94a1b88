//! Move engine - sliding, merging and cascading
//!
//! A move splits the grid into independent lines (rows for left/right,
//! columns for up/down). Within a line, tiles are visited starting from the
//! one nearest the destination edge. Each visited tile advances one cell at a
//! time: into empty cells, and through any tile of equal value, which it
//! absorbs before carrying on. A tile that has grown may therefore absorb the
//! next obstacle too (cascading merge). It stops at a tile of different value
//! or at the edge.
//!
//! The visiting order is what makes `2 4 4 4` slide right into `_ 2 4 8`
//! rather than `_ 2 8 4`.

use log::{debug, trace};

use crate::board::Board;
use crate::tile::{add_values, TileId};
use crate::types::{Direction, Pos, TileValue};

/// Result of one [`Board::apply_move`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MoveResult {
    /// Some tile changed position or value
    pub changed: bool,
    /// Number of absorptions performed
    pub merges: u32,
    /// Sum of the values produced by merges
    pub gained: TileValue,
}

impl MoveResult {
    fn absorb(&mut self, produced: TileValue) {
        self.changed = true;
        self.merges += 1;
        self.gained = add_values(self.gained, produced);
    }
}

impl Board {
    /// Slide every line toward `direction`'s edge.
    ///
    /// Ineffective moves are legal and return `changed == false`. Nothing is
    /// spawned here; see [`Board::play`] for the full turn.
    pub fn apply_move(&mut self, direction: Direction) -> MoveResult {
        let mut result = MoveResult::default();
        for line in 0..self.size {
            self.slide_line(direction, line, &mut result);
        }

        self.moves_played += 1;
        self.merge_total = add_values(self.merge_total, result.gained);
        debug!(
            "move {} #{}: changed={} merges={} gained={}",
            direction, self.moves_played, result.changed, result.merges, result.gained
        );
        result
    }

    fn slide_line(&mut self, direction: Direction, line: usize, result: &mut MoveResult) {
        // Step 0 is on the destination edge and can never advance.
        for step in 1..self.size {
            let start = direction.line_cell(self.size, line, step);
            // Tiles only ever move toward lower steps, so this cell still holds
            // whatever it held before the line was touched.
            if self.cells[self.index(start)].is_some() {
                self.advance(direction, line, step, result);
            }
        }
    }

    /// Advance the tile at `step` until it is blocked
    fn advance(
        &mut self,
        direction: Direction,
        line: usize,
        mut step: usize,
        result: &mut MoveResult,
    ) {
        let mut segment_start = direction.line_cell(self.size, line, step);
        let Some(id) = self.cells[self.index(segment_start)] else {
            return;
        };

        while step > 0 {
            let here = direction.line_cell(self.size, line, step);
            let next = direction.line_cell(self.size, line, step - 1);
            let next_idx = self.index(next);

            match self.cells[next_idx] {
                None => {
                    self.relocate(id, here, next);
                    result.changed = true;
                }
                Some(other) => {
                    let mover = self.value_of(id);
                    if self.value_of(other) != mover {
                        break;
                    }
                    if here != segment_start {
                        self.emit_moved(id, segment_start);
                    }
                    let produced = self.absorb(id, other, here, next);
                    result.absorb(produced);
                    segment_start = next;
                }
            }
            step -= 1;
        }

        let end = direction.line_cell(self.size, line, step);
        if end != segment_start {
            self.emit_moved(id, segment_start);
        }
    }

    fn value_of(&self, id: TileId) -> TileValue {
        self.tiles.get(id).map_or(0, |t| t.value())
    }

    /// Move a tile one cell into an empty neighbour
    fn relocate(&mut self, id: TileId, from: Pos, to: Pos) {
        let from_idx = self.index(from);
        let to_idx = self.index(to);
        self.cells[from_idx] = None;
        self.cells[to_idx] = Some(id);
        if let Some(tile) = self.tiles.get_mut(id) {
            tile.set_pos(to);
        }
    }

    /// `survivor` (at `from`) steps into `to`, absorbing the tile there.
    ///
    /// Returns the survivor's new value.
    fn absorb(&mut self, survivor: TileId, absorbed: TileId, from: Pos, to: Pos) -> TileValue {
        let Some(gone) = self.tiles.remove(absorbed) else {
            return 0;
        };
        let from_idx = self.index(from);
        let to_idx = self.index(to);
        self.cells[from_idx] = None;
        self.cells[to_idx] = Some(survivor);

        if let Some(tile) = self.tiles.get_mut(survivor) {
            tile.set_pos(to);
            tile.absorb(gone.value());
            trace!("merge {} <- {} at {}", tile, gone.value(), to);
        }

        let Some(tile) = self.tiles.get(survivor) else {
            return 0;
        };
        tile.notify_merged(gone.value());
        gone.notify_removed();
        self.listeners.notify(|l| l.tile_merged(tile, &gone));
        tile.value()
    }

    fn emit_moved(&self, id: TileId, from: Pos) {
        if let Some(tile) = self.tiles.get(id) {
            tile.notify_moved(from);
            self.listeners.notify(|l| l.tile_moved(tile, from));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::rng::SimpleRng;

    fn board(rows: &[&[TileValue]]) -> Board {
        Board::from_rows(rows, GameConfig::default(), SimpleRng::new(1)).unwrap()
    }

    fn row_board(row: &[TileValue]) -> Board {
        // Pad a single row into a square board of matching size.
        let n = row.len();
        let mut rows = vec![vec![0; n]; n];
        rows[0] = row.to_vec();
        Board::from_rows(&rows, GameConfig::default(), SimpleRng::new(1)).unwrap()
    }

    fn first_row(board: &Board) -> Vec<TileValue> {
        board.to_rows()[0].clone()
    }

    #[test]
    fn test_slide_into_empty() {
        let mut b = row_board(&[2, 0, 0, 0]);
        let r = b.apply_move(Direction::Right);
        assert!(r.changed);
        assert_eq!(r.merges, 0);
        assert_eq!(first_row(&b), vec![0, 0, 0, 2]);
        b.assert_consistent();
    }

    #[test]
    fn test_ordering_rightmost_first() {
        let mut b = row_board(&[2, 4, 4, 4]);
        let r = b.apply_move(Direction::Right);
        assert_eq!(first_row(&b), vec![0, 2, 4, 8]);
        assert_eq!(r.merges, 1);
        assert_eq!(r.gained, 8);
        b.assert_consistent();
    }

    #[test]
    fn test_ordering_leftmost_first() {
        let mut b = row_board(&[4, 4, 4, 2]);
        b.apply_move(Direction::Left);
        assert_eq!(first_row(&b), vec![8, 4, 2, 0]);
    }

    #[test]
    fn test_cascading_merge_in_one_move() {
        let mut b = row_board(&[2, 2, 4, 8]);
        let r = b.apply_move(Direction::Right);
        assert_eq!(first_row(&b), vec![0, 0, 0, 16]);
        assert_eq!(r.merges, 3);
        assert_eq!(r.gained, 4 + 8 + 16);
        assert_eq!(b.tile_count(), 1);
        b.assert_consistent();
    }

    #[test]
    fn test_grown_tile_absorbs_processed_merge_result() {
        // 2+2 becomes 4 at the edge; the 4 behind it then cascades into it.
        let mut b = row_board(&[4, 2, 2, 0]);
        b.apply_move(Direction::Right);
        assert_eq!(first_row(&b), vec![0, 0, 0, 8]);
    }

    #[test]
    fn test_three_equal_tiles() {
        let mut b = board(&[&[4, 4, 4], &[0, 0, 0], &[0, 0, 0]]);
        let r = b.apply_move(Direction::Right);
        assert_eq!(first_row(&b), vec![0, 4, 8]);
        assert_eq!(r.merges, 1);

        // Re-sliding changes nothing: 4 and 8 differ.
        let again = b.apply_move(Direction::Right);
        assert!(!again.changed);
        assert_eq!(first_row(&b), vec![0, 4, 8]);
    }

    #[test]
    fn test_ineffective_move() {
        let mut b = row_board(&[16, 8, 4, 2]);
        let before = b.to_rows();
        let r = b.apply_move(Direction::Right);
        assert_eq!(r, MoveResult::default());
        assert_eq!(b.to_rows(), before);
        // Still counted as a played move.
        assert_eq!(b.moves_played(), 1);
    }

    #[test]
    fn test_vertical_moves() {
        let mut b = board(&[&[2, 0, 0], &[2, 0, 4], &[4, 0, 4]]);
        b.apply_move(Direction::Down);
        assert_eq!(
            b.to_rows(),
            vec![vec![0, 0, 0], vec![0, 0, 0], vec![8, 0, 8]]
        );

        let mut b = board(&[&[2, 0, 0], &[2, 0, 4], &[4, 0, 4]]);
        b.apply_move(Direction::Up);
        assert_eq!(
            b.to_rows(),
            vec![vec![8, 0, 8], vec![0, 0, 0], vec![0, 0, 0]]
        );
        b.assert_consistent();
    }

    #[test]
    fn test_lines_are_independent() {
        let mut b = board(&[&[2, 2, 0, 0], &[0, 0, 0, 0], &[4, 0, 0, 4], &[8, 4, 2, 2]]);
        b.apply_move(Direction::Left);
        assert_eq!(
            b.to_rows(),
            vec![
                vec![4, 0, 0, 0],
                vec![0, 0, 0, 0],
                vec![8, 0, 0, 0],
                vec![16, 0, 0, 0],
            ]
        );
    }

    #[test]
    fn test_sliding_keeps_identity() {
        let mut b = row_board(&[0, 8, 0, 0]);
        let id = b.cell_at(0, 1).unwrap().id();
        b.apply_move(Direction::Right);
        let tile = b.cell_at(0, 3).unwrap();
        assert_eq!(tile.id(), id);
        assert_eq!(tile.pos(), Pos::new(0, 3));
    }

    #[test]
    fn test_absorbed_tile_ceases_to_exist() {
        let mut b = row_board(&[2, 2, 0, 0]);
        let mover = b.cell_at(0, 0).unwrap().id();
        let absorbed = b.cell_at(0, 1).unwrap().id();
        b.apply_move(Direction::Right);

        assert!(b.tile(absorbed).is_none());
        let survivor = b.tile(mover).unwrap();
        assert_eq!(survivor.value(), 4);
        assert_eq!(survivor.pos(), Pos::new(0, 3));
    }

    #[test]
    fn test_merge_total_accumulates() {
        let mut b = row_board(&[2, 2, 4, 4]);
        b.apply_move(Direction::Left);
        assert_eq!(first_row(&b), vec![8, 4, 0, 0]);
        assert_eq!(b.merge_total, 12);
    }

    #[test]
    fn test_single_cell_board() {
        let mut b = board(&[&[2]]);
        for dir in Direction::ALL {
            assert!(!b.apply_move(dir).changed);
        }
        assert_eq!(b.to_rows(), vec![vec![2]]);
    }

    #[test]
    fn test_large_board() {
        let mut rows = vec![vec![0; 6]; 6];
        rows[5] = vec![2, 2, 2, 2, 2, 2];
        let mut b = Board::from_rows(&rows, GameConfig::default(), SimpleRng::new(1)).unwrap();
        b.apply_move(Direction::Right);
        // Every other mover grows into the tile ahead of it and keeps going.
        assert_eq!(b.to_rows()[5], vec![0, 0, 0, 0, 4, 8]);
        b.assert_consistent();
    }

    #[test]
    #[should_panic(expected = "tile value overflow")]
    fn test_gained_overflow_panics() {
        // Each row merges into 2^63 on its own; their sum does not fit.
        let big: TileValue = 1 << 62;
        let mut b = board(&[&[big, big], &[big, big]]);
        b.apply_move(Direction::Left);
    }
}
