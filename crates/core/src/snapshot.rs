use crate::board::Board;
use crate::types::TileValue;

/// Plain-data copy of the board for renderers and logs
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct BoardSnapshot {
    pub size: usize,
    /// Row-major tile values, 0 for empty cells
    pub values: Vec<TileValue>,
    pub score: TileValue,
    pub tile_count: usize,
    pub max_tile: TileValue,
    pub moves_played: u64,
    pub game_over: bool,
    /// FNV-1a 64 over `values`; equal boards hash equal
    pub board_hash: u64,
}

impl BoardSnapshot {
    pub fn clear(&mut self) {
        self.size = 0;
        self.values.clear();
        self.score = 0;
        self.tile_count = 0;
        self.max_tile = 0;
        self.moves_played = 0;
        self.game_over = false;
        self.board_hash = fnv1a64_values(&self.values);
    }

    /// Value at (row, col), 0 if empty or out of bounds
    pub fn value_at(&self, row: usize, col: usize) -> TileValue {
        if row >= self.size || col >= self.size {
            return 0;
        }
        self.values[row * self.size + col]
    }

    pub fn playable(&self) -> bool {
        !self.game_over
    }
}

/// FNV-1a 64-bit over the little-endian bytes of each value
pub fn fnv1a64_values(values: &[TileValue]) -> u64 {
    let mut h: u64 = 0xcbf29ce484222325;
    for b in values.iter().flat_map(|v| v.to_le_bytes()) {
        h ^= b as u64;
        h = h.wrapping_mul(0x00000100000001B3);
    }
    h
}

impl Board {
    /// Fill `out`, reusing its allocation
    pub fn snapshot_into(&self, out: &mut BoardSnapshot) {
        out.size = self.size;
        out.values.clear();
        out.values.extend(
            self.cells
                .iter()
                .map(|cell| cell.and_then(|id| self.tiles.get(id)).map_or(0, |t| t.value())),
        );
        out.score = self.current_score();
        out.tile_count = self.tile_count();
        out.max_tile = self.max_tile();
        out.moves_played = self.moves_played;
        out.game_over = self.game_over;
        out.board_hash = fnv1a64_values(&out.values);
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        let mut snap = BoardSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }
}
