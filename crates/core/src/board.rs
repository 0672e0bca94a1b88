//! Board module - manages the game grid
//!
//! The board is an N x N grid where each cell is empty or holds the id of one
//! live tile. Uses a flat row-major array of cells (`row * size + col`) next to
//! a [`TileArena`] that owns the tiles themselves.
//!
//! The move engine, spawning and scoring are implemented in their own modules
//! as further `impl Board` blocks; this module holds the grid storage,
//! construction and read-only inspection.

use std::fmt;
use std::rc::Weak;

use log::debug;

use crate::config::GameConfig;
use crate::error::BoardError;
use crate::listener::{BoardListener, Listeners, TileListener};
use crate::rng::TileRng;
use crate::tile::{Tile, TileArena, TileId};
use crate::types::{is_tile_value, Pos, TileValue, BASE_TILE_VALUE};

/// A grid cell: empty or holding a tile
pub type Cell = Option<TileId>;

/// The game grid
#[derive(Debug)]
pub struct Board {
    pub(crate) size: usize,
    /// Flat array of cells, row-major order (row * size + col)
    pub(crate) cells: Vec<Cell>,
    pub(crate) tiles: TileArena,
    pub(crate) config: GameConfig,
    pub(crate) rng: Box<dyn TileRng>,
    pub(crate) listeners: Listeners<dyn BoardListener>,
    /// Sum of values produced by merges this game
    pub(crate) merge_total: TileValue,
    pub(crate) moves_played: u64,
    pub(crate) game_over: bool,
}

impl Board {
    /// Create a board with `config.initial_tiles` value-2 tiles in random empty cells
    pub fn new(config: GameConfig, rng: impl TileRng + 'static) -> Result<Self, BoardError> {
        let mut board = Self::empty(config, rng)?;
        for _ in 0..config.initial_tiles {
            let empties = board.empty_positions();
            let pick = board.rng.next_below(empties.len());
            board.place(empties[pick], BASE_TILE_VALUE);
        }
        debug!(
            "new {}x{} board with {} tiles",
            board.size,
            board.size,
            board.tile_count()
        );
        Ok(board)
    }

    /// Create a board with no tiles
    pub fn empty(config: GameConfig, rng: impl TileRng + 'static) -> Result<Self, BoardError> {
        config.validate()?;
        Ok(Self {
            size: config.size,
            cells: vec![None; config.cell_count()],
            tiles: TileArena::new(),
            config,
            rng: Box::new(rng),
            listeners: Listeners::new(),
            merge_total: 0,
            moves_played: 0,
            game_over: false,
        })
    }

    /// Build a board from a table of values, where 0 is an empty cell.
    ///
    /// The grid size is taken from the table, overriding `config.size`;
    /// `config.initial_tiles` is ignored.
    ///
    /// ```
    /// use tile512_core::{Board, GameConfig, SimpleRng};
    ///
    /// let board = Board::from_rows(
    ///     &[vec![2, 0], vec![0, 4]],
    ///     GameConfig::default(),
    ///     SimpleRng::new(1),
    /// )
    /// .unwrap();
    /// assert_eq!(board.size(), 2);
    /// assert_eq!(board.value_at(1, 1), Some(4));
    /// assert_eq!(board.to_rows(), vec![vec![2, 0], vec![0, 4]]);
    /// ```
    pub fn from_rows<R: AsRef<[TileValue]>>(
        rows: &[R],
        config: GameConfig,
        rng: impl TileRng + 'static,
    ) -> Result<Self, BoardError> {
        let size = rows.len();
        let config = config.with_size(size).with_initial_tiles(0);
        let mut board = Self::empty(config, rng)?;

        for (row, values) in rows.iter().enumerate() {
            let values = values.as_ref();
            if values.len() != size {
                return Err(BoardError::RowLength {
                    row,
                    expected: size,
                    actual: values.len(),
                });
            }
            for (col, &value) in values.iter().enumerate() {
                if value == 0 {
                    continue;
                }
                if !is_tile_value(value) {
                    return Err(BoardError::TileValue { row, col, value });
                }
                board.place(Pos::new(row, col), value);
            }
        }
        Ok(board)
    }

    /// Calculate flat index from a position
    #[inline(always)]
    pub(crate) fn index(&self, pos: Pos) -> usize {
        pos.row * self.size + pos.col
    }

    /// Put a new tile into an empty cell, without notifying anyone
    pub(crate) fn place(&mut self, pos: Pos, value: TileValue) -> TileId {
        let idx = self.index(pos);
        debug_assert!(self.cells[idx].is_none(), "cell {pos} already occupied");
        let id = self.tiles.insert(value, pos);
        self.cells[idx] = Some(id);
        id
    }

    /// Grid is `size` x `size`
    pub fn size(&self) -> usize {
        self.size
    }

    /// Rule set this board was created with
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Get the tile at (row, col); `None` if the cell is empty or out of bounds
    pub fn cell_at(&self, row: usize, col: usize) -> Option<&Tile> {
        if row >= self.size || col >= self.size {
            return None;
        }
        self.cells[self.index(Pos::new(row, col))].and_then(|id| self.tiles.get(id))
    }

    /// Value at (row, col); `None` if empty or out of bounds
    pub fn value_at(&self, row: usize, col: usize) -> Option<TileValue> {
        self.cell_at(row, col).map(Tile::value)
    }

    /// Look up a live tile by id
    pub fn tile(&self, id: TileId) -> Option<&Tile> {
        self.tiles.get(id)
    }

    /// All live tiles (unordered)
    pub fn tiles(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter()
    }

    /// Number of tiles on the board
    pub fn tile_count(&self) -> usize {
        self.tiles.len()
    }

    /// Largest tile value, or 0 on an empty board
    pub fn max_tile(&self) -> TileValue {
        self.tiles().map(Tile::value).max().unwrap_or(0)
    }

    /// Positions of unoccupied cells, row-major
    pub fn empty_positions(&self) -> Vec<Pos> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_none())
            .map(|(idx, _)| Pos::new(idx / self.size, idx % self.size))
            .collect()
    }

    /// Is there at least one cell without a tile?
    pub fn has_empty(&self) -> bool {
        self.cells.iter().any(|cell| cell.is_none())
    }

    /// Every cell holds a tile
    pub fn is_full(&self) -> bool {
        !self.has_empty()
    }

    /// Moves applied so far (effective or not)
    pub fn moves_played(&self) -> u64 {
        self.moves_played
    }

    /// Register an observer for board events
    pub fn register_listener(&mut self, listener: Weak<dyn BoardListener>) {
        self.listeners.register(listener);
    }

    /// Register an observer for one tile's events.
    ///
    /// Returns false if the tile no longer exists.
    pub fn register_tile_listener(&mut self, id: TileId, listener: Weak<dyn TileListener>) -> bool {
        match self.tiles.get_mut(id) {
            Some(tile) => {
                tile.register_listener(listener);
                true
            }
            None => false,
        }
    }

    /// Represent each tile by its value and empty cells as 0
    pub fn to_rows(&self) -> Vec<Vec<TileValue>> {
        (0..self.size)
            .map(|row| {
                (0..self.size)
                    .map(|col| self.value_at(row, col).unwrap_or(0))
                    .collect()
            })
            .collect()
    }

    /// Check that every live tile sits in the cell that points back at it
    #[cfg(test)]
    pub(crate) fn assert_consistent(&self) {
        let occupied = self.cells.iter().filter(|c| c.is_some()).count();
        assert_eq!(occupied, self.tiles.len());
        for tile in self.tiles() {
            assert_eq!(self.cells[self.index(tile.pos())], Some(tile.id()));
            assert!(is_tile_value(tile.value()), "bad value {}", tile.value());
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.max_tile().max(1).to_string().len();
        for row in 0..self.size {
            for col in 0..self.size {
                if col > 0 {
                    f.write_str(" ")?;
                }
                match self.value_at(row, col) {
                    Some(value) => write!(f, "{:>width$}", value)?,
                    None => write!(f, "{:>width$}", ".")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
