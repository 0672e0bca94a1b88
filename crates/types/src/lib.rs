//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core engine, headless runner, an external renderer).
//!
//! # Board Dimensions
//!
//! The grid is square and size-agnostic. The classic game uses:
//!
//! - **Size**: 4x4 cells (rows and columns indexed 0-3)
//! - **Initial tiles**: 2 tiles of value 2 in random empty cells
//!
//! # Tile Values
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `BASE_TILE_VALUE` | 2 | Value of a freshly spawned tile |
//! | `BONUS_TILE_VALUE` | 4 | Occasional spawn value for the weighted variant |
//! | `DEFAULT_BONUS_PERCENT` | 10 | Chance (percent) of a bonus spawn in the weighted variant |
//!
//! # Examples
//!
//! ```
//! use tile512_types::{Direction, Pos, DEFAULT_GRID_SIZE};
//!
//! // Parse from string (case-insensitive)
//! let dir = Direction::from_str("Left").unwrap();
//! assert_eq!(dir, Direction::Left);
//! assert_eq!(dir.opposite(), Direction::Right);
//!
//! // Positions are (row, col)
//! let p = Pos::new(1, 2);
//! assert_eq!((p.row, p.col), (1, 2));
//!
//! assert_eq!(DEFAULT_GRID_SIZE, 4);
//! ```

use std::fmt;

/// Default grid size (4x4)
pub const DEFAULT_GRID_SIZE: usize = 4;

/// Number of value-2 tiles placed on a fresh board
pub const DEFAULT_INITIAL_TILES: usize = 2;

/// Value of a freshly spawned tile
pub const BASE_TILE_VALUE: TileValue = 2;

/// Value used by the weighted spawn variant
pub const BONUS_TILE_VALUE: TileValue = 4;

/// Chance in percent that the weighted spawn variant picks [`BONUS_TILE_VALUE`]
pub const DEFAULT_BONUS_PERCENT: u32 = 10;

/// Tile value. Wide enough that realistic play never overflows.
pub type TileValue = u64;

/// Returns true if `value` is a legal tile value (a power of two, at least 2).
///
/// ```
/// use tile512_types::is_tile_value;
///
/// assert!(is_tile_value(2));
/// assert!(is_tile_value(1024));
/// assert!(!is_tile_value(0));
/// assert!(!is_tile_value(1));
/// assert!(!is_tile_value(6));
/// ```
pub fn is_tile_value(value: TileValue) -> bool {
    value >= 2 && value.is_power_of_two()
}

/// The four slide directions
///
/// "Forward" for a direction means toward the edge being slid to:
/// - **Left**: column 0
/// - **Right**: column `size - 1`
/// - **Up**: row 0
/// - **Down**: row `size - 1`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// All directions, in a stable order
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    /// Parse direction from string (case-insensitive)
    ///
    /// Accepts full names or single letters: "left" | "l", "right" | "r", "up" | "u", "down" | "d"
    ///
    /// # Examples
    ///
    /// ```
    /// use tile512_types::Direction;
    ///
    /// assert_eq!(Direction::from_str("left"), Some(Direction::Left));
    /// assert_eq!(Direction::from_str("R"), Some(Direction::Right));
    /// assert_eq!(Direction::from_str("UP"), Some(Direction::Up));
    /// assert_eq!(Direction::from_str("sideways"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "left" | "l" => Some(Direction::Left),
            "right" | "r" => Some(Direction::Right),
            "up" | "u" => Some(Direction::Up),
            "down" | "d" => Some(Direction::Down),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::Up => "up",
            Direction::Down => "down",
        }
    }

    /// The direction pointing the other way
    pub fn opposite(&self) -> Self {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }

    /// True for directions that slide along rows (left/right)
    pub fn is_horizontal(&self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }

    /// Position of the `step`-th cell of `line`, counted from the destination edge.
    ///
    /// A line is a row for horizontal directions and a column for vertical ones.
    /// `step == 0` is the cell on the destination edge; `step == size - 1` is the far edge.
    ///
    /// ```
    /// use tile512_types::{Direction, Pos};
    ///
    /// assert_eq!(Direction::Right.line_cell(4, 1, 0), Pos::new(1, 3));
    /// assert_eq!(Direction::Left.line_cell(4, 1, 0), Pos::new(1, 0));
    /// assert_eq!(Direction::Down.line_cell(4, 2, 1), Pos::new(2, 2));
    /// assert_eq!(Direction::Up.line_cell(4, 2, 3), Pos::new(3, 2));
    /// ```
    #[inline]
    pub fn line_cell(&self, size: usize, line: usize, step: usize) -> Pos {
        debug_assert!(line < size && step < size);
        let far = size - 1 - step;
        match self {
            Direction::Left => Pos::new(line, step),
            Direction::Right => Pos::new(line, far),
            Direction::Up => Pos::new(step, line),
            Direction::Down => Pos::new(far, line),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A (row, column) position on the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Pos {
    pub row: usize,
    pub col: usize,
}

impl Pos {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classic_defaults() {
        assert_eq!(DEFAULT_GRID_SIZE, 4);
        assert_eq!(DEFAULT_INITIAL_TILES, 2);
        assert_eq!(BASE_TILE_VALUE, 2);
        assert_eq!(BONUS_TILE_VALUE, 4);
        assert_eq!(DEFAULT_BONUS_PERCENT, 10);
    }

    #[test]
    fn test_direction_roundtrip_str() {
        for dir in Direction::ALL {
            assert_eq!(Direction::from_str(dir.as_str()), Some(dir));
            assert_eq!(dir.to_string(), dir.as_str());
        }
    }

    #[test]
    fn test_opposite_is_involution() {
        for dir in Direction::ALL {
            assert_ne!(dir.opposite(), dir);
            assert_eq!(dir.opposite().opposite(), dir);
            assert_eq!(dir.opposite().is_horizontal(), dir.is_horizontal());
        }
    }

    #[test]
    fn test_line_cell_covers_grid_once() {
        let size = 5;
        for dir in Direction::ALL {
            let mut seen = vec![false; size * size];
            for line in 0..size {
                for step in 0..size {
                    let p = dir.line_cell(size, line, step);
                    assert!(p.row < size && p.col < size);
                    let idx = p.row * size + p.col;
                    assert!(!seen[idx], "{dir}: {p} visited twice");
                    seen[idx] = true;
                }
            }
            assert!(seen.iter().all(|&s| s));
        }
    }

    #[test]
    fn test_line_cell_single_cell_grid() {
        for dir in Direction::ALL {
            assert_eq!(dir.line_cell(1, 0, 0), Pos::new(0, 0));
        }
    }
}
