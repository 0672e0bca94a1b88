//! Tile module - the numbered pieces that slide and merge
//!
//! Tiles live in a [`TileArena`] owned by the board. A [`TileId`] names one
//! physical tile for its whole life: sliding keeps the id, absorption frees it.
//! Freed slots are reused under a new generation, so a stale id never resolves
//! to a later tile.

use std::fmt;
use std::rc::Weak;

use crate::listener::{Listeners, TileListener};
use crate::types::{Pos, TileValue};

/// Stable identity of a tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TileId {
    slot: u32,
    generation: u32,
}

impl fmt::Display for TileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}.{}", self.slot, self.generation)
    }
}

/// A numbered tile sitting in one cell
#[derive(Debug)]
pub struct Tile {
    id: TileId,
    value: TileValue,
    pos: Pos,
    listeners: Listeners<dyn TileListener>,
}

impl Tile {
    pub fn id(&self) -> TileId {
        self.id
    }

    pub fn value(&self) -> TileValue {
        self.value
    }

    pub fn pos(&self) -> Pos {
        self.pos
    }

    pub fn row(&self) -> usize {
        self.pos.row
    }

    pub fn col(&self) -> usize {
        self.pos.col
    }

    pub(crate) fn register_listener(&mut self, listener: Weak<dyn TileListener>) {
        self.listeners.register(listener);
    }

    pub(crate) fn set_pos(&mut self, pos: Pos) {
        self.pos = pos;
    }

    /// Absorb a tile of equal value, doubling this one.
    ///
    /// Panics if the doubled value does not fit in [`TileValue`].
    pub(crate) fn absorb(&mut self, other: TileValue) {
        debug_assert_eq!(self.value, other);
        self.value = add_values(self.value, other);
    }

    pub(crate) fn notify_moved(&self, from: Pos) {
        self.listeners.notify(|l| l.moved(self, from));
    }

    pub(crate) fn notify_merged(&self, absorbed: TileValue) {
        self.listeners.notify(|l| l.merged(self, absorbed));
    }

    pub(crate) fn notify_removed(&self) {
        self.listeners.notify(|l| l.removed(self));
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tile[{},{}]:{}", self.pos.row, self.pos.col, self.value)
    }
}

/// Add two tile quantities (values, sums, merge gains).
///
/// Panics on overflow instead of wrapping.
pub(crate) fn add_values(a: TileValue, b: TileValue) -> TileValue {
    a.checked_add(b)
        .unwrap_or_else(|| panic!("tile value overflow adding {} to {}", b, a))
}

#[derive(Debug)]
struct Slot {
    generation: u32,
    tile: Option<Tile>,
}

/// Slot storage for live tiles, indexed by [`TileId`]
#[derive(Debug, Default)]
pub struct TileArena {
    slots: Vec<Slot>,
    free: Vec<u32>,
    live: usize,
}

impl TileArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a tile and return its id
    pub fn insert(&mut self, value: TileValue, pos: Pos) -> TileId {
        self.insert_tile(value, pos).id
    }

    /// Create a tile and return it
    pub(crate) fn insert_tile(&mut self, value: TileValue, pos: Pos) -> &Tile {
        let slot = match self.free.pop() {
            Some(slot) => slot,
            None => {
                self.slots.push(Slot {
                    generation: 0,
                    tile: None,
                });
                (self.slots.len() - 1) as u32
            }
        };
        self.live += 1;
        let entry = &mut self.slots[slot as usize];
        let id = TileId {
            slot,
            generation: entry.generation,
        };
        entry.tile.insert(Tile {
            id,
            value,
            pos,
            listeners: Listeners::new(),
        })
    }

    pub fn get(&self, id: TileId) -> Option<&Tile> {
        self.slots
            .get(id.slot as usize)
            .filter(|s| s.generation == id.generation)
            .and_then(|s| s.tile.as_ref())
    }

    pub(crate) fn get_mut(&mut self, id: TileId) -> Option<&mut Tile> {
        self.slots
            .get_mut(id.slot as usize)
            .filter(|s| s.generation == id.generation)
            .and_then(|s| s.tile.as_mut())
    }

    /// Destroy a tile, returning it. The slot's generation is bumped.
    pub(crate) fn remove(&mut self, id: TileId) -> Option<Tile> {
        let entry = self.slots.get_mut(id.slot as usize)?;
        if entry.generation != id.generation {
            return None;
        }
        let tile = entry.tile.take()?;
        entry.generation = entry.generation.wrapping_add(1);
        self.free.push(id.slot);
        self.live -= 1;
        Some(tile)
    }

    /// Number of live tiles
    pub fn len(&self) -> usize {
        self.live
    }

    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    /// Iterate over live tiles in slot order
    pub fn iter(&self) -> impl Iterator<Item = &Tile> {
        self.slots.iter().filter_map(|s| s.tile.as_ref())
    }
}
