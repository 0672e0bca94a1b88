//! Listener module - observer capabilities for board and tile events
//!
//! Observers are registered as `Weak` references: the emitter never keeps an
//! observer alive, and an observer that has been dropped is silently skipped.
//! Notifications are synchronous and delivered in registration order, in the
//! order the events happen while a move is processed.
//!
//! Every method has an empty default body, so an observer only implements the
//! events it cares about. Observers that need to record state use interior
//! mutability (`Cell`/`RefCell`), since callbacks receive `&self`.

use std::fmt;
use std::rc::{Rc, Weak};

use crate::tile::Tile;
use crate::types::{Pos, TileValue};

/// Board-level structural events
pub trait BoardListener {
    /// A new tile was placed in a previously empty cell
    fn tile_spawned(&self, _tile: &Tile) {}

    /// A tile slid across empty cells from `from` to its current position
    fn tile_moved(&self, _tile: &Tile, _from: Pos) {}

    /// `survivor` absorbed `absorbed`; `survivor` now sits in the absorbed tile's cell
    fn tile_merged(&self, _survivor: &Tile, _absorbed: &Tile) {}

    /// A spawn found no empty cell; the game is over with the given score
    fn game_over(&self, _score: TileValue) {}
}

/// Events concerning one specific tile
pub trait TileListener {
    /// The tile slid from `from` to its current position
    fn moved(&self, _tile: &Tile, _from: Pos) {}

    /// The tile absorbed a tile of value `absorbed` and doubled
    fn merged(&self, _tile: &Tile, _absorbed: TileValue) {}

    /// The tile was absorbed by another tile and no longer exists
    fn removed(&self, _tile: &Tile) {}
}

/// Ordered list of non-owning observer references
pub struct Listeners<L: ?Sized> {
    entries: Vec<Weak<L>>,
}

impl<L: ?Sized> Listeners<L> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Append an observer, dropping entries whose observer is gone
    pub fn register(&mut self, listener: Weak<L>) {
        self.entries.retain(|w| w.strong_count() > 0);
        self.entries.push(listener);
    }

    /// Number of observers still alive
    pub fn len(&self) -> usize {
        self.entries.iter().filter(|w| w.strong_count() > 0).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Invoke `f` on every live observer, in registration order
    pub fn notify(&self, mut f: impl FnMut(&L)) {
        for weak in &self.entries {
            if let Some(listener) = weak.upgrade() {
                f(&*listener);
            }
        }
    }
}

impl<L: ?Sized> Default for Listeners<L> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: ?Sized> fmt::Debug for Listeners<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listeners")
            .field("live", &self.len())
            .finish()
    }
}

/// Downgrade a concrete board observer into a registrable handle
pub fn board_listener<L: BoardListener + 'static>(listener: &Rc<L>) -> Weak<dyn BoardListener> {
    let weak: Weak<L> = Rc::downgrade(listener);
    weak
}

/// Downgrade a concrete tile observer into a registrable handle
pub fn tile_listener<L: TileListener + 'static>(listener: &Rc<L>) -> Weak<dyn TileListener> {
    let weak: Weak<L> = Rc::downgrade(listener);
    weak
}
