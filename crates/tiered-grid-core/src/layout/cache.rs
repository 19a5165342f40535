//! Memoization of the size estimate and tile placements of the last pass.
//!
//! The cache holds a single entry keyed by the exact `(width, item_count)` the
//! results were computed for.  A lookup with any other key is a miss, and
//! storing under a new key discards everything stored under the old one, so
//! a size and a position list from different keys can never coexist.
//!
//! Under the same key the size and the positions are filled in
//! independently: a measure pass can cache the size before any place pass
//! has asked for positions, and storing one never clears the other.

use crate::domain::geometry::{Size, TilePlacement};

#[derive(Debug, Clone, Copy, PartialEq)]
struct CacheKey {
    width: f64,
    item_count: usize,
}

/// Single-entry cache for one engine instance.
#[derive(Debug, Default)]
pub struct PlacementCache {
    key: Option<CacheKey>,
    total_size: Option<Size>,
    positions: Option<Vec<TilePlacement>>,
}

impl PlacementCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached size for exactly this key, if any.
    pub fn size(&self, width: f64, item_count: usize) -> Option<Size> {
        if self.matches(width, item_count) {
            self.total_size
        } else {
            None
        }
    }

    /// Returns the cached tile placements for exactly this key, if any.
    pub fn positions(&self, width: f64, item_count: usize) -> Option<&[TilePlacement]> {
        if self.matches(width, item_count) {
            self.positions.as_deref()
        } else {
            None
        }
    }

    /// Stores a size estimate.
    ///
    /// A different key than the current one drops the cached positions too.
    pub fn store_size(&mut self, width: f64, item_count: usize, size: Size) {
        self.rekey(width, item_count);
        self.total_size = Some(size);
    }

    /// Stores a full placement list.
    ///
    /// A different key than the current one drops the cached size too.
    pub fn store_positions(&mut self, width: f64, item_count: usize, positions: Vec<TilePlacement>) {
        self.rekey(width, item_count);
        self.positions = Some(positions);
    }

    /// Clears the entry.
    pub fn invalidate(&mut self) {
        self.key = None;
        self.total_size = None;
        self.positions = None;
    }

    /// The `(width, item_count)` the current entry belongs to.
    pub fn key(&self) -> Option<(f64, usize)> {
        self.key.map(|k| (k.width, k.item_count))
    }

    pub fn is_empty(&self) -> bool {
        self.key.is_none()
    }

    fn matches(&self, width: f64, item_count: usize) -> bool {
        self.key == Some(CacheKey { width, item_count })
    }

    fn rekey(&mut self, width: f64, item_count: usize) {
        if !self.matches(width, item_count) {
            self.total_size = None;
            self.positions = None;
            self.key = Some(CacheKey { width, item_count });
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
