//! # tiered-grid-core
//!
//! Layout engine that places a linear sequence of items into a two-dimensional
//! tiled grid.  Every item occupies one of three square tile sizes (1×1, 2×2 or
//! 3×3 "units", where one unit is a third of the container width), arranged by
//! a repeating, user-configurable pattern of layers.
//!
//! This crate has zero dependencies on UI frameworks, windowing systems or I/O.
//! A host layout system supplies `(item_count, width, alignment, pattern)` and
//! consumes `(total_size, per-item position and size)`.
//!
//! # Architecture overview (for beginners)
//!
//! - **`domain`** – Pure geometry.  The [`Pattern`] model and its expansion into
//!   relative [`Slot`]s, the resolver that turns an item index into an absolute
//!   [`TilePlacement`], the size estimator, and the [`Alignment`] →
//!   [`UnitPoint`] anchor mapping.
//!
//! - **`layout`** – The stateful shell a host talks to during a layout pass.
//!   [`TieredGridLayout`] owns one [`PlacementCache`] so that a measure pass
//!   followed by a place pass with the same width and item count does the
//!   work only once.
//!
//! ```rust
//! use tiered_grid_core::{ProposedSize, Rect, TieredGridLayout};
//!
//! let mut grid = TieredGridLayout::default();
//! let size = grid.size_that_fits(ProposedSize::width(300.0), 11);
//! assert_eq!(size.height, 800.0);
//!
//! let items = grid.placements(Rect::from_size(size), 11);
//! assert_eq!(items.len(), 11);
//! ```

pub mod domain;
pub mod layout;

// Re-export the most-used types at the crate root so callers can write
// `tiered_grid_core::Pattern` instead of `tiered_grid_core::domain::pattern::Pattern`.
pub use domain::anchor::{anchor_for, anchor_for_name, Alignment, UnitPoint, DEFAULT_ANCHOR};
pub use domain::geometry::{
    estimate_size, resolve_all, resolve_position, Point, Rect, Size, TilePlacement,
};
pub use domain::pattern::{expand, ExpandedPattern, GridError, Layer, LayerKind, Pattern, Slot};
pub use layout::cache::PlacementCache;
pub use layout::engine::{PlacedItem, ProposedSize, Subview, TieredGridLayout};
