//! Absolute tile geometry.
//!
//! Converts the unit-based slots of an [`ExpandedPattern`] into absolute
//! positions and sizes for a container of a given width.  One unit is a third
//! of the container width.  Item `i` lands in slot `i % set_size` of cycle
//! `i / set_size`, and each cycle sits directly below the previous one.
//!
//! Placement is independent per item: nothing here depends on where any
//! other item went, so single lookups and batch resolution agree exactly.
//!
//! Vertical offsets are summed in whole units before scaling by the unit
//! size.  This keeps the cycle translation exact and keeps
//! [`estimate_size`] monotonic in the item count.

use serde::Serialize;

use crate::domain::pattern::ExpandedPattern;

/// Number of units across the container width.
const COLUMNS: f64 = 3.0;

/// A point in container coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A width/height pair.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const ZERO: Size = Size {
        width: 0.0,
        height: 0.0,
    };

    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// An axis-aligned rectangle, used for the bounds a host places items into.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    pub const fn new(origin: Point, size: Size) -> Self {
        Self { origin, size }
    }

    /// A rectangle of the given size anchored at (0, 0).
    pub const fn from_size(size: Size) -> Self {
        Self {
            origin: Point::ZERO,
            size,
        }
    }

    pub fn min_x(&self) -> f64 {
        self.origin.x
    }

    pub fn min_y(&self) -> f64 {
        self.origin.y
    }

    pub fn width(&self) -> f64 {
        self.size.width
    }
}

/// Absolute top-left position and size of one item's tile.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TilePlacement {
    pub position: Point,
    pub size: Size,
}

/// Returns the unit edge length for `width`, or `None` when the width cannot
/// hold a layout (zero, negative, NaN or infinite).
fn unit_size(width: f64) -> Option<f64> {
    if width.is_finite() && width > 0.0 {
        Some(width / COLUMNS)
    } else {
        None
    }
}

fn place(index: usize, unit: f64, pattern: &ExpandedPattern) -> TilePlacement {
    let set_size = pattern.set_size();
    let cycle = index / set_size;
    let slot = pattern.slots()[index % set_size];

    let y_units = f64::from(slot.y) + cycle as f64 * f64::from(pattern.cycle_height_units());

    TilePlacement {
        position: Point::new(f64::from(slot.x) * unit, y_units * unit),
        size: Size::new(f64::from(slot.width) * unit, f64::from(slot.height) * unit),
    }
}

/// Resolves the absolute position and size of item `index`.
///
/// Returns `None` when `index` is not below `item_count`, or when `width` is
/// not a positive finite number.
pub fn resolve_position(
    index: usize,
    item_count: usize,
    width: f64,
    pattern: &ExpandedPattern,
) -> Option<TilePlacement> {
    if index >= item_count {
        return None;
    }
    let unit = unit_size(width)?;
    Some(place(index, unit, pattern))
}

/// Resolves every item in `0..item_count`.
///
/// Returns an empty vector when `item_count` is zero or `width` is not a
/// positive finite number.  Both are ordinary states for a container that is
/// empty or not yet sized, not errors.
pub fn resolve_all(item_count: usize, width: f64, pattern: &ExpandedPattern) -> Vec<TilePlacement> {
    let Some(unit) = unit_size(width) else {
        return Vec::new();
    };
    (0..item_count).map(|i| place(i, unit, pattern)).collect()
}

/// Computes the content size needed to hold `item_count` items.
///
/// The height is the full cycles' height plus the tallest extent reached by
/// the slots of the partially filled final cycle.  Returns [`Size::ZERO`] for
/// zero items or a degenerate width.
pub fn estimate_size(item_count: usize, width: f64, pattern: &ExpandedPattern) -> Size {
    let Some(unit) = unit_size(width) else {
        return Size::ZERO;
    };
    if item_count == 0 {
        return Size::ZERO;
    }

    let set_size = pattern.set_size();
    let full_cycles = item_count / set_size;
    let remainder = item_count % set_size;

    let height_units = full_cycles as f64 * f64::from(pattern.cycle_height_units())
        + f64::from(pattern.partial_extent_units(remainder));

    Size::new(width, height_units * unit)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
