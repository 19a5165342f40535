//! One measure + place pass over a row of colored tiles.
//!
//! The preview plays the role of a host layout system: it measures the
//! container with [`TieredGridLayout::size_that_fits`], then hands a
//! [`TileRecorder`] per item to [`TieredGridLayout::place_subviews`] and keeps
//! whatever the engine told each one.
//!
//! Items are colored from a fixed twelve-color palette by index, so the same
//! item keeps its color as the item count changes.

use std::fmt::Write as _;

use serde::Serialize;
use tiered_grid_core::{
    Alignment, Pattern, Point, ProposedSize, Rect, Size, Subview, TieredGridLayout, UnitPoint,
};
use tracing::{debug, info};

/// Tile colors, assigned round-robin by item index.
pub const PALETTE: [&str; 12] = [
    "red", "orange", "yellow", "green", "mint", "teal", "cyan", "blue", "indigo", "purple",
    "pink", "brown",
];

/// Everything one preview pass needs.
#[derive(Debug, Clone, PartialEq)]
pub struct PreviewRequest {
    pub items: usize,
    /// Proposed container width; `None` is an unspecified proposal.
    pub width: Option<f64>,
    /// Proposed container height, used as a lower bound.
    pub min_height: Option<f64>,
    pub alignment: Alignment,
    pub pattern: Pattern,
}

/// One placed tile as seen by the host.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PreviewTile {
    pub index: usize,
    pub color: &'static str,
    /// Where the tile's anchor point was placed.
    pub position: Point,
    /// The tile's top-left corner.
    pub origin: Point,
    pub size: Size,
}

/// Result of a preview pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Preview {
    pub size: Size,
    pub alignment: Alignment,
    pub anchor: UnitPoint,
    pub tiles: Vec<PreviewTile>,
}

// ── Recorder ──────────────────────────────────────────────────────────────────

/// A stand-in child view that remembers where it was placed.
#[derive(Debug, Clone, PartialEq)]
pub struct TileRecorder {
    index: usize,
    placement: Option<(Point, UnitPoint, Size)>,
}

impl TileRecorder {
    pub fn new(index: usize) -> Self {
        Self {
            index,
            placement: None,
        }
    }

    pub fn color(&self) -> &'static str {
        PALETTE[self.index % PALETTE.len()]
    }

    /// The recorded tile, or `None` if the engine never placed this item.
    pub fn tile(&self) -> Option<PreviewTile> {
        let (position, anchor, size) = self.placement?;
        let offset = anchor.offset_within(size);
        Some(PreviewTile {
            index: self.index,
            color: self.color(),
            position,
            origin: Point::new(position.x - offset.x, position.y - offset.y),
            size,
        })
    }
}

impl Subview for TileRecorder {
    fn place(&mut self, position: Point, anchor: UnitPoint, proposal: Size) {
        self.placement = Some((position, anchor, proposal));
    }
}

// ── Pass ──────────────────────────────────────────────────────────────────────

/// Runs a measure pass and a place pass for `request`.
pub fn build_preview(request: &PreviewRequest) -> Preview {
    let mut grid = TieredGridLayout::new(request.pattern.clone(), request.alignment);
    let proposal = ProposedSize::new(request.width, request.min_height);

    let size = grid.size_that_fits(proposal, request.items);
    debug!(width = size.width, height = size.height, "measured container");

    let mut recorders: Vec<TileRecorder> = (0..request.items).map(TileRecorder::new).collect();
    grid.place_subviews(Rect::from_size(size), &mut recorders);

    let tiles: Vec<PreviewTile> = recorders.iter().filter_map(TileRecorder::tile).collect();
    info!(
        items = request.items,
        placed = tiles.len(),
        height = size.height,
        "preview pass complete"
    );

    Preview {
        size,
        alignment: request.alignment,
        anchor: grid.anchor(),
        tiles,
    }
}

/// Renders a preview as a plain-text table.
pub fn render_table(preview: &Preview) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "container {} x {}  alignment {}  anchor ({}, {})",
        preview.size.width,
        preview.size.height,
        preview.alignment,
        preview.anchor.x,
        preview.anchor.y
    );
    if preview.tiles.is_empty() {
        out.push_str("(no tiles)\n");
        return out;
    }

    let _ = writeln!(
        out,
        "{:>5}  {:<7}  {:>9}  {:>9}  {:>9}  {:>9}",
        "index", "color", "x", "y", "width", "height"
    );
    for tile in &preview.tiles {
        let _ = writeln!(
            out,
            "{:>5}  {:<7}  {:>9.1}  {:>9.1}  {:>9.1}  {:>9.1}",
            tile.index,
            tile.color,
            tile.origin.x,
            tile.origin.y,
            tile.size.width,
            tile.size.height
        );
    }
    out
}

// ── Tests ─────────────────────────────────────────────────────────────────────
