//! The tiered grid layout engine.
//!
//! [`TieredGridLayout`] is what a host layout system holds on to.  Each layout
//! pass it first asks for the container size ([`TieredGridLayout::size_that_fits`])
//! and then, when children need positioning, for the per-item placements
//! ([`TieredGridLayout::placements`] or [`TieredGridLayout::place_subviews`]).
//!
//! The pattern is expanded once when the engine is built.  Size estimates and
//! tile placements go through the engine's [`PlacementCache`], so a measure
//! pass and a place pass with the same width and item count compute each
//! result once.  The alignment anchor is applied after the cache lookup, so
//! changing alignment never invalidates cached geometry.

use serde::Serialize;
use tracing::{debug, trace};

use crate::domain::anchor::{anchor_for, Alignment, UnitPoint};
use crate::domain::geometry::{
    estimate_size, resolve_all, Point, Rect, Size, TilePlacement,
};
use crate::domain::pattern::{ExpandedPattern, Pattern};
use crate::layout::cache::PlacementCache;

/// The size a host proposes for the container.
///
/// `None` means "unspecified".  An unspecified width counts as zero, which
/// yields an empty layout.  The height is only ever used as a lower bound.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ProposedSize {
    pub width: Option<f64>,
    pub height: Option<f64>,
}

impl ProposedSize {
    /// Neither dimension specified.
    pub const UNSPECIFIED: ProposedSize = ProposedSize {
        width: None,
        height: None,
    };

    pub const fn new(width: Option<f64>, height: Option<f64>) -> Self {
        Self { width, height }
    }

    /// A proposal with only a width.
    pub const fn width(width: f64) -> Self {
        Self {
            width: Some(width),
            height: None,
        }
    }
}

/// One item's final placement, ready to hand to a host placement API.
///
/// `position` is the point inside the tile selected by `anchor`; placing the
/// item at `position` with that anchor and proposing `size` puts its box
/// exactly on the tile.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlacedItem {
    pub index: usize,
    pub position: Point,
    pub anchor: UnitPoint,
    pub size: Size,
}

/// A child view that can be positioned by the engine.
///
/// Hosts implement this for whatever their framework uses as a child handle.
#[cfg_attr(test, mockall::automock)]
pub trait Subview {
    /// Positions the subview so that its `anchor` point lies at `position`,
    /// proposing `proposal` as its size.
    fn place(&mut self, position: Point, anchor: UnitPoint, proposal: Size);
}

/// Tiered grid layout engine.
///
/// Owns its pattern, alignment and cache.  Every pass takes `&mut self`, so
/// one engine never serves two overlapping passes.
#[derive(Debug)]
pub struct TieredGridLayout {
    pattern: Pattern,
    expanded: ExpandedPattern,
    alignment: Alignment,
    cache: PlacementCache,
}

impl Default for TieredGridLayout {
    /// Default pattern, center alignment.
    fn default() -> Self {
        Self::new(Pattern::default(), Alignment::default())
    }
}

impl TieredGridLayout {
    /// Creates an engine for `pattern`, aligning items by `alignment`.
    pub fn new(pattern: Pattern, alignment: Alignment) -> Self {
        let expanded = pattern.expand();
        debug!(
            layers = pattern.layers().len(),
            slots = expanded.set_size(),
            cycle_height_units = expanded.cycle_height_units(),
            %alignment,
            "tiered grid layout created"
        );
        Self {
            pattern,
            expanded,
            alignment,
            cache: PlacementCache::new(),
        }
    }

    /// Replaces the alignment, keeping cached geometry.
    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// Replaces the pattern, re-expanding it and dropping all cached results.
    pub fn set_pattern(&mut self, pattern: Pattern) {
        self.expanded = pattern.expand();
        self.pattern = pattern;
        self.cache.invalidate();
    }

    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    pub fn expanded(&self) -> &ExpandedPattern {
        &self.expanded
    }

    pub fn alignment(&self) -> Alignment {
        self.alignment
    }

    /// The anchor applied to every placed item.
    pub fn anchor(&self) -> UnitPoint {
        anchor_for(self.alignment)
    }

    pub fn cache(&self) -> &PlacementCache {
        &self.cache
    }

    /// Measures the container for `item_count` items.
    ///
    /// The returned height is never below the proposed height (non-finite
    /// proposed heights are ignored).
    pub fn size_that_fits(&mut self, proposal: ProposedSize, item_count: usize) -> Size {
        let width = proposal.width.unwrap_or(0.0);
        let content = self.content_size(width, item_count);
        let min_height = proposal
            .height
            .filter(|h| h.is_finite())
            .unwrap_or(0.0);

        Size::new(content.width, content.height.max(min_height))
    }

    /// Computes the placement of every item in `0..item_count` inside `bounds`.
    ///
    /// Positions are offset by the bounds origin and by the alignment anchor
    /// within each tile.
    pub fn placements(&mut self, bounds: Rect, item_count: usize) -> Vec<PlacedItem> {
        let anchor = self.anchor();
        let origin = bounds.origin;

        self.tile_placements(bounds.width(), item_count)
            .iter()
            .enumerate()
            .map(|(index, tile)| {
                let offset = anchor.offset_within(tile.size);
                PlacedItem {
                    index,
                    position: Point::new(
                        origin.x + tile.position.x + offset.x,
                        origin.y + tile.position.y + offset.y,
                    ),
                    anchor,
                    size: tile.size,
                }
            })
            .collect()
    }

    /// Places each subview in `subviews` according to its index.
    pub fn place_subviews<S: Subview>(&mut self, bounds: Rect, subviews: &mut [S]) {
        let placements = self.placements(bounds, subviews.len());
        for (subview, item) in subviews.iter_mut().zip(&placements) {
            subview.place(item.position, item.anchor, item.size);
        }
    }

    // ── Private helpers ───────────────────────────────────────────────────────

    fn content_size(&mut self, width: f64, item_count: usize) -> Size {
        if !is_cacheable(width, item_count) {
            return Size::ZERO;
        }
        if let Some(size) = self.cache.size(width, item_count) {
            trace!(width, item_count, "size cache hit");
            return size;
        }

        let size = estimate_size(item_count, width, &self.expanded);
        debug!(width, item_count, height = size.height, "estimated grid size");
        self.cache.store_size(width, item_count, size);
        size
    }

    fn tile_placements(&mut self, width: f64, item_count: usize) -> &[TilePlacement] {
        if !is_cacheable(width, item_count) {
            return &[];
        }
        if self.cache.positions(width, item_count).is_some() {
            trace!(width, item_count, "placement cache hit");
        } else {
            let positions = resolve_all(item_count, width, &self.expanded);
            debug!(width, item_count, "resolved tile placements");
            self.cache.store_positions(width, item_count, positions);
        }
        self.cache.positions(width, item_count).unwrap_or(&[])
    }
}

/// Degenerate inputs produce empty results and are never cached.
fn is_cacheable(width: f64, item_count: usize) -> bool {
    item_count > 0 && width.is_finite() && width > 0.0
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::pattern::LayerKind;
    use mockall::predicate::eq;

    fn top_leading_grid() -> TieredGridLayout {
        TieredGridLayout::default().with_alignment(Alignment::TopLeading)
    }

    // ── size_that_fits ────────────────────────────────────────────────────────

    #[test]
    fn test_size_that_fits_for_four_items() {
        let mut grid = TieredGridLayout::default();
        let size = grid.size_that_fits(ProposedSize::width(300.0), 4);
        assert_eq!(size, Size::new(300.0, 300.0));
    }

    #[test]
    fn test_size_that_fits_unspecified_width_is_zero() {
        let mut grid = TieredGridLayout::default();
        assert_eq!(grid.size_that_fits(ProposedSize::UNSPECIFIED, 10), Size::ZERO);
        assert!(grid.cache().is_empty(), "degenerate passes must not be cached");
    }

    #[test]
    fn test_size_that_fits_never_below_proposed_height() {
        let mut grid = TieredGridLayout::default();

        let grown = grid.size_that_fits(ProposedSize::new(Some(300.0), Some(1000.0)), 4);
        assert_eq!(grown, Size::new(300.0, 1000.0));

        let content = grid.size_that_fits(ProposedSize::new(Some(300.0), Some(50.0)), 4);
        assert_eq!(content, Size::new(300.0, 300.0));
    }

    #[test]
    fn test_size_that_fits_ignores_infinite_proposed_height() {
        let mut grid = TieredGridLayout::default();
        let size = grid.size_that_fits(ProposedSize::new(Some(300.0), Some(f64::INFINITY)), 4);
        assert_eq!(size.height, 300.0);
    }

    #[test]
    fn test_size_that_fits_zero_items_uses_proposed_height_only() {
        let mut grid = TieredGridLayout::default();
        let size = grid.size_that_fits(ProposedSize::new(Some(300.0), Some(120.0)), 0);
        assert_eq!(size, Size::new(0.0, 120.0));
    }

    #[test]
    fn test_size_that_fits_populates_cache_for_key() {
        let mut grid = TieredGridLayout::default();
        grid.size_that_fits(ProposedSize::width(300.0), 11);

        assert_eq!(grid.cache().key(), Some((300.0, 11)));
        assert_eq!(grid.cache().size(300.0, 11), Some(Size::new(300.0, 800.0)));
    }

    // ── placements ────────────────────────────────────────────────────────────

    #[test]
    fn test_placements_top_leading_match_tile_geometry() {
        let mut grid = top_leading_grid();
        let items = grid.placements(Rect::from_size(Size::new(300.0, 800.0)), 11);

        assert_eq!(items.len(), 11);
        assert_eq!(items[3].position, Point::new(0.0, 100.0));
        assert_eq!(items[3].size, Size::new(200.0, 200.0));
        assert_eq!(items[9].position, Point::new(0.0, 400.0));
        assert_eq!(items[9].size, Size::new(300.0, 300.0));
        assert_eq!(items[10].position, Point::new(0.0, 700.0));
        assert!(items.iter().all(|i| i.anchor == UnitPoint::TOP_LEADING));
    }

    #[test]
    fn test_placements_center_offsets_by_half_tile() {
        let mut grid = TieredGridLayout::default();
        let items = grid.placements(Rect::from_size(Size::new(300.0, 300.0)), 4);

        assert_eq!(items[0].anchor, UnitPoint::CENTER);
        assert_eq!(items[0].position, Point::new(50.0, 50.0));
        assert_eq!(items[3].position, Point::new(100.0, 200.0));
    }

    #[test]
    fn test_placements_shift_by_bounds_origin() {
        let mut grid = top_leading_grid();
        let bounds = Rect::new(Point::new(10.0, 20.0), Size::new(300.0, 300.0));

        let items = grid.placements(bounds, 2);

        assert_eq!(items[0].position, Point::new(10.0, 20.0));
        assert_eq!(items[1].position, Point::new(110.0, 20.0));
    }

    #[test]
    fn test_placements_indices_are_contiguous() {
        let mut grid = TieredGridLayout::default();
        let items = grid.placements(Rect::from_size(Size::new(300.0, 0.0)), 17);
        assert!(items.iter().enumerate().all(|(i, item)| item.index == i));
    }

    #[test]
    fn test_placements_with_zero_width_is_empty() {
        let mut grid = TieredGridLayout::default();
        assert!(grid.placements(Rect::default(), 5).is_empty());
    }

    #[test]
    fn test_repeated_placements_are_identical_to_fresh_engine() {
        let bounds = Rect::from_size(Size::new(300.0, 800.0));
        let mut cached = TieredGridLayout::default();
        let first = cached.placements(bounds, 11);
        let second = cached.placements(bounds, 11);

        let fresh = TieredGridLayout::default().placements(bounds, 11);

        assert_eq!(first, second);
        assert_eq!(second, fresh);
    }

    #[test]
    fn test_placements_after_width_change_are_recomputed() {
        let mut grid = top_leading_grid();
        grid.placements(Rect::from_size(Size::new(300.0, 0.0)), 4);

        let wider = grid.placements(Rect::from_size(Size::new(600.0, 0.0)), 4);

        assert_eq!(wider[3].size, Size::new(400.0, 400.0));
        assert_eq!(grid.cache().key(), Some((600.0, 4)));
    }

    #[test]
    fn test_placements_after_count_change_are_recomputed() {
        let mut grid = top_leading_grid();
        let bounds = Rect::from_size(Size::new(300.0, 0.0));
        grid.placements(bounds, 4);

        let more = grid.placements(bounds, 11);

        assert_eq!(more.len(), 11);
        assert_eq!(more[10].position, Point::new(0.0, 700.0));
    }

    #[test]
    fn test_measure_then_place_share_one_cache_entry() {
        let mut grid = TieredGridLayout::default();
        let size = grid.size_that_fits(ProposedSize::width(300.0), 6);
        grid.placements(Rect::from_size(size), 6);

        assert_eq!(grid.cache().size(300.0, 6), Some(Size::new(300.0, 300.0)));
        assert_eq!(grid.cache().positions(300.0, 6).map(<[_]>::len), Some(6));
    }

    #[test]
    fn test_set_pattern_invalidates_cache_and_uses_new_slots() {
        let mut grid = top_leading_grid();
        let bounds = Rect::from_size(Size::new(300.0, 0.0));
        grid.placements(bounds, 2);

        grid.set_pattern(Pattern::new(vec![LayerKind::OneLarge]).unwrap());
        assert!(grid.cache().is_empty());

        let items = grid.placements(bounds, 2);
        assert_eq!(items[1].position, Point::new(0.0, 300.0));
        assert_eq!(items[1].size, Size::new(300.0, 300.0));
    }

    // ── place_subviews ────────────────────────────────────────────────────────

    #[test]
    fn test_place_subviews_places_each_subview_once_with_its_tile() {
        let mut grid = top_leading_grid();
        let expected = [
            (Point::new(0.0, 0.0), Size::new(100.0, 100.0)),
            (Point::new(100.0, 0.0), Size::new(100.0, 100.0)),
            (Point::new(200.0, 0.0), Size::new(100.0, 100.0)),
            (Point::new(0.0, 100.0), Size::new(200.0, 200.0)),
        ];
        let mut subviews: Vec<MockSubview> = expected
            .iter()
            .map(|&(position, size)| {
                let mut mock = MockSubview::new();
                mock.expect_place()
                    .with(eq(position), eq(UnitPoint::TOP_LEADING), eq(size))
                    .times(1)
                    .return_const(());
                mock
            })
            .collect();

        grid.place_subviews(Rect::from_size(Size::new(300.0, 300.0)), &mut subviews);
    }

    #[test]
    fn test_place_subviews_with_no_subviews_places_nothing() {
        let mut grid = TieredGridLayout::default();
        let mut subviews: Vec<MockSubview> = Vec::new();
        grid.place_subviews(Rect::from_size(Size::new(300.0, 0.0)), &mut subviews);
        assert!(grid.cache().is_empty());
    }

    #[test]
    fn test_place_subviews_with_zero_width_never_calls_place() {
        let mut grid = TieredGridLayout::default();
        let mut subviews: Vec<MockSubview> = (0..3)
            .map(|_| {
                let mut mock = MockSubview::new();
                mock.expect_place().times(0);
                mock
            })
            .collect();

        grid.place_subviews(Rect::default(), &mut subviews);
    }
}
