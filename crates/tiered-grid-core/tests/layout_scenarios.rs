//! Integration tests for the tiered grid through the public API.
//!
//! These exercise the pattern model, the resolver, the size estimator and the
//! engine's cache together, using the concrete default-pattern scenarios at a
//! container width of 300 (one unit = 100).

use tiered_grid_core::{
    estimate_size, expand, resolve_all, resolve_position, Alignment, GridError, Layer, LayerKind,
    Pattern, Point, ProposedSize, Rect, Size, Subview, TieredGridLayout, TilePlacement, UnitPoint,
};

const WIDTH: f64 = 300.0;

fn tile(x: f64, y: f64, w: f64, h: f64) -> TilePlacement {
    TilePlacement {
        position: Point::new(x, y),
        size: Size::new(w, h),
    }
}

/// The twelve-layer pattern of the sample app: mirrored mediums and two
/// large tiles per cycle.
fn showcase_pattern() -> Pattern {
    let left = LayerKind::MediumWithTwoSmall {
        medium_on_left: true,
    };
    let right = LayerKind::MediumWithTwoSmall {
        medium_on_left: false,
    };
    Pattern::new(vec![
        LayerKind::ThreeSmall,
        left,
        LayerKind::ThreeSmall,
        right,
        LayerKind::ThreeSmall,
        LayerKind::OneLarge,
        LayerKind::ThreeSmall,
        right,
        LayerKind::ThreeSmall,
        left,
        LayerKind::ThreeSmall,
        LayerKind::OneLarge,
    ])
    .expect("showcase pattern is non-empty")
}

/// Records what the engine asked it to do.
#[derive(Debug, Default)]
struct RecordingSubview {
    placed: Vec<(Point, UnitPoint, Size)>,
}

impl Subview for RecordingSubview {
    fn place(&mut self, position: Point, anchor: UnitPoint, proposal: Size) {
        self.placed.push((position, anchor, proposal));
    }
}

// ── Concrete scenarios ────────────────────────────────────────────────────────

#[test]
fn test_single_item_is_small_tile_at_origin() {
    let expanded = Pattern::default().expand();
    assert_eq!(
        resolve_all(1, WIDTH, &expanded),
        vec![tile(0.0, 0.0, 100.0, 100.0)]
    );
}

#[test]
fn test_full_set_medium_and_large_slots() {
    let expanded = Pattern::default().expand();
    let positions = resolve_all(10, WIDTH, &expanded);

    assert_eq!(positions[3], tile(0.0, 100.0, 200.0, 200.0));
    assert_eq!(positions[9], tile(0.0, 400.0, 300.0, 300.0));
}

#[test]
fn test_eleventh_item_starts_second_cycle() {
    let expanded = Pattern::default().expand();
    let positions = resolve_all(11, WIDTH, &expanded);
    assert_eq!(positions[10], tile(0.0, 700.0, 100.0, 100.0));
}

#[test]
fn test_estimate_for_four_items_is_three_units() {
    let expanded = Pattern::default().expand();
    assert_eq!(estimate_size(4, WIDTH, &expanded), Size::new(300.0, 300.0));
}

#[test]
fn test_estimate_for_zero_items_is_zero_for_any_width() {
    let expanded = Pattern::default().expand();
    for width in [0.0, 90.0, WIDTH, 1000.0] {
        assert_eq!(estimate_size(0, width, &expanded), Size::ZERO);
    }
}

#[test]
fn test_expand_of_empty_layer_list_is_invalid_pattern() {
    let layers: Vec<Layer> = Vec::new();
    assert_eq!(expand(&layers), Err(GridError::InvalidPattern));
}

// ── Properties ────────────────────────────────────────────────────────────────

#[test]
fn test_resolve_all_length_matches_count_only_when_inputs_positive() {
    let expanded = showcase_pattern().expand();
    for count in [0usize, 1, 7, 36, 80] {
        for width in [0.0, -1.0, 150.0, WIDTH] {
            let expected = if width > 0.0 { count } else { 0 };
            assert_eq!(
                resolve_all(count, width, &expanded).len(),
                expected,
                "count={count} width={width}"
            );
        }
    }
}

#[test]
fn test_showcase_pattern_cycle_repeats_downwards() {
    let expanded = showcase_pattern().expand();
    let set_size = expanded.set_size();
    let cycle = f64::from(expanded.cycle_height_units()) * 100.0;
    let count = set_size * 3;

    for i in 0..set_size {
        let first = resolve_position(i, count, WIDTH, &expanded).expect("in range");
        for k in 1..3 {
            let later = resolve_position(i + k * set_size, count, WIDTH, &expanded)
                .expect("in range");
            assert_eq!(later.size, first.size);
            assert_eq!(
                later.position,
                Point::new(first.position.x, first.position.y + k as f64 * cycle)
            );
        }
    }
}

#[test]
fn test_showcase_pattern_tiles_never_overlap_within_a_cycle() {
    let expanded = showcase_pattern().expand();
    let tiles = resolve_all(expanded.set_size(), WIDTH, &expanded);

    for (i, a) in tiles.iter().enumerate() {
        for b in &tiles[i + 1..] {
            let overlaps = a.position.x < b.position.x + b.size.width
                && b.position.x < a.position.x + a.size.width
                && a.position.y < b.position.y + b.size.height
                && b.position.y < a.position.y + a.size.height;
            assert!(!overlaps, "{a:?} overlaps {b:?}");
        }
    }
}

#[test]
fn test_estimate_is_monotonic_for_showcase_pattern() {
    let expanded = showcase_pattern().expand();
    let heights: Vec<f64> = (0..100)
        .map(|n| estimate_size(n, WIDTH, &expanded).height)
        .collect();
    assert!(heights.windows(2).all(|w| w[1] >= w[0]));
}

// ── Engine ────────────────────────────────────────────────────────────────────

#[test]
fn test_engine_measure_and_place_pass() {
    let mut grid = TieredGridLayout::new(Pattern::default(), Alignment::TopLeading);
    let mut subviews: Vec<RecordingSubview> = (0..11).map(|_| RecordingSubview::default()).collect();

    let size = grid.size_that_fits(ProposedSize::width(WIDTH), subviews.len());
    grid.place_subviews(Rect::from_size(size), &mut subviews);

    assert_eq!(size, Size::new(300.0, 800.0));
    assert!(subviews.iter().all(|s| s.placed.len() == 1));
    assert_eq!(
        subviews[9].placed[0],
        (
            Point::new(0.0, 400.0),
            UnitPoint::TOP_LEADING,
            Size::new(300.0, 300.0)
        )
    );
    assert_eq!(subviews[10].placed[0].0, Point::new(0.0, 700.0));
}

#[test]
fn test_engine_results_match_cache_free_computation_across_key_changes() {
    let mut grid = TieredGridLayout::new(showcase_pattern(), Alignment::Center);
    let passes = [(300.0, 5), (300.0, 5), (240.0, 5), (240.0, 30), (300.0, 30), (300.0, 5)];

    for (width, count) in passes {
        let size = grid.size_that_fits(ProposedSize::width(width), count);
        let items = grid.placements(Rect::from_size(size), count);

        let mut fresh = TieredGridLayout::new(showcase_pattern(), Alignment::Center);
        assert_eq!(size, fresh.size_that_fits(ProposedSize::width(width), count));
        assert_eq!(items, fresh.placements(Rect::from_size(size), count));
    }
}

#[test]
fn test_engines_do_not_share_cache_state() {
    let mut a = TieredGridLayout::default();
    let b = TieredGridLayout::default();

    a.size_that_fits(ProposedSize::width(WIDTH), 4);

    assert!(!a.cache().is_empty());
    assert!(b.cache().is_empty());
}
