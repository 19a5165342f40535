//! Layer pattern model and pattern expansion.
//!
//! A [`Pattern`] is an ordered, non-empty list of [`Layer`]s.  Each layer is a
//! horizontal band three units wide holding one of three fixed tile
//! arrangements.  Expanding a pattern flattens it into the ordered list of
//! [`Slot`]s that one full cycle of the pattern provides; items are assigned
//! to slots in that order and the cycle repeats downwards forever.
//!
//! ```text
//! ThreeSmall          MediumWithTwoSmall{left}   OneLarge
//! ┌───┬───┬───┐       ┌───────┬───┐              ┌───────────┐
//! │ 0 │ 1 │ 2 │       │       │ 1 │              │           │
//! └───┴───┴───┘       │   0   ├───┤              │     0     │
//!                     │       │ 2 │              │           │
//!                     └───────┴───┘              └───────────┘
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when configuring a pattern.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    /// The pattern has no layers, so there is nothing to place items into.
    #[error("invalid pattern: a pattern needs at least one layer")]
    InvalidPattern,
}

/// The tile arrangement of a single layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayerKind {
    /// Three 1×1 tiles side by side.
    ThreeSmall,
    /// One 2×2 tile with two 1×1 tiles stacked beside it.
    MediumWithTwoSmall {
        /// `true` puts the 2×2 tile on the left, `false` mirrors it to the right.
        medium_on_left: bool,
    },
    /// A single 3×3 tile spanning the full width.
    OneLarge,
}

impl LayerKind {
    /// Height of the layer in units.
    pub const fn unit_height(self) -> u32 {
        match self {
            LayerKind::ThreeSmall => 1,
            LayerKind::MediumWithTwoSmall { .. } => 2,
            LayerKind::OneLarge => 3,
        }
    }

    /// Number of slots (and therefore items) the layer holds.
    pub const fn slot_count(self) -> usize {
        match self {
            LayerKind::ThreeSmall => 3,
            LayerKind::MediumWithTwoSmall { .. } => 3,
            LayerKind::OneLarge => 1,
        }
    }

    /// Appends this layer's slots, shifted down by `top` units, to `out`.
    ///
    /// The order within a layer is fixed: left to right for small tiles, and
    /// for the medium arrangement the 2×2 tile first, then the two small tiles
    /// top to bottom.
    fn push_slots(self, top: u32, out: &mut Vec<Slot>) {
        match self {
            LayerKind::ThreeSmall => {
                out.extend((0..3).map(|x| Slot::new(x, top, 1, 1)));
            }
            LayerKind::MediumWithTwoSmall { medium_on_left } => {
                let (medium_x, small_x) = if medium_on_left { (0, 2) } else { (1, 0) };
                out.push(Slot::new(medium_x, top, 2, 2));
                out.push(Slot::new(small_x, top, 1, 1));
                out.push(Slot::new(small_x, top + 1, 1, 1));
            }
            LayerKind::OneLarge => {
                out.push(Slot::new(0, top, 3, 3));
            }
        }
    }
}

/// One row-group of a pattern.
///
/// The unit height is always derived from the kind; there is no way to build a
/// `Layer` whose height disagrees with its arrangement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Layer {
    kind: LayerKind,
    unit_height: u32,
}

impl Layer {
    /// Creates a layer of the given kind.
    pub const fn new(kind: LayerKind) -> Self {
        Self {
            kind,
            unit_height: kind.unit_height(),
        }
    }

    pub fn kind(&self) -> LayerKind {
        self.kind
    }

    pub fn unit_height(&self) -> u32 {
        self.unit_height
    }
}

impl From<LayerKind> for Layer {
    fn from(kind: LayerKind) -> Self {
        Layer::new(kind)
    }
}

/// A relative tile rectangle produced by pattern expansion, in whole units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Slot {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Slot {
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Returns the bottommost unit row covered by this slot (exclusive).
    pub const fn bottom(&self) -> u32 {
        self.y + self.height
    }
}

/// The flattened form of a [`Pattern`]: one cycle worth of slots plus the
/// cycle's total height.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpandedPattern {
    slots: Vec<Slot>,
    cycle_height_units: u32,
}

impl ExpandedPattern {
    /// All slots of one cycle, in placement order.
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// Number of items one full cycle holds.
    pub fn set_size(&self) -> usize {
        self.slots.len()
    }

    /// Height of one full cycle in units.
    pub fn cycle_height_units(&self) -> u32 {
        self.cycle_height_units
    }

    /// Tallest extent, in units, reached by the first `remainder` slots of a
    /// cycle.
    ///
    /// This is the height a partially filled final cycle contributes.  It uses
    /// the maximum `y + height` rather than the last slot's bottom because a
    /// later slot can end above an earlier one (the small tiles beside a
    /// medium tile end before the medium tile does).
    pub fn partial_extent_units(&self, remainder: usize) -> u32 {
        let end = remainder.min(self.slots.len());
        self.slots[..end]
            .iter()
            .map(Slot::bottom)
            .max()
            .unwrap_or(0)
    }
}

/// Flattens a layer sequence into its ordered slot list.
///
/// Slot order follows layer order, then each kind's fixed internal order.
/// The output holds exactly `sum(slot_count)` slots and the cycle height is
/// `sum(unit_height)`.
///
/// # Errors
///
/// Returns [`GridError::InvalidPattern`] if `layers` is empty.
pub fn expand(layers: &[Layer]) -> Result<ExpandedPattern, GridError> {
    if layers.is_empty() {
        return Err(GridError::InvalidPattern);
    }
    Ok(expand_layers(layers))
}

fn expand_layers(layers: &[Layer]) -> ExpandedPattern {
    let capacity = layers.iter().map(|l| l.kind.slot_count()).sum();
    let mut slots = Vec::with_capacity(capacity);
    let mut top = 0;
    for layer in layers {
        layer.kind.push_slots(top, &mut slots);
        top += layer.unit_height;
    }

    ExpandedPattern {
        slots,
        cycle_height_units: top,
    }
}

/// An immutable, non-empty sequence of layers.
///
/// Serializes as the plain list of layer kinds, e.g. in TOML:
///
/// ```toml
/// layers = ["three_small", { medium_with_two_small = { medium_on_left = false } }, "one_large"]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<LayerKind>", into = "Vec<LayerKind>")]
pub struct Pattern {
    layers: Vec<Layer>,
}

impl Pattern {
    /// Builds a pattern from layer kinds.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidPattern`] if `kinds` is empty.
    pub fn new(kinds: Vec<LayerKind>) -> Result<Self, GridError> {
        Self::from_layers(kinds.into_iter().map(Layer::new).collect())
    }

    /// Builds a pattern from already-constructed layers.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidPattern`] if `layers` is empty.
    pub fn from_layers(layers: Vec<Layer>) -> Result<Self, GridError> {
        if layers.is_empty() {
            return Err(GridError::InvalidPattern);
        }
        Ok(Self { layers })
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// Expands this pattern into its slot list.
    ///
    /// Infallible: a `Pattern` can only be built with at least one layer.
    pub fn expand(&self) -> ExpandedPattern {
        expand_layers(&self.layers)
    }
}

impl Default for Pattern {
    /// `[ThreeSmall, MediumWithTwoSmall(left), ThreeSmall, OneLarge]`: ten
    /// slots, seven units tall.
    fn default() -> Self {
        Self {
            layers: vec![
                Layer::new(LayerKind::ThreeSmall),
                Layer::new(LayerKind::MediumWithTwoSmall {
                    medium_on_left: true,
                }),
                Layer::new(LayerKind::ThreeSmall),
                Layer::new(LayerKind::OneLarge),
            ],
        }
    }
}

impl TryFrom<Vec<LayerKind>> for Pattern {
    type Error = GridError;

    fn try_from(kinds: Vec<LayerKind>) -> Result<Self, Self::Error> {
        Pattern::new(kinds)
    }
}

impl From<Pattern> for Vec<LayerKind> {
    fn from(pattern: Pattern) -> Self {
        pattern.layers.into_iter().map(|l| l.kind).collect()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
