//! Alignment to anchor-point mapping.
//!
//! Hosts describe how an item sits inside its tile with one of nine compass
//! alignments.  Placement APIs usually want that expressed as a point in the
//! unit square instead: `(0, 0)` is the top-leading corner, `(1, 1)` the
//! bottom-trailing corner.
//!
//! Names that do not match any of the nine alignments resolve to
//! [`DEFAULT_ANCHOR`], the center.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::domain::geometry::{Point, Size};

/// A point in the unit square, used as a fractional offset inside a box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct UnitPoint {
    pub x: f64,
    pub y: f64,
}

impl UnitPoint {
    pub const TOP_LEADING: UnitPoint = UnitPoint::new(0.0, 0.0);
    pub const TOP: UnitPoint = UnitPoint::new(0.5, 0.0);
    pub const TOP_TRAILING: UnitPoint = UnitPoint::new(1.0, 0.0);
    pub const LEADING: UnitPoint = UnitPoint::new(0.0, 0.5);
    pub const CENTER: UnitPoint = UnitPoint::new(0.5, 0.5);
    pub const TRAILING: UnitPoint = UnitPoint::new(1.0, 0.5);
    pub const BOTTOM_LEADING: UnitPoint = UnitPoint::new(0.0, 1.0);
    pub const BOTTOM: UnitPoint = UnitPoint::new(0.5, 1.0);
    pub const BOTTOM_TRAILING: UnitPoint = UnitPoint::new(1.0, 1.0);

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Offset of this anchor from the top-left corner of a box of `size`.
    pub fn offset_within(&self, size: Size) -> Point {
        Point::new(size.width * self.x, size.height * self.y)
    }
}

/// Anchor used when an alignment name is not recognised.
pub const DEFAULT_ANCHOR: UnitPoint = UnitPoint::CENTER;

/// How an item is aligned within its tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Alignment {
    TopLeading,
    Top,
    TopTrailing,
    Leading,
    #[default]
    Center,
    Trailing,
    BottomLeading,
    Bottom,
    BottomTrailing,
}

impl Alignment {
    /// All nine alignments, row by row from the top-leading corner.
    pub const ALL: [Alignment; 9] = [
        Alignment::TopLeading,
        Alignment::Top,
        Alignment::TopTrailing,
        Alignment::Leading,
        Alignment::Center,
        Alignment::Trailing,
        Alignment::BottomLeading,
        Alignment::Bottom,
        Alignment::BottomTrailing,
    ];

    /// Parses an alignment name.
    ///
    /// Matching ignores case and `_`, `-` or space separators, so
    /// `"top_leading"`, `"top-leading"` and `"topLeading"` are all accepted.
    /// Returns `None` for anything else.
    pub fn from_name(name: &str) -> Option<Self> {
        let normalized: String = name
            .chars()
            .filter(|c| !matches!(c, '_' | '-' | ' '))
            .flat_map(char::to_lowercase)
            .collect();

        Self::ALL
            .into_iter()
            .find(|a| a.name().replace('_', "") == normalized)
    }

    /// The canonical snake_case name.
    pub const fn name(self) -> &'static str {
        match self {
            Alignment::TopLeading => "top_leading",
            Alignment::Top => "top",
            Alignment::TopTrailing => "top_trailing",
            Alignment::Leading => "leading",
            Alignment::Center => "center",
            Alignment::Trailing => "trailing",
            Alignment::BottomLeading => "bottom_leading",
            Alignment::Bottom => "bottom",
            Alignment::BottomTrailing => "bottom_trailing",
        }
    }
}

impl fmt::Display for Alignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Maps an alignment to its anchor point.
pub const fn anchor_for(alignment: Alignment) -> UnitPoint {
    match alignment {
        Alignment::TopLeading => UnitPoint::TOP_LEADING,
        Alignment::Top => UnitPoint::TOP,
        Alignment::TopTrailing => UnitPoint::TOP_TRAILING,
        Alignment::Leading => UnitPoint::LEADING,
        Alignment::Center => UnitPoint::CENTER,
        Alignment::Trailing => UnitPoint::TRAILING,
        Alignment::BottomLeading => UnitPoint::BOTTOM_LEADING,
        Alignment::Bottom => UnitPoint::BOTTOM,
        Alignment::BottomTrailing => UnitPoint::BOTTOM_TRAILING,
    }
}

/// Maps an alignment name to its anchor point, falling back to
/// [`DEFAULT_ANCHOR`] for unrecognised names.
pub fn anchor_for_name(name: &str) -> UnitPoint {
    match Alignment::from_name(name) {
        Some(alignment) => anchor_for(alignment),
        None => {
            warn!(alignment = name, "unrecognised alignment, using center anchor");
            DEFAULT_ANCHOR
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
