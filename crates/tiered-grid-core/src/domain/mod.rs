//! Domain entities for the tiered grid.
//!
//! This module contains pure geometry with no framework or I/O dependencies.
//! Every function here is a deterministic function of its inputs, which makes
//! the whole layer trivially testable and safe to call from any thread.
//!
//! # How the pieces fit together
//!
//! ```text
//! Pattern ──expand──▶ ExpandedPattern (slots in units, cycle height)
//!                          │
//!             width / 3 ───┼──▶ resolve_position / resolve_all ──▶ TilePlacement
//!                          └──▶ estimate_size                    ──▶ Size
//!
//! Alignment ──anchor_for──▶ UnitPoint
//! ```

/// Alignment → anchor point mapping.
pub mod anchor;

/// Index → absolute tile geometry, and total content size.
pub mod geometry;

/// Layer pattern model and its expansion into slots.
pub mod pattern;
