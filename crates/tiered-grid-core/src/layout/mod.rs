//! Layout-pass shell around the pure domain functions.
//!
//! A host layout system typically measures a container and then places its
//! children, often several times in a row with the same inputs.  This layer
//! keeps the results of the last pass in a [`cache::PlacementCache`] owned by
//! a single [`engine::TieredGridLayout`] so repeated passes are free, and it
//! exposes the [`engine::Subview`] trait as the only point where placement
//! results leave the crate.
//!
//! Nothing in here is shared between engine instances: two grids on screen
//! are two `TieredGridLayout` values with two independent caches.

/// Result cache keyed by `(width, item_count)`.
pub mod cache;

/// The layout engine a host drives once per pass.
pub mod engine;
