//! tiered-grid library entry point.
//!
//! Re-exports the preview shell's modules so the binary entry point in
//! `main.rs` and the tests share the same module tree.
//!
//! - **`config`**  – TOML configuration: item count, width, alignment and the
//!   layer pattern to preview.
//! - **`preview`** – Drives one measure + place pass of the engine and renders
//!   the result as a table or JSON.

pub mod config;
pub mod preview;
