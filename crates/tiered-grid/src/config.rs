//! TOML configuration for the preview tool.
//!
//! Every field has a serde default, so an empty file (or no file at all) is a
//! valid configuration that previews five items of the default pattern in a
//! 300-wide container.
//!
//! ```toml
//! [grid]
//! items = 12
//! width = 390.0
//! min_height = 0.0
//! alignment = "top_leading"
//!
//! [pattern]
//! layers = [
//!     "three_small",
//!     { medium_with_two_small = { medium_on_left = false } },
//!     "one_large",
//! ]
//! ```
//!
//! `[pattern]` may name a built-in `preset` instead of listing `layers`; an
//! explicit layer list wins when both are present.

use std::path::{Path, PathBuf};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tiered_grid_core::{Alignment, LayerKind, Pattern};
use tracing::warn;

/// Error type for configuration file operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A file system I/O error occurred.
    #[error("I/O error reading config at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The TOML content could not be parsed.
    #[error("failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),
}

// ── Config schema types ───────────────────────────────────────────────────────

/// Top-level preview configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PreviewConfig {
    #[serde(default)]
    pub grid: GridConfig,
    #[serde(default)]
    pub pattern: PatternConfig,
}

/// Container and item settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GridConfig {
    /// Number of items to lay out.
    #[serde(default = "default_items")]
    pub items: usize,
    /// Proposed container width.
    #[serde(default = "default_width")]
    pub width: f64,
    /// Proposed container height; the layout never reports less than this.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_height: Option<f64>,
    /// Alignment name, e.g. `"center"` or `"top_leading"`.  Unknown names
    /// fall back to center.
    #[serde(default = "default_alignment")]
    pub alignment: String,
}

/// Which pattern to lay items out with.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PatternConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preset: Option<PatternPreset>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layers: Option<Pattern>,
}

/// Built-in patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum PatternPreset {
    /// Small row, medium-left block, small row, large tile.
    #[default]
    Default,
    /// Twelve layers with mirrored mediums and two large tiles per cycle.
    Showcase,
}

// ── Default helpers ───────────────────────────────────────────────────────────

fn default_items() -> usize {
    5
}
fn default_width() -> f64 {
    300.0
}
fn default_alignment() -> String {
    Alignment::default().name().to_string()
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            items: default_items(),
            width: default_width(),
            min_height: None,
            alignment: default_alignment(),
        }
    }
}

impl GridConfig {
    /// Resolves the configured alignment name, falling back to the default
    /// alignment for unknown names.
    pub fn alignment(&self) -> Alignment {
        Alignment::from_name(&self.alignment).unwrap_or_else(|| {
            warn!(
                alignment = %self.alignment,
                fallback = %Alignment::default(),
                "unrecognised alignment in config"
            );
            Alignment::default()
        })
    }
}

impl PatternConfig {
    /// The pattern to use: explicit layers, else the preset, else the default.
    pub fn resolve(&self) -> Pattern {
        match (&self.layers, self.preset) {
            (Some(layers), _) => layers.clone(),
            (None, Some(preset)) => preset.pattern(),
            (None, None) => Pattern::default(),
        }
    }
}

impl PatternPreset {
    pub fn pattern(self) -> Pattern {
        match self {
            PatternPreset::Default => Pattern::default(),
            PatternPreset::Showcase => showcase_pattern(),
        }
    }
}

fn showcase_pattern() -> Pattern {
    let left = LayerKind::MediumWithTwoSmall {
        medium_on_left: true,
    };
    let right = LayerKind::MediumWithTwoSmall {
        medium_on_left: false,
    };
    let half = |first, second| {
        [
            LayerKind::ThreeSmall,
            first,
            LayerKind::ThreeSmall,
            second,
            LayerKind::ThreeSmall,
            LayerKind::OneLarge,
        ]
    };

    let layers: Vec<LayerKind> = half(left, right)
        .into_iter()
        .chain(half(right, left))
        .collect();
    match Pattern::new(layers) {
        Ok(pattern) => pattern,
        // Twelve layers are always present.
        Err(_) => Pattern::default(),
    }
}

// ── Loading ───────────────────────────────────────────────────────────────────

/// Parses a configuration from TOML text.
///
/// # Errors
///
/// Returns [`ConfigError::Parse`] if the TOML is malformed or describes an
/// invalid pattern (such as an empty layer list).
pub fn parse_config(content: &str) -> Result<PreviewConfig, ConfigError> {
    Ok(toml::from_str(content)?)
}

/// Loads the configuration at `path`, or the defaults when no path is given.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] if the file cannot be read and
/// [`ConfigError::Parse`] if its content is invalid.
pub fn load_config(path: Option<&Path>) -> Result<PreviewConfig, ConfigError> {
    let Some(path) = path else {
        return Ok(PreviewConfig::default());
    };
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_config(&content)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
