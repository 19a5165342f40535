//! tiered-grid preview tool entry point.
//!
//! Runs one measure + place pass of the tiered grid layout for a row of
//! colored tiles and prints the container size and every tile's frame.
//!
//! # Usage
//!
//! ```text
//! tiered-grid [OPTIONS]
//!
//! Options:
//!   --config     <PATH>   TOML config file
//!   --items      <N>      Number of items [config default: 5]
//!   --width      <W>      Proposed container width [config default: 300]
//!   --min-height <H>      Proposed container height (lower bound)
//!   --alignment  <NAME>   Alignment within each tile, e.g. top_leading
//!   --preset     <NAME>   Built-in pattern: default | showcase
//!   --format     <FMT>    Output format: table | json [default: table]
//! ```
//!
//! Command-line values take precedence over the config file, which takes
//! precedence over built-in defaults.  The config path can also be given
//! through `TIERED_GRID_CONFIG`.
//!
//! Logs go to stderr and are filtered by `RUST_LOG` (default `info`), so the
//! printed preview on stdout stays machine-readable.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use tiered_grid::config::{load_config, PatternPreset, PreviewConfig};
use tiered_grid::preview::{build_preview, render_table, PreviewRequest};

// ── CLI argument definitions ──────────────────────────────────────────────────

/// How the preview is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
enum OutputFormat {
    #[default]
    Table,
    Json,
}

/// Tiered grid layout preview.
#[derive(Debug, Parser)]
#[command(
    name = "tiered-grid",
    about = "Preview a tiered pattern grid layout for a number of items",
    version
)]
struct Cli {
    /// Path to a TOML config file.
    #[arg(long, env = "TIERED_GRID_CONFIG")]
    config: Option<PathBuf>,

    /// Number of items to lay out.
    #[arg(long)]
    items: Option<usize>,

    /// Proposed container width.
    #[arg(long)]
    width: Option<f64>,

    /// Proposed container height; the reported height never goes below it.
    #[arg(long)]
    min_height: Option<f64>,

    /// Alignment of each item within its tile.  Unknown names fall back to
    /// center.
    #[arg(long)]
    alignment: Option<String>,

    /// Built-in pattern to use instead of the configured one.
    #[arg(long, value_enum)]
    preset: Option<PatternPreset>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,
}

impl Cli {
    /// Layers the command-line overrides on top of `config`.
    fn into_request(self, mut config: PreviewConfig) -> PreviewRequest {
        if let Some(items) = self.items {
            config.grid.items = items;
        }
        if let Some(width) = self.width {
            config.grid.width = width;
        }
        if self.min_height.is_some() {
            config.grid.min_height = self.min_height;
        }
        if let Some(alignment) = self.alignment {
            config.grid.alignment = alignment;
        }
        if let Some(preset) = self.preset {
            config.pattern.preset = Some(preset);
            config.pattern.layers = None;
        }

        PreviewRequest {
            items: config.grid.items,
            width: Some(config.grid.width),
            min_height: config.grid.min_height,
            alignment: config.grid.alignment(),
            pattern: config.pattern.resolve(),
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let format = cli.format;

    let config = load_config(cli.config.as_deref()).with_context(|| {
        format!(
            "failed to load config from {}",
            cli.config
                .as_deref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "<defaults>".to_string())
        )
    })?;

    let request = cli.into_request(config);
    info!(
        items = request.items,
        width = ?request.width,
        alignment = %request.alignment,
        layers = request.pattern.layers().len(),
        "running preview"
    );

    let preview = build_preview(&request);
    match format {
        OutputFormat::Table => print!("{}", render_table(&preview)),
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&preview)
                .context("failed to serialize preview as JSON")?;
            println!("{json}");
        }
    }
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
