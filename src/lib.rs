//! Scopechart
//!
//! Emissions-by-scope charts for carbon accounting dashboards. Takes three
//! pre-computed emissions figures (scope 1, 2 and 3, in kilograms of
//! CO2-equivalent) and renders a proportional breakdown.
//!
//! # Features
//!
//! - **Pure derivation**: [`chart::build_chart`] turns a record into a view
//!   fresh on every call; zero and absent scopes are left out
//! - **Swappable surfaces**: SVG (with hover tooltips) and plain text behind
//!   the [`Renderer`] trait
//! - **Persisted selection**: [`store::PeriodStore`] keeps the selected
//!   reporting period with load-on-open, save-on-write semantics
//!
//! # Example
//!
//! ```
//! use scopechart::{ChartConfig, EmissionsByScope};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let renderer = scopechart::new_renderer(ChartConfig::default())?;
//! let out = renderer.render(&EmissionsByScope::new(100.0, 0.0, 300.0))?;
//! assert_eq!(out.segment_count, 2);
//! assert!(out.body.contains("75%"));
//! # Ok(())
//! # }
//! ```

use serde::Deserialize;

pub mod error;
pub use error::{Error, Result};

pub mod chart;
pub mod format;
pub mod model;
pub mod page;
pub mod palette;

// Layout, paint and output surfaces
pub mod rendering;

// Persisted UI state (selected reporting period)
pub mod store;

pub use chart::{build_chart, derive_segments, ChartView, NO_DATA_MESSAGE};
pub use model::{DisplaySegment, EmissionsByScope, Scope};
pub use palette::ColorToken;
pub use rendering::{OutputFormat, Rendered};

/// Smallest surface a chart can be laid out on.
pub const MIN_VIEWPORT: u32 = 120;

/// Configuration for a chart renderer
///
/// Defaults produce a 320×240 SVG with a title and percentage labels.
///
/// # Examples
///
/// ```
/// let cfg = scopechart::ChartConfig::default();
/// assert_eq!(cfg.viewport.width, 320);
/// assert!(cfg.show_percent_labels);
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    /// Surface dimensions
    pub viewport: Viewport,
    /// Output surface
    pub format: OutputFormat,
    /// Heading drawn above the chart, if any
    pub title: Option<String>,
    /// Whether to draw whole-percent labels on the slices
    pub show_percent_labels: bool,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            viewport: Viewport::default(),
            format: OutputFormat::Svg,
            title: Some("Emissions by scope".to_string()),
            show_percent_labels: true,
        }
    }
}

impl ChartConfig {
    /// Load a configuration from JSON; missing fields take their defaults.
    pub fn from_json(input: &str) -> Result<Self> {
        let cfg: ChartConfig = serde_json::from_str(input)
            .map_err(|e| Error::ConfigError(format!("malformed chart config: {}", e)))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<()> {
        let Viewport { width, height } = self.viewport;
        if width < MIN_VIEWPORT || height < MIN_VIEWPORT {
            return Err(Error::ConfigError(format!(
                "viewport {}x{} is smaller than the minimum {}x{}",
                width, height, MIN_VIEWPORT, MIN_VIEWPORT
            )));
        }
        Ok(())
    }
}

/// Viewport dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 320,
            height: 240,
        }
    }
}

/// A textual snapshot of a rendered chart
///
/// Produced by [`rendering::text::render_text`]; suitable for terminals and
/// textual tests.
#[derive(Debug, Clone)]
pub struct TextSnapshot {
    /// Chart title, empty when none was configured
    pub title: String,
    /// One row per visible scope, or the no-data placeholder
    pub text: String,
}

/// Core trait for chart surface implementations
///
/// Rendering holds no state between calls: each call derives the view from
/// the given record, so one renderer can serve many independent charts, from
/// several threads if needed.
pub trait Renderer: Send + Sync {
    /// Create a renderer with the given configuration
    fn new(config: ChartConfig) -> Result<Self>
    where
        Self: Sized;

    /// Output surface this renderer produces
    fn format(&self) -> OutputFormat;

    /// Render one emissions record
    fn render(&self, emissions: &EmissionsByScope) -> Result<Rendered>;
}

/// Create a renderer for the surface named in `config.format`.
pub fn new_renderer(config: ChartConfig) -> Result<Box<dyn Renderer>> {
    match config.format {
        OutputFormat::Svg => Ok(Box::new(rendering::svg::SvgRenderer::new(config)?)),
        OutputFormat::Text => Ok(Box::new(rendering::text::TextRenderer::new(config)?)),
    }
}
