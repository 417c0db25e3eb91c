//! Scope emissions chart view
//!
//! Turns an [`EmissionsByScope`] record into a [`ChartView`]: either a pie
//! breakdown of the scopes with positive values, or the empty state when no
//! scope has anything to show. This is a pure function of its input and is
//! meant to be called fresh on every render.

use crate::format::{format_mass, whole_percent};
use crate::model::{DisplaySegment, EmissionsByScope, Scope};
use crate::palette::ColorToken;

/// Placeholder shown instead of a chart when no scope has a positive value.
pub const NO_DATA_MESSAGE: &str = "No emissions data available";

/// Collect the visible segments in scope order.
pub fn derive_segments(emissions: &EmissionsByScope) -> Vec<DisplaySegment> {
    Scope::ALL
        .iter()
        .filter_map(|scope| {
            emissions
                .displayable(*scope)
                .map(|v| DisplaySegment::for_scope(*scope, v))
        })
        .collect()
}

/// Build the full view for one render.
pub fn build_chart(emissions: &EmissionsByScope) -> ChartView {
    let segments = derive_segments(emissions);
    if segments.is_empty() {
        log::debug!("no positive scope values; rendering empty state");
        return ChartView::Empty {
            message: NO_DATA_MESSAGE,
        };
    }

    // shares are taken relative to the largest value so the sum stays
    // finite for inputs near f64::MAX
    let max = segments.iter().map(|s| s.value_kg).fold(0.0, f64::max);
    let scaled_total: f64 = segments.iter().map(|s| s.value_kg / max).sum();
    let total: f64 = segments.iter().map(|s| s.value_kg).sum();

    let segments: Vec<PieSegment> = segments
        .into_iter()
        .map(|segment| {
            let proportion = (segment.value_kg / max) / scaled_total;
            PieSegment {
                proportion,
                percent_label: whole_percent(proportion),
                tooltip: format!("{}: {}", segment.label, format_mass(segment.value_kg)),
                segment,
            }
        })
        .collect();

    log::debug!(
        "built chart with {} segment(s), total {} kg",
        segments.len(),
        total
    );
    ChartView::Pie(PieChart {
        segments,
        total_kg: total,
    })
}

#[derive(Debug, Clone, PartialEq)]
pub enum ChartView {
    /// Nothing to draw; only the message is shown
    Empty { message: &'static str },
    Pie(PieChart),
}

impl ChartView {
    pub fn is_empty(&self) -> bool {
        matches!(self, ChartView::Empty { .. })
    }

    /// Visible segments; empty for the placeholder view.
    pub fn segments(&self) -> &[PieSegment] {
        match self {
            ChartView::Empty { .. } => &[],
            ChartView::Pie(pie) => &pie.segments,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PieChart {
    pub segments: Vec<PieSegment>,
    /// Sum of included values only; may be infinite for values near
    /// `f64::MAX`, proportions are unaffected
    pub total_kg: f64,
}

impl PieChart {
    pub fn legend(&self) -> Vec<LegendEntry> {
        self.segments
            .iter()
            .map(|s| LegendEntry {
                scope: s.segment.scope,
                name: s.segment.label,
                color: s.segment.color,
            })
            .collect()
    }

    /// Sum of the displayed (rounded) percentages
    pub fn percent_total(&self) -> u32 {
        self.segments.iter().map(|s| s.percent_label).sum()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PieSegment {
    pub segment: DisplaySegment,
    /// Unrounded share of the included total, used for layout
    pub proportion: f64,
    /// Whole percent shown on the wedge
    pub percent_label: u32,
    pub tooltip: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    pub scope: Scope,
    pub name: &'static str,
    pub color: ColorToken,
}
