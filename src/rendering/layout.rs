/// Geometry for the pie, its labels and the legend

use std::f64::consts::TAU;

use crate::chart::PieChart;
use crate::model::Scope;
use crate::Viewport;

/// Height reserved at the top of the surface for the chart title.
pub const TITLE_HEIGHT: u32 = 32;
const PIE_PADDING: f64 = 12.0;
/// Share of the width given to the pie; the legend takes the rest.
const PIE_AREA_SHARE: f64 = 0.6;
/// Percent labels sit at this fraction of the radius.
const LABEL_RADIUS_SHARE: f64 = 0.6;
const LEGEND_ROW_HEIGHT: u32 = 20;
const LEGEND_SWATCH: u32 = 12;

#[derive(Debug, Clone, PartialEq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// One wedge. Angles are radians measured clockwise from 12 o'clock.
#[derive(Debug, Clone, PartialEq)]
pub struct WedgeLayout {
    pub scope: Scope,
    pub start_angle: f64,
    pub end_angle: f64,
    pub label_anchor: Point,
}

impl WedgeLayout {
    pub fn sweep(&self) -> f64 {
        self.end_angle - self.start_angle
    }

    /// A wedge that covers the whole circle cannot be drawn as an arc.
    pub fn is_full_circle(&self) -> bool {
        self.sweep() >= TAU - 1e-9
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LegendRow {
    pub scope: Scope,
    pub swatch: Rect,
    pub text_origin: Point,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartLayout {
    pub center: Point,
    pub radius: f64,
    pub wedges: Vec<WedgeLayout>,
    pub legend: Vec<LegendRow>,
}

impl ChartLayout {
    /// Point on the pie's rim at `angle`.
    pub fn rim_point(&self, angle: f64) -> Point {
        polar(self.center, self.radius, angle)
    }
}

pub(crate) fn polar(center: Point, radius: f64, angle: f64) -> Point {
    Point {
        x: center.x + radius * angle.sin(),
        y: center.y - radius * angle.cos(),
    }
}

/// Lay out a non-empty pie inside the viewport.
/// - Pie on the left, centred vertically below the title
/// - Wedges in segment order, clockwise from the top, sized by the unrounded proportion
/// - Legend rows stacked on the right
pub fn layout_chart(pie: &PieChart, viewport: Viewport) -> ChartLayout {
    let pie_width = viewport.width as f64 * PIE_AREA_SHARE;
    let body_height = viewport.height.saturating_sub(TITLE_HEIGHT) as f64;
    let center = Point {
        x: pie_width / 2.0,
        y: TITLE_HEIGHT as f64 + body_height / 2.0,
    };
    let radius = (pie_width.min(body_height) / 2.0 - PIE_PADDING).max(1.0);

    let mut wedges = Vec::with_capacity(pie.segments.len());
    let mut angle = 0.0;
    let last = pie.segments.len().saturating_sub(1);
    for (i, s) in pie.segments.iter().enumerate() {
        // close the circle exactly on the last wedge
        let end = if i == last { TAU } else { angle + s.proportion * TAU };
        let mid = (angle + end) / 2.0;
        wedges.push(WedgeLayout {
            scope: s.segment.scope,
            start_angle: angle,
            end_angle: end,
            label_anchor: polar(center, radius * LABEL_RADIUS_SHARE, mid),
        });
        angle = end;
    }

    let legend_x = pie_width.round() as i32 + 8;
    let mut y = TITLE_HEIGHT + 16;
    let mut legend = Vec::with_capacity(pie.segments.len());
    for s in &pie.segments {
        legend.push(LegendRow {
            scope: s.segment.scope,
            swatch: Rect {
                x: legend_x,
                y: y as i32,
                width: LEGEND_SWATCH,
                height: LEGEND_SWATCH,
            },
            text_origin: Point {
                x: (legend_x + LEGEND_SWATCH as i32 + 6) as f64,
                y: (y + LEGEND_SWATCH - 1) as f64,
            },
        });
        y += LEGEND_ROW_HEIGHT;
    }

    ChartLayout {
        center,
        radius,
        wedges,
        legend,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::{build_chart, ChartView};
    use crate::EmissionsByScope;

    fn pie(e: EmissionsByScope) -> PieChart {
        match build_chart(&e) {
            ChartView::Pie(p) => p,
            ChartView::Empty { .. } => panic!("expected pie"),
        }
    }

    #[test]
    fn wedges_cover_circle_in_proportion() {
        let p = pie(EmissionsByScope::new(100.0, 0.0, 300.0));
        let l = layout_chart(&p, Viewport::default());
        assert_eq!(l.wedges.len(), 2);
        assert!((l.wedges[0].sweep() - TAU * 0.25).abs() < 1e-9);
        assert!((l.wedges[1].sweep() - TAU * 0.75).abs() < 1e-9);
        assert_eq!(l.wedges[0].start_angle, 0.0);
        assert_eq!(l.wedges[1].end_angle, TAU);
    }

    #[test]
    fn huge_values_split_circle_evenly() {
        let p = pie(EmissionsByScope::new(1e308, 1e308, 1e308));
        let l = layout_chart(&p, Viewport::default());
        for w in &l.wedges {
            assert!((w.sweep() - TAU / 3.0).abs() < 1e-9);
            assert!(!w.is_full_circle());
        }
    }

    #[test]
    fn single_segment_is_full_circle() {
        let p = pie(EmissionsByScope::new(0.0, 42.0, 0.0));
        let l = layout_chart(&p, Viewport::default());
        assert!(l.wedges[0].is_full_circle());
    }

    #[test]
    fn pie_fits_inside_viewport() {
        let p = pie(EmissionsByScope::new(1.0, 1.0, 1.0));
        let v = Viewport { width: 320, height: 240 };
        let l = layout_chart(&p, v);
        assert!(l.center.x - l.radius >= 0.0);
        assert!(l.center.y - l.radius >= TITLE_HEIGHT as f64);
        assert!(l.center.y + l.radius <= v.height as f64);
        assert_eq!(l.legend.len(), 3);
        assert!(l.legend[1].swatch.y > l.legend[0].swatch.y);
    }

    #[test]
    fn rim_point_at_zero_is_top() {
        let p = pie(EmissionsByScope::new(1.0, 0.0, 0.0));
        let l = layout_chart(&p, Viewport::default());
        let top = l.rim_point(0.0);
        assert!((top.x - l.center.x).abs() < 1e-9);
        assert!((top.y - (l.center.y - l.radius)).abs() < 1e-9);
    }
}
