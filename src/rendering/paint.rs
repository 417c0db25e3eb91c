/// Paint command set for chart surfaces

use crate::chart::ChartView;
use crate::format::format_percent;
use crate::palette::ColorToken;
use crate::rendering::layout::{layout_chart, Point, TITLE_HEIGHT};
use crate::ChartConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    Start,
    Middle,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PaintCommand {
    SolidRect {
        x: i32,
        y: i32,
        width: u32,
        height: u32,
        color: ColorToken,
    },
    /// Pie slice from `start_angle` to `end_angle` (radians, clockwise from the top)
    Wedge {
        center: Point,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        color: ColorToken,
        tooltip: String,
    },
    /// Whole-circle slice, used when one scope makes up the entire total
    Disc {
        center: Point,
        radius: f64,
        color: ColorToken,
        tooltip: String,
    },
    Text {
        x: f64,
        y: f64,
        text: String,
        size: u32,
        color: ColorToken,
        anchor: TextAnchor,
    },
}

/// Turn a chart view into paint commands, back to front.
pub fn paint_view(view: &ChartView, config: &ChartConfig) -> Vec<PaintCommand> {
    let viewport = config.viewport;
    let mut cmds = vec![PaintCommand::SolidRect {
        x: 0,
        y: 0,
        width: viewport.width,
        height: viewport.height,
        color: ColorToken::Surface,
    }];

    if let Some(title) = &config.title {
        cmds.push(PaintCommand::Text {
            x: 8.0,
            y: 20.0,
            text: title.clone(),
            size: 14,
            color: ColorToken::TextPrimary,
            anchor: TextAnchor::Start,
        });
    }

    let pie = match view {
        ChartView::Empty { message } => {
            let body = viewport.height.saturating_sub(TITLE_HEIGHT) as f64;
            cmds.push(PaintCommand::Text {
                x: viewport.width as f64 / 2.0,
                y: TITLE_HEIGHT as f64 + body / 2.0,
                text: (*message).to_string(),
                size: 12,
                color: ColorToken::TextMuted,
                anchor: TextAnchor::Middle,
            });
            return cmds;
        }
        ChartView::Pie(pie) => pie,
    };

    let layout = layout_chart(pie, viewport);

    for (wedge, seg) in layout.wedges.iter().zip(&pie.segments) {
        let color = seg.segment.color;
        if wedge.is_full_circle() {
            cmds.push(PaintCommand::Disc {
                center: layout.center,
                radius: layout.radius,
                color,
                tooltip: seg.tooltip.clone(),
            });
        } else {
            cmds.push(PaintCommand::Wedge {
                center: layout.center,
                radius: layout.radius,
                start_angle: wedge.start_angle,
                end_angle: wedge.end_angle,
                color,
                tooltip: seg.tooltip.clone(),
            });
        }
    }

    if config.show_percent_labels {
        for (wedge, seg) in layout.wedges.iter().zip(&pie.segments) {
            // a lone wedge has no meaningful mid-angle; label the centre
            let at = if wedge.is_full_circle() {
                layout.center
            } else {
                wedge.label_anchor
            };
            cmds.push(PaintCommand::Text {
                x: at.x,
                y: at.y,
                text: format_percent(seg.proportion),
                size: 11,
                color: ColorToken::Surface,
                anchor: TextAnchor::Middle,
            });
        }
    }

    for (row, entry) in layout.legend.iter().zip(pie.legend()) {
        cmds.push(PaintCommand::SolidRect {
            x: row.swatch.x,
            y: row.swatch.y,
            width: row.swatch.width,
            height: row.swatch.height,
            color: entry.color,
        });
        cmds.push(PaintCommand::Text {
            x: row.text_origin.x,
            y: row.text_origin.y,
            text: entry.name.to_string(),
            size: 12,
            color: ColorToken::TextPrimary,
            anchor: TextAnchor::Start,
        });
    }

    cmds
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::build_chart;
    use crate::EmissionsByScope;

    fn texts(cmds: &[PaintCommand]) -> Vec<String> {
        cmds.iter()
            .filter_map(|c| match c {
                PaintCommand::Text { text, .. } => Some(text.clone()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn empty_view_paints_only_placeholder() {
        let view = build_chart(&EmissionsByScope::new(0.0, 0.0, 0.0));
        let cmds = paint_view(&view, &ChartConfig::default());
        assert!(!cmds
            .iter()
            .any(|c| matches!(c, PaintCommand::Wedge { .. } | PaintCommand::Disc { .. })));
        assert!(texts(&cmds).contains(&crate::chart::NO_DATA_MESSAGE.to_string()));
    }

    #[test]
    fn wedges_labels_and_legend_are_painted() {
        let view = build_chart(&EmissionsByScope::new(50.0, 50.0, 0.0));
        let cmds = paint_view(&view, &ChartConfig::default());
        let wedges = cmds
            .iter()
            .filter(|c| matches!(c, PaintCommand::Wedge { .. }))
            .count();
        assert_eq!(wedges, 2);
        let t = texts(&cmds);
        assert_eq!(t.iter().filter(|s| *s == "50%").count(), 2);
        assert!(t.contains(&"Scope 1".to_string()));
        assert!(t.contains(&"Scope 2".to_string()));
        assert!(!t.contains(&"Scope 3".to_string()));
    }

    #[test]
    fn labels_can_be_disabled() {
        let view = build_chart(&EmissionsByScope::new(50.0, 50.0, 0.0));
        let cfg = ChartConfig {
            show_percent_labels: false,
            ..Default::default()
        };
        let t = texts(&paint_view(&view, &cfg));
        assert!(!t.iter().any(|s| s.ends_with('%')));
    }

    #[test]
    fn single_scope_paints_disc() {
        let view = build_chart(&EmissionsByScope::new(0.0, 0.0, 9.0));
        let cmds = paint_view(&view, &ChartConfig::default());
        assert!(cmds.iter().any(|c| matches!(
            c,
            PaintCommand::Disc {
                color: ColorToken::Blue500,
                ..
            }
        )));
    }
}
