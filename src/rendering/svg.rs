/// SVG surface: serializes paint commands into a standalone document

use std::f64::consts::PI;
use std::fmt::Write;

use crate::chart::build_chart;
use crate::rendering::layout::{polar, Point};
use crate::rendering::paint::{paint_view, PaintCommand, TextAnchor};
use crate::rendering::{OutputFormat, Rendered};
use crate::{ChartConfig, EmissionsByScope, Renderer, Result, Viewport};

const FONT_FAMILY: &str = "system-ui, sans-serif";

/// Render paint commands to an SVG document.
///
/// Slices carry a `<title>` child so the host shows the formatted mass on
/// hover. Coordinates are written with two decimals so output is stable.
pub fn render_svg(commands: &[PaintCommand], viewport: Viewport) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = viewport.width,
        h = viewport.height
    );
    for cmd in commands {
        write_command(&mut out, cmd);
    }
    out.push_str("</svg>\n");
    out
}

/// Renderer backend producing SVG documents.
pub struct SvgRenderer {
    config: ChartConfig,
}

impl Renderer for SvgRenderer {
    fn new(config: ChartConfig) -> Result<Self>
    where
        Self: Sized,
    {
        config.validate()?;
        Ok(Self { config })
    }

    fn format(&self) -> OutputFormat {
        OutputFormat::Svg
    }

    fn render(&self, emissions: &EmissionsByScope) -> Result<Rendered> {
        let view = build_chart(emissions);
        let commands = paint_view(&view, &self.config);
        log::debug!("painting {} command(s) to svg", commands.len());
        Ok(Rendered {
            format: OutputFormat::Svg,
            body: render_svg(&commands, self.config.viewport),
            segment_count: view.segments().len(),
        })
    }
}

fn write_command(out: &mut String, cmd: &PaintCommand) {
    match cmd {
        PaintCommand::SolidRect {
            x,
            y,
            width,
            height,
            color,
        } => {
            let _ = writeln!(
                out,
                r#"  <rect x="{}" y="{}" width="{}" height="{}" fill="{}" data-token="{}"/>"#,
                x,
                y,
                width,
                height,
                color.hex(),
                color.name()
            );
        }
        PaintCommand::Wedge {
            center,
            radius,
            start_angle,
            end_angle,
            color,
            tooltip,
        } => {
            let _ = writeln!(
                out,
                r#"  <path class="slice" d="{}" fill="{}" data-token="{}" stroke="{}" stroke-width="1"><title>{}</title></path>"#,
                wedge_path(*center, *radius, *start_angle, *end_angle),
                color.hex(),
                color.name(),
                crate::palette::ColorToken::Surface.hex(),
                escape(tooltip)
            );
        }
        PaintCommand::Disc {
            center,
            radius,
            color,
            tooltip,
        } => {
            let _ = writeln!(
                out,
                r#"  <circle class="slice" cx="{:.2}" cy="{:.2}" r="{:.2}" fill="{}" data-token="{}"><title>{}</title></circle>"#,
                center.x,
                center.y,
                radius,
                color.hex(),
                color.name(),
                escape(tooltip)
            );
        }
        PaintCommand::Text {
            x,
            y,
            text,
            size,
            color,
            anchor,
        } => {
            let anchor = match anchor {
                TextAnchor::Start => "start",
                TextAnchor::Middle => "middle",
            };
            let _ = writeln!(
                out,
                r#"  <text x="{:.2}" y="{:.2}" font-family="{}" font-size="{}" fill="{}" text-anchor="{}" dominant-baseline="middle">{}</text>"#,
                x,
                y,
                FONT_FAMILY,
                size,
                color.hex(),
                anchor,
                escape(text)
            );
        }
    }
}

fn wedge_path(center: Point, radius: f64, start: f64, end: f64) -> String {
    let from = polar(center, radius, start);
    let to = polar(center, radius, end);
    let large_arc = if end - start > PI { 1 } else { 0 };
    format!(
        "M{:.2},{:.2} L{:.2},{:.2} A{:.2},{:.2} 0 {},1 {:.2},{:.2} Z",
        center.x, center.y, from.x, from.y, radius, radius, large_arc, to.x, to.y
    )
}

pub(crate) fn escape(text: &str) -> String {
    let mut s = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => s.push_str("&amp;"),
            '<' => s.push_str("&lt;"),
            '>' => s.push_str("&gt;"),
            '"' => s.push_str("&quot;"),
            '\'' => s.push_str("&apos;"),
            c => s.push(c),
        }
    }
    s
}
