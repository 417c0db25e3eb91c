/// Plain-text surface, for terminals and textual tests

use crate::chart::{build_chart, ChartView};
use crate::format::{format_mass, format_percent};
use crate::rendering::{OutputFormat, Rendered};
use crate::{ChartConfig, EmissionsByScope, Renderer, Result, TextSnapshot};

/// Render a view as aligned text rows, one per visible scope.
pub fn render_text(view: &ChartView, title: Option<&str>) -> TextSnapshot {
    let text = match view {
        ChartView::Empty { message } => (*message).to_string(),
        ChartView::Pie(pie) => pie
            .segments
            .iter()
            .map(|s| {
                format!(
                    "{:<8} {:>4}  {}",
                    s.segment.label,
                    format_percent(s.proportion),
                    format_mass(s.segment.value_kg)
                )
            })
            .collect::<Vec<_>>()
            .join("\n"),
    };
    TextSnapshot {
        title: title.unwrap_or_default().to_string(),
        text,
    }
}

/// Renderer backend producing [`TextSnapshot`]-style output.
pub struct TextRenderer {
    config: ChartConfig,
}

impl Renderer for TextRenderer {
    fn new(config: ChartConfig) -> Result<Self>
    where
        Self: Sized,
    {
        config.validate()?;
        Ok(Self { config })
    }

    fn format(&self) -> OutputFormat {
        OutputFormat::Text
    }

    fn render(&self, emissions: &EmissionsByScope) -> Result<Rendered> {
        let view = build_chart(emissions);
        let snapshot = render_text(&view, self.config.title.as_deref());
        let body = if snapshot.title.is_empty() {
            format!("{}\n", snapshot.text)
        } else {
            format!("{}\n{}\n", snapshot.title, snapshot.text)
        };
        Ok(Rendered {
            format: OutputFormat::Text,
            body,
            segment_count: view.segments().len(),
        })
    }
}
