//! Dashboard page composition
//!
//! Only the overview page has content; other modules show a coming-soon
//! placeholder until they are built.

use crate::rendering::svg::escape;
use crate::rendering::OutputFormat;
use crate::store::ReportingPeriod;
use crate::{EmissionsByScope, Error, Renderer, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardModule {
    Overview,
    /// Partnership for Carbon Accounting Financials
    Pcaf,
    Targets,
}

impl DashboardModule {
    pub fn name(self) -> &'static str {
        match self {
            DashboardModule::Overview => "Overview",
            DashboardModule::Pcaf => "PCAF",
            DashboardModule::Targets => "Targets",
        }
    }

    pub fn is_available(self) -> bool {
        matches!(self, DashboardModule::Overview)
    }
}

impl std::str::FromStr for DashboardModule {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "overview" => Ok(DashboardModule::Overview),
            "pcaf" => Ok(DashboardModule::Pcaf),
            "targets" => Ok(DashboardModule::Targets),
            other => Err(Error::ConfigError(format!(
                "unknown dashboard module `{other}`; expected overview|pcaf|targets"
            ))),
        }
    }
}

/// Placeholder text for a module that is not built yet.
pub fn coming_soon(module: DashboardModule) -> String {
    format!("{} module coming soon", module.name())
}

pub fn period_heading(period: Option<&ReportingPeriod>) -> String {
    match period {
        Some(p) => format!("Reporting period: {}", p),
        None => "Reporting period: none selected".to_string(),
    }
}

/// Compose one dashboard page in the renderer's output format.
///
/// The period is read, never changed, here.
pub fn render_page(
    module: DashboardModule,
    period: Option<&ReportingPeriod>,
    emissions: &EmissionsByScope,
    renderer: &dyn Renderer,
) -> Result<String> {
    if !module.is_available() {
        let text = coming_soon(module);
        return Ok(match renderer.format() {
            OutputFormat::Text => format!("{}\n", text),
            OutputFormat::Svg => format!(
                "<section class=\"coming-soon\"><p>{}</p></section>\n",
                escape(&text)
            ),
        });
    }

    let heading = period_heading(period);
    let chart = renderer.render(emissions)?;
    Ok(match renderer.format() {
        OutputFormat::Text => format!("{}\n\n{}", heading, chart.body),
        OutputFormat::Svg => format!(
            "<section class=\"overview\">\n<h2>{}</h2>\n{}</section>\n",
            escape(&heading),
            chart.body
        ),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rendering::text::TextRenderer;
    use crate::ChartConfig;

    fn text_renderer() -> TextRenderer {
        TextRenderer::new(ChartConfig {
            format: OutputFormat::Text,
            ..Default::default()
        })
        .expect("renderer")
    }

    #[test]
    fn pcaf_is_coming_soon() {
        let out = render_page(
            DashboardModule::Pcaf,
            None,
            &EmissionsByScope::new(1.0, 2.0, 3.0),
            &text_renderer(),
        )
        .unwrap();
        assert_eq!(out, "PCAF module coming soon\n");
    }

    #[test]
    fn overview_shows_period_and_chart() {
        let period = ReportingPeriod::parse("2024").unwrap();
        let out = render_page(
            DashboardModule::Overview,
            Some(&period),
            &EmissionsByScope::new(100.0, 0.0, 300.0),
            &text_renderer(),
        )
        .unwrap();
        assert!(out.starts_with("Reporting period: 2024\n"));
        assert!(out.contains("Scope 3"));
        assert!(!out.contains("Scope 2"));
    }

    #[test]
    fn heading_without_selection() {
        assert_eq!(period_heading(None), "Reporting period: none selected");
    }

    #[test]
    fn module_names_parse() {
        assert_eq!("PCAF".parse::<DashboardModule>().unwrap(), DashboardModule::Pcaf);
        assert!("ledger".parse::<DashboardModule>().is_err());
    }
}
