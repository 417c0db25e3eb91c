use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};

use scopechart::page::{render_page, DashboardModule};
use scopechart::store::{FileBackend, PeriodStore, ReportingPeriod};
use scopechart::{ChartConfig, EmissionsByScope, OutputFormat, Viewport};

const DEFAULT_STATE_FILE: &str = ".scopechart/state.json";

#[derive(Parser)]
#[command(name = "scopechart", version, about = "Emissions-by-scope charts")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render a scope breakdown chart
    Render(RenderArgs),
    /// Show or change the selected reporting period
    Period {
        #[command(subcommand)]
        action: PeriodAction,
        #[arg(long, default_value = DEFAULT_STATE_FILE)]
        state_file: PathBuf,
    },
    /// Render a dashboard page
    Page {
        /// overview, pcaf or targets
        module: String,
        #[command(flatten)]
        render: RenderArgs,
        #[arg(long, default_value = DEFAULT_STATE_FILE)]
        state_file: PathBuf,
    },
}

#[derive(Subcommand)]
enum PeriodAction {
    Show,
    Set { label: String },
    Clear,
}

#[derive(Args)]
struct RenderArgs {
    /// Scope 1 emissions in kg CO2e
    #[arg(long)]
    scope1: Option<f64>,
    /// Scope 2 emissions in kg CO2e
    #[arg(long)]
    scope2: Option<f64>,
    /// Scope 3 emissions in kg CO2e
    #[arg(long)]
    scope3: Option<f64>,
    /// JSON file with scope_1_co2e_kg / scope_2_co2e_kg / scope_3_co2e_kg
    #[arg(long, conflicts_with_all = ["scope1", "scope2", "scope3"])]
    input: Option<PathBuf>,
    /// JSON chart configuration
    #[arg(long)]
    config: Option<PathBuf>,
    /// svg or text
    #[arg(long)]
    format: Option<OutputFormat>,
    #[arg(long)]
    width: Option<u32>,
    #[arg(long)]
    height: Option<u32>,
    /// Write output here instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,
}

impl RenderArgs {
    fn emissions(&self) -> anyhow::Result<EmissionsByScope> {
        if let Some(path) = &self.input {
            let data = fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            return EmissionsByScope::from_json(&data)
                .with_context(|| format!("failed to parse {}", path.display()));
        }
        Ok(EmissionsByScope {
            scope_1_co2e_kg: self.scope1,
            scope_2_co2e_kg: self.scope2,
            scope_3_co2e_kg: self.scope3,
        })
    }

    fn chart_config(&self) -> anyhow::Result<ChartConfig> {
        let mut cfg = match &self.config {
            Some(path) => {
                let data = fs::read_to_string(path)
                    .with_context(|| format!("failed to read {}", path.display()))?;
                ChartConfig::from_json(&data)?
            }
            None => ChartConfig::default(),
        };
        if let Some(format) = self.format {
            cfg.format = format;
        }
        cfg.viewport = Viewport {
            width: self.width.unwrap_or(cfg.viewport.width),
            height: self.height.unwrap_or(cfg.viewport.height),
        };
        Ok(cfg)
    }

    fn emit(&self, body: &str) -> anyhow::Result<()> {
        match &self.output {
            Some(path) => fs::write(path, body)
                .with_context(|| format!("failed to write {}", path.display())),
            None => {
                print!("{}", body);
                Ok(())
            }
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(e) = run(Cli::parse()) {
        eprintln!("scopechart: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Render(args) => {
            let renderer = scopechart::new_renderer(args.chart_config()?)?;
            let out = renderer.render(&args.emissions()?)?;
            log::info!(
                "rendered {} slice(s), digest {}",
                out.segment_count,
                out.digest()
            );
            args.emit(&out.body)
        }
        Command::Period { action, state_file } => {
            let mut store = PeriodStore::open(FileBackend::new(state_file))?;
            match action {
                PeriodAction::Show => match store.selected() {
                    Some(p) => println!("{}", p),
                    None => println!("none"),
                },
                PeriodAction::Set { label } => {
                    let period = ReportingPeriod::parse(&label)?;
                    store.select(period)?;
                }
                PeriodAction::Clear => store.clear()?,
            }
            Ok(())
        }
        Command::Page {
            module,
            render,
            state_file,
        } => {
            let module: DashboardModule = module.parse()?;
            let store = PeriodStore::open(FileBackend::new(state_file))?;
            let renderer = scopechart::new_renderer(render.chart_config()?)?;
            let emissions = render.emissions()?;
            let body = render_page(module, store.selected(), &emissions, renderer.as_ref())?;
            render.emit(&body)
        }
    }
}
