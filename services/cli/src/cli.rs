use crate::output::{deliver, OutputMode, Rendered};
use chrono::Local;
use clap::{Parser, ValueEnum};
use nomad_pack::config::{AppConfig, ConfigError, PlannerConfig};
use nomad_pack::error::AppError;
use nomad_pack::packing::{generate_packing_list, TripParameters, TripType, WorkIntensity};
use nomad_pack::report::PackingDocument;
use nomad_pack::telemetry;
use std::path::PathBuf;
use tracing::{debug, info};

const EXAMPLES: &str = "\
Examples:
  # Daily commute
  nomad-pack --type commute --duration 1

  # Weekend workshop
  nomad-pack --type weekend --duration 3 --work-intensity heavy

  # Long-term nomad trip
  nomad-pack --type nomad --duration 14 --extras

  # Export as Markdown
  nomad-pack --type nomad --duration 7 --export packing.md";

#[derive(Parser, Debug)]
#[command(
    name = "nomad-pack",
    about = "Generate smart packing lists for digital nomads",
    version,
    after_help = EXAMPLES
)]
pub(crate) struct Cli {
    /// Type of trip (commute, weekend, nomad)
    #[arg(long = "type", value_name = "TYPE", value_parser = parse_trip_type)]
    pub(crate) trip_type: TripType,
    /// Trip duration in days
    #[arg(long)]
    pub(crate) duration: u32,
    /// Work intensity level (light, medium, heavy). Defaults to medium.
    #[arg(long, value_parser = parse_work_intensity)]
    pub(crate) work_intensity: Option<WorkIntensity>,
    /// Include optional extra items
    #[arg(long)]
    pub(crate) extras: bool,
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub(crate) format: OutputFormat,
    /// Export as a Markdown checklist (defaults to packing-list-YYYYMMDD.md)
    #[arg(long, value_name = "FILENAME")]
    pub(crate) export: Option<Option<PathBuf>>,
    /// Enable debug logging
    #[arg(short, long)]
    pub(crate) verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    Text,
    Json,
}

impl Cli {
    /// The configured default intensity is only consulted when the flag is absent.
    pub(crate) fn trip_parameters(
        &self,
        planner: &PlannerConfig,
    ) -> Result<TripParameters, ConfigError> {
        let work_intensity = match self.work_intensity {
            Some(work_intensity) => work_intensity,
            None => planner.work_intensity()?,
        };
        Ok(TripParameters::new(
            self.trip_type,
            self.duration,
            work_intensity,
            self.extras,
        ))
    }

    /// `--export` wins over `--format`.
    pub(crate) fn output_mode(&self) -> OutputMode {
        match (&self.export, self.format) {
            (Some(filename), _) => OutputMode::Markdown(filename.clone()),
            (None, OutputFormat::Json) => OutputMode::Json,
            (None, OutputFormat::Text) => OutputMode::Text,
        }
    }
}

fn parse_trip_type(raw: &str) -> Result<TripType, String> {
    raw.parse::<TripType>().map_err(|err| err.to_string())
}

fn parse_work_intensity(raw: &str) -> Result<WorkIntensity, String> {
    raw.parse::<WorkIntensity>().map_err(|err| err.to_string())
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let mut config = AppConfig::load();

    if cli.verbose {
        config.telemetry.log_level = "debug".to_string();
    }

    telemetry::init(&config.telemetry)?;
    debug!(?config.environment, ?cli, "parsed command line");

    let params = cli.trip_parameters(&config.planner)?;
    let list = generate_packing_list(&params);
    info!(
        trip_type = %params.trip_type,
        duration_days = params.duration_days,
        categories = list.categories.len(),
        total_items = list.total_items,
        "packing list generated"
    );

    let now = Local::now().naive_local();
    let document = PackingDocument::new(&list, now);
    let mode = cli.output_mode();
    debug!(?mode, "rendering packing list");

    match deliver(&document, &mode, &config.export, now.date())? {
        Rendered::Console(body) => println!("{body}"),
        Rendered::Exported(path) => {
            info!(path = %path.display(), "markdown checklist written");
            println!("Packing list exported to: {}", path.display());
        }
    }

    Ok(())
}
