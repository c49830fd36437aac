use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use solid_filter::vehicle::{Brand, Color, VehicleType};
use tracing_subscriber::filter::LevelFilter;

/// Walk through the SOLID principle scenarios.
#[derive(Debug, Parser)]
#[command(name = "solid", version, about, long_about = None)]
pub struct Cli {
    /// Logging verbosity, written to stderr.
    #[arg(long, short, global = true, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Write the sample cart's invoice to a file (single responsibility).
    Invoice(InvoiceArgs),
    /// Filter the sample dealership (open-closed).
    Vehicles(VehiclesArgs),
    /// Show rectangles and squares through one interface (Liskov substitution).
    Shapes,
}

#[derive(Debug, Args)]
pub struct InvoiceArgs {
    /// Destination file.
    #[arg(long, short)]
    pub out: PathBuf,

    /// Append to the file instead of overwriting it.
    #[arg(long)]
    pub append: bool,
}

#[derive(Debug, Args)]
pub struct VehiclesArgs {
    /// Keep vehicles of this brand.
    #[arg(long)]
    pub brand: Option<Brand>,

    /// Keep vehicles of this color.
    #[arg(long)]
    pub color: Option<Color>,

    /// Keep vehicles of this body type.
    #[arg(long)]
    pub kind: Option<VehicleType>,

    /// Keep vehicles with at least this engine volume, in litres.
    #[arg(long)]
    pub min_volume: Option<f64>,

    /// Keep vehicles with at most this engine volume, in litres.
    #[arg(long)]
    pub max_volume: Option<f64>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
    Off,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => LevelFilter::TRACE,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Error => LevelFilter::ERROR,
            LogLevel::Off => LevelFilter::OFF,
        }
    }
}
