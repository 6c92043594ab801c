use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    version,
    about = "mdpost CLI - Post-processing and configuration tools for molecular-dynamics state data.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Find a representative frame of a simulation from its state-data file.
    FindFrame(FindFrameArgs),
    /// Validate and normalize a plotting configuration file.
    PlotConfig(PlotConfigArgs),
    /// Validate a simulation configuration file.
    Check(CheckArgs),
}

/// Arguments for the `find-frame` subcommand.
#[derive(Args, Debug)]
pub struct FindFrameArgs {
    /// Path to the file containing the state data of the simulation.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub input_state_data: PathBuf,

    /// Path for the file where the selected frame is written.
    #[arg(short, long, value_name = "PATH", default_value = "frame.csv")]
    pub output_frame: PathBuf,

    /// The method used to select the frame
    /// (e.g. 'closest_to_mean_temperature_second_half').
    #[arg(short, long, required = true, value_name = "NAME")]
    pub method: String,

    /// The column separator in the input state-data file.
    #[arg(long, value_name = "CHAR", default_value = ",")]
    pub separator: char,
}

/// Arguments for the `plot-config` subcommand.
#[derive(Args, Debug)]
pub struct PlotConfigArgs {
    /// Path to the plotting configuration file in TOML format.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub config: PathBuf,

    /// Path for the normalized configuration; written to standard output
    /// when omitted.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Preview each plot's axis tick positions against this state-data file.
    #[arg(long, value_name = "PATH")]
    pub state_data: Option<PathBuf>,

    /// The column separator in the state-data file.
    #[arg(long, value_name = "CHAR", default_value = ",")]
    pub separator: char,
}

/// Arguments for the `check` subcommand.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Path to the simulation configuration file in TOML format.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub config: PathBuf,
}
