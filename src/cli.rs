use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "savingscalc")]
#[command(about = "Estimate time and cost savings from automating a repetitive task", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase log verbosity (can be repeated: -v, -vv, -vvv)
    /// -v: info
    /// -vv: debug, including each calculation step
    /// -vvv: trace
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbosity: u8,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Calculate savings, break-even and ROI for one scenario
    Calculate {
        /// Region preset that seeds the hourly rate (usa, europe, gcc, asia)
        #[arg(short, long)]
        region: Option<String>,

        /// Hourly labour cost; overrides the region default
        #[arg(long = "hourly-rate", allow_hyphen_values = true)]
        hourly_rate: Option<String>,

        /// Time saved each time the task runs
        #[arg(short = 't', long = "time-saved", allow_hyphen_values = true)]
        time_saved: Option<String>,

        /// Unit of --time-saved (minutes, hours, days)
        #[arg(long = "time-unit")]
        time_unit: Option<String>,

        /// How many times the task runs per frequency unit
        #[arg(short = 'n', long, allow_hyphen_values = true)]
        frequency: Option<String>,

        /// Unit of --frequency (daily, weekly, monthly, yearly)
        #[arg(long = "frequency-unit")]
        frequency_unit: Option<String>,

        /// Working days needed to build the automation
        #[arg(long = "implementation-days", allow_hyphen_values = true)]
        implementation_days: Option<String>,

        /// One-time cost of the AI solution
        #[arg(long = "cost-of-ai", allow_hyphen_values = true)]
        cost_of_ai: Option<String>,

        /// Free-text description of the task (shown in the report only)
        #[arg(long)]
        task: Option<String>,

        /// Output format (defaults to the config file setting, then terminal)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Configuration file (defaults to the nearest .savingscalc.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// ASCII-only output without colors or emoji
        #[arg(long)]
        plain: bool,
    },

    /// List region presets and their default hourly rates
    Regions {
        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// ASCII-only output without colors or emoji
        #[arg(long)]
        plain: bool,
    },

    /// Initialize a .savingscalc.toml configuration file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
}

impl From<OutputFormat> for crate::io::output::OutputFormat {
    fn from(f: OutputFormat) -> Self {
        match f {
            OutputFormat::Json => crate::io::output::OutputFormat::Json,
            OutputFormat::Markdown => crate::io::output::OutputFormat::Markdown,
            OutputFormat::Terminal => crate::io::output::OutputFormat::Terminal,
        }
    }
}
