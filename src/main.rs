use anyhow::Result;
use clap::Parser;
use savingscalc::cli::{Cli, Commands};
use savingscalc::commands::{self, CalculateConfig};
use savingscalc::input::RawInput;
use savingscalc::observability::{init_logging, install_panic_hook, set_command};

fn main() -> Result<()> {
    install_panic_hook();
    let cli = Cli::parse();
    init_logging(cli.verbosity);

    match cli.command {
        Commands::Calculate {
            region,
            hourly_rate,
            time_saved,
            time_unit,
            frequency,
            frequency_unit,
            implementation_days,
            cost_of_ai,
            task,
            format,
            output,
            config,
            plain,
        } => {
            let _command = set_command("calculate");
            commands::run_calculate(CalculateConfig {
                raw: RawInput {
                    region,
                    hourly_rate,
                    time_saved,
                    time_unit,
                    frequency,
                    frequency_unit,
                    implementation_days,
                    cost_of_ai,
                    task_description: task,
                },
                format: format.map(Into::into),
                output,
                config,
                plain,
            })
        }
        Commands::Regions { format, plain } => {
            let _command = set_command("regions");
            commands::list_regions(format.into(), plain)
        }
        Commands::Init { force } => {
            let _command = set_command("init");
            commands::init_config(force)
        }
    }
}
