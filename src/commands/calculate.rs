use anyhow::{anyhow, Result};
use std::path::PathBuf;

use crate::config::{self, LoadedConfig};
use crate::core::CalculatorError;
use crate::formatting::FormattingConfig;
use crate::input::{apply_raw_input, into_result, RawInput};
use crate::io::{self, OutputFormat};
use crate::observability::{set_config_file, set_phase, CalculationPhase};
use crate::report::CalculatorReport;
use crate::session::CalculatorSession;

pub struct CalculateConfig {
    pub raw: RawInput,
    pub format: Option<OutputFormat>,
    pub output: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub plain: bool,
}

/// Report plus the rendering settings resolved from flags and config.
pub struct PreparedReport {
    pub report: CalculatorReport,
    pub format: OutputFormat,
    pub formatting: FormattingConfig,
}

pub fn run_calculate(config: CalculateConfig) -> Result<()> {
    let prepared = prepare_report(&config)?;

    let _phase = set_phase(CalculationPhase::OutputGeneration);
    let destination = io::open_destination(config.output.as_deref())?;
    let mut writer = io::create_writer(prepared.format, prepared.formatting, destination);
    writer.write_report(&prepared.report)?;

    if let Some(path) = &config.output {
        tracing::info!("Report written to {}", path.display());
    }
    Ok(())
}

/// Everything up to rendering: config lookup, validation and calculation.
pub fn prepare_report(config: &CalculateConfig) -> Result<PreparedReport> {
    let loaded = {
        let _phase = set_phase(CalculationPhase::ConfigLoading);
        load(config.config.as_ref())?
    };
    let _config_file = loaded.as_ref().map(|l| set_config_file(&l.path));

    let file_config = loaded.map(|l| (l.config, l.path));
    let base = match &file_config {
        Some((file, path)) => file.base_input(Some(path.as_path()))?,
        None => Default::default(),
    };

    let session = {
        let _phase = set_phase(CalculationPhase::InputValidation);
        let input = into_result(apply_raw_input(&base, &config.raw)).map_err(invalid_input)?;
        CalculatorSession::with_input(input).map_err(invalid_input)?
    };
    tracing::info!(
        region = %session.selected_region(),
        cost_saved_per_year = session.output().cost_saved_per_year(),
        break_even = %session.output().break_even,
        "calculated savings"
    );

    let file_format = match &file_config {
        Some((file, _)) => file.default_format()?,
        None => None,
    };
    let format = config.format.or(file_format).unwrap_or_default();

    let formatting = if config.plain {
        FormattingConfig::plain()
    } else {
        let use_color = file_config.as_ref().and_then(|(file, _)| file.use_color());
        FormattingConfig::from_env().with_config_color(use_color)
    };

    Ok(PreparedReport {
        report: CalculatorReport::new(session.input().clone(), session.output().clone()),
        format,
        formatting,
    })
}

fn invalid_input(errors: Vec<CalculatorError>) -> anyhow::Error {
    let lines: Vec<String> = errors.iter().map(|e| format!("  - {e}")).collect();
    anyhow!("Invalid input:\n{}", lines.join("\n"))
}

fn load(explicit: Option<&PathBuf>) -> Result<Option<LoadedConfig>> {
    let loaded = match explicit {
        Some(path) => Some(config::load_config_from(path)?),
        None => config::load_config()?,
    };
    Ok(loaded)
}
