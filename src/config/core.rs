use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::core::{CalculatorError, CalculatorInput};
use crate::input::{apply_raw_input, into_result, RawInput};
use crate::io::output::OutputFormat;

/// Root configuration structure for savingscalc
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct SavingsConfig {
    /// Starting values for the calculator
    #[serde(default)]
    pub defaults: Option<DefaultsConfig>,

    /// Output configuration
    #[serde(default)]
    pub output: Option<OutputConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct DefaultsConfig {
    #[serde(default)]
    pub region: Option<String>,

    /// Overrides the region's default rate
    #[serde(default)]
    pub hourly_rate: Option<f64>,

    #[serde(default)]
    pub time_saved: Option<f64>,

    #[serde(default)]
    pub time_unit: Option<String>,

    #[serde(default)]
    pub frequency: Option<f64>,

    #[serde(default)]
    pub frequency_unit: Option<String>,

    #[serde(default)]
    pub implementation_days: Option<f64>,

    #[serde(default)]
    pub cost_of_ai: Option<f64>,

    #[serde(default)]
    pub task_description: Option<String>,
}

impl DefaultsConfig {
    /// Same shape as command-line overrides, so both go through one validator.
    pub fn to_raw_input(&self) -> RawInput {
        let number = |value: Option<f64>| value.map(|v| v.to_string());
        RawInput {
            region: self.region.clone(),
            hourly_rate: number(self.hourly_rate),
            time_saved: number(self.time_saved),
            time_unit: self.time_unit.clone(),
            frequency: number(self.frequency),
            frequency_unit: self.frequency_unit.clone(),
            implementation_days: number(self.implementation_days),
            cost_of_ai: number(self.cost_of_ai),
            task_description: self.task_description.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct OutputConfig {
    #[serde(default)]
    pub default_format: Option<String>,

    #[serde(default)]
    pub use_color: Option<bool>,
}

impl SavingsConfig {
    /// Built-in defaults with the `[defaults]` section applied.
    pub fn base_input(&self, source: Option<&Path>) -> Result<CalculatorInput, CalculatorError> {
        let Some(defaults) = &self.defaults else {
            return Ok(CalculatorInput::default());
        };

        into_result(apply_raw_input(
            &CalculatorInput::default(),
            &defaults.to_raw_input(),
        ))
        .map_err(|errors| {
            let message = errors
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("; ");
            match source {
                Some(path) => CalculatorError::config_with_path(message, path),
                None => CalculatorError::config(message),
            }
        })
    }

    pub fn default_format(&self) -> Result<Option<OutputFormat>, CalculatorError> {
        self.output
            .as_ref()
            .and_then(|output| output.default_format.as_deref())
            .map(|format| format.parse::<OutputFormat>().map_err(CalculatorError::config))
            .transpose()
    }

    pub fn use_color(&self) -> Option<bool> {
        self.output.as_ref().and_then(|output| output.use_color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::region::RegionId;

    #[test]
    fn test_empty_config_gives_builtin_defaults() {
        let config = SavingsConfig::default();
        assert_eq!(config.base_input(None), Ok(CalculatorInput::default()));
        assert_eq!(config.default_format(), Ok(None));
        assert_eq!(config.use_color(), None);
    }

    #[test]
    fn test_region_in_config_seeds_rate() {
        let config = SavingsConfig {
            defaults: Some(DefaultsConfig {
                region: Some("europe".into()),
                ..Default::default()
            }),
            ..Default::default()
        };
        let input = config.base_input(None).unwrap();
        assert_eq!(input.region, RegionId::Europe);
        assert_eq!(input.hourly_rate, 30.0);
    }

    #[test]
    fn test_invalid_defaults_become_config_error() {
        let config = SavingsConfig {
            defaults: Some(DefaultsConfig {
                cost_of_ai: Some(-10.0),
                time_unit: Some("fortnights".into()),
                ..Default::default()
            }),
            ..Default::default()
        };
        let err = config.base_input(Some(Path::new(".savingscalc.toml"))).unwrap_err();
        let CalculatorError::Config { message, path } = err else {
            panic!("expected a configuration error");
        };
        assert!(message.contains("cost of AI must not be negative"));
        assert!(message.contains("fortnights"));
        assert_eq!(path.as_deref(), Some(Path::new(".savingscalc.toml")));
    }

    #[test]
    fn test_unknown_default_format() {
        let config = SavingsConfig {
            output: Some(OutputConfig {
                default_format: Some("yaml".into()),
                use_color: Some(false),
            }),
            ..Default::default()
        };
        assert!(matches!(config.default_format(), Err(CalculatorError::Config { .. })));
        assert_eq!(config.use_color(), Some(false));
    }
}
