//! Optional `.savingscalc.toml` configuration.
//!
//! Precedence is command-line flag, then configuration file, then the
//! built-in defaults.

mod core;
mod loader;

pub use self::core::{DefaultsConfig, OutputConfig, SavingsConfig};
pub use loader::{
    directory_ancestors, discover_config, load_config, load_config_from,
    parse_and_validate_config, LoadedConfig, CONFIG_FILE_NAME,
};

/// Contents written by `savingscalc init`.
pub const DEFAULT_CONFIG_TEMPLATE: &str = r#"# savingscalc configuration

[defaults]
region = "usa"
# hourly_rate = 35.0     # overrides the region's default rate
time_saved = 30.0
time_unit = "minutes"
frequency = 10.0
frequency_unit = "daily"
implementation_days = 30.0
cost_of_ai = 5000.0
task_description = ""

[output]
default_format = "terminal"
# use_color = true
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CalculatorInput;

    #[test]
    fn test_template_matches_builtin_defaults() {
        let config = parse_and_validate_config(DEFAULT_CONFIG_TEMPLATE).unwrap();
        assert_eq!(config.base_input(None).unwrap(), CalculatorInput::default());
        assert_eq!(
            config.default_format().unwrap(),
            Some(crate::io::OutputFormat::Terminal)
        );
    }
}
