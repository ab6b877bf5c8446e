//! Shared error types for the calculator

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for savingscalc operations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalculatorError {
    /// Raw text that does not parse as a finite number
    #[error("Invalid numeric input for {field}: {raw:?}")]
    InvalidNumericInput { field: InputField, raw: String },

    /// A magnitude or cost below zero
    #[error("{field} must not be negative (got {value})")]
    NegativeValue { field: InputField, value: f64 },

    /// Above the largest magnitude the model keeps finite
    #[error("{field} must be at most {max:e} (got {value:e})")]
    ValueTooLarge { field: InputField, value: f64, max: f64 },

    #[error("Unknown region: {0} (expected one of usa, europe, gcc, asia)")]
    UnknownRegion(String),

    #[error("Unknown time unit: {0} (expected minutes, hours or days)")]
    UnknownTimeUnit(String),

    #[error("Unknown frequency unit: {0} (expected daily, weekly, monthly or yearly)")]
    UnknownFrequencyUnit(String),

    /// Yearly savings are zero, so cumulative savings never cover the cost
    #[error("Break-even is not reachable: daily savings are zero")]
    DivisionByZeroInBreakEven,

    /// ROI is relative to the solution cost, which is zero
    #[error("ROI is not calculable: cost of AI is zero")]
    DivisionByZeroInRoi,

    /// Configuration file errors
    #[error("Configuration error{}: {message}", path_suffix(.path))]
    Config {
        message: String,
        path: Option<PathBuf>,
    },
}

impl CalculatorError {
    pub fn invalid_number(field: InputField, raw: impl Into<String>) -> Self {
        Self::InvalidNumericInput {
            field,
            raw: raw.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            path: None,
        }
    }

    pub fn config_with_path(message: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self::Config {
            message: message.into(),
            path: Some(path.into()),
        }
    }

    /// Errors raised while reading raw values, before any calculation runs.
    pub fn is_boundary_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidNumericInput { .. }
                | Self::NegativeValue { .. }
                | Self::ValueTooLarge { .. }
                | Self::UnknownRegion(_)
                | Self::UnknownTimeUnit(_)
                | Self::UnknownFrequencyUnit(_)
        )
    }
}

fn path_suffix(path: &Option<PathBuf>) -> String {
    path.as_ref()
        .map(|p| format!(" in {}", p.display()))
        .unwrap_or_default()
}

/// Numeric input fields, used to label boundary errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputField {
    HourlyRate,
    TimeSaved,
    Frequency,
    ImplementationDays,
    CostOfAi,
}

impl std::fmt::Display for InputField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::HourlyRate => "hourly rate",
            Self::TimeSaved => "time saved",
            Self::Frequency => "frequency",
            Self::ImplementationDays => "implementation days",
            Self::CostOfAi => "cost of AI",
        };
        f.write_str(name)
    }
}

pub type Result<T> = std::result::Result<T, CalculatorError>;
