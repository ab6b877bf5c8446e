// Export modules for library usage
pub mod calculator;
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod formatting;
pub mod input;
pub mod io;
pub mod observability;
pub mod presentation;
pub mod region;
pub mod report;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    BreakEven, CalculatorError, CalculatorInput, CalculatorOutput, FrequencyUnit, HorizonTotals,
    InputField, ProductivityItem, RoiRatio, SavingsData, TimeUnit, YearlySavingsItem,
};

pub use crate::calculator::compute_savings;

pub use crate::region::{resolve_hourly_rate, Region, RegionId, REGIONS};

pub use crate::session::CalculatorSession;

pub use crate::io::output::{create_writer, OutputFormat, OutputWriter};

pub use crate::report::CalculatorReport;
