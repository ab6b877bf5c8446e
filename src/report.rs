use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::core::{CalculatorInput, CalculatorOutput};
use crate::presentation::DisplayValues;
use crate::region::Region;

/// Booking link shown under every report.
pub const CONSULTATION_URL: &str = "https://kaizenagi.com";

/// Everything a writer needs to render one calculation.
#[derive(Debug, Clone, Serialize)]
pub struct CalculatorReport {
    pub generated_at: DateTime<Utc>,
    pub version: &'static str,
    pub region: Region,
    pub input: CalculatorInput,
    pub output: CalculatorOutput,
    pub display: DisplayValues,
}

impl CalculatorReport {
    pub fn new(input: CalculatorInput, output: CalculatorOutput) -> Self {
        let display = DisplayValues::new(&input, &output);
        Self {
            generated_at: Utc::now(),
            version: env!("CARGO_PKG_VERSION"),
            region: *input.region.region(),
            input,
            output,
            display,
        }
    }
}
