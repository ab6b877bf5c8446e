//! Stateful calculator.
//!
//! A [`CalculatorSession`] holds the user's current input and the output
//! derived from it. Every setter recomputes the whole output before
//! returning, so `output()` always matches `input()`.
//!
//! Region selection is one-way: choosing a region overwrites the hourly rate
//! with that region's default, but editing the hourly rate never changes the
//! selected region.

use crate::calculator::compute_savings;
use crate::core::{
    CalculatorError, CalculatorInput, CalculatorOutput, FrequencyUnit, InputField, TimeUnit,
};
use crate::input::{check_numeric, into_result, parse_numeric, validate_input};
use crate::region::RegionId;

#[derive(Debug, Clone)]
pub struct CalculatorSession {
    input: CalculatorInput,
    output: CalculatorOutput,
}

impl Default for CalculatorSession {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorSession {
    /// Start from the widget defaults.
    pub fn new() -> Self {
        Self::from_valid(CalculatorInput::default())
    }

    /// Start from `input`, rejecting every field the input boundary would
    /// reject.
    pub fn with_input(input: CalculatorInput) -> Result<Self, Vec<CalculatorError>> {
        into_result(validate_input(&input))?;
        Ok(Self::from_valid(input))
    }

    fn from_valid(input: CalculatorInput) -> Self {
        let output = compute_savings(&input);
        Self { input, output }
    }

    pub fn input(&self) -> &CalculatorInput {
        &self.input
    }

    pub fn output(&self) -> &CalculatorOutput {
        &self.output
    }

    pub fn selected_region(&self) -> RegionId {
        self.input.region
    }

    pub fn select_region(&mut self, region: RegionId) -> &CalculatorOutput {
        self.input.region = region;
        self.input.hourly_rate = region.hourly_rate();
        tracing::debug!(region = %region, hourly_rate = self.input.hourly_rate, "region selected");
        self.recompute()
    }

    pub fn select_region_by_id(&mut self, id: &str) -> Result<&CalculatorOutput, CalculatorError> {
        let region = id.parse::<RegionId>()?;
        Ok(self.select_region(region))
    }

    pub fn set_hourly_rate(&mut self, rate: f64) -> Result<&CalculatorOutput, CalculatorError> {
        self.input.hourly_rate = check_numeric(InputField::HourlyRate, rate)?;
        Ok(self.recompute())
    }

    pub fn set_time_saved(&mut self, amount: f64) -> Result<&CalculatorOutput, CalculatorError> {
        self.input.time_saved = check_numeric(InputField::TimeSaved, amount)?;
        Ok(self.recompute())
    }

    pub fn set_time_unit(&mut self, unit: TimeUnit) -> &CalculatorOutput {
        self.input.time_unit = unit;
        self.recompute()
    }

    pub fn set_frequency(&mut self, frequency: f64) -> Result<&CalculatorOutput, CalculatorError> {
        self.input.frequency = check_numeric(InputField::Frequency, frequency)?;
        Ok(self.recompute())
    }

    pub fn set_frequency_unit(&mut self, unit: FrequencyUnit) -> &CalculatorOutput {
        self.input.frequency_unit = unit;
        self.recompute()
    }

    pub fn set_implementation_days(&mut self, days: f64) -> Result<&CalculatorOutput, CalculatorError> {
        self.input.implementation_days = check_numeric(InputField::ImplementationDays, days)?;
        Ok(self.recompute())
    }

    pub fn set_cost_of_ai(&mut self, cost: f64) -> Result<&CalculatorOutput, CalculatorError> {
        self.input.cost_of_ai = check_numeric(InputField::CostOfAi, cost)?;
        Ok(self.recompute())
    }

    pub fn set_task_description(&mut self, description: impl Into<String>) -> &CalculatorOutput {
        self.input.task_description = description.into();
        self.recompute()
    }

    /// Set a numeric field from raw text, as typed into a form.
    ///
    /// A rejected value leaves the session unchanged.
    pub fn set_numeric_text(
        &mut self,
        field: InputField,
        raw: &str,
    ) -> Result<&CalculatorOutput, CalculatorError> {
        let value = parse_numeric(field, raw)?;
        match field {
            InputField::HourlyRate => self.set_hourly_rate(value),
            InputField::TimeSaved => self.set_time_saved(value),
            InputField::Frequency => self.set_frequency(value),
            InputField::ImplementationDays => self.set_implementation_days(value),
            InputField::CostOfAi => self.set_cost_of_ai(value),
        }
    }

    fn recompute(&mut self) -> &CalculatorOutput {
        self.output = compute_savings(&self.input);
        &self.output
    }
}
