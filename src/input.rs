//! Input boundary.
//!
//! Raw text from the command line or the configuration file is turned into a
//! [`CalculatorInput`] here. Values that are not finite, non-negative numbers
//! are rejected, so the model never sees NaN. Validation accumulates every
//! bad field instead of stopping at the first one.

use stillwater::{NonEmptyVec, Validation};

use crate::core::{CalculatorError, CalculatorInput, FrequencyUnit, InputField, TimeUnit};
use crate::region::RegionId;

/// Upper bound for every numeric field. With all five fields at this bound
/// the five-year savings stay around 1e40, far from `f64` overflow.
pub const MAX_INPUT_VALUE: f64 = 1e12;

pub type InputValidation<T> = Validation<T, NonEmptyVec<CalculatorError>>;

/// Field overrides as typed by the user. `None` keeps the base value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawInput {
    pub region: Option<String>,
    pub hourly_rate: Option<String>,
    pub time_saved: Option<String>,
    pub time_unit: Option<String>,
    pub frequency: Option<String>,
    pub frequency_unit: Option<String>,
    pub implementation_days: Option<String>,
    pub cost_of_ai: Option<String>,
    pub task_description: Option<String>,
}

impl RawInput {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Parse one numeric field. Empty, non-numeric, infinite, negative and
/// oversized values are errors.
pub fn parse_numeric(field: InputField, raw: &str) -> Result<f64, CalculatorError> {
    let trimmed = raw.trim();
    let value: f64 = trimmed
        .parse()
        .map_err(|_| CalculatorError::invalid_number(field, raw))?;
    check_numeric(field, value).map_err(|err| match err {
        CalculatorError::InvalidNumericInput { .. } => CalculatorError::invalid_number(field, raw),
        other => other,
    })
}

/// Check a value that is already a number.
pub fn check_numeric(field: InputField, value: f64) -> Result<f64, CalculatorError> {
    if !value.is_finite() {
        return Err(CalculatorError::invalid_number(field, value.to_string()));
    }
    if value < 0.0 {
        return Err(CalculatorError::NegativeValue { field, value });
    }
    if value > MAX_INPUT_VALUE {
        return Err(CalculatorError::ValueTooLarge {
            field,
            value,
            max: MAX_INPUT_VALUE,
        });
    }
    Ok(value)
}

/// Apply `raw` on top of `base`.
///
/// A region override also resets the hourly rate to that region's default,
/// unless `raw` carries its own hourly rate.
pub fn apply_raw_input(base: &CalculatorInput, raw: &RawInput) -> InputValidation<CalculatorInput> {
    let mut input = base.clone();
    let mut errors = Vec::new();

    if let Some(region) = &raw.region {
        match region.parse::<RegionId>() {
            Ok(region) => {
                input.region = region;
                input.hourly_rate = region.hourly_rate();
            }
            Err(err) => errors.push(err),
        }
    }

    let numeric_fields: [(InputField, &Option<String>, &mut f64); 5] = [
        (InputField::HourlyRate, &raw.hourly_rate, &mut input.hourly_rate),
        (InputField::TimeSaved, &raw.time_saved, &mut input.time_saved),
        (InputField::Frequency, &raw.frequency, &mut input.frequency),
        (
            InputField::ImplementationDays,
            &raw.implementation_days,
            &mut input.implementation_days,
        ),
        (InputField::CostOfAi, &raw.cost_of_ai, &mut input.cost_of_ai),
    ];
    for (field, text, slot) in numeric_fields {
        if let Some(text) = text {
            match parse_numeric(field, text) {
                Ok(value) => *slot = value,
                Err(err) => errors.push(err),
            }
        }
    }

    if let Some(unit) = &raw.time_unit {
        match unit.parse::<TimeUnit>() {
            Ok(unit) => input.time_unit = unit,
            Err(err) => errors.push(err),
        }
    }
    if let Some(unit) = &raw.frequency_unit {
        match unit.parse::<FrequencyUnit>() {
            Ok(unit) => input.frequency_unit = unit,
            Err(err) => errors.push(err),
        }
    }
    if let Some(text) = &raw.task_description {
        input.task_description = text.clone();
    }

    finish(input, errors)
}

/// Validate the numeric fields of an already-typed input.
pub fn validate_input(input: &CalculatorInput) -> InputValidation<()> {
    let errors: Vec<CalculatorError> = [
        (InputField::HourlyRate, input.hourly_rate),
        (InputField::TimeSaved, input.time_saved),
        (InputField::Frequency, input.frequency),
        (InputField::ImplementationDays, input.implementation_days),
        (InputField::CostOfAi, input.cost_of_ai),
    ]
    .into_iter()
    .filter_map(|(field, value)| check_numeric(field, value).err())
    .collect();

    finish((), errors)
}

/// Convert a validation into a plain `Result` with every error listed.
pub fn into_result<T>(validation: InputValidation<T>) -> Result<T, Vec<CalculatorError>> {
    match validation {
        Validation::Success(value) => Ok(value),
        Validation::Failure(errors) => Err(errors.into_vec()),
    }
}

fn finish<T>(value: T, errors: Vec<CalculatorError>) -> InputValidation<T> {
    let mut errors = errors.into_iter();
    match errors.next() {
        Some(head) => Validation::Failure(NonEmptyVec::new(head, errors.collect())),
        None => Validation::Success(value),
    }
}
