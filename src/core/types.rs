use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::errors::CalculatorError;
use crate::region::RegionId;

/// Unit the per-task time saving is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TimeUnit {
    #[default]
    Minutes,
    Hours,
    Days,
}

impl TimeUnit {
    pub const ALL: [TimeUnit; 3] = [Self::Minutes, Self::Hours, Self::Days];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Minutes => "minutes",
            Self::Hours => "hours",
            Self::Days => "days",
        }
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimeUnit {
    type Err = CalculatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "minutes" | "minute" | "min" => Ok(Self::Minutes),
            "hours" | "hour" | "h" => Ok(Self::Hours),
            "days" | "day" | "d" => Ok(Self::Days),
            _ => Err(CalculatorError::UnknownTimeUnit(s.to_string())),
        }
    }
}

/// How often the task occurs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FrequencyUnit {
    #[default]
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl FrequencyUnit {
    pub const ALL: [FrequencyUnit; 4] = [Self::Daily, Self::Weekly, Self::Monthly, Self::Yearly];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
        }
    }
}

impl fmt::Display for FrequencyUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FrequencyUnit {
    type Err = CalculatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "daily" | "day" => Ok(Self::Daily),
            "weekly" | "week" => Ok(Self::Weekly),
            "monthly" | "month" => Ok(Self::Monthly),
            "yearly" | "year" | "annually" => Ok(Self::Yearly),
            _ => Err(CalculatorError::UnknownFrequencyUnit(s.to_string())),
        }
    }
}

/// Everything the user can edit in the calculator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculatorInput {
    pub region: RegionId,
    /// USD per hour
    pub hourly_rate: f64,
    pub time_saved: f64,
    pub time_unit: TimeUnit,
    pub frequency: f64,
    pub frequency_unit: FrequencyUnit,
    /// Business days spent implementing the automation
    pub implementation_days: f64,
    /// One-time solution cost, USD
    pub cost_of_ai: f64,
    /// Free-text label; never used in computation
    #[serde(default)]
    pub task_description: String,
}

impl Default for CalculatorInput {
    fn default() -> Self {
        let region = RegionId::default();
        Self {
            region,
            hourly_rate: region.hourly_rate(),
            time_saved: 30.0,
            time_unit: TimeUnit::Minutes,
            frequency: 10.0,
            frequency_unit: FrequencyUnit::Daily,
            implementation_days: 30.0,
            cost_of_ai: 5000.0,
            task_description: String::new(),
        }
    }
}

/// Hours and cost saved over one horizon.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct HorizonTotals {
    pub hours: f64,
    pub cost: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SavingsData {
    pub one_year: HorizonTotals,
    pub three_years: HorizonTotals,
    pub five_years: HorizonTotals,
}

/// Days until cumulative savings cover the total one-time cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BreakEven {
    Days(u64),
    /// Daily savings are zero; the cost is never recovered
    NotReachable,
}

impl BreakEven {
    pub fn days(&self) -> Result<u64, CalculatorError> {
        match self {
            Self::Days(days) => Ok(*days),
            Self::NotReachable => Err(CalculatorError::DivisionByZeroInBreakEven),
        }
    }

    pub fn is_reachable(&self) -> bool {
        matches!(self, Self::Days(_))
    }
}

impl fmt::Display for BreakEven {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Days(days) => write!(f, "{days} days"),
            Self::NotReachable => f.write_str("not reachable"),
        }
    }
}

/// Three-year return relative to the one-time solution cost.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoiRatio {
    Ratio(f64),
    /// Cost of AI is zero
    NotCalculable,
}

impl RoiRatio {
    pub fn value(&self) -> Result<f64, CalculatorError> {
        match self {
            Self::Ratio(ratio) => Ok(*ratio),
            Self::NotCalculable => Err(CalculatorError::DivisionByZeroInRoi),
        }
    }
}

/// One bar of the stacked yearly savings chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearlySavingsItem {
    pub name: String,
    pub net_savings: f64,
    /// Solution cost spread evenly across the three bars
    pub cost_of_ai: f64,
}

/// One slice of the productivity pie.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductivityItem {
    pub name: String,
    pub value: u32,
    pub fill: String,
}

/// Everything derived from a [`CalculatorInput`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculatorOutput {
    pub time_saved_in_hours: f64,
    pub frequency_per_year: f64,
    pub savings: SavingsData,
    pub implementation_cost: f64,
    pub total_cost: f64,
    pub break_even: BreakEven,
    pub full_time_equivalent: f64,
    pub roi: RoiRatio,
    pub yearly_savings: Vec<YearlySavingsItem>,
    pub productivity: Vec<ProductivityItem>,
}

impl CalculatorOutput {
    pub fn hours_saved_per_year(&self) -> f64 {
        self.savings.one_year.hours
    }

    pub fn cost_saved_per_year(&self) -> f64 {
        self.savings.one_year.cost
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_unit_parsing() {
        assert_eq!("minutes".parse::<TimeUnit>().unwrap(), TimeUnit::Minutes);
        assert_eq!(" Hours ".parse::<TimeUnit>().unwrap(), TimeUnit::Hours);
        assert_eq!("d".parse::<TimeUnit>().unwrap(), TimeUnit::Days);
        assert_eq!(
            "weeks".parse::<TimeUnit>(),
            Err(CalculatorError::UnknownTimeUnit("weeks".into()))
        );
    }

    #[test]
    fn test_frequency_unit_parsing_round_trips_display() {
        for unit in FrequencyUnit::ALL {
            assert_eq!(unit.to_string().parse::<FrequencyUnit>().unwrap(), unit);
        }
        assert!("hourly".parse::<FrequencyUnit>().is_err());
    }

    #[test]
    fn test_default_input_matches_widget_defaults() {
        let input = CalculatorInput::default();
        assert_eq!(input.region, RegionId::Usa);
        assert_eq!(input.hourly_rate, 35.0);
        assert_eq!(input.time_saved, 30.0);
        assert_eq!(input.time_unit, TimeUnit::Minutes);
        assert_eq!(input.frequency, 10.0);
        assert_eq!(input.frequency_unit, FrequencyUnit::Daily);
        assert_eq!(input.implementation_days, 30.0);
        assert_eq!(input.cost_of_ai, 5000.0);
        assert!(input.task_description.is_empty());
    }

    #[test]
    fn test_break_even_accessor() {
        assert_eq!(BreakEven::Days(77).days(), Ok(77));
        assert_eq!(
            BreakEven::NotReachable.days(),
            Err(CalculatorError::DivisionByZeroInBreakEven)
        );
        assert_eq!(BreakEven::NotReachable.to_string(), "not reachable");
        assert_eq!(BreakEven::Days(3).to_string(), "3 days");
    }

    #[test]
    fn test_roi_accessor() {
        assert_eq!(RoiRatio::Ratio(25.25).value(), Ok(25.25));
        assert_eq!(
            RoiRatio::NotCalculable.value(),
            Err(CalculatorError::DivisionByZeroInRoi)
        );
    }

    #[test]
    fn test_break_even_serializes_as_tagged_value() {
        let json = serde_json::to_string(&BreakEven::Days(77)).unwrap();
        assert_eq!(json, r#"{"days":77}"#);
        let json = serde_json::to_string(&BreakEven::NotReachable).unwrap();
        assert_eq!(json, r#""not_reachable""#);
    }
}
