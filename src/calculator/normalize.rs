//! Unit normalization.
//!
//! Per-task time is converted to hours and task frequency to occurrences per
//! year. The conversion factors are fixed business assumptions: an 8-hour
//! workday and 250 working days a year.

use crate::core::{FrequencyUnit, TimeUnit};

pub const MINUTES_PER_HOUR: f64 = 60.0;
pub const HOURS_PER_WORKDAY: f64 = 8.0;
pub const WORKDAYS_PER_YEAR: f64 = 250.0;
pub const WEEKS_PER_YEAR: f64 = 52.0;
pub const MONTHS_PER_YEAR: f64 = 12.0;

pub fn time_saved_in_hours(time_saved: f64, unit: TimeUnit) -> f64 {
    match unit {
        TimeUnit::Minutes => time_saved / MINUTES_PER_HOUR,
        TimeUnit::Hours => time_saved,
        TimeUnit::Days => time_saved * HOURS_PER_WORKDAY,
    }
}

pub fn frequency_per_year(frequency: f64, unit: FrequencyUnit) -> f64 {
    match unit {
        FrequencyUnit::Daily => frequency * WORKDAYS_PER_YEAR,
        FrequencyUnit::Weekly => frequency * WEEKS_PER_YEAR,
        FrequencyUnit::Monthly => frequency * MONTHS_PER_YEAR,
        FrequencyUnit::Yearly => frequency,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sixty_minutes_is_one_hour_is_an_eighth_of_a_day() {
        assert_eq!(time_saved_in_hours(60.0, TimeUnit::Minutes), 1.0);
        assert_eq!(time_saved_in_hours(1.0, TimeUnit::Hours), 1.0);
        assert_eq!(time_saved_in_hours(0.125, TimeUnit::Days), 1.0);
    }

    #[test]
    fn test_annualization_factors() {
        assert_eq!(frequency_per_year(1.0, FrequencyUnit::Daily), 250.0);
        assert_eq!(frequency_per_year(1.0, FrequencyUnit::Weekly), 52.0);
        assert_eq!(frequency_per_year(1.0, FrequencyUnit::Monthly), 12.0);
        assert_eq!(frequency_per_year(1.0, FrequencyUnit::Yearly), 1.0);
    }

    #[test]
    fn test_default_widget_values() {
        assert_eq!(time_saved_in_hours(30.0, TimeUnit::Minutes), 0.5);
        assert_eq!(frequency_per_year(10.0, FrequencyUnit::Daily), 2500.0);
    }

    #[test]
    fn test_zero_stays_zero() {
        for unit in TimeUnit::ALL {
            assert_eq!(time_saved_in_hours(0.0, unit), 0.0);
        }
        for unit in FrequencyUnit::ALL {
            assert_eq!(frequency_per_year(0.0, unit), 0.0);
        }
    }
}
