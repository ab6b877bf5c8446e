use super::normalize::{HOURS_PER_WORKDAY, WORKDAYS_PER_YEAR};
use crate::core::BreakEven;

/// Implementation labor, valued at the same hourly rate as the saved time.
pub fn implementation_cost(implementation_days: f64, hourly_rate: f64) -> f64 {
    implementation_days * HOURS_PER_WORKDAY * hourly_rate
}

/// Working days until cumulative savings cover `total_cost`.
///
/// Returns [`BreakEven::NotReachable`] when there are no daily savings to
/// recover the cost with, when either amount is not finite, or when the day
/// count does not fit in a `u64`.
pub fn break_even_days(total_cost: f64, cost_saved_per_year: f64) -> BreakEven {
    let daily_savings = cost_saved_per_year / WORKDAYS_PER_YEAR;
    if !total_cost.is_finite() || !daily_savings.is_finite() || daily_savings <= 0.0 {
        return BreakEven::NotReachable;
    }

    let days = (total_cost / daily_savings).ceil();
    if !days.is_finite() || days >= u64::MAX as f64 {
        return BreakEven::NotReachable;
    }

    BreakEven::Days(days.max(0.0) as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_implementation_cost_uses_eight_hour_days() {
        assert_eq!(implementation_cost(30.0, 35.0), 8400.0);
        assert_eq!(implementation_cost(0.0, 35.0), 0.0);
    }

    #[test]
    fn test_break_even_rounds_up() {
        // 13_400 / 175 = 76.57...
        assert_eq!(break_even_days(13_400.0, 43_750.0), BreakEven::Days(77));
    }

    #[test]
    fn test_exact_division_does_not_round_up() {
        assert_eq!(break_even_days(1000.0, 25_000.0), BreakEven::Days(10));
    }

    #[test]
    fn test_zero_savings_is_not_reachable() {
        assert_eq!(break_even_days(13_400.0, 0.0), BreakEven::NotReachable);
        assert_eq!(break_even_days(0.0, 0.0), BreakEven::NotReachable);
    }

    #[test]
    fn test_overflowed_amounts_are_not_reachable() {
        assert_eq!(break_even_days(13_400.0, f64::INFINITY), BreakEven::NotReachable);
        assert_eq!(break_even_days(f64::INFINITY, 43_750.0), BreakEven::NotReachable);
        assert_eq!(break_even_days(1e30, 1e-3), BreakEven::NotReachable);
    }

    #[test]
    fn test_zero_cost_breaks_even_immediately() {
        assert_eq!(break_even_days(0.0, 43_750.0), BreakEven::Days(0));
    }

    #[test]
    fn test_nan_savings_is_not_reachable() {
        assert_eq!(break_even_days(100.0, f64::NAN), BreakEven::NotReachable);
    }
}
