use crate::core::{HorizonTotals, SavingsData};

/// Projects constant yearly savings over 1, 3 and 5 years.
///
/// Savings scale linearly; there is no discounting or growth curve.
pub fn project_savings(hours_saved_per_year: f64, hourly_rate: f64) -> SavingsData {
    let cost_saved_per_year = hours_saved_per_year * hourly_rate;
    let horizon = |years: f64| HorizonTotals {
        hours: hours_saved_per_year * years,
        cost: cost_saved_per_year * years,
    };

    SavingsData {
        one_year: horizon(1.0),
        three_years: horizon(3.0),
        five_years: horizon(5.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_projection_for_default_inputs() {
        let savings = project_savings(1250.0, 35.0);
        assert_eq!(savings.one_year, HorizonTotals { hours: 1250.0, cost: 43_750.0 });
        assert_eq!(savings.three_years, HorizonTotals { hours: 3750.0, cost: 131_250.0 });
        assert_eq!(savings.five_years, HorizonTotals { hours: 6250.0, cost: 218_750.0 });
    }

    #[test]
    fn test_zero_hours_projects_nothing() {
        assert_eq!(project_savings(0.0, 35.0), SavingsData::default());
    }
}
