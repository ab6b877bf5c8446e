//! The savings model.
//!
//! [`compute_savings`] is a pure, total function from a [`CalculatorInput`]
//! to a [`CalculatorOutput`]. Every step below is a small independent
//! function so each can be tested on its own:
//!
//! 1. normalize per-task time to hours and frequency to occurrences per year
//! 2. project savings over 1, 3 and 5 years
//! 3. find the break-even day
//! 4. compute the three-year ROI
//! 5. shape chart data

pub mod break_even;
pub mod chart;
pub mod normalize;
pub mod projection;
pub mod roi;

pub use break_even::{break_even_days, implementation_cost};
pub use chart::{productivity_breakdown, yearly_savings_series};
pub use normalize::{frequency_per_year, time_saved_in_hours};
pub use projection::project_savings;
pub use roi::roi_ratio;

use crate::core::{CalculatorInput, CalculatorOutput};
use crate::observability::{set_phase, CalculationPhase};

/// Annual hours that make up one full-time employee.
pub const FULL_TIME_HOURS_PER_YEAR: f64 = 2000.0;

pub fn compute_savings(input: &CalculatorInput) -> CalculatorOutput {
    let _phase = set_phase(CalculationPhase::Normalizing);
    let time_saved_in_hours = time_saved_in_hours(input.time_saved, input.time_unit);
    let frequency_per_year = frequency_per_year(input.frequency, input.frequency_unit);
    let hours_saved_per_year = time_saved_in_hours * frequency_per_year;

    let _phase = set_phase(CalculationPhase::Projecting);
    let savings = project_savings(hours_saved_per_year, input.hourly_rate);
    let cost_saved_per_year = savings.one_year.cost;

    let _phase = set_phase(CalculationPhase::BreakEven);
    let implementation_cost = implementation_cost(input.implementation_days, input.hourly_rate);
    // The solution cost is paid once; it is not spread over the years here.
    let total_cost = input.cost_of_ai + implementation_cost;
    let break_even = break_even_days(total_cost, cost_saved_per_year);

    let _phase = set_phase(CalculationPhase::Roi);
    let roi = roi_ratio(cost_saved_per_year, input.cost_of_ai);

    let _phase = set_phase(CalculationPhase::Charting);
    let yearly_savings = yearly_savings_series(cost_saved_per_year, input.cost_of_ai);
    let productivity = productivity_breakdown();

    tracing::debug!(
        hours_saved_per_year,
        cost_saved_per_year,
        total_cost,
        break_even = %break_even,
        "recomputed savings"
    );

    CalculatorOutput {
        time_saved_in_hours,
        frequency_per_year,
        savings,
        implementation_cost,
        total_cost,
        break_even,
        full_time_equivalent: hours_saved_per_year / FULL_TIME_HOURS_PER_YEAR,
        roi,
        yearly_savings,
        productivity,
    }
}
