//! Display values shown next to the raw model output.
//!
//! All report formats go through [`DisplayValues`] so the terminal, Markdown
//! and JSON views agree on rounding.

use serde::Serialize;

use crate::core::{BreakEven, CalculatorInput, CalculatorOutput, RoiRatio};

/// Rounds halves towards positive infinity (`2.5 -> 3`, `-2.5 -> -2`).
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// `$131,250`, `-$1,200`. Rounds to whole dollars.
pub fn format_currency(value: f64) -> String {
    if !value.is_finite() {
        let symbol = if value < 0.0 { "-∞" } else { "∞" };
        return symbol.to_string();
    }
    let rounded = round_half_up(value);
    let sign = if rounded < 0.0 { "-" } else { "" };
    format!("{sign}${}", group_thousands(&format!("{:.0}", rounded.abs())))
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// `"25x"`; never below `"1x"`. A zero solution cost shows `"∞"`.
pub fn roi_multiple_label(roi: RoiRatio) -> String {
    match roi {
        RoiRatio::Ratio(ratio) => format!("{}x", round_half_up(ratio).max(1.0) as i64),
        RoiRatio::NotCalculable => "∞".to_string(),
    }
}

/// Share of the bar filled by implementation time, out of implementation
/// plus break-even time. Capped at 100.
pub fn break_even_progress_percent(implementation_days: f64, break_even: BreakEven) -> f64 {
    let BreakEven::Days(days) = break_even else {
        return 0.0;
    };
    let total = implementation_days + days as f64;
    if total <= 0.0 {
        return 0.0;
    }
    (implementation_days / total * 100.0).min(100.0)
}

/// One decimal, halves rounded up (`0.25 -> "0.3"`).
pub fn fte_label(full_time_equivalent: f64) -> String {
    format!("{:.1}", round_half_up(full_time_equivalent * 10.0) / 10.0)
}

pub fn break_even_label(break_even: BreakEven) -> String {
    break_even.to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayValues {
    /// Three-year gross savings minus the one-time cost of AI
    pub net_savings: String,
    pub gross_savings: String,
    pub roi_multiple: String,
    pub break_even: String,
    pub break_even_progress_percent: f64,
    pub full_time_equivalent: String,
    pub yearly_savings: String,
}

impl DisplayValues {
    pub fn new(input: &CalculatorInput, output: &CalculatorOutput) -> Self {
        let three_year_gross = output.savings.three_years.cost;
        Self {
            net_savings: format_currency(three_year_gross - input.cost_of_ai),
            gross_savings: format_currency(three_year_gross),
            roi_multiple: roi_multiple_label(output.roi),
            break_even: break_even_label(output.break_even),
            break_even_progress_percent: break_even_progress_percent(
                input.implementation_days,
                output.break_even,
            ),
            full_time_equivalent: fte_label(output.full_time_equivalent),
            yearly_savings: format_currency(output.cost_saved_per_year()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::compute_savings;

    #[test]
    fn test_currency_grouping() {
        assert_eq!(format_currency(0.0), "$0");
        assert_eq!(format_currency(999.0), "$999");
        assert_eq!(format_currency(1000.0), "$1,000");
        assert_eq!(format_currency(131_250.0), "$131,250");
        assert_eq!(format_currency(1_234_567.4), "$1,234,567");
        assert_eq!(format_currency(-1200.0), "-$1,200");
    }

    #[test]
    fn test_currency_beyond_u64_range() {
        assert_eq!(format_currency(2e19), "$20,000,000,000,000,000,000");
        assert_eq!(format_currency(f64::INFINITY), "∞");
    }

    #[test]
    fn test_fte_label_rounds_halves_up() {
        assert_eq!(fte_label(0.25), "0.3");
        assert_eq!(fte_label(0.625), "0.6");
        assert_eq!(fte_label(0.0), "0.0");
        assert_eq!(fte_label(1.96), "2.0");
    }

    #[test]
    fn test_display_fte_for_500_hours() {
        let input = CalculatorInput {
            time_saved: 2.0,
            time_unit: crate::core::TimeUnit::Hours,
            frequency: 250.0,
            frequency_unit: crate::core::FrequencyUnit::Yearly,
            ..CalculatorInput::default()
        };
        let output = compute_savings(&input);
        assert_eq!(output.full_time_equivalent, 0.25);
        assert_eq!(DisplayValues::new(&input, &output).full_time_equivalent, "0.3");
    }

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up(2.5), 3.0);
        assert_eq!(round_half_up(-2.5), -2.0);
        assert_eq!(round_half_up(25.25), 25.0);
    }

    #[test]
    fn test_roi_label_clamps_to_one() {
        assert_eq!(roi_multiple_label(RoiRatio::Ratio(25.25)), "25x");
        assert_eq!(roi_multiple_label(RoiRatio::Ratio(0.2)), "1x");
        assert_eq!(roi_multiple_label(RoiRatio::Ratio(-1.0)), "1x");
        assert_eq!(roi_multiple_label(RoiRatio::NotCalculable), "∞");
    }

    #[test]
    fn test_progress_percent() {
        // 30 / (30 + 77)
        let pct = break_even_progress_percent(30.0, BreakEven::Days(77));
        assert!((pct - 28.037_383).abs() < 1e-6);
        assert_eq!(break_even_progress_percent(30.0, BreakEven::NotReachable), 0.0);
        assert_eq!(break_even_progress_percent(0.0, BreakEven::Days(0)), 0.0);
        assert_eq!(break_even_progress_percent(10.0, BreakEven::Days(0)), 100.0);
    }

    #[test]
    fn test_display_values_for_default_scenario() {
        let input = CalculatorInput::default();
        let output = compute_savings(&input);
        let display = DisplayValues::new(&input, &output);

        assert_eq!(display.net_savings, "$126,250");
        assert_eq!(display.gross_savings, "$131,250");
        assert_eq!(display.roi_multiple, "25x");
        assert_eq!(display.break_even, "77 days");
        assert_eq!(display.full_time_equivalent, "0.6");
        assert_eq!(display.yearly_savings, "$43,750");
    }
}
