//! Chart-ready datasets for the results panel.
//!
//! The yearly series spreads the solution cost evenly over three bars. The
//! break-even and ROI figures treat the same cost as a single up-front
//! payment. The two views disagree on purpose: the chart shows the cost
//! alongside each year's savings, the figures show when it is paid back.
//! Keep both as they are.

use crate::core::{ProductivityItem, YearlySavingsItem};

pub const CHART_YEARS: usize = 3;

/// Static illustrative split; not derived from any input.
pub const PRODUCTIVITY_SHARE: u32 = 59;
pub const EFFECTIVENESS_SHARE: u32 = 41;

const PRODUCTIVITY_FILL: &str = "#7DD3FC";
const EFFECTIVENESS_FILL: &str = "#0284C7";

pub fn yearly_savings_series(cost_saved_per_year: f64, cost_of_ai: f64) -> Vec<YearlySavingsItem> {
    let amortized = cost_of_ai / CHART_YEARS as f64;
    (1..=CHART_YEARS)
        .map(|year| YearlySavingsItem {
            name: format!("Year {year}"),
            net_savings: cost_saved_per_year,
            cost_of_ai: amortized,
        })
        .collect()
}

pub fn productivity_breakdown() -> Vec<ProductivityItem> {
    vec![
        ProductivityItem {
            name: "Productivity".to_string(),
            value: PRODUCTIVITY_SHARE,
            fill: PRODUCTIVITY_FILL.to_string(),
        },
        ProductivityItem {
            name: "Effectiveness".to_string(),
            value: EFFECTIVENESS_SHARE,
            fill: EFFECTIVENESS_FILL.to_string(),
        },
    ]
}
