use crate::core::RoiRatio;

/// Years of savings counted towards the ROI.
pub const ROI_HORIZON_YEARS: f64 = 3.0;

/// `(gross - cost_of_ai) / cost_of_ai`, with gross savings taken over
/// [`ROI_HORIZON_YEARS`].
///
/// The solution cost is one-time. A zero cost has no meaningful ratio.
pub fn roi_ratio(cost_saved_per_year: f64, cost_of_ai: f64) -> RoiRatio {
    if cost_of_ai == 0.0 {
        return RoiRatio::NotCalculable;
    }

    let gross_savings = cost_saved_per_year * ROI_HORIZON_YEARS;
    let ratio = (gross_savings - cost_of_ai) / cost_of_ai;
    if ratio.is_finite() {
        RoiRatio::Ratio(ratio)
    } else {
        RoiRatio::NotCalculable
    }
}
