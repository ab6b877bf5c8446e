//! Session behaviour as seen by an interactive front end.

use pretty_assertions::assert_eq;
use savingscalc::{
    BreakEven, CalculatorError, CalculatorSession, FrequencyUnit, InputField, RegionId, RoiRatio,
    TimeUnit,
};

#[test]
fn test_region_switch_then_manual_rate() {
    let mut session = CalculatorSession::new();

    let output = session.select_region(RegionId::Asia);
    assert_eq!(output.cost_saved_per_year(), 25_000.0);

    session.set_hourly_rate(40.0).unwrap();
    assert_eq!(session.selected_region(), RegionId::Asia);
    assert_eq!(session.output().cost_saved_per_year(), 50_000.0);
}

#[test]
fn test_region_by_id_is_case_insensitive() {
    let mut session = CalculatorSession::new();
    session.select_region_by_id("GCC").unwrap();
    assert_eq!(session.selected_region(), RegionId::Gcc);
    assert_eq!(session.input().hourly_rate, 25.0);
}

#[test]
fn test_text_edits_follow_form_semantics() {
    let mut session = CalculatorSession::new();

    session.set_numeric_text(InputField::TimeSaved, "1.5").unwrap();
    session.set_time_unit(TimeUnit::Hours);
    session.set_numeric_text(InputField::Frequency, "4").unwrap();
    session.set_frequency_unit(FrequencyUnit::Monthly);

    // 1.5h * 48 runs
    assert_eq!(session.output().hours_saved_per_year(), 72.0);

    let err = session
        .set_numeric_text(InputField::HourlyRate, "")
        .unwrap_err();
    assert_eq!(err, CalculatorError::invalid_number(InputField::HourlyRate, ""));
    assert_eq!(session.input().hourly_rate, 35.0);

    let err = session
        .set_numeric_text(InputField::ImplementationDays, "-1")
        .unwrap_err();
    assert!(err.is_boundary_error());
    assert_eq!(session.input().implementation_days, 30.0);
}

#[test]
fn test_edge_cases_surface_as_variants() {
    let mut session = CalculatorSession::new();

    session.set_frequency(0.0).unwrap();
    assert_eq!(session.output().break_even, BreakEven::NotReachable);
    assert_eq!(
        session.output().break_even.days(),
        Err(CalculatorError::DivisionByZeroInBreakEven)
    );

    session.set_cost_of_ai(0.0).unwrap();
    assert_eq!(session.output().roi, RoiRatio::NotCalculable);
    assert_eq!(
        session.output().roi.value(),
        Err(CalculatorError::DivisionByZeroInRoi)
    );
}

#[test]
fn test_output_always_matches_input() {
    let mut session = CalculatorSession::new();
    session.select_region(RegionId::Europe);
    session.set_time_saved(45.0).unwrap();
    session.set_task_description("Ticket triage");

    let fresh = CalculatorSession::with_input(session.input().clone()).unwrap();
    assert_eq!(session.output(), fresh.output());
}
