use loan_engine_core::analysis::analyze;
use loan_engine_core::schedule::{build_schedule, LoanTerms};
use loan_engine_core::summary::{summarize, DtiClass};
use pretty_assertions::assert_eq;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

// ===========================================================================
// Cost & Risk Aggregator tests
// ===========================================================================

fn car_loan_with_income() -> LoanTerms {
    LoanTerms {
        principal: dec!(25_000),
        annual_rate_pct: dec!(12.5),
        term_periods: 48,
        extra_payment: Decimal::ZERO,
        origination_fee_pct: Decimal::ZERO,
        monthly_income: dec!(5_000),
    }
}

fn assert_close(actual: Decimal, expected: Decimal, tolerance: Decimal) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {expected} ± {tolerance}, got {actual}",
    );
}

#[test]
fn test_dti_classification_on_car_loan() {
    let terms = car_loan_with_income();
    let schedule = build_schedule(&terms).unwrap().result;
    let result = summarize(&terms, &schedule).unwrap();
    let s = &result.result;

    // ~664.50 / 5000 ≈ 13.29%
    assert_close(s.debt_to_income_pct.unwrap(), dec!(13.29), dec!(0.05));
    assert_eq!(s.dti_class, Some(DtiClass::Excellent));
}

#[test]
fn test_dti_band_boundaries_inclusive_on_lower_band() {
    assert_eq!(DtiClass::from_ratio(dec!(13.29)), DtiClass::Excellent);
    assert_eq!(DtiClass::from_ratio(dec!(20)), DtiClass::Excellent);
    assert_eq!(DtiClass::from_ratio(dec!(20.01)), DtiClass::Manageable);
    assert_eq!(DtiClass::from_ratio(dec!(36)), DtiClass::Manageable);
    assert_eq!(DtiClass::from_ratio(dec!(36.01)), DtiClass::HighRisk);
}

#[test]
fn test_zero_income_omits_dti_with_warning() {
    let mut terms = car_loan_with_income();
    terms.monthly_income = Decimal::ZERO;
    let schedule = build_schedule(&terms).unwrap().result;
    let result = summarize(&terms, &schedule).unwrap();

    assert_eq!(result.result.debt_to_income_pct, None);
    assert_eq!(result.result.dti_class, None);
    assert!(!result.warnings.is_empty());
}

#[test]
fn test_origination_fee_and_apr_zero_rate() {
    // With no interest the APR approximation is driven by the fee alone:
    // 200 fee on 10k over exactly one year = 2%
    let terms = LoanTerms {
        principal: dec!(10_000),
        annual_rate_pct: Decimal::ZERO,
        term_periods: 12,
        extra_payment: Decimal::ZERO,
        origination_fee_pct: dec!(2),
        monthly_income: Decimal::ZERO,
    };
    let schedule = build_schedule(&terms).unwrap().result;
    let result = summarize(&terms, &schedule).unwrap();
    let s = &result.result;

    assert_eq!(s.origination_fee, dec!(200));
    assert_eq!(s.total_interest, Decimal::ZERO);
    assert_eq!(s.approximate_apr, dec!(2));
}

#[test]
fn test_apr_approximation_without_fees() {
    let terms = car_loan_with_income();
    let schedule = build_schedule(&terms).unwrap().result;
    let result = summarize(&terms, &schedule).unwrap();

    // total_interest / principal / 4 years, in percent
    let expected = schedule.total_interest / dec!(25_000) / dec!(4) * dec!(100);
    assert_eq!(result.result.approximate_apr, expected);
    // Well below the nominal 12.5% because the balance amortizes
    assert!(result.result.approximate_apr < dec!(12.5));
}

// ===========================================================================
// Full pipeline tests
// ===========================================================================

#[test]
fn test_analyze_composes_all_components() {
    let mut terms = car_loan_with_income();
    terms.extra_payment = dec!(100);
    terms.origination_fee_pct = dec!(1);

    let result = analyze(&terms).unwrap();
    let a = &result.result;

    assert_eq!(a.schedule.periods.len(), 48);
    assert_eq!(a.summary.periodic_payment, a.schedule.periodic_payment);
    assert_eq!(a.summary.origination_fee, dec!(250));

    let payoff = a.payoff.as_ref().unwrap();
    assert!(payoff.periods_to_payoff < 48);
    assert!(payoff.interest_saved > Decimal::ZERO);
}

#[test]
fn test_analyze_omits_payoff_without_extra_payment() {
    let result = analyze(&car_loan_with_income()).unwrap();
    assert!(result.result.payoff.is_none());
}

#[test]
fn test_analyze_is_idempotent() {
    let terms = car_loan_with_income();
    let first = analyze(&terms).unwrap();
    let second = analyze(&terms).unwrap();
    assert_eq!(
        serde_json::to_value(&first.result).unwrap(),
        serde_json::to_value(&second.result).unwrap(),
    );
}
