use loan_engine_core::payoff::{simulate_payoff, PAYOFF_CAP_MULTIPLE};
use loan_engine_core::schedule::{build_schedule, LoanTerms, ScheduleOutput};
use pretty_assertions::assert_eq;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

// ===========================================================================
// Accelerated Payoff Simulator tests
// ===========================================================================

fn car_loan_with_extra(extra: Decimal) -> LoanTerms {
    LoanTerms {
        principal: dec!(25_000),
        annual_rate_pct: dec!(12.5),
        term_periods: 48,
        extra_payment: extra,
        origination_fee_pct: Decimal::ZERO,
        monthly_income: Decimal::ZERO,
    }
}

#[test]
fn test_extra_payment_shortens_payoff() {
    let terms = car_loan_with_extra(dec!(100));
    let baseline = build_schedule(&terms).unwrap().result;
    let result = simulate_payoff(&terms, &baseline).unwrap();
    let p = &result.result;

    assert!(p.periods_to_payoff < 48, "got {}", p.periods_to_payoff);
    assert_eq!(p.months_saved, 48 - p.periods_to_payoff);
    assert!(p.interest_saved > Decimal::ZERO);
    assert!(p.total_interest_with_extra < baseline.total_interest);
    assert!(!p.cap_reached);
}

#[test]
fn test_zero_extra_payment_is_a_no_op() {
    let terms = car_loan_with_extra(Decimal::ZERO);
    let baseline = build_schedule(&terms).unwrap().result;
    let result = simulate_payoff(&terms, &baseline).unwrap();
    let p = &result.result;

    assert_eq!(p.periods_to_payoff, 48);
    assert_eq!(p.months_saved, 0);
    assert_eq!(p.interest_saved, Decimal::ZERO);
    assert_eq!(p.total_interest_with_extra, baseline.total_interest);
    assert!(!p.cap_reached);
}

#[test]
fn test_payoff_zero_rate_loan() {
    let terms = LoanTerms {
        principal: dec!(10_000),
        annual_rate_pct: Decimal::ZERO,
        term_periods: 24,
        extra_payment: dec!(100),
        origination_fee_pct: Decimal::ZERO,
        monthly_income: Decimal::ZERO,
    };
    let baseline = build_schedule(&terms).unwrap().result;
    let result = simulate_payoff(&terms, &baseline).unwrap();
    let p = &result.result;

    // 10_000 / (416.67 + 100) clears in 20 periods
    assert_eq!(p.periods_to_payoff, 20);
    assert_eq!(p.months_saved, 4);
    assert_eq!(p.interest_saved, Decimal::ZERO);
}

#[test]
fn test_payoff_cap_on_understated_baseline_payment() {
    // A baseline payment too small to outrun interest never clears the
    // balance; the loop must stop at the cap and say so.
    let terms = car_loan_with_extra(dec!(0.01));
    let starved_baseline = ScheduleOutput {
        periodic_payment: dec!(1),
        periods: Vec::new(),
        total_payment: dec!(48),
        total_interest: Decimal::ZERO,
        cumulative: Vec::new(),
    };
    let result = simulate_payoff(&terms, &starved_baseline).unwrap();
    let p = &result.result;

    assert!(p.cap_reached);
    assert_eq!(p.periods_to_payoff, 48 * PAYOFF_CAP_MULTIPLE);
    assert_eq!(p.interest_saved, Decimal::ZERO);
    assert!(!result.warnings.is_empty());
}

#[test]
fn test_larger_extra_payment_saves_more_interest() {
    let small = car_loan_with_extra(dec!(50));
    let large = car_loan_with_extra(dec!(250));
    let baseline = build_schedule(&small).unwrap().result;

    let with_small = simulate_payoff(&small, &baseline).unwrap().result;
    let with_large = simulate_payoff(&large, &baseline).unwrap().result;

    assert!(with_large.periods_to_payoff <= with_small.periods_to_payoff);
    assert!(with_large.interest_saved > with_small.interest_saved);
}
