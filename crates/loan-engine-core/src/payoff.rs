use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::schedule::{periodic_rate, validate_terms, LoanTerms, ScheduleOutput};
use crate::types::{with_metadata, ComputationOutput, Money};
use crate::LoanEngineResult;

/// Safety cap on the payoff loop, as a multiple of the baseline term. An
/// extra payment too small to outrun interest would otherwise never drive
/// the balance to zero.
pub const PAYOFF_CAP_MULTIPLE: u32 = 2;

/// Result of the accelerated-payoff simulation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayoffOutput {
    pub periods_to_payoff: u32,
    pub months_saved: u32,
    pub interest_saved: Money,
    pub total_interest_with_extra: Money,
    /// True when the iteration cap terminated the loop. The reported
    /// `periods_to_payoff` is then the cap itself, not an amortization
    /// point; read it as "the extra payment does not materially shorten
    /// the payoff".
    pub cap_reached: bool,
}

/// Simulate paying the baseline payment plus a fixed extra amount each
/// period, against the baseline schedule's totals.
pub fn simulate_payoff(
    terms: &LoanTerms,
    baseline: &ScheduleOutput,
) -> LoanEngineResult<ComputationOutput<PayoffOutput>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    validate_terms(terms)?;

    // No extra payment means no effect; skip the loop entirely.
    if terms.extra_payment.is_zero() {
        let output = PayoffOutput {
            periods_to_payoff: terms.term_periods,
            months_saved: 0,
            interest_saved: Decimal::ZERO,
            total_interest_with_extra: baseline.total_interest,
            cap_reached: false,
        };
        let elapsed = start.elapsed().as_micros() as u64;
        return Ok(with_metadata(
            "Balance-decay simulation under fixed extra principal payments",
            terms,
            warnings,
            elapsed,
            output,
        ));
    }

    let rate = periodic_rate(terms.annual_rate_pct);
    let effective_payment = baseline.periodic_payment + terms.extra_payment;
    let cap = terms.term_periods.saturating_mul(PAYOFF_CAP_MULTIPLE);

    let mut balance = terms.principal;
    let mut interest_accrued = Decimal::ZERO;
    let mut periods = 0u32;

    while balance > Decimal::ZERO && periods < cap {
        let interest = balance * rate;
        let principal = (effective_payment - interest).min(balance);
        interest_accrued += interest;
        balance -= principal;
        periods += 1;
    }

    let cap_reached = balance > Decimal::ZERO;
    if cap_reached {
        warnings.push(format!(
            "Payoff cap of {cap} periods reached before the balance cleared; \
             the extra payment does not materially shorten the payoff"
        ));
    }

    let output = PayoffOutput {
        periods_to_payoff: periods,
        months_saved: terms.term_periods.saturating_sub(periods),
        interest_saved: (baseline.total_interest - interest_accrued).max(Decimal::ZERO),
        total_interest_with_extra: interest_accrued,
        cap_reached,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Balance-decay simulation under fixed extra principal payments",
        terms,
        warnings,
        elapsed,
        output,
    ))
}
