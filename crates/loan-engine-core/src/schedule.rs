use rust_decimal::Decimal;
use rust_decimal::MathematicalOps;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::error::LoanEngineError;
use crate::types::{with_metadata, ComputationOutput, Money, Percent, Rate};
use crate::LoanEngineResult;

const PERIODS_PER_YEAR: Decimal = dec!(12);

// ---------------------------------------------------------------------------
// Input / Output types
// ---------------------------------------------------------------------------

/// Loan parameters as supplied by the caller. Rates and fees arrive in
/// percent units; monthly figures throughout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanTerms {
    /// Amount financed.
    pub principal: Money,
    /// Nominal annual rate in percent units (12.5 = 12.5%).
    pub annual_rate_pct: Percent,
    /// Number of monthly payment periods.
    pub term_periods: u32,
    /// Additional principal-directed payment per period.
    #[serde(default)]
    pub extra_payment: Money,
    /// One-time origination fee in percent of principal.
    #[serde(default)]
    pub origination_fee_pct: Percent,
    /// Gross monthly income, used only for debt-to-income classification.
    #[serde(default)]
    pub monthly_income: Money,
}

/// One row of the amortization schedule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentPeriod {
    pub index: u32,
    pub payment: Money,
    pub interest: Money,
    pub principal: Money,
    /// Balance remaining after this period's payment.
    pub balance: Money,
}

/// Running totals per period, for cumulative principal/interest charting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CumulativePoint {
    pub index: u32,
    pub principal_paid: Money,
    pub interest_paid: Money,
}

/// Full baseline schedule output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleOutput {
    pub periodic_payment: Money,
    pub periods: Vec<PaymentPeriod>,
    pub total_payment: Money,
    pub total_interest: Money,
    pub cumulative: Vec<CumulativePoint>,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Convert a nominal annual percentage rate to a fractional monthly rate.
pub fn periodic_rate(annual_rate_pct: Percent) -> Rate {
    annual_rate_pct / PERIODS_PER_YEAR / dec!(100)
}

/// Fixed periodic payment for a fully-amortizing loan.
///
/// Standard annuity formula `P * r * (1+r)^n / ((1+r)^n - 1)`. A zero rate
/// degenerates the formula (the denominator collapses to zero), so it is
/// handled as straight principal division rather than an error.
pub fn periodic_payment(
    principal: Money,
    annual_rate_pct: Percent,
    term_periods: u32,
) -> LoanEngineResult<Money> {
    if principal <= Decimal::ZERO {
        return Err(LoanEngineError::InvalidInput {
            field: "principal".into(),
            reason: "Principal must be positive".into(),
        });
    }
    if term_periods == 0 {
        return Err(LoanEngineError::InvalidInput {
            field: "term_periods".into(),
            reason: "Term must be at least 1 period".into(),
        });
    }
    if annual_rate_pct < Decimal::ZERO {
        return Err(LoanEngineError::InvalidInput {
            field: "annual_rate_pct".into(),
            reason: "Rate must be non-negative".into(),
        });
    }

    let rate = periodic_rate(annual_rate_pct);
    if rate.is_zero() {
        return Ok(principal / Decimal::from(term_periods));
    }

    let growth = (Decimal::ONE + rate).powd(Decimal::from(term_periods));
    let denominator = growth - Decimal::ONE;
    if denominator.is_zero() {
        return Err(LoanEngineError::DivisionByZero {
            context: "annuity factor".into(),
        });
    }

    Ok(principal * rate * growth / denominator)
}

/// Validate a full set of loan terms before running any component.
pub fn validate_terms(terms: &LoanTerms) -> LoanEngineResult<()> {
    // principal / term / rate checks live in periodic_payment, the single
    // entry point to the pipeline
    if terms.extra_payment < Decimal::ZERO {
        return Err(LoanEngineError::InvalidInput {
            field: "extra_payment".into(),
            reason: "Extra payment must be non-negative".into(),
        });
    }
    if terms.origination_fee_pct < Decimal::ZERO {
        return Err(LoanEngineError::InvalidInput {
            field: "origination_fee_pct".into(),
            reason: "Origination fee must be non-negative".into(),
        });
    }
    if terms.monthly_income < Decimal::ZERO {
        return Err(LoanEngineError::InvalidInput {
            field: "monthly_income".into(),
            reason: "Monthly income must be non-negative".into(),
        });
    }
    Ok(())
}

/// Expand loan terms into a full period-by-period amortization schedule.
///
/// Rounding drift is corrected only at the terminal period: the final row's
/// principal portion is set to whatever the earlier rows have not yet repaid
/// and its payment recomputed, so the principal portions sum to the loan
/// principal exactly and earlier rows stay independently reproducible.
pub fn build_schedule(terms: &LoanTerms) -> LoanEngineResult<ComputationOutput<ScheduleOutput>> {
    let start = Instant::now();
    let warnings: Vec<String> = Vec::new();

    validate_terms(terms)?;
    let payment = periodic_payment(terms.principal, terms.annual_rate_pct, terms.term_periods)?;
    let rate = periodic_rate(terms.annual_rate_pct);

    let n = terms.term_periods;
    let mut periods = Vec::with_capacity(n as usize);
    let mut cumulative = Vec::with_capacity(n as usize);
    let mut balance = terms.principal;
    let mut principal_paid = Decimal::ZERO;
    let mut interest_paid = Decimal::ZERO;

    for index in 1..=n {
        let interest = balance * rate;
        let mut principal = payment - interest;
        let mut row_payment = payment;

        // Terminal clamp: the last row repays exactly what the earlier rows
        // have not, absorbing the accumulated 28-digit rounding drift in one
        // place. Decimal rounds `payment - interest` and the running balance
        // at 28 significant digits, so clamping to `balance` alone would
        // leave the principal portions summing a hair off the principal.
        if index == n || principal >= balance {
            principal = terms.principal - principal_paid;
            row_payment = principal + interest;
            balance = Decimal::ZERO;
        } else {
            balance -= principal;
        }

        principal_paid += principal;
        interest_paid += interest;

        periods.push(PaymentPeriod {
            index,
            payment: row_payment,
            interest,
            principal,
            balance,
        });
        cumulative.push(CumulativePoint {
            index,
            principal_paid,
            interest_paid,
        });
    }

    let total_payment = principal_paid + interest_paid;
    let output = ScheduleOutput {
        periodic_payment: payment,
        periods,
        total_payment,
        total_interest: interest_paid,
        cumulative,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Fixed-payment annuity amortization, terminal-period drift clamp",
        terms,
        warnings,
        elapsed,
        output,
    ))
}
