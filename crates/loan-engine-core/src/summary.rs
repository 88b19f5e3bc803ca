use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::schedule::{validate_terms, LoanTerms, ScheduleOutput};
use crate::types::{with_metadata, ComputationOutput, Money, Percent};
use crate::LoanEngineResult;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Debt-to-income risk band. Boundaries are inclusive on the lower band:
/// DTI of exactly 20% is still Excellent, exactly 36% still Manageable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DtiClass {
    Excellent,
    Manageable,
    HighRisk,
}

impl DtiClass {
    pub fn from_ratio(dti_pct: Percent) -> Self {
        if dti_pct <= dec!(20) {
            DtiClass::Excellent
        } else if dti_pct <= dec!(36) {
            DtiClass::Manageable
        } else {
            DtiClass::HighRisk
        }
    }
}

/// Aggregate cost and risk figures for a loan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanSummary {
    pub periodic_payment: Money,
    pub total_payment: Money,
    pub total_interest: Money,
    pub origination_fee: Money,
    /// Total cost of credit spread evenly over the term, annualized. This
    /// is an approximation, not a regulatory (Truth-in-Lending) APR; exact
    /// compliance would require an iterative IRR solve instead.
    pub approximate_apr: Percent,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debt_to_income_pct: Option<Percent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dti_class: Option<DtiClass>,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Combine schedule totals with the one-time fee and external income into
/// the headline cost and risk figures.
pub fn summarize(
    terms: &LoanTerms,
    schedule: &ScheduleOutput,
) -> LoanEngineResult<ComputationOutput<LoanSummary>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    validate_terms(terms)?;

    let origination_fee = terms.principal * terms.origination_fee_pct / dec!(100);

    // Cost of credit over the whole term, restated as simple annual interest.
    let total_cost = schedule.total_interest + origination_fee;
    let years = Decimal::from(terms.term_periods) / dec!(12);
    let approximate_apr = total_cost / terms.principal / years * dec!(100);

    let (debt_to_income_pct, dti_class) = if terms.monthly_income > Decimal::ZERO {
        let dti = schedule.periodic_payment / terms.monthly_income * dec!(100);
        (Some(dti), Some(DtiClass::from_ratio(dti)))
    } else {
        warnings.push("Monthly income is zero; debt-to-income omitted".into());
        (None, None)
    };

    let output = LoanSummary {
        periodic_payment: schedule.periodic_payment,
        total_payment: schedule.total_payment,
        total_interest: schedule.total_interest,
        origination_fee,
        approximate_apr,
        debt_to_income_pct,
        dti_class,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Schedule totals with fee-loaded simple-interest APR approximation",
        terms,
        warnings,
        elapsed,
        output,
    ))
}
