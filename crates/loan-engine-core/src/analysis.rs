use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::payoff::{simulate_payoff, PayoffOutput};
use crate::schedule::{build_schedule, LoanTerms, ScheduleOutput};
use crate::summary::{summarize, LoanSummary};
use crate::types::{with_metadata, ComputationOutput};
use crate::LoanEngineResult;

/// Everything the engine can say about one set of loan terms.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanAnalysis {
    pub schedule: ScheduleOutput,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payoff: Option<PayoffOutput>,
    pub summary: LoanSummary,
}

/// Run the full pipeline over one immutable parameter snapshot: payment
/// and schedule first, then the payoff simulation (only when an extra
/// payment is set), then the cost and risk summary. Pure function; callers
/// recompute from scratch on every parameter change.
pub fn analyze(terms: &LoanTerms) -> LoanEngineResult<ComputationOutput<LoanAnalysis>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    let schedule = build_schedule(terms)?;

    let payoff = if terms.extra_payment > Decimal::ZERO {
        let sim = simulate_payoff(terms, &schedule.result)?;
        warnings.extend(sim.warnings);
        Some(sim.result)
    } else {
        None
    };

    let summary = summarize(terms, &schedule.result)?;
    warnings.extend(summary.warnings);

    let output = LoanAnalysis {
        schedule: schedule.result,
        payoff,
        summary: summary.result,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Composed amortization, payoff simulation, and cost aggregation",
        terms,
        warnings,
        elapsed,
        output,
    ))
}
