use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use loan_engine_core::analysis::analyze;
use loan_engine_core::payoff::simulate_payoff;
use loan_engine_core::schedule::{build_schedule, LoanTerms};
use loan_engine_core::summary::summarize;

use crate::input;

/// Shared arguments for every loan computation
#[derive(Args)]
#[command(allow_hyphen_values = true)]
pub struct LoanArgs {
    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Amount financed
    #[arg(long)]
    pub principal: Option<Decimal>,

    /// Nominal annual rate, percent units (12.5 = 12.5%)
    #[arg(long, alias = "apr")]
    pub rate: Option<Decimal>,

    /// Number of monthly payment periods
    #[arg(long, alias = "months")]
    pub term: Option<u32>,

    /// Additional principal-directed payment per period
    #[arg(long, default_value = "0")]
    pub extra_payment: Decimal,

    /// One-time origination fee, percent of principal
    #[arg(long, alias = "fee", default_value = "0")]
    pub origination_fee: Decimal,

    /// Gross monthly income (for debt-to-income classification)
    #[arg(long, alias = "income", default_value = "0")]
    pub monthly_income: Decimal,
}

fn resolve_terms(args: LoanArgs) -> Result<LoanTerms, Box<dyn std::error::Error>> {
    if let Some(ref path) = args.input {
        return Ok(input::file::read_json(path)?);
    }
    if let Some(data) = input::stdin::read_stdin()? {
        return Ok(serde_json::from_value(data)?);
    }
    Ok(LoanTerms {
        principal: args
            .principal
            .ok_or("--principal is required (or provide --input)")?,
        annual_rate_pct: args.rate.ok_or("--rate is required (or provide --input)")?,
        term_periods: args.term.ok_or("--term is required (or provide --input)")?,
        extra_payment: args.extra_payment,
        origination_fee_pct: args.origination_fee,
        monthly_income: args.monthly_income,
    })
}

pub fn run_schedule(args: LoanArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let terms = resolve_terms(args)?;
    let output = build_schedule(&terms)?;
    Ok(serde_json::to_value(output)?)
}

pub fn run_payoff(args: LoanArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let terms = resolve_terms(args)?;
    let baseline = build_schedule(&terms)?;
    let output = simulate_payoff(&terms, &baseline.result)?;
    Ok(serde_json::to_value(output)?)
}

pub fn run_summary(args: LoanArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let terms = resolve_terms(args)?;
    let schedule = build_schedule(&terms)?;
    let output = summarize(&terms, &schedule.result)?;
    Ok(serde_json::to_value(output)?)
}

pub fn run_analyze(args: LoanArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let terms = resolve_terms(args)?;
    let output = analyze(&terms)?;
    Ok(serde_json::to_value(output)?)
}
