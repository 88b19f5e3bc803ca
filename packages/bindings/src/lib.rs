use napi::Result as NapiResult;
use napi_derive::napi;

use loan_engine_core::schedule::LoanTerms;

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

fn parse_terms(input_json: &str) -> NapiResult<LoanTerms> {
    serde_json::from_str(input_json).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Loan engine
// ---------------------------------------------------------------------------

#[napi]
pub fn build_schedule(input_json: String) -> NapiResult<String> {
    let terms = parse_terms(&input_json)?;
    let output = loan_engine_core::schedule::build_schedule(&terms).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn simulate_payoff(input_json: String) -> NapiResult<String> {
    let terms = parse_terms(&input_json)?;
    let baseline =
        loan_engine_core::schedule::build_schedule(&terms).map_err(to_napi_error)?;
    let output = loan_engine_core::payoff::simulate_payoff(&terms, &baseline.result)
        .map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn summarize_loan(input_json: String) -> NapiResult<String> {
    let terms = parse_terms(&input_json)?;
    let schedule =
        loan_engine_core::schedule::build_schedule(&terms).map_err(to_napi_error)?;
    let output = loan_engine_core::summary::summarize(&terms, &schedule.result)
        .map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn analyze_loan(input_json: String) -> NapiResult<String> {
    let terms = parse_terms(&input_json)?;
    let output = loan_engine_core::analysis::analyze(&terms).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}
