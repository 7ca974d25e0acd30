use napi::Result as NapiResult;
use napi_derive::napi;
use rust_decimal::Decimal;

use mortgage_core::analysis::{self, PrepaymentAnalysisInput};
use mortgage_core::types::LoanParameters;

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

// ---------------------------------------------------------------------------
// Repayments
// ---------------------------------------------------------------------------

#[napi]
pub fn calculate_repayments(params_json: String) -> NapiResult<String> {
    let parameters: LoanParameters = serde_json::from_str(&params_json).map_err(to_napi_error)?;
    let output = analysis::analyze_repayments(&parameters).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Amortisation schedule
// ---------------------------------------------------------------------------

#[napi]
pub fn amortization_schedule(params_json: String) -> NapiResult<String> {
    let parameters: LoanParameters = serde_json::from_str(&params_json).map_err(to_napi_error)?;
    let output = analysis::analyze_schedule(&parameters).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Prepayment simulation
// ---------------------------------------------------------------------------

#[napi]
pub fn simulate_prepayment(params_json: String, extra_contribution: String) -> NapiResult<String> {
    let parameters: LoanParameters = serde_json::from_str(&params_json).map_err(to_napi_error)?;
    let extra: Decimal = extra_contribution.parse().map_err(to_napi_error)?;
    let input = PrepaymentAnalysisInput {
        parameters,
        extra_contribution: extra,
    };
    let output = analysis::analyze_prepayment(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}
