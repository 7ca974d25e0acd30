//! Envelope entry points consumed by the presentation layer.
//!
//! Each function validates, computes via the pure engine modules, and wraps
//! the result in [`ComputationOutput`] with methodology, assumptions, and
//! reasonableness warnings.

use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::frequency::normalize;
use crate::payment::compute_payment;
use crate::prepayment::simulate_prepayment;
use crate::schedule::{generate_schedule, summarize_by_year};
use crate::types::{
    with_metadata, ComputationOutput, LoanParameters, Money, NormalizedTerms, PrepaymentResult,
    RepaymentSummary, ScheduleEntry, YearSummary,
};
use crate::MortgageResult;

/// Input for an early-payoff analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrepaymentAnalysisInput {
    pub parameters: LoanParameters,
    /// Constant extra principal contribution applied every period.
    pub extra_contribution: Money,
}

/// Normalised terms plus the fixed repayment summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepaymentAnalysis {
    pub terms: NormalizedTerms,
    pub summary: RepaymentSummary,
}

/// Full amortisation breakdown with per-year rollups.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleAnalysis {
    pub terms: NormalizedTerms,
    pub summary: RepaymentSummary,
    pub entries: Vec<ScheduleEntry>,
    pub yearly: Vec<YearSummary>,
}

/// Early-payoff outcome compared against the undisturbed schedule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrepaymentAnalysis {
    pub terms: NormalizedTerms,
    /// Repayment summary without extra contributions.
    pub baseline: RepaymentSummary,
    pub result: PrepaymentResult,
    /// Scheduled periods avoided by paying extra.
    pub periods_saved: u32,
    /// Baseline total interest minus interest actually paid.
    pub interest_saved: Money,
}

/// Compute the fixed repayment and lifetime totals for a loan.
pub fn analyze_repayments(
    parameters: &LoanParameters,
) -> MortgageResult<ComputationOutput<RepaymentAnalysis>> {
    let start = Instant::now();
    let warnings = reasonableness_warnings(parameters);

    let terms = normalize(
        parameters.annual_rate_percent,
        parameters.term_years,
        parameters.frequency,
    )?;
    let summary = compute_payment(parameters.principal, terms.per_period_rate, terms.period_count)?;

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Fixed-Payment Annuity",
        parameters,
        warnings,
        elapsed,
        RepaymentAnalysis { terms, summary },
    ))
}

/// Generate the full amortisation schedule with per-year rollups.
pub fn analyze_schedule(
    parameters: &LoanParameters,
) -> MortgageResult<ComputationOutput<ScheduleAnalysis>> {
    let start = Instant::now();
    let warnings = reasonableness_warnings(parameters);

    let terms = normalize(
        parameters.annual_rate_percent,
        parameters.term_years,
        parameters.frequency,
    )?;
    let summary = compute_payment(parameters.principal, terms.per_period_rate, terms.period_count)?;
    let entries: Vec<ScheduleEntry> = generate_schedule(
        parameters.principal,
        terms.per_period_rate,
        terms.period_count,
        summary.periodic_payment,
        parameters.frequency,
    )?
    .collect();
    let yearly = summarize_by_year(entries.iter().cloned());

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Fixed-Payment Amortisation Schedule",
        parameters,
        warnings,
        elapsed,
        ScheduleAnalysis {
            terms,
            summary,
            entries,
            yearly,
        },
    ))
}

/// Simulate early payoff under a constant extra contribution.
pub fn analyze_prepayment(
    input: &PrepaymentAnalysisInput,
) -> MortgageResult<ComputationOutput<PrepaymentAnalysis>> {
    let start = Instant::now();
    let parameters = &input.parameters;
    let mut warnings = reasonableness_warnings(parameters);

    let terms = normalize(
        parameters.annual_rate_percent,
        parameters.term_years,
        parameters.frequency,
    )?;
    let baseline =
        compute_payment(parameters.principal, terms.per_period_rate, terms.period_count)?;

    if input.extra_contribution > baseline.periodic_payment {
        warnings.push(format!(
            "Extra contribution {} exceeds the periodic payment {}",
            input.extra_contribution, baseline.periodic_payment
        ));
    }

    let result = simulate_prepayment(
        parameters.principal,
        terms.per_period_rate,
        terms.period_count,
        input.extra_contribution,
    )?;

    let periods_saved = terms.period_count - result.payoff_period_count;
    let interest_saved = baseline.total_interest - result.total_interest_paid;

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Constant Extra Contribution Payoff Simulation",
        input,
        warnings,
        elapsed,
        PrepaymentAnalysis {
            terms,
            baseline,
            result,
            periods_saved,
            interest_saved,
        },
    ))
}

fn reasonableness_warnings(parameters: &LoanParameters) -> Vec<String> {
    let mut warnings: Vec<String> = Vec::new();

    if parameters.annual_rate_percent > dec!(25) {
        warnings.push(format!(
            "Annual rate of {}% is unusually high",
            parameters.annual_rate_percent
        ));
    }
    if parameters.term_years > 40 {
        warnings.push(format!(
            "Loan term of {} years is unusually long",
            parameters.term_years
        ));
    }

    warnings
}
