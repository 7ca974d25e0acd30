//! Early-payoff simulation under constant extra principal contributions.

use rust_decimal::Decimal;

use crate::error::MortgageError;
use crate::payment::compute_payment;
use crate::types::{Money, PrepaymentResult, Rate};
use crate::MortgageResult;

/// Simulate paying an extra principal contribution on top of every fixed
/// payment, stopping as soon as the balance is fully repaid.
///
/// The regular payment is recomputed internally from the annuity formula.
/// That baseline is undefined at a zero per-period rate, so a zero rate is
/// rejected rather than substituted with the straight-line fallback.
pub fn simulate_prepayment(
    principal: Money,
    per_period_rate: Rate,
    period_count: u32,
    extra_contribution: Money,
) -> MortgageResult<PrepaymentResult> {
    if per_period_rate.is_zero() {
        return Err(MortgageError::InvalidParameter {
            field: "per_period_rate".into(),
            reason: "Prepayment simulation requires a non-zero rate".into(),
        });
    }
    if per_period_rate < Decimal::ZERO {
        return Err(MortgageError::InvalidParameter {
            field: "per_period_rate".into(),
            reason: "Per-period rate cannot be negative".into(),
        });
    }
    if principal < Decimal::ZERO {
        return Err(MortgageError::InvalidParameter {
            field: "principal".into(),
            reason: "Principal cannot be negative".into(),
        });
    }
    if extra_contribution < Decimal::ZERO {
        return Err(MortgageError::InvalidParameter {
            field: "extra_contribution".into(),
            reason: "Extra contribution cannot be negative".into(),
        });
    }

    let payment = compute_payment(principal, per_period_rate, period_count)?.periodic_payment;

    let mut balance = principal;
    let mut total_interest_paid = Decimal::ZERO;

    for period in 1..=period_count {
        // Interest accrues on the balance before this period's reduction.
        let interest_component = balance * per_period_rate;
        let principal_component = payment - interest_component + extra_contribution;
        balance -= principal_component;
        total_interest_paid += interest_component;

        if balance <= Decimal::ZERO {
            return Ok(PrepaymentResult {
                payoff_period_count: period,
                total_interest_paid,
                final_period_payment: principal_component,
            });
        }
    }

    // No early payoff achieved within the scheduled term.
    Ok(PrepaymentResult {
        payoff_period_count: period_count,
        total_interest_paid,
        final_period_payment: payment,
    })
}
