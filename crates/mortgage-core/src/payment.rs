use rust_decimal::Decimal;
use rust_decimal::MathematicalOps;

use crate::error::MortgageError;
use crate::types::{Money, Rate, RepaymentSummary};
use crate::MortgageResult;

/// Derive the fixed periodic payment via the standard annuity formula.
///
/// payment = principal · r · (1+r)^n / ((1+r)^n − 1)
///
/// A zero principal or period count is a degenerate loan, not an error, and
/// returns a zero summary. A zero rate falls back to straight-line repayment
/// with no interest.
pub fn compute_payment(
    principal: Money,
    per_period_rate: Rate,
    period_count: u32,
) -> MortgageResult<RepaymentSummary> {
    if principal < Decimal::ZERO {
        return Err(MortgageError::InvalidParameter {
            field: "principal".into(),
            reason: "Principal cannot be negative".into(),
        });
    }
    if per_period_rate < Decimal::ZERO {
        return Err(MortgageError::InvalidParameter {
            field: "per_period_rate".into(),
            reason: "Per-period rate cannot be negative".into(),
        });
    }

    if principal.is_zero() || period_count == 0 {
        return Ok(RepaymentSummary {
            periodic_payment: Decimal::ZERO,
            total_paid: Decimal::ZERO,
            total_interest: Decimal::ZERO,
        });
    }

    let n = Decimal::from(period_count);

    if per_period_rate.is_zero() {
        let periodic_payment = principal / n;
        return Ok(RepaymentSummary {
            periodic_payment,
            total_paid: periodic_payment * n,
            total_interest: Decimal::ZERO,
        });
    }

    let factor = (Decimal::ONE + per_period_rate).powd(n);
    let periodic_payment = principal * per_period_rate * factor / (factor - Decimal::ONE);
    let total_paid = periodic_payment * n;

    Ok(RepaymentSummary {
        periodic_payment,
        total_paid,
        total_interest: total_paid - principal,
    })
}
