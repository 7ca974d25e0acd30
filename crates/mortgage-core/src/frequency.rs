use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::error::MortgageError;
use crate::types::{NormalizedTerms, PaymentFrequency, Rate};
use crate::MortgageResult;

/// Convert annual loan terms into a per-period rate and period count.
///
/// The per-period rate is the nominal annual rate divided by the number of
/// periods per year, so that charging it `period_count` times over the term
/// applies the intended annual rate for every frequency.
pub fn normalize(
    annual_rate_percent: Rate,
    term_years: u32,
    frequency: PaymentFrequency,
) -> MortgageResult<NormalizedTerms> {
    if term_years == 0 {
        return Err(MortgageError::InvalidParameter {
            field: "term_years".into(),
            reason: "Loan term must be at least one year".into(),
        });
    }

    let periods_per_year = frequency.periods_per_year();
    let per_period_rate = annual_rate_percent / dec!(100) / Decimal::from(periods_per_year);

    Ok(NormalizedTerms {
        per_period_rate,
        period_count: term_years * periods_per_year,
    })
}
