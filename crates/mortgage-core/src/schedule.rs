//! Period-by-period amortisation schedule.
//!
//! The schedule is a lazy, finite iterator: each call to
//! [`generate_schedule`] is independent and deterministic for the same
//! inputs, so a consumer restarts it simply by generating it again.

use rust_decimal::Decimal;

use crate::error::MortgageError;
use crate::types::{Money, PaymentFrequency, Rate, ScheduleEntry, YearSummary};
use crate::MortgageResult;

/// Lazy iterator over the amortisation schedule of a fixed-payment loan.
#[derive(Debug, Clone)]
pub struct AmortizationSchedule {
    balance: Money,
    per_period_rate: Rate,
    payment: Money,
    period_count: u32,
    periods_per_year: u32,
    next_period: u32,
}

/// Build the amortisation schedule for a fixed periodic payment.
///
/// The running balance is not clamped to zero mid-sequence; with a payment
/// computed from the same rate and period count it reaches zero at the final
/// period, up to decimal rounding.
pub fn generate_schedule(
    principal: Money,
    per_period_rate: Rate,
    period_count: u32,
    payment: Money,
    frequency: PaymentFrequency,
) -> MortgageResult<AmortizationSchedule> {
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
    if payment < Decimal::ZERO {
        return Err(MortgageError::InvalidParameter {
            field: "payment".into(),
            reason: "Payment cannot be negative".into(),
        });
    }

    Ok(AmortizationSchedule {
        balance: principal,
        per_period_rate,
        payment,
        period_count,
        periods_per_year: frequency.periods_per_year(),
        next_period: 1,
    })
}

impl Iterator for AmortizationSchedule {
    type Item = ScheduleEntry;

    fn next(&mut self) -> Option<ScheduleEntry> {
        if self.next_period > self.period_count {
            return None;
        }

        let period_index = self.next_period;
        self.next_period += 1;

        let interest_component = self.balance * self.per_period_rate;
        let principal_component = self.payment - interest_component;
        self.balance -= principal_component;

        Some(ScheduleEntry {
            period_index,
            payment: self.payment,
            principal_component,
            interest_component,
            remaining_balance_after: self.balance,
            year_bucket: (period_index + self.periods_per_year - 1) / self.periods_per_year,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.period_count + 1).saturating_sub(self.next_period) as usize;
        (remaining, Some(remaining))
    }
}

/// Collapse schedule entries into per-year totals for reporting.
///
/// Entries must arrive in period order; each year's closing balance is the
/// balance after its final period.
pub fn summarize_by_year<I>(entries: I) -> Vec<YearSummary>
where
    I: IntoIterator<Item = ScheduleEntry>,
{
    let mut years: Vec<YearSummary> = Vec::new();

    for entry in entries {
        match years.last_mut() {
            Some(year) if year.year == entry.year_bucket => {
                year.principal_paid += entry.principal_component;
                year.interest_paid += entry.interest_component;
                year.closing_balance = entry.remaining_balance_after;
            }
            _ => years.push(YearSummary {
                year: entry.year_bucket,
                principal_paid: entry.principal_component,
                interest_paid: entry.interest_component,
                closing_balance: entry.remaining_balance_after,
            }),
        }
    }

    years
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::payment::compute_payment;
    use rust_decimal_macros::dec;

    fn small_loan() -> AmortizationSchedule {
        let payment = compute_payment(dec!(1000), dec!(0.01), 12)
            .unwrap()
            .periodic_payment;
        generate_schedule(dec!(1000), dec!(0.01), 12, payment, PaymentFrequency::Monthly).unwrap()
    }

    #[test]
    fn test_first_period_decomposition() {
        let entry = small_loan().next().unwrap();
        assert_eq!(entry.period_index, 1);
        // Interest on the full balance: 1000 * 0.01 = 10
        assert_eq!(entry.interest_component, dec!(10));
        assert!((entry.principal_component - dec!(78.85)).abs() < dec!(0.01));
        assert!((entry.remaining_balance_after - dec!(921.15)).abs() < dec!(0.01));
    }

    #[test]
    fn test_final_balance_reaches_zero() {
        let last = small_loan().last().unwrap();
        assert_eq!(last.period_index, 12);
        assert!(last.remaining_balance_after.abs() < dec!(0.000001));
    }

    #[test]
    fn test_year_buckets_single_year() {
        for entry in small_loan() {
            assert_eq!(entry.year_bucket, 1);
        }
    }

    #[test]
    fn test_year_bucket_rolls_over() {
        let payment = compute_payment(dec!(10000), dec!(0.004), 24)
            .unwrap()
            .periodic_payment;
        let entries: Vec<ScheduleEntry> =
            generate_schedule(dec!(10000), dec!(0.004), 24, payment, PaymentFrequency::Monthly)
                .unwrap()
                .collect();
        assert_eq!(entries[11].year_bucket, 1);
        assert_eq!(entries[12].year_bucket, 2);
        assert_eq!(entries[23].year_bucket, 2);
    }

    #[test]
    fn test_empty_schedule() {
        let mut schedule = generate_schedule(
            Decimal::ZERO,
            Decimal::ZERO,
            0,
            Decimal::ZERO,
            PaymentFrequency::Monthly,
        )
        .unwrap();
        assert!(schedule.next().is_none());
    }

    #[test]
    fn test_negative_payment_rejected() {
        let err = generate_schedule(
            dec!(1000),
            dec!(0.01),
            12,
            dec!(-1),
            PaymentFrequency::Monthly,
        )
        .unwrap_err();
        match err {
            MortgageError::InvalidParameter { field, .. } => assert_eq!(field, "payment"),
        }
    }

    #[test]
    fn test_summarize_by_year_totals() {
        let payment = compute_payment(dec!(10000), dec!(0.004), 24)
            .unwrap()
            .periodic_payment;
        let schedule =
            generate_schedule(dec!(10000), dec!(0.004), 24, payment, PaymentFrequency::Monthly)
                .unwrap();
        let years = summarize_by_year(schedule);

        assert_eq!(years.len(), 2);
        assert_eq!(years[0].year, 1);
        assert_eq!(years[1].year, 2);

        let principal_total = years[0].principal_paid + years[1].principal_paid;
        assert!((principal_total - dec!(10000)).abs() < dec!(0.000001));
        assert!(years[1].closing_balance.abs() < dec!(0.000001));
        assert!(years[0].closing_balance > years[1].closing_balance);
    }
}
