use mortgage_core::analysis::{analyze_prepayment, analyze_schedule, PrepaymentAnalysisInput};
use mortgage_core::frequency::normalize;
use mortgage_core::payment::compute_payment;
use mortgage_core::prepayment::simulate_prepayment;
use mortgage_core::schedule::{generate_schedule, summarize_by_year};
use mortgage_core::types::{LoanParameters, PaymentFrequency, ScheduleEntry};
use mortgage_core::MortgageError;
use pretty_assertions::assert_eq;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

const BALANCE_TOL: Decimal = dec!(0.000001);

fn standard_schedule() -> Vec<ScheduleEntry> {
    let terms = normalize(dec!(5.5), 30, PaymentFrequency::Monthly).unwrap();
    let summary = compute_payment(dec!(400000), terms.per_period_rate, terms.period_count).unwrap();
    generate_schedule(
        dec!(400000),
        terms.per_period_rate,
        terms.period_count,
        summary.periodic_payment,
        PaymentFrequency::Monthly,
    )
    .unwrap()
    .collect()
}

// ===========================================================================
// Schedule properties
// ===========================================================================

#[test]
fn test_principal_components_sum_to_principal() {
    let entries = standard_schedule();
    let principal_total: Decimal = entries.iter().map(|e| e.principal_component).sum();
    assert!(
        (principal_total - dec!(400000)).abs() < BALANCE_TOL,
        "principal components sum to {principal_total}"
    );
}

#[test]
fn test_final_balance_is_zero() {
    let entries = standard_schedule();
    let last = entries.last().unwrap();
    assert_eq!(last.period_index, 360);
    assert!(
        last.remaining_balance_after.abs() < BALANCE_TOL,
        "final balance {}",
        last.remaining_balance_after
    );
}

#[test]
fn test_balance_is_monotonically_non_increasing() {
    let entries = standard_schedule();
    for window in entries.windows(2) {
        assert!(
            window[1].remaining_balance_after <= window[0].remaining_balance_after,
            "balance rose between period {} and {}",
            window[0].period_index,
            window[1].period_index
        );
    }
}

#[test]
fn test_entry_decomposition_invariants() {
    let entries = standard_schedule();
    let terms = normalize(dec!(5.5), 30, PaymentFrequency::Monthly).unwrap();

    let mut balance_before = dec!(400000);
    for entry in &entries {
        assert_eq!(entry.interest_component, balance_before * terms.per_period_rate);
        assert_eq!(
            entry.principal_component,
            entry.payment - entry.interest_component
        );
        assert_eq!(
            entry.remaining_balance_after,
            balance_before - entry.principal_component
        );
        balance_before = entry.remaining_balance_after;
    }
}

#[test]
fn test_schedule_is_restartable_and_identical() {
    // Two generations from the same inputs produce the same sequence.
    assert_eq!(standard_schedule(), standard_schedule());
}

#[test]
fn test_year_buckets_follow_frequency() {
    let entries = standard_schedule();
    assert_eq!(entries[0].year_bucket, 1);
    assert_eq!(entries[11].year_bucket, 1);
    assert_eq!(entries[12].year_bucket, 2);
    assert_eq!(entries[359].year_bucket, 30);

    let terms = normalize(dec!(4.0), 2, PaymentFrequency::BiWeekly).unwrap();
    let summary = compute_payment(dec!(50000), terms.per_period_rate, terms.period_count).unwrap();
    let bi_weekly: Vec<ScheduleEntry> = generate_schedule(
        dec!(50000),
        terms.per_period_rate,
        terms.period_count,
        summary.periodic_payment,
        PaymentFrequency::BiWeekly,
    )
    .unwrap()
    .collect();
    assert_eq!(bi_weekly[25].year_bucket, 1);
    assert_eq!(bi_weekly[26].year_bucket, 2);
}

#[test]
fn test_yearly_rollup_reconciles_with_summary() {
    let terms = normalize(dec!(5.5), 30, PaymentFrequency::Monthly).unwrap();
    let summary = compute_payment(dec!(400000), terms.per_period_rate, terms.period_count).unwrap();
    let years = summarize_by_year(standard_schedule());

    assert_eq!(years.len(), 30);
    let interest_total: Decimal = years.iter().map(|y| y.interest_paid).sum();
    assert!(
        (interest_total - summary.total_interest).abs() < dec!(0.01),
        "yearly interest {interest_total} vs summary {}",
        summary.total_interest
    );
    assert!(years.last().unwrap().closing_balance.abs() < BALANCE_TOL);
}

// ===========================================================================
// Prepayment properties
// ===========================================================================

#[test]
fn test_zero_extra_matches_full_term_schedule() {
    let terms = normalize(dec!(5.5), 30, PaymentFrequency::Monthly).unwrap();
    let summary = compute_payment(dec!(400000), terms.per_period_rate, terms.period_count).unwrap();
    let result = simulate_prepayment(
        dec!(400000),
        terms.per_period_rate,
        terms.period_count,
        Decimal::ZERO,
    )
    .unwrap();

    assert_eq!(result.payoff_period_count, terms.period_count);
    assert!(
        (result.total_interest_paid - summary.total_interest).abs() < dec!(0.01),
        "simulated interest {} vs annuity total {}",
        result.total_interest_paid,
        summary.total_interest
    );
}

#[test]
fn test_extra_contribution_monotonicity() {
    let terms = normalize(dec!(5.5), 30, PaymentFrequency::Monthly).unwrap();

    let mut previous_payoff = u32::MAX;
    let mut previous_interest = Decimal::MAX;
    for extra in [dec!(0), dec!(100), dec!(250), dec!(500), dec!(1000)] {
        let result = simulate_prepayment(
            dec!(400000),
            terms.per_period_rate,
            terms.period_count,
            extra,
        )
        .unwrap();
        assert!(
            result.payoff_period_count <= previous_payoff,
            "payoff grew at extra {extra}"
        );
        assert!(
            result.total_interest_paid <= previous_interest,
            "interest grew at extra {extra}"
        );
        previous_payoff = result.payoff_period_count;
        previous_interest = result.total_interest_paid;
    }
}

#[test]
fn test_extra_contribution_saves_interest() {
    let terms = normalize(dec!(5.5), 30, PaymentFrequency::Monthly).unwrap();
    let summary = compute_payment(dec!(400000), terms.per_period_rate, terms.period_count).unwrap();
    let result = simulate_prepayment(
        dec!(400000),
        terms.per_period_rate,
        terms.period_count,
        dec!(200),
    )
    .unwrap();

    assert!(result.payoff_period_count < terms.period_count);
    assert!(result.total_interest_paid < summary.total_interest);
}

#[test]
fn test_prepayment_requires_non_zero_rate() {
    let err = simulate_prepayment(dec!(400000), Decimal::ZERO, 360, dec!(200)).unwrap_err();
    match err {
        MortgageError::InvalidParameter { field, reason } => {
            assert_eq!(field, "per_period_rate");
            assert!(reason.contains("non-zero"));
        }
    }
}

// ===========================================================================
// Analysis envelopes
// ===========================================================================

#[test]
fn test_schedule_analysis_matches_direct_generation() {
    let parameters = LoanParameters {
        principal: dec!(400000),
        annual_rate_percent: dec!(5.5),
        term_years: 30,
        frequency: PaymentFrequency::Monthly,
    };
    let output = analyze_schedule(&parameters).unwrap();
    assert_eq!(output.result.entries, standard_schedule());
    assert_eq!(output.result.yearly.len(), 30);
}

#[test]
fn test_prepayment_analysis_reconciles_savings() {
    let input = PrepaymentAnalysisInput {
        parameters: LoanParameters {
            principal: dec!(400000),
            annual_rate_percent: dec!(5.5),
            term_years: 30,
            frequency: PaymentFrequency::Monthly,
        },
        extra_contribution: dec!(250),
    };
    let output = analyze_prepayment(&input).unwrap();
    let analysis = output.result;

    assert_eq!(
        analysis.periods_saved,
        analysis.terms.period_count - analysis.result.payoff_period_count
    );
    assert_eq!(
        analysis.interest_saved,
        analysis.baseline.total_interest - analysis.result.total_interest_paid
    );
    assert!(analysis.interest_saved > Decimal::ZERO);
}
