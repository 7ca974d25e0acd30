use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::MortgageError;
use crate::MortgageResult;

/// All monetary values. Wraps Decimal to prevent accidental f64 usage.
pub type Money = Decimal;

/// Rates expressed as decimal fractions (0.05 = 5%) unless a field says otherwise.
pub type Rate = Decimal;

/// How often a repayment is made.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentFrequency {
    #[default]
    Monthly,
    BiWeekly,
    Weekly,
}

impl PaymentFrequency {
    /// Number of repayment periods in a calendar year.
    pub fn periods_per_year(&self) -> u32 {
        match self {
            PaymentFrequency::Monthly => 12,
            PaymentFrequency::BiWeekly => 26,
            PaymentFrequency::Weekly => 52,
        }
    }
}

impl fmt::Display for PaymentFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaymentFrequency::Monthly => write!(f, "monthly"),
            PaymentFrequency::BiWeekly => write!(f, "bi-weekly"),
            PaymentFrequency::Weekly => write!(f, "weekly"),
        }
    }
}

impl FromStr for PaymentFrequency {
    type Err = MortgageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "monthly" => Ok(PaymentFrequency::Monthly),
            "bi-weekly" | "biweekly" => Ok(PaymentFrequency::BiWeekly),
            "weekly" => Ok(PaymentFrequency::Weekly),
            other => Err(MortgageError::InvalidParameter {
                field: "frequency".into(),
                reason: format!("Unrecognised payment frequency '{other}'"),
            }),
        }
    }
}

/// Inputs for one calculation run. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanParameters {
    /// Amount borrowed (home value minus deposit).
    pub principal: Money,
    /// Nominal annual interest rate in percent (5.5 = 5.5%).
    pub annual_rate_percent: Rate,
    /// Loan term in years.
    pub term_years: u32,
    /// Repayment frequency.
    #[serde(default)]
    pub frequency: PaymentFrequency,
}

impl LoanParameters {
    /// Build parameters from a property purchase: principal = home value − deposit.
    pub fn from_property_value(
        home_value: Money,
        deposit: Money,
        annual_rate_percent: Rate,
        term_years: u32,
        frequency: PaymentFrequency,
    ) -> MortgageResult<Self> {
        if home_value < Decimal::ZERO {
            return Err(MortgageError::InvalidParameter {
                field: "home_value".into(),
                reason: "Home value cannot be negative".into(),
            });
        }
        if deposit < Decimal::ZERO {
            return Err(MortgageError::InvalidParameter {
                field: "deposit".into(),
                reason: "Deposit cannot be negative".into(),
            });
        }
        if deposit > home_value {
            return Err(MortgageError::InvalidParameter {
                field: "deposit".into(),
                reason: format!("Deposit {deposit} exceeds home value {home_value}"),
            });
        }

        Ok(LoanParameters {
            principal: home_value - deposit,
            annual_rate_percent,
            term_years,
            frequency,
        })
    }
}

/// Per-period rate and total period count derived from the annual terms.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NormalizedTerms {
    /// Interest rate charged once per payment period, as a fraction.
    pub per_period_rate: Rate,
    /// Total number of payment periods over the loan term.
    pub period_count: u32,
}

/// The fixed repayment and its lifetime totals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RepaymentSummary {
    /// Fixed payment due every period.
    pub periodic_payment: Money,
    /// periodic_payment × period_count.
    pub total_paid: Money,
    /// total_paid − principal.
    pub total_interest: Money,
}

/// One period of the amortisation schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    /// 1-based period number.
    pub period_index: u32,
    /// Fixed payment for the period.
    pub payment: Money,
    /// Portion of the payment reducing the balance.
    pub principal_component: Money,
    /// Portion of the payment charged as interest.
    pub interest_component: Money,
    /// Balance outstanding after this period's payment.
    pub remaining_balance_after: Money,
    /// Year of the loan this period falls in (1-based).
    pub year_bucket: u32,
}

/// Per-year rollup of schedule entries for reporting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearSummary {
    pub year: u32,
    pub principal_paid: Money,
    pub interest_paid: Money,
    /// Balance outstanding after the year's final period.
    pub closing_balance: Money,
}

/// Outcome of an early-payoff simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrepaymentResult {
    /// Period at which the balance reached zero, or the full period count.
    pub payoff_period_count: u32,
    /// Interest accumulated up to payoff.
    pub total_interest_paid: Money,
    /// Principal applied in the terminating period (or the fixed payment if
    /// no early payoff was achieved).
    pub final_period_payment: Money,
}

/// Standard computation output envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationOutput<T: Serialize> {
    pub result: T,
    pub methodology: String,
    pub assumptions: serde_json::Value,
    pub warnings: Vec<String>,
    pub metadata: ComputationMetadata,
}

/// Metadata for every computation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationMetadata {
    pub version: String,
    pub computation_time_us: u64,
    pub precision: String,
}

/// Helper to wrap computation results with metadata
pub fn with_metadata<T: Serialize>(
    methodology: &str,
    assumptions: &impl Serialize,
    warnings: Vec<String>,
    elapsed_us: u64,
    result: T,
) -> ComputationOutput<T> {
    ComputationOutput {
        result,
        methodology: methodology.to_string(),
        assumptions: serde_json::to_value(assumptions).unwrap_or_default(),
        warnings,
        metadata: ComputationMetadata {
            version: env!("CARGO_PKG_VERSION").to_string(),
            computation_time_us: elapsed_us,
            precision: "rust_decimal_128bit".to_string(),
        },
    }
}
