pub mod prepayment;
pub mod repayments;
pub mod schedule;

use clap::Args;
use rust_decimal::Decimal;

use mortgage_core::types::{LoanParameters, PaymentFrequency};

use crate::input;

/// Loan flags shared by every subcommand.
#[derive(Args)]
#[command(allow_hyphen_values = true)]
pub struct LoanArgs {
    /// Property purchase price (used with --deposit to derive the principal)
    #[arg(long)]
    pub home_value: Option<Decimal>,

    /// Deposit paid up front
    #[arg(long)]
    pub deposit: Option<Decimal>,

    /// Loan principal (alternative to --home-value/--deposit)
    #[arg(long)]
    pub principal: Option<Decimal>,

    /// Annual interest rate in percent (e.g. 5.5)
    #[arg(long)]
    pub rate: Option<Decimal>,

    /// Loan term in years
    #[arg(long)]
    pub term_years: Option<u32>,

    /// Payment frequency: monthly, bi-weekly or weekly
    #[arg(long, default_value = "monthly")]
    pub frequency: String,

    /// JSON file with full loan parameters (flags are ignored)
    #[arg(long)]
    pub input: Option<String>,
}

/// Resolve loan parameters from --input JSON, piped stdin, or flags.
pub fn resolve_parameters(args: &LoanArgs) -> Result<LoanParameters, Box<dyn std::error::Error>> {
    if let Some(ref path) = args.input {
        return Ok(input::file::read_json(path)?);
    }
    if let Some(data) = input::stdin::read_stdin()? {
        return Ok(serde_json::from_value(data)?);
    }

    let frequency: PaymentFrequency = args.frequency.parse()?;
    let rate = args
        .rate
        .ok_or("--rate is required (or provide --input/stdin)")?;
    let term_years = args
        .term_years
        .ok_or("--term-years is required (or provide --input/stdin)")?;

    match (args.principal, args.home_value) {
        (Some(principal), _) => Ok(LoanParameters {
            principal,
            annual_rate_percent: rate,
            term_years,
            frequency,
        }),
        (None, Some(home_value)) => {
            let deposit = args.deposit.unwrap_or(Decimal::ZERO);
            Ok(LoanParameters::from_property_value(
                home_value, deposit, rate, term_years, frequency,
            )?)
        }
        (None, None) => Err("--principal or --home-value is required (or provide --input/stdin)".into()),
    }
}
