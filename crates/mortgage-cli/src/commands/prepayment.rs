use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use mortgage_core::analysis::{self, PrepaymentAnalysisInput};

use super::{resolve_parameters, LoanArgs};

#[derive(Args)]
pub struct PrepaymentArgs {
    #[command(flatten)]
    pub loan: LoanArgs,

    /// Extra principal contribution applied every period
    #[arg(long, default_value = "0")]
    pub extra: Decimal,
}

pub fn run_prepayment(args: PrepaymentArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let parameters = resolve_parameters(&args.loan)?;
    let input = PrepaymentAnalysisInput {
        parameters,
        extra_contribution: args.extra,
    };
    let result = analysis::analyze_prepayment(&input)?;
    Ok(serde_json::to_value(result)?)
}
