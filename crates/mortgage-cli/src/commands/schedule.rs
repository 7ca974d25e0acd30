use clap::Args;
use serde_json::Value;

use mortgage_core::analysis;

use super::{resolve_parameters, LoanArgs};

#[derive(Args)]
pub struct ScheduleArgs {
    #[command(flatten)]
    pub loan: LoanArgs,
}

pub fn run_schedule(args: ScheduleArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let parameters = resolve_parameters(&args.loan)?;
    let result = analysis::analyze_schedule(&parameters)?;
    Ok(serde_json::to_value(result)?)
}
