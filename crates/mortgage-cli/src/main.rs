mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::prepayment::PrepaymentArgs;
use commands::repayments::RepaymentsArgs;
use commands::schedule::ScheduleArgs;

/// Mortgage repayment calculations with decimal precision
#[derive(Parser)]
#[command(
    name = "mrc",
    version,
    about = "Mortgage repayment and amortisation calculations",
    long_about = "A CLI for computing fixed mortgage repayments with decimal \
                  precision. Supports repayment summaries, full amortisation \
                  schedules, and early-payoff simulation under extra principal \
                  contributions."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Calculate the fixed periodic repayment and lifetime totals
    Repayments(RepaymentsArgs),
    /// Generate the full amortisation schedule
    Schedule(ScheduleArgs),
    /// Simulate early payoff with extra principal contributions
    Prepayment(PrepaymentArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn main() {
    let cli = Cli::parse();

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Repayments(args) => commands::repayments::run_repayments(args),
        Commands::Schedule(args) => commands::schedule::run_schedule(args),
        Commands::Prepayment(args) => commands::prepayment::run_prepayment(args),
        Commands::Version => {
            println!("mrc {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
