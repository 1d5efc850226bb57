use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;
use tracing::{debug, info};

use emi_core::amortisation::schedule::{self, LoanInput};

use crate::input;

/// Arguments for the amortisation schedule
#[derive(Args)]
#[command(allow_hyphen_values = true)]
pub struct ScheduleArgs {
    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Principal borrowed
    #[arg(long)]
    pub amount: Option<Decimal>,

    /// Number of monthly installments
    #[arg(long, short = 'n')]
    pub installments: Option<i64>,

    /// Yearly interest rate in percent (e.g. 8.5 for 8.5%)
    #[arg(long, alias = "annual-rate")]
    pub rate: Option<Decimal>,
}

pub fn run_schedule(args: ScheduleArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let loan_input: LoanInput = if let Some(ref path) = args.input {
        debug!(path = %path, "reading loan terms from file");
        input::file::read_json(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        debug!("reading loan terms from stdin");
        serde_json::from_value(data)?
    } else {
        let amount = args
            .amount
            .ok_or("--amount is required (or provide --input)")?;
        let installments = args
            .installments
            .ok_or("--installments is required (or provide --input)")?;
        let rate = args.rate.ok_or("--rate is required (or provide --input)")?;

        LoanInput {
            amount,
            installments,
            annual_rate_percent: rate,
        }
    };

    let result = schedule::build_schedule(&loan_input)?;
    info!(
        installments = result.result.installments.len(),
        sum = %result.result.sum,
        elapsed_us = result.metadata.computation_time_us,
        "schedule built"
    );
    for warning in &result.warnings {
        debug!(%warning, "schedule warning");
    }
    Ok(serde_json::to_value(result)?)
}
