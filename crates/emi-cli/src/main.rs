mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use commands::schedule::ScheduleArgs;

/// Equal monthly installment loan schedules
#[derive(Parser)]
#[command(
    name = "emi",
    version,
    about = "Equal monthly installment loan schedules",
    long_about = "Compute the amortisation schedule of a fixed-rate, fixed-term loan \
                  with decimal precision. Every payment is split into principal and \
                  interest, rounded to cents, and the final payment absorbs any \
                  rounding residue so principal repaid equals the amount borrowed."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,

    /// Money formatting for html output
    #[arg(long, default_value = "plain", global = true)]
    money_format: MoneyFormat,

    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the amortisation schedule of a loan
    Schedule(ScheduleArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
    Html,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum MoneyFormat {
    /// 1234567.50
    Plain,
    /// 1,234,567.50
    Grouped,
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Schedule(args) => commands::schedule::run_schedule(args),
        Commands::Version => {
            println!("emi {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            tracing::debug!(format = ?cli.output, "writing output");
            output::format_output(&cli.output, cli.money_format, &value);
            process::exit(0);
        }
        Err(e) => {
            tracing::debug!(error = %e, "command failed");
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
