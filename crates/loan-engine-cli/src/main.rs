mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::loan::LoanArgs;

/// Amortizing-loan projections with decimal precision
#[derive(Parser)]
#[command(
    name = "loan",
    version,
    about = "Amortizing-loan projections with decimal precision",
    long_about = "A CLI for fixed-rate loan projections with decimal precision. \
                  Computes the periodic payment, the full amortization schedule, \
                  accelerated-payoff simulations under extra payments, and \
                  cost/risk aggregates (approximate APR, debt-to-income)."
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
    /// Build the period-by-period amortization schedule
    Schedule(LoanArgs),
    /// Simulate accelerated payoff under an extra payment per period
    Payoff(LoanArgs),
    /// Aggregate cost and risk figures (approximate APR, DTI)
    Summary(LoanArgs),
    /// Run the full pipeline: schedule, payoff, and summary
    Analyze(LoanArgs),
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
        Commands::Schedule(args) => commands::loan::run_schedule(args),
        Commands::Payoff(args) => commands::loan::run_payoff(args),
        Commands::Summary(args) => commands::loan::run_summary(args),
        Commands::Analyze(args) => commands::loan::run_analyze(args),
        Commands::Version => {
            println!("loan {}", env!("CARGO_PKG_VERSION"));
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
