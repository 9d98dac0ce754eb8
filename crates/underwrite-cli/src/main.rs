mod commands;
mod input;
mod output;
mod report;
mod store;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use underwrite_core::UnderwriteResult;

use commands::expenses::ExpensesArgs;
use commands::metrics::MetricsArgs;
use commands::projection::MonthlyArgs;
use commands::scenario::ScenarioCommand;
use commands::sensitivity::SensitivityArgs;
use report::Report;

/// Multi-unit residential underwriting calculations
#[derive(Parser)]
#[command(
    name = "uw",
    version,
    about = "Multi-unit residential underwriting calculations",
    long_about = "A CLI for underwriting multi-unit residential acquisitions with decimal \
                  precision. Computes NOI, cash flow, DSCR, cash-on-cash and cap rate from \
                  an assumptions document, projects monthly cash flows, sweeps rent and \
                  interest-rate sensitivities, and manages saved scenarios."
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
    /// Print the built-in baseline assumption set as an editable document
    Baseline,
    /// Underwrite a deal (NOI, cash flow, DSCR, cap rate)
    Metrics(MetricsArgs),
    /// Project the flat 12-month cash-flow series
    Monthly(MonthlyArgs),
    /// Two-way rent / interest-rate sensitivity matrix
    Sensitivity(SensitivityArgs),
    /// Percent view of the expense lines, with optional reconciliation
    Expenses(ExpensesArgs),
    /// Save, list, show and delete assumption scenarios
    #[command(subcommand)]
    Scenario(ScenarioCommand),
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

    let result: UnderwriteResult<Report> = match cli.command {
        Commands::Baseline => commands::baseline::run_baseline(),
        Commands::Metrics(args) => commands::metrics::run_metrics(args),
        Commands::Monthly(args) => commands::projection::run_monthly(args),
        Commands::Sensitivity(args) => commands::sensitivity::run_sensitivity(args),
        Commands::Expenses(args) => commands::expenses::run_expenses(args),
        Commands::Scenario(command) => commands::scenario::run_scenario(command),
        Commands::Version => {
            println!("uw {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(report) => {
            output::render(&cli.output, &report);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
