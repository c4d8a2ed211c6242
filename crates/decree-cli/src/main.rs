mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::calculate::{CalculateArgs, DurationArgs, ValidateArgs};
use commands::reports::{DeleteArgs, ExportArgs, ImportArgs, ListArgs, SaveArgs, ShowArgs};

/// Family-court maintenance-decree reports
#[derive(Parser)]
#[command(
    name = "decree",
    version,
    about = "Family-court maintenance-decree calculations",
    long_about = "Drafts maintenance-decree reports with decimal precision: \
                  anniversary-segmented yearly escalation (progressive or fixed), \
                  partial-satisfaction adjustment, payment offsetting, and a \
                  local keyed store of case records."
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
    /// Compute the full decree report for a case
    Calculate(CalculateArgs),
    /// Check a case record without calculating
    Validate(ValidateArgs),
    /// Human-readable duration between two dates (end inclusive)
    Duration(DurationArgs),
    /// Validate and persist a case record
    Save(SaveArgs),
    /// List stored reports
    List(ListArgs),
    /// Show one stored report with its computed schedule
    Show(ShowArgs),
    /// Delete a stored report
    Delete(DeleteArgs),
    /// Best-effort import of externally supplied reports
    Import(ImportArgs),
    /// Export stored reports as JSON
    Export(ExportArgs),
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
        Commands::Calculate(args) => commands::calculate::run_calculate(args),
        Commands::Validate(args) => commands::calculate::run_validate(args),
        Commands::Duration(args) => commands::calculate::run_duration(args),
        Commands::Save(args) => commands::reports::run_save(args),
        Commands::List(args) => commands::reports::run_list(args),
        Commands::Show(args) => commands::reports::run_show(args),
        Commands::Delete(args) => commands::reports::run_delete(args),
        Commands::Import(args) => commands::reports::run_import(args),
        Commands::Export(args) => commands::reports::run_export(args),
        Commands::Version => {
            println!("decree {}", env!("CARGO_PKG_VERSION"));
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
