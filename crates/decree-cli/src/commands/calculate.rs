use chrono::NaiveDate;
use clap::Args;
use serde_json::Value;

use decree_core::dates;
use decree_core::engine;
use decree_core::types::CaseRecord;
use decree_core::validator;

use crate::input;

/// Arguments for the calculate command
#[derive(Args)]
pub struct CalculateArgs {
    /// Path to a JSON or YAML case file (piped stdin JSON is also accepted)
    #[arg(long)]
    pub input: Option<String>,
}

/// Arguments for the validate command
#[derive(Args)]
pub struct ValidateArgs {
    /// Path to a JSON or YAML case file (piped stdin JSON is also accepted)
    #[arg(long)]
    pub input: Option<String>,
}

/// Arguments for the duration command
#[derive(Args)]
pub struct DurationArgs {
    /// Period start date (YYYY-MM-DD)
    #[arg(long)]
    pub start: NaiveDate,

    /// Period end date, inclusive (YYYY-MM-DD)
    #[arg(long)]
    pub end: NaiveDate,
}

pub fn run_calculate(args: CalculateArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let case = load_case(args.input.as_deref())?;
    validator::ensure_valid(&case)?;
    let report = engine::calculate(&case)?;
    Ok(serde_json::to_value(report)?)
}

pub fn run_validate(args: ValidateArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let case = load_case(args.input.as_deref())?;
    match validator::validate_case(&case) {
        Ok(()) => Ok(serde_json::json!({ "valid": true })),
        Err(issues) => {
            let lines: Vec<String> = issues
                .iter()
                .map(|i| format!("{}: {}", i.field, i.reason))
                .collect();
            Err(lines.join("; ").into())
        }
    }
}

pub fn run_duration(args: DurationArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let (months, days) = dates::month_day_span(args.start, args.end);
    Ok(serde_json::json!({
        "start": args.start,
        "end": args.end,
        "months": months,
        "days": days,
        "display": dates::duration_display(args.start, args.end),
    }))
}

/// Read a case record from a file path, or from piped stdin JSON.
pub(crate) fn load_case(path: Option<&str>) -> Result<CaseRecord, Box<dyn std::error::Error>> {
    if let Some(path) = path {
        input::file::read_case(path)
    } else if let Some(data) = input::stdin::read_stdin()? {
        Ok(serde_json::from_value(data)?)
    } else {
        Err("--input file is required (or pipe a JSON case on stdin)".into())
    }
}
