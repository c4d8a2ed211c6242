use clap::Args;
use serde_json::Value;

use decree_core::engine;
use decree_core::store::ReportStore;
use decree_core::validator;

use crate::commands::calculate::load_case;
use crate::input;

/// Arguments for the save command
#[derive(Args)]
pub struct SaveArgs {
    /// Path to the report store file
    #[arg(long)]
    pub store: String,

    /// Path to a JSON or YAML case file (piped stdin JSON is also accepted)
    #[arg(long)]
    pub input: Option<String>,
}

/// Arguments for the list command
#[derive(Args)]
pub struct ListArgs {
    /// Path to the report store file
    #[arg(long)]
    pub store: String,
}

/// Arguments for the show command
#[derive(Args)]
pub struct ShowArgs {
    /// Path to the report store file
    #[arg(long)]
    pub store: String,

    /// Id of the stored report
    #[arg(long)]
    pub id: String,
}

/// Arguments for the delete command
#[derive(Args)]
pub struct DeleteArgs {
    /// Path to the report store file
    #[arg(long)]
    pub store: String,

    /// Id of the stored report
    #[arg(long)]
    pub id: String,
}

/// Arguments for the import command
#[derive(Args)]
pub struct ImportArgs {
    /// Path to the report store file
    #[arg(long)]
    pub store: String,

    /// Path to a JSON file holding one report or an array of reports
    #[arg(long)]
    pub input: String,
}

/// Arguments for the export command
#[derive(Args)]
pub struct ExportArgs {
    /// Path to the report store file
    #[arg(long)]
    pub store: String,

    /// Export a single report instead of the whole store
    #[arg(long)]
    pub id: Option<String>,
}

pub fn run_save(args: SaveArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let case = load_case(args.input.as_deref())?;
    validator::ensure_valid(&case)?;
    let mut store = ReportStore::open(&args.store)?;
    let report = store.save(case)?;
    Ok(serde_json::json!({
        "id": report.id,
        "created_at": report.created_at,
        "cms_no": report.case.cms_no,
    }))
}

pub fn run_list(args: ListArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let store = ReportStore::open(&args.store)?;
    let summaries: Vec<Value> = store
        .list()
        .iter()
        .map(|r| {
            serde_json::json!({
                "id": r.id,
                "cms_no": r.case.cms_no,
                "party_a": r.case.party_a,
                "party_b": r.case.party_b,
                "created_at": r.created_at,
            })
        })
        .collect();
    Ok(Value::Array(summaries))
}

pub fn run_show(args: ShowArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let store = ReportStore::open(&args.store)?;
    let stored = store
        .get(&args.id)
        .ok_or_else(|| format!("no stored report with id '{}'", args.id))?;
    let calculated = engine::calculate(&stored.case)?;
    Ok(serde_json::json!({
        "report": stored,
        "calculated": calculated,
    }))
}

pub fn run_delete(args: DeleteArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let mut store = ReportStore::open(&args.store)?;
    if !store.delete(&args.id)? {
        return Err(format!("no stored report with id '{}'", args.id).into());
    }
    Ok(serde_json::json!({ "deleted": args.id }))
}

pub fn run_import(args: ImportArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let data = input::file::read_json_value(&args.input)?;
    let values = match data {
        Value::Array(values) => values,
        single => vec![single],
    };
    let mut store = ReportStore::open(&args.store)?;
    let outcome = store.import(values)?;
    Ok(serde_json::to_value(outcome)?)
}

pub fn run_export(args: ExportArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let store = ReportStore::open(&args.store)?;
    match args.id {
        Some(id) => {
            let stored = store
                .get(&id)
                .ok_or_else(|| format!("no stored report with id '{id}'"))?;
            Ok(serde_json::to_value(stored)?)
        }
        None => Ok(serde_json::to_value(store.list())?),
    }
}
