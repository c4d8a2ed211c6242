use rust_decimal::Decimal;
use serde_json::Value;
use std::str::FromStr;
use tabled::{builder::Builder, Table};

use decree_core::format::format_pkr;

/// Format output as tables using the tabled crate.
///
/// Calculated reports get one table per recipient schedule plus a summary
/// table; anything else falls back to a generic field/value rendering.
pub fn print_table(value: &Value) {
    match value {
        Value::Object(map) => {
            if let Some(result) = map.get("result") {
                print_result_table(result, map);
            } else {
                print_flat_object(value);
            }
        }
        Value::Array(arr) => {
            print_array_table(arr);
        }
        _ => {
            println!("{}", value);
        }
    }
}

fn print_result_table(result: &Value, envelope: &serde_json::Map<String, Value>) {
    match result.as_object() {
        Some(res_map) if res_map.contains_key("recipient_calculations") => {
            print_report_tables(res_map);
        }
        Some(res_map) => {
            let mut builder = Builder::default();
            builder.push_record(["Field", "Value"]);
            for (key, val) in res_map {
                builder.push_record([key.as_str(), &format_field(key, val)]);
            }
            println!("{}", Table::from(builder));
        }
        None => print_flat_object(&Value::Object(envelope.clone())),
    }

    if let Some(Value::Array(warnings)) = envelope.get("warnings") {
        if !warnings.is_empty() {
            println!("\nWarnings:");
            for w in warnings {
                if let Value::String(s) = w {
                    println!("  - {}", s);
                }
            }
        }
    }

    if let Some(Value::String(meth)) = envelope.get("methodology") {
        println!("\nMethodology: {}", meth);
    }
}

/// Recipient schedules and the summary block of a calculated report.
fn print_report_tables(report: &serde_json::Map<String, Value>) {
    if let Some(Value::Array(recipients)) = report.get("recipient_calculations") {
        for rec in recipients {
            let Some(rec_map) = rec.as_object() else {
                continue;
            };
            println!(
                "{} ({})",
                str_field(rec_map, "name"),
                str_field(rec_map, "relationship")
            );

            if let Some(Value::Array(rows)) = rec_map.get("yearly_breakdown") {
                let mut builder = Builder::default();
                builder.push_record(["Year", "From", "To", "Rate", "Duration", "Subtotal"]);
                for row in rows {
                    if let Some(r) = row.as_object() {
                        let rate = r.get("increased_amount").unwrap_or(&Value::Null);
                        let subtotal = r.get("total_period").unwrap_or(&Value::Null);
                        builder.push_record([
                            str_field(r, "year").to_string(),
                            str_field(r, "start_date").to_string(),
                            str_field(r, "end_date").to_string(),
                            format_field("increased_amount", rate),
                            str_field(r, "duration_display").to_string(),
                            format_field("total_period", subtotal),
                        ]);
                    }
                }
                println!("{}", Table::from(builder));
            }
            if let Some(total) = rec_map.get("total_recipient_amount") {
                println!("Total: {}\n", format_field("total_recipient_amount", total));
            }
        }
    }

    if let Some(Value::Object(summary)) = report.get("summary") {
        let mut builder = Builder::default();
        builder.push_record(["Summary", "Amount"]);
        for (key, val) in summary {
            builder.push_record([key.as_str(), &format_field(key, val)]);
        }
        println!("{}", Table::from(builder));
    }
}

fn print_flat_object(value: &Value) {
    if let Value::Object(map) = value {
        let mut builder = Builder::default();
        builder.push_record(["Field", "Value"]);
        for (key, val) in map {
            builder.push_record([key.as_str(), &format_field(key, val)]);
        }
        println!("{}", Table::from(builder));
    }
}

fn print_array_table(arr: &[Value]) {
    if arr.is_empty() {
        println!("(empty)");
        return;
    }

    if let Some(Value::Object(first)) = arr.first() {
        let headers: Vec<String> = first.keys().cloned().collect();
        let mut builder = Builder::default();
        builder.push_record(&headers);

        for item in arr {
            if let Value::Object(map) = item {
                let row: Vec<String> = headers
                    .iter()
                    .map(|h| {
                        map.get(h.as_str())
                            .map(|v| format_field(h, v))
                            .unwrap_or_default()
                    })
                    .collect();
                builder.push_record(row);
            }
        }

        println!("{}", Table::from(builder));
    } else {
        for item in arr {
            println!("{}", format_field("", item));
        }
    }
}

fn str_field<'a>(map: &'a serde_json::Map<String, Value>, key: &str) -> &'a str {
    map.get(key).and_then(|v| v.as_str()).unwrap_or("")
}

/// Monetary fields are rendered as PKR; everything else prints raw.
fn format_field(key: &str, value: &Value) -> String {
    if is_money_key(key) {
        if let Some(amount) = value.as_str().and_then(|s| Decimal::from_str(s).ok()) {
            return format_pkr(amount);
        }
    }
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        Value::Array(arr) => {
            let items: Vec<String> = arr.iter().map(|v| format_field("", v)).collect();
            items.join(", ")
        }
        Value::Object(_) => serde_json::to_string(value).unwrap_or_default(),
    }
}

fn is_money_key(key: &str) -> bool {
    key.contains("amount") || key.contains("total") || key.contains("maintenance")
}
