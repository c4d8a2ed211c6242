use serde_json::Value;
use std::io;

/// Write output as CSV to stdout.
///
/// Calculated reports flatten into one row per schedule segment; other
/// shapes fall back to field/value pairs or a generic array table.
pub fn print_csv(value: &Value) {
    let stdout = io::stdout();
    let mut wtr = csv::Writer::from_writer(stdout.lock());

    match value {
        Value::Object(map) => {
            let result = map.get("result").and_then(|r| r.as_object());
            if let Some(Value::Array(recipients)) =
                result.and_then(|r| r.get("recipient_calculations"))
            {
                write_schedule_csv(&mut wtr, recipients);
            } else if let Some(result) = result {
                let _ = wtr.write_record(["field", "value"]);
                for (key, val) in result {
                    let _ = wtr.write_record([key.as_str(), &format_csv_value(val)]);
                }
            } else {
                let _ = wtr.write_record(["field", "value"]);
                for (key, val) in map {
                    let _ = wtr.write_record([key.as_str(), &format_csv_value(val)]);
                }
            }
        }
        Value::Array(arr) => {
            write_array_csv(&mut wtr, arr);
        }
        _ => {
            let _ = wtr.write_record([&format_csv_value(value)]);
        }
    }

    let _ = wtr.flush();
}

/// One row per yearly segment, tagged with the recipient it belongs to.
fn write_schedule_csv(wtr: &mut csv::Writer<io::StdoutLock<'_>>, recipients: &[Value]) {
    let _ = wtr.write_record([
        "recipient",
        "relationship",
        "year",
        "start_date",
        "end_date",
        "rate",
        "duration",
        "subtotal",
    ]);

    for rec in recipients {
        let Some(rec_map) = rec.as_object() else {
            continue;
        };
        let name = str_of(rec_map, "name");
        let relationship = str_of(rec_map, "relationship");

        if let Some(Value::Array(rows)) = rec_map.get("yearly_breakdown") {
            for row in rows {
                if let Some(r) = row.as_object() {
                    let _ = wtr.write_record([
                        name,
                        relationship,
                        str_of(r, "year"),
                        str_of(r, "start_date"),
                        str_of(r, "end_date"),
                        str_of(r, "increased_amount"),
                        str_of(r, "duration_display"),
                        str_of(r, "total_period"),
                    ]);
                }
            }
        }
    }
}

fn write_array_csv(wtr: &mut csv::Writer<io::StdoutLock<'_>>, arr: &[Value]) {
    if arr.is_empty() {
        return;
    }

    if let Some(Value::Object(first)) = arr.first() {
        let headers: Vec<&str> = first.keys().map(|k| k.as_str()).collect();
        let _ = wtr.write_record(&headers);

        for item in arr {
            if let Value::Object(map) = item {
                let row: Vec<String> = headers
                    .iter()
                    .map(|h| {
                        map.get(*h)
                            .map(|v| format_csv_value(v))
                            .unwrap_or_default()
                    })
                    .collect();
                let _ = wtr.write_record(&row);
            }
        }
    } else {
        for item in arr {
            let _ = wtr.write_record([&format_csv_value(item)]);
        }
    }
}

fn str_of<'a>(map: &'a serde_json::Map<String, Value>, key: &str) -> &'a str {
    map.get(key).and_then(|v| v.as_str()).unwrap_or("")
}

fn format_csv_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        _ => serde_json::to_string(value).unwrap_or_default(),
    }
}
