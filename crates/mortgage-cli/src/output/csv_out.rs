use serde_json::Value;
use std::io;

/// Column mapping for the external schedule format: engine field name to
/// exported header. Consumers round-trip this file, so the headers and the
/// unformatted numeric fields are fixed.
const SCHEDULE_COLUMNS: [(&str, &str); 6] = [
    ("period_index", "Month"),
    ("payment", "Payment"),
    ("principal_component", "Principal"),
    ("interest_component", "Interest"),
    ("remaining_balance_after", "Remaining Balance"),
    ("year_bucket", "Year"),
];

/// Write output as CSV to stdout.
pub fn print_csv(value: &Value) {
    let stdout = io::stdout();
    let mut wtr = csv::Writer::from_writer(stdout.lock());
    write_csv(&mut wtr, value);
    let _ = wtr.flush();
}

fn write_csv<W: io::Write>(wtr: &mut csv::Writer<W>, value: &Value) {
    let result = value
        .as_object()
        .and_then(|map| map.get("result"))
        .unwrap_or(value);

    if let Some(entries) = result
        .as_object()
        .and_then(|map| map.get("entries"))
        .and_then(Value::as_array)
    {
        write_schedule(wtr, entries);
        return;
    }

    match result {
        Value::Array(rows) => write_rows(wtr, rows),
        Value::Object(map) => write_fields(wtr, map),
        other => {
            let _ = wtr.write_record([format_csv_value(other)]);
        }
    }
}

/// The amortisation schedule in its external delimited format.
fn write_schedule<W: io::Write>(wtr: &mut csv::Writer<W>, entries: &[Value]) {
    let _ = wtr.write_record(SCHEDULE_COLUMNS.iter().map(|(_, header)| *header));
    for entry in entries {
        if let Value::Object(map) = entry {
            let row: Vec<String> = SCHEDULE_COLUMNS
                .iter()
                .map(|(key, _)| map.get(*key).map(format_csv_value).unwrap_or_default())
                .collect();
            let _ = wtr.write_record(&row);
        }
    }
}

fn write_rows<W: io::Write>(wtr: &mut csv::Writer<W>, rows: &[Value]) {
    let Some(Value::Object(first)) = rows.first() else {
        for row in rows {
            let _ = wtr.write_record([format_csv_value(row)]);
        }
        return;
    };

    let headers: Vec<&str> = first.keys().map(|k| k.as_str()).collect();
    let _ = wtr.write_record(&headers);
    for row in rows {
        if let Value::Object(map) = row {
            let record: Vec<String> = headers
                .iter()
                .map(|h| map.get(*h).map(format_csv_value).unwrap_or_default())
                .collect();
            let _ = wtr.write_record(&record);
        }
    }
}

/// Flat field,value rows with one level of nesting flattened.
fn write_fields<W: io::Write>(wtr: &mut csv::Writer<W>, map: &serde_json::Map<String, Value>) {
    let _ = wtr.write_record(["field", "value"]);
    for (key, val) in map {
        match val {
            Value::Object(inner) => {
                for (inner_key, inner_val) in inner {
                    let _ = wtr
                        .write_record([format!("{key}.{inner_key}"), format_csv_value(inner_val)]);
                }
            }
            Value::Array(_) => {}
            other => {
                let _ = wtr.write_record([key.clone(), format_csv_value(other)]);
            }
        }
    }
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
