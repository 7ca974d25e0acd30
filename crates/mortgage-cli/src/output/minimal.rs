use serde_json::Value;

/// Print just the key answer value from the output.
///
/// Heuristic: look for the headline mortgage figures in order of priority,
/// searching the result object and its immediate children (summary, result,
/// baseline), then fall back to the first field.
pub fn print_minimal(value: &Value) {
    let result_obj = value
        .as_object()
        .and_then(|m| m.get("result"))
        .unwrap_or(value);

    let priority_keys = [
        "periodic_payment",
        "payoff_period_count",
        "total_interest_paid",
        "total_interest",
        "interest_saved",
        "total_paid",
    ];

    if let Value::Object(map) = result_obj {
        let mut candidates: Vec<&serde_json::Map<String, Value>> = vec![map];
        for child in map.values() {
            if let Value::Object(inner) = child {
                candidates.push(inner);
            }
        }

        for key in &priority_keys {
            for candidate in &candidates {
                if let Some(val) = candidate.get(*key) {
                    if !val.is_null() {
                        println!("{}", format_minimal(val));
                        return;
                    }
                }
            }
        }

        // Fall back to first field
        if let Some((key, val)) = map.iter().next() {
            println!("{}: {}", key, format_minimal(val));
            return;
        }
    }

    // Not an object, just print directly
    println!("{}", format_minimal(result_obj));
}

fn format_minimal(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        _ => serde_json::to_string(value).unwrap_or_default(),
    }
}
