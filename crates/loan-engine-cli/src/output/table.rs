use serde_json::Value;
use tabled::{builder::Builder, Table};

use super::schedule_rows;

/// Format output as tables using the tabled crate: one scalar table for the
/// headline figures, then the amortization rows (if present) as their own
/// table.
pub fn print_table(value: &Value) {
    match value {
        Value::Object(map) => {
            if let Some(result) = map.get("result") {
                print_result_table(result, map);
                if let Some(rows) = schedule_rows(value) {
                    println!();
                    print_array_table(rows);
                }
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
    if let Value::Object(res_map) = result {
        let mut builder = Builder::default();
        builder.push_record(["Field", "Value"]);
        for (key, val) in res_map {
            // Arrays get their own table below; nested sections are
            // flattened with a dotted prefix
            if matches!(val, Value::Array(_) | Value::Object(_)) {
                continue;
            }
            builder.push_record([key.as_str(), &format_value(val)]);
        }
        // Nested summary/payoff sections from a full analysis
        for section in ["summary", "payoff"] {
            if let Some(Value::Object(nested)) = res_map.get(section) {
                for (key, val) in nested {
                    builder.push_record([
                        format!("{section}.{key}").as_str(),
                        &format_value(val),
                    ]);
                }
            }
        }
        // Scalar schedule figures from a full analysis
        if let Some(Value::Object(nested)) = res_map.get("schedule") {
            for (key, val) in nested {
                if matches!(val, Value::Array(_)) {
                    continue;
                }
                builder.push_record([format!("schedule.{key}").as_str(), &format_value(val)]);
            }
        }
        let table = Table::from(builder);
        println!("{}", table);
    } else {
        print_flat_object(&Value::Object(envelope.clone()));
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

fn print_flat_object(value: &Value) {
    if let Value::Object(map) = value {
        let mut builder = Builder::default();
        builder.push_record(["Field", "Value"]);
        for (key, val) in map {
            builder.push_record([key.as_str(), &format_value(val)]);
        }
        let table = Table::from(builder);
        println!("{}", table);
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
                            .map(|v| format_value(v))
                            .unwrap_or_default()
                    })
                    .collect();
                builder.push_record(row);
            }
        }

        let table = Table::from(builder);
        println!("{}", table);
    } else {
        for item in arr {
            println!("{}", format_value(item));
        }
    }
}

fn format_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        Value::Array(arr) => {
            let items: Vec<String> = arr.iter().map(|v| format_value(v)).collect();
            items.join(", ")
        }
        Value::Object(_) => serde_json::to_string(value).unwrap_or_default(),
    }
}
