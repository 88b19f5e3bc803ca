pub mod csv_out;
pub mod json;
pub mod minimal;
pub mod table;

use crate::OutputFormat;
use serde_json::Value;

/// Dispatch output to the appropriate formatter.
pub fn format_output(format: &OutputFormat, value: &Value) {
    match format {
        OutputFormat::Json => json::print_json(value),
        OutputFormat::Table => table::print_table(value),
        OutputFormat::Csv => csv_out::print_csv(value),
        OutputFormat::Minimal => minimal::print_minimal(value),
    }
}

/// Pull the amortization rows out of an output envelope, whether the result
/// is a bare schedule or a full analysis.
pub fn schedule_rows(value: &Value) -> Option<&Vec<Value>> {
    let result = value.as_object()?.get("result")?;
    let rows = result
        .get("periods")
        .or_else(|| result.get("schedule")?.get("periods"))?;
    rows.as_array()
}
