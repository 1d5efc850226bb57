pub mod csv_out;
pub mod html;
pub mod json;
pub mod minimal;
pub mod table;

use crate::{MoneyFormat, OutputFormat};
use serde_json::Value;

/// Schedule columns in display order, keyed by their JSON field names.
pub const SCHEDULE_COLUMNS: [(&str, &str); 6] = [
    ("principal", "Principal"),
    ("interest", "Interest"),
    ("installment", "Installment"),
    ("remaining_principal", "Remaining Principal"),
    ("cumulative_interest", "Total Interest Paid"),
    ("rounding_adjustment", "Adjustment"),
];

/// Dispatch output to the appropriate formatter.
pub fn format_output(format: &OutputFormat, money_format: MoneyFormat, value: &Value) {
    match format {
        OutputFormat::Json => json::print_json(value),
        OutputFormat::Table => table::print_table(value),
        OutputFormat::Csv => {
            if let Err(e) = csv_out::print_csv(value) {
                eprintln!("CSV write error: {}", e);
            }
        }
        OutputFormat::Minimal => minimal::print_minimal(value),
        OutputFormat::Html => html::print_html(value, money_format),
    }
}

/// The `installments` array inside the computation envelope, if present.
pub fn installments(value: &Value) -> Option<&Vec<Value>> {
    value
        .get("result")
        .and_then(|r| r.get("installments"))
        .and_then(Value::as_array)
}

pub fn format_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        _ => serde_json::to_string(value).unwrap_or_default(),
    }
}
