use serde_json::Value;

use super::{format_value, installments};

/// Print only the fixed monthly installment.
pub fn print_minimal(value: &Value) {
    match minimal_answer(value) {
        Some(answer) => println!("{}", answer),
        None => println!("{}", format_value(value)),
    }
}

/// The fixed installment, falling back to the total repaid.
fn minimal_answer(value: &Value) -> Option<String> {
    installments(value)
        .and_then(|rows| rows.first())
        .and_then(|first| first.get("installment"))
        .or_else(|| value.get("result").and_then(|r| r.get("sum")))
        .map(format_value)
}
