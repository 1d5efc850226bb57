use serde_json::Value;
use tabled::{builder::Builder, Table};

use super::{format_value, installments, SCHEDULE_COLUMNS};

const TOTAL_FIELDS: [(&str, &str); 4] = [
    ("amount", "Amount"),
    ("principal_sum", "Principal Paid"),
    ("interest_sum", "Interest Paid"),
    ("sum", "Total Paid"),
];

/// Print the schedule, its totals, warnings and methodology as tables.
pub fn print_table(value: &Value) {
    let Some(rows) = installments(value) else {
        println!("{}", format_value(value));
        return;
    };

    println!("{}", schedule_table(rows));

    if let Some(result) = value.get("result") {
        println!("{}", totals_table(result));
    }

    if let Some(Value::Array(warnings)) = value.get("warnings") {
        if !warnings.is_empty() {
            println!("\nWarnings:");
            for w in warnings {
                if let Value::String(s) = w {
                    println!("  - {}", s);
                }
            }
        }
    }

    if let Some(Value::String(meth)) = value.get("methodology") {
        println!("\nMethodology: {}", meth);
    }
}

fn schedule_table(rows: &[Value]) -> Table {
    let mut builder = Builder::default();

    let mut header = vec!["#".to_string()];
    header.extend(SCHEDULE_COLUMNS.iter().map(|(_, title)| title.to_string()));
    builder.push_record(header);

    for (i, row) in rows.iter().enumerate() {
        let mut record = vec![(i + 1).to_string()];
        record.extend(
            SCHEDULE_COLUMNS
                .iter()
                .map(|(key, _)| row.get(*key).map(format_value).unwrap_or_default()),
        );
        builder.push_record(record);
    }

    Table::from(builder)
}

fn totals_table(result: &Value) -> Table {
    let mut builder = Builder::default();
    builder.push_record(["Total", "Value"]);
    for (key, title) in TOTAL_FIELDS {
        let cell = result.get(key).map(format_value).unwrap_or_default();
        builder.push_record([title.to_string(), cell]);
    }
    Table::from(builder)
}
