use serde_json::Value;
use std::io;

use super::{format_value, installments, SCHEDULE_COLUMNS};

/// Write the schedule as CSV to stdout, one row per installment.
pub fn print_csv(value: &Value) -> csv::Result<()> {
    let stdout = io::stdout();
    let mut wtr = csv::Writer::from_writer(stdout.lock());
    write_csv(&mut wtr, value)
}

fn write_csv<W: io::Write>(wtr: &mut csv::Writer<W>, value: &Value) -> csv::Result<()> {
    match installments(value) {
        Some(rows) => write_schedule(wtr, rows)?,
        None => wtr.write_record([&format_value(value)])?,
    }
    wtr.flush()?;
    Ok(())
}

fn write_schedule<W: io::Write>(wtr: &mut csv::Writer<W>, rows: &[Value]) -> csv::Result<()> {
    let mut header = vec!["period"];
    header.extend(SCHEDULE_COLUMNS.iter().map(|(key, _)| *key));
    wtr.write_record(&header)?;

    for (i, row) in rows.iter().enumerate() {
        let mut record = vec![(i + 1).to_string()];
        record.extend(
            SCHEDULE_COLUMNS
                .iter()
                .map(|(key, _)| row.get(*key).map(format_value).unwrap_or_default()),
        );
        wtr.write_record(&record)?;
    }
    Ok(())
}
