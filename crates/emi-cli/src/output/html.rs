use serde_json::Value;

use emi_core::render::html::{grouped_two_dp, render_table, TableOptions};
use emi_core::Loan;

use crate::MoneyFormat;

/// Print the schedule as an HTML table.
pub fn print_html(value: &Value, money_format: MoneyFormat) {
    let Some(result) = value.get("result") else {
        eprintln!("HTML output requires a loan schedule");
        return;
    };

    match serde_json::from_value::<Loan>(result.clone()) {
        Ok(loan) => println!("{}", render_table(&loan, &table_options(money_format))),
        Err(e) => eprintln!("HTML output requires a loan schedule: {}", e),
    }
}

fn table_options(money_format: MoneyFormat) -> TableOptions {
    match money_format {
        MoneyFormat::Plain => TableOptions::default(),
        MoneyFormat::Grouped => TableOptions::with_format_money(grouped_two_dp),
    }
}
