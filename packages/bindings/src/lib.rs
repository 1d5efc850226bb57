use napi::Result as NapiResult;
use napi_derive::napi;

use emi_core::amortisation::schedule::{self, LoanInput};
use emi_core::render::html::{self, TableOptions};
use emi_core::Loan;

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

/// Build the amortisation schedule for a JSON `LoanInput`
/// (`{"amount": "10000", "installments": 12, "annual_rate_percent": "10"}`)
/// and return the computation envelope as JSON.
#[napi]
pub fn compute_loan(input_json: String) -> NapiResult<String> {
    let input: LoanInput = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = schedule::build_schedule(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

/// Render a JSON `Loan` (the `result` of `computeLoan`) as an HTML table.
#[napi]
pub fn render_table(loan_json: String, thousands_separator: Option<bool>) -> NapiResult<String> {
    let loan: Loan = serde_json::from_str(&loan_json).map_err(to_napi_error)?;
    let options = if thousands_separator.unwrap_or(false) {
        TableOptions::with_format_money(html::grouped_two_dp)
    } else {
        TableOptions::default()
    };
    Ok(html::render_table(&loan, &options))
}
