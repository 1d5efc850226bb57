use emi_core::render::html::{fixed_two_dp, grouped_two_dp};
use emi_core::{compute_loan, render_table, TableOptions};
use pretty_assertions::assert_eq;
use rust_decimal_macros::dec;

#[test]
fn test_two_period_table_exact_markup() {
    let loan = compute_loan(dec!(1000), 2, dec!(12)).unwrap();
    let html = render_table(&loan, &TableOptions::default());

    let expected = concat!(
        r#"<table class="table table-striped">"#,
        "<thead><tr><th>#</th><th>Principal</th><th>Interest</th><th>Installment</th>",
        "<th>Remaining Principal</th><th>Total Interest Paid</th></tr></thead>",
        "<tbody>",
        "<tr><td>1</td><td>497.51</td><td>10.00</td><td>507.51</td><td>502.49</td><td>10.00</td></tr>",
        "<tr><td>2</td><td>502.49</td><td>5.02</td><td>507.51</td><td>0.00</td><td>15.02</td></tr>",
        "</tbody>",
        "<tfoot><tr><td>Total</td><td>1000.00</td><td>15.02</td><td>1015.02</td><td>-</td><td>-</td></tr></tfoot>",
        "</table>",
    );
    assert_eq!(html, expected);
}

#[test]
fn test_row_markers_for_long_schedule() {
    let loan = compute_loan(dec!(250000), 360, dec!(6.5)).unwrap();
    let html = render_table(&loan, &TableOptions::default());
    assert_eq!(html.matches("<tr>").count(), 362);
    assert!(html.contains("<td>360</td>"));
}

#[test]
fn test_formatter_applies_to_every_money_cell() {
    let loan = compute_loan(dec!(10000), 12, dec!(10)).unwrap();
    let options = TableOptions::with_format_money(|v| format!("[{}]", fixed_two_dp(v)));
    let html = render_table(&loan, &options);

    // 12 rows x 5 money columns + 3 totals
    assert_eq!(html.matches("<td>[").count(), 63);
    assert!(html.contains("<td>[10549.89]</td>"));
    // Index and placeholder cells are not money
    assert!(html.contains("<td>12</td>"));
    assert!(html.contains("<td>-</td><td>-</td>"));
}

#[test]
fn test_grouped_formatter() {
    let loan = compute_loan(dec!(1500000), 12, dec!(5)).unwrap();
    let options = TableOptions::with_format_money(grouped_two_dp);
    let html = render_table(&loan, &options);
    assert!(html.contains("<td>1,500,000.00</td>"));
    assert_eq!(options.format_money(dec!(1234.5)), "1,234.50");
}
