use crate::amortisation::schedule::Loan;
use crate::types::{round_money, Money};

const HEADERS: [&str; 6] = [
    "#",
    "Principal",
    "Interest",
    "Installment",
    "Remaining Principal",
    "Total Interest Paid",
];

/// Rendering options for [`render_table`].
pub struct TableOptions {
    format_money: Box<dyn Fn(Money) -> String + Send + Sync>,
}

impl Default for TableOptions {
    fn default() -> Self {
        TableOptions {
            format_money: Box::new(fixed_two_dp),
        }
    }
}

impl TableOptions {
    /// Use `format_money` for every monetary cell.
    pub fn with_format_money<F>(format_money: F) -> Self
    where
        F: Fn(Money) -> String + Send + Sync + 'static,
    {
        TableOptions {
            format_money: Box::new(format_money),
        }
    }

    pub fn format_money(&self, value: Money) -> String {
        (self.format_money)(value)
    }
}

impl std::fmt::Debug for TableOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TableOptions").finish_non_exhaustive()
    }
}

/// `1234.5` -> `"1234.50"`
pub fn fixed_two_dp(value: Money) -> String {
    format!("{:.2}", round_money(value))
}

/// `1234567.5` -> `"1,234,567.50"`
pub fn grouped_two_dp(value: Money) -> String {
    let fixed = fixed_two_dp(value);
    let (sign, digits) = match fixed.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", fixed.as_str()),
    };
    let (int_part, frac_part) = digits.split_once('.').unwrap_or((digits, "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("{sign}{grouped}.{frac_part}")
}

fn cell(tag: &str, content: &str) -> String {
    format!("<{tag}>{content}</{tag}>")
}

/// Render the schedule of `loan` as an HTML table.
///
/// One header row, one row per installment and a totals row in the footer.
/// Cumulative columns have no meaningful total and show `-`.
pub fn render_table(loan: &Loan, options: &TableOptions) -> String {
    let fm = |v: Money| options.format_money(v);
    let mut html = String::from(r#"<table class="table table-striped">"#);

    html.push_str("<thead><tr>");
    for header in HEADERS {
        html.push_str(&cell("th", header));
    }
    html.push_str("</tr></thead>");

    html.push_str("<tbody>");
    for (i, inst) in loan.installments.iter().enumerate() {
        html.push_str("<tr>");
        html.push_str(&cell("td", &(i + 1).to_string()));
        html.push_str(&cell("td", &fm(inst.principal)));
        html.push_str(&cell("td", &fm(inst.interest)));
        html.push_str(&cell("td", &fm(inst.installment)));
        html.push_str(&cell("td", &fm(inst.remaining_principal)));
        html.push_str(&cell("td", &fm(inst.cumulative_interest)));
        html.push_str("</tr>");
    }
    html.push_str("</tbody>");

    html.push_str("<tfoot><tr>");
    html.push_str(&cell("td", "Total"));
    html.push_str(&cell("td", &fm(loan.principal_sum)));
    html.push_str(&cell("td", &fm(loan.interest_sum)));
    html.push_str(&cell("td", &fm(loan.sum)));
    html.push_str(&cell("td", "-"));
    html.push_str(&cell("td", "-"));
    html.push_str("</tr></tfoot>");

    html.push_str("</table>");
    html
}
