use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::error::EmiError;
use crate::time_value::{annuity_payment, monthly_rate};
use crate::types::*;
use crate::EmiResult;

use super::reconcile::{reconcile_final_period, RunningTotals};

/// Loan terms as supplied by a caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanInput {
    /// Principal borrowed
    pub amount: Money,
    /// Number of monthly installments. Signed so that nonsense counts reach
    /// validation and are reported rather than rejected by the parser.
    pub installments: i64,
    /// Yearly interest rate in percent (8.5 = 8.5%)
    pub annual_rate_percent: Percent,
}

/// One period of an amortisation schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Installment {
    /// Part of the payment that reduces the balance
    pub principal: Money,
    /// Part of the payment charged as interest
    pub interest: Money,
    /// Fixed scheduled payment, identical for every period
    pub installment: Money,
    /// Balance outstanding after this payment
    pub remaining_principal: Money,
    /// Interest paid through and including this period
    pub cumulative_interest: Money,
    /// Rounding residue swept into this period; non-zero only on the last one
    pub rounding_adjustment: Money,
}

/// A fully amortised loan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Loan {
    pub amount: Money,
    pub installments: Vec<Installment>,
    pub interest_sum: Money,
    pub principal_sum: Money,
    pub sum: Money,
}

impl Loan {
    /// The fixed payment shared by every installment.
    pub fn fixed_installment(&self) -> Option<Money> {
        self.installments.first().map(|i| i.installment)
    }

    /// Residue absorbed by the final installment.
    pub fn final_adjustment(&self) -> Money {
        self.installments
            .last()
            .map(|i| i.rounding_adjustment)
            .unwrap_or(Decimal::ZERO)
    }
}

/// Break down a single period's payment given the totals paid before it.
///
/// Interest accrues on the balance outstanding before this payment; the
/// balance afterwards is measured from the original `amount` so that rounding
/// does not compound from one period to the next.
pub fn next_installment(
    amount: Money,
    payment: Money,
    rate: Rate,
    before: &RunningTotals,
) -> EmiResult<Installment> {
    let outstanding = amount - before.principal;
    let interest = round_money(in_range(outstanding.checked_mul(rate), "period interest")?);
    let principal = payment - interest;

    Ok(Installment {
        principal,
        interest,
        installment: payment,
        remaining_principal: outstanding - principal,
        cumulative_interest: in_range(
            before.interest.checked_add(interest),
            "cumulative interest",
        )?,
        rounding_adjustment: Decimal::ZERO,
    })
}

/// Build the equal-installment amortisation schedule of a fixed-rate loan.
///
/// Requires a positive amount in whole cents, `installments >= 1` and a
/// non-negative rate. A zero rate repays the principal in equal parts with no
/// interest.
pub fn compute_loan(
    amount: Money,
    installments: i64,
    annual_rate_percent: Percent,
) -> EmiResult<Loan> {
    let invalid = || EmiError::InvalidParameters {
        amount,
        installments,
        annual_rate_percent,
    };

    if amount <= Decimal::ZERO
        || round_money(amount) != amount
        || annual_rate_percent < Decimal::ZERO
    {
        return Err(invalid());
    }
    let count = u32::try_from(installments)
        .ok()
        .filter(|n| *n > 0)
        .ok_or_else(invalid)?;

    let rate = monthly_rate(annual_rate_percent);
    let payment = round_money(annuity_payment(amount, rate, count)?);

    let mut schedule = Vec::with_capacity(count as usize);
    let mut totals = RunningTotals::default();

    for _ in 0..count {
        let inst = next_installment(amount, payment, rate, &totals)?;
        totals = totals.after(&inst)?;
        schedule.push(inst);
    }

    if let Some(last) = schedule.pop() {
        let (last, reconciled) = reconcile_final_period(last, totals)?;
        totals = reconciled;
        schedule.push(last);
    }

    Ok(Loan {
        amount: round_money(amount),
        installments: schedule,
        interest_sum: round_money(totals.interest),
        principal_sum: round_money(totals.principal),
        sum: round_money(totals.sum),
    })
}

/// Build the schedule for `input`, wrapped in the computation envelope.
pub fn build_schedule(input: &LoanInput) -> EmiResult<ComputationOutput<Loan>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    let loan = compute_loan(input.amount, input.installments, input.annual_rate_percent)?;

    if input.annual_rate_percent.is_zero() {
        warnings.push("Zero interest rate: principal repaid in equal parts".into());
    }
    let adjustment = loan.final_adjustment();
    if !adjustment.is_zero() {
        warnings.push(format!(
            "Final installment principal adjusted by {adjustment} to absorb rounding"
        ));
    }

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Equal Monthly Installment (annuity) amortisation",
        &serde_json::json!({
            "amount": input.amount.to_string(),
            "installments": input.installments,
            "annual_rate_percent": input.annual_rate_percent.to_string(),
            "monthly_rate": monthly_rate(input.annual_rate_percent).to_string(),
            "rounding": "2dp, midpoint away from zero; residue swept into final period",
        }),
        warnings,
        elapsed,
        loan,
    ))
}
