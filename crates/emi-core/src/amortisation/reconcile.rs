//! Final-period rounding reconciliation.
//!
//! Every period rounds its interest to cents while the payment is fixed, so
//! the balance left after the last scheduled payment is rarely exactly zero.
//! That residue is swept into the final installment here rather than spread
//! across the schedule.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::{in_range, Money};
use crate::EmiResult;

use super::schedule::Installment;

/// Running totals over the installments produced so far.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunningTotals {
    pub principal: Money,
    pub interest: Money,
    pub sum: Money,
}

impl RunningTotals {
    /// Totals after `installment` has been paid.
    pub fn after(&self, installment: &Installment) -> EmiResult<RunningTotals> {
        Ok(RunningTotals {
            principal: in_range(
                self.principal.checked_add(installment.principal),
                "principal total",
            )?,
            interest: in_range(
                self.interest.checked_add(installment.interest),
                "interest total",
            )?,
            sum: in_range(self.sum.checked_add(installment.installment), "payment total")?,
        })
    }
}

/// Sweep the final installment's leftover balance into its principal and
/// into the totals.
///
/// `totals` must already include `last`. The returned installment has a
/// remaining principal of exactly zero and records the swept residue as its
/// `rounding_adjustment`.
pub fn reconcile_final_period(
    last: Installment,
    totals: RunningTotals,
) -> EmiResult<(Installment, RunningTotals)> {
    let residue = last.remaining_principal;

    let reconciled = Installment {
        principal: in_range(last.principal.checked_add(residue), "final principal")?,
        remaining_principal: Decimal::ZERO,
        rounding_adjustment: residue,
        ..last
    };

    let totals = RunningTotals {
        principal: in_range(totals.principal.checked_add(residue), "principal total")?,
        sum: in_range(totals.sum.checked_add(residue), "payment total")?,
        ..totals
    };

    Ok((reconciled, totals))
}
