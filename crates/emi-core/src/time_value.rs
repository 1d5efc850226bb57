use rust_decimal::Decimal;
use rust_decimal::MathematicalOps;
use rust_decimal_macros::dec;

use crate::error::EmiError;
use crate::types::{Money, Percent, Rate};
use crate::EmiResult;

const MONTHS_PER_YEAR_PERCENT: Decimal = dec!(1200);

/// Monthly periodic rate from an annual percentage (10 -> 0.00833...).
pub fn monthly_rate(annual_rate_percent: Percent) -> Rate {
    annual_rate_percent / MONTHS_PER_YEAR_PERCENT
}

/// Level payment that repays `principal` over `nper` periods at `rate`.
///
/// `principal * r(1+r)^n / ((1+r)^n - 1)`, or `principal / n` when the rate
/// is zero. The result is unrounded.
pub fn annuity_payment(principal: Money, rate: Rate, nper: u32) -> EmiResult<Money> {
    if nper == 0 {
        return Err(EmiError::OutOfRange {
            context: "annuity payment over zero periods".into(),
        });
    }

    if rate.is_zero() {
        return Ok(principal / Decimal::from(nper));
    }

    let one_plus_r = Decimal::ONE + rate;
    let factor = one_plus_r
        .checked_powu(u64::from(nper))
        .ok_or_else(|| EmiError::OutOfRange {
            context: format!("compound factor (1 + {rate})^{nper}"),
        })?;

    let denominator = factor - Decimal::ONE;
    if denominator.is_zero() {
        return Err(EmiError::OutOfRange {
            context: "annuity factor".into(),
        });
    }

    rate.checked_mul(factor)
        .and_then(|numerator| principal.checked_mul(numerator))
        .and_then(|scaled| scaled.checked_div(denominator))
        .ok_or_else(|| EmiError::OutOfRange {
            context: "annuity payment".into(),
        })
}
