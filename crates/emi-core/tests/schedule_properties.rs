use emi_core::{compute_loan, render_table, round_money, EmiError, Money, TableOptions};
use proptest::prelude::*;
use rust_decimal::Decimal;

/// Amounts in cents from 0.01 to 10,000,000.00
fn amount_strategy() -> impl Strategy<Value = Money> {
    (1i64..=1_000_000_000).prop_map(|cents| Decimal::new(cents, 2))
}

/// Annual rates from 0.00% to 36.00%
fn rate_strategy() -> impl Strategy<Value = Decimal> {
    (0i64..=3600).prop_map(|bps| Decimal::new(bps, 2))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn principals_sum_exactly_to_amount(
        amount in amount_strategy(),
        n in 1i64..=360,
        rate in rate_strategy(),
    ) {
        let loan = compute_loan(amount, n, rate).unwrap();
        let principal_paid: Money = loan.installments.iter().map(|i| i.principal).sum();
        prop_assert_eq!(principal_paid, loan.principal_sum);
        prop_assert_eq!(loan.principal_sum, loan.amount);
    }

    #[test]
    fn sum_is_principal_plus_interest(
        amount in amount_strategy(),
        n in 1i64..=360,
        rate in rate_strategy(),
    ) {
        let loan = compute_loan(amount, n, rate).unwrap();
        prop_assert_eq!(loan.sum, round_money(loan.principal_sum + loan.interest_sum));
    }

    #[test]
    fn schedule_shape_holds(
        amount in amount_strategy(),
        n in 1i64..=360,
        rate in rate_strategy(),
    ) {
        let loan = compute_loan(amount, n, rate).unwrap();
        prop_assert_eq!(loan.installments.len() as i64, n);

        let last = loan.installments.last().unwrap();
        prop_assert_eq!(last.remaining_principal, Decimal::ZERO);

        let payment = loan.installments[0].installment;
        for inst in &loan.installments {
            prop_assert_eq!(inst.installment, payment);
            prop_assert_eq!(
                inst.principal + inst.interest,
                inst.installment + inst.rounding_adjustment
            );
        }
        let (_, rest) = loan.installments.split_last().unwrap();
        prop_assert!(rest.iter().all(|i| i.rounding_adjustment.is_zero()));
    }

    #[test]
    fn computation_is_deterministic(
        amount in amount_strategy(),
        n in 1i64..=120,
        rate in rate_strategy(),
    ) {
        prop_assert_eq!(compute_loan(amount, n, rate).unwrap(), compute_loan(amount, n, rate).unwrap());
    }

    #[test]
    fn table_has_one_row_per_installment_plus_two(
        amount in amount_strategy(),
        n in 1i64..=120,
        rate in rate_strategy(),
    ) {
        let loan = compute_loan(amount, n, rate).unwrap();
        let html = render_table(&loan, &TableOptions::default());
        prop_assert_eq!(html.matches("<tr>").count() as i64, n + 2);
    }

    #[test]
    fn non_positive_counts_are_rejected(
        amount in amount_strategy(),
        n in -1000i64..=0,
        rate in rate_strategy(),
    ) {
        let err = compute_loan(amount, n, rate).unwrap_err();
        let message = err.to_string();
        let expected = format!("{amount} {n} {rate}");
        prop_assert!(message.contains(&expected), "{} missing {}", message, expected);
    }

    #[test]
    fn sub_cent_amounts_are_rejected(
        cents in 1i64..=1_000_000_000,
        mills in 1i64..=9,
        n in 1i64..=360,
        rate in rate_strategy(),
    ) {
        let amount = Decimal::new(cents * 10 + mills, 3);
        let result = compute_loan(amount, n, rate);
        prop_assert!(
            matches!(result, Err(EmiError::InvalidParameters { .. })),
            "expected InvalidParameters, got {:?}",
            result
        );
    }
}
