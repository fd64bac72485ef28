//! Property-based tests for move line validation.

use continental_shared::types::AccountId;
use proptest::prelude::*;
use rust_decimal::Decimal;

use super::entry::MoveLine;
use super::validation::{LedgerValidationError, validate_lines};

/// Strategy to generate a signed amount with two decimals.
fn signed_amount() -> impl Strategy<Value = Decimal> {
    (-100_000_000i64..100_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy to generate a positive amount (> 0).
fn positive_amount() -> impl Strategy<Value = Decimal> {
    (1i64..100_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// A line and its mirror always balance.
    #[test]
    fn prop_mirrored_lines_balance(amount in signed_amount()) {
        let lines = vec![
            MoveLine::from_signed(AccountId::new(), amount),
            MoveLine::from_signed(AccountId::new(), -amount),
        ];
        prop_assert!(validate_lines(&lines).is_ok());
    }

    /// Any set of signed lines summing to zero validates.
    #[test]
    fn prop_zero_sum_validates(amounts in prop::collection::vec(signed_amount(), 1..8)) {
        let mut lines: Vec<MoveLine> = amounts
            .iter()
            .map(|a| MoveLine::from_signed(AccountId::new(), *a))
            .collect();
        let total: Decimal = amounts.iter().sum();
        lines.push(MoveLine::from_signed(AccountId::new(), -total));
        prop_assert!(validate_lines(&lines).is_ok());
    }

    /// Adding a non-zero amount to one side breaks the balance.
    #[test]
    fn prop_skewed_lines_rejected(amount in positive_amount(), skew in positive_amount()) {
        let lines = vec![
            MoveLine::from_signed(AccountId::new(), amount + skew),
            MoveLine::from_signed(AccountId::new(), -amount),
        ];
        let is_unbalanced = matches!(
            validate_lines(&lines),
            Err(LedgerValidationError::Unbalanced { .. })
        );
        prop_assert!(is_unbalanced);
    }

    /// Negative amounts are rejected whatever the balance.
    #[test]
    fn prop_negative_rejected(amount in positive_amount()) {
        let lines = vec![
            MoveLine { account: AccountId::new(), debit: -amount, credit: Decimal::ZERO, description: None },
            MoveLine { account: AccountId::new(), debit: Decimal::ZERO, credit: -amount, description: None },
        ];
        let is_negative = matches!(validate_lines(&lines), Err(LedgerValidationError::NegativeAmount));
        prop_assert!(is_negative);
    }
}
