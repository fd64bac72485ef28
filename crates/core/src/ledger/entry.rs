//! Move line domain type.

use continental_shared::types::AccountId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single debit or credit row of a move.
///
/// At most one of `debit` and `credit` is non-zero; both are never negative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveLine {
    /// The account affected by this line.
    pub account: AccountId,
    /// Debit amount in company currency.
    pub debit: Decimal,
    /// Credit amount in company currency.
    pub credit: Decimal,
    /// Optional description for this line.
    pub description: Option<String>,
}

impl MoveLine {
    /// Creates a line from a signed amount: positive debits, negative credits.
    #[must_use]
    pub fn from_signed(account: AccountId, amount: Decimal) -> Self {
        let (debit, credit) = if amount > Decimal::ZERO {
            (amount, Decimal::ZERO)
        } else {
            (Decimal::ZERO, -amount)
        };
        Self {
            account,
            debit,
            credit,
            description: None,
        }
    }

    /// Returns the signed amount (positive for debit, negative for credit).
    #[must_use]
    pub fn signed_amount(&self) -> Decimal {
        self.debit - self.credit
    }
}
