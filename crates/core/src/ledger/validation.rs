//! Business rule validation for moves.

use rust_decimal::Decimal;
use thiserror::Error;

use super::entry::MoveLine;

/// Validation errors for move lines.
#[derive(Debug, Error)]
pub enum LedgerValidationError {
    /// Move lines do not balance.
    #[error("Move is unbalanced: debits ({debits}) != credits ({credits})")]
    Unbalanced {
        /// Total debit amount.
        debits: Decimal,
        /// Total credit amount.
        credits: Decimal,
    },

    /// Move has fewer than two lines.
    #[error("Move must have at least 2 lines, got {0}")]
    InsufficientLines(usize),

    /// Line amount is negative.
    #[error("Line amounts cannot be negative")]
    NegativeAmount,

    /// Line carries both a debit and a credit.
    #[error("Line must specify either debit or credit, not both")]
    DebitAndCredit,
}

/// Validates that a set of move lines is balanced and well formed.
///
/// Lines with a zero debit and a zero credit are accepted.
///
/// # Errors
///
/// Returns an error if the lines are not balanced or violate business rules.
pub fn validate_lines(lines: &[MoveLine]) -> Result<(), LedgerValidationError> {
    if lines.len() < 2 {
        return Err(LedgerValidationError::InsufficientLines(lines.len()));
    }

    let mut total_debits = Decimal::ZERO;
    let mut total_credits = Decimal::ZERO;

    for line in lines {
        if line.debit < Decimal::ZERO || line.credit < Decimal::ZERO {
            return Err(LedgerValidationError::NegativeAmount);
        }
        if !line.debit.is_zero() && !line.credit.is_zero() {
            return Err(LedgerValidationError::DebitAndCredit);
        }
        total_debits += line.debit;
        total_credits += line.credit;
    }

    if total_debits != total_credits {
        return Err(LedgerValidationError::Unbalanced {
            debits: total_debits,
            credits: total_credits,
        });
    }

    Ok(())
}
