//! Journal and move aggregate.

use chrono::NaiveDate;
use continental_shared::types::{CompanyId, JournalId, MoveId, PeriodId, ProductId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::entry::MoveLine;
use super::error::LedgerError;
use super::validation::validate_lines;

/// An accounting journal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Journal {
    /// Unique identifier.
    pub id: JournalId,
    /// Journal code (e.g., "STO").
    pub code: String,
    /// Journal name.
    pub name: String,
}

impl Journal {
    /// Creates a journal.
    #[must_use]
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: JournalId::new(),
            code: code.into(),
            name: name.into(),
        }
    }
}

/// The document a move was generated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "model", content = "id", rename_all = "snake_case")]
pub enum MoveOrigin {
    /// A cost price change of a product.
    Product(ProductId),
}

/// Move status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoveState {
    /// Move is being drafted.
    #[default]
    Draft,
    /// Move has been posted to the ledger and can no longer change.
    Posted,
}

/// A journal entry made of balanced lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    /// Unique identifier.
    pub id: MoveId,
    /// Company the move is booked for.
    pub company: CompanyId,
    /// Journal the move is recorded in.
    pub journal: JournalId,
    /// Period containing `date`.
    pub period: PeriodId,
    /// Accounting date.
    pub date: NaiveDate,
    /// Source document.
    pub origin: Option<MoveOrigin>,
    /// Free text description.
    pub description: Option<String>,
    /// Move lines.
    pub lines: Vec<MoveLine>,
    /// Current status.
    pub state: MoveState,
}

impl Move {
    /// Creates a draft move without lines.
    #[must_use]
    pub fn draft(company: CompanyId, journal: JournalId, period: PeriodId, date: NaiveDate) -> Self {
        Self {
            id: MoveId::new(),
            company,
            journal,
            period,
            date,
            origin: None,
            description: None,
            lines: Vec::new(),
            state: MoveState::Draft,
        }
    }

    /// Returns true if the move has been posted.
    #[must_use]
    pub fn is_posted(&self) -> bool {
        self.state == MoveState::Posted
    }

    /// Sum of the debit column.
    #[must_use]
    pub fn total_debit(&self) -> Decimal {
        self.lines.iter().map(|l| l.debit).sum()
    }

    /// Sum of the credit column.
    #[must_use]
    pub fn total_credit(&self) -> Decimal {
        self.lines.iter().map(|l| l.credit).sum()
    }

    /// Returns true if debits equal credits.
    #[must_use]
    pub fn is_balanced(&self) -> bool {
        self.total_debit() == self.total_credit()
    }

    /// Validates the lines and marks the move as posted.
    ///
    /// # Errors
    ///
    /// Returns `CannotModifyPosted` if already posted, or a validation error
    /// if the lines are not balanced.
    pub fn post(&mut self) -> Result<(), LedgerError> {
        if self.is_posted() {
            return Err(LedgerError::CannotModifyPosted(self.id));
        }
        validate_lines(&self.lines)?;
        self.state = MoveState::Posted;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use continental_shared::types::AccountId;
    use rust_decimal_macros::dec;

    fn draft() -> Move {
        Move::draft(
            CompanyId::new(),
            JournalId::new(),
            PeriodId::new(),
            NaiveDate::from_ymd_opt(2026, 10, 19).unwrap(),
        )
    }

    #[test]
    fn test_post_balanced_move() {
        let mut mv = draft();
        mv.lines = vec![
            MoveLine::from_signed(AccountId::new(), dec!(200.00)),
            MoveLine::from_signed(AccountId::new(), dec!(-200.00)),
        ];
        assert!(mv.is_balanced());
        mv.post().unwrap();
        assert!(mv.is_posted());
        assert_eq!(mv.total_debit(), dec!(200.00));
    }

    #[test]
    fn test_post_twice_fails() {
        let mut mv = draft();
        mv.lines = vec![
            MoveLine::from_signed(AccountId::new(), dec!(1)),
            MoveLine::from_signed(AccountId::new(), dec!(-1)),
        ];
        mv.post().unwrap();
        assert!(matches!(mv.post(), Err(LedgerError::CannotModifyPosted(_))));
    }

    #[test]
    fn test_post_unbalanced_stays_draft() {
        let mut mv = draft();
        mv.lines = vec![
            MoveLine::from_signed(AccountId::new(), dec!(10)),
            MoveLine::from_signed(AccountId::new(), dec!(-5)),
        ];
        assert!(matches!(mv.post(), Err(LedgerError::Validation(_))));
        assert_eq!(mv.state, MoveState::Draft);
    }

    #[test]
    fn test_origin_serializes_with_model() {
        let product = ProductId::new();
        let json = serde_json::to_value(MoveOrigin::Product(product)).unwrap();
        assert_eq!(json["model"], "product");
        assert_eq!(json["id"], product.to_string());
    }
}
