//! Ledger error types for move and period errors.

use chrono::NaiveDate;
use continental_shared::AppError;
use continental_shared::types::{CompanyId, MoveId, PeriodId};
use thiserror::Error;

use super::validation::LedgerValidationError;

/// Errors that can occur during ledger operations.
#[derive(Debug, Error)]
pub enum LedgerError {
    // ========== Validation Errors ==========
    /// Move lines are invalid.
    #[error(transparent)]
    Validation(#[from] LedgerValidationError),

    // ========== Period Errors ==========
    /// No period found for the company and date.
    #[error("No period found for company {company} on {date}")]
    NoPeriod {
        /// The company.
        company: CompanyId,
        /// The move date.
        date: NaiveDate,
    },

    /// Period is closed, no posting allowed.
    #[error("Period {0} is closed, no posting allowed")]
    PeriodClosed(PeriodId),

    /// Move date falls outside its period.
    #[error("Date {date} is outside period {period}")]
    DateOutsidePeriod {
        /// The period.
        period: PeriodId,
        /// The move date.
        date: NaiveDate,
    },

    // ========== Move State Errors ==========
    /// Cannot modify a posted move.
    #[error("Cannot modify posted move {0}")]
    CannotModifyPosted(MoveId),

    /// Move not found.
    #[error("Move not found: {0}")]
    MoveNotFound(MoveId),
}

impl LedgerError {
    /// Returns the error code for presentation layers.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(LedgerValidationError::Unbalanced { .. }) => "UNBALANCED_MOVE",
            Self::Validation(LedgerValidationError::InsufficientLines(_)) => "INSUFFICIENT_LINES",
            Self::Validation(LedgerValidationError::NegativeAmount) => "NEGATIVE_AMOUNT",
            Self::Validation(LedgerValidationError::DebitAndCredit) => "DEBIT_AND_CREDIT",
            Self::NoPeriod { .. } => "NO_PERIOD",
            Self::PeriodClosed(_) => "PERIOD_CLOSED",
            Self::DateOutsidePeriod { .. } => "DATE_OUTSIDE_PERIOD",
            Self::CannotModifyPosted(_) => "CANNOT_MODIFY_POSTED",
            Self::MoveNotFound(_) => "MOVE_NOT_FOUND",
        }
    }
}

impl From<LedgerError> for AppError {
    fn from(err: LedgerError) -> Self {
        match err {
            LedgerError::MoveNotFound(_) => Self::NotFound(err.to_string()),
            LedgerError::NoPeriod { .. } => Self::Configuration(err.to_string()),
            _ => Self::BusinessRule(err.to_string()),
        }
    }
}
