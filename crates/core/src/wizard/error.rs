//! Modify cost price wizard error types.

use chrono::NaiveDate;
use continental_shared::AppError;
use continental_shared::types::{AccountId, CompanyId, ProductId, TemplateId};
use thiserror::Error;

use super::types::{Event, WizardState};
use crate::host::HostError;

/// Errors aborting a wizard step.
///
/// Variants carrying a `message` hold the operator-facing text, already
/// localized.
#[derive(Debug, Error)]
pub enum ModifyCostPriceError {
    /// Counterpart is the product's stock account.
    #[error("{message}")]
    SameAccount {
        /// The offending account.
        account: AccountId,
        /// Localized message naming the account.
        message: String,
    },

    /// The product resolves no stock account.
    #[error("{message}")]
    MissingStockAccount {
        /// The product.
        product: ProductId,
        /// Localized message.
        message: String,
    },

    /// No stock journal selected.
    #[error("{message}")]
    MissingStockJournal {
        /// The operator's company.
        company: CompanyId,
        /// Localized message.
        message: String,
    },

    /// No counterpart selected.
    #[error("{message}")]
    MissingCounterpart {
        /// Localized message.
        message: String,
    },

    /// Counterpart is not a stock account usable by the company.
    #[error("{message}")]
    InvalidCounterpart {
        /// The offending account.
        account: AccountId,
        /// Localized message.
        message: String,
    },

    /// No open period contains the move date.
    #[error("{message}")]
    NoPeriod {
        /// The move date.
        date: NaiveDate,
        /// Localized message.
        message: String,
    },

    /// Template without variant.
    #[error("Template {0} has no variant")]
    NoVariant(TemplateId),

    /// Event not allowed in the current state.
    #[error("Cannot handle {event} in state {state}")]
    InvalidStep {
        /// The current state.
        state: WizardState,
        /// The rejected event.
        event: Event,
    },

    /// Host failure.
    #[error(transparent)]
    Host(#[from] HostError),
}

impl ModifyCostPriceError {
    /// Returns the error code for presentation layers.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::SameAccount { .. } => "SAME_ACCOUNT",
            Self::MissingStockAccount { .. } => "MISSING_STOCK_ACCOUNT",
            Self::MissingStockJournal { .. } => "MISSING_STOCK_JOURNAL",
            Self::MissingCounterpart { .. } => "MISSING_COUNTERPART",
            Self::InvalidCounterpart { .. } => "INVALID_COUNTERPART",
            Self::NoPeriod { .. } => "NO_PERIOD",
            Self::NoVariant(_) => "NO_VARIANT",
            Self::InvalidStep { .. } => "INVALID_STEP",
            Self::Host(err) => err.error_code(),
        }
    }

    /// Returns true if the operator can fix the cause and retry.
    #[must_use]
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            Self::SameAccount { .. }
                | Self::MissingStockAccount { .. }
                | Self::MissingStockJournal { .. }
                | Self::MissingCounterpart { .. }
                | Self::InvalidCounterpart { .. }
                | Self::NoPeriod { .. }
        )
    }
}

impl From<ModifyCostPriceError> for AppError {
    fn from(err: ModifyCostPriceError) -> Self {
        match err {
            ModifyCostPriceError::Host(inner) => inner.into(),
            ModifyCostPriceError::SameAccount { .. }
            | ModifyCostPriceError::MissingCounterpart { .. }
            | ModifyCostPriceError::InvalidCounterpart { .. } => Self::Validation(err.to_string()),
            ModifyCostPriceError::MissingStockAccount { .. }
            | ModifyCostPriceError::MissingStockJournal { .. }
            | ModifyCostPriceError::NoPeriod { .. } => Self::Configuration(err.to_string()),
            ModifyCostPriceError::NoVariant(_) => Self::NotFound(err.to_string()),
            ModifyCostPriceError::InvalidStep { .. } => Self::Internal(err.to_string()),
        }
    }
}
