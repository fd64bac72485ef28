//! Host error types.

use continental_shared::AppError;
use continental_shared::types::{AccountId, CompanyId, MoveId, ProductId, TemplateId};
use thiserror::Error;

use crate::account::AccountError;
use crate::ledger::LedgerError;
use crate::product::CostPriceError;

/// Errors raised by a host while reading or writing records.
#[derive(Debug, Error)]
pub enum HostError {
    /// Product not found.
    #[error("Product not found: {0}")]
    ProductNotFound(ProductId),

    /// Template not found.
    #[error("Template not found: {0}")]
    TemplateNotFound(TemplateId),

    /// Account not found.
    #[error("Account not found: {0}")]
    AccountNotFound(AccountId),

    /// Company not found.
    #[error("Company not found: {0}")]
    CompanyNotFound(CompanyId),

    /// Move not found.
    #[error("Move not found: {0}")]
    MoveNotFound(MoveId),

    /// Ledger rule violated.
    #[error(transparent)]
    Ledger(#[from] LedgerError),

    /// Account configuration rejected.
    #[error(transparent)]
    Account(#[from] AccountError),

    /// Cost price change rejected.
    #[error(transparent)]
    CostPrice(#[from] CostPriceError),

    /// Commit or rollback without a transaction.
    #[error("No transaction in progress")]
    NoTransaction,

    /// Backend failure.
    #[error("Host backend error: {0}")]
    Backend(String),
}

impl HostError {
    /// Returns the error code for presentation layers.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::ProductNotFound(_) => "PRODUCT_NOT_FOUND",
            Self::TemplateNotFound(_) => "TEMPLATE_NOT_FOUND",
            Self::AccountNotFound(_) => "ACCOUNT_NOT_FOUND",
            Self::CompanyNotFound(_) => "COMPANY_NOT_FOUND",
            Self::MoveNotFound(_) => "MOVE_NOT_FOUND",
            Self::Ledger(err) => err.error_code(),
            Self::Account(err) => err.error_code(),
            Self::CostPrice(err) => err.error_code(),
            Self::NoTransaction => "NO_TRANSACTION",
            Self::Backend(_) => "HOST_BACKEND_ERROR",
        }
    }
}

impl From<HostError> for AppError {
    fn from(err: HostError) -> Self {
        match err {
            HostError::Ledger(inner) => inner.into(),
            HostError::Account(inner) => inner.into(),
            HostError::CostPrice(inner) => inner.into(),
            HostError::ProductNotFound(_)
            | HostError::TemplateNotFound(_)
            | HostError::AccountNotFound(_)
            | HostError::CompanyNotFound(_)
            | HostError::MoveNotFound(_) => Self::NotFound(err.to_string()),
            HostError::NoTransaction => Self::Internal(err.to_string()),
            HostError::Backend(_) => Self::Storage(err.to_string()),
        }
    }
}
