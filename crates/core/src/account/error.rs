//! Account configuration errors.

use continental_shared::AppError;
use continental_shared::types::{AccountId, CategoryId, CompanyId};
use thiserror::Error;

use super::role::StockAccountRole;
use super::types::Statement;

/// Errors raised while configuring stock accounts.
#[derive(Debug, Error)]
pub enum AccountError {
    /// Account referenced by a category account is unknown.
    #[error("Account not found: {0}")]
    AccountNotFound(AccountId),

    /// Account type is not flagged for stock.
    #[error("{role} requires a stock account, \"{account}\" is not one")]
    NotStockAccount {
        /// The role being configured.
        role: StockAccountRole,
        /// Display name of the account.
        account: String,
    },

    /// Account reports on the wrong statement for the role.
    #[error("{role} requires an account on the {expected} statement, \"{account}\" is on {actual}")]
    WrongStatement {
        /// The role being configured.
        role: StockAccountRole,
        /// Display name of the account.
        account: String,
        /// Statement required by the role.
        expected: Statement,
        /// Statement of the account.
        actual: Statement,
    },

    /// Account belongs to another company (or to none).
    #[error("{role} account \"{account}\" does not belong to company {company}")]
    CompanyMismatch {
        /// The role being configured.
        role: StockAccountRole,
        /// Display name of the account.
        account: String,
        /// Company of the category account value.
        company: CompanyId,
    },

    /// A value already exists for this category and company.
    #[error("Category {category} already has stock accounts for company {company}")]
    DuplicateCategoryAccount {
        /// The category.
        category: CategoryId,
        /// The company.
        company: CompanyId,
    },
}

impl AccountError {
    /// Returns the error code for presentation layers.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::AccountNotFound(_) => "ACCOUNT_NOT_FOUND",
            Self::NotStockAccount { .. } => "NOT_STOCK_ACCOUNT",
            Self::WrongStatement { .. } => "WRONG_STATEMENT",
            Self::CompanyMismatch { .. } => "COMPANY_MISMATCH",
            Self::DuplicateCategoryAccount { .. } => "DUPLICATE_CATEGORY_ACCOUNT",
        }
    }
}

impl From<AccountError> for AppError {
    fn from(err: AccountError) -> Self {
        match err {
            AccountError::AccountNotFound(_) => Self::NotFound(err.to_string()),
            AccountError::DuplicateCategoryAccount { .. } => Self::Conflict(err.to_string()),
            _ => Self::Validation(err.to_string()),
        }
    }
}
