//! Chart of accounts entries.

use std::fmt;

use serde::{Deserialize, Serialize};
use continental_shared::types::{AccountId, CompanyId};

/// Financial statement an account reports on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Statement {
    /// Balance sheet account.
    Balance,
    /// Income statement account.
    Income,
    /// Off-balance account.
    OffBalance,
}

impl Statement {
    /// Returns the string representation of the statement.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Balance => "balance",
            Self::Income => "income",
            Self::OffBalance => "off_balance",
        }
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Account type flags relevant to stock valuation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountKind {
    /// Whether the account type is flagged for stock.
    pub stock: bool,
    /// The statement the account reports on.
    pub statement: Statement,
}

/// An account of the chart of accounts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Unique identifier.
    pub id: AccountId,
    /// Owning company, `None` for accounts shared by all companies.
    pub company: Option<CompanyId>,
    /// Account code (e.g., "1300").
    pub code: String,
    /// Account name.
    pub name: String,
    /// Account type flags.
    pub kind: AccountKind,
}

impl Account {
    /// Display name used in operator-facing messages.
    #[must_use]
    pub fn rec_name(&self) -> String {
        if self.code.is_empty() {
            self.name.clone()
        } else {
            format!("{} - {}", self.code, self.name)
        }
    }

    /// Returns true if the account type is flagged for stock.
    #[must_use]
    pub fn is_stock(&self) -> bool {
        self.kind.stock
    }

    /// Returns true if the account belongs to `company` exactly.
    #[must_use]
    pub fn belongs_to(&self, company: CompanyId) -> bool {
        self.company == Some(company)
    }

    /// Returns true if the account belongs to `company` or to no company.
    #[must_use]
    pub fn usable_by(&self, company: CompanyId) -> bool {
        self.company.is_none_or(|owner| owner == company)
    }
}
