//! Product categories and their per-company stock accounts.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use continental_shared::types::{AccountId, CategoryId, CompanyId};
use serde::{Deserialize, Serialize};

use super::error::AccountError;
use super::role::StockAccountRole;
use super::types::Account;

/// One account slot per stock role.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockAccounts([Option<AccountId>; 5]);

impl StockAccounts {
    /// Creates an empty table.
    #[must_use]
    pub const fn new() -> Self {
        Self([None; 5])
    }

    /// Returns the account configured for `role`.
    #[must_use]
    pub fn get(&self, role: StockAccountRole) -> Option<AccountId> {
        self.0[role.index()]
    }

    /// Sets (or clears) the account for `role`.
    pub fn set(&mut self, role: StockAccountRole, account: Option<AccountId>) {
        self.0[role.index()] = account;
    }

    /// Builder form of [`Self::set`].
    #[must_use]
    pub fn with(mut self, role: StockAccountRole, account: AccountId) -> Self {
        self.set(role, Some(account));
        self
    }

    /// Iterates over configured roles and their accounts.
    pub fn iter(&self) -> impl Iterator<Item = (StockAccountRole, AccountId)> + '_ {
        StockAccountRole::ALL
            .into_iter()
            .filter_map(|role| self.get(role).map(|account| (role, account)))
    }

    /// Returns true if no role is configured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.iter().all(Option::is_none)
    }
}

/// A product category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Unique identifier.
    pub id: CategoryId,
    /// Category name.
    pub name: String,
    /// Parent category.
    pub parent: Option<CategoryId>,
    /// Whether the category carries accounting configuration.
    pub accounting: bool,
    /// Whether the accounts are taken from the parent category.
    pub account_parent: bool,
}

impl Category {
    /// Creates a root accounting category.
    #[must_use]
    pub fn accounting(name: impl Into<String>) -> Self {
        Self {
            id: CategoryId::new(),
            name: name.into(),
            parent: None,
            accounting: true,
            account_parent: false,
        }
    }

    /// Creates an accounting category that uses its parent's accounts.
    #[must_use]
    pub fn inheriting(name: impl Into<String>, parent: CategoryId) -> Self {
        Self {
            id: CategoryId::new(),
            name: name.into(),
            parent: Some(parent),
            accounting: true,
            account_parent: true,
        }
    }

    /// Returns true if the category's own stock accounts apply.
    #[must_use]
    pub fn uses_own_accounts(&self) -> bool {
        self.accounting && !self.account_parent
    }
}

/// Stock accounts of a category for one company.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryAccount {
    /// The category.
    pub category: CategoryId,
    /// The company the accounts apply to.
    pub company: CompanyId,
    /// The accounts per role.
    pub accounts: StockAccounts,
}

impl CategoryAccount {
    /// Checks every configured account against its role's constraints.
    ///
    /// Each account must be a stock account of the value's company; the
    /// stock asset role needs a balance sheet account and the other roles
    /// an income statement account.
    pub fn validate<'a, F>(&self, lookup: F) -> Result<(), AccountError>
    where
        F: Fn(AccountId) -> Option<&'a Account>,
    {
        for (role, account_id) in self.accounts.iter() {
            let account = lookup(account_id).ok_or(AccountError::AccountNotFound(account_id))?;
            if !account.is_stock() {
                return Err(AccountError::NotStockAccount {
                    role,
                    account: account.rec_name(),
                });
            }
            if account.kind.statement != role.required_statement() {
                return Err(AccountError::WrongStatement {
                    role,
                    account: account.rec_name(),
                    expected: role.required_statement(),
                    actual: account.kind.statement,
                });
            }
            if !account.belongs_to(self.company) {
                return Err(AccountError::CompanyMismatch {
                    role,
                    account: account.rec_name(),
                    company: self.company,
                });
            }
        }
        Ok(())
    }
}

/// Category account values, unique by category and company.
#[derive(Debug, Clone, Default)]
pub struct CategoryAccounts {
    values: HashMap<(CategoryId, CompanyId), StockAccounts>,
}

impl CategoryAccounts {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a new value.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateCategoryAccount` if the category already has a
    /// value for the company.
    pub fn insert(&mut self, value: CategoryAccount) -> Result<(), AccountError> {
        match self.values.entry((value.category, value.company)) {
            Entry::Occupied(_) => Err(AccountError::DuplicateCategoryAccount {
                category: value.category,
                company: value.company,
            }),
            Entry::Vacant(slot) => {
                slot.insert(value.accounts);
                Ok(())
            }
        }
    }

    /// Sets one role of the category's value for the company, creating the
    /// value if needed.
    pub fn set(
        &mut self,
        category: CategoryId,
        company: CompanyId,
        role: StockAccountRole,
        account: Option<AccountId>,
    ) {
        self.values
            .entry((category, company))
            .or_default()
            .set(role, account);
    }

    /// Returns the category's accounts for the company.
    #[must_use]
    pub fn get(&self, category: CategoryId, company: CompanyId) -> Option<&StockAccounts> {
        self.values.get(&(category, company))
    }

    /// Number of stored values.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if no value is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
