//! Stock account resolution.
//!
//! An account is looked up, for one role and one company, on:
//! 1. the product variant,
//! 2. its template,
//! 3. the template's accounting category, walking up to the parent while
//!    the category is flagged `account_parent`.
//!
//! The first level holding a value wins; no level holding one yields `None`.

use std::collections::{HashMap, HashSet};

use continental_shared::types::{AccountId, CategoryId, CompanyId, ProductId, TemplateId};
use tracing::warn;

use super::category::{Category, CategoryAccounts};
use super::role::StockAccountRole;
use crate::product::{Product, Template};

/// Record that can carry an account override.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccountOwner {
    /// A product variant.
    Product(ProductId),
    /// A product template.
    Template(TemplateId),
}

/// Company-scoped account overrides on products and templates.
#[derive(Debug, Clone, Default)]
pub struct AccountOverrides {
    values: HashMap<(AccountOwner, StockAccountRole, CompanyId), AccountId>,
}

impl AccountOverrides {
    /// Creates an empty mapping.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the override, returning the previous one.
    pub fn set(
        &mut self,
        owner: AccountOwner,
        role: StockAccountRole,
        company: CompanyId,
        account: AccountId,
    ) -> Option<AccountId> {
        self.values.insert((owner, role, company), account)
    }

    /// Removes the override, returning it.
    pub fn clear(
        &mut self,
        owner: AccountOwner,
        role: StockAccountRole,
        company: CompanyId,
    ) -> Option<AccountId> {
        self.values.remove(&(owner, role, company))
    }

    /// Returns the override.
    #[must_use]
    pub fn get(
        &self,
        owner: AccountOwner,
        role: StockAccountRole,
        company: CompanyId,
    ) -> Option<AccountId> {
        self.values.get(&(owner, role, company)).copied()
    }
}

/// Resolves stock accounts over borrowed configuration.
#[derive(Debug, Clone, Copy)]
pub struct AccountResolver<'a> {
    overrides: &'a AccountOverrides,
    category_accounts: &'a CategoryAccounts,
    categories: &'a HashMap<CategoryId, Category>,
}

impl<'a> AccountResolver<'a> {
    /// Creates a resolver.
    #[must_use]
    pub fn new(
        overrides: &'a AccountOverrides,
        category_accounts: &'a CategoryAccounts,
        categories: &'a HashMap<CategoryId, Category>,
    ) -> Self {
        Self {
            overrides,
            category_accounts,
            categories,
        }
    }

    /// Resolves the account playing `role` for `product` in `company`.
    ///
    /// `template` must be the product's template.
    #[must_use]
    pub fn resolve(
        &self,
        role: StockAccountRole,
        company: CompanyId,
        product: &Product,
        template: &Template,
    ) -> Option<AccountId> {
        debug_assert_eq!(product.template, template.id);

        self.overrides
            .get(AccountOwner::Product(product.id), role, company)
            .or_else(|| {
                self.overrides
                    .get(AccountOwner::Template(template.id), role, company)
            })
            .or_else(|| {
                template
                    .account_category
                    .and_then(|category| self.resolve_category(role, company, category))
            })
    }

    /// Resolves the account playing `role` for a category in `company`.
    #[must_use]
    pub fn resolve_category(
        &self,
        role: StockAccountRole,
        company: CompanyId,
        category: CategoryId,
    ) -> Option<AccountId> {
        let mut visited = HashSet::new();
        let mut current = Some(category);

        while let Some(id) = current {
            if !visited.insert(id) {
                warn!(category = %id, "category parent chain loops");
                return None;
            }
            let category = self.categories.get(&id)?;
            if category.uses_own_accounts() {
                return self
                    .category_accounts
                    .get(id, company)
                    .and_then(|accounts| accounts.get(role));
            }
            if !category.accounting {
                return None;
            }
            current = category.parent;
        }
        None
    }
}
