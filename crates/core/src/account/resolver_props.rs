//! Property-based tests for stock account resolution.
//!
//! - Inheriting categories always resolve to the nearest category holding
//!   its own accounts
//! - A product override always wins over every other level

use std::collections::HashMap;

use continental_shared::types::{AccountId, CategoryId, CompanyId};
use proptest::prelude::*;

use super::category::{Category, CategoryAccounts};
use super::resolver::{AccountOverrides, AccountOwner, AccountResolver};
use super::role::StockAccountRole;
use crate::product::{CostPriceMethod, Product, Template};

/// Strategy for generating stock account roles.
fn role_strategy() -> impl Strategy<Value = StockAccountRole> {
    prop::sample::select(StockAccountRole::ALL.to_vec())
}

/// Builds a root category holding `account` for `role` and a chain of
/// `depth` inheriting categories below it. Returns the deepest category.
fn build_chain(
    depth: usize,
    company: CompanyId,
    role: StockAccountRole,
    account: AccountId,
) -> (HashMap<CategoryId, Category>, CategoryAccounts, CategoryId) {
    let root = Category::accounting("Root");
    let mut leaf = root.id;
    let mut category_accounts = CategoryAccounts::new();
    category_accounts.set(root.id, company, role, Some(account));

    let mut categories = HashMap::new();
    categories.insert(root.id, root);
    for level in 0..depth {
        let child = Category::inheriting(format!("Level {level}"), leaf);
        leaf = child.id;
        categories.insert(child.id, child);
    }
    (categories, category_accounts, leaf)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Any depth of inheriting categories reaches the root's account.
    #[test]
    fn prop_inheritance_reaches_root(depth in 0usize..12, role in role_strategy()) {
        let company = CompanyId::new();
        let account = AccountId::new();
        let (categories, category_accounts, leaf) = build_chain(depth, company, role, account);

        let template = Template::new("Widget", CostPriceMethod::Fixed).in_category(leaf);
        let product = Product::new(template.id, "W");
        let overrides = AccountOverrides::new();
        let resolver = AccountResolver::new(&overrides, &category_accounts, &categories);

        prop_assert_eq!(resolver.resolve(role, company, &product, &template), Some(account));
        prop_assert_eq!(resolver.resolve(role, CompanyId::new(), &product, &template), None);
    }

    /// Only the configured role resolves.
    #[test]
    fn prop_other_roles_stay_empty(
        depth in 0usize..6,
        role in role_strategy(),
        other in role_strategy(),
    ) {
        prop_assume!(role != other);
        let company = CompanyId::new();
        let (categories, category_accounts, leaf) =
            build_chain(depth, company, role, AccountId::new());

        let template = Template::new("Widget", CostPriceMethod::Fixed).in_category(leaf);
        let product = Product::new(template.id, "W");
        let overrides = AccountOverrides::new();
        let resolver = AccountResolver::new(&overrides, &category_accounts, &categories);

        prop_assert_eq!(resolver.resolve(other, company, &product, &template), None);
    }

    /// A product override wins whatever the template and categories hold.
    #[test]
    fn prop_product_override_wins(
        depth in 0usize..6,
        role in role_strategy(),
        with_template_override in any::<bool>(),
    ) {
        let company = CompanyId::new();
        let (categories, category_accounts, leaf) =
            build_chain(depth, company, role, AccountId::new());

        let template = Template::new("Widget", CostPriceMethod::Fixed).in_category(leaf);
        let product = Product::new(template.id, "W");
        let product_account = AccountId::new();

        let mut overrides = AccountOverrides::new();
        if with_template_override {
            overrides.set(AccountOwner::Template(template.id), role, company, AccountId::new());
        }
        overrides.set(AccountOwner::Product(product.id), role, company, product_account);
        let resolver = AccountResolver::new(&overrides, &category_accounts, &categories);

        prop_assert_eq!(
            resolver.resolve(role, company, &product, &template),
            Some(product_account)
        );
    }
}
