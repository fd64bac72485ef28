//! In-memory host.

use std::collections::HashMap;

use chrono::NaiveDate;
use continental_shared::AppConfig;
use continental_shared::types::{
    AccountId, CategoryId, CompanyId, Currency, JournalId, LocationId, MoveId, ProductId,
    TemplateId,
};
use rust_decimal::Decimal;
use tracing::debug;

use super::context::Context;
use super::error::HostError;
use super::{AccountingConfiguration, Host};
use crate::account::{
    Account, AccountOverrides, AccountOwner, AccountResolver, Category, CategoryAccount,
    CategoryAccounts, StockAccountRole,
};
use crate::i18n::MessageCatalog;
use crate::ledger::{Journal, LedgerError, Move, MoveOrigin, Period, find_period};
use crate::product::{CostPrices, Product, Template, check_no_move};
use crate::stock::{Location, LocationKind, StockMove, StockMoveState, StockView, ValuationMove};

/// Everything a transaction can change.
#[derive(Debug, Clone, Default)]
struct State {
    templates: HashMap<TemplateId, Template>,
    products: HashMap<ProductId, Product>,
    variants: HashMap<TemplateId, Vec<ProductId>>,
    categories: HashMap<CategoryId, Category>,
    category_accounts: CategoryAccounts,
    overrides: AccountOverrides,
    accounts: HashMap<AccountId, Account>,
    cost_prices: CostPrices,
    locations: HashMap<LocationId, Location>,
    stock_moves: Vec<StockMove>,
    currencies: HashMap<CompanyId, Currency>,
    configurations: HashMap<CompanyId, AccountingConfiguration>,
    journals: HashMap<JournalId, Journal>,
    periods: Vec<Period>,
    moves: Vec<Move>,
}

/// A [`Host`] keeping its records in memory.
///
/// Transactions snapshot the whole state on `begin` and restore it on
/// `rollback`. Companies without explicit settings use the currency and
/// accounting configuration of the [`AppConfig`] the host was built from.
#[derive(Debug, Clone)]
pub struct InMemoryHost {
    state: State,
    snapshots: Vec<State>,
    default_currency: Currency,
    default_configuration: AccountingConfiguration,
    catalog: MessageCatalog,
    reject_posting: bool,
}

impl Default for InMemoryHost {
    fn default() -> Self {
        Self::from_config(&AppConfig::default())
    }
}

impl InMemoryHost {
    /// Creates an empty host with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty host using the currency and accounting defaults of
    /// `config`.
    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            state: State::default(),
            snapshots: Vec::new(),
            default_currency: Currency::new(
                config.accounting.currency_code.clone(),
                config.accounting.currency_digits,
            ),
            default_configuration: AccountingConfiguration {
                stock_journal: config.accounting.stock_journal,
                cost_price_counterpart_account: config.accounting.cost_price_counterpart_account,
            },
            catalog: MessageCatalog::builtin(),
            reject_posting: false,
        }
    }

    // ========== Setup ==========

    /// Sets the currency of a company.
    pub fn set_company_currency(&mut self, company: CompanyId, currency: Currency) {
        self.state.currencies.insert(company, currency);
    }

    /// Sets the accounting configuration of a company.
    pub fn set_accounting_configuration(
        &mut self,
        company: CompanyId,
        configuration: AccountingConfiguration,
    ) {
        self.state.configurations.insert(company, configuration);
    }

    /// Adds an account.
    pub fn add_account(&mut self, account: Account) -> AccountId {
        let id = account.id;
        self.state.accounts.insert(id, account);
        id
    }

    /// Adds a journal.
    pub fn add_journal(&mut self, journal: Journal) -> JournalId {
        let id = journal.id;
        self.state.journals.insert(id, journal);
        id
    }

    /// Adds a period.
    pub fn add_period(&mut self, period: Period) {
        self.state.periods.push(period);
    }

    /// Adds a category.
    pub fn add_category(&mut self, category: Category) -> CategoryId {
        let id = category.id;
        self.state.categories.insert(id, category);
        id
    }

    /// Validates and stores the stock accounts of a category for a company.
    ///
    /// # Errors
    ///
    /// Returns an account error if an account breaks its role's constraints
    /// or the category already has accounts for the company.
    pub fn add_category_account(&mut self, value: CategoryAccount) -> Result<(), HostError> {
        value.validate(|id| self.state.accounts.get(&id))?;
        self.state.category_accounts.insert(value)?;
        Ok(())
    }

    /// Adds a template.
    pub fn add_template(&mut self, template: Template) -> TemplateId {
        let id = template.id;
        self.state.templates.insert(id, template);
        id
    }

    /// Adds a variant; its template must exist.
    ///
    /// # Errors
    ///
    /// Returns `TemplateNotFound` if the template is unknown.
    pub fn add_product(&mut self, product: Product) -> Result<ProductId, HostError> {
        if !self.state.templates.contains_key(&product.template) {
            return Err(HostError::TemplateNotFound(product.template));
        }
        let id = product.id;
        self.state
            .variants
            .entry(product.template)
            .or_default()
            .push(id);
        self.state.products.insert(id, product);
        Ok(id)
    }

    /// Sets a stock account override on a product or template.
    pub fn set_account_override(
        &mut self,
        owner: AccountOwner,
        role: StockAccountRole,
        company: CompanyId,
        account: AccountId,
    ) {
        self.state.overrides.set(owner, role, company, account);
    }

    /// Adds a stock location.
    pub fn add_location(&mut self, location: Location) -> LocationId {
        let id = location.id;
        self.state.locations.insert(id, location);
        id
    }

    /// Records a stock move.
    pub fn add_stock_move(&mut self, stock_move: StockMove) {
        self.state.stock_moves.push(stock_move);
    }

    /// Makes every following `post_move` fail, or stops doing so.
    pub fn reject_posting(&mut self, reject: bool) {
        self.reject_posting = reject;
    }

    // ========== Direct writes ==========

    /// Changes a cost price outside the modify cost price wizard.
    ///
    /// # Errors
    ///
    /// Returns `CostPriceError::HasMoves` if the product already has stock
    /// moves.
    pub fn write_cost_price(
        &mut self,
        ctx: &Context,
        product: ProductId,
        cost_price: Decimal,
    ) -> Result<(), HostError> {
        let has_moves = self
            .state
            .stock_moves
            .iter()
            .any(|m| m.product == product && m.state != StockMoveState::Cancelled);
        check_no_move(product, has_moves, &self.catalog, &ctx.language)?;
        self.set_cost_price(product, ctx.company, cost_price)
    }

    // ========== Inspection ==========

    /// Every stored move, in creation order.
    #[must_use]
    pub fn moves(&self) -> &[Move] {
        &self.state.moves
    }

    /// Stored moves whose origin is `product`.
    pub fn moves_of(&self, product: ProductId) -> impl Iterator<Item = &Move> {
        self.state
            .moves
            .iter()
            .filter(move |m| m.origin == Some(MoveOrigin::Product(product)))
    }

    /// Number of open transactions.
    #[must_use]
    pub fn transaction_depth(&self) -> usize {
        self.snapshots.len()
    }

    fn resolver(&self) -> AccountResolver<'_> {
        AccountResolver::new(
            &self.state.overrides,
            &self.state.category_accounts,
            &self.state.categories,
        )
    }
}

impl Host for InMemoryHost {
    fn product(&self, id: ProductId) -> Result<Product, HostError> {
        self.state
            .products
            .get(&id)
            .cloned()
            .ok_or(HostError::ProductNotFound(id))
    }

    fn template(&self, id: TemplateId) -> Result<Template, HostError> {
        self.state
            .templates
            .get(&id)
            .cloned()
            .ok_or(HostError::TemplateNotFound(id))
    }

    fn variants(&self, template: TemplateId) -> Result<Vec<Product>, HostError> {
        if !self.state.templates.contains_key(&template) {
            return Err(HostError::TemplateNotFound(template));
        }
        self.state
            .variants
            .get(&template)
            .into_iter()
            .flatten()
            .map(|id| self.product(*id))
            .collect()
    }

    fn cost_price(&self, product: ProductId, company: CompanyId) -> Result<Decimal, HostError> {
        if !self.state.products.contains_key(&product) {
            return Err(HostError::ProductNotFound(product));
        }
        Ok(self.state.cost_prices.get(product, company))
    }

    fn resolve_account(
        &self,
        role: StockAccountRole,
        company: CompanyId,
        product: ProductId,
    ) -> Result<Option<AccountId>, HostError> {
        let product = self.product(product)?;
        let template = self.template(product.template)?;
        Ok(self.resolver().resolve(role, company, &product, &template))
    }

    fn account(&self, id: AccountId) -> Result<Account, HostError> {
        self.state
            .accounts
            .get(&id)
            .cloned()
            .ok_or(HostError::AccountNotFound(id))
    }

    fn quantity(
        &self,
        product: ProductId,
        kinds: &[LocationKind],
        as_of: NaiveDate,
    ) -> Result<Decimal, HostError> {
        let view = StockView::new(&self.state.locations, kinds);
        Ok(view.quantity_on_hand(&self.state.stock_moves, product, as_of))
    }

    fn incoming_moves(
        &self,
        product: ProductId,
        kinds: &[LocationKind],
        as_of: NaiveDate,
    ) -> Result<Vec<ValuationMove>, HostError> {
        let view = StockView::new(&self.state.locations, kinds);
        Ok(view.valuation_moves(&self.state.stock_moves, product, as_of))
    }

    fn company_currency(&self, company: CompanyId) -> Result<Currency, HostError> {
        Ok(self
            .state
            .currencies
            .get(&company)
            .cloned()
            .unwrap_or_else(|| self.default_currency.clone()))
    }

    fn accounting_configuration(
        &self,
        company: CompanyId,
    ) -> Result<AccountingConfiguration, HostError> {
        Ok(self
            .state
            .configurations
            .get(&company)
            .cloned()
            .unwrap_or_else(|| self.default_configuration.clone()))
    }

    fn find_period(&self, company: CompanyId, date: NaiveDate) -> Result<Period, HostError> {
        Ok(find_period(&self.state.periods, company, date)?.clone())
    }

    fn messages(&self) -> &MessageCatalog {
        &self.catalog
    }

    fn save_move(&mut self, account_move: Move) -> Result<MoveId, HostError> {
        if account_move.is_posted() {
            return Err(LedgerError::CannotModifyPosted(account_move.id).into());
        }
        let period = self
            .state
            .periods
            .iter()
            .find(|p| p.id == account_move.period && p.company == account_move.company)
            .ok_or(LedgerError::NoPeriod {
                company: account_move.company,
                date: account_move.date,
            })?;
        if !period.contains_date(account_move.date) {
            return Err(LedgerError::DateOutsidePeriod {
                period: period.id,
                date: account_move.date,
            }
            .into());
        }
        let id = account_move.id;
        debug!(move_id = %id, lines = account_move.lines.len(), "move saved");
        self.state.moves.push(account_move);
        Ok(id)
    }

    fn post_move(&mut self, id: MoveId) -> Result<(), HostError> {
        if self.reject_posting {
            return Err(HostError::Backend(format!("posting of move {id} rejected")));
        }
        let account_move = self
            .state
            .moves
            .iter_mut()
            .find(|m| m.id == id)
            .ok_or(HostError::MoveNotFound(id))?;
        let period = self
            .state
            .periods
            .iter()
            .find(|p| p.id == account_move.period)
            .ok_or(HostError::MoveNotFound(id))?;
        if !period.is_open() {
            return Err(LedgerError::PeriodClosed(period.id).into());
        }
        account_move.post()?;
        Ok(())
    }

    fn set_cost_price(
        &mut self,
        product: ProductId,
        company: CompanyId,
        cost_price: Decimal,
    ) -> Result<(), HostError> {
        if !self.state.products.contains_key(&product) {
            return Err(HostError::ProductNotFound(product));
        }
        self.state
            .cost_prices
            .set_multivalue(product, company, cost_price);
        Ok(())
    }

    fn begin(&mut self) -> Result<(), HostError> {
        self.snapshots.push(self.state.clone());
        Ok(())
    }

    fn commit(&mut self) -> Result<(), HostError> {
        self.snapshots.pop().map(|_| ()).ok_or(HostError::NoTransaction)
    }

    fn rollback(&mut self) -> Result<(), HostError> {
        self.state = self.snapshots.pop().ok_or(HostError::NoTransaction)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::account::{AccountKind, Statement, StockAccounts};
    use crate::product::{CostPriceError, CostPriceMethod};
    use continental_shared::types::UserId;
    use rust_decimal_macros::dec;

    fn date(m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, m, d).unwrap()
    }

    fn stock_account(company: CompanyId, code: &str, statement: Statement) -> Account {
        Account {
            id: AccountId::new(),
            company: Some(company),
            code: code.to_string(),
            name: format!("Stock {code}"),
            kind: AccountKind {
                stock: true,
                statement,
            },
        }
    }

    fn host_with_product() -> (InMemoryHost, Context, ProductId) {
        let mut host = InMemoryHost::new();
        let ctx = Context::new(UserId::new(), CompanyId::new(), date(10, 19));
        let template = host.add_template(Template::new("Widget", CostPriceMethod::Fixed));
        let product = host.add_product(Product::new(template, "W-1")).unwrap();
        (host, ctx, product)
    }

    #[test]
    fn test_rollback_restores_state() {
        let (mut host, ctx, product) = host_with_product();
        host.set_cost_price(product, ctx.company, dec!(10)).unwrap();

        host.begin().unwrap();
        host.set_cost_price(product, ctx.company, dec!(12)).unwrap();
        assert_eq!(host.cost_price(product, ctx.company).unwrap(), dec!(12));
        host.rollback().unwrap();

        assert_eq!(host.cost_price(product, ctx.company).unwrap(), dec!(10));
        assert_eq!(host.transaction_depth(), 0);
    }

    #[test]
    fn test_commit_keeps_state() {
        let (mut host, ctx, product) = host_with_product();
        host.begin().unwrap();
        host.set_cost_price(product, ctx.company, dec!(12)).unwrap();
        host.commit().unwrap();
        assert_eq!(host.cost_price(product, ctx.company).unwrap(), dec!(12));
    }

    #[test]
    fn test_commit_without_begin() {
        let mut host = InMemoryHost::new();
        assert!(matches!(host.commit(), Err(HostError::NoTransaction)));
        assert!(matches!(host.rollback(), Err(HostError::NoTransaction)));
    }

    #[test]
    fn test_cost_price_is_company_scoped() {
        let (mut host, ctx, product) = host_with_product();
        let other = CompanyId::new();
        host.set_cost_price(product, ctx.company, dec!(10)).unwrap();
        assert_eq!(host.cost_price(product, other).unwrap(), Decimal::ZERO);
    }

    #[test]
    fn test_write_cost_price_refused_with_moves() {
        let (mut host, ctx, product) = host_with_product();
        host.write_cost_price(&ctx, product, dec!(5)).unwrap();

        let supplier = host.add_location(Location::new("Supplier", LocationKind::Supplier));
        let storage = host.add_location(Location::new("Storage", LocationKind::Storage));
        host.add_stock_move(StockMove::done(product, supplier, storage, dec!(3), dec!(5), date(10, 1)));

        let err = host.write_cost_price(&ctx, product, dec!(6)).unwrap_err();
        assert!(matches!(err, HostError::CostPrice(CostPriceError::HasMoves { .. })));
        assert_eq!(host.cost_price(product, ctx.company).unwrap(), dec!(5));
    }

    #[test]
    fn test_variants_in_creation_order() {
        let mut host = InMemoryHost::new();
        let template = host.add_template(Template::new("Widget", CostPriceMethod::Fixed));
        let first = host.add_product(Product::new(template, "W-1")).unwrap();
        let second = host.add_product(Product::new(template, "W-2")).unwrap();
        let ids: Vec<_> = host.variants(template).unwrap().into_iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![first, second]);
    }

    #[test]
    fn test_add_product_unknown_template() {
        let mut host = InMemoryHost::new();
        let result = host.add_product(Product::new(TemplateId::new(), "X"));
        assert!(matches!(result, Err(HostError::TemplateNotFound(_))));
    }

    #[test]
    fn test_category_account_validated() {
        let mut host = InMemoryHost::new();
        let company = CompanyId::new();
        let category = host.add_category(Category::accounting("Goods"));
        let income = host.add_account(stock_account(company, "6", Statement::Income));

        let result = host.add_category_account(CategoryAccount {
            category,
            company,
            accounts: StockAccounts::new().with(StockAccountRole::Stock, income),
        });
        assert_eq!(result.unwrap_err().error_code(), "WRONG_STATEMENT");
    }

    #[test]
    fn test_resolve_through_category() {
        let (mut host, ctx, product) = host_with_product();
        let category = host.add_category(Category::accounting("Goods"));
        let stock = host.add_account(stock_account(ctx.company, "3", Statement::Balance));
        host.add_category_account(CategoryAccount {
            category,
            company: ctx.company,
            accounts: StockAccounts::new().with(StockAccountRole::Stock, stock),
        })
        .unwrap();
        let template_id = host.product(product).unwrap().template;
        host.state
            .templates
            .get_mut(&template_id)
            .unwrap()
            .account_category = Some(category);

        let resolved = host
            .resolve_account(StockAccountRole::Stock, ctx.company, product)
            .unwrap();
        assert_eq!(resolved, Some(stock));
        let other = host
            .resolve_account(StockAccountRole::Stock, CompanyId::new(), product)
            .unwrap();
        assert_eq!(other, None);
    }

    #[test]
    fn test_save_move_outside_period() {
        let mut host = InMemoryHost::new();
        let company = CompanyId::new();
        let period = Period::open(company, "2026-10", date(10, 1), date(10, 31));
        let period_id = period.id;
        host.add_period(period);
        let journal = host.add_journal(Journal::new("STO", "Stock"));

        let account_move = Move::draft(company, journal, period_id, date(11, 2));
        assert!(matches!(
            host.save_move(account_move),
            Err(HostError::Ledger(LedgerError::DateOutsidePeriod { .. }))
        ));
    }

    #[test]
    fn test_defaults_follow_config() {
        let mut config = AppConfig::default();
        config.accounting.currency_code = "EUR".to_string();
        config.accounting.stock_journal = Some(JournalId::new());
        let host = InMemoryHost::from_config(&config);
        let company = CompanyId::new();
        assert_eq!(host.company_currency(company).unwrap().code, "EUR");
        assert_eq!(
            host.accounting_configuration(company).unwrap().stock_journal,
            config.accounting.stock_journal
        );
    }
}
