//! Boundary to the system owning products, stock and the ledger.
//!
//! Stock valuation reads and writes through the [`Host`] trait. Callers
//! embed it in their own persistence; [`InMemoryHost`] keeps everything in
//! memory for tests and small tools.

pub mod context;
pub mod error;
pub mod memory;

use chrono::NaiveDate;
use continental_shared::types::{
    AccountId, CompanyId, Currency, JournalId, MoveId, ProductId, TemplateId,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub use context::Context;
pub use error::HostError;
pub use memory::InMemoryHost;

use crate::account::{Account, StockAccountRole};
use crate::i18n::MessageCatalog;
use crate::ledger::{Move, Period};
use crate::product::{Product, Template};
use crate::stock::{LocationKind, ValuationMove};

/// Accounting configuration of a company.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountingConfiguration {
    /// Journal receiving stock valuation moves.
    pub stock_journal: Option<JournalId>,
    /// Default counterpart of cost price adjustments.
    pub cost_price_counterpart_account: Option<AccountId>,
}

/// Records and services provided by the hosting system.
///
/// Writes happen between [`Host::begin`] and [`Host::commit`]; a
/// [`Host::rollback`] discards every write since the matching `begin`.
pub trait Host {
    /// Loads a product variant.
    fn product(&self, id: ProductId) -> Result<Product, HostError>;

    /// Loads a product template.
    fn template(&self, id: TemplateId) -> Result<Template, HostError>;

    /// Variants of a template, in creation order.
    fn variants(&self, template: TemplateId) -> Result<Vec<Product>, HostError>;

    /// Cost price of a product in a company.
    fn cost_price(&self, product: ProductId, company: CompanyId) -> Result<Decimal, HostError>;

    /// Account playing `role` for `product` in `company`, if any.
    fn resolve_account(
        &self,
        role: StockAccountRole,
        company: CompanyId,
        product: ProductId,
    ) -> Result<Option<AccountId>, HostError>;

    /// Loads an account.
    fn account(&self, id: AccountId) -> Result<Account, HostError>;

    /// Quantity of `product` in locations of `kinds` at the end of `as_of`.
    fn quantity(
        &self,
        product: ProductId,
        kinds: &[LocationKind],
        as_of: NaiveDate,
    ) -> Result<Decimal, HostError>;

    /// Moves of `product` in and out of locations of `kinds` up to `as_of`,
    /// oldest first.
    fn incoming_moves(
        &self,
        product: ProductId,
        kinds: &[LocationKind],
        as_of: NaiveDate,
    ) -> Result<Vec<ValuationMove>, HostError>;

    /// Currency of a company.
    fn company_currency(&self, company: CompanyId) -> Result<Currency, HostError>;

    /// Accounting configuration of a company.
    fn accounting_configuration(
        &self,
        company: CompanyId,
    ) -> Result<AccountingConfiguration, HostError>;

    /// Open period of `company` containing `date`.
    fn find_period(&self, company: CompanyId, date: NaiveDate) -> Result<Period, HostError>;

    /// Localized messages.
    fn messages(&self) -> &MessageCatalog;

    /// Stores a draft move.
    fn save_move(&mut self, account_move: Move) -> Result<MoveId, HostError>;

    /// Posts a saved move.
    fn post_move(&mut self, id: MoveId) -> Result<(), HostError>;

    /// Writes the company-scoped cost price of a product.
    fn set_cost_price(
        &mut self,
        product: ProductId,
        company: CompanyId,
        cost_price: Decimal,
    ) -> Result<(), HostError>;

    /// Starts a transaction.
    fn begin(&mut self) -> Result<(), HostError>;

    /// Makes the writes of the current transaction permanent.
    fn commit(&mut self) -> Result<(), HostError>;

    /// Discards the writes of the current transaction.
    fn rollback(&mut self) -> Result<(), HostError>;
}
