//! Stock accounts for continental inventory valuation.
//!
//! This module implements:
//! - Chart of accounts entries as seen by stock valuation
//! - The five stock account roles
//! - Per-company category account values and their constraints
//! - Account resolution through product, template and category chain

pub mod category;
pub mod error;
pub mod resolver;
pub mod role;
pub mod types;

#[cfg(test)]
mod resolver_props;

pub use category::{Category, CategoryAccount, CategoryAccounts, StockAccounts};
pub use error::AccountError;
pub use resolver::{AccountOverrides, AccountOwner, AccountResolver};
pub use role::StockAccountRole;
pub use types::{Account, AccountKind, Statement};
