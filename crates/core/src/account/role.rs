//! The five stock account roles.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::types::Statement;

/// Role a stock account plays in continental valuation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockAccountRole {
    /// Stock asset account (balance sheet).
    Stock,
    /// Counterpart for stock received from suppliers.
    StockSupplier,
    /// Counterpart for stock shipped to customers.
    StockCustomer,
    /// Counterpart for stock consumed or produced by production.
    StockProduction,
    /// Counterpart for inventory gains and losses.
    StockLostFound,
}

impl StockAccountRole {
    /// All roles, in table order.
    pub const ALL: [Self; 5] = [
        Self::Stock,
        Self::StockSupplier,
        Self::StockCustomer,
        Self::StockProduction,
        Self::StockLostFound,
    ];

    /// Position of the role in a [`super::StockAccounts`] table.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Stock => 0,
            Self::StockSupplier => 1,
            Self::StockCustomer => 2,
            Self::StockProduction => 3,
            Self::StockLostFound => 4,
        }
    }

    /// Field name of the role on categories and products.
    #[must_use]
    pub const fn field_name(self) -> &'static str {
        match self {
            Self::Stock => "account_stock",
            Self::StockSupplier => "account_stock_supplier",
            Self::StockCustomer => "account_stock_customer",
            Self::StockProduction => "account_stock_production",
            Self::StockLostFound => "account_stock_lost_found",
        }
    }

    /// Human readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Stock => "Account Stock",
            Self::StockSupplier => "Account Stock Supplier",
            Self::StockCustomer => "Account Stock Customer",
            Self::StockProduction => "Account Stock Production",
            Self::StockLostFound => "Account Stock Lost and Found",
        }
    }

    /// Statement an account must report on to fill this role.
    ///
    /// The stock asset lives on the balance sheet; every counterpart role
    /// books to the income statement.
    #[must_use]
    pub const fn required_statement(self) -> Statement {
        match self {
            Self::Stock => Statement::Balance,
            _ => Statement::Income,
        }
    }

    /// Parses a role from its field name.
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|role| role.field_name() == s)
    }
}

impl fmt::Display for StockAccountRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.field_name())
    }
}
