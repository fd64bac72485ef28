//! Stock moves.

use chrono::NaiveDate;
use continental_shared::types::{LocationId, ProductId, StockMoveId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// State of a stock move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StockMoveState {
    /// Planned, not yet effective.
    Draft,
    /// Effective; counts in quantities.
    Done,
    /// Cancelled.
    Cancelled,
}

/// A quantity of product moved between two locations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockMove {
    /// Unique identifier.
    pub id: StockMoveId,
    /// The product moved.
    pub product: ProductId,
    /// Source location.
    pub from: LocationId,
    /// Destination location.
    pub to: LocationId,
    /// Quantity in the product's default unit (positive).
    pub quantity: Decimal,
    /// Unit price in company currency.
    pub unit_price: Decimal,
    /// Date the move became effective.
    pub effective_date: NaiveDate,
    /// Current state.
    pub state: StockMoveState,
}

impl StockMove {
    /// Creates a done move.
    #[must_use]
    pub fn done(
        product: ProductId,
        from: LocationId,
        to: LocationId,
        quantity: Decimal,
        unit_price: Decimal,
        effective_date: NaiveDate,
    ) -> Self {
        Self {
            id: StockMoveId::new(),
            product,
            from,
            to,
            quantity,
            unit_price,
            effective_date,
            state: StockMoveState::Done,
        }
    }

    /// Returns true if the move counts in quantities at `as_of`.
    #[must_use]
    pub fn is_effective(&self, as_of: NaiveDate) -> bool {
        self.state == StockMoveState::Done && self.effective_date <= as_of
    }
}
