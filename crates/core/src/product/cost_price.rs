//! Cost price recomputation and company-scoped cost price values.

use std::collections::{HashMap, VecDeque};

use continental_shared::types::{CompanyId, PRICE_DIGITS, ProductId};
use rust_decimal::Decimal;

use super::error::CostPriceError;
use super::types::CostPriceMethod;
use crate::i18n::{MessageCatalog, MessageKey};
use crate::stock::ValuationMove;

/// Recomputation handler: current cost price and valuation moves in, new
/// cost price out.
type Recompute = fn(Decimal, &[ValuationMove]) -> Decimal;

/// One handler per cost price method.
const RECOMPUTE: [(CostPriceMethod, Recompute); 3] = [
    (CostPriceMethod::Fixed, recompute_fixed),
    (CostPriceMethod::Average, recompute_average),
    (CostPriceMethod::Fifo, recompute_fifo),
];

/// Recomputes a cost price with the handler registered for `method`.
///
/// `moves` must be sorted oldest first. The result is rounded to price
/// digits.
#[must_use]
pub fn recompute_cost_price(
    method: CostPriceMethod,
    current: Decimal,
    moves: &[ValuationMove],
) -> Decimal {
    let handler = RECOMPUTE
        .iter()
        .find(|(candidate, _)| *candidate == method)
        .map_or(recompute_fixed as Recompute, |(_, handler)| *handler);
    handler(current, moves).round_dp(PRICE_DIGITS)
}

fn recompute_fixed(current: Decimal, _moves: &[ValuationMove]) -> Decimal {
    current
}

fn recompute_average(current: Decimal, moves: &[ValuationMove]) -> Decimal {
    let mut cost_price = current;
    let mut quantity = Decimal::ZERO;

    for valuation in moves {
        if let Some(unit_price) = valuation.unit_price {
            let on_hand = quantity.max(Decimal::ZERO);
            let total = on_hand + valuation.quantity;
            if total > Decimal::ZERO {
                cost_price = (cost_price * on_hand + unit_price * valuation.quantity) / total;
            }
        }
        quantity += valuation.quantity;
    }
    cost_price
}

fn recompute_fifo(current: Decimal, moves: &[ValuationMove]) -> Decimal {
    let mut lots: VecDeque<(Decimal, Decimal)> = VecDeque::new();

    for valuation in moves {
        if valuation.quantity > Decimal::ZERO {
            lots.push_back((valuation.quantity, valuation.unit_price.unwrap_or(current)));
            continue;
        }
        let mut to_consume = -valuation.quantity;
        while to_consume > Decimal::ZERO {
            let Some(front) = lots.front_mut() else {
                break;
            };
            if front.0 > to_consume {
                front.0 -= to_consume;
                to_consume = Decimal::ZERO;
            } else {
                to_consume -= front.0;
                lots.pop_front();
            }
        }
    }

    let quantity: Decimal = lots.iter().map(|(qty, _)| *qty).sum();
    if quantity <= Decimal::ZERO {
        return current;
    }
    let value: Decimal = lots.iter().map(|(qty, price)| qty * price).sum();
    value / quantity
}

/// Refuses a direct cost price change on a product that already moved.
///
/// Cost prices of moved products change through the modify cost price
/// wizard only, so that the stock valuation follows.
pub fn check_no_move(
    product: ProductId,
    has_moves: bool,
    catalog: &MessageCatalog,
    language: &str,
) -> Result<(), CostPriceError> {
    if has_moves {
        return Err(CostPriceError::HasMoves {
            product,
            message: catalog.gettext(language, MessageKey::ProductChangeCostPrice, &[]),
        });
    }
    Ok(())
}

/// Cost prices per product and company.
#[derive(Debug, Clone, Default)]
pub struct CostPrices {
    values: HashMap<(ProductId, CompanyId), Decimal>,
}

impl CostPrices {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Cost price of `product` in `company`, zero when never set.
    #[must_use]
    pub fn get(&self, product: ProductId, company: CompanyId) -> Decimal {
        self.values
            .get(&(product, company))
            .copied()
            .unwrap_or(Decimal::ZERO)
    }

    /// Writes the company-scoped value, returning the previous one.
    pub fn set_multivalue(
        &mut self,
        product: ProductId,
        company: CompanyId,
        cost_price: Decimal,
    ) -> Option<Decimal> {
        self.values.insert((product, company), cost_price)
    }
}
