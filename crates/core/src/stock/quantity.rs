//! Quantity on hand and valuation moves.

use std::collections::HashMap;

use chrono::NaiveDate;
use continental_shared::types::{LocationId, ProductId};
use rust_decimal::Decimal;

use super::location::{Location, LocationKind};
use super::moves::StockMove;

/// Direction of a move relative to the counted locations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    /// Stock enters the counted locations.
    Incoming,
    /// Stock leaves the counted locations.
    Outgoing,
}

/// A move as seen by cost price recomputation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValuationMove {
    /// Effective date.
    pub date: NaiveDate,
    /// Signed quantity: positive incoming, negative outgoing.
    pub quantity: Decimal,
    /// Unit cost, set for incoming moves from priced origins only.
    pub unit_price: Option<Decimal>,
}

/// Read-only view over stock restricted to some location kinds.
#[derive(Debug, Clone, Copy)]
pub struct StockView<'a> {
    locations: &'a HashMap<LocationId, Location>,
    kinds: &'a [LocationKind],
}

impl<'a> StockView<'a> {
    /// Creates a view counting stock in locations of `kinds`.
    #[must_use]
    pub fn new(locations: &'a HashMap<LocationId, Location>, kinds: &'a [LocationKind]) -> Self {
        Self { locations, kinds }
    }

    fn kind_of(&self, location: LocationId) -> Option<LocationKind> {
        self.locations.get(&location).map(|l| l.kind)
    }

    fn counts(&self, location: LocationId) -> bool {
        self.kind_of(location)
            .is_some_and(|kind| self.kinds.contains(&kind))
    }

    /// Direction of a move, `None` when it stays inside or outside the
    /// counted locations.
    fn direction(&self, stock_move: &StockMove) -> Option<Direction> {
        match (self.counts(stock_move.from), self.counts(stock_move.to)) {
            (false, true) => Some(Direction::Incoming),
            (true, false) => Some(Direction::Outgoing),
            _ => None,
        }
    }

    /// Quantity of `product` in the counted locations at the end of `as_of`.
    #[must_use]
    pub fn quantity_on_hand(
        &self,
        moves: &[StockMove],
        product: ProductId,
        as_of: NaiveDate,
    ) -> Decimal {
        moves
            .iter()
            .filter(|m| m.product == product && m.is_effective(as_of))
            .map(|m| match self.direction(m) {
                Some(Direction::Incoming) => m.quantity,
                Some(Direction::Outgoing) => -m.quantity,
                None => Decimal::ZERO,
            })
            .sum()
    }

    /// Moves of `product` crossing the counted locations up to `as_of`,
    /// oldest first.
    #[must_use]
    pub fn valuation_moves(
        &self,
        moves: &[StockMove],
        product: ProductId,
        as_of: NaiveDate,
    ) -> Vec<ValuationMove> {
        let mut relevant: Vec<&StockMove> = moves
            .iter()
            .filter(|m| m.product == product && m.is_effective(as_of))
            .collect();
        relevant.sort_by_key(|m| m.effective_date);

        relevant
            .into_iter()
            .filter_map(|m| {
                let direction = self.direction(m)?;
                Some(match direction {
                    Direction::Incoming => ValuationMove {
                        date: m.effective_date,
                        quantity: m.quantity,
                        unit_price: self
                            .kind_of(m.from)
                            .filter(LocationKind::is_priced_origin)
                            .map(|_| m.unit_price),
                    },
                    Direction::Outgoing => ValuationMove {
                        date: m.effective_date,
                        quantity: -m.quantity,
                        unit_price: None,
                    },
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stock::moves::StockMoveState;
    use rust_decimal_macros::dec;

    struct Site {
        locations: HashMap<LocationId, Location>,
        storage: LocationId,
        shelf: LocationId,
        supplier: LocationId,
        customer: LocationId,
        lost_found: LocationId,
    }

    fn site() -> Site {
        let storage = Location::new("Storage", LocationKind::Storage);
        let shelf = Location::new("Shelf", LocationKind::Storage);
        let supplier = Location::new("Supplier", LocationKind::Supplier);
        let customer = Location::new("Customer", LocationKind::Customer);
        let lost_found = Location::new("Lost and Found", LocationKind::LostFound);
        Site {
            storage: storage.id,
            shelf: shelf.id,
            supplier: supplier.id,
            customer: customer.id,
            lost_found: lost_found.id,
            locations: [storage, shelf, supplier, customer, lost_found]
                .into_iter()
                .map(|l| (l.id, l))
                .collect(),
        }
    }

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, d).unwrap()
    }

    #[test]
    fn test_quantity_on_hand() {
        let site = site();
        let product = ProductId::new();
        let moves = vec![
            StockMove::done(product, site.supplier, site.storage, dec!(10), dec!(5), day(1)),
            StockMove::done(product, site.storage, site.shelf, dec!(4), dec!(5), day(2)),
            StockMove::done(product, site.shelf, site.customer, dec!(3), dec!(5), day(3)),
            StockMove::done(product, site.storage, site.lost_found, dec!(1), dec!(5), day(4)),
        ];
        let kinds = [LocationKind::Storage];
        let view = StockView::new(&site.locations, &kinds);

        assert_eq!(view.quantity_on_hand(&moves, product, day(1)), dec!(10));
        assert_eq!(view.quantity_on_hand(&moves, product, day(2)), dec!(10));
        assert_eq!(view.quantity_on_hand(&moves, product, day(3)), dec!(7));
        assert_eq!(view.quantity_on_hand(&moves, product, day(31)), dec!(6));
    }

    #[test]
    fn test_quantity_ignores_other_products_and_pending_moves() {
        let site = site();
        let product = ProductId::new();
        let mut draft =
            StockMove::done(product, site.supplier, site.storage, dec!(7), dec!(1), day(1));
        draft.state = StockMoveState::Draft;
        let moves = vec![
            draft,
            StockMove::done(ProductId::new(), site.supplier, site.storage, dec!(3), dec!(1), day(1)),
            StockMove::done(product, site.supplier, site.storage, dec!(2), dec!(1), day(20)),
        ];
        let kinds = [LocationKind::Storage];
        let view = StockView::new(&site.locations, &kinds);

        assert_eq!(view.quantity_on_hand(&moves, product, day(19)), Decimal::ZERO);
        assert_eq!(view.quantity_on_hand(&moves, product, day(20)), dec!(2));
    }

    #[test]
    fn test_valuation_moves_prices_only_priced_origins() {
        let site = site();
        let product = ProductId::new();
        let moves = vec![
            StockMove::done(product, site.lost_found, site.storage, dec!(1), dec!(9), day(3)),
            StockMove::done(product, site.supplier, site.storage, dec!(10), dec!(5), day(1)),
            StockMove::done(product, site.storage, site.customer, dec!(4), dec!(8), day(2)),
        ];
        let kinds = [LocationKind::Storage];
        let view = StockView::new(&site.locations, &kinds);

        let valuation = view.valuation_moves(&moves, product, day(31));
        assert_eq!(
            valuation,
            vec![
                ValuationMove {
                    date: day(1),
                    quantity: dec!(10),
                    unit_price: Some(dec!(5)),
                },
                ValuationMove {
                    date: day(2),
                    quantity: dec!(-4),
                    unit_price: None,
                },
                ValuationMove {
                    date: day(3),
                    quantity: dec!(1),
                    unit_price: None,
                },
            ]
        );
    }
}
