//! Property-based tests for cost price recomputation.

use chrono::NaiveDate;
use proptest::prelude::*;
use rust_decimal::Decimal;

use super::cost_price::recompute_cost_price;
use super::types::CostPriceMethod;
use crate::stock::ValuationMove;

/// Strategy to generate positive quantities (1 to 1,000).
fn quantity() -> impl Strategy<Value = Decimal> {
    (1i64..1_000i64).prop_map(Decimal::from)
}

/// Strategy to generate unit prices (0.01 to 10,000.00).
fn unit_price() -> impl Strategy<Value = Decimal> {
    (1i64..1_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy to generate priced receipts.
fn receipts() -> impl Strategy<Value = Vec<ValuationMove>> {
    prop::collection::vec((quantity(), unit_price()), 1..10).prop_map(|lots| {
        lots.into_iter()
            .map(|(quantity, price)| ValuationMove {
                date: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
                quantity,
                unit_price: Some(price),
            })
            .collect()
    })
}

fn price_bounds(moves: &[ValuationMove]) -> (Decimal, Decimal) {
    let prices: Vec<Decimal> = moves.iter().filter_map(|m| m.unit_price).collect();
    let min = prices.iter().copied().min().unwrap_or(Decimal::ZERO);
    let max = prices.iter().copied().max().unwrap_or(Decimal::ZERO);
    (min, max)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// The fixed method never changes the price.
    #[test]
    fn prop_fixed_is_identity(current in unit_price(), moves in receipts()) {
        prop_assert_eq!(
            recompute_cost_price(CostPriceMethod::Fixed, current, &moves),
            current
        );
    }

    /// Averaging receipts stays within the cheapest and dearest unit price.
    #[test]
    fn prop_average_within_bounds(current in unit_price(), moves in receipts()) {
        let (min, max) = price_bounds(&moves);
        let result = recompute_cost_price(CostPriceMethod::Average, current, &moves);
        prop_assert!(result >= min && result <= max, "{} not in [{}, {}]", result, min, max);
    }

    /// FIFO values what is left with received prices, or keeps the current
    /// price once everything went out.
    #[test]
    fn prop_fifo_within_bounds(
        current in unit_price(),
        mut moves in receipts(),
        shipped in 0i64..5_000i64,
    ) {
        let (min, max) = price_bounds(&moves);
        moves.push(ValuationMove {
            date: NaiveDate::from_ymd_opt(2026, 1, 2).unwrap(),
            quantity: -Decimal::from(shipped),
            unit_price: None,
        });

        let received: Decimal = moves.iter().filter(|m| m.quantity > Decimal::ZERO).map(|m| m.quantity).sum();
        let result = recompute_cost_price(CostPriceMethod::Fifo, current, &moves);
        if Decimal::from(shipped) >= received {
            prop_assert_eq!(result, current);
        } else {
            prop_assert!(result >= min && result <= max, "{} not in [{}, {}]", result, min, max);
        }
    }
}
