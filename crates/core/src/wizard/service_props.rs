//! Property-based tests for the modify cost price wizard.

use continental_shared::types::{AccountId, Currency};
use proptest::prelude::*;
use rust_decimal::Decimal;

use super::service::ModifyCostPrice;
use super::types::{Button, Event, StateKind, WizardState, next_state};
use crate::ledger::validate_lines;

/// Strategy to generate signed quantities (-10,000 to 10,000, three decimals).
fn quantity() -> impl Strategy<Value = Decimal> {
    (-10_000_000i64..10_000_000i64).prop_map(|milli| Decimal::new(milli, 3))
}

/// Strategy to generate signed price differences with four decimals.
fn price_difference() -> impl Strategy<Value = Decimal> {
    (-10_000_000i64..10_000_000i64).prop_map(|v| Decimal::new(v, 4))
}

fn arb_state() -> impl Strategy<Value = WizardState> {
    prop_oneof![
        Just(WizardState::AskPrice),
        Just(WizardState::ShouldShowMove),
        Just(WizardState::ShowMove),
        Just(WizardState::CreateMove),
        Just(WizardState::ModifyPrice),
        Just(WizardState::End),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// The two lines always balance and mirror each other.
    #[test]
    fn prop_move_lines_balance(quantity in quantity(), difference in price_difference()) {
        let amount = Currency::new("USD", 2).round(quantity * difference);
        let lines = ModifyCostPrice::get_move_lines(AccountId::new(), AccountId::new(), amount);

        prop_assert_eq!(lines.len(), 2);
        prop_assert!(validate_lines(&lines).is_ok());
        prop_assert_eq!(lines[0].debit, lines[1].credit);
        prop_assert_eq!(lines[0].credit, lines[1].debit);
        prop_assert_eq!(lines[0].signed_amount(), amount);
    }

    /// The stock account is debited exactly when the price goes up on
    /// positive stock.
    #[test]
    fn prop_stock_side_follows_sign(quantity in quantity(), difference in price_difference()) {
        let amount = Currency::new("USD", 2).round(quantity * difference);
        let lines = ModifyCostPrice::get_move_lines(AccountId::new(), AccountId::new(), amount);
        prop_assert_eq!(lines[0].debit > Decimal::ZERO, amount > Decimal::ZERO);
        prop_assert_eq!(lines[0].credit > Decimal::ZERO, amount < Decimal::ZERO);
    }

    /// Buttons are only wired on interactive states.
    #[test]
    fn prop_buttons_only_on_interactive_states(state in arb_state(), ok in any::<bool>()) {
        let button = if ok { Button::Ok } else { Button::Cancel };
        let next = next_state(state, Event::Pressed(button));
        prop_assert_eq!(next.is_some(), state.kind() == StateKind::Interactive);
    }

    /// Every state reaches the end, cancelling at interactive states.
    #[test]
    fn prop_transitions_reach_end(state in arb_state(), has_stock in any::<bool>()) {
        let mut current = state;
        for _ in 0..10 {
            current = match current.kind() {
                StateKind::Terminal => break,
                StateKind::Interactive => {
                    next_state(current, Event::Pressed(Button::Cancel)).unwrap_or(current)
                }
                StateKind::Transition => {
                    let event = if current == WizardState::ShouldShowMove {
                        if has_stock { Event::HasStock } else { Event::NoStock }
                    } else {
                        Event::Done
                    };
                    next_state(current, event).unwrap_or(current)
                }
            };
        }
        prop_assert_eq!(current, WizardState::End);
    }
}
