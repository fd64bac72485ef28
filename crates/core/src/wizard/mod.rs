//! Modify cost price wizard.
//!
//! This module implements:
//! - The wizard states and their transition table
//! - The `ask_price` and `show_move` forms and their checks
//! - The stepper creating the stock revaluation move and writing the new
//!   cost price

pub mod error;
pub mod forms;
pub mod service;
pub mod types;

#[cfg(test)]
mod service_props;

pub use error::ModifyCostPriceError;
pub use forms::{AskPriceForm, ShowMoveForm};
pub use service::ModifyCostPrice;
pub use types::{Button, Event, StateKind, TRANSITIONS, Target, WizardState, next_state};
