//! Wizard states, events and the transition table.
//!
//! The wizard moves through:
//! - AskPrice → End (cancel) or ShouldShowMove (ok)
//! - ShouldShowMove → ModifyPrice (no stock) or ShowMove (stock on hand)
//! - ShowMove → End (cancel) or CreateMove (ok)
//! - CreateMove → ModifyPrice
//! - ModifyPrice → End

use std::fmt;

use continental_shared::types::{ProductId, TemplateId};
use serde::{Deserialize, Serialize};

/// Whether a state waits for the operator, runs by itself, or ends the
/// wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateKind {
    /// Shows a form and waits for a button.
    Interactive,
    /// Runs immediately and picks the next state.
    Transition,
    /// Ends the wizard.
    Terminal,
}

/// A state of the modify cost price wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardState {
    /// Asks for the new cost price.
    AskPrice,
    /// Decides whether a stock valuation move is needed.
    ShouldShowMove,
    /// Shows the stock valuation move for confirmation.
    ShowMove,
    /// Creates and posts the stock valuation move.
    CreateMove,
    /// Writes the new cost price.
    ModifyPrice,
    /// Done.
    End,
}

impl WizardState {
    /// Returns the string representation of the state.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AskPrice => "ask_price",
            Self::ShouldShowMove => "should_show_move",
            Self::ShowMove => "show_move",
            Self::CreateMove => "create_move",
            Self::ModifyPrice => "modify_price",
            Self::End => "end",
        }
    }

    /// Returns the kind of the state.
    #[must_use]
    pub const fn kind(self) -> StateKind {
        match self {
            Self::AskPrice | Self::ShowMove => StateKind::Interactive,
            Self::ShouldShowMove | Self::CreateMove | Self::ModifyPrice => StateKind::Transition,
            Self::End => StateKind::Terminal,
        }
    }

    /// Returns true if the state waits for a button.
    #[must_use]
    pub const fn is_interactive(self) -> bool {
        matches!(self.kind(), StateKind::Interactive)
    }
}

impl fmt::Display for WizardState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Buttons of the interactive states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Button {
    /// Leaves the wizard without changes.
    Cancel,
    /// Goes on.
    Ok,
}

impl fmt::Display for Button {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cancel => write!(f, "cancel"),
            Self::Ok => write!(f, "ok"),
        }
    }
}

/// What moves the wizard from one state to the next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Event {
    /// The operator pressed a button.
    Pressed(Button),
    /// No stock on hand.
    NoStock,
    /// Stock on hand.
    HasStock,
    /// A transition state completed.
    Done,
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pressed(button) => write!(f, "{button}"),
            Self::NoStock => write!(f, "no stock"),
            Self::HasStock => write!(f, "stock on hand"),
            Self::Done => write!(f, "done"),
        }
    }
}

/// Every allowed move of the wizard.
pub const TRANSITIONS: [(WizardState, Event, WizardState); 8] = [
    (WizardState::AskPrice, Event::Pressed(Button::Cancel), WizardState::End),
    (WizardState::AskPrice, Event::Pressed(Button::Ok), WizardState::ShouldShowMove),
    (WizardState::ShouldShowMove, Event::NoStock, WizardState::ModifyPrice),
    (WizardState::ShouldShowMove, Event::HasStock, WizardState::ShowMove),
    (WizardState::ShowMove, Event::Pressed(Button::Cancel), WizardState::End),
    (WizardState::ShowMove, Event::Pressed(Button::Ok), WizardState::CreateMove),
    (WizardState::CreateMove, Event::Done, WizardState::ModifyPrice),
    (WizardState::ModifyPrice, Event::Done, WizardState::End),
];

/// Looks up the state following `from` on `event`.
#[must_use]
pub fn next_state(from: WizardState, event: Event) -> Option<WizardState> {
    TRANSITIONS
        .iter()
        .find(|(state, on, _)| *state == from && *on == event)
        .map(|(_, _, to)| *to)
}

/// Record the wizard was started on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "model", content = "id", rename_all = "snake_case")]
pub enum Target {
    /// A product variant.
    Product(ProductId),
    /// A product template; the wizard works on its first variant.
    Template(TemplateId),
}
