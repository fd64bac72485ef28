//! Forms shown by the interactive wizard states.

use continental_shared::types::{AccountId, JournalId, ProductId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::ModifyCostPriceError;
use super::types::Target;
use crate::account::Account;
use crate::host::Context;
use crate::i18n::{MessageCatalog, MessageKey};

/// Form of the `ask_price` state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AskPriceForm {
    /// Record the wizard was started on.
    pub target: Target,
    /// Variant whose cost price changes.
    pub product: ProductId,
    /// Cost price before the change.
    pub current_cost_price: Decimal,
    /// Proposed cost price, editable.
    pub cost_price: Decimal,
}

/// Form of the `show_move` state.
///
/// The computed fields are read-only: only the journal, the counterpart and
/// the description can be edited.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShowMoveForm {
    price_difference: Decimal,
    amount: Decimal,
    currency_digits: u32,
    stock_account: AccountId,
    /// Journal of the move, required.
    pub journal: Option<JournalId>,
    /// Account balancing the stock account, required.
    pub counterpart: Option<AccountId>,
    /// Move description.
    pub description: Option<String>,
}

impl ShowMoveForm {
    /// Creates a form with blank journal, counterpart and description.
    #[must_use]
    pub fn new(
        price_difference: Decimal,
        amount: Decimal,
        currency_digits: u32,
        stock_account: AccountId,
    ) -> Self {
        Self {
            price_difference,
            amount,
            currency_digits,
            stock_account,
            journal: None,
            counterpart: None,
            description: None,
        }
    }

    /// Proposed minus current cost price.
    #[must_use]
    pub fn price_difference(&self) -> Decimal {
        self.price_difference
    }

    /// Valuation change in company currency.
    #[must_use]
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// Display digits of the company currency.
    #[must_use]
    pub fn currency_digits(&self) -> u32 {
        self.currency_digits
    }

    /// The product's stock account.
    #[must_use]
    pub fn stock_account(&self) -> AccountId {
        self.stock_account
    }

    /// Whether `other` carries the same computed values.
    #[must_use]
    pub fn same_computation(&self, other: &Self) -> bool {
        self.price_difference == other.price_difference
            && self.amount == other.amount
            && self.stock_account == other.stock_account
    }

    /// Takes the editable fields of `edited`, keeping the computed ones.
    #[must_use]
    pub fn with_edits_of(mut self, edited: &Self) -> Self {
        self.journal = edited.journal;
        self.counterpart = edited.counterpart;
        self.description.clone_from(&edited.description);
        self
    }

    /// Returns the selected journal and counterpart.
    ///
    /// # Errors
    ///
    /// Returns `MissingStockJournal` or `MissingCounterpart` when a required
    /// field is blank.
    pub fn selection(
        &self,
        ctx: &Context,
        messages: &MessageCatalog,
    ) -> Result<(JournalId, AccountId), ModifyCostPriceError> {
        let journal = self
            .journal
            .ok_or_else(|| ModifyCostPriceError::MissingStockJournal {
                company: ctx.company,
                message: messages.gettext(&ctx.language, MessageKey::MissingStockJournal, &[]),
            })?;
        let counterpart = self
            .counterpart
            .ok_or_else(|| ModifyCostPriceError::MissingCounterpart {
                message: messages.gettext(&ctx.language, MessageKey::MissingCounterpart, &[]),
            })?;
        Ok((journal, counterpart))
    }
}

/// Refuses a counterpart equal to the stock account.
pub fn check_same_account(
    stock_account: AccountId,
    counterpart: &Account,
    ctx: &Context,
    messages: &MessageCatalog,
) -> Result<(), ModifyCostPriceError> {
    if counterpart.id == stock_account {
        return Err(ModifyCostPriceError::SameAccount {
            account: counterpart.id,
            message: messages.gettext(
                &ctx.language,
                MessageKey::ModifyCostPriceSameAccount,
                &[("account", &counterpart.rec_name())],
            ),
        });
    }
    Ok(())
}

/// Refuses a counterpart that is not a stock account of the operator's
/// company or of no company.
pub fn check_counterpart_domain(
    counterpart: &Account,
    ctx: &Context,
    messages: &MessageCatalog,
) -> Result<(), ModifyCostPriceError> {
    if counterpart.is_stock() && counterpart.usable_by(ctx.company) {
        return Ok(());
    }
    Err(ModifyCostPriceError::InvalidCounterpart {
        account: counterpart.id,
        message: messages.gettext(
            &ctx.language,
            MessageKey::InvalidCounterpart,
            &[("account", &counterpart.rec_name())],
        ),
    })
}
