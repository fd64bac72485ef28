//! Modify cost price wizard.
//!
//! Changes the cost price of a product. When the product has stock on
//! hand, a two-line move revalues that stock before the new price is
//! written.
//!
//! The surrounding interactive layer shows the form of the current state,
//! lets the operator edit it, then calls [`ModifyCostPrice::press`]. Each
//! press runs the following transition states in one host transaction, up
//! to the next interactive state or the end. A failing step rolls the
//! transaction back and leaves the wizard on the state the button was
//! pressed in.

use continental_shared::types::{AccountId, JournalId, MoveId};
use rust_decimal::Decimal;
use tracing::{debug, error, info, warn};

use super::error::ModifyCostPriceError;
use super::forms::{AskPriceForm, ShowMoveForm, check_counterpart_domain, check_same_account};
use super::types::{Button, Event, StateKind, Target, WizardState, next_state};
use crate::account::StockAccountRole;
use crate::host::{Context, Host, HostError};
use crate::i18n::MessageKey;
use crate::ledger::{LedgerError, Move, MoveLine, MoveOrigin};
use crate::product::{Product, recompute_cost_price};

/// A running modify cost price wizard.
#[derive(Debug, Clone)]
pub struct ModifyCostPrice {
    state: WizardState,
    ask_price: AskPriceForm,
    show_move: Option<ShowMoveForm>,
    quantity: Decimal,
    created_move: Option<MoveId>,
}

impl ModifyCostPrice {
    /// Starts the wizard on a product or template, in the `ask_price` state.
    pub fn start<H: Host>(
        host: &H,
        ctx: &Context,
        target: Target,
    ) -> Result<Self, ModifyCostPriceError> {
        let product = Self::get_product(host, target)?;
        let ask_price = Self::default_ask_price(host, ctx, target, &product)?;
        info!(
            product = %product.id,
            company = %ctx.company,
            user = %ctx.user,
            current = %ask_price.current_cost_price,
            proposed = %ask_price.cost_price,
            "modify cost price started"
        );
        Ok(Self {
            state: WizardState::AskPrice,
            ask_price,
            show_move: None,
            quantity: Decimal::ZERO,
            created_move: None,
        })
    }

    // ========== Accessors ==========

    /// Current state.
    #[must_use]
    pub fn state(&self) -> WizardState {
        self.state
    }

    /// The `ask_price` form.
    #[must_use]
    pub fn ask_price(&self) -> &AskPriceForm {
        &self.ask_price
    }

    /// The `ask_price` form, editable while it is shown.
    pub fn ask_price_mut(&mut self) -> Option<&mut AskPriceForm> {
        (self.state == WizardState::AskPrice).then_some(&mut self.ask_price)
    }

    /// The `show_move` form, once computed.
    #[must_use]
    pub fn show_move(&self) -> Option<&ShowMoveForm> {
        self.show_move.as_ref()
    }

    /// The `show_move` form, editable while it is shown.
    pub fn show_move_mut(&mut self) -> Option<&mut ShowMoveForm> {
        if self.state == WizardState::ShowMove {
            self.show_move.as_mut()
        } else {
            None
        }
    }

    /// Quantity on hand computed by `should_show_move`.
    #[must_use]
    pub fn quantity(&self) -> Decimal {
        self.quantity
    }

    /// Move posted by `create_move`.
    #[must_use]
    pub fn created_move(&self) -> Option<MoveId> {
        self.created_move
    }

    // ========== Stepper ==========

    /// Handles a button of the current interactive state.
    ///
    /// Returns the state the wizard stops in: the next interactive state or
    /// `End`.
    pub fn press<H: Host>(
        &mut self,
        host: &mut H,
        ctx: &Context,
        button: Button,
    ) -> Result<WizardState, ModifyCostPriceError> {
        let from = self.state;
        if from.kind() != StateKind::Interactive {
            return Err(ModifyCostPriceError::InvalidStep {
                state: from,
                event: Event::Pressed(button),
            });
        }
        let next = Self::advance(from, Event::Pressed(button))?;

        if button == Button::Cancel {
            info!(state = %from, "modify cost price cancelled");
            self.state = next;
            return Ok(next);
        }
        if from == WizardState::ShowMove {
            self.validate_show_move(host, ctx)?;
        }

        let saved = self.clone();
        host.begin()?;
        match self.run(host, ctx, next) {
            Ok(state) => {
                if let Err(err) = host.commit() {
                    *self = saved;
                    return Err(err.into());
                }
                Ok(state)
            }
            Err(err) => {
                warn!(
                    state = %from,
                    code = err.error_code(),
                    error = %err,
                    "modify cost price step aborted"
                );
                *self = saved;
                if let Err(rollback) = host.rollback() {
                    error!(error = %rollback, "rollback failed");
                }
                Err(err)
            }
        }
    }

    fn advance(from: WizardState, event: Event) -> Result<WizardState, ModifyCostPriceError> {
        next_state(from, event).ok_or(ModifyCostPriceError::InvalidStep { state: from, event })
    }

    fn run<H: Host>(
        &mut self,
        host: &mut H,
        ctx: &Context,
        mut state: WizardState,
    ) -> Result<WizardState, ModifyCostPriceError> {
        loop {
            self.state = state;
            info!(state = %state, "modify cost price state changed");
            state = match state {
                WizardState::ShowMove => {
                    self.show_move = Some(self.default_show_move(host, ctx)?);
                    return Ok(state);
                }
                WizardState::AskPrice | WizardState::End => return Ok(state),
                WizardState::ShouldShowMove => self.transition_should_show_move(host, ctx)?,
                WizardState::CreateMove => self.transition_create_move(host, ctx)?,
                WizardState::ModifyPrice => self.transition_modify_price(host, ctx)?,
            };
        }
    }

    // ========== ask_price ==========

    fn get_product<H: Host>(host: &H, target: Target) -> Result<Product, ModifyCostPriceError> {
        match target {
            Target::Product(id) => Ok(host.product(id)?),
            Target::Template(id) => host
                .variants(id)?
                .into_iter()
                .next()
                .ok_or(ModifyCostPriceError::NoVariant(id)),
        }
    }

    /// Defaults of the `ask_price` form: the current cost price and the one
    /// recomputed by the template's cost price method.
    pub fn default_ask_price<H: Host>(
        host: &H,
        ctx: &Context,
        target: Target,
        product: &Product,
    ) -> Result<AskPriceForm, ModifyCostPriceError> {
        let template = host.template(product.template)?;
        let current = host.cost_price(product.id, ctx.company)?;
        let moves = host.incoming_moves(product.id, &ctx.stock_location_kinds, ctx.today)?;
        let proposed = recompute_cost_price(template.cost_price_method, current, &moves);
        debug!(
            method = %template.cost_price_method,
            moves = moves.len(),
            %proposed,
            "cost price recomputed"
        );
        Ok(AskPriceForm {
            target,
            product: product.id,
            current_cost_price: current,
            cost_price: proposed,
        })
    }

    // ========== should_show_move ==========

    fn transition_should_show_move<H: Host>(
        &mut self,
        host: &H,
        ctx: &Context,
    ) -> Result<WizardState, ModifyCostPriceError> {
        self.quantity = host.quantity(
            self.ask_price.product,
            &ctx.stock_location_kinds,
            ctx.today,
        )?;
        debug!(quantity = %self.quantity, as_of = %ctx.today, "quantity on hand");
        let event = if self.quantity.is_zero() {
            Event::NoStock
        } else {
            Event::HasStock
        };
        Self::advance(WizardState::ShouldShowMove, event)
    }

    // ========== show_move ==========

    /// Defaults of the `show_move` form.
    pub fn default_show_move<H: Host>(
        &self,
        host: &H,
        ctx: &Context,
    ) -> Result<ShowMoveForm, ModifyCostPriceError> {
        let product = self.ask_price.product;
        let current = host.cost_price(product, ctx.company)?;
        let price_difference = self.ask_price.cost_price - current;
        let currency = host.company_currency(ctx.company)?;
        let amount = currency.round(self.quantity * price_difference);

        let stock_account = host
            .resolve_account(StockAccountRole::Stock, ctx.company, product)?
            .ok_or_else(|| ModifyCostPriceError::MissingStockAccount {
                product,
                message: host.messages().gettext(
                    &ctx.language,
                    MessageKey::MissingStockAccount,
                    &[("product", &product.to_string())],
                ),
            })?;
        let configuration = host.accounting_configuration(ctx.company)?;
        debug!(%price_difference, %amount, currency = %currency, "stock revaluation computed");

        let mut form = ShowMoveForm::new(price_difference, amount, currency.digits, stock_account);
        form.journal = configuration.stock_journal;
        form.counterpart = configuration.cost_price_counterpart_account;
        Ok(form)
    }

    fn show_move_form(&self) -> Result<&ShowMoveForm, ModifyCostPriceError> {
        self.show_move
            .as_ref()
            .ok_or(ModifyCostPriceError::InvalidStep {
                state: self.state,
                event: Event::Done,
            })
    }

    fn validate_show_move<H: Host>(
        &self,
        host: &H,
        ctx: &Context,
    ) -> Result<(), ModifyCostPriceError> {
        let form = self.show_move_form()?;
        let (_, counterpart) = form.selection(ctx, host.messages())?;
        let counterpart = host.account(counterpart)?;
        check_same_account(form.stock_account(), &counterpart, ctx, host.messages())?;
        check_counterpart_domain(&counterpart, ctx, host.messages())
    }

    // ========== create_move ==========

    /// Lines moving `amount` into the stock account, balanced on the
    /// counterpart.
    #[must_use]
    pub fn get_move_lines(
        stock_account: AccountId,
        counterpart: AccountId,
        amount: Decimal,
    ) -> Vec<MoveLine> {
        vec![
            MoveLine::from_signed(stock_account, amount),
            MoveLine::from_signed(counterpart, -amount),
        ]
    }

    /// Draft move dated today in the period containing today.
    pub fn get_move<H: Host>(
        &self,
        host: &H,
        ctx: &Context,
        journal: JournalId,
        counterpart: AccountId,
    ) -> Result<Move, ModifyCostPriceError> {
        let form = self.show_move_form()?;
        let period = host
            .find_period(ctx.company, ctx.today)
            .map_err(|err| match err {
                HostError::Ledger(LedgerError::NoPeriod { .. } | LedgerError::PeriodClosed(_)) => {
                    ModifyCostPriceError::NoPeriod {
                        date: ctx.today,
                        message: host.messages().gettext(
                            &ctx.language,
                            MessageKey::NoPeriod,
                            &[("date", &ctx.today.to_string())],
                        ),
                    }
                }
                other => other.into(),
            })?;

        let mut account_move = Move::draft(ctx.company, journal, period.id, ctx.today);
        account_move.origin = Some(MoveOrigin::Product(self.ask_price.product));
        account_move.description.clone_from(&form.description);
        account_move.lines = Self::get_move_lines(form.stock_account(), counterpart, form.amount());
        Ok(account_move)
    }

    fn transition_create_move<H: Host>(
        &mut self,
        host: &mut H,
        ctx: &Context,
    ) -> Result<WizardState, ModifyCostPriceError> {
        let computed = self.default_show_move(host, ctx)?;
        let edited = self.show_move_form()?;
        if !computed.same_computation(edited) {
            warn!(
                product = %self.ask_price.product,
                amount = %edited.amount(),
                expected = %computed.amount(),
                "show_move computed fields reset"
            );
        }
        let form = computed.with_edits_of(edited);
        let (journal, counterpart) = form.selection(ctx, host.messages())?;
        if counterpart == form.stock_account() {
            let account = host.account(counterpart)?;
            check_same_account(form.stock_account(), &account, ctx, host.messages())?;
        }
        let amount = form.amount();
        self.show_move = Some(form);

        let account_move = self.get_move(host, ctx, journal, counterpart)?;
        let id = host.save_move(account_move)?;
        host.post_move(id)?;
        self.created_move = Some(id);
        info!(
            move_id = %id,
            product = %self.ask_price.product,
            %amount,
            "stock revaluation move posted"
        );
        Self::advance(WizardState::CreateMove, Event::Done)
    }

    // ========== modify_price ==========

    fn transition_modify_price<H: Host>(
        &mut self,
        host: &mut H,
        ctx: &Context,
    ) -> Result<WizardState, ModifyCostPriceError> {
        host.set_cost_price(self.ask_price.product, ctx.company, self.ask_price.cost_price)?;
        info!(
            product = %self.ask_price.product,
            company = %ctx.company,
            cost_price = %self.ask_price.cost_price,
            "cost price modified"
        );
        Self::advance(WizardState::ModifyPrice, Event::Done)
    }
}
