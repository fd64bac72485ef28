//! Request context threaded through every host call.

use chrono::NaiveDate;
use continental_shared::AppConfig;
use continental_shared::types::{CompanyId, UserId};
use serde::{Deserialize, Serialize};

use crate::stock::{LocationKind, parse_kinds};

/// Who is acting, for which company, and on which day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Context {
    /// The operator.
    pub user: UserId,
    /// The operator's current company.
    pub company: CompanyId,
    /// The date moves and quantities are computed at.
    pub today: NaiveDate,
    /// Language of operator-facing messages.
    pub language: String,
    /// Location kinds counted as stock on hand.
    pub stock_location_kinds: Vec<LocationKind>,
}

impl Context {
    /// Creates a context counting storage locations, in English.
    #[must_use]
    pub fn new(user: UserId, company: CompanyId, today: NaiveDate) -> Self {
        Self {
            user,
            company,
            today,
            language: "en".to_string(),
            stock_location_kinds: vec![LocationKind::Storage],
        }
    }

    /// Creates a context with the language and location kinds of `config`.
    ///
    /// Falls back to storage locations when no configured kind is known.
    #[must_use]
    pub fn from_config(config: &AppConfig, user: UserId, company: CompanyId, today: NaiveDate) -> Self {
        let mut ctx = Self::new(user, company, today).with_language(config.locale.language.clone());
        let kinds = parse_kinds(&config.stock.on_hand_location_kinds);
        if !kinds.is_empty() {
            ctx.stock_location_kinds = kinds;
        }
        ctx
    }

    /// Sets the language.
    #[must_use]
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }
}
