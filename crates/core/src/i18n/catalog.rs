//! Localized message catalog.
//!
//! Templates use `{name}` placeholders. Lookup falls back from the full
//! language code (`fr_CA`) to its prefix (`fr`), then to English, then to
//! the message key itself.

use std::collections::HashMap;

use tracing::error;

/// Built-in catalog, embedded at compile time.
const BUILTIN_MESSAGES: &str = include_str!("messages.json");

/// Fallback language.
const DEFAULT_LANGUAGE: &str = "en";

/// Known message keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKey {
    /// Counterpart and stock account are the same account.
    ModifyCostPriceSameAccount,
    /// Direct cost price change on a product with moves.
    ProductChangeCostPrice,
    /// Product resolves no stock account.
    MissingStockAccount,
    /// No stock journal configured.
    MissingStockJournal,
    /// Counterpart not selected.
    MissingCounterpart,
    /// Counterpart outside its allowed domain.
    InvalidCounterpart,
    /// No open period for the date.
    NoPeriod,
}

impl MessageKey {
    /// Catalog key of the message.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ModifyCostPriceSameAccount => "msg_modify_cost_price_same_account",
            Self::ProductChangeCostPrice => "msg_product_change_cost_price",
            Self::MissingStockAccount => "msg_modify_cost_price_missing_stock_account",
            Self::MissingStockJournal => "msg_modify_cost_price_missing_stock_journal",
            Self::MissingCounterpart => "msg_modify_cost_price_missing_counterpart",
            Self::InvalidCounterpart => "msg_modify_cost_price_invalid_counterpart",
            Self::NoPeriod => "msg_no_period_date",
        }
    }
}

/// Message templates per language.
#[derive(Debug, Clone, Default)]
pub struct MessageCatalog {
    languages: HashMap<String, HashMap<String, String>>,
}

impl MessageCatalog {
    /// Parses a catalog of the form `{"lang": {"key": "template"}}`.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON does not have that shape.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        Ok(Self {
            languages: serde_json::from_str(json)?,
        })
    }

    /// The catalog shipped with the crate.
    #[must_use]
    pub fn builtin() -> Self {
        Self::from_json(BUILTIN_MESSAGES).unwrap_or_else(|err| {
            error!(error = %err, "built-in message catalog is malformed");
            Self::default()
        })
    }

    /// Adds or replaces a template.
    pub fn insert(&mut self, language: &str, key: MessageKey, template: impl Into<String>) {
        self.languages
            .entry(language.to_string())
            .or_default()
            .insert(key.as_str().to_string(), template.into());
    }

    fn template(&self, language: &str, key: MessageKey) -> Option<&str> {
        let prefix = language.split(['_', '-']).next().unwrap_or(language);
        [language, prefix, DEFAULT_LANGUAGE]
            .into_iter()
            .find_map(|lang| self.languages.get(lang)?.get(key.as_str()))
            .map(String::as_str)
    }

    /// Renders `key` in `language`, substituting `{name}` placeholders.
    #[must_use]
    pub fn gettext(&self, language: &str, key: MessageKey, params: &[(&str, &str)]) -> String {
        let Some(template) = self.template(language, key) else {
            return key.as_str().to_string();
        };
        params
            .iter()
            .fold(template.to_string(), |text, (name, value)| {
                text.replace(&format!("{{{name}}}"), value)
            })
    }
}
