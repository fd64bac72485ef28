//! Application configuration management.

use serde::Deserialize;

use crate::types::{AccountId, JournalId};

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Accounting configuration.
    #[serde(default)]
    pub accounting: AccountingConfig,
    /// Stock configuration.
    #[serde(default)]
    pub stock: StockConfig,
    /// Localization configuration.
    #[serde(default)]
    pub locale: LocaleConfig,
}

/// Accounting configuration used by continental stock valuation.
#[derive(Debug, Clone, Deserialize)]
pub struct AccountingConfig {
    /// Journal receiving stock valuation moves.
    #[serde(default)]
    pub stock_journal: Option<JournalId>,
    /// Default counterpart account for cost price adjustments.
    #[serde(default)]
    pub cost_price_counterpart_account: Option<AccountId>,
    /// Company currency code.
    #[serde(default = "default_currency_code")]
    pub currency_code: String,
    /// Company currency display digits.
    #[serde(default = "default_currency_digits")]
    pub currency_digits: u32,
}

impl Default for AccountingConfig {
    fn default() -> Self {
        Self {
            stock_journal: None,
            cost_price_counterpart_account: None,
            currency_code: default_currency_code(),
            currency_digits: default_currency_digits(),
        }
    }
}

fn default_currency_code() -> String {
    "USD".to_string()
}

fn default_currency_digits() -> u32 {
    2
}

/// Stock configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct StockConfig {
    /// Location kinds whose content counts as quantity on hand.
    #[serde(default = "default_on_hand_location_kinds")]
    pub on_hand_location_kinds: Vec<String>,
}

impl Default for StockConfig {
    fn default() -> Self {
        Self {
            on_hand_location_kinds: default_on_hand_location_kinds(),
        }
    }
}

fn default_on_hand_location_kinds() -> Vec<String> {
    vec!["storage".to_string()]
}

/// Localization configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LocaleConfig {
    /// Default language for operator-facing messages.
    #[serde(default = "default_language")]
    pub language: String,
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self {
            language: default_language(),
        }
    }
}

fn default_language() -> String {
    "en".to_string()
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// Sources, lowest priority first: `config/default`, `config/{RUN_MODE}`,
    /// then `CONTINENTAL__SECTION__KEY` environment variables. A `.env` file
    /// is read first when present.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenvy::dotenv().ok();

        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(
                config::Environment::with_prefix("CONTINENTAL")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}
