//! Cost price errors.

use continental_shared::AppError;
use continental_shared::types::ProductId;
use thiserror::Error;

/// Errors raised when changing a cost price.
#[derive(Debug, Error)]
pub enum CostPriceError {
    /// The product already moved; its cost price must go through the
    /// modify cost price wizard.
    #[error("{message}")]
    HasMoves {
        /// The product.
        product: ProductId,
        /// Localized operator message.
        message: String,
    },
}

impl CostPriceError {
    /// Returns the error code for presentation layers.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::HasMoves { .. } => "COST_PRICE_HAS_MOVES",
        }
    }
}

impl From<CostPriceError> for AppError {
    fn from(err: CostPriceError) -> Self {
        Self::BusinessRule(err.to_string())
    }
}
