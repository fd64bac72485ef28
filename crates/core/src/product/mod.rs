//! Products, templates and cost prices.
//!
//! This module implements:
//! - Product variants and the templates they share defaults from
//! - Cost price methods and their recomputation
//! - Company-scoped cost price values
//! - The guard against changing a cost price outside the wizard

pub mod cost_price;
pub mod error;
pub mod types;

#[cfg(test)]
mod cost_price_props;

pub use cost_price::{CostPrices, check_no_move, recompute_cost_price};
pub use error::CostPriceError;
pub use types::{CostPriceMethod, Product, Template};
