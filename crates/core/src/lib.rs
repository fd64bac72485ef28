//! Continental stock accounting for products.
//!
//! This crate contains pure business logic with ZERO web or database
//! dependencies. Records are read and written through the [`host::Host`]
//! trait.
//!
//! # Modules
//!
//! - `account` - Stock account roles, category accounts and resolution
//! - `product` - Products, templates and cost prices
//! - `stock` - Locations, stock moves and quantities on hand
//! - `ledger` - Journal moves, their validation and periods
//! - `i18n` - Localized operator messages
//! - `host` - Boundary to the hosting system, with an in-memory host
//! - `wizard` - The modify cost price wizard

pub mod account;
pub mod host;
pub mod i18n;
pub mod ledger;
pub mod product;
pub mod stock;
pub mod wizard;
