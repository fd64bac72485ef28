//! Operator-facing messages.

pub mod catalog;

pub use catalog::{MessageCatalog, MessageKey};
