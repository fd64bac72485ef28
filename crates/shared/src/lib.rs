//! Shared types, errors, and configuration for continental stock accounting.
//!
//! This crate provides common types used by the other crates:
//! - Typed IDs for type-safe entity references
//! - Company currency with display precision and rounding
//! - Application-wide error type
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::AppConfig;
pub use error::{AppError, AppResult};
