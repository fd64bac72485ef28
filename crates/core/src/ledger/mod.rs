//! Journal moves and periods.
//!
//! - Move lines and their balancing rules
//! - The move aggregate and posting
//! - Accounting periods and period lookup

pub mod account_move;
pub mod entry;
pub mod error;
pub mod period;
pub mod validation;

#[cfg(test)]
mod validation_props;

pub use account_move::{Journal, Move, MoveOrigin, MoveState};
pub use entry::MoveLine;
pub use error::LedgerError;
pub use period::{Period, PeriodStatus, find_period};
pub use validation::{LedgerValidationError, validate_lines};
