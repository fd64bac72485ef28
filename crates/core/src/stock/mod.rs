//! Stock locations, moves and quantities.
//!
//! Stock valuation only needs to know how much of a product sits in
//! storage at a date and which moves brought it there.

pub mod location;
pub mod moves;
pub mod quantity;

pub use location::{Location, LocationKind, parse_kinds};
pub use moves::{StockMove, StockMoveState};
pub use quantity::{StockView, ValuationMove};
