//! Applying moves to the table.
//!
//! - `MoveExecutor`: runs between piles and stock draws
//! - `StockCycle`: discard -> stock recycling
//!
//! Neither validates. Rule checks happen in [`crate::rules`] before a
//! move reaches this module.

mod executor;
mod stock_cycle;

pub use executor::{AppliedMove, MoveExecutor};
pub use stock_cycle::StockCycle;
