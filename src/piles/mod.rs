//! Pile system for card locations.
//!
//! ## Key Types
//!
//! - `PileManager`: Ordered pile contents and the card -> pile index
//! - `Table`: `PileManager` plus the face state of every card

pub mod manager;
pub mod table;

pub use manager::PileManager;
pub use table::Table;

// Re-export pile types from core for convenience
pub use crate::core::pile::{Pile, PileId, PileType};
