//! Undo support.
//!
//! Every committed move records an [`UndoAction`]: a plain value naming
//! the cards and piles involved. [`apply_reverse`] is the single place
//! that knows how to turn each variant back into table mutations.
//!
//! ## Key Types
//!
//! - `UndoOwner`: user- or system-initiated
//! - `UndoAction`: tagged reversal payload
//! - `UndoStack`: bounded LIFO history

mod action;
mod reverse;
mod stack;

pub use action::{UndoAction, UndoEntry, UndoEntryId, UndoOwner};
pub use reverse::apply_reverse;
pub use stack::UndoStack;
