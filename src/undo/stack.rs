//! Undo history.
//!
//! Entries are kept in an `im::Vector` so cloning a game state (for
//! hint search or snapshots) shares the history instead of copying it.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::action::{UndoAction, UndoEntry, UndoEntryId, UndoOwner};

/// Last-in-first-out stack of recorded reversals.
///
/// With a limit set, recording past the limit drops the oldest entry.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct UndoStack {
    /// Oldest first.
    entries: Vector<UndoEntry>,
    limit: Option<usize>,
    next_id: u32,
}

impl UndoStack {
    /// Create an unbounded stack.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a stack keeping at most `limit` entries.
    #[must_use]
    pub fn with_limit(limit: Option<usize>) -> Self {
        Self {
            limit,
            ..Self::default()
        }
    }

    /// Push a reversal.
    pub fn record(
        &mut self,
        owner: UndoOwner,
        action: UndoAction,
        description: impl Into<String>,
    ) -> UndoEntryId {
        let id = UndoEntryId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);

        self.entries.push_back(UndoEntry {
            id,
            owner,
            action,
            description: description.into(),
        });

        if let Some(limit) = self.limit {
            while self.entries.len() > limit {
                self.entries.pop_front();
            }
        }
        id
    }

    /// Remove and return the most recent entry.
    pub fn pop(&mut self) -> Option<UndoEntry> {
        self.entries.pop_back()
    }

    /// Most recent entry.
    #[must_use]
    pub fn peek(&self) -> Option<&UndoEntry> {
        self.entries.back()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    /// Drop every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Entries, oldest first.
    pub fn entries(&self) -> impl Iterator<Item = &UndoEntry> {
        self.entries.iter()
    }

    /// Number of entries recorded by `owner`.
    #[must_use]
    pub fn count_by_owner(&self, owner: UndoOwner) -> usize {
        self.entries.iter().filter(|e| e.owner == owner).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::card::CardId;

    fn draw(raw: u8) -> UndoAction {
        UndoAction::StockDraw { card: CardId(raw) }
    }

    #[test]
    fn test_lifo_order() {
        let mut stack = UndoStack::new();
        stack.record(UndoOwner::User, draw(1), "first");
        stack.record(UndoOwner::User, draw(2), "second");

        assert_eq!(stack.len(), 2);
        assert_eq!(stack.peek().map(|e| e.description.as_str()), Some("second"));
        assert_eq!(stack.pop().map(|e| e.action), Some(draw(2)));
        assert_eq!(stack.pop().map(|e| e.action), Some(draw(1)));
        assert!(stack.pop().is_none());
        assert!(stack.is_empty());
    }

    #[test]
    fn test_ids_increase() {
        let mut stack = UndoStack::new();
        let a = stack.record(UndoOwner::User, draw(1), "a");
        let b = stack.record(UndoOwner::System, draw(2), "b");
        assert!(a < b);
        assert_eq!(b.raw(), 1);
    }

    #[test]
    fn test_id_counter_wraps() {
        let mut stack = UndoStack::new();
        stack.next_id = u32::MAX;

        assert_eq!(stack.record(UndoOwner::User, draw(1), "last"), UndoEntryId(u32::MAX));
        assert_eq!(stack.record(UndoOwner::User, draw(2), "wrapped"), UndoEntryId(0));
        assert_eq!(stack.len(), 2);
    }

    #[test]
    fn test_limit_drops_oldest() {
        let mut stack = UndoStack::with_limit(Some(2));
        stack.record(UndoOwner::User, draw(1), "a");
        stack.record(UndoOwner::User, draw(2), "b");
        stack.record(UndoOwner::User, draw(3), "c");

        let kept: Vec<_> = stack.entries().map(|e| e.description.as_str()).collect();
        assert_eq!(kept, vec!["b", "c"]);
    }

    #[test]
    fn test_zero_limit_keeps_nothing() {
        let mut stack = UndoStack::with_limit(Some(0));
        stack.record(UndoOwner::User, draw(1), "a");
        assert!(stack.is_empty());
    }

    #[test]
    fn test_count_by_owner() {
        let mut stack = UndoStack::new();
        stack.record(UndoOwner::User, draw(1), "a");
        stack.record(UndoOwner::System, draw(2), "b");
        stack.record(UndoOwner::User, draw(3), "c");

        assert_eq!(stack.count_by_owner(UndoOwner::User), 2);
        assert_eq!(stack.count_by_owner(UndoOwner::System), 1);
    }

    #[test]
    fn test_clone_is_independent() {
        let mut stack = UndoStack::new();
        stack.record(UndoOwner::User, draw(1), "a");

        let snapshot = stack.clone();
        stack.clear();

        assert!(stack.is_empty());
        assert_eq!(snapshot.len(), 1);
    }
}
