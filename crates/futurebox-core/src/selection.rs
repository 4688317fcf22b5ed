//! The batch-vote selection set.
//!
//! Users pick exactly [`MAX_SELECTED`] capsules before the vote/deposit
//! action unlocks. The set preserves insertion order; ids are sent to the
//! vote entry point in the order they were picked.

use crate::types::ObjectId;
use thiserror::Error;

/// Number of capsules a batch vote requires.
pub const MAX_SELECTED: usize = 5;

/// Errors from selection operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SelectionError {
    #[error("you can only select up to {MAX_SELECTED} capsules")]
    Full,
}

/// What a successful [`SelectionSet::toggle`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// The id was added to the set.
    Added,
    /// The id was already present and has been removed.
    Removed,
}

/// An ordered, duplicate-free set of up to [`MAX_SELECTED`] capsule ids.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    ids: Vec<ObjectId>,
}

impl SelectionSet {
    /// An empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle membership of `id`.
    ///
    /// Removes the id when present; inserts it when the set has room.
    /// A sixth insert attempt leaves the set unchanged and returns
    /// [`SelectionError::Full`].
    pub fn toggle(&mut self, id: &ObjectId) -> Result<ToggleOutcome, SelectionError> {
        if let Some(pos) = self.ids.iter().position(|existing| existing == id) {
            self.ids.remove(pos);
            return Ok(ToggleOutcome::Removed);
        }
        if self.ids.len() >= MAX_SELECTED {
            return Err(SelectionError::Full);
        }
        self.ids.push(id.clone());
        Ok(ToggleOutcome::Added)
    }

    /// Whether `id` is currently selected.
    pub fn contains(&self, id: &ObjectId) -> bool {
        self.ids.iter().any(|existing| existing == id)
    }

    /// Number of selected ids.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Whether nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// True iff exactly [`MAX_SELECTED`] ids are selected.
    pub fn is_complete(&self) -> bool {
        self.ids.len() == MAX_SELECTED
    }

    /// Selected ids in insertion order.
    pub fn ids(&self) -> &[ObjectId] {
        &self.ids
    }

    /// Drop every selection (after a successful deposit).
    pub fn clear(&mut self) {
        self.ids.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(n: u8) -> ObjectId {
        format!("0x{n:x}").parse().unwrap()
    }

    #[test]
    fn toggle_adds_then_removes() {
        let mut set = SelectionSet::new();
        assert_eq!(set.toggle(&id(1)), Ok(ToggleOutcome::Added));
        assert!(set.contains(&id(1)));
        assert_eq!(set.toggle(&id(1)), Ok(ToggleOutcome::Removed));
        assert!(set.is_empty());
    }

    #[test]
    fn sixth_selection_rejected_unchanged() {
        let mut set = SelectionSet::new();
        for n in 1..=5 {
            set.toggle(&id(n)).unwrap();
        }
        assert!(set.is_complete());

        let before = set.clone();
        assert_eq!(set.toggle(&id(6)), Err(SelectionError::Full));
        assert_eq!(set, before);
    }

    #[test]
    fn deselect_still_works_when_full() {
        let mut set = SelectionSet::new();
        for n in 1..=5 {
            set.toggle(&id(n)).unwrap();
        }
        assert_eq!(set.toggle(&id(3)), Ok(ToggleOutcome::Removed));
        assert_eq!(set.len(), 4);
        assert!(!set.is_complete());
    }

    #[test]
    fn insertion_order_preserved() {
        let mut set = SelectionSet::new();
        for n in [3, 1, 4, 1, 5] {
            let _ = set.toggle(&id(n));
        }
        // 1 was toggled twice: added then removed.
        assert_eq!(set.ids(), &[id(3), id(4), id(5)]);
    }

    #[test]
    fn clear_empties_the_set() {
        let mut set = SelectionSet::new();
        set.toggle(&id(1)).unwrap();
        set.clear();
        assert!(set.is_empty());
        assert!(!set.is_complete());
    }
}
