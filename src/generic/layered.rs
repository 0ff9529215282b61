//! A set with an undo log: changes made after a `push_layer` can be reverted in one
//! shot by `pop_layer`, without keeping a full snapshot of the set at each depth.
//!
//! Two modes cover the two shapes of monotone change the solver needs: clauses and
//! literals only ever get *removed* as the search commits to a branch (so popping
//! re-adds what was removed), while variable assignments only ever get *added*
//! within a branch (so popping removes what was added).

use std::collections::HashSet;
use std::hash::Hash;

use crate::error::Error;

/// Which direction `modify` moves members, and therefore which direction
/// `pop_layer` has to move them back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UndoMode {
    /// `modify` removes members; popping a layer re-inserts them.
    RemoveWithUndo,
    /// `modify` inserts members; popping a layer removes them again.
    AddWithUndo,
}

/// A `HashSet<T>` with layered undo.
#[derive(Debug, Clone)]
pub struct LayeredSet<T: Eq + Hash + Clone> {
    mode: UndoMode,
    current: HashSet<T>,
    /// `layers[0]` is the base layer. Its changes are permanent: `pop_layer`
    /// refuses to cross it, the same way the search never backtracks past the
    /// start of the whole run.
    layers: Vec<HashSet<T>>,
}

impl<T: Eq + Hash + Clone> LayeredSet<T> {
    pub fn new(mode: UndoMode, initial: HashSet<T>) -> Self {
        LayeredSet { mode, current: initial, layers: vec![HashSet::new()] }
    }

    pub fn as_set(&self) -> &HashSet<T> {
        &self.current
    }

    pub fn contains(&self, item: &T) -> bool {
        self.current.contains(item)
    }

    pub fn len(&self) -> usize {
        self.current.len()
    }

    pub fn is_empty(&self) -> bool {
        self.current.is_empty()
    }

    /// Number of layers opened beyond the base layer.
    pub fn depth(&self) -> usize {
        self.layers.len() - 1
    }

    /// Open a new undo layer.
    pub fn push_layer(&mut self) {
        self.layers.push(HashSet::new());
    }

    /// Revert every change recorded since the matching `push_layer` and close it.
    ///
    /// Fails with [`Error::IndexUnderflow`] when called on the base layer.
    pub fn pop_layer(&mut self) -> Result<(), Error> {
        if self.layers.len() <= 1 {
            return Err(Error::IndexUnderflow);
        }
        let changed = self.layers.pop().expect("checked len above");
        match self.mode {
            UndoMode::RemoveWithUndo => {
                for item in changed {
                    self.current.insert(item);
                }
            }
            UndoMode::AddWithUndo => {
                for item in changed {
                    self.current.remove(&item);
                }
            }
        }
        Ok(())
    }

    /// Apply `items` to the current set. Only members whose membership actually
    /// changes are recorded in the open layer, so re-applying the same items is
    /// idempotent and popping afterwards undoes exactly what this call changed.
    pub fn modify(&mut self, items: impl IntoIterator<Item = T>) {
        let layer = self.layers.last_mut().expect("base layer always present");
        match self.mode {
            UndoMode::RemoveWithUndo => {
                for item in items {
                    if self.current.remove(&item) {
                        layer.insert(item);
                    }
                }
            }
            UndoMode::AddWithUndo => {
                for item in items {
                    if self.current.insert(item.clone()) {
                        layer.insert(item);
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remove_with_undo_round_trips() {
        let initial: HashSet<i32> = (0..5).collect();
        let mut set = LayeredSet::new(UndoMode::RemoveWithUndo, initial);
        set.push_layer();
        set.modify(vec![1, 3]);
        assert_eq!(set.len(), 3);
        assert!(!set.contains(&1));
        set.pop_layer().unwrap();
        assert_eq!(set.len(), 5);
        assert!(set.contains(&1));
    }

    #[test]
    fn add_with_undo_round_trips() {
        let mut set = LayeredSet::new(UndoMode::AddWithUndo, HashSet::new());
        set.push_layer();
        set.modify(vec!["a", "b"]);
        assert_eq!(set.len(), 2);
        set.pop_layer().unwrap();
        assert!(set.is_empty());
    }

    #[test]
    fn modify_is_idempotent_within_a_layer() {
        let mut set = LayeredSet::new(UndoMode::RemoveWithUndo, (0..3).collect());
        set.push_layer();
        set.modify(vec![0]);
        set.modify(vec![0]);
        assert_eq!(set.len(), 2);
        set.pop_layer().unwrap();
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn popping_the_base_layer_fails() {
        let mut set: LayeredSet<i32> = LayeredSet::new(UndoMode::RemoveWithUndo, HashSet::new());
        assert_eq!(set.pop_layer(), Err(Error::IndexUnderflow));
    }

    #[test]
    fn nested_layers_undo_independently() {
        let mut set = LayeredSet::new(UndoMode::RemoveWithUndo, (0..10).collect());
        set.push_layer();
        set.modify(vec![0, 1]);
        set.push_layer();
        set.modify(vec![2, 3]);
        assert_eq!(set.len(), 6);
        set.pop_layer().unwrap();
        assert_eq!(set.len(), 8);
        assert!(!set.contains(&0) && set.contains(&2));
        set.pop_layer().unwrap();
        assert_eq!(set.len(), 10);
    }
}
