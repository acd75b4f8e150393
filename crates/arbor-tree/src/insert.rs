//! Insertion.

use arbor_arena::{Node, SlotIndex};

use crate::error::TreeError;
use crate::search::Descent;
use crate::tree::AvlTree;

impl<T: Ord> AvlTree<T> {
    /// Insert `value`, returning the slot it was stored in.
    ///
    /// Returns `Ok(None)` without touching the tree if `value` is already
    /// present. Fails only when the arena is at its configured slot ceiling.
    pub fn try_insert(&mut self, value: T) -> Result<Option<SlotIndex>, TreeError> {
        let (side, path) = match self.descend(&value) {
            Descent::Found { .. } => return Ok(None),
            Descent::Vacant { side, path } => (side, path),
        };

        let index = self.arena.allocate(Node::leaf(value))?;
        match path.last() {
            Some(&parent) => self.arena[parent].set_child(side, Some(index)),
            None => self.root = Some(index),
        }

        self.rebalance(path);
        self.len += 1;
        Ok(Some(index))
    }

    /// Insert `value`, returning the slot it was stored in, or `None` if it
    /// was already present.
    ///
    /// # Panics
    ///
    /// Panics if the arena has a slot ceiling (see
    /// [`ArenaConfig::max_slots`](arbor_arena::ArenaConfig::max_slots)) and
    /// every slot is occupied. Use [`try_insert`](AvlTree::try_insert) to
    /// handle that case.
    pub fn insert(&mut self, value: T) -> Option<SlotIndex> {
        match self.try_insert(value) {
            Ok(index) => index,
            Err(e) => panic!("{e}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arbor_arena::{ArenaConfig, ArenaError};

    #[test]
    fn first_insert_takes_slot_zero() {
        let mut tree = AvlTree::new();
        assert_eq!(tree.insert(42), Some(SlotIndex(0)));
        assert_eq!(tree.root(), Some(SlotIndex(0)));
        assert_eq!(tree.len(), 1);
    }

    #[test]
    fn duplicate_is_rejected_without_change() {
        let mut tree: AvlTree<i32> = (0..10).collect();
        let slots = tree.arena().slot_count();
        let root = tree.root();
        assert_eq!(tree.insert(5), None);
        assert_eq!(tree.len(), 10);
        assert_eq!(tree.arena().slot_count(), slots);
        assert_eq!(tree.root(), root);
    }

    #[test]
    fn ascending_inserts_rotate_left() {
        let mut tree = AvlTree::new();
        tree.insert(1);
        tree.insert(2);
        tree.insert(3);
        // Slot 1 (value 2) becomes the root after a single left rotation.
        assert_eq!(tree.root(), Some(SlotIndex(1)));
        let root = tree.get_node(SlotIndex(1)).unwrap();
        assert_eq!(root.left(), Some(SlotIndex(0)));
        assert_eq!(root.right(), Some(SlotIndex(2)));
        assert_eq!(root.height(), 1);
    }

    #[test]
    fn zig_zag_inserts_double_rotate() {
        let mut tree = AvlTree::new();
        tree.insert(30);
        tree.insert(10);
        tree.insert(20);
        let root = tree.root().unwrap();
        assert_eq!(tree.get_node(root).unwrap().value(), &20);
        assert_eq!(tree.iter().copied().collect::<Vec<_>>(), vec![20, 10, 30]);
    }

    #[test]
    fn try_insert_reports_capacity() {
        let config = ArenaConfig::new(0).with_max_slots(3);
        let mut tree = AvlTree::with_config(config).unwrap();
        for v in 0..3 {
            assert!(tree.try_insert(v).unwrap().is_some());
        }
        assert_eq!(
            tree.try_insert(3),
            Err(TreeError::Arena(ArenaError::CapacityExceeded {
                requested: 4,
                capacity: 3,
            }))
        );
        assert_eq!(tree.len(), 3);
        // Duplicates are still answered without allocating.
        assert_eq!(tree.try_insert(1), Ok(None));
    }

    #[test]
    #[should_panic(expected = "arena capacity exceeded")]
    fn insert_panics_on_capacity() {
        let config = ArenaConfig::new(0).with_max_slots(1);
        let mut tree = AvlTree::with_config(config).unwrap();
        tree.insert(1);
        tree.insert(2);
    }
}
