//! Iterative descent and membership queries.

use std::cmp::Ordering;

use arbor_arena::{Side, SlotIndex};
use smallvec::SmallVec;

use crate::tree::AvlTree;

/// Slots visited on the way down from the root, shallowest first.
///
/// AVL height stays under `1.45 * log2(n + 2)` (about 46 for a full
/// `SlotIndex` space), so 64 inline entries never spill to the heap.
pub(crate) type Ancestors = SmallVec<[SlotIndex; 64]>;

/// Outcome of walking the tree toward a value.
pub(crate) enum Descent {
    /// The value lives in `index`; `path` runs from the root to its parent
    /// (empty when the value is at the root).
    Found { index: SlotIndex, path: Ancestors },
    /// The value is absent. It would hang off `path.last()` on `side`;
    /// `path` is empty only for an empty tree.
    Vacant { side: Side, path: Ancestors },
}

impl<T: Ord> AvlTree<T> {
    /// Walk from the root toward `value`, recording every ancestor.
    pub(crate) fn descend(&self, value: &T) -> Descent {
        let mut path = Ancestors::new();
        let mut side = Side::Left;
        let mut cursor = self.root();

        while let Some(index) = cursor {
            let node = &self.arena[index];
            side = match value.cmp(node.value()) {
                Ordering::Less => Side::Left,
                Ordering::Greater => Side::Right,
                Ordering::Equal => return Descent::Found { index, path },
            };
            path.push(index);
            cursor = node.child(side);
        }

        Descent::Vacant { side, path }
    }

    /// Slot holding `value`, or `None` if it is absent (or the tree is
    /// empty).
    pub fn position(&self, value: &T) -> Option<SlotIndex> {
        match self.descend(value) {
            Descent::Found { index, .. } => Some(index),
            Descent::Vacant { .. } => None,
        }
    }

    /// Whether `value` is in the tree.
    pub fn contains(&self, value: &T) -> bool {
        self.position(value).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_on_empty_tree_is_none() {
        let tree: AvlTree<i32> = AvlTree::new();
        assert_eq!(tree.position(&0), None);
        assert!(!tree.contains(&0));
    }

    #[test]
    fn descend_records_path_to_parent() {
        let tree: AvlTree<i32> = [20, 10, 30, 5, 15].into_iter().collect();
        match tree.descend(&15) {
            Descent::Found { index, path } => {
                assert_eq!(tree.get_node(index).unwrap().value(), &15);
                let values: Vec<_> = path.iter().map(|&i| *tree.arena[i].value()).collect();
                assert_eq!(values, vec![20, 10]);
            }
            Descent::Vacant { .. } => panic!("expected Found"),
        }
    }

    #[test]
    fn vacant_descent_names_would_be_parent() {
        let tree: AvlTree<i32> = [20, 10, 30].into_iter().collect();
        match tree.descend(&25) {
            Descent::Vacant { side, path } => {
                assert_eq!(side, Side::Left);
                let parent = *path.last().unwrap();
                assert_eq!(tree.arena[parent].value(), &30);
                assert_eq!(path.len(), 2);
            }
            Descent::Found { .. } => panic!("expected Vacant"),
        }
    }

    #[test]
    fn root_hit_has_empty_path() {
        let tree: AvlTree<i32> = [2, 1, 3].into_iter().collect();
        match tree.descend(&2) {
            Descent::Found { path, .. } => assert!(path.is_empty()),
            Descent::Vacant { .. } => panic!("expected Found"),
        }
    }

    #[test]
    fn deep_descent_stays_inline() {
        let tree: AvlTree<u32> = (0..100_000).collect();
        for probe in [0, 65_535, 99_999, 100_000] {
            let path = match tree.descend(&probe) {
                Descent::Found { path, .. } | Descent::Vacant { path, .. } => path,
            };
            assert!(!path.spilled(), "value {probe}: {} ancestors", path.len());
            assert!(path.len() as i32 <= tree.height() + 1);
        }
    }

    #[test]
    fn contains_every_inserted_value() {
        let tree: AvlTree<u32> = (0..200).map(|v| v * 3).collect();
        for v in 0..600 {
            assert_eq!(tree.contains(&v), v % 3 == 0, "value {v}");
        }
    }
}
