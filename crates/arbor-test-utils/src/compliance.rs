//! Tree compliance assertions.
//!
//! These helpers panic with a descriptive message when a tree breaks one of
//! its contracts. Reused by the unit, integration and property suites.

use std::collections::BTreeSet;
use std::fmt;

use arbor_tree::AvlTree;

/// Assert ordering, balance, heights, size and arena hygiene.
pub fn assert_invariants<T: Ord>(tree: &AvlTree<T>) {
    if let Err(violation) = tree.validate() {
        panic!("tree invariant violated: {violation}");
    }
}

/// Assert that the level-order traversal visits exactly the model's values.
pub fn assert_membership_matches<T>(tree: &AvlTree<T>, model: &BTreeSet<T>)
where
    T: Ord + Clone + fmt::Debug,
{
    let visited: Vec<T> = tree.iter().cloned().collect();
    assert_eq!(
        visited.len(),
        tree.len(),
        "traversal visited {} values, len() is {}",
        visited.len(),
        tree.len()
    );
    let seen: BTreeSet<T> = visited.into_iter().collect();
    assert_eq!(&seen, model, "tree contents differ from model");
}

/// Assert that inserting an existing value is rejected and changes nothing.
pub fn assert_insert_idempotent<T>(tree: &mut AvlTree<T>, value: T)
where
    T: Ord + Clone + fmt::Debug,
{
    assert!(
        tree.contains(&value),
        "assert_insert_idempotent needs {value:?} present"
    );
    let len = tree.len();
    let root = tree.root();
    let before: Vec<T> = tree.iter().cloned().collect();

    assert_eq!(tree.insert(value.clone()), None, "duplicate {value:?} accepted");
    assert_eq!(tree.len(), len);
    assert_eq!(tree.root(), root);
    let after: Vec<T> = tree.iter().cloned().collect();
    assert_eq!(before, after, "duplicate insert reshaped the tree");
}

/// Assert that removing `value` succeeds and leaves it unfindable.
pub fn assert_remove_then_absent<T>(tree: &mut AvlTree<T>, value: &T)
where
    T: Ord + Clone + fmt::Debug,
{
    let len = tree.len();
    assert_eq!(tree.remove(value).as_ref(), Some(value), "remove({value:?}) missed");
    assert_eq!(tree.position(value), None, "{value:?} still findable");
    assert_eq!(tree.len(), len - 1);
}

/// Assert that the tree is empty and answers every query with `None`.
pub fn assert_drained<T>(tree: &mut AvlTree<T>, probes: impl IntoIterator<Item = T>)
where
    T: Ord + fmt::Debug,
{
    assert!(tree.is_empty());
    assert_eq!(tree.len(), 0);
    assert_eq!(tree.root(), None);
    assert_eq!(tree.iter().count(), 0);
    for probe in probes {
        assert_eq!(tree.position(&probe), None, "empty tree found {probe:?}");
        assert!(tree.remove(&probe).is_none(), "empty tree removed {probe:?}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn helpers_accept_a_healthy_tree() {
        let mut tree: AvlTree<u32> = (0..32).collect();
        let model: BTreeSet<u32> = (0..32).collect();
        assert_invariants(&tree);
        assert_membership_matches(&tree, &model);
        assert_insert_idempotent(&mut tree, 5);
        assert_remove_then_absent(&mut tree, &5);
    }

    #[test]
    #[should_panic(expected = "tree contents differ from model")]
    fn membership_mismatch_panics() {
        let tree: AvlTree<u32> = (0..4).collect();
        let model: BTreeSet<u32> = (1..5).collect();
        assert_membership_matches(&tree, &model);
    }

    #[test]
    fn drained_tree_answers_none() {
        let mut tree: AvlTree<u32> = AvlTree::new();
        assert_drained(&mut tree, 0..10);
    }
}
