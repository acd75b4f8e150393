//! Integration test: arbitrary insert/remove sequences against `BTreeSet`.
//!
//! Every operation's answer must match the model, the invariants must hold
//! after every step, and the final level-order contents must equal the
//! model's set.

use std::collections::BTreeSet;

use arbor_test_utils::compliance::{assert_invariants, assert_membership_matches};
use arbor_test_utils::{random_ops, replay, Op};
use arbor_tree::AvlTree;
use proptest::prelude::*;

fn op_strategy(key_range: i32) -> impl Strategy<Value = Op<i32>> {
    prop_oneof![
        3 => (0..key_range).prop_map(Op::Insert),
        2 => (0..key_range).prop_map(Op::Remove),
    ]
}

proptest! {
    #[test]
    fn matches_btreeset(ops in proptest::collection::vec(op_strategy(64), 1..400)) {
        let mut tree = AvlTree::new();
        let mut model = BTreeSet::new();
        replay(&mut tree, &mut model, &ops, 1);
    }

    #[test]
    fn removed_values_are_unfindable(
        values in proptest::collection::btree_set(0i32..1000, 1..200),
        picks in proptest::collection::vec(any::<proptest::sample::Index>(), 1..50),
    ) {
        let values: Vec<i32> = values.into_iter().collect();
        let mut tree: AvlTree<i32> = values.iter().copied().collect();
        for pick in picks {
            let v = *pick.get(&values);
            let was_present = tree.contains(&v);
            prop_assert_eq!(tree.remove(&v).is_some(), was_present);
            prop_assert_eq!(tree.position(&v), None);
        }
        assert_invariants(&tree);
    }

    #[test]
    fn duplicate_insert_leaves_shape(values in proptest::collection::vec(0i32..100, 1..100)) {
        let mut tree: AvlTree<i32> = values.iter().copied().collect();
        let shape: Vec<i32> = tree.iter().copied().collect();
        let slots = tree.arena().slot_count();
        for v in &values {
            prop_assert_eq!(tree.insert(*v), None);
        }
        prop_assert_eq!(tree.iter().copied().collect::<Vec<_>>(), shape);
        prop_assert_eq!(tree.arena().slot_count(), slots);
    }

    #[test]
    fn len_equals_occupied_slots(ops in proptest::collection::vec(op_strategy(32), 1..200)) {
        let mut tree = AvlTree::new();
        for op in ops {
            match op {
                Op::Insert(v) => { tree.insert(v); }
                Op::Remove(v) => { tree.remove(&v); }
            }
            prop_assert_eq!(tree.len(), tree.arena().occupied());
        }
    }
}

#[test]
fn long_seeded_churn() {
    let mut tree = AvlTree::new();
    let mut model = BTreeSet::new();
    replay(&mut tree, &mut model, &random_ops(0xA5A5, 20_000, 2_000), 500);
    assert_membership_matches(&tree, &model);
}

#[test]
fn churn_reuses_slots_instead_of_growing() {
    let mut tree = AvlTree::new();
    for round in 0..20u32 {
        for v in 0..256u32 {
            tree.insert(v + round * 7);
        }
        for v in 0..256u32 {
            tree.remove(&(v + round * 7));
        }
        assert!(tree.is_empty());
        assert_eq!(tree.arena().slot_count(), 0);
    }

    let mut tree = AvlTree::new();
    for v in 0..512u32 {
        tree.insert(v);
    }
    for round in 0..50u32 {
        tree.remove(&(round * 3));
        tree.insert(10_000 + round);
    }
    // Each insertion reuses the slot the preceding removal vacated.
    assert_eq!(tree.arena().slot_count(), 512);
    assert_invariants(&tree);
}
