//! Test utilities and reference models for Arbor development.
//!
//! - [`Op`] and [`random_ops`] build seeded insert/remove workloads.
//! - [`replay`] drives an [`AvlTree`] and a `BTreeSet` model side by side,
//!   asserting that every operation agrees.
//! - [`compliance`] holds the invariant assertions shared by the test
//!   suites.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod compliance;

use std::collections::BTreeSet;
use std::fmt;

use arbor_tree::AvlTree;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// A single mutation in a replayable workload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Op<T> {
    Insert(T),
    Remove(T),
}

/// Generate `count` operations over keys in `0..key_range`.
///
/// Roughly 60% inserts, so trees grow while still exercising removal.
/// The same seed always yields the same sequence.
pub fn random_ops(seed: u64, count: usize, key_range: u32) -> Vec<Op<u32>> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let key = rng.gen_range(0..key_range.max(1));
            if rng.gen_bool(0.6) {
                Op::Insert(key)
            } else {
                Op::Remove(key)
            }
        })
        .collect()
}

/// Apply `ops` to both `tree` and `model`, asserting after each step that
/// the tree's answer matches the model's.
///
/// Invariants are checked every `validate_every` steps (0 disables the
/// periodic check; a final check always runs).
pub fn replay<T>(
    tree: &mut AvlTree<T>,
    model: &mut BTreeSet<T>,
    ops: &[Op<T>],
    validate_every: usize,
) where
    T: Ord + Clone + fmt::Debug,
{
    for (step, op) in ops.iter().enumerate() {
        match op {
            Op::Insert(v) => {
                let fresh = model.insert(v.clone());
                let slot = tree.insert(v.clone());
                assert_eq!(
                    slot.is_some(),
                    fresh,
                    "step {step}: insert({v:?}) disagreed with model"
                );
            }
            Op::Remove(v) => {
                let expected = model.take(v);
                let removed = tree.remove(v);
                assert_eq!(
                    removed, expected,
                    "step {step}: remove({v:?}) disagreed with model"
                );
            }
        }
        assert_eq!(tree.len(), model.len(), "step {step}: len drifted");
        if validate_every > 0 && step % validate_every == 0 {
            compliance::assert_invariants(tree);
        }
    }
    compliance::assert_invariants(tree);
    compliance::assert_membership_matches(tree, model);
}

/// A tree holding `0..n`, inserted in ascending order.
pub fn ascending_tree(n: u32) -> AvlTree<u32> {
    (0..n).collect()
}
