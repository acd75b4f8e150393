//! Benchmark workloads for the Arbor tree.
//!
//! Provides deterministic key sequences and pre-built trees:
//!
//! - [`shuffled_keys`]: a seeded permutation of `0..n`
//! - [`churn_keys`]: seeded remove/insert pairs over a populated key space
//! - [`populated_tree`]: a tree holding `0..n` built from a shuffled order

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use arbor_tree::AvlTree;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Sizes used by the size-parameterised benchmarks.
pub const SIZES: [u32; 3] = [1_000, 10_000, 100_000];

/// A seeded permutation of `0..n`.
pub fn shuffled_keys(n: u32, seed: u64) -> Vec<u32> {
    let mut keys: Vec<u32> = (0..n).collect();
    keys.shuffle(&mut ChaCha8Rng::seed_from_u64(seed));
    keys
}

/// `count` (remove, insert) key pairs for a tree populated with `0..n`.
///
/// Each pair removes a key that is present and inserts one above `n` that
/// is absent, so the tree size stays constant across the workload.
pub fn churn_keys(n: u32, count: usize, seed: u64) -> Vec<(u32, u32)> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut live = shuffled_keys(n, seed ^ 0x9E37_79B9);
    let mut next = n;
    (0..count)
        .map(|_| {
            let slot = rng.gen_range(0..live.len());
            let removed = live[slot];
            live[slot] = next;
            next += 1;
            (removed, live[slot])
        })
        .collect()
}

/// A tree holding `0..n`, inserted in shuffled order.
pub fn populated_tree(n: u32, seed: u64) -> AvlTree<u32> {
    shuffled_keys(n, seed).into_iter().collect()
}
