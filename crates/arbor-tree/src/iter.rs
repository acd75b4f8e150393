//! Breadth-first traversal.
//!
//! [`LevelOrder`] only needs an arena and a root slot, so it can walk any
//! index-linked tree snapshot, not just a live [`AvlTree`](crate::AvlTree).
//! It borrows the arena for its whole lifetime, which rules out mutating
//! the tree while a traversal is in progress.

use std::collections::VecDeque;
use std::iter::FusedIterator;

use arbor_arena::{Arena, SlotIndex};

/// Lazy level-order iterator over node values.
pub struct LevelOrder<'a, T> {
    arena: &'a Arena<T>,
    queue: VecDeque<SlotIndex>,
    remaining: Option<usize>,
}

impl<'a, T> LevelOrder<'a, T> {
    /// Traverse the tree rooted at `root` inside `arena`.
    ///
    /// An absent root yields nothing. Links that name vacant slots are
    /// skipped rather than followed.
    pub fn new(arena: &'a Arena<T>, root: Option<SlotIndex>) -> Self {
        Self {
            arena,
            queue: root.into_iter().collect(),
            remaining: None,
        }
    }

    /// Stop after `limit` values.
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.remaining = Some(limit);
        self
    }
}

impl<'a, T> Iterator for LevelOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.remaining == Some(0) {
            return None;
        }
        let arena = self.arena;
        let node = loop {
            let index = self.queue.pop_front()?;
            if let Some(node) = arena.get(index) {
                break node;
            }
        };
        self.queue.extend(node.left());
        self.queue.extend(node.right());
        if let Some(remaining) = self.remaining.as_mut() {
            *remaining -= 1;
        }
        Some(node.value())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.queue.is_empty() {
            return (0, Some(0));
        }
        let upper = self.arena.occupied();
        (0, Some(self.remaining.map_or(upper, |n| n.min(upper))))
    }
}

impl<T> FusedIterator for LevelOrder<'_, T> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AvlTree;

    #[test]
    fn yields_breadth_first() {
        let tree: AvlTree<i32> = (1..=7).collect();
        let values: Vec<_> = tree.iter().copied().collect();
        assert_eq!(values, vec![4, 2, 6, 1, 3, 5, 7]);
    }

    #[test]
    fn limit_truncates() {
        let tree: AvlTree<i32> = (1..=7).collect();
        let values: Vec<_> = tree.iterate(Some(3)).copied().collect();
        assert_eq!(values, vec![4, 2, 6]);
    }

    #[test]
    fn zero_limit_yields_nothing() {
        let tree: AvlTree<i32> = (1..=7).collect();
        assert_eq!(tree.iterate(Some(0)).count(), 0);
    }

    #[test]
    fn limit_above_len_yields_all() {
        let tree: AvlTree<i32> = (1..=5).collect();
        assert_eq!(tree.iterate(Some(100)).count(), 5);
    }

    #[test]
    fn each_call_is_independent() {
        let tree: AvlTree<i32> = (1..=7).collect();
        let mut first = tree.iter();
        first.next();
        first.next();
        let second: Vec<_> = tree.iter().copied().collect();
        assert_eq!(second.len(), 7);
        assert_eq!(first.count(), 5);
    }

    #[test]
    fn free_standing_over_arena_snapshot() {
        let tree: AvlTree<i32> = (1..=3).collect();
        let walk = LevelOrder::new(tree.arena(), tree.root());
        assert_eq!(walk.copied().collect::<Vec<_>>(), vec![2, 1, 3]);
        assert_eq!(LevelOrder::new(tree.arena(), None).count(), 0);
    }

    #[test]
    fn ref_into_iterator() {
        let tree: AvlTree<i32> = (1..=3).collect();
        let mut sum = 0;
        for v in &tree {
            sum += v;
        }
        assert_eq!(sum, 6);
    }

    #[test]
    fn size_hint_bounds_are_consistent() {
        let tree: AvlTree<i32> = (0..10).collect();
        let iter = tree.iterate(Some(4));
        let (lo, hi) = iter.size_hint();
        assert!(lo <= 4);
        assert_eq!(hi, Some(4));
        assert_eq!(iter.count(), 4);
    }
}
