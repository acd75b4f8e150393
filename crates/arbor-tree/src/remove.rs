//! Removal.
//!
//! A node with at most one child is spliced out: its parent (or the root
//! link) adopts the surviving child. A node with two children keeps its
//! slot and links and takes the value of an in-order neighbour instead:
//!
//! - the **predecessor** (rightmost in the left subtree) when the left
//!   subtree is strictly taller;
//! - otherwise the **successor** (leftmost in the right subtree). Equal
//!   heights always pick the successor, which keeps removal deterministic.
//!
//! The neighbour can have at most one child, on its outer side, and that
//! child is a leaf. When it exists it is moved up into the neighbour's slot
//! and the child's old slot is the one released; otherwise the neighbour's
//! parent drops its link and the neighbour's slot is released.

use arbor_arena::{Side, SlotIndex};

use crate::search::{Ancestors, Descent};
use crate::tree::AvlTree;

impl<T: Ord> AvlTree<T> {
    /// Remove `value`, returning it, or `None` if it was absent.
    pub fn remove(&mut self, value: &T) -> Option<T> {
        let (target, mut path) = match self.descend(value) {
            Descent::Found { index, path } => (index, path),
            Descent::Vacant { .. } => return None,
        };

        if self.len == 1 {
            let node = self
                .arena
                .release(target)
                .expect("found slot is occupied");
            self.clear();
            tracing::debug!("last value removed, arena cleared");
            return Some(node.into_value());
        }

        let node = &self.arena[target];
        let removed = match (node.left(), node.right()) {
            (Some(left), Some(right)) => {
                path.push(target);
                self.replace_with_neighbour(target, left, right, &mut path)
            }
            (left, right) => {
                let survivor = left.or(right);
                match path.last() {
                    Some(&parent) => {
                        self.arena[parent].replace_child(target, survivor);
                    }
                    None => self.root = survivor,
                }
                self.arena
                    .release(target)
                    .expect("found slot is occupied")
                    .into_value()
            }
        };

        self.rebalance(path);
        self.arena.compact();
        self.len -= 1;
        Some(removed)
    }

    /// Move the in-order neighbour's value into `target` and release the
    /// neighbour's slot (or its outer child's).
    ///
    /// Extends `path` down to the neighbour's parent and returns the value
    /// previously held by `target`.
    fn replace_with_neighbour(
        &mut self,
        target: SlotIndex,
        left: SlotIndex,
        right: SlotIndex,
        path: &mut Ancestors,
    ) -> T {
        let use_predecessor = self.arena[left].height() > self.arena[right].height();
        let (mut cursor, inner) = if use_predecessor {
            (left, Side::Right)
        } else {
            (right, Side::Left)
        };

        while let Some(next) = self.arena[cursor].child(inner) {
            path.push(cursor);
            cursor = next;
        }
        let replacement = cursor;
        let parent = *path.last().expect("path ends at the target or below");

        tracing::trace!(
            slot = %target,
            replacement = %replacement,
            predecessor = use_predecessor,
            "replacing two-child node"
        );

        let vacated = match self.arena[replacement].child(inner.opposite()) {
            Some(outer) => {
                debug_assert!(self.arena[outer].is_leaf());
                let lifted = self.arena.release(outer).expect("outer child is occupied");
                std::mem::replace(&mut self.arena[replacement], lifted)
            }
            None => {
                self.arena[parent].replace_child(replacement, None);
                self.arena
                    .release(replacement)
                    .expect("replacement slot is occupied")
            }
        };

        self.arena[target].replace_value(vacated.into_value())
    }
}
