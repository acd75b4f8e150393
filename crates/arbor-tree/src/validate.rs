//! Structural self-check.
//!
//! [`AvlTree::validate`] walks the whole tree and its arena and reports the
//! first broken invariant. It is O(n) and meant for tests and debugging.

use std::error::Error;
use std::fmt;

use arbor_arena::{Node, SlotIndex};

use crate::tree::AvlTree;

/// A broken tree or arena invariant.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InvariantViolation {
    /// A link names a vacant or out-of-range slot.
    DanglingLink {
        /// The slot that was expected to hold a node.
        index: SlotIndex,
    },
    /// A value is outside the range its ancestors allow.
    OrderViolated {
        /// The misplaced node.
        index: SlotIndex,
    },
    /// A node's subtree heights differ by more than one.
    Unbalanced {
        /// The unbalanced node.
        index: SlotIndex,
        /// `height(right) - height(left)`.
        balance: i32,
    },
    /// A cached height disagrees with the children.
    HeightMismatch {
        /// The node with the stale height.
        index: SlotIndex,
        /// Height stored in the node.
        stored: i32,
        /// Height computed from the children.
        computed: i32,
    },
    /// `len()`, the reachable node count and the occupied slot count differ.
    SizeMismatch {
        /// Logical size counter.
        len: usize,
        /// Nodes reachable from the root.
        reachable: usize,
        /// Occupied arena slots.
        occupied: usize,
    },
    /// A free-set entry names an occupied slot or the tail.
    StaleFreeEntry {
        /// The offending entry.
        index: SlotIndex,
    },
    /// The arena ends in a vacant slot.
    TrailingVacancy {
        /// Number of slots in the arena.
        slot_count: usize,
    },
}

impl fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DanglingLink { index } => write!(f, "link to vacant slot {index}"),
            Self::OrderViolated { index } => {
                write!(f, "slot {index} breaks search-tree ordering")
            }
            Self::Unbalanced { index, balance } => {
                write!(f, "slot {index} has balance factor {balance}")
            }
            Self::HeightMismatch {
                index,
                stored,
                computed,
            } => write!(
                f,
                "slot {index} caches height {stored}, children imply {computed}"
            ),
            Self::SizeMismatch {
                len,
                reachable,
                occupied,
            } => write!(
                f,
                "size mismatch: len {len}, reachable {reachable}, occupied {occupied}"
            ),
            Self::StaleFreeEntry { index } => {
                write!(f, "free set names slot {index}, which is not an interior vacancy")
            }
            Self::TrailingVacancy { slot_count } => {
                write!(f, "arena of {slot_count} slots ends in a vacant slot")
            }
        }
    }
}

impl Error for InvariantViolation {}

impl<T: Ord> AvlTree<T> {
    /// Check ordering, balance, cached heights, size accounting and arena
    /// hygiene.
    pub fn validate(&self) -> Result<(), InvariantViolation> {
        let mut reachable = 0;
        self.check_subtree(self.root(), None, None, &mut reachable)?;

        let occupied = self.arena.occupied();
        if reachable != self.len || occupied != self.len {
            return Err(InvariantViolation::SizeMismatch {
                len: self.len,
                reachable,
                occupied,
            });
        }

        let slot_count = self.arena.slot_count();
        for index in self.arena.free_slots() {
            if !self.arena.is_vacant(index) || index.as_usize() + 1 >= slot_count {
                return Err(InvariantViolation::StaleFreeEntry { index });
            }
        }
        if slot_count > 0 && self.arena.is_vacant(SlotIndex(slot_count as u32 - 1)) {
            return Err(InvariantViolation::TrailingVacancy { slot_count });
        }
        Ok(())
    }

    /// Validate the subtree at `link` against exclusive bounds and return
    /// its height.
    fn check_subtree(
        &self,
        link: Option<SlotIndex>,
        lower: Option<&T>,
        upper: Option<&T>,
        reachable: &mut usize,
    ) -> Result<i32, InvariantViolation> {
        let Some(index) = link else {
            return Ok(Node::<T>::ABSENT_HEIGHT);
        };
        let node = self
            .arena
            .get(index)
            .ok_or(InvariantViolation::DanglingLink { index })?;
        *reachable += 1;
        if *reachable > self.arena.occupied() {
            // More visits than nodes means a cycle; report it as a size fault.
            return Err(InvariantViolation::SizeMismatch {
                len: self.len,
                reachable: *reachable,
                occupied: self.arena.occupied(),
            });
        }

        let value = node.value();
        if lower.is_some_and(|lo| value <= lo) || upper.is_some_and(|hi| value >= hi) {
            return Err(InvariantViolation::OrderViolated { index });
        }

        let left = self.check_subtree(node.left(), lower, Some(value), reachable)?;
        let right = self.check_subtree(node.right(), Some(value), upper, reachable)?;

        let computed = 1 + left.max(right);
        if node.height() != computed {
            return Err(InvariantViolation::HeightMismatch {
                index,
                stored: node.height(),
                computed,
            });
        }
        let balance = right - left;
        if !(-1..=1).contains(&balance) {
            return Err(InvariantViolation::Unbalanced { index, balance });
        }
        Ok(computed)
    }
}
