//! Height maintenance and rotations shared by insertion and removal.

use arbor_arena::{Node, Side, SlotIndex};

use crate::search::Ancestors;
use crate::tree::AvlTree;

impl<T> AvlTree<T> {
    /// Cached height of `link`, -1 if absent.
    #[inline]
    pub(crate) fn height_of(&self, link: Option<SlotIndex>) -> i32 {
        link.map_or(Node::<T>::ABSENT_HEIGHT, |index| self.arena[index].height())
    }

    /// `height(right) - height(left)` from the children's cached heights.
    pub(crate) fn balance_factor(&self, index: SlotIndex) -> i32 {
        let node = &self.arena[index];
        self.height_of(node.right()) - self.height_of(node.left())
    }

    /// Recompute the cached height of `index` and return its balance factor.
    fn update_height(&mut self, index: SlotIndex) -> i32 {
        let node = &self.arena[index];
        let left = self.height_of(node.left());
        let right = self.height_of(node.right());
        self.arena[index].set_height(1 + left.max(right));
        right - left
    }

    /// Lift the `lift`-side child of `index` above it and return the new
    /// subtree root. `lift == Left` is a right rotation.
    fn rotate(&mut self, index: SlotIndex, lift: Side) -> SlotIndex {
        let pivot = self.arena[index]
            .child(lift)
            .expect("rotation pivot exists on the heavy side");
        let inner = self.arena[pivot].child(lift.opposite());

        self.arena[index].set_child(lift, inner);
        self.arena[pivot].set_child(lift.opposite(), Some(index));

        self.update_height(index);
        self.update_height(pivot);

        tracing::trace!(
            slot = %index,
            pivot = %pivot,
            direction = ?lift.opposite(),
            "rotated"
        );
        pivot
    }

    /// Restore balance at `index` given its freshly computed balance factor.
    ///
    /// Returns the root of the (possibly rotated) subtree.
    fn balance_node(&mut self, index: SlotIndex, balance: i32) -> SlotIndex {
        let heavy = match balance {
            -2 => Side::Left,
            2 => Side::Right,
            _ => return index,
        };
        let child = self.arena[index]
            .child(heavy)
            .expect("a balance of ±2 implies a child on the heavy side");

        // Inner-heavy child: straighten it first (double rotation).
        let child_balance = self.balance_factor(child);
        let inner_heavy = match heavy {
            Side::Left => child_balance > 0,
            Side::Right => child_balance < 0,
        };
        if inner_heavy {
            let straightened = self.rotate(child, heavy.opposite());
            self.arena[index].set_child(heavy, Some(straightened));
        }

        self.rotate(index, heavy)
    }

    /// Walk `path` from its deepest entry to the root, fixing heights and
    /// rotating where needed.
    ///
    /// Each entry must be the parent of the one after it. The shallowest
    /// entry's replacement becomes the tree root when the path started
    /// there.
    pub(crate) fn rebalance(&mut self, mut path: Ancestors) {
        while let Some(index) = path.pop() {
            let balance = self.update_height(index);
            let subtree = self.balance_node(index, balance);

            match path.last() {
                Some(&parent) => {
                    if subtree != index {
                        self.arena[parent].replace_child(index, Some(subtree));
                    }
                }
                None => self.root = Some(subtree),
            }
        }
    }
}
