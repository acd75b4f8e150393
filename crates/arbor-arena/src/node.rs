//! Tree node records.
//!
//! A [`Node`] is plain data: a value, two index links and a cached subtree
//! height. Links are relations, not ownership; the arena owns every node.

use std::fmt;

use crate::handle::SlotIndex;

/// Which child link of a node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    /// The subtree holding smaller values.
    Left,
    /// The subtree holding larger values.
    Right,
}

impl Side {
    /// The other side.
    #[inline]
    pub fn opposite(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// A single tree element stored in an arena slot.
///
/// Height follows the classic AVL convention: a leaf has height 0 and an
/// absent child counts as -1.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node<T> {
    pub(crate) value: T,
    pub(crate) left: Option<SlotIndex>,
    pub(crate) right: Option<SlotIndex>,
    pub(crate) height: i32,
}

impl<T> Node<T> {
    /// Height of an absent subtree.
    pub const ABSENT_HEIGHT: i32 = -1;

    /// A detached leaf holding `value`.
    pub fn leaf(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
            height: 0,
        }
    }

    /// The stored value.
    #[inline]
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Replace the stored value, returning the previous one.
    ///
    /// Links and height are untouched; the caller is responsible for keeping
    /// the ordering invariant of whatever structure the node belongs to.
    /// This is an arena-level operation: a tree built on the arena only
    /// exposes its nodes through shared references, so tree users cannot
    /// reach it.
    #[inline]
    pub fn replace_value(&mut self, value: T) -> T {
        std::mem::replace(&mut self.value, value)
    }

    /// Consume the node, yielding its value.
    #[inline]
    pub fn into_value(self) -> T {
        self.value
    }

    /// Left child link.
    #[inline]
    pub fn left(&self) -> Option<SlotIndex> {
        self.left
    }

    /// Right child link.
    #[inline]
    pub fn right(&self) -> Option<SlotIndex> {
        self.right
    }

    /// Cached subtree height.
    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Overwrite the cached height.
    #[inline]
    pub fn set_height(&mut self, height: i32) {
        self.height = height;
    }

    /// Child link on `side`.
    #[inline]
    pub fn child(&self, side: Side) -> Option<SlotIndex> {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    /// Point the `side` link at `link`.
    #[inline]
    pub fn set_child(&mut self, side: Side, link: Option<SlotIndex>) {
        match side {
            Side::Left => self.left = link,
            Side::Right => self.right = link,
        }
    }

    /// Redirect whichever link currently names `old` to `new`.
    ///
    /// Returns the side that was rewritten, or `None` if `old` is not a
    /// child of this node.
    pub fn replace_child(&mut self, old: SlotIndex, new: Option<SlotIndex>) -> Option<Side> {
        if self.left == Some(old) {
            self.left = new;
            Some(Side::Left)
        } else if self.right == Some(old) {
            self.right = new;
            Some(Side::Right)
        } else {
            None
        }
    }

    /// Whether both links are empty.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

impl<T: fmt::Display> fmt::Display for Node<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value, f)
    }
}
