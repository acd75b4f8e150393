//! The tree handle and its read-only surface.

use std::fmt;

use arbor_arena::{Arena, ArenaConfig, ConfigError, Node, SlotIndex};

use crate::iter::LevelOrder;

/// A self-balancing binary search tree over an arena of slots.
///
/// Holds a set: each value appears at most once. Values are compared with
/// their [`Ord`] implementation.
///
/// Slot indices returned by [`insert`](AvlTree::insert) and
/// [`position`](AvlTree::position) stay valid until the next removal; a
/// removal may move a neighbouring value into a vacated slot or trim the
/// arena tail, so re-resolve indices after removing.
pub struct AvlTree<T> {
    pub(crate) arena: Arena<T>,
    /// Meaningful only while `len > 0`.
    pub(crate) root: Option<SlotIndex>,
    pub(crate) len: usize,
}

impl<T> AvlTree<T> {
    /// An empty tree with an unbounded arena.
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
            root: None,
            len: 0,
        }
    }

    /// An empty tree whose arena uses `config`.
    pub fn with_config(config: ArenaConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            arena: Arena::with_config(config)?,
            root: None,
            len: 0,
        })
    }

    /// Whether the tree holds no values.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of values in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Slot of the root node, or `None` for an empty tree.
    pub fn root(&self) -> Option<SlotIndex> {
        if self.len == 0 {
            None
        } else {
            self.root
        }
    }

    /// Read-only view of the node in slot `index`.
    ///
    /// `None` if `index` is past the arena's current bounds or the slot is
    /// vacant.
    pub fn get_node(&self, index: SlotIndex) -> Option<&Node<T>> {
        self.arena.get(index)
    }

    /// Height of the whole tree: 0 for a single node, -1 when empty.
    pub fn height(&self) -> i32 {
        self.height_of(self.root())
    }

    /// The backing arena, for snapshots and diagnostics.
    ///
    /// Access is read-only, so nodes cannot be rewritten behind the tree's
    /// back:
    ///
    /// ```compile_fail
    /// use arbor_tree::{AvlTree, SlotIndex};
    ///
    /// let tree: AvlTree<u32> = (0..4).collect();
    /// tree.arena().get_mut(SlotIndex(0)).unwrap().replace_value(99);
    /// ```
    pub fn arena(&self) -> &Arena<T> {
        &self.arena
    }

    /// Drop every value.
    pub fn clear(&mut self) {
        self.arena.clear();
        self.root = None;
        self.len = 0;
    }

    /// Breadth-first traversal from the root.
    ///
    /// Yields at most `limit` values when given, otherwise all `len()`
    /// values. Each call starts a fresh traversal.
    pub fn iterate(&self, limit: Option<usize>) -> LevelOrder<'_, T> {
        LevelOrder::new(&self.arena, self.root()).with_limit(limit.unwrap_or(self.len))
    }

    /// Breadth-first traversal over every value.
    pub fn iter(&self) -> LevelOrder<'_, T> {
        self.iterate(None)
    }
}

impl<T> Default for AvlTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for AvlTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AvlTree")
            .field("len", &self.len)
            .field("root", &self.root())
            .field("slots", &self.arena.slot_count())
            .field("level_order", &self.iter().collect::<Vec<_>>())
            .finish()
    }
}

impl<'a, T> IntoIterator for &'a AvlTree<T> {
    type Item = &'a T;
    type IntoIter = LevelOrder<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Ord> FromIterator<T> for AvlTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T: Ord> Extend<T> for AvlTree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}
