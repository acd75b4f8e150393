//! The slot arena.
//!
//! [`Arena`] stores [`Node`]s in a `Vec<Option<Node<T>>>`. A vacated slot
//! stays in place as `None` (distinct from "never allocated", which is simply
//! past the end) and its index is remembered in the free set so the next
//! allocation can reuse it.

use std::ops::{Index, IndexMut};

use indexmap::IndexSet;

use crate::config::ArenaConfig;
use crate::error::{ArenaError, ConfigError};
use crate::handle::SlotIndex;
use crate::node::Node;

/// Flat node storage with free-list reuse and tail compaction.
///
/// Invariants, upheld by every method:
/// - every index in the free set names a vacant slot below the last slot;
/// - after [`compact`](Arena::compact) the last slot (if any) is occupied
///   and the free set holds no index at or beyond the slot count;
/// - `occupied()` equals the number of `Some` slots.
#[derive(Clone, Debug)]
pub struct Arena<T> {
    slots: Vec<Option<Node<T>>>,
    /// Vacant slots available for reuse. Insertion-ordered so reuse is LIFO.
    free: IndexSet<SlotIndex>,
    /// Number of occupied slots.
    live: usize,
    config: ArenaConfig,
}

impl<T> Arena<T> {
    /// An empty, unbounded arena.
    pub fn new() -> Self {
        Self::from_valid_config(ArenaConfig::default())
    }

    /// An empty arena using `config`.
    pub fn with_config(config: ArenaConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_valid_config(config))
    }

    fn from_valid_config(config: ArenaConfig) -> Self {
        Self {
            slots: Vec::with_capacity(config.initial_capacity),
            free: IndexSet::new(),
            live: 0,
            config,
        }
    }

    /// The configuration this arena was built with.
    pub fn config(&self) -> &ArenaConfig {
        &self.config
    }

    /// Store `node`, reusing the most recently freed slot if there is one.
    ///
    /// Fails only when no slot is vacant and the arena is already at
    /// `max_slots`.
    pub fn allocate(&mut self, node: Node<T>) -> Result<SlotIndex, ArenaError> {
        if let Some(index) = self.free.pop() {
            debug_assert!(self.slots[index.as_usize()].is_none());
            self.slots[index.as_usize()] = Some(node);
            self.live += 1;
            return Ok(index);
        }

        // A released tail slot is not in the free set; reuse it rather than
        // stranding it behind a fresh append.
        if matches!(self.slots.last(), Some(None)) {
            let tail = self.slots.len() - 1;
            self.slots[tail] = Some(node);
            self.live += 1;
            return Ok(SlotIndex(tail as u32));
        }

        let requested = self.slots.len() + 1;
        let index = match SlotIndex::from_usize(self.slots.len()) {
            Some(index) if requested <= self.config.max_slots => index,
            _ => {
                tracing::debug!(
                    requested,
                    capacity = self.config.max_slots,
                    "arena allocation refused"
                );
                return Err(ArenaError::CapacityExceeded {
                    requested,
                    capacity: self.config.max_slots,
                });
            }
        };
        self.slots.push(Some(node));
        self.live += 1;
        Ok(index)
    }

    /// Vacate the slot at `index`, returning the node it held.
    ///
    /// The index joins the free set unless it is the current last slot,
    /// which [`compact`](Arena::compact) trims instead. Releasing a vacant
    /// or out-of-range index does nothing and returns `None`.
    pub fn release(&mut self, index: SlotIndex) -> Option<Node<T>> {
        let i = index.as_usize();
        let node = self.slots.get_mut(i)?.take()?;
        self.live -= 1;
        if i + 1 != self.slots.len() {
            self.free.insert(index);
        }
        Some(node)
    }

    /// Trim trailing vacant slots and drop free entries that named them.
    ///
    /// Returns the number of slots trimmed. Indices in the trimmed run are
    /// invalid afterwards; nothing live can point there because the run was
    /// vacant.
    pub fn compact(&mut self) -> usize {
        let before = self.slots.len();
        while matches!(self.slots.last(), Some(None)) {
            self.slots.pop();
        }
        let trimmed = before - self.slots.len();
        if trimmed > 0 {
            let len = self.slots.len();
            let stale = self.free.len();
            self.free.retain(|index| index.as_usize() < len);
            tracing::trace!(
                trimmed,
                stale_free = stale - self.free.len(),
                slots = len,
                "arena compacted"
            );
        }
        trimmed
    }

    /// Drop every node and forget all slots.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
        self.live = 0;
    }

    /// The node at `index`, or `None` if the slot is vacant or out of range.
    #[inline]
    pub fn get(&self, index: SlotIndex) -> Option<&Node<T>> {
        self.slots.get(index.as_usize())?.as_ref()
    }

    /// Mutable access to the node at `index`.
    #[inline]
    pub fn get_mut(&mut self, index: SlotIndex) -> Option<&mut Node<T>> {
        self.slots.get_mut(index.as_usize())?.as_mut()
    }

    /// Whether `index` is within bounds and vacant.
    pub fn is_vacant(&self, index: SlotIndex) -> bool {
        matches!(self.slots.get(index.as_usize()), Some(None))
    }

    /// Number of slots, occupied or vacant.
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Number of occupied slots.
    pub fn occupied(&self) -> usize {
        self.live
    }

    /// Number of vacant slots waiting for reuse.
    pub fn free_count(&self) -> usize {
        self.free.len()
    }

    /// The free set in reuse order (last is reused first).
    pub fn free_slots(&self) -> impl Iterator<Item = SlotIndex> + '_ {
        self.free.iter().copied()
    }

    /// Whether no slot is occupied.
    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    /// Iterate over occupied slots in index order.
    pub fn iter(&self) -> impl Iterator<Item = (SlotIndex, &Node<T>)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| Some((SlotIndex(i as u32), slot.as_ref()?)))
    }
}

impl<T> Default for Arena<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Index<SlotIndex> for Arena<T> {
    type Output = Node<T>;

    /// # Panics
    ///
    /// Panics if the slot is vacant or out of range. Links reachable from a
    /// tree root always name occupied slots.
    #[inline]
    fn index(&self, index: SlotIndex) -> &Node<T> {
        match self.get(index) {
            Some(node) => node,
            None => panic!("slot {index} is vacant"),
        }
    }
}

impl<T> IndexMut<SlotIndex> for Arena<T> {
    #[inline]
    fn index_mut(&mut self, index: SlotIndex) -> &mut Node<T> {
        match self.get_mut(index) {
            Some(node) => node,
            None => panic!("slot {index} is vacant"),
        }
    }
}
