//! Slot handles.
//!
//! A [`SlotIndex`] names a position in an [`Arena`](crate::Arena). It is
//! stable while the slot stays occupied; once the slot is released the same
//! index may be handed out again for an unrelated node.

use std::fmt;

/// Position of a node within an [`Arena`](crate::Arena).
///
/// Indices are dense (`0..slot_count`) and reused after release, so a
/// handle held across a removal must be re-resolved before use.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SlotIndex(pub u32);

impl SlotIndex {
    /// Largest representable slot index.
    pub const MAX: SlotIndex = SlotIndex(u32::MAX - 1);

    /// The index as a `usize`, for addressing slot storage.
    #[inline]
    pub fn as_usize(self) -> usize {
        self.0 as usize
    }

    /// Convert a storage position back into a handle.
    ///
    /// Returns `None` if `index` does not fit the handle's index space.
    #[inline]
    pub fn from_usize(index: usize) -> Option<Self> {
        u32::try_from(index)
            .ok()
            .filter(|&i| i <= Self::MAX.0)
            .map(SlotIndex)
    }
}

impl fmt::Display for SlotIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for SlotIndex {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usize_round_trip() {
        let idx = SlotIndex(511);
        assert_eq!(idx.as_usize(), 511);
        assert_eq!(SlotIndex::from_usize(511), Some(idx));
    }

    #[test]
    fn from_usize_rejects_out_of_space() {
        assert_eq!(SlotIndex::from_usize(u32::MAX as usize), None);
        assert_eq!(
            SlotIndex::from_usize(SlotIndex::MAX.as_usize()),
            Some(SlotIndex::MAX)
        );
    }

    #[test]
    fn display_is_bare_number() {
        assert_eq!(SlotIndex(42).to_string(), "42");
    }
}
