//! Arbor: an AVL tree whose nodes live in a compact, index-addressed arena.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the Arbor sub-crates. For most users, adding `arbor` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use arbor::prelude::*;
//!
//! let mut tree: AvlTree<u32> = (0..1000).collect();
//!
//! // Ascending inserts fill slots in order; the root settles on 511.
//! assert_eq!(tree.root(), Some(SlotIndex(511)));
//! assert_eq!(tree.position(&42), Some(SlotIndex(42)));
//!
//! // Removing the root moves its successor's value into the root slot.
//! assert_eq!(tree.remove(&511), Some(511));
//! assert_eq!(tree.get_node(SlotIndex(511)).map(|n| *n.value()), Some(512));
//!
//! // Bounded breadth-first traversal.
//! let first: Vec<u32> = tree.iterate(Some(3)).copied().collect();
//! assert_eq!(first.len(), 3);
//! assert_eq!(first[0], 512);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`arena`] | `arbor-arena` | Slot arena, `Node`, `SlotIndex`, arena configuration |
//! | [`tree`] | `arbor-tree` | `AvlTree`, level-order iterator, invariant checker |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Slot storage and node records (`arbor-arena`).
///
/// Most users only need [`arena::SlotIndex`] and [`arena::Node`] from this
/// module; both are also available in the [`prelude`].
pub use arbor_arena as arena;

/// The balanced tree engine (`arbor-tree`).
///
/// [`tree::AvlTree`] is the main entry point; [`tree::LevelOrder`] is the
/// iterator behind [`tree::AvlTree::iterate`].
pub use arbor_tree as tree;

/// Common imports for typical Arbor usage.
///
/// ```rust
/// use arbor::prelude::*;
/// ```
pub mod prelude {
    // Arena
    pub use arbor_arena::{ArenaConfig, Node, Side, SlotIndex};

    // Errors
    pub use arbor_arena::{ArenaError, ConfigError};
    pub use arbor_tree::{InvariantViolation, TreeError};

    // Tree
    pub use arbor_tree::{AvlTree, LevelOrder};
}
