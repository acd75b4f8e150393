//! Arena-backed AVL tree engine.
//!
//! [`AvlTree`] keeps an ordered set of values in an
//! [`Arena`](arbor_arena::Arena) of index-linked nodes. Every structural
//! change walks back up the recorded ancestor chain, recomputing heights
//! and rotating where a node's balance factor reaches ±2, so search,
//! insertion and removal stay logarithmic.
//!
//! # Architecture
//!
//! ```text
//! AvlTree<T>
//! ├── Arena<T>            (owns every node; slot reuse + tail compaction)
//! ├── root: Option<SlotIndex>
//! └── len: usize
//!
//! descend(value) ──► Descent::Found { index, path } | Descent::Vacant { side, path }
//!                        │
//!            insert / remove mutate links, then rebalance(path) bottom-up
//! ```
//!
//! # Failure model
//!
//! Misses are not errors: `position`, `insert` of a duplicate and `remove`
//! of an absent value all return `None` and leave the tree untouched. The
//! only error surface is arena capacity ([`TreeError`], via
//! [`AvlTree::try_insert`]) and invariant diagnostics
//! ([`InvariantViolation`], via [`AvlTree::validate`]).

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
mod insert;
pub mod iter;
mod rebalance;
mod remove;
mod search;
pub mod tree;
pub mod validate;

pub use error::TreeError;
pub use iter::LevelOrder;
pub use tree::AvlTree;
pub use validate::InvariantViolation;

pub use arbor_arena::{Arena, ArenaConfig, ArenaError, ConfigError, Node, Side, SlotIndex};
