//! Slot arena backing Arbor's index-linked trees.
//!
//! Nodes live in a flat, growable sequence of optional slots and refer to
//! each other by [`SlotIndex`] rather than by owned pointers. Vacated slots
//! are recorded in a free set and handed out again before the arena grows;
//! trailing vacant slots are trimmed by [`Arena::compact`].
//!
//! # Architecture
//!
//! ```text
//! Arena<T>
//! ├── slots: Vec<Option<Node<T>>>   (dense, index = SlotIndex)
//! ├── free:  IndexSet<SlotIndex>    (vacant slots below the tail, LIFO reuse)
//! └── config: ArenaConfig           (initial reservation, slot ceiling)
//! ```
//!
//! # Slot lifecycle
//!
//! - **allocate:** pop the most recently freed index, else refill a vacant
//!   last slot, else append.
//! - **release:** clear the slot; remember it in the free set unless it is
//!   the last slot.
//! - **compact:** pop trailing vacant slots and forget free entries that
//!   pointed into the trimmed tail.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod arena;
pub mod config;
pub mod error;
pub mod handle;
pub mod node;

// Public re-exports for the primary API surface.
pub use arena::Arena;
pub use config::ArenaConfig;
pub use error::{ArenaError, ConfigError};
pub use handle::SlotIndex;
pub use node::{Node, Side};
