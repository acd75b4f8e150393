//! Arena-specific error types.

use std::error::Error;
use std::fmt;

/// Errors that can occur during arena operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArenaError {
    /// Every slot is occupied and the arena may not grow further.
    CapacityExceeded {
        /// Slot count the allocation would have required.
        requested: usize,
        /// Configured slot ceiling.
        capacity: usize,
    },
}

impl fmt::Display for ArenaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CapacityExceeded {
                requested,
                capacity,
            } => {
                write!(
                    f,
                    "arena capacity exceeded: requested {requested} slots, capacity {capacity} slots"
                )
            }
        }
    }
}

impl Error for ArenaError {}

/// Errors from [`ArenaConfig::validate`](crate::ArenaConfig::validate).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// `max_slots` is zero.
    ZeroSlots,
    /// `max_slots` is larger than the `SlotIndex` space.
    SlotSpaceOverflow {
        /// The configured ceiling.
        configured: usize,
    },
    /// `initial_capacity` reserves more slots than `max_slots` allows.
    ReservationExceedsLimit {
        /// The configured reservation.
        initial_capacity: usize,
        /// The configured ceiling.
        max_slots: usize,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroSlots => write!(f, "max_slots must be at least 1"),
            Self::SlotSpaceOverflow { configured } => {
                write!(
                    f,
                    "max_slots {configured} exceeds the slot index space of {}",
                    u32::MAX
                )
            }
            Self::ReservationExceedsLimit {
                initial_capacity,
                max_slots,
            } => {
                write!(
                    f,
                    "initial_capacity {initial_capacity} exceeds max_slots {max_slots}"
                )
            }
        }
    }
}

impl Error for ConfigError {}
