//! Arena configuration parameters.

use crate::error::ConfigError;

/// Configuration for a slot arena.
///
/// Validated at construction; immutable afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArenaConfig {
    /// Number of slots to reserve up front.
    ///
    /// Default: 0. Purely a capacity hint; it does not create slots.
    pub initial_capacity: usize,

    /// Ceiling on the number of slots (occupied or vacant).
    ///
    /// Default: [`ArenaConfig::MAX_SLOTS`], the whole `SlotIndex` space.
    /// Vacant slots are always reused before the arena grows, so in practice
    /// this bounds the number of live nodes.
    pub max_slots: usize,
}

impl ArenaConfig {
    /// Size of the `SlotIndex` space.
    pub const MAX_SLOTS: usize = u32::MAX as usize;

    /// A config that reserves `initial_capacity` slots and is otherwise
    /// unbounded.
    pub fn new(initial_capacity: usize) -> Self {
        Self {
            initial_capacity,
            max_slots: Self::MAX_SLOTS,
        }
    }

    /// Builder-style slot ceiling.
    pub fn with_max_slots(mut self, max_slots: usize) -> Self {
        self.max_slots = max_slots;
        self
    }

    /// Check that the parameters are usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_slots == 0 {
            return Err(ConfigError::ZeroSlots);
        }
        if self.max_slots > Self::MAX_SLOTS {
            return Err(ConfigError::SlotSpaceOverflow {
                configured: self.max_slots,
            });
        }
        if self.initial_capacity > self.max_slots {
            return Err(ConfigError::ReservationExceedsLimit {
                initial_capacity: self.initial_capacity,
                max_slots: self.max_slots,
            });
        }
        Ok(())
    }
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self::new(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid_and_unbounded() {
        let config = ArenaConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.max_slots, ArenaConfig::MAX_SLOTS);
        assert_eq!(config.initial_capacity, 0);
    }

    #[test]
    fn zero_slots_rejected() {
        let config = ArenaConfig::new(0).with_max_slots(0);
        assert_eq!(config.validate(), Err(ConfigError::ZeroSlots));
    }

    #[test]
    fn reservation_above_limit_rejected() {
        let config = ArenaConfig::new(64).with_max_slots(16);
        match config.validate() {
            Err(ConfigError::ReservationExceedsLimit {
                initial_capacity: 64,
                max_slots: 16,
            }) => {}
            other => panic!("expected ReservationExceedsLimit, got {other:?}"),
        }
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn slot_space_overflow_rejected() {
        let config = ArenaConfig::new(0).with_max_slots(ArenaConfig::MAX_SLOTS + 1);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::SlotSpaceOverflow { .. })
        ));
    }
}
