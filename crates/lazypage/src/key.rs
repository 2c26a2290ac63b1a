//! Stable keys for paged rows.
//!
//! The rendering engine needs a stable key per virtual index, and the
//! loader slot needs a key that no data item can ever produce. Rather
//! than reserving one magic data value for the loader, the key space is
//! partitioned by a type tag in the high bits, so the loader key is
//! collision-free by construction rather than by convention.

use std::sync::atomic::{AtomicBool, Ordering};

static DATA_OVERFLOW_LOGGED: AtomicBool = AtomicBool::new(false);

/// Key of one virtual row: either a host-provided data key or the
/// reserved loader sentinel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ItemKey {
    /// Host-provided key for a real item.
    Data(u64),
    /// The synthetic trailing loader slot.
    Loader,
}

impl ItemKey {
    /// Mask for the data-value portion (bits 0-61). The high 2 bits are
    /// the type tag: `0b00` for data keys, `0b10` for the loader.
    const VALUE_MASK: u64 = (1u64 << 62) - 1;

    /// Slot id of the loader sentinel. Outside the data range for every
    /// possible data value.
    pub const LOADER_SLOT_ID: u64 = 0b10 << 62;

    /// Converts to a `u64` slot id with guaranteed non-overlapping
    /// ranges: data keys occupy `0x0000..=0x3FFF...`, the loader id sits
    /// in the reserved `0b10` range.
    ///
    /// Data values wider than 62 bits are mixed down into the value
    /// range. That trades a panic for a small collision chance on
    /// extreme keys; prefer keys that fit in 62 bits.
    pub fn to_slot_id(self) -> u64 {
        match self {
            ItemKey::Data(value) if value <= Self::VALUE_MASK => value,
            ItemKey::Data(value) => {
                if !DATA_OVERFLOW_LOGGED.swap(true, Ordering::Relaxed) {
                    log::warn!(
                        "paged item key {value:#018x} exceeds 62 bits; mixing down to the data range"
                    );
                }
                Self::mix_to_value_bits(value)
            }
            ItemKey::Loader => Self::LOADER_SLOT_ID,
        }
    }

    /// True iff this is the loader sentinel.
    pub fn is_loader(self) -> bool {
        matches!(self, ItemKey::Loader)
    }

    // 64-bit finalizer (splitmix64 tail), masked into the data range.
    fn mix_to_value_bits(mut value: u64) -> u64 {
        value ^= value >> 33;
        value = value.wrapping_mul(0xff51afd7ed558ccd);
        value ^= value >> 33;
        value = value.wrapping_mul(0xc4ceb9fe1a85ec53);
        value ^= value >> 33;
        value & Self::VALUE_MASK
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loader_key_never_collides_with_data() {
        // Every in-range data value stays below the reserved loader tag.
        for value in [0, 1, 42, ItemKey::VALUE_MASK] {
            assert!(ItemKey::Data(value).to_slot_id() < ItemKey::LOADER_SLOT_ID);
        }
        assert_eq!(ItemKey::Loader.to_slot_id(), ItemKey::LOADER_SLOT_ID);
    }

    #[test]
    fn test_overflowing_data_key_stays_in_data_range() {
        let slot = ItemKey::Data(u64::MAX).to_slot_id();
        assert_eq!(slot, ItemKey::Data(u64::MAX).to_slot_id());
        assert!(slot < ItemKey::LOADER_SLOT_ID);
    }

    #[test]
    fn test_loader_predicate() {
        assert!(ItemKey::Loader.is_loader());
        assert!(!ItemKey::Data(0).is_loader());
    }
}
