//! Frequency preset slots in persistent storage
//!
//! Slot `n` lives at `base + n * SLOT_RECORD_SIZE`. Each record is
//! postcard-encoded and zero-padded to a fixed size, so a record is always
//! written with a single storage call.

use core::fmt::Write;

use pixelvfo_hal::{NvStorage, StorageError};
use serde::{Deserialize, Serialize};

use crate::menu::ItemTitle;

/// Bytes reserved per slot
pub const SLOT_RECORD_SIZE: usize = 8;

/// One saved preset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SlotRecord {
    /// Frequency in Hz; zero or negative means empty
    pub frequency: i32,
    /// Selected digit when the preset was saved
    pub digit_offset: u8,
}

impl SlotRecord {
    /// The empty sentinel
    pub const EMPTY: SlotRecord = SlotRecord {
        frequency: 0,
        digit_offset: 0,
    };

    pub const fn new(frequency: i32, digit_offset: u8) -> Self {
        Self {
            frequency,
            digit_offset,
        }
    }

    pub const fn is_empty(&self) -> bool {
        self.frequency <= 0
    }
}

/// Fixed-address preset table on top of [`NvStorage`]
pub struct SlotStore<S> {
    storage: S,
    base: u32,
    count: usize,
}

impl<S: NvStorage> SlotStore<S> {
    /// Create a store of `count` slots starting at `base`
    pub fn new(storage: S, base: u32, count: usize) -> Self {
        Self {
            storage,
            base,
            count,
        }
    }

    /// Number of slots
    pub fn count(&self) -> usize {
        self.count
    }

    /// Check that every slot fits inside the storage device
    pub fn fits(&self) -> bool {
        let end = self.base as usize + self.count * SLOT_RECORD_SIZE;
        end <= self.storage.capacity()
    }

    /// Storage address of `slot`
    ///
    /// # Panics
    ///
    /// Panics if `slot` is not below [`count`](Self::count).
    pub fn address(&self, slot: usize) -> u32 {
        assert!(slot < self.count, "slot {} out of range", slot);
        self.base + (slot * SLOT_RECORD_SIZE) as u32
    }

    /// Read a slot
    ///
    /// Never-written, erased and undecodable records read as
    /// [`SlotRecord::EMPTY`]. Only a failing device is an error.
    pub fn get(&mut self, slot: usize) -> Result<SlotRecord, StorageError> {
        let address = self.address(slot);
        let mut bytes = [0u8; SLOT_RECORD_SIZE];
        self.storage.read(address, &mut bytes)?;
        Ok(postcard::from_bytes(&bytes).unwrap_or(SlotRecord::EMPTY))
    }

    /// Write a slot as one record
    pub fn put(&mut self, slot: usize, frequency: i32, digit_offset: u8) -> Result<(), StorageError> {
        let address = self.address(slot);
        let mut bytes = [0u8; SLOT_RECORD_SIZE];
        // Encodes to at most 6 bytes, always fits
        postcard::to_slice(&SlotRecord::new(frequency, digit_offset), &mut bytes)
            .map_err(|_| StorageError::Write)?;
        self.storage.write(address, &bytes)
    }

    /// Mark a slot empty
    pub fn clear(&mut self, slot: usize) -> Result<(), StorageError> {
        self.put(slot, SlotRecord::EMPTY.frequency, 0)
    }

    /// Mark every slot empty
    pub fn clear_all(&mut self) -> Result<(), StorageError> {
        for slot in 0..self.count {
            self.clear(slot)?;
        }
        Ok(())
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn storage_mut(&mut self) -> &mut S {
        &mut self.storage
    }

    pub fn into_inner(self) -> S {
        self.storage
    }
}

/// Menu title for a slot: `"<index>: <frequency>Hz"`, or `"<index>:"` when empty
pub fn slot_title(index: usize, record: &SlotRecord) -> ItemTitle {
    let mut title = ItemTitle::new();
    // Longest case is "65535: -2147483648Hz", inside capacity
    let _ = if record.is_empty() {
        write!(title, "{}:", index)
    } else {
        write!(title, "{}: {:>8}Hz", index, record.frequency)
    };
    title
}
