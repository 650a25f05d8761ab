//! Persistent storage abstractions
//!
//! The UI keeps its frequency presets in a small byte-addressed memory
//! (EEPROM, or an emulated EEPROM page on flash). Callers lay records out at
//! fixed addresses; the storage itself knows nothing about their contents.

/// Errors from persistent storage operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StorageError {
    /// Address range falls outside the device
    OutOfBounds,
    /// Device reported a read failure
    Read,
    /// Device reported a write failure
    Write,
}

/// Byte-addressed non-volatile storage
///
/// Both operations are synchronous and complete before returning. A single
/// `write` call must land as a unit: implementations backed by paged flash
/// are expected to commit the whole slice or nothing.
pub trait NvStorage {
    /// Total addressable size in bytes
    fn capacity(&self) -> usize;

    /// Fill `buffer` with the bytes starting at `address`
    fn read(&mut self, address: u32, buffer: &mut [u8]) -> Result<(), StorageError>;

    /// Write `data` starting at `address`
    fn write(&mut self, address: u32, data: &[u8]) -> Result<(), StorageError>;
}

impl<T: NvStorage + ?Sized> NvStorage for &mut T {
    fn capacity(&self) -> usize {
        (**self).capacity()
    }

    fn read(&mut self, address: u32, buffer: &mut [u8]) -> Result<(), StorageError> {
        (**self).read(address, buffer)
    }

    fn write(&mut self, address: u32, data: &[u8]) -> Result<(), StorageError> {
        (**self).write(address, data)
    }
}

/// Value of an erased EEPROM/flash byte
pub const ERASED_BYTE: u8 = 0xFF;

/// RAM-backed storage image
///
/// Behaves like a freshly erased EEPROM of `N` bytes. Used for host testing
/// and as the shadow copy on boards that persist a whole page at once.
#[derive(Clone)]
pub struct RamStorage<const N: usize> {
    bytes: [u8; N],
    writes: u32,
}

impl<const N: usize> Default for RamStorage<N> {
    fn default() -> Self {
        Self::erased()
    }
}

impl<const N: usize> RamStorage<N> {
    /// Create an image with every byte erased (0xFF)
    pub const fn erased() -> Self {
        Self {
            bytes: [ERASED_BYTE; N],
            writes: 0,
        }
    }

    /// Create an image with every byte zeroed
    pub const fn zeroed() -> Self {
        Self {
            bytes: [0; N],
            writes: 0,
        }
    }

    /// Raw contents of the image
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Number of `write` calls that reached the image
    pub fn write_count(&self) -> u32 {
        self.writes
    }

    fn range(address: u32, len: usize) -> Result<core::ops::Range<usize>, StorageError> {
        let start = address as usize;
        let end = start.checked_add(len).ok_or(StorageError::OutOfBounds)?;
        if end > N {
            return Err(StorageError::OutOfBounds);
        }
        Ok(start..end)
    }
}

impl<const N: usize> NvStorage for RamStorage<N> {
    fn capacity(&self) -> usize {
        N
    }

    fn read(&mut self, address: u32, buffer: &mut [u8]) -> Result<(), StorageError> {
        let range = Self::range(address, buffer.len())?;
        buffer.copy_from_slice(&self.bytes[range]);
        Ok(())
    }

    fn write(&mut self, address: u32, data: &[u8]) -> Result<(), StorageError> {
        let range = Self::range(address, data.len())?;
        self.bytes[range].copy_from_slice(data);
        self.writes = self.writes.wrapping_add(1);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_erased_image_reads_ff() {
        let mut storage: RamStorage<16> = RamStorage::erased();
        let mut buf = [0u8; 4];
        storage.read(4, &mut buf).unwrap();
        assert_eq!(buf, [ERASED_BYTE; 4]);
    }

    #[test]
    fn test_write_then_read() {
        let mut storage: RamStorage<16> = RamStorage::zeroed();
        storage.write(3, &[1, 2, 3]).unwrap();

        let mut buf = [0u8; 5];
        storage.read(2, &mut buf).unwrap();
        assert_eq!(buf, [0, 1, 2, 3, 0]);
        assert_eq!(storage.write_count(), 1);
    }

    #[test]
    fn test_out_of_bounds() {
        let mut storage: RamStorage<8> = RamStorage::erased();
        let mut buf = [0u8; 4];
        assert_eq!(storage.read(6, &mut buf), Err(StorageError::OutOfBounds));
        assert_eq!(storage.write(8, &[0]), Err(StorageError::OutOfBounds));
        assert_eq!(storage.write(u32::MAX, &[0]), Err(StorageError::OutOfBounds));
        // Failed writes leave the image untouched
        assert_eq!(storage.write_count(), 0);
    }

    #[test]
    fn test_mut_ref_forwards() {
        fn poke<S: NvStorage>(mut storage: S) -> usize {
            storage.write(0, &[7]).unwrap();
            storage.capacity()
        }

        let mut storage: RamStorage<8> = RamStorage::zeroed();
        assert_eq!(poke(&mut storage), 8);
        assert_eq!(storage.as_bytes()[0], 7);
    }
}
