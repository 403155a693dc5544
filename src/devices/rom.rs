//! ROM device implementation.
//!
//! Provides read-only storage via the Device trait.

use crate::memory::Device;

/// Read-only memory device.
///
/// `RomDevice` stores immutable data. Writes are silently ignored,
/// matching typical ROM hardware behavior; the bus-level routing still
/// succeeds, so a write to ROM is not a fault.
///
/// # Examples
///
/// ```rust
/// use ricoh2a03::{Device, RomDevice};
///
/// let mut rom = RomDevice::new(vec![0xEA, 0xEA, 0xEA]);
///
/// assert_eq!(rom.read(0), 0xEA);
///
/// rom.write(0, 0xFF);
/// assert_eq!(rom.read(0), 0xEA); // unchanged
/// ```
pub struct RomDevice {
    data: Vec<u8>,
}

impl RomDevice {
    /// Create a new ROM device with the specified contents.
    ///
    /// The data is immutable after construction. A host typically places
    /// interrupt vectors in the last bytes before mounting at the top of
    /// the address space.
    ///
    /// # Panics
    ///
    /// Panics if `data` is empty; a zero-sized device owns no addresses
    /// and cannot be mounted.
    pub fn new(data: Vec<u8>) -> Self {
        assert!(!data.is_empty(), "ROM device must have nonzero contents");
        Self { data }
    }
}

impl Device for RomDevice {
    fn read(&self, offset: u16) -> u8 {
        self.data[offset as usize]
    }

    fn write(&mut self, _offset: u16, _value: u8) {
        // Writes to ROM are ignored
    }

    fn size(&self) -> u16 {
        self.data.len() as u16
    }
}
