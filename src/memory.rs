//! # Mountable Memory Bus
//!
//! This module provides the `Device` trait and the `Bus` that routes CPU
//! memory accesses to mounted devices. A mount is a contiguous address
//! region `[start, end]` owned by exactly one device; the bus translates
//! absolute addresses to region-relative offsets before dispatching.
//!
//! ## Design Principles
//!
//! - **Offset-based devices**: a device sees offsets 0..size, never the
//!   absolute address it happens to be mounted at.
//! - **No silent faults**: mounting an overlapping region and touching an
//!   unmapped address are both errors. A ROM that jumps into unmapped
//!   space is broken and the host should hear about it.
//! - **Backing-store agnostic**: devices may be plain value stores (RAM),
//!   ignore writes (ROM), or perform side effects on access (memory-mapped
//!   I/O registers). The bus treats each access as an opaque, ordered
//!   event.

use std::ops::RangeInclusive;

/// Abstract interface for memory-mapped hardware devices.
///
/// Devices implement this trait to expose their storage or registers to the
/// CPU. The bus calls these methods with offset-based addressing (0 to
/// size-1) so a device is independent of where it is mounted.
///
/// # Examples
///
/// ```rust
/// use ricoh2a03::Device;
///
/// struct Latch {
///     value: u8,
/// }
///
/// impl Device for Latch {
///     fn read(&self, _offset: u16) -> u8 {
///         self.value
///     }
///
///     fn write(&mut self, _offset: u16, value: u8) {
///         self.value = value;
///     }
///
///     fn size(&self) -> u16 {
///         1
///     }
/// }
/// ```
pub trait Device {
    /// Read a byte at an offset relative to the device's mount start.
    fn read(&self, offset: u16) -> u8;

    /// Write a byte at an offset relative to the device's mount start.
    ///
    /// Side-effectful devices may change internal state here; read-only
    /// devices may ignore the write.
    fn write(&mut self, offset: u16, value: u8);

    /// Size of the device's address space in bytes.
    ///
    /// A device with size zero owns no addresses and cannot be mounted.
    fn size(&self) -> u16;
}

/// Error raised by the bus for routing and mounting faults.
///
/// Both variants indicate a programming or ROM error. The bus never
/// fabricates data for an address nothing owns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BusError {
    /// The address falls outside every mounted region.
    Unmapped(u16),

    /// An attempted mount has a zero-sized device, which owns no
    /// addresses.
    EmptyMount(u16),

    /// An attempted mount intersects an existing mount.
    Overlap {
        /// Start of the rejected region
        new_start: u16,
        /// End of the rejected region (inclusive)
        new_end: u16,
        /// Start of the mount already owning part of that region
        existing_start: u16,
        /// End of the existing mount (inclusive)
        existing_end: u16,
    },
}

impl std::fmt::Display for BusError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            BusError::Unmapped(addr) => {
                write!(f, "No device mounted at address 0x{:04X}", addr)
            }
            BusError::EmptyMount(start) => {
                write!(f, "Cannot mount a zero-sized device at 0x{:04X}", start)
            }
            BusError::Overlap {
                new_start,
                new_end,
                existing_start,
                existing_end,
            } => {
                write!(
                    f,
                    "Mount 0x{:04X}-0x{:04X} overlaps existing mount 0x{:04X}-0x{:04X}",
                    new_start, new_end, existing_start, existing_end
                )
            }
        }
    }
}

impl std::error::Error for BusError {}

/// A device bound to its address region.
struct Mount {
    start: u16,
    end: u16,
    device: Box<dyn Device>,
}

impl Mount {
    fn range(&self) -> RangeInclusive<u16> {
        self.start..=self.end
    }
}

/// Memory bus that routes reads and writes to mounted devices.
///
/// The bus owns an ordered list of mounts. On access it finds the unique
/// mount whose `[start, end]` region contains the address and dispatches
/// with the region-relative offset `addr - start`.
///
/// # Examples
///
/// ```rust
/// use ricoh2a03::{Bus, RamDevice};
///
/// let mut bus = Bus::new();
/// bus.mount(0x0000, Box::new(RamDevice::new(0x2000))).unwrap();
///
/// bus.write(0x1234, 0x42).unwrap();
/// assert_eq!(bus.read(0x1234).unwrap(), 0x42);
///
/// // Nothing owns 0x8000
/// assert!(bus.read(0x8000).is_err());
/// ```
pub struct Bus {
    mounts: Vec<Mount>,
}

impl Bus {
    /// Create a bus with no mounts.
    pub fn new() -> Self {
        Self { mounts: Vec::new() }
    }

    /// Mount a device so it owns `[start, start + device.size() - 1]`.
    ///
    /// A device whose size would run past 0xFFFF is clamped to end at the
    /// top of the address space. Mounting fails if the device is
    /// zero-sized or if the region intersects any existing mount;
    /// existing mounts are preserved on failure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ricoh2a03::{Bus, RamDevice};
    ///
    /// let mut bus = Bus::new();
    /// bus.mount(0x0000, Box::new(RamDevice::new(0x2000))).unwrap();
    ///
    /// // Overlapping mount is rejected
    /// let result = bus.mount(0x1000, Box::new(RamDevice::new(0x1000)));
    /// assert!(result.is_err());
    /// ```
    #[must_use = "ignoring mount errors leaves the region unmapped"]
    pub fn mount(&mut self, start: u16, device: Box<dyn Device>) -> Result<(), BusError> {
        // A zero-sized device would make the end arithmetic below wrap
        // into an inverted or whole-space region
        if device.size() == 0 {
            return Err(BusError::EmptyMount(start));
        }

        let (end_plus_one, overflowed) = start.overflowing_add(device.size());
        let end = if overflowed {
            0xFFFF
        } else {
            end_plus_one.wrapping_sub(1)
        };

        for mount in &self.mounts {
            // Interval overlap test: [a,b] meets [c,d] iff a <= d && b >= c
            if start <= mount.end && end >= mount.start {
                return Err(BusError::Overlap {
                    new_start: start,
                    new_end: end,
                    existing_start: mount.start,
                    existing_end: mount.end,
                });
            }
        }

        self.mounts.push(Mount { start, end, device });
        Ok(())
    }

    /// Read the byte at an absolute address.
    pub fn read(&self, addr: u16) -> Result<u8, BusError> {
        for mount in &self.mounts {
            if mount.range().contains(&addr) {
                return Ok(mount.device.read(addr - mount.start));
            }
        }
        Err(BusError::Unmapped(addr))
    }

    /// Write a byte to an absolute address.
    pub fn write(&mut self, addr: u16, value: u8) -> Result<(), BusError> {
        for mount in &mut self.mounts {
            if mount.start <= addr && addr <= mount.end {
                mount.device.write(addr - mount.start, value);
                return Ok(());
            }
        }
        Err(BusError::Unmapped(addr))
    }

    /// Get a reference to the device mounted at an address, downcast is the
    /// caller's business; this exists for hosts that need to poke a device
    /// after mounting.
    pub fn device_at(&self, addr: u16) -> Option<&dyn Device> {
        self.mounts
            .iter()
            .find(|m| m.range().contains(&addr))
            .map(|m| m.device.as_ref())
    }
}

impl Default for Bus {
    fn default() -> Self {
        Self::new()
    }
}
