//! GPIO port operations.
//!
//! The CC3200 encodes a bit mask in the address of the data register, so
//! [`Port::write`] and [`Port::read`] only ever see the bits they ask for.
//! No read-modify-write is needed to drive a subset of a port.

use crate::memmap::PortMap;
use crate::register::RegisterAccess;


// - Port ---------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Port {
    map: PortMap,
}

impl Port {
    pub const fn new(map: PortMap) -> Self {
        Self { map }
    }

    pub const fn map(&self) -> &PortMap {
        &self.map
    }

    /// Turns the `mask` pins into outputs, leaving the other pins alone.
    pub fn set_output<R: RegisterAccess>(&self, registers: &mut R, mask: u8) {
        log::debug!("gpio {:#010x} dir |= {:#04x}", self.map.base, mask);
        registers.modify(self.map.dir(), |dir| dir | mask as u32);
    }

    /// Drives the `mask` pins to the matching bits of `value` in a single
    /// store.
    #[inline]
    pub fn write<R: RegisterAccess>(&self, registers: &mut R, mask: u8, value: u8) {
        registers.write(self.map.data(mask), (value & mask) as u32);
    }

    /// Returns the current level of the `mask` pins. Other bits read as 0.
    #[inline]
    pub fn read<R: RegisterAccess>(&self, registers: &R, mask: u8) -> u8 {
        (registers.read(self.map.data(mask)) & mask as u32) as u8
    }
}
