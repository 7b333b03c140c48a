//! Register access.
//!
//! Every peripheral access in this crate goes through [`RegisterAccess`], a
//! capability to read and write a 32-bit word at a physical address. On the
//! board that capability is [`Mmio`]; on the host it is [`sim::MemoryMap`].

use core::ptr::{read_volatile, write_volatile};


// - traits -------------------------------------------------------------------

/// Read/write access to memory-mapped 32-bit registers.
pub trait RegisterAccess {
    /// Reads the word at `address`
    fn read(&self, address: u32) -> u32;

    /// Writes `value` to the word at `address`
    fn write(&mut self, address: u32, value: u32);

    /// Read-modify-write. Not atomic.
    #[inline]
    fn modify<F>(&mut self, address: u32, f: F)
    where
        F: FnOnce(u32) -> u32,
    {
        let value = self.read(address);
        self.write(address, f(value));
    }
}

impl<R> RegisterAccess for &mut R
where
    R: RegisterAccess,
{
    #[inline]
    fn read(&self, address: u32) -> u32 {
        (**self).read(address)
    }

    #[inline]
    fn write(&mut self, address: u32, value: u32) {
        (**self).write(address, value)
    }
}


// - Mmio ---------------------------------------------------------------------

/// Volatile access to the physical address space.
pub struct Mmio {
    _private: (),
}

impl Mmio {
    /// # Safety
    ///
    /// Only one `Mmio` may be live at a time and every address handed to it
    /// must be a valid, aligned CC3200 register. See [`crate::Board::take`].
    pub const unsafe fn steal() -> Self {
        Self { _private: () }
    }
}

impl RegisterAccess for Mmio {
    #[inline(always)]
    fn read(&self, address: u32) -> u32 {
        unsafe { read_volatile(address as *const u32) }
    }

    #[inline(always)]
    fn write(&mut self, address: u32, value: u32) {
        unsafe { write_volatile(address as *mut u32, value) }
    }
}


// - sim ----------------------------------------------------------------------

pub mod sim {
    //! A simulated CC3200 address space for host-side testing.
    //!
    //! Plain addresses behave like RAM: unset words read as zero. Address
    //! ranges registered with [`MemoryMap::map_masked_window`] behave like
    //! a GPIO data register, where address bits [9:2] select which bits of
    //! the underlying word a read or write can see.

    use heapless::{FnvIndexMap, Vec};

    use super::RegisterAccess;

    /// Distinct words the simulator can hold.
    pub const CAPACITY: usize = 64;

    /// Writes kept in the write log.
    pub const LOG_CAPACITY: usize = 256;

    const MAX_WINDOWS: usize = 8;

    /// Size of a masked data window in bytes.
    pub const WINDOW_SIZE: u32 = 0x400;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Write {
        pub address: u32,
        pub value: u32,
    }

    #[derive(Debug, Default)]
    pub struct MemoryMap {
        words: FnvIndexMap<u32, u32, CAPACITY>,
        windows: Vec<u32, MAX_WINDOWS>,
        log: Vec<Write, LOG_CAPACITY>,
    }

    impl MemoryMap {
        pub fn new() -> Self {
            Self::default()
        }

        /// Sets a word without recording it in the write log.
        pub fn preset(&mut self, address: u32, value: u32) {
            self.store(address, value);
        }

        /// Returns the raw word at `address`, ignoring any window mask.
        pub fn peek(&self, address: u32) -> u32 {
            self.words.get(&address).copied().unwrap_or(0)
        }

        /// Treats `[base, base + WINDOW_SIZE)` as a bit-masked data window
        /// backed by the word at `base`.
        pub fn map_masked_window(&mut self, base: u32) {
            if self.windows.push(base).is_err() {
                panic!("simulator window table full");
            }
        }

        /// Every write since construction or the last [`Self::clear_log`].
        pub fn log(&self) -> &[Write] {
            &self.log
        }

        pub fn clear_log(&mut self) {
            self.log.clear();
        }

        /// Values written anywhere inside the masked window at `base`.
        pub fn writes_to_window(&self, base: u32) -> impl Iterator<Item = Write> + '_ {
            self.log
                .iter()
                .copied()
                .filter(move |w| w.address >= base && w.address < base + WINDOW_SIZE)
        }

        fn window_for(&self, address: u32) -> Option<(u32, u32)> {
            self.windows
                .iter()
                .find(|&&base| address >= base && address < base + WINDOW_SIZE)
                .map(|&base| (base, ((address - base) >> 2) & 0xff))
        }

        fn store(&mut self, address: u32, value: u32) {
            if self.words.insert(address, value).is_err() {
                panic!("simulator memory full at {:#010x}", address);
            }
        }
    }

    impl RegisterAccess for MemoryMap {
        fn read(&self, address: u32) -> u32 {
            match self.window_for(address) {
                Some((base, mask)) => self.peek(base) & mask,
                None => self.peek(address),
            }
        }

        fn write(&mut self, address: u32, value: u32) {
            if self.log.push(Write { address, value }).is_err() {
                panic!("simulator write log full");
            }
            match self.window_for(address) {
                Some((base, mask)) => {
                    let word = (self.peek(base) & !mask) | (value & mask);
                    self.store(base, word);
                }
                None => self.store(address, value),
            }
        }
    }


    // - tests ----------------------------------------------------------------

}
