use core::time::Duration;

use embedded_hal::timer::{CountDown, Periodic};

use crate::blinker::{typestate::Unconfigured, Blinker, Config};
use crate::register::Mmio;
use crate::timer::BusyWait;


// - global static state ------------------------------------------------------

// `no_mangle` is used here to prevent linking different minor
// versions of this crate as that would let you `take` the board
// more than once (one per minor version)
#[no_mangle]
static LAUNCHXL_CC3200_BOARD: () = ();

/// Set to `true` when `take` was called to make `Board` a singleton.
static mut TAKEN: bool = false;


// - Board --------------------------------------------------------------------

/// Exclusive access to the CC3200's memory-mapped peripherals.
pub struct Board {
    pub registers: Mmio,
}

impl Board {
    /// Returns the board *once*
    #[inline]
    pub fn take() -> Option<Self> {
        cortex_m::interrupt::free(|_| {
            if unsafe { TAKEN } {
                None
            } else {
                unsafe { TAKEN = true; }
                Some(unsafe { Board::steal() })
            }
        })
    }

    /// # Safety
    ///
    /// Bypasses the singleton check in [`Board::take`].
    #[inline]
    pub unsafe fn steal() -> Self {
        Board {
            registers: Mmio::steal(),
        }
    }

    /// Hands the peripherals to an unconfigured user-LED blinker paced by
    /// `timer`.
    pub fn blinker<T>(self, timer: T) -> Blinker<Mmio, T, Unconfigured>
    where
        T: CountDown<Time = Duration> + Periodic,
    {
        Blinker::new(self.registers, timer)
    }

    pub fn blinker_with_config<T>(self, timer: T, config: Config) -> Blinker<Mmio, T, Unconfigured>
    where
        T: CountDown<Time = Duration> + Periodic,
    {
        Blinker::with_config(self.registers, timer, config)
    }

    /// Blinker paced by a spin loop calibrated from `config`.
    pub fn busy_wait_blinker(self, config: Config) -> Blinker<Mmio, BusyWait, Unconfigured> {
        Blinker::busy_wait(self.registers, config)
    }
}
