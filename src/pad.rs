//! Pad multiplexing.
//!
//! Each physical pin has a GPIO_PAD_CONFIG_n register in the OCP shared
//! block (TRM table 16-12) selecting which peripheral drives it.

use crate::register::RegisterAccess;


// - fields -------------------------------------------------------------------

pub const PAD_MODE_MASK: u32 = 0x0000_000f;
pub const PAD_OPEN_DRAIN: u32 = 0x0000_0010;
pub const PAD_STRENGTH_MASK: u32 = 0x0000_00e0;
pub const PAD_PULL_UP: u32 = 0x0000_0100;
pub const PAD_PULL_DOWN: u32 = 0x0000_0200;
pub const PAD_OUTPUT_OVERRIDE_MASK: u32 = 0x0000_0c00;

/// Mode 0 routes every LED pad on the LaunchPad to the GPIO module.
pub const PAD_MODE_GPIO: u32 = 0;

/// Bits kept when selecting the GPIO function: the low drive-strength bits.
/// Mode, open drain, pulls and output override all clear.
pub const GPIO_PAD_PRESERVE: u32 = 0x0000_0060;


// - configure ----------------------------------------------------------------

/// Selects the GPIO function for the pad whose config register lives at
/// `address`.
pub fn select_gpio<R: RegisterAccess>(registers: &mut R, address: u32) {
    log::debug!("pad {:#010x} &= {:#05x}", address, GPIO_PAD_PRESERVE);
    registers.modify(address, |config| config & GPIO_PAD_PRESERVE);
}

#[inline]
pub const fn mode(config: u32) -> u32 {
    config & PAD_MODE_MASK
}
