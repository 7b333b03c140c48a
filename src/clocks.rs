use crate::memmap::PortMap;
use crate::register::RegisterAccess;


// - constants ----------------------------------------------------------------

/// The LaunchPad runs the core straight off its 40 MHz crystal. The PLL is
/// not used for the system clock and no dividers are applied.
pub const CPU_CLOCK_HZ: u32 = 40_000_000;

// GPIO_x_CLK_GATING fields
pub const RUN_CLK_ENABLE: u32 = 1 << 0;
pub const SLP_CLK_ENABLE: u32 = 1 << 8;
pub const DSLP_CLK_ENABLE: u32 = 1 << 16;


// - configure ----------------------------------------------------------------

/// Gates the run-mode clock on for `port`.
///
/// Sleep and deep-sleep clocks are left off. Nothing else in the port may be
/// touched before this has been called.
///
/// Usage:
///
/// ```
/// use launchxl_cc3200::{clocks, memmap, register::sim::MemoryMap};
///
/// let mut registers = MemoryMap::new();
/// clocks::enable_gpio(&mut registers, &memmap::GPIOA1);
/// assert_eq!(registers.peek(memmap::GPIOA1.clock_gate), 1);
/// ```
pub fn enable_gpio<R: RegisterAccess>(registers: &mut R, port: &PortMap) {
    log::debug!("clock gate {:#010x} <= run", port.clock_gate);
    registers.write(port.clock_gate, RUN_CLK_ENABLE);
}
