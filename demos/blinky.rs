//! Blinks the three LaunchPad user LEDs together at 1 Hz.
//!
//! Paced by SysTick unless built with `--features busy-wait`, which uses the
//! calibrated spin loop instead.

#![no_main]
#![no_std]

use cortex_m_rt::entry;
use panic_halt as _;

use launchxl_cc3200 as launchpad;

#[cfg(feature = "log-semihosting")]
mod utilities;


// - pacing -------------------------------------------------------------------

use launchpad::blinker::typestate::Unconfigured;
use launchpad::{Blinker, Board, Config, Mmio};

cfg_if::cfg_if! {
    if #[cfg(feature = "busy-wait")] {
        use launchpad::timer::BusyWait;

        fn blinker(board: Board, _cp: launchpad::cortex_m::Peripherals)
            -> Blinker<Mmio, BusyWait, Unconfigured>
        {
            board.busy_wait_blinker(Config::DEFAULT)
        }
    } else {
        use launchpad::timer::SysTickTimer;

        fn blinker(board: Board, cp: launchpad::cortex_m::Peripherals)
            -> Blinker<Mmio, SysTickTimer, Unconfigured>
        {
            let timer = SysTickTimer::new(cp.SYST, launchpad::clocks::CPU_CLOCK_HZ);
            board.blinker_with_config(timer, Config::DEFAULT)
        }
    }
}


// - entry point --------------------------------------------------------------

#[entry]
fn main() -> ! {
    #[cfg(feature = "log-semihosting")]
    utilities::logger::init();

    let cp = launchpad::cortex_m::Peripherals::take().unwrap();
    let board = Board::take().unwrap();

    // - main loop ------------------------------------------------------------

    blinker(board, cp)
        .init()
        .start()
        .run()
}
