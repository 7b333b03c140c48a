//! Periodic count-down timers for pacing the blinker.
//!
//! Both timers implement `embedded_hal::timer::CountDown` with a
//! `core::time::Duration` time type, so the blinker can be paced either by
//! a spin loop calibrated against an assumed clock frequency, or by the
//! Cortex-M SysTick counter.

use core::time::Duration;

use cortex_m::peripheral::syst::SystClkSource;
use cortex_m::peripheral::SYST;
use embedded_hal::timer::{CountDown, Periodic};

use crate::clocks;


// - Calibration --------------------------------------------------------------

/// The assumptions a spin loop's timing rests on.
///
/// A period of `n` iterations stands for `n * cycles_per_iteration` core
/// cycles. On target those cycles are burnt with `cortex_m::asm::delay`, so
/// the period is only off if the core clock differs or flash wait states
/// stretch the delay loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Calibration {
    pub cpu_clock_hz: u32,
    /// Core cycles one iteration stands for, `0` is treated as `1`.
    pub cycles_per_iteration: u32,
}

impl Calibration {
    pub const DEFAULT: Calibration = Calibration {
        cpu_clock_hz: clocks::CPU_CLOCK_HZ,
        cycles_per_iteration: 2,
    };

    /// At least 1, so a calibrated period never collapses to nothing.
    pub const fn iterations_per_ms(&self) -> u32 {
        let cycles = if self.cycles_per_iteration == 0 { 1 } else { self.cycles_per_iteration };
        let iterations = self.cpu_clock_hz / cycles / 1_000;
        if iterations == 0 { 1 } else { iterations }
    }

    /// Loop iterations covering `duration`, saturating at `u32::MAX`.
    pub fn iterations(&self, duration: Duration) -> u32 {
        let iterations = duration.as_millis() * self.iterations_per_ms() as u128;
        if iterations > u32::MAX as u128 {
            u32::MAX
        } else {
            iterations as u32
        }
    }
}

impl Default for Calibration {
    fn default() -> Self {
        Self::DEFAULT
    }
}


// - BusyWait -----------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Period {
    Calibrated(Calibration),
    Fixed(u32),
}

/// Busy-wait timer.
///
/// On target the first `wait` of a period spins through all of it in one
/// `cortex_m::asm::delay`. Elsewhere each `wait` burns a single iteration,
/// so the count can be observed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusyWait {
    period: Period,
    cycles_per_iteration: u32,
    reload: u32,
    remaining: u32,
}

impl BusyWait {
    /// Converts every `start` timeout into an iteration count.
    pub const fn new(calibration: Calibration) -> Self {
        Self {
            period: Period::Calibrated(calibration),
            cycles_per_iteration: calibration.cycles_per_iteration,
            reload: 0,
            remaining: 0,
        }
    }

    /// Spins exactly `iterations` times per period, whatever timeout `start`
    /// is given.
    pub const fn fixed(iterations: u32) -> Self {
        Self {
            period: Period::Fixed(iterations),
            cycles_per_iteration: Calibration::DEFAULT.cycles_per_iteration,
            reload: iterations,
            remaining: iterations,
        }
    }

    /// Iterations per period as currently configured.
    pub const fn reload(&self) -> u32 {
        self.reload
    }
}

impl Periodic for BusyWait {}

impl CountDown for BusyWait {
    type Time = Duration;

    fn start<T>(&mut self, timeout: T)
    where
        T: Into<Duration>,
    {
        self.reload = match self.period {
            Period::Calibrated(calibration) => calibration.iterations(timeout.into()),
            Period::Fixed(iterations) => iterations,
        };
        self.remaining = self.reload;
    }

    fn wait(&mut self) -> nb::Result<(), void::Void> {
        if self.remaining == 0 {
            self.remaining = self.reload;
            Ok(())
        } else {
            self.remaining -= spin(self.remaining, self.cycles_per_iteration);
            Err(nb::Error::WouldBlock)
        }
    }
}

/// Burns up to `iterations` iterations and returns how many it burnt.
#[cfg(all(target_arch = "arm", target_os = "none"))]
fn spin(iterations: u32, cycles_per_iteration: u32) -> u32 {
    for _ in 0..cycles_per_iteration {
        cortex_m::asm::delay(iterations);
    }
    iterations
}

#[cfg(not(all(target_arch = "arm", target_os = "none")))]
fn spin(_iterations: u32, _cycles_per_iteration: u32) -> u32 {
    core::hint::spin_loop();
    1
}


// - SysTickTimer -------------------------------------------------------------

/// Wall-clock timer counting 1 ms SysTick wraps.
///
/// SysTick's 24-bit reload cannot hold half a second at 40 MHz, so the
/// counter is set to wrap every millisecond and `wait` counts wraps.
pub struct SysTickTimer {
    syst: SYST,
    period_ms: u32,
    elapsed_ms: u32,
}

impl SysTickTimer {
    pub fn new(mut syst: SYST, cpu_clock_hz: u32) -> Self {
        syst.disable_counter();
        syst.disable_interrupt();
        syst.set_clock_source(SystClkSource::Core);
        syst.set_reload(millisecond_reload(cpu_clock_hz));
        syst.clear_current();
        Self {
            syst,
            period_ms: 0,
            elapsed_ms: 0,
        }
    }

    /// Releases the SysTick peripheral
    pub fn free(mut self) -> SYST {
        self.syst.disable_counter();
        self.syst
    }
}

/// SysTick reload value for a 1 ms wrap. Never 0, which would stop the
/// counter from wrapping at all.
pub const fn millisecond_reload(cpu_clock_hz: u32) -> u32 {
    let cycles = cpu_clock_hz / 1_000;
    if cycles < 2 { 1 } else { cycles - 1 }
}

impl Periodic for SysTickTimer {}

impl CountDown for SysTickTimer {
    type Time = Duration;

    fn start<T>(&mut self, timeout: T)
    where
        T: Into<Duration>,
    {
        let ms = timeout.into().as_millis();
        self.period_ms = if ms > u32::MAX as u128 { u32::MAX } else { ms as u32 };
        self.elapsed_ms = 0;

        self.syst.disable_counter();
        self.syst.clear_current();
        self.syst.enable_counter();
    }

    fn wait(&mut self) -> nb::Result<(), void::Void> {
        if self.syst.has_wrapped() {
            self.elapsed_ms += 1;
        }
        if self.elapsed_ms >= self.period_ms {
            self.elapsed_ms = 0;
            Ok(())
        } else {
            Err(nb::Error::WouldBlock)
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_calibration_matches_launchpad() {
        let calibration = Calibration::DEFAULT;
        assert_eq!(calibration.iterations_per_ms(), 20_000);
        assert_eq!(calibration.iterations(Duration::from_millis(500)), 10_000_000);
    }

    #[test]
    fn calibration_saturates() {
        let calibration = Calibration::DEFAULT;
        assert_eq!(calibration.iterations(Duration::from_secs(1_000_000)), u32::MAX);
    }

    #[test]
    fn busy_wait_blocks_for_period_then_reloads() {
        let mut timer = BusyWait::new(Calibration {
            cpu_clock_hz: 6_000,
            cycles_per_iteration: 2,
        });
        timer.start(Duration::from_millis(2));
        assert_eq!(timer.reload(), 6);

        for _ in 0..2 {
            for _ in 0..6 {
                assert!(matches!(timer.wait(), Err(nb::Error::WouldBlock)));
            }
            assert!(timer.wait().is_ok());
        }
    }

    #[test]
    fn fixed_busy_wait_ignores_timeout() {
        let mut timer = BusyWait::fixed(3);
        timer.start(Duration::from_secs(60));
        assert_eq!(timer.reload(), 3);

        let mut spins = 0;
        while timer.wait().is_err() {
            spins += 1;
        }
        assert_eq!(spins, 3);
    }

    #[test]
    fn default_period_is_half_a_second_of_cycles() {
        let calibration = Calibration::DEFAULT;
        let iterations = calibration.iterations(Duration::from_millis(500));
        assert_eq!(iterations * calibration.cycles_per_iteration, clocks::CPU_CLOCK_HZ / 2);
    }

    #[test]
    fn degenerate_calibration_still_waits() {
        let mut timer = BusyWait::new(Calibration {
            cpu_clock_hz: 40_000_000,
            cycles_per_iteration: 0,
        });
        timer.start(Duration::from_millis(500));
        assert_eq!(timer.reload(), 20_000_000);

        let slow = Calibration {
            cpu_clock_hz: 500,
            cycles_per_iteration: 2,
        };
        assert_eq!(slow.iterations_per_ms(), 1);
        assert_eq!(slow.iterations(Duration::from_millis(3)), 3);
    }

    #[test]
    fn millisecond_reload_never_underflows() {
        assert_eq!(millisecond_reload(clocks::CPU_CLOCK_HZ), 39_999);
        assert_eq!(millisecond_reload(999), 1);
        assert_eq!(millisecond_reload(0), 1);
    }

    #[test]
    fn fixed_zero_never_blocks() {
        let mut timer = BusyWait::fixed(0);
        timer.start(Duration::from_millis(500));
        assert!(timer.wait().is_ok());
        assert!(timer.wait().is_ok());
    }
}
