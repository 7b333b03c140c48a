//! The LED blinker.
//!
//! [`Blinker::init`] runs the board bring-up sequence once:
//!
//!   1. gate the clock of the LED port on
//!   2. make the LED pins outputs
//!   3. route the LED pads to the GPIO module
//!
//! [`Blinker::start`] then arms the timer, and only a started blinker can
//! step. It alternates between [`LedState::Off`] and [`LedState::On`],
//! waiting one half period on its timer before every transition.
//!
//! ```compile_fail
//! use launchxl_cc3200::blinker::Blinker;
//! use launchxl_cc3200::register::sim::MemoryMap;
//! use launchxl_cc3200::timer::BusyWait;
//!
//! let mut blinker = Blinker::new(MemoryMap::new(), BusyWait::fixed(0)).init();
//! blinker.step(); // not started
//! ```

use core::marker::PhantomData;
use core::time::Duration;

use embedded_hal::timer::{CountDown, Periodic};
use void::ResultVoidExt;

use crate::clocks;
use crate::gpio::Port;
use crate::led::UserLeds;
use crate::pad;
use crate::pins::user_leds;
use crate::register::RegisterAccess;
use crate::timer::{BusyWait, Calibration};


// - typestate ----------------------------------------------------------------

pub mod typestate {
    pub struct Unconfigured;
    pub struct Configured;
    pub struct Running;
}

use typestate::*;


// - Config -------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Time each state is held, half of a full blink cycle
    pub half_period: Duration,
    /// Spin loop calibration, used by [`Blinker::busy_wait`]
    pub calibration: Calibration,
}

impl Config {
    pub const DEFAULT: Config = Config {
        half_period: Duration::from_millis(500),
        calibration: Calibration::DEFAULT,
    };
}

impl Default for Config {
    fn default() -> Self {
        Self::DEFAULT
    }
}


// - LedState -----------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedState {
    Off,
    On,
}

impl LedState {
    pub const fn is_on(self) -> bool {
        matches!(self, LedState::On)
    }

    pub const fn toggled(self) -> Self {
        match self {
            LedState::Off => LedState::On,
            LedState::On => LedState::Off,
        }
    }
}


// - Blinker ------------------------------------------------------------------

pub struct Blinker<R, T, STATE> {
    registers: R,
    timer: T,
    leds: UserLeds,
    config: Config,
    state: LedState,
    _marker: PhantomData<STATE>,
}

impl<R, T> Blinker<R, T, Unconfigured>
where
    R: RegisterAccess,
    T: CountDown<Time = Duration> + Periodic,
{
    pub fn new(registers: R, timer: T) -> Self {
        Self::with_config(registers, timer, Config::DEFAULT)
    }

    pub fn with_config(registers: R, timer: T, config: Config) -> Self {
        Self {
            registers,
            timer,
            leds: UserLeds::new(),
            config,
            state: LedState::Off,
            _marker: PhantomData,
        }
    }

    /// Brings up the LED port. Consumes the unconfigured blinker so the
    /// sequence cannot run twice.
    pub fn init(mut self) -> Blinker<R, T, Configured> {
        let port = Port::new(user_leds::PORT);

        clocks::enable_gpio(&mut self.registers, port.map());
        port.set_output(&mut self.registers, self.leds.mask());
        for pin in user_leds::ALL.iter() {
            pad::select_gpio(&mut self.registers, pin.pad);
        }

        log::debug!("user leds configured, mask {:#04x}", self.leds.mask());

        self.into_state()
    }
}

impl<R> Blinker<R, BusyWait, Unconfigured>
where
    R: RegisterAccess,
{
    /// Paces the blinker with a spin loop built from `config.calibration`.
    pub fn busy_wait(registers: R, config: Config) -> Self {
        Self::with_config(registers, BusyWait::new(config.calibration), config)
    }
}

impl<R, T> Blinker<R, T, Configured>
where
    R: RegisterAccess,
    T: CountDown<Time = Duration> + Periodic,
{
    /// Drives all three LEDs high or low together.
    #[inline]
    pub fn set_all(&mut self, on: bool) {
        self.leds.set_all(&mut self.registers, on);
    }

    /// Starts the timer with the configured half period.
    pub fn start(mut self) -> Blinker<R, T, Running> {
        log::info!("blinking every {} ms", self.config.half_period.as_millis());
        self.timer.start(self.config.half_period);
        self.into_state()
    }
}

impl<R, T> Blinker<R, T, Running>
where
    R: RegisterAccess,
    T: CountDown<Time = Duration> + Periodic,
{
    #[inline]
    pub fn set_all(&mut self, on: bool) {
        self.leds.set_all(&mut self.registers, on);
    }

    /// Waits one half period, then flips every LED. Returns the new state.
    pub fn step(&mut self) -> LedState {
        nb::block!(self.timer.wait()).void_unwrap();
        let next = self.state.toggled();
        self.set_all(next.is_on());
        self.state = next;
        log::trace!("leds {:?}", next);
        next
    }

    /// Runs `transitions` steps and returns the final state.
    pub fn run_for(&mut self, transitions: usize) -> LedState {
        for _ in 0..transitions {
            self.step();
        }
        self.state
    }

    /// Blinks until power is lost or the core is reset.
    pub fn run(mut self) -> ! {
        loop {
            self.step();
        }
    }
}

impl<R, T, STATE> Blinker<R, T, STATE> {
    pub fn state(&self) -> LedState {
        self.state
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn registers(&self) -> &R {
        &self.registers
    }

    /// Releases the register space and timer.
    pub fn free(self) -> (R, T) {
        (self.registers, self.timer)
    }

    fn into_state<NEXT>(self) -> Blinker<R, T, NEXT> {
        Blinker {
            registers: self.registers,
            timer: self.timer,
            leds: self.leds,
            config: self.config,
            state: self.state,
            _marker: PhantomData,
        }
    }
}
