//! Board support crate for the TI CC3200 LaunchPad (CC3200-LAUNCHXL)
//!
//! Brings up the three user LEDs and blinks them at 1 Hz.
//!
//! # Usage - see demos/
//!
//! ```no_run
//! use launchxl_cc3200 as board;
//!
//! let board = board::Board::take().unwrap();
//! board.busy_wait_blinker(board::Config::DEFAULT)
//!      .init()
//!      .start()
//!      .run();
//! ```

#![cfg_attr(not(test), no_std)]

pub use cortex_m;
pub use embedded_hal;


// - modules ------------------------------------------------------------------

pub mod blinker;
pub mod board;
pub mod clocks;
pub mod gpio;
pub mod led;
pub mod memmap;
pub mod pad;
pub mod pins;
pub mod register;
pub mod timer;

pub use blinker::{Blinker, Config, LedState};
pub use board::Board;
pub use register::{Mmio, RegisterAccess};
