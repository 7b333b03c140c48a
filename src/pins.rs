use crate::memmap::{self, PortMap};


// - types --------------------------------------------------------------------

/// A board pin routed to a GPIO port bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PinMap {
    /// GPIO number as printed in the datasheet
    pub gpio: u8,
    pub port: PortMap,
    pub bit: u8,
    /// Address of the GPIO_PAD_CONFIG_n register
    pub pad: u32,
}

impl PinMap {
    pub const fn mask(&self) -> u8 {
        1 << self.bit
    }
}

pub mod user_leds {
    use super::*;

    /// D7, GPIO09
    pub const RED: PinMap = PinMap {
        gpio: 9,
        port: memmap::GPIOA1,
        bit: 1,
        pad: memmap::OCP_SHARED_BASE | memmap::OCP_SHARED_O_GPIO_PAD_CONFIG_9,
    };

    /// D6, GPIO10
    pub const ORANGE: PinMap = PinMap {
        gpio: 10,
        port: memmap::GPIOA1,
        bit: 2,
        pad: memmap::OCP_SHARED_BASE | memmap::OCP_SHARED_O_GPIO_PAD_CONFIG_10,
    };

    /// D5, GPIO11
    pub const GREEN: PinMap = PinMap {
        gpio: 11,
        port: memmap::GPIOA1,
        bit: 3,
        pad: memmap::OCP_SHARED_BASE | memmap::OCP_SHARED_O_GPIO_PAD_CONFIG_11,
    };

    pub const ALL: [PinMap; 3] = [RED, ORANGE, GREEN];

    /// Port shared by all three LEDs
    pub const PORT: PortMap = memmap::GPIOA1;

    pub const MASK: u8 = RED.mask() | ORANGE.mask() | GREEN.mask();
}
