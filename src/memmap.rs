//! CC3200 register map.
//!
//! Base addresses and offsets from the CC3200 Technical Reference Manual
//! (SWRU367). These are specific to this part and are kept as an opaque
//! table: nothing else in the crate derives addresses from general rules.


// - GPIO ---------------------------------------------------------------------

pub const GPIOA0_BASE: u32 = 0x4000_4000;
pub const GPIOA1_BASE: u32 = 0x4000_5000;
pub const GPIOA2_BASE: u32 = 0x4000_6000;
pub const GPIOA3_BASE: u32 = 0x4000_7000;
pub const GPIOA4_BASE: u32 = 0x4002_4000;

/// Bit-masked data window, 0x000 - 0x3fc. Address bits [9:2] are the mask.
pub const GPIO_O_GPIO_DATA: u32 = 0x000;
pub const GPIO_O_GPIO_DIR: u32 = 0x400;

/// Lowest address bit of the data window mask.
pub const GPIO_DATA_MASK_SHIFT: u32 = 2;


// - ARCM (application reset-clock management) --------------------------------

pub const ARCM_BASE: u32 = 0x4402_5000;

// The manual names these A..E while the GPIO chapter names the ports
// A0..A4. GPIO_B gates GPIOA1, found by experiment on the board.
pub const APPS_RCM_O_GPIO_A_CLK_GATING: u32 = 0x58;
pub const APPS_RCM_O_GPIO_B_CLK_GATING: u32 = 0x5c;
pub const APPS_RCM_O_GPIO_C_CLK_GATING: u32 = 0x60;
pub const APPS_RCM_O_GPIO_D_CLK_GATING: u32 = 0x64;
pub const APPS_RCM_O_GPIO_E_CLK_GATING: u32 = 0x68;


// - OCP shared (pad configuration) -------------------------------------------

pub const OCP_SHARED_BASE: u32 = 0x4402_e000;

pub const OCP_SHARED_O_GPIO_PAD_CONFIG_9: u32 = 0xc4;
pub const OCP_SHARED_O_GPIO_PAD_CONFIG_10: u32 = 0xc8;
pub const OCP_SHARED_O_GPIO_PAD_CONFIG_11: u32 = 0xcc;


// - ports --------------------------------------------------------------------

/// A GPIO port and the clock-gate register that powers it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PortMap {
    pub base: u32,
    pub clock_gate: u32,
}

impl PortMap {
    pub const fn data(&self, mask: u8) -> u32 {
        self.base | GPIO_O_GPIO_DATA | ((mask as u32) << GPIO_DATA_MASK_SHIFT)
    }

    pub const fn dir(&self) -> u32 {
        self.base | GPIO_O_GPIO_DIR
    }
}

pub const GPIOA0: PortMap = PortMap {
    base: GPIOA0_BASE,
    clock_gate: ARCM_BASE | APPS_RCM_O_GPIO_A_CLK_GATING,
};

pub const GPIOA1: PortMap = PortMap {
    base: GPIOA1_BASE,
    clock_gate: ARCM_BASE | APPS_RCM_O_GPIO_B_CLK_GATING,
};

pub const GPIOA2: PortMap = PortMap {
    base: GPIOA2_BASE,
    clock_gate: ARCM_BASE | APPS_RCM_O_GPIO_C_CLK_GATING,
};

pub const GPIOA3: PortMap = PortMap {
    base: GPIOA3_BASE,
    clock_gate: ARCM_BASE | APPS_RCM_O_GPIO_D_CLK_GATING,
};

pub const GPIOA4: PortMap = PortMap {
    base: GPIOA4_BASE,
    clock_gate: ARCM_BASE | APPS_RCM_O_GPIO_E_CLK_GATING,
};
