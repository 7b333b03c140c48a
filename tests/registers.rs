//! Register-level effects of bring-up and of the LED toggle.

use launchxl_cc3200::blinker::{typestate::Configured, Blinker};
use launchxl_cc3200::led::UserLeds;
use launchxl_cc3200::memmap;
use launchxl_cc3200::pins::user_leds;
use launchxl_cc3200::register::sim::MemoryMap;
use launchxl_cc3200::timer::BusyWait;
use launchxl_cc3200::RegisterAccess;

const MASK: u32 = 0x0e;
const DATA: u32 = memmap::GPIOA1_BASE;
const DIR: u32 = memmap::GPIOA1_BASE | memmap::GPIO_O_GPIO_DIR;
const CLOCK_GATE: u32 = memmap::ARCM_BASE | memmap::APPS_RCM_O_GPIO_B_CLK_GATING;
const PADS: [u32; 3] = [0x4402_e0c4, 0x4402_e0c8, 0x4402_e0cc];


// - helpers ------------------------------------------------------------------

fn memory() -> MemoryMap {
    let mut mem = MemoryMap::new();
    mem.map_masked_window(DATA);
    mem
}

fn configured(mem: MemoryMap) -> Blinker<MemoryMap, BusyWait, Configured> {
    Blinker::new(mem, BusyWait::fixed(0)).init()
}


// - toggle -------------------------------------------------------------------

#[test]
fn set_all_preserves_unrelated_pins() {
    for &on in &[true, false] {
        for &preset in &[0x00u32, 0xf1, 0xff, 0x0e, 0xa5] {
            let mut mem = memory();
            mem.preset(DATA, preset);

            UserLeds::new().set_all(&mut mem, on);

            let after = mem.peek(DATA);
            assert_eq!(after & !MASK, preset & !MASK, "preset {:#04x} on {}", preset, on);
            assert_eq!(after & MASK, if on { MASK } else { 0 });
        }
    }
}

#[test]
fn set_all_is_idempotent() {
    for &on in &[true, false] {
        let mut once = memory();
        once.preset(DATA, 0xb4);
        UserLeds::new().set_all(&mut once, on);

        let mut twice = memory();
        twice.preset(DATA, 0xb4);
        UserLeds::new().set_all(&mut twice, on);
        UserLeds::new().set_all(&mut twice, on);

        assert_eq!(once.peek(DATA), twice.peek(DATA));
    }
}

#[test]
fn set_all_is_one_store_to_the_data_window() {
    let mut blinker = configured(memory());
    let before = blinker.registers().log().len();

    blinker.set_all(true);

    let log = blinker.registers().log();
    assert_eq!(log.len(), before + 1);
    assert_eq!(log[before].address, memmap::GPIOA1.data(user_leds::MASK));
    assert_eq!(log[before].value, MASK);
}


// - bring-up -----------------------------------------------------------------

#[test]
fn init_sets_direction_bits_only_under_mask() {
    for &preset in &[0x00u32, 0x81, 0xf0, 0xffff_ff00] {
        let mut mem = memory();
        mem.preset(DIR, preset);

        let blinker = configured(mem);
        let dir = blinker.registers().read(DIR);

        assert_eq!(dir & MASK, MASK);
        assert_eq!(dir & !MASK, preset & !MASK);
    }
}

#[test]
fn init_selects_gpio_function_on_led_pads() {
    let presets = [0x0000_0fffu32, 0x0000_0061, 0xffff_ffff];
    let mut mem = memory();
    for (pad, &preset) in PADS.iter().zip(presets.iter()) {
        mem.preset(*pad, preset);
    }

    let blinker = configured(mem);

    for (pad, &preset) in PADS.iter().zip(presets.iter()) {
        let after = blinker.registers().read(*pad);
        assert_eq!(after & 0x0f, 0, "function select of pad {:#010x}", pad);
        assert_eq!(after & 0x060, preset & 0x060);
        assert_eq!(after & !0x060, 0);
    }
}

#[test]
fn init_from_zeroed_memory() {
    let blinker = configured(memory());
    let mem = blinker.registers();

    assert_eq!(mem.read(CLOCK_GATE), 1);
    assert_eq!(mem.read(DIR), 0x0e);
    for pad in PADS.iter() {
        assert_eq!(mem.read(*pad), 0);
    }
}

#[test]
fn init_gates_clock_before_touching_the_port() {
    let blinker = configured(memory());
    let log = blinker.registers().log();

    assert_eq!(log[0].address, CLOCK_GATE);
    assert_eq!(log[0].value, 1);
    assert_eq!(log[1].address, DIR);
    let pads: Vec<u32> = log[2..].iter().map(|w| w.address).collect();
    assert_eq!(pads, PADS.to_vec());
}
