use embedded_hal::digital::v2::{OutputPin, StatefulOutputPin, ToggleableOutputPin};
use void::ResultVoidExt;

use crate::gpio::Port;
use crate::pins::{user_leds, PinMap};
use crate::register::RegisterAccess;

// - traits -------------------------------------------------------------------

/// Generic LED
pub trait Led {
    /// Turns the LED off
    fn off(&mut self);

    /// Turns the LED on
    fn on(&mut self);
}

// - UserLed ------------------------------------------------------------------

/// A single LED pin, borrowing the register space for as long as it is held.
pub struct UserLed<'a, R> {
    pin: PinMap,
    registers: &'a mut R,
}

impl<'a, R: RegisterAccess> UserLed<'a, R> {
    pub fn new(pin: PinMap, registers: &'a mut R) -> Self {
        Self { pin, registers }
    }

    fn port(&self) -> Port {
        Port::new(self.pin.port)
    }
}

impl<'a, R: RegisterAccess> OutputPin for UserLed<'a, R> {
    type Error = void::Void;

    fn set_high(&mut self) -> Result<(), void::Void> {
        let mask = self.pin.mask();
        self.port().write(self.registers, mask, mask);
        Ok(())
    }

    fn set_low(&mut self) -> Result<(), void::Void> {
        let mask = self.pin.mask();
        self.port().write(self.registers, mask, 0);
        Ok(())
    }
}

impl<'a, R: RegisterAccess> StatefulOutputPin for UserLed<'a, R> {
    fn is_set_high(&self) -> Result<bool, void::Void> {
        Ok(self.port().read(&*self.registers, self.pin.mask()) != 0)
    }

    fn is_set_low(&self) -> Result<bool, void::Void> {
        self.is_set_high().map(|high| !high)
    }
}

impl<'a, R: RegisterAccess> ToggleableOutputPin for UserLed<'a, R> {
    type Error = void::Void;

    fn toggle(&mut self) -> Result<(), void::Void> {
        if self.is_set_high()? {
            self.set_low()
        } else {
            self.set_high()
        }
    }
}

impl<'a, R: RegisterAccess> Led for UserLed<'a, R> {
    fn on(&mut self) {
        self.set_high().void_unwrap();
    }

    fn off(&mut self) {
        self.set_low().void_unwrap();
    }
}

// - UserLeds -----------------------------------------------------------------

/// The three LaunchPad user LEDs driven together.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserLeds {
    port: Port,
    mask: u8,
}

impl UserLeds {
    pub const fn new() -> Self {
        Self {
            port: Port::new(user_leds::PORT),
            mask: user_leds::MASK,
        }
    }

    pub const fn port(&self) -> &Port {
        &self.port
    }

    pub const fn mask(&self) -> u8 {
        self.mask
    }

    /// Drives every LED high if `on`, low otherwise, in one masked store.
    /// Other pins on the port are untouched.
    #[inline]
    pub fn set_all<R: RegisterAccess>(&self, registers: &mut R, on: bool) {
        let value = if on { self.mask } else { 0 };
        self.port.write(registers, self.mask, value);
    }

    /// Individual access to `pin`.
    pub fn get<'a, R: RegisterAccess>(&self, pin: PinMap, registers: &'a mut R) -> UserLed<'a, R> {
        debug_assert!(pin.port == *self.port.map() && pin.mask() & self.mask != 0);
        UserLed::new(pin, registers)
    }
}

impl Default for UserLeds {
    fn default() -> Self {
        Self::new()
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::register::sim::MemoryMap;

    fn memory() -> MemoryMap {
        let mut mem = MemoryMap::new();
        mem.map_masked_window(user_leds::PORT.base);
        mem
    }

    #[test]
    fn set_all_writes_mask_or_zero() {
        let mut mem = memory();
        let leds = UserLeds::new();

        leds.set_all(&mut mem, true);
        leds.set_all(&mut mem, false);

        let values: Vec<u32> = mem.log().iter().map(|w| w.value).collect();
        assert_eq!(values, vec![0x0e, 0x00]);
        assert!(mem.log().iter().all(|w| w.address == 0x4000_5038));
    }

    #[test]
    fn single_led_on_off() {
        let mut mem = memory();
        let leds = UserLeds::new();
        {
            let mut green = leds.get(user_leds::GREEN, &mut mem);
            green.on();
            assert_eq!(green.is_set_high().ok(), Some(true));
        }
        assert_eq!(mem.peek(user_leds::PORT.base), 0b1000);

        let mut red = leds.get(user_leds::RED, &mut mem);
        red.on();
        red.off();
        assert_eq!(red.is_set_low().ok(), Some(true));
        drop(red);
        assert_eq!(mem.peek(user_leds::PORT.base), 0b1000);
    }

    #[test]
    fn toggle_flips_one_led() {
        let mut mem = memory();
        mem.preset(user_leds::PORT.base, 0b1111_0000);
        let leds = UserLeds::new();

        let mut orange = leds.get(user_leds::ORANGE, &mut mem);
        orange.toggle().ok();
        assert_eq!(orange.is_set_high().ok(), Some(true));
        orange.toggle().ok();
        drop(orange);

        assert_eq!(mem.peek(user_leds::PORT.base), 0b1111_0000);
    }
}
