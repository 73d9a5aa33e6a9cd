//! Button inputs

use embassy_rp::gpio::{Input, Pin, Pull};
use embassy_rp::Peri;
use orbit_hal::InputPin;

/// Maximum number of GPIO pins on RP2040
pub const GPIO_COUNT: u8 = 30;

/// Active-low button input with the internal pull-up enabled
pub struct ButtonPin<'d> {
    input: Input<'d>,
}

impl<'d> ButtonPin<'d> {
    pub fn new(pin: Peri<'d, impl Pin>) -> Self {
        Self {
            input: Input::new(pin, Pull::Up),
        }
    }
}

impl InputPin for ButtonPin<'_> {
    fn is_high(&self) -> bool {
        self.input.is_high()
    }
}
