//! GPIO pin abstractions
//!
//! Only digital input is needed by the control surface. Buttons are wired
//! active-low (pull-up to VCC, switch to ground), so "pressed" reads low.

/// Digital input pin
///
/// Implementations should handle the actual hardware register reading
/// for the specific chip. Reads are infallible once the pin is configured;
/// an unavailable pin is a startup failure, not a runtime one.
pub trait InputPin {
    /// Check if the pin reads high (logic 1)
    fn is_high(&self) -> bool;

    /// Check if the pin reads low (logic 0)
    fn is_low(&self) -> bool {
        !self.is_high()
    }
}

impl<T: InputPin + ?Sized> InputPin for &T {
    fn is_high(&self) -> bool {
        (**self).is_high()
    }
}
