//! Monotonic time source

/// Monotonic millisecond clock
///
/// The value wraps at `u32::MAX` (about 49.7 days). Consumers must compare
/// timestamps with `wrapping_sub`, never with `<`.
pub trait Clock {
    /// Milliseconds since an arbitrary fixed origin
    fn now_ms(&self) -> u32;
}

impl<T: Clock + ?Sized> Clock for &T {
    fn now_ms(&self) -> u32 {
        (**self).now_ms()
    }
}
