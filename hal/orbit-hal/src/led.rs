//! Addressable LED strip abstraction

pub use smart_leds::RGB8;

/// Default minimum interval between two `show` calls, in milliseconds
///
/// WS2812-class strips need the data line held low for a latch period after
/// each frame and visibly tear when refreshed back-to-back.
pub const DEFAULT_MIN_REFRESH_MS: u32 = 30;

/// Pixel-addressable LED strip
///
/// `set_pixel` only stages a colour; nothing reaches the LEDs until `show`.
/// Callers must not call `show` more often than [`LedStrip::MIN_REFRESH_MS`].
pub trait LedStrip {
    /// Error type for strip communication
    type Error;

    /// Minimum safe interval between two `show` calls
    const MIN_REFRESH_MS: u32 = DEFAULT_MIN_REFRESH_MS;

    /// Number of pixels on the strip
    fn len(&self) -> usize;

    /// Whether the strip has no pixels
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Stage a colour for one pixel
    ///
    /// Out-of-range indices are ignored.
    fn set_pixel(&mut self, index: usize, color: RGB8);

    /// Push all staged colours to the physical strip
    fn show(&mut self) -> Result<(), Self::Error>;
}
