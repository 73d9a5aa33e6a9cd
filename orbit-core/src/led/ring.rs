//! Rate-limited LED ring renderer
//!
//! Producers mutate the logical frame as often as they like; [`LedRing::poll`]
//! pushes it to the strip at most once per refresh window. Whatever the
//! frame holds when the window elapses is what gets shown; intermediate
//! states are dropped.

use embedded_hal_async::delay::DelayNs;
use orbit_hal::{Clock, LedStrip, RGB8};

use super::palette::{channel_color, MARKER, OFF};
use super::self_test::SelfTest;
use crate::config::{ConfigError, TimingConfig};

/// Coalescing frame buffer in front of an LED strip
pub struct LedRing<S, const N: usize> {
    strip: S,
    /// Beat layer written by `set_beats` / `set_pixel`
    beats: [RGB8; N],
    /// Composed frame (beats plus marker), what the next flush will show
    frame: [RGB8; N],
    marker: Option<usize>,
    dirty: bool,
    last_flush_ms: u32,
    min_refresh_ms: u32,
    self_test_step_ms: u32,
    brightness: u8,
    flushes: u32,
}

impl<S: LedStrip, const N: usize> LedRing<S, N> {
    /// Create a ring renderer
    ///
    /// Neither the refresh interval nor the self-test step is allowed below
    /// the strip's own minimum.
    pub fn new(strip: S, timing: &TimingConfig) -> Self {
        let min_refresh_ms = timing.min_refresh_ms.max(S::MIN_REFRESH_MS);
        Self {
            strip,
            beats: [OFF; N],
            frame: [OFF; N],
            marker: None,
            dirty: false,
            last_flush_ms: 0,
            min_refresh_ms,
            self_test_step_ms: timing.self_test_step_ms.max(min_refresh_ms),
            brightness: timing.brightness,
            flushes: 0,
        }
    }

    /// Show `channel`'s beat pattern
    ///
    /// Active beats get the channel colour, everything else (including
    /// pixels past the end of `beats`) goes dark. The position marker is
    /// kept on top.
    pub fn set_beats(&mut self, channel: usize, beats: &[bool]) {
        let color = channel_color(channel);
        for (i, pixel) in self.beats.iter_mut().enumerate() {
            *pixel = match beats.get(i) {
                Some(true) => color,
                _ => OFF,
            };
        }
        self.compose();
    }

    /// Move the playback position marker
    ///
    /// `None` or an index outside the ring removes it.
    pub fn set_position(&mut self, position: Option<usize>) {
        self.marker = position.filter(|&p| p < N);
        self.compose();
    }

    /// Set one pixel of the beat layer
    pub fn set_pixel(&mut self, index: usize, color: RGB8) {
        if let Some(pixel) = self.beats.get_mut(index) {
            *pixel = color;
            self.compose();
        }
    }

    /// Turn every pixel off and remove the marker
    pub fn clear(&mut self) {
        self.beats = [OFF; N];
        self.marker = None;
        self.compose();
    }

    /// Flush the frame if it changed and the refresh window has elapsed
    ///
    /// Returns `Ok(true)` if the strip was written. A failed write starts a
    /// new window and leaves the frame dirty, so it is retried on the next
    /// window rather than on every poll.
    pub fn poll(&mut self, now_ms: u32) -> Result<bool, S::Error> {
        if !self.dirty || now_ms.wrapping_sub(self.last_flush_ms) < self.min_refresh_ms {
            return Ok(false);
        }

        self.last_flush_ms = now_ms;
        self.push()?;
        self.dirty = false;
        self.flushes = self.flushes.wrapping_add(1);
        Ok(true)
    }

    /// Restart the refresh window at `now_ms`
    pub fn reset_timer(&mut self, now_ms: u32) {
        self.last_flush_ms = now_ms;
    }

    /// Play the startup sweep, then leave the strip dark
    ///
    /// Writes straight to the strip, bypassing the refresh window. Each
    /// frame is held for the step delay, which is never shorter than the
    /// refresh interval. The last show opens the first refresh window at
    /// `clock`'s time. A strip error aborts the test; it means the LED link
    /// is down.
    pub async fn self_test<D: DelayNs, C: Clock>(
        &mut self,
        delay: &mut D,
        clock: &C,
    ) -> Result<(), S::Error> {
        self.frame = [OFF; N];
        for step in SelfTest::new(N) {
            self.frame[step.cleared] = OFF;
            self.frame[step.lit] = step.color;
            self.push()?;
            delay.delay_ms(self.self_test_step_ms).await;
        }

        self.clear();
        self.push()?;
        self.dirty = false;
        self.last_flush_ms = clock.now_ms();
        Ok(())
    }

    /// Check that the strip can hold every pixel of the ring
    ///
    /// A shorter strip would silently drop the pixels past its end.
    pub fn check_strip(&self) -> Result<(), ConfigError> {
        let len = self.strip.len();
        if len < N {
            return Err(ConfigError::StripTooShort(len));
        }
        Ok(())
    }

    /// The frame the next flush will show
    pub fn frame(&self) -> &[RGB8; N] {
        &self.frame
    }

    pub fn marker(&self) -> Option<usize> {
        self.marker
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Number of coalesced flushes performed by `poll`
    pub fn flush_count(&self) -> u32 {
        self.flushes
    }

    pub fn min_refresh_ms(&self) -> u32 {
        self.min_refresh_ms
    }

    pub fn strip(&self) -> &S {
        &self.strip
    }

    fn compose(&mut self) {
        self.frame = self.beats;
        if let Some(position) = self.marker {
            self.frame[position] = MARKER;
        }
        self.dirty = true;
    }

    fn push(&mut self) -> Result<(), S::Error> {
        let scaled = smart_leds::brightness(self.frame.iter().copied(), self.brightness);
        for (i, color) in scaled.enumerate() {
            self.strip.set_pixel(i, color);
        }
        self.strip.show()
    }
}
