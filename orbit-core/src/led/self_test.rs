//! Startup sweep animation
//!
//! A single lit pixel runs once around the ring in each of the first three
//! channel colours. The pattern is a plain iterator so it can be checked
//! without timing; [`LedRing::self_test`](super::LedRing::self_test) plays it
//! with a delay between frames.

use orbit_hal::RGB8;

use super::palette::CHANNEL_COLORS;

/// Number of colour passes in the sweep
pub const SWEEP_PASSES: usize = 3;

/// One frame of the sweep
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SweepStep {
    /// Pixel lit this frame
    pub lit: usize,
    /// Pixel lit in the previous frame, to be turned off
    pub cleared: usize,
    pub color: RGB8,
}

/// Iterator over the sweep frames for a ring of `len` pixels
#[derive(Debug, Clone)]
pub struct SelfTest {
    len: usize,
    step: usize,
}

impl SelfTest {
    pub fn new(len: usize) -> Self {
        Self { len, step: 0 }
    }

    /// Total number of frames
    pub fn frames(&self) -> usize {
        self.len * SWEEP_PASSES
    }
}

impl Iterator for SelfTest {
    type Item = SweepStep;

    fn next(&mut self) -> Option<SweepStep> {
        if self.step >= self.frames() {
            return None;
        }
        let pass = self.step / self.len;
        let lit = self.step % self.len;
        self.step += 1;

        Some(SweepStep {
            lit,
            cleared: (lit + self.len - 1) % self.len,
            color: CHANNEL_COLORS[pass],
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.frames().saturating_sub(self.step);
        (remaining, Some(remaining))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sweep_length() {
        assert_eq!(SelfTest::new(16).count(), 48);
        assert_eq!(SelfTest::new(0).count(), 0);
    }

    #[test]
    fn test_sweep_clears_previous_pixel() {
        let steps: heapless::Vec<SweepStep, 12> = SelfTest::new(4).collect();

        assert_eq!(steps[0].lit, 0);
        assert_eq!(steps[0].cleared, 3);
        assert_eq!(steps[1].lit, 1);
        assert_eq!(steps[1].cleared, 0);
        assert_eq!(steps[3].color, CHANNEL_COLORS[0]);
        // Second pass starts over in the next colour
        assert_eq!(steps[4].lit, 0);
        assert_eq!(steps[4].color, CHANNEL_COLORS[1]);
        assert_eq!(steps[11].color, CHANNEL_COLORS[2]);
    }
}
