//! Millisecond clock backed by the embassy time driver

use embassy_time::Instant;
use orbit_hal::Clock;

/// Uptime clock in wrapping milliseconds
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbassyClock;

impl Clock for EmbassyClock {
    fn now_ms(&self) -> u32 {
        // Truncation is the intended wrap
        Instant::now().as_millis() as u32
    }
}
