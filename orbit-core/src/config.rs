//! Timing and pin configuration
//!
//! Everything here is fixed at build time. `validate` is run once at
//! startup; a failure there is fatal (the hardware cannot be brought up
//! in a known state).

use heapless::FnvIndexSet;

/// Debounce interval for all buttons
pub const DEBOUNCE_MS: u32 = 50;
/// Minimum interval between two physical LED flushes
pub const MIN_REFRESH_MS: u32 = 30;
/// Delay between frames of the startup self-test sweep
pub const SELF_TEST_STEP_MS: u32 = 80;
/// Global LED brightness (0-255) applied at flush time
pub const BRIGHTNESS: u8 = 10;
/// Control loop period
pub const LOOP_PERIOD_MS: u32 = 1;

/// Number of front-panel buttons
pub const NUM_BUTTONS: usize = 4;

/// Configuration errors detected at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Same GPIO assigned to two functions
    PinConflict(u8),
    /// GPIO number does not exist on this chip
    InvalidPin(u8),
    /// An interval is shorter than the hardware allows, or the loop is too slow
    IntervalTooShort,
    /// LED strip has fewer pixels than the ring (actual length)
    StripTooShort(usize),
}

/// Timing parameters for debouncing and LED refresh
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimingConfig {
    /// Time a button level must hold before it is trusted (ms)
    pub debounce_ms: u32,
    /// Minimum interval between physical LED flushes (ms)
    pub min_refresh_ms: u32,
    /// Delay between self-test animation frames (ms)
    pub self_test_step_ms: u32,
    /// LED brightness scale (0-255)
    pub brightness: u8,
    /// Control loop period (ms)
    pub loop_period_ms: u32,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            debounce_ms: DEBOUNCE_MS,
            min_refresh_ms: MIN_REFRESH_MS,
            self_test_step_ms: SELF_TEST_STEP_MS,
            brightness: BRIGHTNESS,
            loop_period_ms: LOOP_PERIOD_MS,
        }
    }
}

impl TimingConfig {
    /// Check the timing against the strip's refresh limit
    ///
    /// The self-test writes the strip once per step, so its step obeys the
    /// same limit as the refresh interval. The loop must poll at least twice
    /// per debounce interval or transitions can be missed.
    pub fn validate(&self, strip_min_refresh_ms: u32) -> Result<(), ConfigError> {
        if self.min_refresh_ms < strip_min_refresh_ms
            || self.self_test_step_ms < strip_min_refresh_ms
        {
            return Err(ConfigError::IntervalTooShort);
        }
        if self.debounce_ms == 0 || self.loop_period_ms.saturating_mul(2) > self.debounce_ms {
            return Err(ConfigError::IntervalTooShort);
        }
        Ok(())
    }
}

/// GPIO assignments for the control surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoardPins {
    /// Channel select button
    pub channel_button: u8,
    /// Start/stop button
    pub start_stop_button: u8,
    /// Mode button
    pub mode_button: u8,
    /// Encoder push button
    pub center_button: u8,
    /// Encoder phase A
    pub encoder_a: u8,
    /// Encoder phase B
    pub encoder_b: u8,
    /// WS2812 data out
    pub leds_data: u8,
}

impl BoardPins {
    /// Button pins in panel order (channel, start/stop, mode, center)
    pub fn buttons(&self) -> [u8; NUM_BUTTONS] {
        [
            self.channel_button,
            self.start_stop_button,
            self.mode_button,
            self.center_button,
        ]
    }

    /// Every pin this board map claims
    pub fn all(&self) -> [u8; NUM_BUTTONS + 3] {
        let [a, b, c, d] = self.buttons();
        [a, b, c, d, self.encoder_a, self.encoder_b, self.leds_data]
    }

    /// Check that every pin exists and none is assigned twice
    pub fn validate(&self, gpio_count: u8) -> Result<(), ConfigError> {
        let mut allocator = PinAllocator::new(gpio_count);
        for pin in self.all() {
            allocator.allocate(pin)?;
        }
        Ok(())
    }
}

/// Tracks which GPIO pins are in use to prevent conflicts
pub struct PinAllocator {
    gpio_count: u8,
    allocated: FnvIndexSet<u8, 32>,
}

impl PinAllocator {
    /// Create an allocator for a chip with `gpio_count` pins
    pub fn new(gpio_count: u8) -> Self {
        Self {
            gpio_count,
            allocated: FnvIndexSet::new(),
        }
    }

    /// Claim a GPIO pin
    pub fn allocate(&mut self, pin: u8) -> Result<(), ConfigError> {
        if pin >= self.gpio_count {
            return Err(ConfigError::InvalidPin(pin));
        }
        if self.allocated.contains(&pin) {
            return Err(ConfigError::PinConflict(pin));
        }
        self.allocated
            .insert(pin)
            .map_err(|_| ConfigError::InvalidPin(pin))?;
        Ok(())
    }

    /// Check if a pin is allocated
    pub fn is_allocated(&self, pin: u8) -> bool {
        self.allocated.contains(&pin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pins() -> BoardPins {
        BoardPins {
            channel_button: 27,
            start_stop_button: 26,
            mode_button: 22,
            center_button: 18,
            encoder_a: 16,
            encoder_b: 17,
            leds_data: 7,
        }
    }

    #[test]
    fn test_default_timing_is_valid() {
        assert_eq!(TimingConfig::default().validate(30), Ok(()));
    }

    #[test]
    fn test_refresh_faster_than_strip_rejected() {
        let timing = TimingConfig {
            min_refresh_ms: 10,
            ..TimingConfig::default()
        };
        assert_eq!(timing.validate(30), Err(ConfigError::IntervalTooShort));
    }

    #[test]
    fn test_self_test_step_faster_than_strip_rejected() {
        let timing = TimingConfig {
            self_test_step_ms: 5,
            ..TimingConfig::default()
        };
        assert_eq!(timing.validate(30), Err(ConfigError::IntervalTooShort));
    }

    #[test]
    fn test_slow_loop_rejected() {
        let timing = TimingConfig {
            loop_period_ms: 40,
            ..TimingConfig::default()
        };
        assert_eq!(timing.validate(30), Err(ConfigError::IntervalTooShort));
    }

    #[test]
    fn test_board_pins_valid() {
        assert_eq!(pins().validate(30), Ok(()));
    }

    #[test]
    fn test_duplicate_pin_detected() {
        let board = BoardPins {
            mode_button: 16,
            ..pins()
        };
        assert_eq!(board.validate(30), Err(ConfigError::PinConflict(16)));
    }

    #[test]
    fn test_out_of_range_pin_detected() {
        // GPIO32 existed on the ESP32 board, not on RP2040
        let board = BoardPins {
            mode_button: 32,
            ..pins()
        };
        assert_eq!(board.validate(30), Err(ConfigError::InvalidPin(32)));
    }

    #[test]
    fn test_allocator_tracks_claims() {
        let mut allocator = PinAllocator::new(30);
        allocator.allocate(3).unwrap();
        allocator.allocate(4).unwrap();
        assert!(allocator.is_allocated(3));
        assert!(!allocator.is_allocated(5));
        assert_eq!(allocator.allocate(4), Err(ConfigError::PinConflict(4)));
    }
}
