//! Board pin map
//!
//! The peripherals taken in `main` must match [`PINS`]; the map is what
//! gets validated at boot.

use orbit_core::config::BoardPins;
use orbit_core::input::PinId;

/// Pixels on the WS2812 ring
pub const RING_LEN: usize = 16;

/// Control surface wiring
pub const PINS: BoardPins = BoardPins {
    channel_button: 27,
    start_stop_button: 26,
    mode_button: 22,
    center_button: 18,
    encoder_a: 16,
    encoder_b: 17,
    leds_data: 7,
};

/// Front-panel buttons by function
#[derive(Debug, Clone, Copy, PartialEq, Eq, defmt::Format)]
pub enum ButtonRole {
    Channel,
    StartStop,
    Mode,
    Center,
}

impl ButtonRole {
    pub const ALL: [ButtonRole; 4] = [
        ButtonRole::Channel,
        ButtonRole::StartStop,
        ButtonRole::Mode,
        ButtonRole::Center,
    ];

    /// GPIO this button is wired to
    pub const fn pin(self) -> PinId {
        PinId(match self {
            ButtonRole::Channel => PINS.channel_button,
            ButtonRole::StartStop => PINS.start_stop_button,
            ButtonRole::Mode => PINS.mode_button,
            ButtonRole::Center => PINS.center_button,
        })
    }

    pub fn from_pin(pin: PinId) -> Option<Self> {
        Self::ALL.into_iter().find(|role| role.pin() == pin)
    }
}
