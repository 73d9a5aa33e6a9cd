//! Debounced momentary buttons
//!
//! Each button runs a four-state machine:
//!
//! ```text
//!        low                 interval, still low
//! Open ───────► PressDebounce ───────────────────► Closed  (press handler)
//!  ▲                │ interval, high                 │
//!  │◄───────────────┘                                │ high
//!  │                                                 ▼
//!  └─────────────────────────────────────────── ReleaseDebounce
//!       interval, still high (release handler)   │ interval, low
//!                                     Closed ◄───┘
//! ```
//!
//! While debouncing, the pin is not sampled again until the interval has
//! elapsed. The decision is made on a single re-check at the end of the
//! window.

use heapless::Vec;
use orbit_hal::InputPin;

use super::InputError;
use crate::config::DEBOUNCE_MS;

/// Opaque handle identifying a physical input (the GPIO number)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PinId(pub u8);

/// Debounce state of one button
///
/// The entry timestamp only exists while a debounce window is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DebounceState {
    /// Released and stable
    Open,
    /// Went low at `since_ms`, waiting out the interval
    PressDebounce { since_ms: u32 },
    /// Pressed and stable
    Closed,
    /// Went high at `since_ms`, waiting out the interval
    ReleaseDebounce { since_ms: u32 },
}

/// Confirmed button transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonEvent {
    /// Held low for the full debounce interval
    Pressed,
    /// Held high for the full debounce interval
    Released,
}

/// Zero-argument handler invoked from [`Button::update`]
pub type Handler<'a> = &'a mut dyn FnMut();

/// One debounced active-low button
pub struct Button<'a, P> {
    id: PinId,
    pin: P,
    state: DebounceState,
    debounce_ms: u32,
    on_press: Option<Handler<'a>>,
    on_release: Option<Handler<'a>>,
}

impl<'a, P: InputPin> Button<'a, P> {
    /// Create a button with the default debounce interval
    pub fn new(id: PinId, pin: P) -> Self {
        Self::with_interval(id, pin, DEBOUNCE_MS)
    }

    /// Create a button with a custom debounce interval
    pub fn with_interval(id: PinId, pin: P, debounce_ms: u32) -> Self {
        Self {
            id,
            pin,
            state: DebounceState::Open,
            debounce_ms,
            on_press: None,
            on_release: None,
        }
    }

    /// Register the press handler, replacing any previous one
    pub fn on_press(&mut self, handler: Handler<'a>) {
        self.on_press = Some(handler);
    }

    /// Register the release handler, replacing any previous one
    pub fn on_release(&mut self, handler: Handler<'a>) {
        self.on_release = Some(handler);
    }

    /// Replace both handler slots at once
    ///
    /// `None` leaves that slot empty.
    pub fn set_handlers(&mut self, on_press: Option<Handler<'a>>, on_release: Option<Handler<'a>>) {
        self.on_press = on_press;
        self.on_release = on_release;
    }

    pub fn id(&self) -> PinId {
        self.id
    }

    pub fn state(&self) -> DebounceState {
        self.state
    }

    /// Whether the button is in a confirmed-pressed state
    ///
    /// A release that is still being debounced counts as pressed.
    pub fn is_pressed(&self) -> bool {
        matches!(
            self.state,
            DebounceState::Closed | DebounceState::ReleaseDebounce { .. }
        )
    }

    /// Advance the state machine
    ///
    /// Must be called much more often than the debounce interval. Invokes
    /// the matching handler (if registered) and returns the event when a
    /// transition is confirmed.
    pub fn update(&mut self, now_ms: u32) -> Option<ButtonEvent> {
        let event = match self.state {
            DebounceState::Open => {
                if self.pin.is_low() {
                    self.state = DebounceState::PressDebounce { since_ms: now_ms };
                }
                None
            }
            DebounceState::PressDebounce { since_ms } => {
                if now_ms.wrapping_sub(since_ms) < self.debounce_ms {
                    None
                } else if self.pin.is_low() {
                    self.state = DebounceState::Closed;
                    Some(ButtonEvent::Pressed)
                } else {
                    // Bounced back high
                    self.state = DebounceState::Open;
                    None
                }
            }
            DebounceState::Closed => {
                if self.pin.is_high() {
                    self.state = DebounceState::ReleaseDebounce { since_ms: now_ms };
                }
                None
            }
            DebounceState::ReleaseDebounce { since_ms } => {
                if now_ms.wrapping_sub(since_ms) < self.debounce_ms {
                    None
                } else if self.pin.is_high() {
                    self.state = DebounceState::Open;
                    Some(ButtonEvent::Released)
                } else {
                    self.state = DebounceState::Closed;
                    None
                }
            }
        };

        if let Some(event) = event {
            self.dispatch(event);
        }

        event
    }

    fn dispatch(&mut self, event: ButtonEvent) {
        let slot = match event {
            ButtonEvent::Pressed => &mut self.on_press,
            ButtonEvent::Released => &mut self.on_release,
        };
        if let Some(handler) = slot {
            handler();
        }
    }
}

/// Fixed-capacity collection of buttons updated together
pub struct ButtonSet<'a, P, const N: usize> {
    buttons: Vec<Button<'a, P>, N>,
}

impl<'a, P: InputPin, const N: usize> Default for ButtonSet<'a, P, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, P: InputPin, const N: usize> ButtonSet<'a, P, N> {
    pub fn new() -> Self {
        Self { buttons: Vec::new() }
    }

    /// Add a button
    ///
    /// Each pin may only appear once.
    pub fn add(&mut self, button: Button<'a, P>) -> Result<(), InputError> {
        let id = button.id();
        if self.get(id).is_some() {
            return Err(InputError::DuplicatePin(id));
        }
        self.buttons.push(button).map_err(|_| InputError::Full)
    }

    /// Register press and release handlers for the button on `pin`
    ///
    /// Both slots are replaced; pass `None` to leave one empty.
    pub fn register(
        &mut self,
        pin: PinId,
        on_press: Option<Handler<'a>>,
        on_release: Option<Handler<'a>>,
    ) -> Result<(), InputError> {
        let button = self
            .buttons
            .iter_mut()
            .find(|b| b.id() == pin)
            .ok_or(InputError::UnknownPin(pin))?;
        button.set_handlers(on_press, on_release);
        Ok(())
    }

    /// Update every button once
    ///
    /// Each confirmed transition is passed to `sink` after the button's own
    /// handler has run. Returns the number of transitions.
    pub fn update_all(&mut self, now_ms: u32, mut sink: impl FnMut(PinId, ButtonEvent)) -> usize {
        let mut count = 0;
        for button in self.buttons.iter_mut() {
            if let Some(event) = button.update(now_ms) {
                sink(button.id(), event);
                count += 1;
            }
        }
        count
    }

    pub fn get(&self, pin: PinId) -> Option<&Button<'a, P>> {
        self.buttons.iter().find(|b| b.id() == pin)
    }

    pub fn len(&self) -> usize {
        self.buttons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buttons.is_empty()
    }
}
