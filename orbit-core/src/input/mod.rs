//! Front-panel input handling
//!
//! - [`button`] - four-state debouncer for momentary switches
//! - [`encoder`] - direction events from the accumulated encoder delta
//! - [`quadrature`] - detent decoder and the atomic delta slot feeding it

pub mod button;
pub mod encoder;
pub mod quadrature;

pub use button::{Button, ButtonEvent, ButtonSet, DebounceState, PinId};
pub use encoder::{Direction, EncoderTracker};
pub use quadrature::{DeltaSlot, QuadratureDecoder};

/// Errors from building or wiring the button set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InputError {
    /// Button set is at capacity
    Full,
    /// A button for this pin already exists
    DuplicatePin(PinId),
    /// No button is bound to this pin
    UnknownPin(PinId),
}
