//! Inter-task communication channels
//!
//! Static hand-off points between the control loop, the encoder task and
//! the LED task.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use embassy_sync::signal::Signal;

use orbit_core::input::{DeltaSlot, Direction};
use orbit_hal_rp2040::FrameSignal;

use crate::board::{ButtonRole, RING_LEN};

/// Channel capacity for front-panel events
const UI_CHANNEL_SIZE: usize = 8;

/// Front-panel events raised by the input handlers
#[derive(Debug, Clone, Copy, PartialEq, Eq, defmt::Format)]
pub enum UiEvent {
    Pressed(ButtonRole),
    Released(ButtonRole),
    Turned(Direction),
}

/// Events from button and encoder handlers, drained by the control loop
pub static UI_CHANNEL: Channel<CriticalSectionRawMutex, UiEvent, UI_CHANNEL_SIZE> =
    Channel::new();

/// Detents accumulated by the encoder task since the last control pass
pub static ENCODER_DELTA: DeltaSlot = DeltaSlot::new();

/// Newest LED frame for the LED task
pub static LED_FRAME: FrameSignal<RING_LEN> = Signal::new();
