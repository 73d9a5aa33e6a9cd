//! Front-panel editing state
//!
//! Turns UI events into what the ring shows: the selected channel's beat
//! pattern with the edit cursor as the position marker. Timing and
//! playback belong to the sequencer, which is not part of this firmware
//! yet, so start/stop and mode are only logged.

use defmt::*;
use orbit_core::input::Direction;
use orbit_core::led::{LedRing, CHANNEL_COUNT};
use orbit_hal::LedStrip;

use crate::board::{ButtonRole, RING_LEN};
use crate::channels::UiEvent;

pub struct Surface {
    channel: usize,
    cursor: usize,
    patterns: [[bool; RING_LEN]; CHANNEL_COUNT],
}

impl Surface {
    pub const fn new() -> Self {
        Self {
            channel: 0,
            cursor: 0,
            patterns: [[false; RING_LEN]; CHANNEL_COUNT],
        }
    }

    /// Apply one event and restage the ring if anything visible changed
    pub fn apply<S: LedStrip>(&mut self, event: UiEvent, leds: &mut LedRing<S, RING_LEN>) {
        match event {
            UiEvent::Pressed(ButtonRole::Channel) => {
                self.channel = (self.channel + 1) % CHANNEL_COUNT;
                info!("Channel {}", self.channel);
            }
            UiEvent::Pressed(ButtonRole::Center) => {
                let beat = &mut self.patterns[self.channel][self.cursor];
                *beat = !*beat;
                debug!("Beat {} on channel {}: {}", self.cursor, self.channel, *beat);
            }
            UiEvent::Turned(direction) => {
                self.cursor = step_cursor(self.cursor, direction);
                trace!("Cursor {}", self.cursor);
            }
            UiEvent::Pressed(role) => {
                info!("{} pressed", role);
                return;
            }
            UiEvent::Released(role) => {
                trace!("{} released", role);
                return;
            }
        }
        self.render(leds);
    }

    /// Stage the current channel and cursor on the ring
    pub fn render<S: LedStrip>(&self, leds: &mut LedRing<S, RING_LEN>) {
        leds.set_beats(self.channel, &self.patterns[self.channel]);
        leds.set_position(Some(self.cursor));
    }
}

fn step_cursor(cursor: usize, direction: Direction) -> usize {
    match direction {
        Direction::Increment => (cursor + 1) % RING_LEN,
        Direction::Decrement => (cursor + RING_LEN - 1) % RING_LEN,
    }
}
