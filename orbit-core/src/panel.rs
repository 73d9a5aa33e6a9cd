//! Control surface façade
//!
//! Bundles the buttons, the encoder tracker and the LED ring behind one
//! clock so the control loop makes a single call per pass.

use embedded_hal_async::delay::DelayNs;
use orbit_hal::{Clock, InputPin, LedStrip, QuadratureCounter};

use crate::input::{ButtonEvent, ButtonSet, Direction, EncoderTracker, PinId};
use crate::led::LedRing;

/// What happened during one control-loop pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TickReport {
    /// Confirmed button transitions
    pub button_events: usize,
    /// Encoder direction reported this pass
    pub turn: Option<Direction>,
    /// Whether the LED strip was written
    pub flushed: bool,
}

/// All front-panel I/O driven from one clock
pub struct Panel<'a, P, Q, S, C, const B: usize, const N: usize> {
    buttons: ButtonSet<'a, P, B>,
    encoder: EncoderTracker<'a, Q>,
    leds: LedRing<S, N>,
    clock: C,
}

impl<'a, P, Q, S, C, const B: usize, const N: usize> Panel<'a, P, Q, S, C, B, N>
where
    P: InputPin,
    Q: QuadratureCounter,
    S: LedStrip,
    C: Clock,
{
    pub fn new(
        buttons: ButtonSet<'a, P, B>,
        encoder: EncoderTracker<'a, Q>,
        leds: LedRing<S, N>,
        clock: C,
    ) -> Self {
        Self {
            buttons,
            encoder,
            leds,
            clock,
        }
    }

    /// Run the LED self-test and start the first refresh window
    ///
    /// Call once before entering the control loop.
    pub async fn start<D: DelayNs>(&mut self, delay: &mut D) -> Result<(), S::Error> {
        self.leds.self_test(delay, &self.clock).await
    }

    /// One control-loop pass: buttons, then encoder, then LEDs
    ///
    /// Button transitions are passed to `sink` after their handlers run.
    pub fn tick(&mut self, sink: impl FnMut(PinId, ButtonEvent)) -> Result<TickReport, S::Error> {
        let now_ms = self.clock.now_ms();
        let button_events = self.buttons.update_all(now_ms, sink);
        let turn = self.encoder.update();
        let flushed = self.leds.poll(now_ms)?;

        Ok(TickReport {
            button_events,
            turn,
            flushed,
        })
    }

    pub fn buttons(&self) -> &ButtonSet<'a, P, B> {
        &self.buttons
    }

    pub fn buttons_mut(&mut self) -> &mut ButtonSet<'a, P, B> {
        &mut self.buttons
    }

    pub fn encoder_mut(&mut self) -> &mut EncoderTracker<'a, Q> {
        &mut self.encoder
    }

    pub fn leds(&self) -> &LedRing<S, N> {
        &self.leds
    }

    pub fn leds_mut(&mut self) -> &mut LedRing<S, N> {
        &mut self.leds
    }
}
