//! Edge-driven quadrature input
//!
//! Both encoder phases are GPIO inputs with pull-ups. The driver sleeps on
//! the GPIO edge interrupt of either pin, decodes, and adds completed
//! detents to a [`DeltaSlot`]. It never calls application code.

use embassy_futures::select::select;
use embassy_rp::gpio::{Input, Pin, Pull};
use embassy_rp::Peri;
use orbit_core::input::{DeltaSlot, QuadratureDecoder};

/// Encoder A/B inputs
pub struct QuadraturePins<'d> {
    a: Input<'d>,
    b: Input<'d>,
}

impl<'d> QuadraturePins<'d> {
    pub fn new(a: Peri<'d, impl Pin>, b: Peri<'d, impl Pin>) -> Self {
        Self {
            a: Input::new(a, Pull::Up),
            b: Input::new(b, Pull::Up),
        }
    }

    /// Decode forever, accumulating detents into `slot`
    pub async fn run(&mut self, slot: &DeltaSlot) -> ! {
        let mut decoder = QuadratureDecoder::new(self.a.is_high(), self.b.is_high());

        loop {
            select(self.a.wait_for_any_edge(), self.b.wait_for_any_edge()).await;

            if let Some(direction) = decoder.update(self.a.is_high(), self.b.is_high()) {
                slot.record(direction);
            }
        }
    }
}
