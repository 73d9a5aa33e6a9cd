//! Encoder task
//!
//! Decodes the A/B phases on GPIO edge interrupts and accumulates detents
//! for the control loop.

use defmt::*;
use orbit_hal_rp2040::QuadraturePins;

use crate::channels::ENCODER_DELTA;

#[embassy_executor::task]
pub async fn encoder_task(mut pins: QuadraturePins<'static>) {
    info!("Encoder task started");
    pins.run(&ENCODER_DELTA).await
}
