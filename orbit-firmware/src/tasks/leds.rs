//! LED task
//!
//! Clocks frames handed over by the control loop out to the WS2812 ring.

use defmt::*;
use embassy_rp::peripherals::PIO0;
use orbit_hal_rp2040::Ws2812Ring;

use crate::board::RING_LEN;
use crate::channels::LED_FRAME;

/// Ring on PIO0, state machine 0
pub type Ring = Ws2812Ring<'static, PIO0, 0, RING_LEN>;

#[embassy_executor::task]
pub async fn led_task(mut ring: Ring) {
    info!("LED task started");
    ring.run(&LED_FRAME).await
}
