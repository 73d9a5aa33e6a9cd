//! WS2812 LED ring output
//!
//! The control loop cannot await a DMA transfer, so the strip is split in
//! two halves:
//!
//! - [`SignalStrip`] implements `LedStrip` on the control-loop side. `show`
//!   copies the staged frame into a [`FrameSignal`] and returns immediately.
//! - [`Ws2812Ring`] runs in its own task, waits on the signal and clocks the
//!   frame out through PIO.
//!
//! The signal holds only the newest frame, so this stage never writes
//! faster than the frames it is handed.

use core::convert::Infallible;

use embassy_rp::dma::Channel;
use embassy_rp::pio::{Common, Instance, PioPin, StateMachine};
use embassy_rp::pio_programs::ws2812::{PioWs2812, PioWs2812Program};
use embassy_rp::Peri;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;
use orbit_hal::{LedStrip, RGB8};

/// Newest frame waiting to be clocked out
pub type FrameSignal<const N: usize> = Signal<CriticalSectionRawMutex, [RGB8; N]>;

/// Control-loop half of the strip
pub struct SignalStrip<const N: usize> {
    staged: [RGB8; N],
    frames: &'static FrameSignal<N>,
}

impl<const N: usize> SignalStrip<N> {
    pub fn new(frames: &'static FrameSignal<N>) -> Self {
        Self {
            staged: [RGB8::default(); N],
            frames,
        }
    }
}

impl<const N: usize> LedStrip for SignalStrip<N> {
    type Error = Infallible;

    fn len(&self) -> usize {
        N
    }

    fn set_pixel(&mut self, index: usize, color: RGB8) {
        if let Some(pixel) = self.staged.get_mut(index) {
            *pixel = color;
        }
    }

    fn show(&mut self) -> Result<(), Infallible> {
        self.frames.signal(self.staged);
        Ok(())
    }
}

/// PIO half of the strip
pub struct Ws2812Ring<'d, P: Instance, const S: usize, const N: usize> {
    driver: PioWs2812<'d, P, S, N>,
}

impl<'d, P: Instance, const S: usize, const N: usize> Ws2812Ring<'d, P, S, N> {
    /// Load the WS2812 program and bind it to `pin`
    pub fn new(
        common: &mut Common<'d, P>,
        sm: StateMachine<'d, P, S>,
        dma: Peri<'d, impl Channel>,
        pin: Peri<'d, impl PioPin>,
    ) -> Self {
        let program = PioWs2812Program::new(common);
        Self {
            driver: PioWs2812::new(common, sm, dma, pin, &program),
        }
    }

    /// Clock out every frame handed over through `frames`
    pub async fn run(&mut self, frames: &FrameSignal<N>) -> ! {
        loop {
            let frame = frames.wait().await;
            self.driver.write(&frame).await;
        }
    }
}
