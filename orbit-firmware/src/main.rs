//! Orbit - Step Sequencer Control Surface Firmware
//!
//! Main firmware binary for the RP2040 front panel: four debounced
//! buttons, a quadrature encoder and a WS2812 ring showing the selected
//! channel's beat pattern.
//!
//! The control loop owns all application state. The encoder and the LED
//! ring each have a task that only moves data between hardware and a
//! static hand-off point.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::bind_interrupts;
use embassy_rp::peripherals::PIO0;
use embassy_rp::pio::Pio;
use embassy_time::{Delay, Duration, Ticker};
use {defmt_rtt as _, panic_probe as _};

use orbit_core::config::{TimingConfig, NUM_BUTTONS};
use orbit_core::input::{Button, ButtonSet, Direction, EncoderTracker};
use orbit_core::led::LedRing;
use orbit_core::Panel;
use orbit_hal::LedStrip;
use orbit_hal_rp2040::{ButtonPin, EmbassyClock, QuadraturePins, SignalStrip, Ws2812Ring, GPIO_COUNT};

mod board;
mod channels;
mod tasks;
mod ui;

use crate::board::{ButtonRole, PINS, RING_LEN};
use crate::channels::{UiEvent, ENCODER_DELTA, LED_FRAME, UI_CHANNEL};

bind_interrupts!(struct Irqs {
    PIO0_IRQ_0 => embassy_rp::pio::InterruptHandler<PIO0>;
});

/// Queue a UI event for the control loop
///
/// Handlers run inside the control loop, so a full queue means the loop
/// has stopped draining it. The event is dropped.
fn post(event: UiEvent) {
    if UI_CHANNEL.try_send(event).is_err() {
        warn!("UI queue full, dropping {}", event);
    }
}

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Orbit firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let timing = TimingConfig::default();
    unwrap!(PINS.validate(GPIO_COUNT));
    unwrap!(timing.validate(SignalStrip::<RING_LEN>::MIN_REFRESH_MS));
    info!(
        "Timing: debounce={}ms refresh={}ms loop={}ms",
        timing.debounce_ms, timing.min_refresh_ms, timing.loop_period_ms
    );

    // WS2812 ring on PIO0 (data: GPIO7)
    let Pio {
        mut common, sm0, ..
    } = Pio::new(p.PIO0, Irqs);
    let ring = Ws2812Ring::new(&mut common, sm0, p.DMA_CH0, p.PIN_7);
    spawner.spawn(tasks::led_task(ring)).unwrap();

    // Encoder phases (A: GPIO16, B: GPIO17)
    let encoder_pins = QuadraturePins::new(p.PIN_16, p.PIN_17);
    spawner.spawn(tasks::encoder_task(encoder_pins)).unwrap();

    // Handlers must outlive the button set and the tracker that borrow them
    let mut channel_pressed = || post(UiEvent::Pressed(ButtonRole::Channel));
    let mut start_stop_pressed = || post(UiEvent::Pressed(ButtonRole::StartStop));
    let mut mode_pressed = || post(UiEvent::Pressed(ButtonRole::Mode));
    let mut center_pressed = || post(UiEvent::Pressed(ButtonRole::Center));
    let mut center_released = || post(UiEvent::Released(ButtonRole::Center));
    let mut turned = |direction: Direction| post(UiEvent::Turned(direction));

    // Buttons (pin order follows board::PINS)
    let mut buttons: ButtonSet<'_, ButtonPin<'static>, NUM_BUTTONS> = ButtonSet::new();
    let pins = [
        (ButtonRole::Channel, ButtonPin::new(p.PIN_27)),
        (ButtonRole::StartStop, ButtonPin::new(p.PIN_26)),
        (ButtonRole::Mode, ButtonPin::new(p.PIN_22)),
        (ButtonRole::Center, ButtonPin::new(p.PIN_18)),
    ];
    for (role, pin) in pins {
        unwrap!(buttons.add(Button::with_interval(role.pin(), pin, timing.debounce_ms)));
    }
    unwrap!(buttons.register(ButtonRole::Channel.pin(), Some(&mut channel_pressed), None));
    unwrap!(buttons.register(ButtonRole::StartStop.pin(), Some(&mut start_stop_pressed), None));
    unwrap!(buttons.register(ButtonRole::Mode.pin(), Some(&mut mode_pressed), None));
    unwrap!(buttons.register(
        ButtonRole::Center.pin(),
        Some(&mut center_pressed),
        Some(&mut center_released),
    ));

    let mut encoder = EncoderTracker::new(&ENCODER_DELTA);
    encoder.on_turn(&mut turned);

    let leds: LedRing<_, RING_LEN> = LedRing::new(SignalStrip::new(&LED_FRAME), &timing);
    unwrap!(leds.check_strip());

    let mut panel = Panel::new(buttons, encoder, leds, EmbassyClock);
    info!("Control surface initialized");

    info!("Running LED self-test");
    if let Err(never) = panel.start(&mut Delay).await {
        match never {}
    }

    let mut surface = ui::Surface::new();
    surface.render(panel.leds_mut());

    info!("Entering control loop");
    let mut ticker = Ticker::every(Duration::from_millis(timing.loop_period_ms as u64));

    loop {
        let report = match panel.tick(|pin, event| {
            if let Some(role) = ButtonRole::from_pin(pin) {
                trace!("{}: {}", role, event);
            }
        }) {
            Ok(report) => report,
            Err(never) => match never {},
        };

        if report.flushed {
            trace!("LED frame flushed");
        }

        while let Ok(event) = UI_CHANNEL.try_receive() {
            surface.apply(event, panel.leds_mut());
        }

        ticker.next().await;
    }
}
