//! End-to-end scenarios driving the components the way the control loop does

use std::cell::Cell;

use embassy_futures::block_on;
use embedded_hal_async::delay::DelayNs;
use orbit_core::config::TimingConfig;
use orbit_core::input::{Button, ButtonEvent, ButtonSet, DeltaSlot, Direction, EncoderTracker, PinId};
use orbit_core::led::{LedRing, CHANNEL_COLORS, MARKER, OFF};
use orbit_core::Panel;
use orbit_hal::{Clock, InputPin, LedStrip, RGB8};

const RING: usize = 16;

struct Pin<'c>(&'c Cell<bool>);

impl InputPin for Pin<'_> {
    fn is_high(&self) -> bool {
        self.0.get()
    }
}

struct TestClock<'c>(&'c Cell<u32>);

impl Clock for TestClock<'_> {
    fn now_ms(&self) -> u32 {
        self.0.get()
    }
}

#[derive(Debug, PartialEq)]
struct StripFault;

#[derive(Default)]
struct RecordingStrip {
    staged: [RGB8; RING],
    shown: Vec<[RGB8; RING]>,
}

impl LedStrip for RecordingStrip {
    type Error = StripFault;

    fn len(&self) -> usize {
        RING
    }

    fn set_pixel(&mut self, index: usize, color: RGB8) {
        if index < RING {
            self.staged[index] = color;
        }
    }

    fn show(&mut self) -> Result<(), StripFault> {
        self.shown.push(self.staged);
        Ok(())
    }
}

struct NoDelay;

impl DelayNs for NoDelay {
    async fn delay_ns(&mut self, _ns: u32) {}
}

fn unscaled() -> TimingConfig {
    TimingConfig {
        brightness: 255,
        ..TimingConfig::default()
    }
}

#[test]
fn button_held_60ms_presses_once_at_50ms() {
    let level = Cell::new(true);
    let press_times = Cell::new(0u32);
    let now = Cell::new(0u32);
    let mut on_press = || {
        assert_eq!(now.get(), 50);
        press_times.set(press_times.get() + 1);
    };

    let mut button = Button::new(PinId(27), Pin(&level));
    button.on_press(&mut on_press);

    level.set(false);
    for t in 0..=60 {
        now.set(t);
        button.update(t);
    }
    assert_eq!(press_times.get(), 1);

    // Still held: no second fire before release
    for t in 61..500 {
        now.set(t);
        assert_eq!(button.update(t), None);
    }
    assert_eq!(press_times.get(), 1);
}

#[test]
fn press_and_release_alternate_across_buttons() {
    let a = Cell::new(true);
    let b = Cell::new(true);
    let mut set: ButtonSet<'_, Pin<'_>, 2> = ButtonSet::new();
    set.add(Button::new(PinId(1), Pin(&a))).unwrap();
    set.add(Button::new(PinId(2), Pin(&b))).unwrap();

    let mut log: Vec<(PinId, ButtonEvent)> = Vec::new();
    for t in 0..400u32 {
        a.set(!(20..150).contains(&t));
        b.set(!(100..300).contains(&t));
        set.update_all(t, |pin, event| log.push((pin, event)));
    }

    let for_pin = |id| {
        log.iter()
            .filter(|(pin, _)| *pin == PinId(id))
            .map(|(_, e)| *e)
            .collect::<Vec<_>>()
    };
    assert_eq!(for_pin(1), [ButtonEvent::Pressed, ButtonEvent::Released]);
    assert_eq!(for_pin(2), [ButtonEvent::Pressed, ButtonEvent::Released]);
}

#[test]
fn encoder_deltas_map_to_directions() {
    let slot = DeltaSlot::new();
    let seen = Cell::new(0usize);
    let mut directions = [None; 4];
    let mut tracker = EncoderTracker::new(&slot);

    for (i, delta) in [3, -1, 0, 2].into_iter().enumerate() {
        slot.add(delta);
        directions[i] = tracker.update();
        if directions[i].is_some() {
            seen.set(seen.get() + 1);
        }
    }

    assert_eq!(
        directions,
        [
            Some(Direction::Increment),
            Some(Direction::Decrement),
            None,
            Some(Direction::Increment),
        ]
    );
    assert_eq!(seen.get(), 3);
}

#[test]
fn beats_flush_once_after_refresh_window() {
    let mut ring: LedRing<RecordingStrip, RING> = LedRing::new(RecordingStrip::default(), &unscaled());
    ring.reset_timer(0);

    let mut beats = [false; RING];
    beats[1] = true;
    beats[2] = true;

    ring.clear();
    ring.set_beats(0, &beats);
    assert_eq!(ring.poll(10), Ok(false));

    ring.set_beats(0, &beats);
    assert_eq!(ring.poll(20), Ok(false));
    assert_eq!(ring.poll(30), Ok(true));

    let shown = &ring.strip().shown;
    assert_eq!(shown.len(), 1);
    let red = CHANNEL_COLORS[0];
    let mut expected = [OFF; RING];
    expected[1] = red;
    expected[2] = red;
    assert_eq!(shown[0], expected);
}

#[test]
fn panel_runs_self_test_then_loop() {
    let now = Cell::new(0u32);
    let channel = Cell::new(true);
    let slot = DeltaSlot::new();
    let turns = Cell::new(0i32);
    let mut on_turn = |d: Direction| turns.set(turns.get() + d.step());

    let mut buttons: ButtonSet<'_, Pin<'_>, 4> = ButtonSet::new();
    buttons.add(Button::new(PinId(27), Pin(&channel))).unwrap();
    let mut encoder = EncoderTracker::new(&slot);
    encoder.on_turn(&mut on_turn);
    let leds = LedRing::new(RecordingStrip::default(), &unscaled());

    let mut panel: Panel<'_, _, _, _, _, 4, RING> = Panel::new(buttons, encoder, leds, TestClock(&now));

    now.set(1000);
    block_on(panel.start(&mut NoDelay)).unwrap();
    let after_self_test = panel.leds().strip().shown.len();
    assert_eq!(after_self_test, 3 * RING + 1);

    let mut presses = 0;
    let mut position = 0usize;
    channel.set(false);
    for t in 1001..1200u32 {
        now.set(t);
        if t % 5 == 0 {
            slot.add(1);
        }
        let report = panel
            .tick(|_, event| {
                if event == ButtonEvent::Pressed {
                    presses += 1;
                }
            })
            .unwrap();
        if let Some(direction) = report.turn {
            position = (position as i32 + direction.step()).rem_euclid(RING as i32) as usize;
            panel.leds_mut().set_position(Some(position));
        }
    }

    assert_eq!(presses, 1);
    assert!(turns.get() > 0);
    assert!(panel.buttons().get(PinId(27)).unwrap().is_pressed());

    // ~200 ms of constant change at 30 ms windows
    let flushes = panel.leds().flush_count();
    assert!((5..=7).contains(&flushes), "flushes = {flushes}");
    let last = panel.leds().strip().shown.last().unwrap();
    assert!(last.contains(&MARKER));
}
