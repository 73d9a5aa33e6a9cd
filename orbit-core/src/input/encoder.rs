//! Encoder direction events
//!
//! The tracker runs on the control loop. It drains the accumulated delta
//! once per poll and reports only its sign: a fast multi-detent turn inside
//! one poll window becomes a single event. Exact step counting is not
//! needed by the sequencer UI.

use orbit_hal::QuadratureCounter;

/// Rotation direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    /// Clockwise / up
    Increment,
    /// Counter-clockwise / down
    Decrement,
}

impl Direction {
    /// Direction of a non-zero delta
    pub fn from_delta(delta: i32) -> Option<Self> {
        match delta {
            d if d > 0 => Some(Direction::Increment),
            d if d < 0 => Some(Direction::Decrement),
            _ => None,
        }
    }

    pub fn is_increment(self) -> bool {
        self == Direction::Increment
    }

    /// Signed unit step (+1 or -1)
    pub fn step(self) -> i32 {
        match self {
            Direction::Increment => 1,
            Direction::Decrement => -1,
        }
    }
}

impl From<Direction> for bool {
    fn from(direction: Direction) -> bool {
        direction.is_increment()
    }
}

/// Handler for direction events
pub type TurnHandler<'a> = &'a mut dyn FnMut(Direction);

/// Converts the accumulated encoder delta into direction events
pub struct EncoderTracker<'a, Q> {
    counter: Q,
    on_turn: Option<TurnHandler<'a>>,
}

impl<'a, Q: QuadratureCounter> EncoderTracker<'a, Q> {
    pub fn new(counter: Q) -> Self {
        Self {
            counter,
            on_turn: None,
        }
    }

    /// Register the direction handler, replacing any previous one
    pub fn on_turn(&mut self, handler: TurnHandler<'a>) {
        self.on_turn = Some(handler);
    }

    /// Drain the counter and report the net direction
    ///
    /// Invokes the handler at most once per call.
    pub fn update(&mut self) -> Option<Direction> {
        let direction = Direction::from_delta(self.counter.take_delta())?;
        if let Some(handler) = self.on_turn.as_mut() {
            handler(direction);
        }
        Some(direction)
    }
}
