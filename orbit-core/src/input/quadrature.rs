//! Quadrature decoding and the encoder delta hand-off
//!
//! [`QuadratureDecoder`] runs in the encoder's edge context and turns raw
//! A/B levels into detents. Each detent is added to a [`DeltaSlot`], which
//! the control loop drains with a single atomic swap.

use orbit_hal::QuadratureCounter;
use portable_atomic::{AtomicI32, Ordering};

use super::encoder::Direction;

/// Single-producer/single-consumer accumulator for encoder detents
///
/// The producer only adds, the consumer only swaps to zero, so neither side
/// ever blocks the other.
#[derive(Debug, Default)]
pub struct DeltaSlot {
    delta: AtomicI32,
}

impl DeltaSlot {
    pub const fn new() -> Self {
        Self {
            delta: AtomicI32::new(0),
        }
    }

    /// Accumulate movement (edge-context side)
    pub fn add(&self, steps: i32) {
        self.delta.fetch_add(steps, Ordering::Relaxed);
    }

    /// Record one detent in `direction`
    pub fn record(&self, direction: Direction) {
        self.add(direction.step());
    }

    /// Read and clear the accumulated movement (control-loop side)
    pub fn take(&self) -> i32 {
        self.delta.swap(0, Ordering::Relaxed)
    }

    /// Current accumulated value without clearing it
    pub fn peek(&self) -> i32 {
        self.delta.load(Ordering::Relaxed)
    }
}

impl QuadratureCounter for &DeltaSlot {
    fn take_delta(&mut self) -> i32 {
        self.take()
    }
}

/// Decoder state machine states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
enum State {
    Idle,
    CwStep1,
    CwStep2,
    CcwStep1,
    CcwStep2,
}

/// Quadrature decoder emitting one direction per detent
///
/// Both phases idle high (pull-ups). A clockwise detent is:
/// (1,1) → A falls (0,1) → both low (0,0) → either rises → emit.
/// Counter-clockwise is the same with B leading.
#[derive(Debug, Clone)]
pub struct QuadratureDecoder {
    state: State,
    last_a: bool,
    last_b: bool,
}

impl QuadratureDecoder {
    /// Create a decoder seeded with the current pin levels
    pub fn new(a: bool, b: bool) -> Self {
        Self {
            state: State::Idle,
            last_a: a,
            last_b: b,
        }
    }

    /// Feed the current A/B levels
    ///
    /// Returns a direction when a full detent completes. Repeated levels
    /// are ignored.
    pub fn update(&mut self, a: bool, b: bool) -> Option<Direction> {
        if a == self.last_a && b == self.last_b {
            return None;
        }
        self.last_a = a;
        self.last_b = b;

        match self.state {
            State::Idle => {
                if !a && b {
                    // A fell first
                    self.state = State::CwStep1;
                } else if a && !b {
                    self.state = State::CcwStep1;
                }
                None
            }
            State::CwStep1 | State::CcwStep1 => {
                if !a && !b {
                    self.state = if self.state == State::CwStep1 {
                        State::CwStep2
                    } else {
                        State::CcwStep2
                    };
                } else if a && b {
                    // Back to idle (noise/bounce)
                    self.state = State::Idle;
                }
                None
            }
            State::CwStep2 => self.complete(a, b, Direction::Increment),
            State::CcwStep2 => self.complete(a, b, Direction::Decrement),
        }
    }

    fn complete(&mut self, a: bool, b: bool, direction: Direction) -> Option<Direction> {
        if a || b {
            self.state = State::Idle;
            Some(direction)
        } else {
            None
        }
    }
}
