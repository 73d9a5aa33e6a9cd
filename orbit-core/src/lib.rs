//! Board-agnostic control surface logic for the step sequencer
//!
//! This crate contains the input/output synchronization layer that does not
//! depend on specific hardware implementations:
//!
//! - Button debouncing (four-state machine, time-gated re-check)
//! - Quadrature decoding and the atomic encoder delta hand-off
//! - Encoder direction events for the control loop
//! - Rate-limited, coalescing LED ring rendering and the startup self-test
//! - Timing and pin configuration
//!
//! Everything is polled from one cooperative loop; nothing here blocks
//! except the bounded startup self-test.

#![no_std]
#![deny(unsafe_code)]

pub mod config;
pub mod input;
pub mod led;
pub mod panel;

pub use panel::{Panel, TickReport};
