//! RP2040-specific HAL for the control surface
//!
//! This crate provides RP2040 implementations of the shared `orbit-hal`
//! traits:
//!
//! - Button inputs over embassy-rp GPIO
//! - Millisecond clock over embassy-time
//! - Edge-driven quadrature decoding into the shared delta slot
//! - WS2812 ring output via PIO, fed through a latest-frame signal

#![no_std]

pub mod clock;
pub mod gpio;
pub mod quadrature;
pub mod ws2812;

pub use clock::EmbassyClock;
pub use gpio::{ButtonPin, GPIO_COUNT};
pub use quadrature::QuadraturePins;
pub use ws2812::{FrameSignal, SignalStrip, Ws2812Ring};
