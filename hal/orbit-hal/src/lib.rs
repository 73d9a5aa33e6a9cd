//! Orbit Hardware Abstraction Layer
//!
//! This crate defines the hardware abstraction traits the control surface
//! logic is written against. Chip-specific HALs (currently RP2040) implement
//! them, and host tests implement them with mocks.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Application (orbit-firmware)           │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  orbit-core (debounce, encoder, LEDs)   │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  orbit-hal (this crate - traits)        │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//!             ┌───────────────┐
//!             │  orbit-hal-   │
//!             │    rp2040     │
//!             └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::InputPin`] - Raw digital input
//! - [`clock::Clock`] - Monotonic millisecond clock
//! - [`quadrature::QuadratureCounter`] - Atomic encoder delta source
//! - [`led::LedStrip`] - Addressable LED strip

#![no_std]
#![deny(unsafe_code)]

pub mod clock;
pub mod gpio;
pub mod led;
pub mod quadrature;

// Re-export key traits at crate root for convenience
pub use clock::Clock;
pub use gpio::InputPin;
pub use led::{LedStrip, RGB8};
pub use quadrature::QuadratureCounter;
