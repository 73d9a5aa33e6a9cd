//! LED ring rendering
//!
//! - [`ring`] - coalescing, rate-limited frame buffer
//! - [`palette`] - channel colours
//! - [`self_test`] - startup sweep pattern

pub mod palette;
pub mod ring;
pub mod self_test;

pub use palette::{channel_color, CHANNEL_COLORS, CHANNEL_COUNT, MARKER, OFF};
pub use ring::LedRing;
pub use self_test::{SelfTest, SweepStep};
