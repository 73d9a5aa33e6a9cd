//! Embassy async tasks
//!
//! Each task runs independently and communicates via channels/signals.

pub mod encoder;
pub mod leds;

pub use encoder::encoder_task;
pub use leds::led_task;
