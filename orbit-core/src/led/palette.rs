//! Fixed channel colours

use orbit_hal::RGB8;

/// Number of sequencer channels with a dedicated colour
pub const CHANNEL_COUNT: usize = 8;

/// Unlit pixel
pub const OFF: RGB8 = RGB8 { r: 0, g: 0, b: 0 };

/// Playback position marker
pub const MARKER: RGB8 = RGB8 {
    r: 255,
    g: 255,
    b: 255,
};

/// Beat colour for each channel
pub const CHANNEL_COLORS: [RGB8; CHANNEL_COUNT] = [
    RGB8 { r: 255, g: 0, b: 0 },     // red
    RGB8 { r: 0, g: 0, b: 255 },     // blue
    RGB8 { r: 0, g: 128, b: 0 },     // green
    RGB8 { r: 250, g: 128, b: 114 }, // salmon
    RGB8 { r: 0, g: 255, b: 255 },   // cyan
    RGB8 { r: 128, g: 128, b: 0 },   // olive
    RGB8 { r: 230, g: 230, b: 250 }, // lavender
    RGB8 { r: 205, g: 133, b: 63 },  // peru
];

/// Colour for `channel`, wrapping past the last entry
pub fn channel_color(channel: usize) -> RGB8 {
    CHANNEL_COLORS[channel % CHANNEL_COUNT]
}
