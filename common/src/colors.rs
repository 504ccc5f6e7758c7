//! Color constants for the display.
//!
//! Black and white come from the `RgbColor` trait constants; the dimmed text
//! color is built with `Rgb565::new(r, g, b)` (5/6/5-bit channels). Rgb565 is
//! native to the ST7789 panel, so no conversion happens on flush.

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};

/// Screen background.
pub const BACKGROUND: Rgb565 = Rgb565::BLACK;

/// Primary label text.
pub const PRIMARY_TEXT: Rgb565 = Rgb565::WHITE;

/// Converted label text. Dimmer so the active unit reads first.
/// RGB565: (20, 40, 20) - roughly 65% brightness.
pub const CONVERTED_TEXT: Rgb565 = Rgb565::new(20, 40, 20);
