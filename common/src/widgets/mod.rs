//! Drawing for the temperature screen.
//!
//! All functions draw onto any `DrawTarget<Color = Rgb565>`, so the same code
//! runs in the simulator window and on the ST7789 panel.

mod labels;
mod primitives;

pub use labels::{draw_converted_label, draw_primary_label, draw_screen};
pub use primitives::{clear_region, draw_centered_text};
