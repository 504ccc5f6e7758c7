//! Pre-computed text styles.
//!
//! Styles are `const` so draw calls reference them directly instead of
//! rebuilding `MonoTextStyle`/`TextStyle` values on every redraw.

use embedded_graphics::mono_font::{MonoFont, MonoTextStyle};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::text::{Alignment, Baseline, TextStyle, TextStyleBuilder};
use profont::PROFONT_24_POINT;

use crate::colors::{CONVERTED_TEXT, PRIMARY_TEXT};

/// Centered both ways around the anchor point.
pub const CENTERED: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Center)
    .baseline(Baseline::Middle)
    .build();

/// Value font (`ProFont` 24pt). Exposed for width checks.
pub const VALUE_FONT: &MonoFont = &PROFONT_24_POINT;

/// Primary label style.
pub const PRIMARY_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&PROFONT_24_POINT, PRIMARY_TEXT);

/// Converted label style.
pub const CONVERTED_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&PROFONT_24_POINT, CONVERTED_TEXT);
