//! Low-level drawing primitives shared across widgets.

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use embedded_graphics::text::Text;

use crate::colors::BACKGROUND;
use crate::layout::Layout;
use crate::styles::CENTERED;

const BACKGROUND_FILL: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(BACKGROUND);

/// Fill a region with the background color, erasing the previous text.
pub fn clear_region<D>(
    display: &mut D,
    region: &Rectangle,
) where
    D: DrawTarget<Color = Rgb565>,
{
    region.into_styled(BACKGROUND_FILL).draw(display).ok();
}

/// Draw `text` centered in `region`.
///
/// Text wider than the region is clipped by the region, not wrapped.
pub fn draw_centered_text<D>(
    display: &mut D,
    region: &Rectangle,
    text: &str,
    style: MonoTextStyle<'_, Rgb565>,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let mut clipped = display.clipped(region);
    Text::with_text_style(text, Layout::anchor(region), style, CENTERED)
        .draw(&mut clipped)
        .ok();
}
