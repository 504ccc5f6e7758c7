//! The two temperature labels.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;

use super::primitives::{clear_region, draw_centered_text};
use crate::labels::Labels;
use crate::layout::Layout;
use crate::render::Dirty;
use crate::styles::{CONVERTED_STYLE, PRIMARY_STYLE};

/// Redraw the primary value region.
pub fn draw_primary_label<D>(
    display: &mut D,
    layout: &Layout,
    text: &str,
) where
    D: DrawTarget<Color = Rgb565>,
{
    clear_region(display, &layout.primary);
    draw_centered_text(display, &layout.primary, text, PRIMARY_STYLE);
}

/// Redraw the converted value region.
pub fn draw_converted_label<D>(
    display: &mut D,
    layout: &Layout,
    text: &str,
) where
    D: DrawTarget<Color = Rgb565>,
{
    clear_region(display, &layout.converted);
    draw_centered_text(display, &layout.converted, text, CONVERTED_STYLE);
}

/// Redraw whatever `dirty` marks.
pub fn draw_screen<D>(
    display: &mut D,
    layout: &Layout,
    labels: &Labels,
    dirty: Dirty,
) where
    D: DrawTarget<Color = Rgb565>,
{
    if dirty.primary {
        draw_primary_label(display, layout, &labels.primary);
    }
    if dirty.converted {
        draw_converted_label(display, layout, &labels.converted);
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use embedded_graphics::mock_display::MockDisplay;
    use embedded_graphics::primitives::Rectangle;

    use super::*;
    use crate::colors::{BACKGROUND, CONVERTED_TEXT, PRIMARY_TEXT};
    use crate::labels::render;
    use crate::temperature::TemperatureState;

    fn mock() -> MockDisplay<Rgb565> {
        let mut display = MockDisplay::new();
        display.set_allow_overdraw(true);
        display.set_allow_out_of_bounds_drawing(true);
        display
    }

    fn count_color(
        display: &MockDisplay<Rgb565>,
        color: Rgb565,
    ) -> usize {
        display
            .bounding_box()
            .points()
            .filter(|p| display.get_pixel(*p) == Some(color))
            .count()
    }

    #[test]
    fn test_primary_label_clears_and_draws_text() {
        let layout = Layout::for_bounds(Size::new(64, 64));
        let mut display = mock();

        draw_primary_label(&mut display, &layout, "32F");

        assert_eq!(display.get_pixel(Point::new(0, 10)), Some(BACKGROUND));
        assert!(count_color(&display, PRIMARY_TEXT) > 0);
        // Nothing above the region is touched.
        assert_eq!(display.get_pixel(Point::new(0, 0)), None);
    }

    #[test]
    fn test_converted_label_uses_its_own_color() {
        let layout = Layout::for_bounds(Size::new(64, 40));
        let mut display = mock();

        draw_converted_label(&mut display, &layout, "0C");

        assert!(count_color(&display, CONVERTED_TEXT) > 0);
        assert_eq!(count_color(&display, PRIMARY_TEXT), 0);
    }

    #[test]
    fn test_clean_screen_draws_nothing() {
        let layout = Layout::for_bounds(Size::new(64, 64));
        let labels = render(&TemperatureState::new());
        let mut display = mock();

        draw_screen(&mut display, &layout, &labels, Dirty::default());

        assert_eq!(display.affected_area().size, Size::zero());
    }

    #[test]
    fn test_full_redraw_leaves_gap_between_regions_untouched() {
        let layout = Layout {
            primary: Rectangle::new(Point::new(0, 0), Size::new(64, 20)),
            converted: Rectangle::new(Point::new(0, 40), Size::new(64, 20)),
        };
        let labels = render(&TemperatureState::new());
        let mut display = mock();

        draw_screen(&mut display, &layout, &labels, Dirty::ALL);

        assert_eq!(display.get_pixel(Point::new(0, 0)), Some(BACKGROUND));
        assert_eq!(display.get_pixel(Point::new(0, 40)), Some(BACKGROUND));
        for y in 20..40 {
            assert_eq!(display.get_pixel(Point::new(32, y)), None);
        }
    }
}
