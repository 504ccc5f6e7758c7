//! Label region geometry.

use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

use crate::config::{LABEL_HEIGHT, LABEL_TOP_MARGIN, SCREEN_HEIGHT, SCREEN_WIDTH};

/// Screen regions for the two labels.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Layout {
    /// Primary value, near the top.
    pub primary: Rectangle,
    /// Converted value, just below the vertical midline.
    pub converted: Rectangle,
}

impl Layout {
    /// Compute the regions for a window of `bounds`.
    ///
    /// Both regions span the full width. The primary region starts
    /// [`LABEL_TOP_MARGIN`] below the top edge, the converted region the same
    /// distance below the midline.
    pub const fn for_bounds(bounds: Size) -> Self {
        let size = Size::new(bounds.width, LABEL_HEIGHT);
        Self {
            primary: Rectangle::new(Point::new(0, LABEL_TOP_MARGIN), size),
            converted: Rectangle::new(
                Point::new(0, (bounds.height / 2) as i32 + LABEL_TOP_MARGIN),
                size,
            ),
        }
    }

    /// Center point of a region, used as the text anchor.
    pub const fn anchor(region: &Rectangle) -> Point {
        Point::new(
            region.top_left.x + (region.size.width / 2) as i32,
            region.top_left.y + (region.size.height / 2) as i32,
        )
    }
}

/// Layout for the reference screen.
pub const REFERENCE_LAYOUT: Layout = Layout::for_bounds(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));

// =============================================================================
// Tests
// =============================================================================
