//! Render state tracking for minimal display updates.
//!
//! [`RenderState`] remembers the text last pushed to each region and reports
//! which regions need a redraw, so a button press that leaves a label
//! unchanged (e.g. 33F and 32F both read `0C`) does not touch that region.
//!
//! | Element | Redraw when |
//! |---------|-------------|
//! | Primary label | First frame / after clear / text changed |
//! | Converted label | First frame / after clear / text changed |

use crate::labels::{Label, Labels};

/// Regions to redraw this frame.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub struct Dirty {
    pub primary: bool,
    pub converted: bool,
}

impl Dirty {
    /// Everything needs drawing.
    pub const ALL: Self = Self {
        primary: true,
        converted: true,
    };

    /// Whether anything needs drawing.
    #[inline]
    pub const fn any(self) -> bool { self.primary || self.converted }
}

/// Tracks what is currently on screen.
pub struct RenderState {
    /// Text last drawn in the primary region.
    prev_primary: Label,

    /// Text last drawn in the converted region.
    prev_converted: Label,

    /// Whether this is the first frame (need full redraw).
    first_frame: bool,

    /// Whether the display was cleared externally.
    display_cleared: bool,
}

impl RenderState {
    /// Create a new render state for first frame.
    pub const fn new() -> Self {
        Self {
            prev_primary: Label::new(),
            prev_converted: Label::new(),
            first_frame: true,
            display_cleared: false,
        }
    }

    /// Compare `labels` against what is on screen and record them as drawn.
    pub fn check_dirty(
        &mut self,
        labels: &Labels,
    ) -> Dirty {
        let full = self.first_frame || self.display_cleared;
        let dirty = Dirty {
            primary: full || labels.primary != self.prev_primary,
            converted: full || labels.converted != self.prev_converted,
        };

        if dirty.primary {
            self.prev_primary.clone_from(&labels.primary);
        }
        if dirty.converted {
            self.prev_converted.clone_from(&labels.converted);
        }
        self.first_frame = false;
        self.display_cleared = false;
        dirty
    }

    /// Force a full redraw on the next check.
    #[inline]
    pub fn mark_display_cleared(&mut self) { self.display_cleared = true; }

    /// Check if this is the first frame.
    #[inline]
    pub const fn is_first_frame(&self) -> bool { self.first_frame }
}

impl Default for RenderState {
    fn default() -> Self { Self::new() }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::labels::render;
    use crate::temperature::TemperatureState;

    #[test]
    fn test_first_frame_draws_everything() {
        let mut rs = RenderState::new();
        assert!(rs.is_first_frame());

        let dirty = rs.check_dirty(&render(&TemperatureState::new()));

        assert_eq!(dirty, Dirty::ALL);
        assert!(!rs.is_first_frame());
    }

    #[test]
    fn test_unchanged_labels_are_clean() {
        let mut rs = RenderState::new();
        let labels = render(&TemperatureState::new());
        rs.check_dirty(&labels);

        let dirty = rs.check_dirty(&labels);

        assert!(!dirty.any());
    }

    #[test]
    fn test_only_changed_region_is_dirty() {
        let mut state = TemperatureState::new();
        state.sync();
        let mut rs = RenderState::new();
        rs.check_dirty(&render(&state));

        // 32F -> 33F, converted stays 0C
        state.increment();
        let dirty = rs.check_dirty(&render(&state));

        assert!(dirty.primary);
        assert!(!dirty.converted);
    }

    #[test]
    fn test_swap_dirties_both_labels() {
        let mut state = TemperatureState::new();
        state.sync();
        let mut rs = RenderState::new();
        rs.check_dirty(&render(&state));

        state.swap_units();
        let dirty = rs.check_dirty(&render(&state));

        assert!(dirty.primary);
        assert!(dirty.converted);
    }

    #[test]
    fn test_display_cleared_forces_full_redraw() {
        let mut rs = RenderState::new();
        let labels = render(&TemperatureState::new());
        rs.check_dirty(&labels);

        rs.mark_display_cleared();
        assert_eq!(rs.check_dirty(&labels), Dirty::ALL);
        assert!(!rs.check_dirty(&labels).any());
    }
}
