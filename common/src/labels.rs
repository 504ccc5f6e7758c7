//! Label formatting for the two temperature regions.
//!
//! Each label is the decimal value followed by its unit letter, written into
//! a fixed buffer of [`LABEL_CAPACITY`] visible characters. Text past the
//! capacity is dropped, exactly like a bounded `snprintf`:
//!
//! | Value | Unit | Label |
//! |-------|------|-------|
//! | 72 | F | `72F` |
//! | -5 | C | `-5C` |
//! | 1000 | F | `1000` |
//! | -100 | C | `-100` |
//!
//! Labels with a cut-off suffix are a known layout limitation of the 4-column
//! buffer. The `wide-labels` feature raises the capacity instead.

use core::fmt::{self, Write};

use heapless::String;

use crate::config::LABEL_CAPACITY;
use crate::temperature::TemperatureState;
use crate::units::Unit;

/// Fixed-capacity label text.
pub type Label = String<LABEL_CAPACITY>;

/// Text for both regions, produced by [`render`].
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct Labels {
    /// Value in the active unit.
    pub primary: Label,
    /// Value in the inactive unit.
    pub converted: Label,
}

/// `fmt::Write` adapter that keeps whatever fits and silently drops the rest.
struct Truncating<'a, const N: usize> {
    buf: &'a mut String<N>,
}

impl<const N: usize> Write for Truncating<'_, N> {
    fn write_str(
        &mut self,
        s: &str,
    ) -> fmt::Result {
        for c in s.chars() {
            if self.buf.push(c).is_err() {
                break;
            }
        }
        Ok(())
    }
}

/// Format `value` with `unit`'s suffix into `out`, replacing its contents.
pub fn write_label<const N: usize>(
    out: &mut String<N>,
    value: i32,
    unit: Unit,
) {
    out.clear();
    let mut w = Truncating { buf: out };
    // Truncating never reports an error.
    let _ = write!(w, "{value}{}", unit.suffix());
}

/// Format a single label.
pub fn format_label(
    value: i32,
    unit: Unit,
) -> Label {
    let mut label = Label::new();
    write_label(&mut label, value, unit);
    label
}

/// Project the model into label text.
///
/// The primary value carries the active unit's letter, the converted value the
/// opposite letter.
pub fn render(state: &TemperatureState) -> Labels {
    let mut labels = Labels::default();
    render_into(state, &mut labels);
    labels
}

/// Like [`render`], reusing existing buffers.
pub fn render_into(
    state: &TemperatureState,
    labels: &mut Labels,
) {
    write_label(&mut labels.primary, state.primary_value(), state.unit());
    write_label(&mut labels.converted, state.converted_value(), state.unit().opposite());
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_state_labels() {
        let labels = render(&TemperatureState::new());
        assert_eq!(labels.primary.as_str(), "32F");
        assert_eq!(labels.converted.as_str(), "0C");
    }

    #[test]
    fn test_suffixes_follow_unit() {
        let mut state = TemperatureState::new();
        state.swap_units();
        let labels = render(&state);
        assert_eq!(labels.primary.as_str(), "0C");
        assert_eq!(labels.converted.as_str(), "32F");
    }

    #[test]
    fn test_negative_value() {
        assert_eq!(format_label(-5, Unit::Celsius).as_str(), "-5C");
        assert_eq!(format_label(-40, Unit::Fahrenheit).as_str(), "-40F");
    }

    #[test]
    fn test_three_digits_fit() {
        assert_eq!(format_label(212, Unit::Fahrenheit).as_str(), "212F");
        assert_eq!(format_label(-10, Unit::Celsius).as_str(), "-10C");
    }

    #[cfg(not(feature = "wide-labels"))]
    #[test]
    fn test_overlong_labels_are_cut() {
        assert_eq!(format_label(1000, Unit::Fahrenheit).as_str(), "1000");
        assert_eq!(format_label(-100, Unit::Celsius).as_str(), "-100");
        assert_eq!(format_label(123_456, Unit::Celsius).as_str(), "1234");
        assert_eq!(format_label(i32::MIN, Unit::Celsius).as_str(), "-214");
    }

    #[cfg(feature = "wide-labels")]
    #[test]
    fn test_wide_labels_fit_every_value() {
        assert_eq!(format_label(1000, Unit::Fahrenheit).as_str(), "1000F");
        assert_eq!(format_label(i32::MIN, Unit::Celsius).as_str(), "-2147483648C");
    }

    #[test]
    fn test_write_label_replaces_previous_text() {
        let mut label = format_label(212, Unit::Fahrenheit);
        write_label(&mut label, 7, Unit::Celsius);
        assert_eq!(label.as_str(), "7C");
    }

    #[test]
    fn test_render_into_matches_render() {
        let mut state = TemperatureState::new();
        state.sync();
        for _ in 0..40 {
            state.increment();
        }
        let mut labels = render(&TemperatureState::new());
        render_into(&state, &mut labels);
        assert_eq!(labels, render(&state));
        assert_eq!(labels.primary.as_str(), "72F");
        assert_eq!(labels.converted.as_str(), "22C");
    }
}
