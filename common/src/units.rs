//! Temperature units and the integer conversion formulas.
//!
//! Conversions use truncating integer division, so they are not exact
//! inverses: `fahrenheit(celsius(f))` can land a degree or two away from `f`.
//! Every displayed value depends on this, so the formulas must stay as they
//! are. Arithmetic wraps on overflow in every build profile.

/// Unit a temperature value is expressed in.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub enum Unit {
    #[default]
    Fahrenheit,
    Celsius,
}

impl Unit {
    /// The other unit.
    pub const fn opposite(self) -> Self {
        match self {
            Self::Fahrenheit => Self::Celsius,
            Self::Celsius => Self::Fahrenheit,
        }
    }

    /// Single-letter suffix appended to labels.
    pub const fn suffix(self) -> char {
        match self {
            Self::Fahrenheit => 'F',
            Self::Celsius => 'C',
        }
    }

    /// Convert `value`, expressed in `self`, into the opposite unit.
    pub const fn convert(self, value: i32) -> i32 {
        match self {
            Self::Fahrenheit => convert_to_celsius(value),
            Self::Celsius => convert_to_fahrenheit(value),
        }
    }
}

/// `(5 * (f - 32)) / 9`, truncating toward zero.
pub const fn convert_to_celsius(fahrenheit: i32) -> i32 { fahrenheit.wrapping_sub(32).wrapping_mul(5) / 9 }

/// `(9 * c) / 5 + 32`, truncating toward zero.
pub const fn convert_to_fahrenheit(celsius: i32) -> i32 { (celsius.wrapping_mul(9) / 5).wrapping_add(32) }

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_freezing_point() {
        assert_eq!(convert_to_celsius(32), 0);
        assert_eq!(convert_to_fahrenheit(0), 32);
    }

    #[test]
    fn test_boiling_point() {
        assert_eq!(convert_to_celsius(212), 100);
        assert_eq!(convert_to_fahrenheit(100), 212);
    }

    #[test]
    fn test_minus_forty_is_shared() {
        assert_eq!(convert_to_celsius(-40), -40);
        assert_eq!(convert_to_fahrenheit(-40), -40);
    }

    #[test]
    fn test_celsius_truncates_toward_zero() {
        // 5 * 5 / 9 = 2.77 -> 2
        assert_eq!(convert_to_celsius(37), 2);
        // 5 * -1 / 9 = -0.55 -> 0, not -1
        assert_eq!(convert_to_celsius(31), 0);
        // 5 * -10 / 9 = -5.55 -> -5
        assert_eq!(convert_to_celsius(22), -5);
    }

    #[test]
    fn test_fahrenheit_truncates_toward_zero() {
        // 9 * 1 / 5 = 1.8 -> 1
        assert_eq!(convert_to_fahrenheit(1), 33);
        // 9 * -1 / 5 = -1.8 -> -1
        assert_eq!(convert_to_fahrenheit(-1), 31);
    }

    #[test]
    fn test_round_trip_drift() {
        // 37F -> 2C -> 35F
        assert_eq!(convert_to_fahrenheit(convert_to_celsius(37)), 35);
        // 33F -> 0C -> 32F
        assert_eq!(convert_to_fahrenheit(convert_to_celsius(33)), 32);
        // 50F is exact: 10C
        assert_eq!(convert_to_fahrenheit(convert_to_celsius(50)), 50);
    }

    #[test]
    fn test_overflow_wraps() {
        // Must not panic in debug builds.
        let _ = convert_to_celsius(i32::MIN);
        let _ = convert_to_celsius(i32::MAX);
        let _ = convert_to_fahrenheit(i32::MAX);
        let _ = convert_to_fahrenheit(i32::MIN);
    }

    #[test]
    fn test_unit_opposite() {
        assert_eq!(Unit::Fahrenheit.opposite(), Unit::Celsius);
        assert_eq!(Unit::Celsius.opposite(), Unit::Fahrenheit);
        assert_eq!(Unit::Celsius.opposite().opposite(), Unit::Celsius);
    }

    #[test]
    fn test_unit_convert_dispatch() {
        assert_eq!(Unit::Fahrenheit.convert(212), 100);
        assert_eq!(Unit::Celsius.convert(100), 212);
    }

    #[test]
    fn test_unit_suffix() {
        assert_eq!(Unit::Fahrenheit.suffix(), 'F');
        assert_eq!(Unit::Celsius.suffix(), 'C');
    }
}
