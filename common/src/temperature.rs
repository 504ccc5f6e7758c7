//! Temperature model.
//!
//! Holds the value in the active unit and its counterpart in the other unit.
//! Once [`TemperatureState::sync`] has run, `converted_value` is always
//! `unit.convert(primary_value)`; increment/decrement keep it that way and
//! [`TemperatureState::swap_units`] exchanges the pair without recomputing.

use crate::config::{DEFAULT_TEMPERATURE, DEFAULT_UNIT};
use crate::units::Unit;

/// Current temperature and its mirrored conversion.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct TemperatureState {
    primary_value: i32,
    converted_value: i32,
    unit: Unit,
}

impl TemperatureState {
    /// Start state: 32F with the converted value not yet computed (0).
    pub const fn new() -> Self {
        Self {
            primary_value: DEFAULT_TEMPERATURE,
            converted_value: 0,
            unit: DEFAULT_UNIT,
        }
    }

    /// Value in the active unit.
    #[inline]
    pub const fn primary_value(&self) -> i32 { self.primary_value }

    /// Value in the inactive unit.
    #[inline]
    pub const fn converted_value(&self) -> i32 { self.converted_value }

    /// Active unit.
    #[inline]
    pub const fn unit(&self) -> Unit { self.unit }

    /// Recompute the converted value from the primary value.
    pub fn sync(&mut self) { self.converted_value = self.unit.convert(self.primary_value); }

    /// Raise the primary value by one degree. Wraps at `i32::MAX`.
    pub fn increment(&mut self) {
        self.primary_value = self.primary_value.wrapping_add(1);
        self.sync();
    }

    /// Lower the primary value by one degree. Wraps at `i32::MIN`.
    pub fn decrement(&mut self) {
        self.primary_value = self.primary_value.wrapping_sub(1);
        self.sync();
    }

    /// Make the converted value primary and flip the active unit.
    pub fn swap_units(&mut self) {
        core::mem::swap(&mut self.primary_value, &mut self.converted_value);
        self.unit = self.unit.opposite();
    }
}

impl Default for TemperatureState {
    fn default() -> Self { Self::new() }
}

// =============================================================================
// Tests
// =============================================================================
