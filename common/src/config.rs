//! Application configuration constants.
//!
//! # Layout
//!
//! The reference screen is 144x168 pixels. Both label regions span the full
//! width; their vertical placement is derived from the window bounds by
//! [`Layout::for_bounds`](crate::layout::Layout::for_bounds), so hosts with a
//! larger panel only need to pass their own size.

use crate::units::Unit;

// =============================================================================
// Model Defaults
// =============================================================================

/// Temperature shown on start (32F, i.e. 0C).
pub const DEFAULT_TEMPERATURE: i32 = 32;

/// Unit the primary value is expressed in on start.
pub const DEFAULT_UNIT: Unit = Unit::Fahrenheit;

// =============================================================================
// Label Buffers
// =============================================================================

/// Size of each label buffer in bytes, terminator included.
#[cfg(not(feature = "wide-labels"))]
pub const LABEL_BUFFER_BYTES: usize = 5;

/// Size of each label buffer in bytes, terminator included.
/// Fits "-2147483648" plus the unit suffix.
#[cfg(feature = "wide-labels")]
pub const LABEL_BUFFER_BYTES: usize = 13;

/// Visible characters per label (buffer minus terminator).
pub const LABEL_CAPACITY: usize = LABEL_BUFFER_BYTES - 1;

// =============================================================================
// Button Timing
// =============================================================================

/// Debounce duration in milliseconds.
pub const DEBOUNCE_MS: u64 = 50;

/// Auto-repeat interval for held up/down buttons.
pub const REPEAT_INTERVAL_MS: u64 = 400;

/// How often hosts sample the button levels.
pub const BUTTON_POLL_MS: u64 = 10;

// =============================================================================
// Display Configuration
// =============================================================================

/// Reference screen width in pixels.
pub const SCREEN_WIDTH: u32 = 144;

/// Reference screen height in pixels.
pub const SCREEN_HEIGHT: u32 = 168;

/// Top offset of the primary label, and of the converted label below the midline.
pub const LABEL_TOP_MARGIN: i32 = 10;

/// Height of each label region. Fits the 24pt value font with a little air.
pub const LABEL_HEIGHT: u32 = 44;
