//! Core logic for the ThermoFlip temperature converter.
//!
//! This crate contains platform-agnostic code shared between the simulator
//! and the Pico 2 firmware:
//!
//! - [`units`]: Fahrenheit/Celsius and the truncating conversion formulas
//! - [`temperature`]: The temperature model (increment, decrement, swap)
//! - [`labels`]: Fixed-width label formatting
//! - [`layout`]: Label regions derived from the screen size
//! - [`render`]: Dirty tracking for the two regions
//! - [`input`]: Debounce, auto-repeat, and the button dispatch table
//! - [`app`]: The controller tying it together behind start/button/stop hooks
//! - [`log`]: Event log ring buffer drained by the hosts
//! - [`widgets`]: Drawing onto any `DrawTarget<Color = Rgb565>`
//!
//! # Testing
//!
//! Run tests on host with:
//! ```bash
//! cargo test -p thermoflip-common
//! cargo test -p thermoflip-common --features wide-labels
//! ```
//!
//! Tests run with `std` enabled (via `cfg_attr`), allowing use of the standard
//! test framework while the firmware links the crate as `no_std`.

// Use no_std only when NOT testing (tests need std for the test harness)
#![cfg_attr(not(test), no_std)]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

pub mod app;
pub mod colors;
pub mod config;
pub mod input;
pub mod labels;
pub mod layout;
pub mod log;
pub mod render;
pub mod styles;
pub mod temperature;
pub mod units;
pub mod widgets;

// Re-export commonly used items
pub use app::App;
pub use input::{Button, ButtonPad};
pub use labels::{Labels, render};
pub use layout::{Layout, REFERENCE_LAYOUT};
pub use temperature::TemperatureState;
pub use units::{Unit, convert_to_celsius, convert_to_fahrenheit};
