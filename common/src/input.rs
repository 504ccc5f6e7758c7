//! Button input handling.
//!
//! - [`ButtonState`]: time-based edge detection with debouncing
//! - [`RepeatingButton`]: press edge plus auto-repeat while held
//! - [`CLICK_CONFIG`]: which handler each button runs, and how it clicks
//! - [`ButtonPad`]: one recognizer per button, polled together
//!
//! Timestamps are plain milliseconds from any monotonic clock the host has, so
//! everything here runs in host tests without a time driver.

use heapless::Vec;

use crate::config::{DEBOUNCE_MS, REPEAT_INTERVAL_MS};
use crate::temperature::TemperatureState;

// =============================================================================
// Buttons and Dispatch
// =============================================================================

/// Physical buttons the app listens to.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Button {
    /// Swap units.
    Select,
    /// One degree up.
    Up,
    /// One degree down.
    Down,
}

impl Button {
    /// Every button, in dispatch table order.
    pub const ALL: [Self; 3] = [Self::Select, Self::Up, Self::Down];

    /// Short name used in log lines.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Select => "select",
            Self::Up => "up",
            Self::Down => "down",
        }
    }

    /// Dispatch table entry for this button.
    pub fn binding(self) -> &'static ClickBinding {
        match self {
            Self::Select => &CLICK_CONFIG[0],
            Self::Up => &CLICK_CONFIG[1],
            Self::Down => &CLICK_CONFIG[2],
        }
    }
}

/// How a button produces clicks.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ClickMode {
    /// One click per press.
    Single,
    /// One click on press, then one every `interval_ms` while held.
    Repeating { interval_ms: u64 },
}

/// Model mutation run for a click.
pub type Handler = fn(&mut TemperatureState);

/// One row of the dispatch table.
pub struct ClickBinding {
    pub button: Button,
    pub mode: ClickMode,
    pub handler: Handler,
}

/// Button to handler mapping.
pub static CLICK_CONFIG: [ClickBinding; 3] = [
    ClickBinding {
        button: Button::Select,
        mode: ClickMode::Single,
        handler: TemperatureState::swap_units,
    },
    ClickBinding {
        button: Button::Up,
        mode: ClickMode::Repeating {
            interval_ms: REPEAT_INTERVAL_MS,
        },
        handler: TemperatureState::increment,
    },
    ClickBinding {
        button: Button::Down,
        mode: ClickMode::Repeating {
            interval_ms: REPEAT_INTERVAL_MS,
        },
        handler: TemperatureState::decrement,
    },
];

// =============================================================================
// Debounce
// =============================================================================

/// Button debounce state with time-based edge detection.
pub struct ButtonState {
    was_pressed: bool,
    last_change_ms: Option<u64>,
}

impl ButtonState {
    /// Create a new button state (not pressed).
    pub const fn new() -> Self {
        Self {
            was_pressed: false,
            last_change_ms: None,
        }
    }

    /// Feed the current level and return `true` only on the press edge.
    ///
    /// Level changes within [`DEBOUNCE_MS`] of the previous accepted change are
    /// treated as contact bounce and ignored.
    pub fn just_pressed(
        &mut self,
        pressed: bool,
        now_ms: u64,
    ) -> bool {
        if pressed != self.was_pressed {
            if let Some(last) = self.last_change_ms
                && now_ms.saturating_sub(last) < DEBOUNCE_MS
            {
                return false;
            }

            self.was_pressed = pressed;
            self.last_change_ms = Some(now_ms);

            return pressed;
        }

        false
    }

    /// Debounced level.
    #[inline]
    pub const fn is_held(&self) -> bool { self.was_pressed }
}

impl Default for ButtonState {
    fn default() -> Self { Self::new() }
}

// =============================================================================
// Click Recognizer
// =============================================================================

/// Turns raw levels into clicks according to a [`ClickMode`].
pub struct RepeatingButton {
    debounce: ButtonState,
    mode: ClickMode,
    next_repeat_ms: Option<u64>,
}

impl RepeatingButton {
    pub const fn new(mode: ClickMode) -> Self {
        Self {
            debounce: ButtonState::new(),
            mode,
            next_repeat_ms: None,
        }
    }

    /// Feed the current level and return `true` when a click fires.
    pub fn poll(
        &mut self,
        pressed: bool,
        now_ms: u64,
    ) -> bool {
        if self.debounce.just_pressed(pressed, now_ms) {
            if let ClickMode::Repeating { interval_ms } = self.mode {
                self.next_repeat_ms = Some(now_ms.saturating_add(interval_ms));
            }
            return true;
        }

        if !self.debounce.is_held() {
            self.next_repeat_ms = None;
            return false;
        }

        match (self.mode, self.next_repeat_ms) {
            (ClickMode::Repeating { interval_ms }, Some(due)) if now_ms >= due => {
                // Missed repeats are dropped, not replayed.
                let next = due.saturating_add(interval_ms);
                self.next_repeat_ms = Some(if next > now_ms { next } else { now_ms.saturating_add(interval_ms) });
                true
            }
            _ => false,
        }
    }
}

// =============================================================================
// Button Pad
// =============================================================================

/// Clicks produced by one poll, in dispatch table order.
pub type Clicks = Vec<Button, 3>;

/// Recognizers for all three buttons.
pub struct ButtonPad {
    buttons: [RepeatingButton; 3],
}

impl ButtonPad {
    /// One recognizer per dispatch table row, configured with its click mode.
    pub fn new() -> Self {
        Self {
            buttons: CLICK_CONFIG.each_ref().map(|binding| RepeatingButton::new(binding.mode)),
        }
    }

    /// Sample every button through `is_pressed` and collect the clicks.
    pub fn poll<F>(
        &mut self,
        now_ms: u64,
        mut is_pressed: F,
    ) -> Clicks
    where
        F: FnMut(Button) -> bool,
    {
        let mut clicks = Clicks::new();
        for (recognizer, binding) in self.buttons.iter_mut().zip(&CLICK_CONFIG) {
            if recognizer.poll(is_pressed(binding.button), now_ms) {
                // Capacity equals the button count.
                clicks.push(binding.button).ok();
            }
        }
        clicks
    }
}

impl Default for ButtonPad {
    fn default() -> Self { Self::new() }
}

// =============================================================================
// Tests
// =============================================================================
