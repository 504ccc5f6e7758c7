//! Keyboard to button mapping.

use embedded_graphics_simulator::sdl2::Keycode;
use thermoflip_common::Button;

/// Map an SDL keycode to the device button it stands in for.
pub fn keycode_to_button(keycode: Keycode) -> Option<Button> {
    match keycode {
        Keycode::Return | Keycode::KpEnter | Keycode::Space => Some(Button::Select),
        Keycode::Up => Some(Button::Up),
        Keycode::Down => Some(Button::Down),
        _ => None,
    }
}

/// Current up/down level of each mapped key.
#[derive(Default)]
pub struct KeyLevels {
    select: bool,
    up: bool,
    down: bool,
}

impl KeyLevels {
    pub fn new() -> Self { Self::default() }

    /// Record a key press or release. Unmapped keys are ignored.
    pub fn set(
        &mut self,
        keycode: Keycode,
        pressed: bool,
    ) {
        match keycode_to_button(keycode) {
            Some(Button::Select) => self.select = pressed,
            Some(Button::Up) => self.up = pressed,
            Some(Button::Down) => self.down = pressed,
            None => {}
        }
    }

    pub fn is_pressed(
        &self,
        button: Button,
    ) -> bool {
        match button {
            Button::Select => self.select,
            Button::Up => self.up,
            Button::Down => self.down,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keycode_mapping() {
        assert_eq!(keycode_to_button(Keycode::Return), Some(Button::Select));
        assert_eq!(keycode_to_button(Keycode::Space), Some(Button::Select));
        assert_eq!(keycode_to_button(Keycode::Up), Some(Button::Up));
        assert_eq!(keycode_to_button(Keycode::Down), Some(Button::Down));
        assert_eq!(keycode_to_button(Keycode::A), None);
    }

    #[test]
    fn test_levels_follow_press_and_release() {
        let mut keys = KeyLevels::new();
        keys.set(Keycode::Up, true);
        assert!(keys.is_pressed(Button::Up));
        assert!(!keys.is_pressed(Button::Down));

        keys.set(Keycode::Up, false);
        assert!(!keys.is_pressed(Button::Up));

        keys.set(Keycode::Z, true);
        assert!(!keys.is_pressed(Button::Select));
    }
}
