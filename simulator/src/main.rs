//! ThermoFlip simulator for desktop platforms.
//!
//! Runs the temperature screen in an SDL2 window via
//! `embedded-graphics-simulator`, with the keyboard standing in for the three
//! device buttons.
//!
//! # Key bindings
//!
//! | Key | Button | Action |
//! |-----|--------|--------|
//! | Enter / Space | Select | Swap units |
//! | Up | Up | +1 degree (repeats while held) |
//! | Down | Down | -1 degree (repeats while held) |
//! | Q / Escape | | Quit |
//!
//! Set `RUST_LOG=debug` for redraw logging.

// Crate-level lints
#![allow(clippy::cast_possible_truncation)]

mod keys;

use std::thread;
use std::time::{Duration, Instant};

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::sdl2::Keycode;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};
use log::{debug, info};
use thermoflip_common::colors::BACKGROUND;
use thermoflip_common::config::{BUTTON_POLL_MS, SCREEN_HEIGHT, SCREEN_WIDTH};
use thermoflip_common::{App, ButtonPad, Layout};

use crate::keys::KeyLevels;

/// Pixel scale factor for the simulator window.
const WINDOW_SCALE: u32 = 3;

/// Main loop period, matching the firmware's button poll rate.
const POLL_INTERVAL: Duration = Duration::from_millis(BUTTON_POLL_MS);

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    info!("Starting ThermoFlip simulator");
    info!("Display: {SCREEN_WIDTH}x{SCREEN_HEIGHT} (scale {WINDOW_SCALE}x)");
    info!("Keys: Enter/Space=Swap units  Up=+1  Down=-1  Q=Quit");

    let mut display: SimulatorDisplay<Rgb565> = SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
    let output_settings = OutputSettingsBuilder::new().scale(WINDOW_SCALE).build();
    let mut window = Window::new("ThermoFlip", &output_settings);

    display.clear(BACKGROUND).ok();

    let mut app = App::new(Layout::for_bounds(display.size()));
    let dirty = app.on_start();
    app.draw(&mut display, dirty);
    drain_log(&mut app);

    let mut keys = KeyLevels::new();
    let mut pad = ButtonPad::new();
    let start = Instant::now();

    // The SDL window is created by the first `update()`; `events()` panics before that.
    'running: loop {
        window.update(&display);

        for event in window.events() {
            match event {
                SimulatorEvent::Quit => break 'running,
                SimulatorEvent::KeyDown { keycode, .. } => {
                    if keycode == Keycode::Q || keycode == Keycode::Escape {
                        break 'running;
                    }
                    // SDL key repeat only re-asserts the level; auto-repeat comes from the pad.
                    keys.set(keycode, true);
                }
                SimulatorEvent::KeyUp { keycode, .. } => keys.set(keycode, false),
                _ => {}
            }
        }

        let now_ms = start.elapsed().as_millis() as u64;
        for button in pad.poll(now_ms, |button| keys.is_pressed(button)) {
            let dirty = app.on_button(button);
            debug!("{} -> redraw {:?}", button.name(), dirty);
            app.draw(&mut display, dirty);
        }
        drain_log(&mut app);

        thread::sleep(POLL_INTERVAL);
    }

    app.on_stop();
    drain_log(&mut app);
}

/// Forward the app's event log to `log`.
fn drain_log(app: &mut App) {
    let log = app.log_mut();
    while let Some(line) = log.pop() {
        info!("{line}");
    }
}
