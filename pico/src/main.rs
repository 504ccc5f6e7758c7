//! ThermoFlip firmware for Raspberry Pi Pico 2 (RP2350)
//!
//! Shows a temperature and its Fahrenheit/Celsius counterpart on the Pimoroni
//! PIM715 Display Pack 2.8".
//!
//! # Button Controls
//!
//! - **X**: Swap units
//! - **A**: +1 degree (repeats every 400ms while held)
//! - **B**: -1 degree (repeats every 400ms while held)

#![no_std]
#![no_main]

mod display;

use defmt::info;
use embassy_executor::Spawner;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::spi::Spi;
use embassy_time::{Duration, Instant, Ticker};
use embedded_graphics::prelude::*;
use static_cell::StaticCell;
use thermoflip_common::colors::BACKGROUND;
use thermoflip_common::config::BUTTON_POLL_MS;
use thermoflip_common::{App, Button, ButtonPad, Layout};
use {defmt_rtt as _, panic_probe as _};

use crate::display::{SPI_BUFFER_SIZE, display_spi_config, init_display};

// Program metadata for `picotool info`
#[unsafe(link_section = ".bi_entries")]
#[used]
pub static PICOTOOL_ENTRIES: [embassy_rp::binary_info::EntryAddr; 4] = [
    embassy_rp::binary_info::rp_program_name!(c"thermoflip"),
    embassy_rp::binary_info::rp_program_description!(c"Fahrenheit/Celsius converter on PIM715 Display"),
    embassy_rp::binary_info::rp_cargo_version!(),
    embassy_rp::binary_info::rp_program_build_attribute!(),
];

/// Batch buffer for the display's SPI interface.
static SPI_BUFFER: StaticCell<[u8; SPI_BUFFER_SIZE]> = StaticCell::new();

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("ThermoFlip starting...");

    let p = embassy_rp::init(Default::default());

    // PIM715 pinout: CS=17, DC=16, CLK=18, MOSI=19, Backlight=20
    let cs = Output::new(p.PIN_17, Level::High);
    let dc = Output::new(p.PIN_16, Level::Low);
    let _backlight = Output::new(p.PIN_20, Level::High);

    // TX-only, the display doesn't need MISO
    let spi = Spi::new_blocking_txonly(p.SPI0, p.PIN_18, p.PIN_19, display_spi_config());
    let buffer = SPI_BUFFER.init([0; SPI_BUFFER_SIZE]);
    let mut display = init_display(spi, cs, dc, buffer);
    display.clear(BACKGROUND).ok();

    info!("Display initialized");

    // Active-low with pull-ups: A=12, B=13, X=14
    let btn_a = Input::new(p.PIN_12, Pull::Up);
    let btn_b = Input::new(p.PIN_13, Pull::Up);
    let btn_x = Input::new(p.PIN_14, Pull::Up);

    let mut app = App::new(Layout::for_bounds(display.size()));
    let dirty = app.on_start();
    app.draw(&mut display, dirty);
    drain_log(&mut app);

    let mut pad = ButtonPad::new();
    let mut ticker = Ticker::every(Duration::from_millis(BUTTON_POLL_MS));

    // The app runs until power-off, so `on_stop` is never reached here.
    loop {
        let now_ms = Instant::now().as_millis();
        let clicks = pad.poll(now_ms, |button| match button {
            Button::Select => btn_x.is_low(),
            Button::Up => btn_a.is_low(),
            Button::Down => btn_b.is_low(),
        });

        for button in clicks {
            let dirty = app.on_button(button);
            app.draw(&mut display, dirty);
        }
        drain_log(&mut app);

        ticker.next().await;
    }
}

/// Forward the app's event log to defmt.
fn drain_log(app: &mut App) {
    while let Some(line) = app.log_mut().pop() {
        info!("{=str}", line.as_str());
    }
}
