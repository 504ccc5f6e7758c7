//! Application controller.
//!
//! [`App`] owns the temperature model, the two label buffers, and the render
//! state. Hosts drive it through three hooks:
//!
//! - [`App::on_start`]: acquire label buffers, sync the model once, full redraw
//! - [`App::on_button`]: run the button's handler, then update the labels
//! - [`App::on_stop`]: release label buffers
//!
//! Each hook returns the [`Dirty`] regions, which the host passes to
//! [`App::draw`] together with its display.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;

use crate::input::Button;
use crate::labels::{Labels, render_into};
use crate::layout::Layout;
use crate::log::EventLog;
use crate::render::{Dirty, RenderState};
use crate::temperature::TemperatureState;
use crate::widgets::draw_screen;

/// The temperature screen.
pub struct App {
    state: TemperatureState,
    /// Label buffers; `Some` only between start and stop.
    labels: Option<Labels>,
    render_state: RenderState,
    layout: Layout,
    log: EventLog,
}

impl App {
    /// Create a stopped app drawing into `layout`.
    pub const fn new(layout: Layout) -> Self {
        Self {
            state: TemperatureState::new(),
            labels: None,
            render_state: RenderState::new(),
            layout,
            log: EventLog::new(),
        }
    }

    /// Acquire the label buffers and produce the first frame.
    ///
    /// The converted value is recomputed before the very first render, so the
    /// initial screen never shows an unsynced pair. A later start (restart, or
    /// a repeated call while running) keeps the model as is, including a
    /// drifted pair left by a swap, and only forces a full redraw.
    pub fn on_start(&mut self) -> Dirty {
        if self.labels.is_none() {
            self.labels = Some(Labels::default());
        }
        if self.render_state.is_first_frame() {
            self.state.sync();
        }
        self.render_state.mark_display_cleared();

        let dirty = self.update_display();
        if let Some(labels) = &self.labels {
            self.log
                .push_fmt(format_args!("started: {} / {}", labels.primary, labels.converted));
        }
        dirty
    }

    /// Run `button`'s handler and update the labels.
    ///
    /// Ignored while stopped.
    pub fn on_button(
        &mut self,
        button: Button,
    ) -> Dirty {
        if self.labels.is_none() {
            return Dirty::default();
        }

        (button.binding().handler)(&mut self.state);

        let dirty = self.update_display();
        if let Some(labels) = &self.labels {
            self.log.push_fmt(format_args!(
                "{}: {} / {}",
                button.name(),
                labels.primary,
                labels.converted
            ));
        }
        dirty
    }

    /// Release the label buffers. The model is kept.
    pub fn on_stop(&mut self) {
        if self.labels.take().is_some() {
            self.log.push("stopped");
        }
    }

    /// Draw the regions marked in `dirty`. Does nothing while stopped or when
    /// nothing changed.
    pub fn draw<D>(
        &self,
        display: &mut D,
        dirty: Dirty,
    ) where
        D: DrawTarget<Color = Rgb565>,
    {
        if !dirty.any() {
            return;
        }
        if let Some(labels) = &self.labels {
            draw_screen(display, &self.layout, labels, dirty);
        }
    }

    /// Re-render the labels from the model and report what changed.
    fn update_display(&mut self) -> Dirty {
        let Some(labels) = self.labels.as_mut() else {
            return Dirty::default();
        };
        render_into(&self.state, labels);
        self.render_state.check_dirty(labels)
    }

    #[inline]
    pub const fn state(&self) -> &TemperatureState { &self.state }

    /// Current label text, `None` while stopped.
    #[inline]
    pub const fn labels(&self) -> Option<&Labels> { self.labels.as_ref() }

    #[inline]
    pub const fn is_running(&self) -> bool { self.labels.is_some() }

    /// Log lines waiting to be drained by the host.
    #[inline]
    pub fn log_mut(&mut self) -> &mut EventLog { &mut self.log }
}

// =============================================================================
// Tests
// =============================================================================
