//! Main application struct for the joystick demo.
//!
//! [`JoystickDemoApp`] implements eframe::App. Each frame it applies any
//! reloaded configuration, feeds the pad its current size and the pointer
//! press/move/release transitions, then draws the pad scene and side panel.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use tracing::{debug, info, warn};

use super::drawing::{draw_scene, power_color, to_local};
use super::rendering::{render_geometry, render_guide_presets, render_scale_sliders, render_signal};
use crate::config::{ConfigWatcher, JoystickConfig};
use crate::error::ConfigError;
use crate::pad::{JoystickPad, PointerEvent, PointerPhase};
use crate::stick::Signal;

/// Interactive joystick demo
pub struct JoystickDemoApp {
    pad: JoystickPad,
    /// Written by the pad listener
    last_signal: Rc<Cell<Option<Signal>>>,
    events: Rc<Cell<u64>>,
    pressed: bool,
    last_pointer: Option<egui::Pos2>,
    watcher: Option<ConfigWatcher>,
    last_error: Option<String>,
}

impl JoystickDemoApp {
    /// Create the app from a validated config and an optional file watcher
    pub fn new(config: &JoystickConfig, watcher: Option<ConfigWatcher>) -> Result<Self, ConfigError> {
        let mut pad = JoystickPad::with_config(config)?;

        let last_signal = Rc::new(Cell::new(None));
        let events = Rc::new(Cell::new(0));
        {
            let last_signal = Rc::clone(&last_signal);
            let events = Rc::clone(&events);
            pad.set_listener(move |signal: Signal| {
                debug!("angle = {}, power = {:.3}", signal.angle_degrees, signal.power);
                last_signal.set(Some(signal));
                events.set(events.get() + 1);
            });
        }

        Ok(Self {
            pad,
            last_signal,
            events,
            pressed: false,
            last_pointer: None,
            watcher,
            last_error: None,
        })
    }

    /// Apply the newest config from the watcher, keeping the current one on error
    fn poll_config(&mut self) {
        let Some(config) = self.watcher.as_mut().and_then(ConfigWatcher::try_next_config) else {
            return;
        };

        match self.pad.apply_config(&config) {
            Ok(()) => {
                info!("Applied reloaded configuration");
                self.last_error = None;
            },
            Err(e) => {
                warn!("Reloaded configuration rejected: {}", e);
                self.last_error = Some(e.to_string());
            },
        }
    }

    /// Turn egui's pointer state into press/move/release events
    fn handle_pointer(&mut self, response: &egui::Response, origin: egui::Pos2) {
        let down = response.is_pointer_button_down_on();
        let pointer = response.interact_pointer_pos();

        let phase = match (self.pressed, down) {
            (false, true) => Some(PointerPhase::Press),
            (true, true) if pointer.is_some() && pointer != self.last_pointer => Some(PointerPhase::Move),
            (true, false) => Some(PointerPhase::Release),
            _ => None,
        };

        let Some(phase) = phase else {
            return;
        };
        let Some(pos) = pointer.or(self.last_pointer) else {
            return;
        };

        let local = to_local(origin, pos);
        self.pad.on_pointer(PointerEvent::new(phase, local.x, local.y));

        self.pressed = down;
        self.last_pointer = if down { Some(pos) } else { None };
    }

    fn record_error(&mut self, error: Option<ConfigError>) {
        if let Some(e) = error {
            self.last_error = Some(e.to_string());
        }
    }
}

impl eframe::App for JoystickDemoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_config();

        egui::SidePanel::right("controls")
            .resizable(false)
            .min_width(220.0)
            .show(ctx, |ui| {
                render_signal(ui, self.last_signal.get(), self.events.get());
                render_geometry(ui, &self.pad);

                let slider_error = render_scale_sliders(ui, &mut self.pad);
                self.record_error(slider_error);
                let preset_error = render_guide_presets(ui, &mut self.pad);
                self.record_error(preset_error);

                if let Some(error) = &self.last_error {
                    ui.label(
                        egui::RichText::new(error)
                            .color(egui::Color32::from_rgb(255, 100, 100)),
                    );
                }
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            let size = ui.available_size();
            let (response, painter) = ui.allocate_painter(size, egui::Sense::click_and_drag());
            let rect = response.rect;

            // A minimised window lays out to an empty rect every frame; keep
            // the last geometry instead of rejecting it each time
            if rect.width() > 0.0 && rect.height() > 0.0 {
                let layout_error = self.pad.on_size_changed(rect.width(), rect.height()).err();
                self.record_error(layout_error);
            }

            self.handle_pointer(&response, rect.min);

            if let Some(scene) = self.pad.scene() {
                let power = self.last_signal.get().map_or(0.0, |s| s.power);
                let stick_color = if self.pressed {
                    power_color(power)
                } else {
                    egui::Color32::from_rgb(100, 150, 255)
                };
                draw_scene(&painter, rect.min, &scene, stick_color);
            }
        });

        if self.watcher.is_some() {
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }
}
