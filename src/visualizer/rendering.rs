//! Rendering functions for the joystick demo side panel
//!
//! Read-outs for the last signal and the derived geometry, plus the scale
//! sliders and guide line presets that drive the pad's setters.

use crate::error::ConfigError;
use crate::pad::JoystickPad;
use crate::stick::Signal;

use super::drawing::power_color;

/// Guide line presets offered in the side panel
pub const GUIDE_PRESETS: &[(&str, &[i32])] = &[
    ("Cross", &[0, 90, 180, 270]),
    ("Hex", &[0, 60, 120, 180, 240, 300]),
    ("Octo", &[0, 45, 90, 135, 180, 225, 270, 315]),
];

fn value_row(ui: &mut egui::Ui, name: &str, value: String, color: egui::Color32) {
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new(name).color(egui::Color32::from_gray(180)));
        ui.label(
            egui::RichText::new(value)
                .color(color)
                .family(egui::FontFamily::Monospace),
        );
    });
}

/// Last signal delivered to the listener
pub fn render_signal(ui: &mut egui::Ui, signal: Option<Signal>, events: u64) {
    ui.label(egui::RichText::new("Signal").strong().size(14.0));

    match signal {
        Some(signal) => {
            value_row(
                ui,
                "Angle:",
                format!("{:3}°", signal.angle_degrees),
                egui::Color32::from_rgb(150, 200, 255),
            );
            value_row(
                ui,
                "Power:",
                format!("{:.3}", signal.power),
                power_color(signal.power),
            );
        },
        None => {
            ui.label(
                egui::RichText::new("Drag the stick")
                    .color(egui::Color32::from_gray(100))
                    .family(egui::FontFamily::Monospace),
            );
        },
    }

    value_row(
        ui,
        "Events:",
        events.to_string(),
        egui::Color32::from_gray(150),
    );
    ui.add_space(8.0);
}

/// Panel geometry and stick position
pub fn render_geometry(ui: &mut egui::Ui, pad: &JoystickPad) {
    ui.label(egui::RichText::new("Geometry").strong().size(14.0));

    let Some(geometry) = pad.geometry() else {
        ui.label(egui::RichText::new("Waiting for layout").color(egui::Color32::from_gray(100)));
        return;
    };

    let mono = egui::Color32::from_rgb(150, 255, 150);
    let center = geometry.center();
    value_row(ui, "Center:", format!("({:6.1}, {:6.1})", center.x, center.y), mono);
    value_row(ui, "Panel r:", format!("{:6.1}", geometry.panel_radius()), mono);
    value_row(ui, "Dead zone r:", format!("{:6.1}", geometry.dead_zone_radius()), mono);

    if let Some(stick) = pad.stick_position() {
        value_row(
            ui,
            "Stick:",
            format!("({:6.1}, {:6.1})", stick.x, stick.y),
            egui::Color32::from_rgb(255, 80, 80),
        );
    }
    ui.add_space(8.0);
}

/// Scale sliders; returns the first setter error, if any
pub fn render_scale_sliders(ui: &mut egui::Ui, pad: &mut JoystickPad) -> Option<ConfigError> {
    ui.label(egui::RichText::new("Scales").strong().size(14.0));

    let mut panel = pad.panel_scale();
    let mut inner = pad.inner_area_scale();
    let mut stick = pad.joystick_scale();
    let mut error = None;

    if ui
        .add(egui::Slider::new(&mut panel, 0.1..=1.0).text("panel"))
        .changed()
    {
        error = pad.set_panel_scale(panel).err();
    }
    if ui
        .add(egui::Slider::new(&mut inner, 0.0..=0.95).text("inner area"))
        .changed()
    {
        error = error.or(pad.set_inner_area_scale(inner).err());
    }
    if ui
        .add(egui::Slider::new(&mut stick, 0.05..=1.0).text("joystick"))
        .changed()
    {
        error = error.or(pad.set_joystick_scale(stick).err());
    }

    ui.add_space(8.0);
    error
}

/// Guide line preset buttons; returns the first setter error, if any
pub fn render_guide_presets(ui: &mut egui::Ui, pad: &mut JoystickPad) -> Option<ConfigError> {
    ui.label(egui::RichText::new("Guide lines").strong().size(14.0));

    let mut error = None;
    ui.horizontal(|ui| {
        if ui.button("None").clicked() {
            pad.clear_guide_angles();
        }
        for (name, angles) in GUIDE_PRESETS {
            if ui.button(*name).clicked() {
                error = pad.set_guide_angles(angles).err();
            }
        }
    });

    ui.add_space(8.0);
    error
}
