//! Joystick demo - native window hosting a [`crate::pad::JoystickPad`]
//!
//! The pad core knows nothing about egui; this module is the adapter that
//! feeds it pointer and size events and draws its scene.

mod app;
pub mod drawing;
mod rendering;

use anyhow::Result;

use crate::config::{ConfigWatcher, JoystickConfig};

pub use app::JoystickDemoApp;

/// Entry point for the demo window
///
/// Blocks until the window is closed.
pub fn run_demo(config: &JoystickConfig, watcher: Option<ConfigWatcher>) -> Result<()> {
    let (width, height) = config
        .window
        .as_ref()
        .map_or((420.0, 420.0), |w| (w.width, w.height));

    let app = JoystickDemoApp::new(config, watcher)?;

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Joystick Pad")
            .with_inner_size([width + 240.0, height])
            .with_min_inner_size([400.0, 240.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Joystick Pad",
        native_options,
        Box::new(|_cc| Ok(Box::new(app))),
    )
    .map_err(|e| anyhow::anyhow!("Demo window failed: {}", e))
}
