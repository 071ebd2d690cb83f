//! Replay recorded pointer events through a pad
//!
//! Input is CSV with a `phase,x,y` header, phases being `press`, `move` or
//! `release`. Useful for checking a configuration without a display.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::path::Path;
use std::rc::Rc;
use tracing::info;

use crate::config::JoystickConfig;
use crate::geometry::Point;
use crate::pad::{JoystickPad, PointerEvent, PointerPhase};
use crate::stick::Signal;

/// One CSV row
#[derive(Debug, Clone, Deserialize)]
struct EventRow {
    phase: PointerPhase,
    x: f32,
    y: f32,
}

/// Outcome of replaying one event
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationStep {
    pub line: usize,
    pub phase: PointerPhase,
    pub x: f32,
    pub y: f32,
    /// What the listener received, if the event was processed
    pub signal: Option<Signal>,
    pub stick: Option<Point>,
}

/// Load a CSV file and replay it
pub async fn simulate_file(
    path: impl AsRef<Path>,
    config: &JoystickConfig,
    width: f32,
    height: f32,
) -> Result<Vec<SimulationStep>> {
    let path = path.as_ref();
    let csv_content = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read event file: {}", path.display()))?;

    simulate(&csv_content, config, width, height)
}

/// Replay CSV events through a freshly laid out pad
pub fn simulate(
    csv_content: &str,
    config: &JoystickConfig,
    width: f32,
    height: f32,
) -> Result<Vec<SimulationStep>> {
    let mut pad = JoystickPad::with_config(config).context("Invalid joystick config")?;
    pad.on_size_changed(width, height)
        .context("Invalid simulation layout")?;

    let received = Rc::new(RefCell::new(None));
    let sink = Rc::clone(&received);
    pad.set_listener(move |signal| *sink.borrow_mut() = Some(signal));

    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(csv_content.as_bytes());
    let mut steps = Vec::new();

    for (index, result) in reader.deserialize().enumerate() {
        // Header is line 1
        let line = index + 2;
        let row: EventRow = result.with_context(|| format!("Failed to parse CSV row at line {}", line))?;

        pad.on_pointer(PointerEvent::new(row.phase, row.x, row.y));

        steps.push(SimulationStep {
            line,
            phase: row.phase,
            x: row.x,
            y: row.y,
            signal: received.borrow_mut().take(),
            stick: pad.stick_position(),
        });
    }

    info!("Replayed {} pointer events", steps.len());

    Ok(steps)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> JoystickConfig {
        JoystickConfig {
            panel_scale: 0.8,
            inner_area_scale: 0.25,
            ..Default::default()
        }
    }

    #[test]
    fn test_replays_press_move_release() {
        let csv = "phase,x,y\npress,180,100\nmove,100,300\nrelease,100,300\n";
        let steps = simulate(csv, &config(), 200.0, 200.0).unwrap();

        assert_eq!(steps.len(), 3);
        assert_eq!(steps[0].line, 2);
        assert_eq!(steps[0].signal, Some(Signal { angle_degrees: 0, power: 1.0 }));

        // Clamped to the lower edge
        assert_eq!(steps[1].signal.map(|s| s.angle_degrees), Some(270));
        let stick = steps[1].stick.unwrap();
        assert!((stick.y - 180.0).abs() < 1e-4);

        assert_eq!(steps[2].signal, Some(Signal::IDLE));
        assert_eq!(steps[2].stick, Some(Point::new(100.0, 100.0)));
    }

    #[test]
    fn test_accepts_padded_fields() {
        let csv = "phase, x, y\nmove, 100, 95\n";
        let steps = simulate(csv, &config(), 200.0, 200.0).unwrap();
        assert_eq!(steps[0].signal.map(|s| s.power), Some(0.0)); // inside dead zone
    }

    #[test]
    fn test_unknown_phase_is_an_error() {
        let csv = "phase,x,y\ntap,1,2\n";
        let err = simulate(csv, &config(), 200.0, 200.0).unwrap_err();
        assert!(format!("{:#}", err).contains("line 2"));
    }

    #[test]
    fn test_rejects_empty_layout() {
        assert!(simulate("phase,x,y\n", &config(), 0.0, 200.0).is_err());
    }
}
