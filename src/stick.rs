//! Stick mapping: pointer coordinates to clamped stick position to (angle, power)
//!
//! Angle convention, in screen space where y grows downward:
//!
//! ```text
//!          90
//!          ^
//!          |
//!  180 ----+----> 0
//!          |
//!         270
//! ```

use serde::Serialize;

use crate::error::ConfigError;
use crate::geometry::{PanelGeometry, Point};

/// Direction and magnitude reported for one pointer event
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Signal {
    /// Counter-clockwise from due east, in [0, 360)
    pub angle_degrees: u16,
    /// 0 inside the dead zone or when released, 1 on the panel edge
    pub power: f32,
}

impl Signal {
    pub const IDLE: Signal = Signal {
        angle_degrees: 0,
        power: 0.0,
    };
}

/// Owns panel geometry and the current stick position
#[derive(Debug, Clone)]
pub struct StickMapper {
    geometry: PanelGeometry,
    position: Point,
}

impl StickMapper {
    /// Create a mapper with the stick resting at the panel center
    pub fn new(geometry: PanelGeometry) -> Self {
        Self {
            position: geometry.center(),
            geometry,
        }
    }

    /// Replace the geometry from raw values
    ///
    /// Invalid values are rejected and the mapper keeps its current geometry.
    /// On success the stick returns to the new center.
    pub fn set_panel_geometry(
        &mut self,
        center: Point,
        panel_radius: f32,
        dead_zone_radius: f32,
    ) -> Result<(), ConfigError> {
        let geometry = PanelGeometry::new(center, panel_radius, dead_zone_radius)?;
        self.set_geometry(geometry);
        Ok(())
    }

    /// Replace the geometry with an already validated one
    pub fn set_geometry(&mut self, geometry: PanelGeometry) {
        self.geometry = geometry;
        self.reset_stick();
    }

    pub fn geometry(&self) -> &PanelGeometry {
        &self.geometry
    }

    pub fn position(&self) -> Point {
        self.position
    }

    /// Put the stick back on the panel center
    pub fn reset_stick(&mut self) {
        self.position = self.geometry.center();
    }

    /// Move the stick toward a pointer, clamping it to the panel edge
    ///
    /// Returns the distance from the center after clamping. Inside the panel
    /// the stick lands exactly on the pointer.
    pub fn update_from_pointer(&mut self, x: f32, y: f32) -> f32 {
        let center = self.geometry.center();
        let panel_radius = self.geometry.panel_radius();

        // f64 keeps far-off pointers finite: the f32 difference can overflow,
        // and a squared f32 distance overflows past ~1.8e19
        let dx = f64::from(x) - f64::from(center.x);
        let dy = f64::from(y) - f64::from(center.y);
        let dist = dx.hypot(dy);

        if dist > f64::from(panel_radius) {
            let scale = f64::from(panel_radius) / dist;
            self.position = Point::new(
                center.x + (dx * scale) as f32,
                center.y + (dy * scale) as f32,
            );
            panel_radius
        } else {
            self.position = Point::new(x, y);
            dist as f32
        }
    }

    /// Derive the signal for the current stick position
    ///
    /// `dist` is the value returned by [`Self::update_from_pointer`], or 0 after
    /// a reset.
    pub fn compute_signal(&self, dist: f32, is_released: bool) -> Signal {
        // asin(|dy| / dist) is undefined at the center
        if dist <= 0.0 || dist.is_nan() {
            return Signal::IDLE;
        }

        Signal {
            angle_degrees: self.angle_degrees(dist),
            power: self.power(dist, is_released),
        }
    }

    fn angle_degrees(&self, dist: f32) -> u16 {
        let center = self.geometry.center();
        let stick = self.position;

        let ratio = ((center.y - stick.y).abs() / dist).min(1.0);
        let base = ratio.asin().to_degrees();

        let right = stick.x >= center.x;
        let up = stick.y < center.y;
        let angle = match (right, up) {
            (true, true) => base,
            (true, false) => 360.0 - base,
            (false, true) => 180.0 - base,
            (false, false) => 180.0 + base,
        };

        // Rounded, not truncated: truncation turns float noise at exact
        // directions (30° computed as 29.9999°) into a whole-degree error
        (angle.round() as u16) % 360
    }

    fn power(&self, dist: f32, is_released: bool) -> f32 {
        let dead_zone = self.geometry.dead_zone_radius();
        if is_released || dist <= dead_zone {
            return 0.0;
        }

        let live_range = self.geometry.panel_radius() - dead_zone;
        ((dist - dead_zone) / live_range).min(1.0)
    }
}
