//! Panel geometry primitives
//!
//! All coordinates are in the widget's local screen space: x grows to the
//! right, y grows downward.

use serde::Serialize;

use crate::error::ConfigError;

/// 2D coordinate in widget-local screen space
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point
    pub fn distance(&self, other: Point) -> f32 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Circle description handed to renderers
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Circle {
    pub center: Point,
    pub radius: f32,
}

/// Validated panel geometry
///
/// Invariant: `panel_radius > 0` and `0 <= dead_zone_radius < panel_radius`.
/// The only ways to build one go through validation, so holders never see a
/// degenerate panel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PanelGeometry {
    center: Point,
    panel_radius: f32,
    dead_zone_radius: f32,
}

impl PanelGeometry {
    /// Build geometry from explicit values
    pub fn new(center: Point, panel_radius: f32, dead_zone_radius: f32) -> Result<Self, ConfigError> {
        if !center.is_finite() {
            return Err(ConfigError::InvalidCenter {
                x: center.x,
                y: center.y,
            });
        }
        if !panel_radius.is_finite() || panel_radius <= 0.0 {
            return Err(ConfigError::InvalidPanelRadius(panel_radius));
        }
        if !dead_zone_radius.is_finite() || dead_zone_radius < 0.0 || dead_zone_radius >= panel_radius {
            return Err(ConfigError::InvalidDeadZone {
                dead_zone_radius,
                panel_radius,
            });
        }

        Ok(Self {
            center,
            panel_radius,
            dead_zone_radius,
        })
    }

    /// Derive geometry from the widget's bounding box
    ///
    /// `panel_radius = min(width, height) / 2 * panel_scale` and
    /// `dead_zone_radius = panel_radius * inner_area_scale`, centered in the box.
    pub fn from_layout(
        width: f32,
        height: f32,
        panel_scale: f32,
        inner_area_scale: f32,
    ) -> Result<Self, ConfigError> {
        if !width.is_finite() || !height.is_finite() || width <= 0.0 || height <= 0.0 {
            return Err(ConfigError::InvalidLayout { width, height });
        }

        let center = Point::new(width / 2.0, height / 2.0);
        let panel_radius = width.min(height) / 2.0 * panel_scale;
        let dead_zone_radius = panel_radius * inner_area_scale;

        Self::new(center, panel_radius, dead_zone_radius)
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn panel_radius(&self) -> f32 {
        self.panel_radius
    }

    pub fn dead_zone_radius(&self) -> f32 {
        self.dead_zone_radius
    }
}
