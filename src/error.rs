//! Configuration errors reported by the joystick core
//!
//! Every error here is a caller-input validation failure. The component that
//! returned it keeps its previous, valid configuration.

use thiserror::Error;

/// Rejected configuration or layout input
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// A scale setter received a value outside its allowed range
    #[error("{name} must be in {range}, got {value}")]
    InvalidScale {
        name: &'static str,
        range: &'static str,
        value: f32,
    },

    /// Guide lines need at least two angles
    #[error("guide lines need at least 2 angles, got {count}")]
    TooFewGuideAngles { count: usize },

    /// Panel radius must be positive and finite
    #[error("panel radius must be finite and > 0, got {0}")]
    InvalidPanelRadius(f32),

    /// Dead zone must satisfy 0 <= dead zone < panel radius
    #[error("dead zone radius must be in [0, {panel_radius}), got {dead_zone_radius}")]
    InvalidDeadZone {
        dead_zone_radius: f32,
        panel_radius: f32,
    },

    /// Center coordinates must be finite
    #[error("panel center must be finite, got ({x}, {y})")]
    InvalidCenter { x: f32, y: f32 },

    /// Widget size must be finite and positive on both axes
    #[error("layout size must be finite and > 0, got {width}x{height}")]
    InvalidLayout { width: f32, height: f32 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_the_offending_value() {
        let err = ConfigError::InvalidScale {
            name: "panel_scale",
            range: "(0, 1]",
            value: 1.5,
        };
        assert_eq!(err.to_string(), "panel_scale must be in (0, 1], got 1.5");

        let err = ConfigError::TooFewGuideAngles { count: 1 };
        assert_eq!(err.to_string(), "guide lines need at least 2 angles, got 1");
    }
}
