//! Guide line geometry
//!
//! Radial lines from the panel center to its edge at configured angles.

use serde::Serialize;

use crate::error::ConfigError;
use crate::geometry::Point;

/// Minimum number of angles in a guide line set
pub const MIN_GUIDE_ANGLES: usize = 2;

/// Line from `start` to `end` in screen space
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LineSegment {
    pub start: Point,
    pub end: Point,
}

/// Ordered set of guide line angles, in degrees
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GuideLineGeometry {
    angles: Vec<i32>,
}

impl GuideLineGeometry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the angle set
    ///
    /// Fewer than [`MIN_GUIDE_ANGLES`] angles is rejected and the current set
    /// is kept.
    pub fn set_angles(&mut self, angles: &[i32]) -> Result<(), ConfigError> {
        if angles.len() < MIN_GUIDE_ANGLES {
            return Err(ConfigError::TooFewGuideAngles {
                count: angles.len(),
            });
        }

        self.angles = angles.to_vec();
        Ok(())
    }

    /// Remove all guide lines
    pub fn clear(&mut self) {
        self.angles.clear();
    }

    pub fn angles(&self) -> &[i32] {
        &self.angles
    }

    pub fn is_empty(&self) -> bool {
        self.angles.is_empty()
    }

    /// Segments from `center` to the circle of `panel_radius`, one per angle
    ///
    /// Output order matches the configured angle order.
    pub fn compute_segments(&self, center: Point, panel_radius: f32) -> Vec<LineSegment> {
        self.angles
            .iter()
            .map(|&degrees| {
                let radians = (degrees as f32).to_radians();
                LineSegment {
                    start: center,
                    end: Point::new(
                        center.x + radians.cos() * panel_radius,
                        center.y - radians.sin() * panel_radius, // Flip Y (screen coords)
                    ),
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: Point, expected: Point) {
        assert!(
            (actual.x - expected.x).abs() < 1e-3 && (actual.y - expected.y).abs() < 1e-3,
            "expected {expected:?}, got {actual:?}"
        );
    }

    #[test]
    fn test_rejects_short_sets() {
        let mut guide = GuideLineGeometry::new();
        guide.set_angles(&[0, 90]).unwrap();

        assert_eq!(
            guide.set_angles(&[]),
            Err(ConfigError::TooFewGuideAngles { count: 0 })
        );
        assert_eq!(
            guide.set_angles(&[45]),
            Err(ConfigError::TooFewGuideAngles { count: 1 })
        );
        assert_eq!(guide.angles(), &[0, 90]);
    }

    #[test]
    fn test_segments_follow_screen_orientation() {
        let mut guide = GuideLineGeometry::new();
        guide.set_angles(&[0, 90, 180, 270]).unwrap();

        let center = Point::new(100.0, 100.0);
        let segments = guide.compute_segments(center, 50.0);

        assert_eq!(segments.len(), 4);
        for segment in &segments {
            assert_eq!(segment.start, center);
        }
        assert_close(segments[0].end, Point::new(150.0, 100.0));
        assert_close(segments[1].end, Point::new(100.0, 50.0)); // up
        assert_close(segments[2].end, Point::new(50.0, 100.0));
        assert_close(segments[3].end, Point::new(100.0, 150.0)); // down
    }

    #[test]
    fn test_segments_keep_input_order() {
        let mut guide = GuideLineGeometry::new();
        guide.set_angles(&[300, 0, 120]).unwrap();

        let segments = guide.compute_segments(Point::new(0.0, 0.0), 10.0);
        assert_close(segments[0].end, Point::new(5.0, 8.660254));
        assert_close(segments[1].end, Point::new(10.0, 0.0));
        assert_close(segments[2].end, Point::new(-5.0, -8.660254));
    }

    #[test]
    fn test_empty_set_has_no_segments() {
        let mut guide = GuideLineGeometry::new();
        assert!(guide.compute_segments(Point::new(0.0, 0.0), 10.0).is_empty());

        guide.set_angles(&[0, 180]).unwrap();
        guide.clear();
        assert!(guide.is_empty());
    }
}
