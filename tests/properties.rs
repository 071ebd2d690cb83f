//! Property tests for stick clamping, power, and angle mapping

use joystick_pad::geometry::{PanelGeometry, Point};
use joystick_pad::guide::GuideLineGeometry;
use joystick_pad::stick::{Signal, StickMapper};
use proptest::prelude::*;

fn mapper(radius: f32, dead_zone_ratio: f32) -> StickMapper {
    let geometry = PanelGeometry::new(Point::new(120.0, 80.0), radius, radius * dead_zone_ratio).unwrap();
    StickMapper::new(geometry)
}

proptest! {
    #[test]
    fn stick_never_leaves_panel(
        radius in 1.0f32..500.0,
        ratio in 0.0f32..0.95,
        x in -5000.0f32..5000.0,
        y in -5000.0f32..5000.0,
    ) {
        let mut m = mapper(radius, ratio);
        let dist = m.update_from_pointer(x, y);
        let center = m.geometry().center();

        prop_assert!(dist <= radius);
        prop_assert!(m.position().distance(center) <= radius + 1e-3);
    }

    #[test]
    fn pointer_inside_panel_is_not_moved(
        radius in 1.0f32..500.0,
        fraction in 0.0f32..1.0,
        degrees in 0.0f32..360.0,
    ) {
        let mut m = mapper(radius, 0.2);
        let center = m.geometry().center();
        let r = radius * fraction * 0.999;
        let (sin, cos) = degrees.to_radians().sin_cos();
        let (x, y) = (center.x + cos * r, center.y - sin * r);

        m.update_from_pointer(x, y);
        prop_assert_eq!(m.position(), Point::new(x, y));
    }

    #[test]
    fn power_stays_in_unit_range(
        ratio in 0.0f32..0.95,
        x in -1000.0f32..1000.0,
        y in -1000.0f32..1000.0,
        released in any::<bool>(),
    ) {
        let mut m = mapper(100.0, ratio);
        let dist = m.update_from_pointer(x, y);
        let signal = m.compute_signal(dist, released);

        prop_assert!((0.0..=1.0).contains(&signal.power));
        prop_assert!(signal.angle_degrees < 360);
        if released {
            prop_assert_eq!(signal.power, 0.0);
        }
    }

    #[test]
    fn power_is_monotonic_along_a_ray(
        ratio in 0.0f32..0.95,
        degrees in 0.0f32..360.0,
        a in 0.0f32..1.0,
        b in 0.0f32..1.0,
    ) {
        let mut m = mapper(100.0, ratio);
        let center = m.geometry().center();
        let (sin, cos) = degrees.to_radians().sin_cos();
        let (near, far) = if a <= b { (a, b) } else { (b, a) };

        let mut power_at = |fraction: f32| {
            let r = 100.0 * fraction;
            let dist = m.update_from_pointer(center.x + cos * r, center.y - sin * r);
            m.compute_signal(dist, false).power
        };

        let near_power = power_at(near);
        let far_power = power_at(far);
        prop_assert!(near_power <= far_power + 1e-4);
    }

    #[test]
    fn guide_segments_end_on_circle(
        angles in prop::collection::vec(-720i32..720, 2..12),
        radius in 1.0f32..300.0,
    ) {
        let mut guide = GuideLineGeometry::new();
        guide.set_angles(&angles).unwrap();

        let center = Point::new(40.0, 60.0);
        let segments = guide.compute_segments(center, radius);

        prop_assert_eq!(segments.len(), angles.len());
        for segment in segments {
            prop_assert_eq!(segment.start, center);
            prop_assert!((segment.end.distance(center) - radius).abs() <= radius * 1e-4);
        }
    }
}

#[test]
fn dead_zone_has_zero_power_and_edge_has_full_power() {
    let mut m = mapper(100.0, 0.3);
    let center = m.geometry().center();

    for step in 0..=30 {
        let dist = m.update_from_pointer(center.x + step as f32, center.y);
        assert_eq!(m.compute_signal(dist, false).power, 0.0, "dist {step}");
    }

    let dist = m.update_from_pointer(center.x, center.y + 100.0);
    assert_eq!(m.compute_signal(dist, false).power, 1.0);

    let dist = m.update_from_pointer(center.x - 900.0, center.y);
    assert_eq!(m.compute_signal(dist, false).power, 1.0);
}

#[test]
fn angle_sweep_at_half_radius_matches_pointer_angle() {
    let mut m = mapper(100.0, 0.1);
    let center = m.geometry().center();

    for degrees in 0..360u16 {
        let (sin, cos) = (degrees as f32).to_radians().sin_cos();
        let dist = m.update_from_pointer(center.x + cos * 50.0, center.y - sin * 50.0);
        let signal = m.compute_signal(dist, false);

        assert_eq!(signal.angle_degrees, degrees, "pointer at {degrees}°");
    }
}

#[test]
fn reset_then_release_is_idle() {
    let mut m = mapper(100.0, 0.1);
    m.update_from_pointer(500.0, 500.0);
    m.reset_stick();

    assert_eq!(m.position(), m.geometry().center());
    assert_eq!(
        m.compute_signal(0.0, true),
        Signal {
            angle_degrees: 0,
            power: 0.0
        }
    );
}
