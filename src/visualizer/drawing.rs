//! Low-level drawing primitives for the joystick demo
//!
//! Converts pad-local coordinates to screen space and draws the pieces of a
//! [`PadScene`].

use egui::{Color32, Painter, Pos2, Stroke};

use crate::geometry::{Circle, Point};
use crate::guide::LineSegment;
use crate::pad::PadScene;

/// Map a pad-local point to screen space given the pad's top-left corner
pub fn to_screen(origin: Pos2, point: Point) -> Pos2 {
    egui::pos2(origin.x + point.x, origin.y + point.y)
}

/// Map a screen position back to pad-local coordinates
pub fn to_local(origin: Pos2, pos: Pos2) -> Point {
    Point::new(pos.x - origin.x, pos.y - origin.y)
}

/// Draw a center crosshair on the painter
pub fn draw_crosshair(painter: &Painter, center: Pos2, size: f32, color: Color32) {
    painter.line_segment(
        [
            egui::pos2(center.x - size, center.y),
            egui::pos2(center.x + size, center.y),
        ],
        Stroke::new(1.0, color),
    );
    painter.line_segment(
        [
            egui::pos2(center.x, center.y - size),
            egui::pos2(center.x, center.y + size),
        ],
        Stroke::new(1.0, color),
    );
}

fn draw_guide_lines(painter: &Painter, origin: Pos2, lines: &[LineSegment], color: Color32) {
    for line in lines {
        painter.line_segment(
            [to_screen(origin, line.start), to_screen(origin, line.end)],
            Stroke::new(2.0, color),
        );
    }
}

fn fill_circle(painter: &Painter, origin: Pos2, circle: &Circle, color: Color32) {
    painter.circle_filled(to_screen(origin, circle.center), circle.radius, color);
}

/// Draw a full scene: panel, dead zone ring, guide lines, then the stick on top
pub fn draw_scene(painter: &Painter, origin: Pos2, scene: &PadScene, stick_color: Color32) {
    fill_circle(painter, origin, &scene.panel, Color32::from_gray(30));
    painter.circle_stroke(
        to_screen(origin, scene.panel.center),
        scene.panel.radius,
        Stroke::new(1.0, Color32::from_gray(100)),
    );

    if let Some(dead_zone) = &scene.dead_zone {
        painter.circle_stroke(
            to_screen(origin, dead_zone.center),
            dead_zone.radius,
            Stroke::new(1.0, Color32::from_rgb(100, 255, 100)),
        );
    }

    draw_guide_lines(
        painter,
        origin,
        &scene.guide_lines,
        Color32::from_rgba_unmultiplied(255, 80, 80, 140),
    );

    draw_crosshair(
        painter,
        to_screen(origin, scene.panel.center),
        3.0,
        Color32::from_gray(80),
    );

    fill_circle(painter, origin, &scene.stick, stick_color);
}

/// Get color based on power (green at full power, yellow otherwise, gray when idle)
pub fn power_color(power: f32) -> Color32 {
    if power > 0.95 {
        Color32::from_rgb(100, 255, 100)
    } else if power > 0.0 {
        Color32::from_rgb(255, 200, 100)
    } else {
        Color32::from_gray(150)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_and_screen_are_inverse() {
        let origin = egui::pos2(20.0, 40.0);
        let point = Point::new(5.0, 7.5);

        let screen = to_screen(origin, point);
        assert_eq!(screen, egui::pos2(25.0, 47.5));
        assert_eq!(to_local(origin, screen), point);
    }

    #[test]
    fn test_power_color_bands() {
        assert_eq!(power_color(1.0), Color32::from_rgb(100, 255, 100));
        assert_eq!(power_color(0.5), Color32::from_rgb(255, 200, 100));
        assert_eq!(power_color(0.0), Color32::from_gray(150));
    }
}
