//! Joystick pad: wires layout, pointer events, and configuration into the core
//!
//! [`JoystickPad`] is the piece a host UI talks to. It derives panel geometry
//! from the widget size, feeds pointer events through [`StickMapper`], keeps the
//! guide line segments current, and reports every processed event to an
//! optional listener.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::config::{check_inner_area_scale, check_joystick_scale, check_panel_scale, JoystickConfig};
use crate::error::ConfigError;
use crate::geometry::{Circle, PanelGeometry, Point};
use crate::guide::{GuideLineGeometry, LineSegment};
use crate::stick::{Signal, StickMapper};

/// Callback receiving one signal per processed pointer event
pub type MoveListener = Box<dyn FnMut(Signal)>;

/// Pointer phase as delivered by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PointerPhase {
    Press,
    Move,
    Release,
}

/// Pointer event in widget-local coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub phase: PointerPhase,
    pub x: f32,
    pub y: f32,
}

impl PointerEvent {
    pub fn new(phase: PointerPhase, x: f32, y: f32) -> Self {
        Self { phase, x, y }
    }
}

/// Everything a renderer needs to draw one frame
#[derive(Debug, Clone, PartialEq)]
pub struct PadScene {
    pub panel: Circle,
    /// Present only when the inner area scale is above zero
    pub dead_zone: Option<Circle>,
    pub guide_lines: Vec<LineSegment>,
    pub stick: Circle,
}

/// On-screen joystick state owned by one widget instance
pub struct JoystickPad {
    panel_scale: f32,
    inner_area_scale: f32,
    joystick_scale: f32,
    size: Option<(f32, f32)>,
    mapper: Option<StickMapper>,
    guide: GuideLineGeometry,
    segments: Vec<LineSegment>,
    listener: Option<MoveListener>,
}

impl Default for JoystickPad {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for JoystickPad {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JoystickPad")
            .field("panel_scale", &self.panel_scale)
            .field("inner_area_scale", &self.inner_area_scale)
            .field("joystick_scale", &self.joystick_scale)
            .field("size", &self.size)
            .field("mapper", &self.mapper)
            .field("guide", &self.guide)
            .field("has_listener", &self.listener.is_some())
            .finish()
    }
}

impl JoystickPad {
    /// Pad with default scales and no guide lines, waiting for its first layout
    pub fn new() -> Self {
        let defaults = JoystickConfig::default();
        Self {
            panel_scale: defaults.panel_scale,
            inner_area_scale: defaults.inner_area_scale,
            joystick_scale: defaults.joystick_scale,
            size: None,
            mapper: None,
            guide: GuideLineGeometry::new(),
            segments: Vec::new(),
            listener: None,
        }
    }

    /// Pad configured from a validated config
    pub fn with_config(config: &JoystickConfig) -> Result<Self, ConfigError> {
        let mut pad = Self::new();
        pad.apply_config(config)?;
        Ok(pad)
    }

    /// Install the listener, replacing any previous one
    pub fn set_listener(&mut self, listener: impl FnMut(Signal) + 'static) {
        self.listener = Some(Box::new(listener));
    }

    /// Remove the listener; later events are still processed
    pub fn clear_listener(&mut self) -> Option<MoveListener> {
        self.listener.take()
    }

    /// React to a new widget size
    ///
    /// Re-derives the panel geometry, recenters the stick, and recomputes
    /// guide lines. A degenerate size is rejected and the previous layout kept.
    pub fn on_size_changed(&mut self, width: f32, height: f32) -> Result<(), ConfigError> {
        let geometry =
            PanelGeometry::from_layout(width, height, self.panel_scale, self.inner_area_scale)
                .inspect_err(|e| warn!("Ignoring layout {}x{}: {}", width, height, e))?;

        if self.size == Some((width, height)) {
            return Ok(());
        }

        debug!(
            "Layout {}x{}: panel radius {:.1}, dead zone {:.1}",
            width,
            height,
            geometry.panel_radius(),
            geometry.dead_zone_radius()
        );

        self.size = Some((width, height));
        self.install_geometry(geometry);
        Ok(())
    }

    /// Feed one pointer event
    ///
    /// Returns the signal passed to the listener, or `None` if the event was
    /// dropped (no layout yet, or non-finite coordinates).
    pub fn on_pointer(&mut self, event: PointerEvent) -> Option<Signal> {
        let Some(mapper) = self.mapper.as_mut() else {
            debug!("Pointer event before first layout, ignoring: {:?}", event);
            return None;
        };

        if !event.x.is_finite() || !event.y.is_finite() {
            warn!("Ignoring pointer event with non-finite coordinates: {:?}", event);
            return None;
        }

        let signal = match event.phase {
            PointerPhase::Press | PointerPhase::Move => {
                let dist = mapper.update_from_pointer(event.x, event.y);
                mapper.compute_signal(dist, false)
            }
            PointerPhase::Release => {
                mapper.reset_stick();
                mapper.compute_signal(0.0, true)
            }
        };

        trace!(
            "{:?} at ({:.1}, {:.1}) -> angle {} power {:.3}",
            event.phase,
            event.x,
            event.y,
            signal.angle_degrees,
            signal.power
        );

        if let Some(listener) = self.listener.as_mut() {
            listener(signal);
        }

        Some(signal)
    }

    pub fn set_panel_scale(&mut self, value: f32) -> Result<(), ConfigError> {
        let value = check_panel_scale(value).inspect_err(|e| warn!("{}", e))?;
        self.relayout(value, self.inner_area_scale)?;
        self.panel_scale = value;
        debug!("panel_scale set to {}", value);
        Ok(())
    }

    pub fn set_inner_area_scale(&mut self, value: f32) -> Result<(), ConfigError> {
        let value = check_inner_area_scale(value).inspect_err(|e| warn!("{}", e))?;
        self.relayout(self.panel_scale, value)?;
        self.inner_area_scale = value;
        debug!("inner_area_scale set to {}", value);
        Ok(())
    }

    /// Stick drawing size; does not affect the signal
    pub fn set_joystick_scale(&mut self, value: f32) -> Result<(), ConfigError> {
        self.joystick_scale = check_joystick_scale(value).inspect_err(|e| warn!("{}", e))?;
        debug!("joystick_scale set to {}", value);
        Ok(())
    }

    pub fn set_guide_angles(&mut self, angles: &[i32]) -> Result<(), ConfigError> {
        self.guide
            .set_angles(angles)
            .inspect_err(|e| warn!("{}", e))?;
        self.refresh_segments();
        debug!("guide angles set to {:?}", angles);
        Ok(())
    }

    pub fn clear_guide_angles(&mut self) {
        self.guide.clear();
        self.segments.clear();
        debug!("guide angles cleared");
    }

    /// Apply every field of a config, or none of them
    ///
    /// A missing `guide_angles` clears the guide lines.
    pub fn apply_config(&mut self, config: &JoystickConfig) -> Result<(), ConfigError> {
        config.validate().inspect_err(|e| warn!("Rejected config: {}", e))?;

        let geometry = match self.size {
            Some((width, height)) => Some(PanelGeometry::from_layout(
                width,
                height,
                config.panel_scale,
                config.inner_area_scale,
            )?),
            None => None,
        };

        let mut guide = GuideLineGeometry::new();
        if let Some(angles) = &config.guide_angles {
            guide.set_angles(angles)?;
        }

        self.panel_scale = config.panel_scale;
        self.inner_area_scale = config.inner_area_scale;
        self.joystick_scale = config.joystick_scale;
        self.guide = guide;

        match geometry {
            Some(geometry) => self.install_geometry(geometry),
            None => self.refresh_segments(),
        }

        debug!("Applied config: {:?}", config);
        Ok(())
    }

    /// Current configuration as a config value
    pub fn config(&self) -> JoystickConfig {
        JoystickConfig {
            panel_scale: self.panel_scale,
            inner_area_scale: self.inner_area_scale,
            joystick_scale: self.joystick_scale,
            guide_angles: (!self.guide.is_empty()).then(|| self.guide.angles().to_vec()),
            window: None,
        }
    }

    pub fn geometry(&self) -> Option<&PanelGeometry> {
        self.mapper.as_ref().map(StickMapper::geometry)
    }

    pub fn stick_position(&self) -> Option<Point> {
        self.mapper.as_ref().map(StickMapper::position)
    }

    pub fn guide_segments(&self) -> &[LineSegment] {
        &self.segments
    }

    pub fn panel_scale(&self) -> f32 {
        self.panel_scale
    }

    pub fn inner_area_scale(&self) -> f32 {
        self.inner_area_scale
    }

    pub fn joystick_scale(&self) -> f32 {
        self.joystick_scale
    }

    /// Snapshot for the renderer, `None` before the first layout
    pub fn scene(&self) -> Option<PadScene> {
        let mapper = self.mapper.as_ref()?;
        let geometry = mapper.geometry();
        let center = geometry.center();

        Some(PadScene {
            panel: Circle {
                center,
                radius: geometry.panel_radius(),
            },
            dead_zone: (self.inner_area_scale > 0.0).then(|| Circle {
                center,
                radius: geometry.dead_zone_radius(),
            }),
            guide_lines: self.segments.clone(),
            stick: Circle {
                center: mapper.position(),
                radius: geometry.panel_radius() * self.joystick_scale,
            },
        })
    }

    // --- private area ---

    /// Re-derive geometry for new scales if laid out; nothing changes on error
    fn relayout(&mut self, panel_scale: f32, inner_area_scale: f32) -> Result<(), ConfigError> {
        if let Some((width, height)) = self.size {
            let geometry = PanelGeometry::from_layout(width, height, panel_scale, inner_area_scale)
                .inspect_err(|e| warn!("{}", e))?;
            self.install_geometry(geometry);
        }
        Ok(())
    }

    fn install_geometry(&mut self, geometry: PanelGeometry) {
        match self.mapper.as_mut() {
            Some(mapper) => mapper.set_geometry(geometry),
            None => self.mapper = Some(StickMapper::new(geometry)),
        }
        self.refresh_segments();
    }

    fn refresh_segments(&mut self) {
        self.segments = match self.mapper.as_ref() {
            Some(mapper) => {
                let geometry = mapper.geometry();
                self.guide
                    .compute_segments(geometry.center(), geometry.panel_radius())
            }
            None => Vec::new(),
        };
    }
}
