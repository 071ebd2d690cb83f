//! Joystick Pad
//!
//! Geometry and input mapping for an on-screen joystick: a circular panel on
//! which a dragged stick reports an angle and a power, with an optional dead
//! zone and radial guide lines.
//!
//! The core ([`stick`], [`guide`], [`pad`]) has no rendering dependency.
//! [`visualizer`] hosts it in an egui window.
//!
//! ```
//! use joystick_pad::pad::{JoystickPad, PointerEvent, PointerPhase};
//!
//! let mut pad = JoystickPad::new();
//! pad.on_size_changed(200.0, 200.0).unwrap();
//!
//! // Straight up from the center, on the panel edge
//! let signal = pad
//!     .on_pointer(PointerEvent::new(PointerPhase::Press, 100.0, 0.0))
//!     .unwrap();
//! assert_eq!(signal.angle_degrees, 90);
//! assert_eq!(signal.power, 1.0);
//! ```

pub mod config;
pub mod error;
pub mod geometry;
pub mod guide;
pub mod pad;
pub mod simulate;
pub mod stick;
pub mod visualizer;

pub use error::ConfigError;
pub use geometry::{PanelGeometry, Point};
pub use pad::{JoystickPad, PointerEvent, PointerPhase};
pub use stick::{Signal, StickMapper};
