//! Configuration management for the joystick pad
//!
//! Handles loading, parsing, and hot-reloading of YAML configuration files.

pub mod watcher;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;
use tracing::info;

use crate::error::ConfigError;
use crate::guide::MIN_GUIDE_ANGLES;

pub use watcher::ConfigWatcher;

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct JoystickConfig {
    /// Panel radius as a fraction of half the widget's smaller side
    #[serde(default = "default_panel_scale")]
    pub panel_scale: f32,
    /// Dead zone radius as a fraction of the panel radius
    #[serde(default = "default_inner_area_scale")]
    pub inner_area_scale: f32,
    /// Stick radius as a fraction of the panel radius (drawing only)
    #[serde(default = "default_joystick_scale")]
    pub joystick_scale: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guide_angles: Option<Vec<i32>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub window: Option<WindowConfig>,
}

/// Demo window size
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct WindowConfig {
    #[serde(default = "default_window_size")]
    pub width: f32,
    #[serde(default = "default_window_size")]
    pub height: f32,
}

impl Default for JoystickConfig {
    fn default() -> Self {
        Self {
            panel_scale: default_panel_scale(),
            inner_area_scale: default_inner_area_scale(),
            joystick_scale: default_joystick_scale(),
            guide_angles: None,
            window: None,
        }
    }
}

impl JoystickConfig {
    /// Load configuration from file with validation
    pub async fn load(path: &str) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read config file: {}", path))?;

        Self::from_yaml_str(&contents)
            .with_context(|| format!("Invalid config file: {}", path))
    }

    /// Load configuration, falling back to defaults when the file does not exist
    pub async fn load_or_default(path: &str) -> Result<Self> {
        if !Path::new(path).exists() {
            info!("Config file {} not found, using defaults", path);
            return Ok(Self::default());
        }
        Self::load(path).await
    }

    /// Parse and validate YAML text
    pub fn from_yaml_str(contents: &str) -> Result<Self> {
        let config: JoystickConfig =
            serde_yaml::from_str(contents).context("Failed to parse YAML config")?;

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration for correctness
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_panel_scale(self.panel_scale)?;
        check_inner_area_scale(self.inner_area_scale)?;
        check_joystick_scale(self.joystick_scale)?;

        if let Some(angles) = &self.guide_angles {
            if angles.len() < MIN_GUIDE_ANGLES {
                return Err(ConfigError::TooFewGuideAngles {
                    count: angles.len(),
                });
            }
        }

        if let Some(window) = &self.window {
            if !window.width.is_finite()
                || !window.height.is_finite()
                || window.width <= 0.0
                || window.height <= 0.0
            {
                return Err(ConfigError::InvalidLayout {
                    width: window.width,
                    height: window.height,
                });
            }
        }

        Ok(())
    }
}

/// Panel scale must be in (0, 1]; zero would collapse the panel
pub fn check_panel_scale(value: f32) -> Result<f32, ConfigError> {
    if value > 0.0 && value <= 1.0 {
        Ok(value)
    } else {
        Err(ConfigError::InvalidScale {
            name: "panel_scale",
            range: "(0, 1]",
            value,
        })
    }
}

/// Inner area scale must be in [0, 1); one would leave no live zone
pub fn check_inner_area_scale(value: f32) -> Result<f32, ConfigError> {
    if (0.0..1.0).contains(&value) {
        Ok(value)
    } else {
        Err(ConfigError::InvalidScale {
            name: "inner_area_scale",
            range: "[0, 1)",
            value,
        })
    }
}

/// Joystick scale must be in [0, 1]
pub fn check_joystick_scale(value: f32) -> Result<f32, ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(ConfigError::InvalidScale {
            name: "joystick_scale",
            range: "[0, 1]",
            value,
        })
    }
}

// Default value functions
fn default_panel_scale() -> f32 { 0.9 }
fn default_inner_area_scale() -> f32 { 0.4 }
fn default_joystick_scale() -> f32 { 0.2 }
fn default_window_size() -> f32 { 420.0 }

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_fill_missing_fields() {
        let config = JoystickConfig::from_yaml_str("guide_angles: [0, 90, 180, 270]\n").unwrap();
        assert_eq!(config.panel_scale, 0.9);
        assert_eq!(config.inner_area_scale, 0.4);
        assert_eq!(config.joystick_scale, 0.2);
        assert_eq!(config.guide_angles, Some(vec![0, 90, 180, 270]));
        assert!(config.window.is_none());
    }

    #[test]
    fn test_rejects_out_of_range_scales() {
        assert!(JoystickConfig::from_yaml_str("panel_scale: 1.5\n").is_err());
        assert!(JoystickConfig::from_yaml_str("panel_scale: 0.0\n").is_err());
        assert!(JoystickConfig::from_yaml_str("inner_area_scale: -0.1\n").is_err());
        assert!(JoystickConfig::from_yaml_str("inner_area_scale: 1.0\n").is_err());
        assert!(JoystickConfig::from_yaml_str("joystick_scale: 1.01\n").is_err());
        assert!(JoystickConfig::from_yaml_str("joystick_scale: 1.0\n").is_ok());
    }

    #[test]
    fn test_rejects_single_guide_angle() {
        let config = JoystickConfig {
            guide_angles: Some(vec![45]),
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::TooFewGuideAngles { count: 1 })
        );
    }

    #[test]
    fn test_rejects_empty_window() {
        let err = JoystickConfig::from_yaml_str("window:\n  width: 0\n  height: 300\n");
        assert!(err.is_err());
    }

    #[test]
    fn test_nan_scale_is_rejected() {
        assert!(check_panel_scale(f32::NAN).is_err());
        assert!(check_inner_area_scale(f32::NAN).is_err());
        assert!(check_joystick_scale(f32::NAN).is_err());
    }

    #[tokio::test]
    async fn test_load_from_file() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("joystick.yaml");
        std::fs::write(
            &path,
            "panel_scale: 1.0\ninner_area_scale: 0.25\nguide_angles: [0, 60, 120, 180, 240, 300]\nwindow:\n  width: 300\n  height: 200\n",
        )?;

        let config = JoystickConfig::load(&path.to_string_lossy()).await?;
        assert_eq!(config.panel_scale, 1.0);
        assert_eq!(config.inner_area_scale, 0.25);
        assert_eq!(config.guide_angles.as_ref().map(Vec::len), Some(6));
        assert_eq!(
            config.window,
            Some(WindowConfig {
                width: 300.0,
                height: 200.0
            })
        );
        Ok(())
    }

    #[tokio::test]
    async fn test_missing_file_uses_defaults() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("absent.yaml");

        let config = JoystickConfig::load_or_default(&path.to_string_lossy()).await?;
        assert_eq!(config, JoystickConfig::default());
        Ok(())
    }
}
