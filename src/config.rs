//! Configuration parsing and management for avatar-stage

use serde::{Deserialize, Serialize};
use std::f32::consts::{FRAC_PI_2, PI};
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, StageError};

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub camera: CameraConfig,
    pub controls: ControlsConfig,
    pub mouth: MouthConfig,
    pub stage: StageConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, StageError> {
        let contents = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            ConfigError::ReadFile(format!("{}: {}", path.as_ref().display(), e))
        })?;

        Self::from_str(&contents)
    }

    /// Parse configuration from a TOML string
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Result<Self, StageError> {
        toml::from_str(s).map_err(|e| ConfigError::Parse(e.to_string()).into())
    }

    /// Load configuration from default paths
    pub fn load() -> Result<Self, StageError> {
        let paths = [
            PathBuf::from("avatar-stage.toml"),
            PathBuf::from("config/default.toml"),
            dirs_path().join("config.toml"),
        ];

        for path in &paths {
            if path.exists() {
                tracing::info!("Loading config from: {}", path.display());
                return Self::from_file(path);
            }
        }

        tracing::info!("No config file found, using defaults");
        Ok(Self::default())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), StageError> {
        let camera = &self.camera;

        let scalars = [
            ("camera.fov", camera.fov),
            ("camera.near", camera.near),
            ("camera.far", camera.far),
            ("camera.rotate_step", camera.rotate_step),
            ("camera.zoom_step", camera.zoom_step),
            ("camera.min_distance", camera.min_distance),
            ("camera.max_distance", camera.max_distance),
            ("camera.min_polar", camera.min_polar),
            ("camera.max_polar", camera.max_polar),
        ];
        for (field, value) in scalars {
            if !value.is_finite() {
                return Err(invalid(field, "Value must be a finite number"));
            }
        }
        let points = [("camera.position", camera.position), ("camera.target", camera.target)];
        for (field, point) in points {
            if point.iter().any(|v| !v.is_finite()) {
                return Err(invalid(field, "Coordinates must be finite numbers"));
            }
        }

        if camera.rotate_step <= 0.0 {
            return Err(invalid("camera.rotate_step", "Step must be greater than 0"));
        }
        if camera.zoom_step <= 0.0 {
            return Err(invalid("camera.zoom_step", "Step must be greater than 0"));
        }
        if camera.min_distance <= 0.0 {
            return Err(invalid(
                "camera.min_distance",
                "Minimum distance must be greater than 0",
            ));
        }
        if camera.min_distance > camera.max_distance {
            return Err(invalid(
                "camera.max_distance",
                "Maximum distance must not be below the minimum",
            ));
        }
        if !(0.0..=PI).contains(&camera.min_polar) || !(0.0..=PI).contains(&camera.max_polar) {
            return Err(invalid("camera.max_polar", "Polar bounds must lie in [0, pi]"));
        }
        if camera.min_polar > camera.max_polar {
            return Err(invalid(
                "camera.max_polar",
                "Maximum polar angle must not be below the minimum",
            ));
        }
        if camera.position == camera.target {
            return Err(invalid(
                "camera.position",
                "Camera position must differ from its target",
            ));
        }

        if !(0.0..=1.0).contains(&self.stage.placeholder_opacity) {
            return Err(invalid(
                "stage.placeholder_opacity",
                "Opacity must be between 0.0 and 1.0",
            ));
        }

        if self.controls.is_empty() {
            tracing::warn!("No control keys bound, the camera can only be dragged");
        }

        Ok(())
    }
}

fn invalid(field: &str, message: &str) -> StageError {
    ConfigError::InvalidValue {
        field: field.to_string(),
        message: message.to_string(),
    }
    .into()
}

/// Orbit camera configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Initial eye position
    pub position: [f32; 3],
    /// Orbit target (the figure's chest height)
    pub target: [f32; 3],
    /// Vertical field of view in degrees
    pub fov: f32,
    pub near: f32,
    pub far: f32,
    /// Azimuth change per frame while a rotate key is held (radians)
    pub rotate_step: f32,
    /// Distance change per frame while a zoom key is held
    pub zoom_step: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    /// Polar angle bounds measured from straight up (radians)
    pub min_polar: f32,
    pub max_polar: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            position: [0.0, 1.5, 3.0],
            target: [0.0, 1.0, 0.0],
            fov: 45.0,
            near: 0.1,
            far: 1000.0,
            rotate_step: 0.02,
            zoom_step: 0.05,
            min_distance: 1.0,
            max_distance: 10.0,
            min_polar: 0.0,
            max_polar: FRAC_PI_2,
        }
    }
}

/// Key bindings for the four camera controls
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlsConfig {
    pub rotate_left: Vec<String>,
    pub rotate_right: Vec<String>,
    pub zoom_in: Vec<String>,
    pub zoom_out: Vec<String>,
}

impl ControlsConfig {
    fn is_empty(&self) -> bool {
        self.rotate_left.is_empty()
            && self.rotate_right.is_empty()
            && self.zoom_in.is_empty()
            && self.zoom_out.is_empty()
    }
}

fn keys(names: &[&str]) -> Vec<String> {
    names.iter().map(|k| k.to_string()).collect()
}

impl Default for ControlsConfig {
    fn default() -> Self {
        Self {
            rotate_left: keys(&["ArrowLeft", "KeyA"]),
            rotate_right: keys(&["ArrowRight", "KeyD"]),
            zoom_in: keys(&["KeyW", "ArrowUp"]),
            zoom_out: keys(&["KeyS", "ArrowDown"]),
        }
    }
}

/// Mouth tints used by lip-sync
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MouthConfig {
    /// Tint while talking
    pub active_color: String,
    /// Tint while silent
    pub neutral_color: String,
}

impl Default for MouthConfig {
    fn default() -> Self {
        Self {
            active_color: "#cc3344".to_string(),
            neutral_color: "#663333".to_string(),
        }
    }
}

/// Static stage dressing: ground plane and the empty-stage placeholder
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StageConfig {
    pub ground_color: String,
    pub ground_size: f32,
    pub placeholder_color: String,
    pub placeholder_opacity: f32,
}

impl Default for StageConfig {
    fn default() -> Self {
        Self {
            ground_color: "#1a1a1a".to_string(),
            ground_size: 10.0,
            placeholder_color: "#333333".to_string(),
            placeholder_opacity: 0.5,
        }
    }
}

/// Get the platform-specific configuration directory
fn dirs_path() -> PathBuf {
    #[cfg(target_os = "linux")]
    {
        if let Some(config_dir) = std::env::var_os("XDG_CONFIG_HOME") {
            return PathBuf::from(config_dir).join("avatar-stage");
        }
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home).join(".config/avatar-stage");
        }
    }

    #[cfg(target_os = "macos")]
    {
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home).join("Library/Application Support/avatar-stage");
        }
    }

    #[cfg(target_os = "windows")]
    {
        if let Some(appdata) = std::env::var_os("APPDATA") {
            return PathBuf::from(appdata).join("avatar-stage");
        }
    }

    PathBuf::from(".")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.camera.min_distance, 1.0);
        assert_eq!(config.camera.max_distance, 10.0);
        assert_eq!(config.camera.rotate_step, 0.02);
        assert_eq!(config.controls.zoom_in, vec!["KeyW", "ArrowUp"]);
        assert_eq!(config.stage.placeholder_opacity, 0.5);
    }

    #[test]
    fn test_config_validation() {
        let config = Config::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_toml() {
        let toml = r##"
            [camera]
            zoom_step = 0.1
            max_distance = 6.0

            [mouth]
            active_color = "#ff0000"
        "##;

        let config = Config::from_str(toml).unwrap();
        assert_eq!(config.camera.zoom_step, 0.1);
        assert_eq!(config.camera.max_distance, 6.0);
        assert_eq!(config.camera.min_distance, 1.0);
        assert_eq!(config.mouth.active_color, "#ff0000");
        assert_eq!(config.mouth.neutral_color, "#663333");
    }

    #[test]
    fn test_inverted_distance_rejected() {
        let mut config = Config::default();
        config.camera.min_distance = 5.0;
        config.camera.max_distance = 2.0;

        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("camera.max_distance"));
    }

    #[test]
    fn test_non_finite_camera_values_rejected() {
        for field in ["min_distance", "max_distance", "rotate_step", "zoom_step", "max_polar"] {
            for value in ["nan", "inf", "-inf"] {
                let toml = format!("[camera]\n{field} = {value}");
                let config = Config::from_str(&toml).unwrap();
                let err = config.validate().unwrap_err();
                assert!(
                    err.to_string().contains(&format!("camera.{field}")),
                    "{field} = {value}: {err}"
                );
            }
        }

        let mut config = Config::default();
        config.camera.target = [0.0, f32::NAN, 0.0];
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_bad_opacity_rejected() {
        let mut config = Config::default();
        config.stage.placeholder_opacity = 1.5;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_parse_error() {
        let err = Config::from_str("[camera\nfov = ").unwrap_err();
        assert!(matches!(err, StageError::Config(ConfigError::Parse(_))));
    }
}
