//! Scene configuration, loaded from YAML.
//!
//! Every section has defaults, so a config file only needs the keys it wants
//! to override. [`SceneConfig::default`] is the built-in solar system.

use crate::body::{BodySpec, solar_system};
use crate::camera::{
    DEFAULT_SENSITIVITY, DEFAULT_SPEED, DEFAULT_ZOOM, FlyCamera, MAX_ZOOM, MIN_ZOOM,
};
use glam::Vec3;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Errors from loading or validating a scene config.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("invalid scene config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
    pub title: String,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            title: "Orrery".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub position: Vec3,
    pub speed: f32,
    pub sensitivity: f32,
    /// Initial vertical field of view in degrees.
    pub zoom: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, 70.0),
            speed: DEFAULT_SPEED,
            sensitivity: DEFAULT_SENSITIVITY,
            zoom: DEFAULT_ZOOM,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectionConfig {
    pub near: f32,
    pub far: f32,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            near: 0.1,
            far: 100.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetConfig {
    pub texture_dir: PathBuf,
    /// WGSL vertex module overriding the built-in shader. Set together with
    /// `fragment_shader`.
    pub vertex_shader: Option<PathBuf>,
    pub fragment_shader: Option<PathBuf>,
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self {
            texture_dir: PathBuf::from("images"),
            vertex_shader: None,
            fragment_shader: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub window: WindowConfig,
    pub camera: CameraConfig,
    pub projection: ProjectionConfig,
    pub assets: AssetConfig,
    pub bodies: Vec<BodySpec>,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            camera: CameraConfig::default(),
            projection: ProjectionConfig::default(),
            assets: AssetConfig::default(),
            bodies: solar_system(),
        }
    }
}

impl SceneConfig {
    /// Read, parse and validate a YAML config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_yaml_str(&text)?;
        tracing::debug!(
            "loaded scene config from {} ({} bodies)",
            path.display(),
            config.bodies.len()
        );
        Ok(config)
    }

    pub fn from_yaml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml::to_string(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.window.width == 0 || self.window.height == 0 {
            return Err(ConfigError::Invalid(format!(
                "window size must be non-zero, got {}x{}",
                self.window.width, self.window.height
            )));
        }
        if self.bodies.is_empty() {
            return Err(ConfigError::Invalid("at least one body is required".into()));
        }
        if let Some(body) = self
            .bodies
            .iter()
            .find(|b| !b.half_extent.is_finite() || b.half_extent <= 0.0)
        {
            return Err(ConfigError::Invalid(format!(
                "body `{}` has non-positive half extent {}",
                body.name, body.half_extent
            )));
        }
        let ProjectionConfig { near, far } = self.projection;
        if !(near > 0.0 && far > near) {
            return Err(ConfigError::Invalid(format!(
                "projection requires 0 < near < far, got near={near} far={far}"
            )));
        }
        if !(MIN_ZOOM..=MAX_ZOOM).contains(&self.camera.zoom) {
            return Err(ConfigError::Invalid(format!(
                "camera zoom {} outside [{MIN_ZOOM}, {MAX_ZOOM}]",
                self.camera.zoom
            )));
        }
        if self.assets.vertex_shader.is_some() != self.assets.fragment_shader.is_some() {
            return Err(ConfigError::Invalid(
                "vertex_shader and fragment_shader must be set together".into(),
            ));
        }
        Ok(())
    }

    /// Fixed projection aspect ratio, taken from the configured window size.
    pub fn aspect(&self) -> f32 {
        self.window.width as f32 / self.window.height.max(1) as f32
    }

    /// Camera in its configured starting state.
    pub fn camera(&self) -> FlyCamera {
        let mut camera = FlyCamera::new(self.camera.position);
        camera.speed = self.camera.speed;
        camera.sensitivity = self.camera.sensitivity;
        camera.set_zoom(self.camera.zoom);
        camera
    }

    pub fn texture_path(&self, body: &BodySpec) -> PathBuf {
        self.assets.texture_dir.join(&body.texture)
    }
}
