//! Scene model for the orrery: fly camera, celestial body descriptors and
//! their model transforms, cube geometry, frame timing, scene configuration.
//!
//! # Invariants
//! - Nothing in this crate touches the GPU; every type is plain CPU state.
//! - Model transforms are pure functions of their inputs. Wall-clock time
//!   enters only through [`FrameClock`], never inside a transform.
//! - Camera pitch stays within ±89° and zoom within [1°, 45°].

pub use glam;

pub mod body;
pub mod camera;
pub mod config;
pub mod mesh;
pub mod timing;

pub use body::{BodySpec, ROTATION_AXIS, model_matrix, solar_system};
pub use camera::{CameraMovement, FlyCamera};
pub use config::{
    AssetConfig, CameraConfig, ConfigError, ProjectionConfig, SceneConfig, WindowConfig,
};
pub use mesh::{CUBE_VERTEX_COUNT, TexturedVertex, textured_cube};
pub use timing::{FrameClock, FrameTime};
