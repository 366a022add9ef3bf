//! wgpu render backend for the orrery.
//!
//! Draws one textured cube per body with a single shader program. Each body
//! owns its vertex object, texture and transform uniforms; all of them are
//! released when the [`SceneRenderer`] is dropped.
//!
//! # Invariants
//! - The renderer never mutates camera or body state; it consumes a
//!   [`orrery_render::RenderFrame`].
//! - Shader and pipeline validation errors surface as [`RenderError`]
//!   instead of aborting the process.

mod context;
mod gpu;
mod shaders;
mod texture;
mod vertex;

pub use context::GpuContext;
pub use gpu::{BodyAssets, SceneRenderer};
pub use shaders::{BODY_FRAGMENT_SHADER, BODY_VERTEX_SHADER, builtin_sources};
pub use texture::GpuTexture;
pub use vertex::VertexObject;

/// Errors from GPU setup and resource creation.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("failed to create surface: {0}")]
    Surface(#[from] wgpu::CreateSurfaceError),
    #[error("no suitable GPU adapter found")]
    NoAdapter,
    #[error("surface reports no supported formats for this adapter")]
    IncompatibleSurface,
    #[error("failed to create device: {0}")]
    Device(#[from] wgpu::RequestDeviceError),
    #[error("shader `{label}` failed validation: {message}")]
    Shader { label: String, message: String },
    #[error("pipeline `{label}` failed validation: {message}")]
    Pipeline { label: String, message: String },
}
