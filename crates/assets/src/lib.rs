//! Asset loading for the orrery: body textures decoded to RGBA8 and WGSL
//! shader sources read from disk.
//!
//! Assets are loaded once at startup. Nothing here talks to the GPU; the
//! render backend uploads what this crate produces.

use std::path::PathBuf;

mod shader;
mod texture;

pub use shader::ShaderSources;
pub use texture::TextureData;

/// Errors from asset operations.
#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to decode image {}: {source}", .path.display())]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("texture data is {actual} bytes, expected {expected} for {width}x{height} RGBA8")]
    TextureSize {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },
}
