//! Rendering adapter: renderer-agnostic description of one frame.
//!
//! # Invariants
//! - Renderers never mutate the camera or body descriptors.
//! - A [`RenderFrame`] is derived from camera state, body descriptors and
//!   elapsed time only, so any backend draws the same scene.

mod frame;
mod renderer;

pub use frame::{BodyDraw, RenderFrame};
pub use renderer::{DebugTextRenderer, Renderer};
