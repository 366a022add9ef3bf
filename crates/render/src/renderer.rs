use crate::frame::RenderFrame;
use std::fmt::Write;

/// Renderer-agnostic interface. All frame consumers implement this trait.
pub trait Renderer {
    /// The output type produced by this renderer.
    type Output;

    /// Render one frame.
    fn render(&mut self, frame: &RenderFrame) -> Self::Output;
}

/// Renders a frame as human-readable text: camera state plus each body's
/// world-space centre. Used by the CLI and in tests.
#[derive(Debug, Default)]
pub struct DebugTextRenderer;

impl DebugTextRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Renderer for DebugTextRenderer {
    type Output = String;

    fn render(&mut self, frame: &RenderFrame) -> String {
        let mut out = String::new();
        // Writing into a String can't fail.
        let _ = writeln!(
            out,
            "=== Frame (t={:.2}s, zoom={:.1}) ===",
            frame.elapsed, frame.zoom
        );
        let _ = writeln!(
            out,
            "Camera: eye=({:.1}, {:.1}, {:.1}) front=({:.2}, {:.2}, {:.2})",
            frame.eye.x, frame.eye.y, frame.eye.z, frame.front.x, frame.front.y, frame.front.z
        );
        let _ = writeln!(out, "Bodies: {}", frame.draws.len());
        for draw in &frame.draws {
            let c = draw.model.w_axis;
            let _ = writeln!(
                out,
                "  [{}] {:<8} centre=({:.2}, {:.2}, {:.2})",
                draw.index, draw.name, c.x, c.y, c.z
            );
        }
        out
    }
}
