use glam::{Mat4, Vec3};
use orrery_scene::{BodySpec, FlyCamera};

/// One body's draw for this frame.
#[derive(Debug, Clone, PartialEq)]
pub struct BodyDraw {
    /// Index into the body list the renderer was built from.
    pub index: usize,
    pub name: String,
    pub model: Mat4,
}

/// Everything a backend needs to draw one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub projection: Mat4,
    pub view: Mat4,
    pub draws: Vec<BodyDraw>,
    pub elapsed: f32,
    pub eye: Vec3,
    pub front: Vec3,
    pub zoom: f32,
}

impl RenderFrame {
    /// Build the frame for `elapsed` seconds: projection from the camera zoom
    /// and a fixed aspect, view from the camera, one draw per body in order.
    pub fn compose(
        camera: &FlyCamera,
        bodies: &[BodySpec],
        elapsed: f32,
        aspect: f32,
        near: f32,
        far: f32,
    ) -> Self {
        let draws = bodies
            .iter()
            .enumerate()
            .map(|(index, body)| BodyDraw {
                index,
                name: body.name.clone(),
                model: body.model(elapsed),
            })
            .collect();
        Self {
            projection: camera.projection_matrix(aspect, near, far),
            view: camera.view_matrix(),
            draws,
            elapsed,
            eye: camera.position,
            front: camera.front(),
            zoom: camera.zoom(),
        }
    }
}
