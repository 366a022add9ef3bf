use orrery_scene::{CameraMovement, FlyCamera};

/// A high-level action produced from raw window input.
///
/// The app consumes actions, never raw events, so key bindings live in one
/// place and camera handling can be tested without a window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    /// Move the camera in a planar direction for this frame.
    Move(CameraMovement),
    /// Mouse-look delta in pixels; positive `dy` means look up.
    Look { dx: f32, dy: f32 },
    /// Scroll delta in lines; positive narrows the field of view.
    Zoom(f32),
    /// Switch between filled and wireframe polygons.
    ToggleWireframe,
    /// Show or hide the HUD overlay.
    ToggleHud,
    /// Request that the render loop terminate.
    Quit,
}

impl Action {
    /// Apply a camera action. Returns `false` for actions the camera ignores.
    pub fn apply_to_camera(&self, camera: &mut FlyCamera, dt: f32) -> bool {
        match *self {
            Action::Move(direction) => camera.process_keyboard(direction, dt),
            Action::Look { dx, dy } => camera.process_mouse_movement(dx, dy),
            Action::Zoom(dy) => camera.process_mouse_scroll(dy),
            Action::ToggleWireframe | Action::ToggleHud | Action::Quit => return false,
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orrery_scene::camera::DEFAULT_SPEED;
    use orrery_scene::glam::Vec3;

    #[test]
    fn move_action_drives_camera() {
        let mut cam = FlyCamera::new(Vec3::ZERO);
        assert!(Action::Move(CameraMovement::Forward).apply_to_camera(&mut cam, 1.0));
        assert!(cam.position.abs_diff_eq(Vec3::new(0.0, 0.0, -DEFAULT_SPEED), 1e-4));
    }

    #[test]
    fn zoom_action_scrolls() {
        let mut cam = FlyCamera::default();
        Action::Zoom(5.0).apply_to_camera(&mut cam, 0.0);
        assert_eq!(cam.zoom(), 40.0);
    }

    #[test]
    fn app_actions_leave_camera_alone() {
        let mut cam = FlyCamera::default();
        let before = cam;
        for action in [Action::ToggleWireframe, Action::ToggleHud, Action::Quit] {
            assert!(!action.apply_to_camera(&mut cam, 1.0));
        }
        assert_eq!(cam, before);
    }
}
