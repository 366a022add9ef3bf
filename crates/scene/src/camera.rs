use glam::{Mat4, Vec3};

pub const DEFAULT_YAW: f32 = -90.0;
pub const DEFAULT_PITCH: f32 = 0.0;
pub const DEFAULT_SPEED: f32 = 2.5;
pub const DEFAULT_SENSITIVITY: f32 = 0.1;
pub const DEFAULT_ZOOM: f32 = 45.0;

/// Pitch is kept strictly inside the poles so `front` never aligns with `world_up`.
pub const PITCH_LIMIT: f32 = 89.0;
pub const MIN_ZOOM: f32 = 1.0;
pub const MAX_ZOOM: f32 = 45.0;

/// Planar movement directions accepted by [`FlyCamera::process_keyboard`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CameraMovement {
    Forward,
    Backward,
    Left,
    Right,
}

/// Free-fly camera driven by keyboard, mouse motion and scroll.
///
/// Angles are stored in degrees. The `front`/`right`/`up` basis is derived
/// from yaw and pitch and recomputed every time either changes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlyCamera {
    pub position: Vec3,
    pub speed: f32,
    pub sensitivity: f32,
    world_up: Vec3,
    yaw: f32,
    pitch: f32,
    zoom: f32,
    front: Vec3,
    right: Vec3,
    up: Vec3,
}

impl Default for FlyCamera {
    fn default() -> Self {
        Self::new(Vec3::ZERO)
    }
}

impl FlyCamera {
    /// Camera at `position` looking down -Z with +Y as world up.
    pub fn new(position: Vec3) -> Self {
        Self::with_orientation(position, Vec3::Y, DEFAULT_YAW, DEFAULT_PITCH)
    }

    pub fn with_orientation(position: Vec3, world_up: Vec3, yaw: f32, pitch: f32) -> Self {
        let mut camera = Self {
            position,
            speed: DEFAULT_SPEED,
            sensitivity: DEFAULT_SENSITIVITY,
            world_up,
            yaw,
            pitch: pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT),
            zoom: DEFAULT_ZOOM,
            front: Vec3::NEG_Z,
            right: Vec3::X,
            up: Vec3::Y,
        };
        camera.update_vectors();
        camera
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Vertical field of view in degrees.
    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    pub fn set_zoom(&mut self, zoom: f32) {
        self.zoom = zoom.clamp(MIN_ZOOM, MAX_ZOOM);
    }

    pub fn front(&self) -> Vec3 {
        self.front
    }

    pub fn right(&self) -> Vec3 {
        self.right
    }

    pub fn up(&self) -> Vec3 {
        self.up
    }

    pub fn process_keyboard(&mut self, direction: CameraMovement, dt: f32) {
        let velocity = self.speed * dt;
        match direction {
            CameraMovement::Forward => self.position += self.front * velocity,
            CameraMovement::Backward => self.position -= self.front * velocity,
            CameraMovement::Left => self.position -= self.right * velocity,
            CameraMovement::Right => self.position += self.right * velocity,
        }
    }

    /// Apply a mouse delta in pixels. Positive `dy` pitches up.
    pub fn process_mouse_movement(&mut self, dx: f32, dy: f32) {
        self.yaw += dx * self.sensitivity;
        self.pitch = (self.pitch + dy * self.sensitivity).clamp(-PITCH_LIMIT, PITCH_LIMIT);
        self.update_vectors();
    }

    /// Scrolling up (positive `dy`) narrows the field of view.
    pub fn process_mouse_scroll(&mut self, dy: f32) {
        self.set_zoom(self.zoom - dy);
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position + self.front, self.up)
    }

    pub fn projection_matrix(&self, aspect: f32, near: f32, far: f32) -> Mat4 {
        Mat4::perspective_rh(self.zoom.to_radians(), aspect.max(1e-6), near, far)
    }

    fn update_vectors(&mut self) {
        let (yaw, pitch) = (self.yaw.to_radians(), self.pitch.to_radians());
        self.front = Vec3::new(
            yaw.cos() * pitch.cos(),
            pitch.sin(),
            yaw.sin() * pitch.cos(),
        )
        .normalize();
        self.right = self.front.cross(self.world_up).normalize();
        self.up = self.right.cross(self.front).normalize();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-4;

    #[test]
    fn default_camera_looks_down_negative_z() {
        let cam = FlyCamera::default();
        assert!(cam.front().abs_diff_eq(Vec3::NEG_Z, EPS));
        assert!(cam.right().abs_diff_eq(Vec3::X, EPS));
        assert!(cam.up().abs_diff_eq(Vec3::Y, EPS));
        assert_eq!(cam.zoom(), 45.0);
    }

    #[test]
    fn forward_from_origin_moves_by_speed() {
        let mut cam = FlyCamera::new(Vec3::ZERO);
        cam.process_keyboard(CameraMovement::Forward, 1.0);
        assert!(cam.position.abs_diff_eq(Vec3::new(0.0, 0.0, -DEFAULT_SPEED), EPS));
    }

    #[test]
    fn strafing_follows_right_vector() {
        let mut cam = FlyCamera::new(Vec3::ZERO);
        cam.speed = 4.0;
        cam.process_keyboard(CameraMovement::Right, 0.5);
        assert!(cam.position.abs_diff_eq(Vec3::new(2.0, 0.0, 0.0), EPS));
        cam.process_keyboard(CameraMovement::Left, 0.5);
        cam.process_keyboard(CameraMovement::Backward, 0.25);
        assert!(cam.position.abs_diff_eq(Vec3::new(0.0, 0.0, 1.0), EPS));
    }

    #[test]
    fn pitch_is_pinned_at_limits() {
        let mut cam = FlyCamera::default();
        cam.process_mouse_movement(0.0, 10_000.0);
        assert_eq!(cam.pitch(), PITCH_LIMIT);
        cam.process_mouse_movement(0.0, 5.0);
        assert_eq!(cam.pitch(), PITCH_LIMIT);

        cam.process_mouse_movement(0.0, -50_000.0);
        assert_eq!(cam.pitch(), -PITCH_LIMIT);
    }

    #[test]
    fn mouse_movement_scales_by_sensitivity() {
        let mut cam = FlyCamera::default();
        cam.process_mouse_movement(100.0, 50.0);
        assert!((cam.yaw() - (DEFAULT_YAW + 10.0)).abs() < EPS);
        assert!((cam.pitch() - 5.0).abs() < EPS);
    }

    #[test]
    fn zoom_stays_within_bounds() {
        let mut cam = FlyCamera::default();
        for _ in 0..1_000 {
            cam.process_mouse_scroll(3.7);
            assert!((MIN_ZOOM..=MAX_ZOOM).contains(&cam.zoom()));
        }
        assert_eq!(cam.zoom(), MIN_ZOOM);
        for _ in 0..1_000 {
            cam.process_mouse_scroll(-11.0);
            assert!((MIN_ZOOM..=MAX_ZOOM).contains(&cam.zoom()));
        }
        assert_eq!(cam.zoom(), MAX_ZOOM);
    }

    #[test]
    fn scroll_down_at_max_zoom_stays_at_max() {
        let mut cam = FlyCamera::default();
        cam.process_mouse_scroll(-5.0);
        assert_eq!(cam.zoom(), 45.0);
        cam.process_mouse_scroll(5.0);
        assert_eq!(cam.zoom(), 40.0);
    }

    #[test]
    fn view_inverse_recovers_position_and_front() {
        let position = Vec3::new(3.0, -2.0, 70.0);
        let mut yaw = -180.0;
        while yaw <= 180.0 {
            let mut pitch = -88.0;
            while pitch <= 88.0 {
                let cam = FlyCamera::with_orientation(position, Vec3::Y, yaw, pitch);
                let inv = cam.view_matrix().inverse();
                assert!(
                    inv.w_axis.truncate().abs_diff_eq(position, 1e-3),
                    "position mismatch at yaw={yaw} pitch={pitch}"
                );
                assert!(
                    (-inv.z_axis.truncate()).abs_diff_eq(cam.front(), 1e-3),
                    "front mismatch at yaw={yaw} pitch={pitch}"
                );
                pitch += 22.0;
            }
            yaw += 30.0;
        }
    }

    #[test]
    fn view_matrix_has_no_side_effects() {
        let cam = FlyCamera::new(Vec3::new(0.0, 0.0, 70.0));
        let before = cam;
        assert_eq!(cam.view_matrix(), cam.view_matrix());
        assert_eq!(cam, before);
    }

    #[test]
    fn projection_is_finite() {
        let cam = FlyCamera::default();
        let p = cam.projection_matrix(800.0 / 600.0, 0.1, 100.0);
        assert!(p.to_cols_array().iter().all(|f| f.is_finite()));
    }
}
