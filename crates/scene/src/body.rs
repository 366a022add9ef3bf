use glam::{Mat4, Vec3};
use serde::{Deserialize, Serialize};

/// Shared spin axis for every body (normalized before use).
pub const ROTATION_AXIS: Vec3 = Vec3::new(1.0, 0.3, 0.5);

/// Immutable description of one celestial body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodySpec {
    pub name: String,
    /// Image file name, resolved against the configured texture directory.
    pub texture: String,
    /// Half the edge length of the body's cube.
    pub half_extent: f32,
    /// Spin rate in radians per second.
    pub rotation: f32,
    /// Orbital period. Carried for completeness; no transform reads it.
    pub revolution: f32,
    /// Fixed offset from the scene origin.
    pub position: Vec3,
}

impl BodySpec {
    pub fn new(
        name: impl Into<String>,
        texture: impl Into<String>,
        half_extent: f32,
        rotation: f32,
        revolution: f32,
        position: Vec3,
    ) -> Self {
        Self {
            name: name.into(),
            texture: texture.into(),
            half_extent,
            rotation,
            revolution,
            position,
        }
    }

    /// Model matrix for this body after `elapsed` seconds.
    pub fn model(&self, elapsed: f32) -> Mat4 {
        model_matrix(
            Mat4::IDENTITY,
            elapsed,
            self.position,
            self.rotation,
            self.revolution,
        )
    }
}

/// Build a body's model matrix: `base * R(axis, elapsed * rotation) * T(position)`.
///
/// The rotation is applied on the left of the translation, so a body with a
/// non-zero offset sweeps around the axis through the origin as it spins.
/// `_revolution` is accepted but does not contribute to the result.
pub fn model_matrix(
    base: Mat4,
    elapsed: f32,
    position: Vec3,
    rotation: f32,
    _revolution: f32,
) -> Mat4 {
    base * Mat4::from_axis_angle(ROTATION_AXIS.normalize(), elapsed * rotation)
        * Mat4::from_translation(position)
}

/// The built-in nine-body solar system, Sun first.
#[rustfmt::skip]
pub fn solar_system() -> Vec<BodySpec> {
    vec![
        BodySpec::new("Sun", "sunBlock.jpg", 4.0, 0.10, 0.0, Vec3::new(0.0, 0.0, 0.0)),
        BodySpec::new("Mercury", "mercuryBlock.jpg", 0.4, 1.60, 88.0, Vec3::new(7.0, 0.0, 0.0)),
        BodySpec::new("Venus", "venusBlock.jpg", 0.9, 1.20, 225.0, Vec3::new(10.0, 0.0, 0.0)),
        BodySpec::new("Earth", "earthBlock.jpg", 1.0, 1.00, 365.0, Vec3::new(13.5, 0.0, 0.0)),
        BodySpec::new("Mars", "marsBlock.jpg", 0.6, 0.80, 687.0, Vec3::new(17.0, 0.0, 0.0)),
        BodySpec::new("Jupiter", "jupiterBlock.jpg", 2.5, 0.44, 4_333.0, Vec3::new(23.0, 0.0, 0.0)),
        BodySpec::new("Saturn", "saturnBlock.jpg", 2.1, 0.32, 10_759.0, Vec3::new(30.0, 0.0, 0.0)),
        BodySpec::new("Uranus", "uranusBlock.jpg", 1.5, 0.23, 30_687.0, Vec3::new(36.0, 0.0, 0.0)),
        BodySpec::new("Neptune", "neptuneBlock.jpg", 1.4, 0.18, 60_190.0, Vec3::new(41.0, 0.0, 0.0)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_time_is_pure_translation() {
        let pos = Vec3::new(13.5, 0.0, 0.0);
        let m = model_matrix(Mat4::IDENTITY, 0.0, pos, 1.0, 365.0);
        assert!(m.abs_diff_eq(Mat4::from_translation(pos), 1e-6));
    }

    #[test]
    fn model_is_pure() {
        let pos = Vec3::new(7.0, 1.0, -2.0);
        let a = model_matrix(Mat4::IDENTITY, 12.25, pos, 1.6, 88.0);
        let b = model_matrix(Mat4::IDENTITY, 12.25, pos, 1.6, 88.0);
        assert_eq!(a, b);
    }

    #[test]
    fn revolution_does_not_affect_transform() {
        let pos = Vec3::new(23.0, 0.0, 0.0);
        let a = model_matrix(Mat4::IDENTITY, 3.0, pos, 0.44, 4_333.0);
        let b = model_matrix(Mat4::IDENTITY, 3.0, pos, 0.44, 1.0);
        assert_eq!(a, b);
    }

    #[test]
    fn rotation_preserves_distance_from_origin() {
        let pos = Vec3::new(30.0, 0.0, 0.0);
        for step in 0..20 {
            let t = step as f32 * 0.37;
            let center =
                model_matrix(Mat4::IDENTITY, t, pos, 0.32, 0.0).transform_point3(Vec3::ZERO);
            assert!((center.length() - pos.length()).abs() < 1e-3);
        }
    }

    #[test]
    fn points_on_axis_stay_fixed() {
        let pos = ROTATION_AXIS.normalize() * 5.0;
        let m = model_matrix(Mat4::IDENTITY, 9.0, pos, 2.0, 0.0);
        assert!(m.transform_point3(Vec3::ZERO).abs_diff_eq(pos, 1e-4));
    }

    #[test]
    fn base_matrix_is_applied_first() {
        let base = Mat4::from_scale(Vec3::splat(2.0));
        let pos = Vec3::new(1.0, 0.0, 0.0);
        let m = model_matrix(base, 0.0, pos, 1.0, 0.0);
        let center = m.transform_point3(Vec3::ZERO);
        assert!(center.abs_diff_eq(Vec3::new(2.0, 0.0, 0.0), 1e-6));
    }

    #[test]
    fn angle_is_elapsed_times_rate() {
        let pos = Vec3::new(13.5, -2.0, 4.0);
        let (elapsed, rate) = (3.7, 0.85);
        let expected = Mat4::from_axis_angle(ROTATION_AXIS.normalize(), elapsed * rate)
            * Mat4::from_translation(pos);
        let m = model_matrix(Mat4::IDENTITY, elapsed, pos, rate, 365.0);
        assert!(m.abs_diff_eq(expected, 1e-5));
    }

    #[test]
    fn quarter_turn_follows_right_hand_rule() {
        let axis = ROTATION_AXIS.normalize();
        let pos = axis.cross(Vec3::Y).normalize() * 10.0;
        // 2 s at pi/4 rad/s
        let m = model_matrix(Mat4::IDENTITY, 2.0, pos, std::f32::consts::FRAC_PI_4, 0.0);
        let center = m.transform_point3(Vec3::ZERO);
        assert!(center.abs_diff_eq(axis.cross(pos), 1e-4));
    }

    #[test]
    fn solar_system_has_nine_ordered_bodies() {
        let bodies = solar_system();
        let names: Vec<&str> = bodies.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(
            names,
            ["Sun", "Mercury", "Venus", "Earth", "Mars", "Jupiter", "Saturn", "Uranus", "Neptune"]
        );
        assert_eq!(bodies[0].position, Vec3::ZERO);
        assert!(bodies.iter().all(|b| b.half_extent > 0.0));
    }

    #[test]
    fn body_model_matches_free_function() {
        let earth = &solar_system()[3];
        assert_eq!(
            earth.model(4.0),
            model_matrix(
                Mat4::IDENTITY,
                4.0,
                earth.position,
                earth.rotation,
                earth.revolution
            )
        );
    }
}
