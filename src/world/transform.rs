//=========================================================================
// Transform
//=========================================================================
//
// Local translation/rotation/scale relative to the parent (or the world
// origin for roots). Axis queries follow a right-handed, Y-up frame with
// +Z as forward, matching the scene's movement mapping.
//
//=========================================================================

use glam::{Mat4, Quat, Vec3};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub translation: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

impl Transform {
    pub const IDENTITY: Self = Self {
        translation: Vec3::ZERO,
        rotation: Quat::IDENTITY,
        scale: Vec3::ONE,
    };

    pub fn matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.rotation, self.translation)
    }

    /// Local +X rotated into the parent frame.
    pub fn right(&self) -> Vec3 {
        self.rotation * Vec3::X
    }

    pub fn up(&self) -> Vec3 {
        self.rotation * Vec3::Y
    }

    /// Local +Z rotated into the parent frame.
    pub fn forward(&self) -> Vec3 {
        self.rotation * Vec3::Z
    }

    /// Rotates by `degrees` about `axis` (parent frame).
    ///
    /// A zero-length axis leaves the rotation untouched.
    pub fn rotate_by(&mut self, degrees: f32, axis: Vec3) {
        let Some(axis) = axis.try_normalize() else {
            return;
        };
        let delta = Quat::from_axis_angle(axis, degrees.to_radians());
        self.rotation = (delta * self.rotation).normalize();
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    #[test]
    fn identity_axes() {
        let t = Transform::IDENTITY;
        assert!(t.right().abs_diff_eq(Vec3::X, EPS));
        assert!(t.up().abs_diff_eq(Vec3::Y, EPS));
        assert!(t.forward().abs_diff_eq(Vec3::Z, EPS));
    }

    #[test]
    fn yaw_turns_forward_toward_right() {
        let mut t = Transform::IDENTITY;
        t.rotate_by(90.0, Vec3::Y);
        assert!(t.forward().abs_diff_eq(Vec3::X, EPS));
        assert!(t.right().abs_diff_eq(-Vec3::Z, EPS));
    }

    #[test]
    fn rotating_about_own_right_axis_keeps_it() {
        let mut t = Transform::IDENTITY;
        t.rotate_by(30.0, Vec3::Y);
        let right = t.right();

        t.rotate_by(5.0, right);

        assert!(t.right().abs_diff_eq(right, EPS));
        assert!(!t.forward().abs_diff_eq(Quat::from_rotation_y(30f32.to_radians()) * Vec3::Z, EPS));
    }

    #[test]
    fn zero_axis_is_ignored() {
        let mut t = Transform::IDENTITY;
        t.rotate_by(45.0, Vec3::ZERO);
        assert_eq!(t.rotation, Quat::IDENTITY);
    }

    #[test]
    fn matrix_applies_translation() {
        let t = Transform { translation: Vec3::new(1.0, 2.0, 3.0), ..Transform::IDENTITY };
        assert!(t.matrix().transform_point3(Vec3::ZERO).abs_diff_eq(Vec3::new(1.0, 2.0, 3.0), EPS));
    }
}
