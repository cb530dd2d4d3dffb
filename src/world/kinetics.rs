//=========================================================================
// Kinetics
//=========================================================================
//
// Velocity-only body used by the steering call. Bodies integrate during
// `World::step` unless paused; a paused body keeps its velocity but does
// not move and ignores steering.
//
//=========================================================================

use glam::{Quat, Vec3};

/// Targets closer than this are treated as reached.
const ARRIVAL_EPSILON: f32 = 1e-4;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Kinetics {
    pub velocity: Vec3,
    pub paused: bool,
}

impl Default for Kinetics {
    fn default() -> Self {
        Self {
            velocity: Vec3::ZERO,
            paused: false,
        }
    }
}

/// Velocity that heads from `position` straight at `target` at `max_speed`.
///
/// Returns zero once the target is reached.
pub fn seek(position: Vec3, target: Vec3, max_speed: f32) -> Vec3 {
    let offset = target - position;
    if offset.length_squared() <= ARRIVAL_EPSILON * ARRIVAL_EPSILON {
        return Vec3::ZERO;
    }
    offset.normalize() * max_speed.max(0.0)
}

/// Turns `rotation` toward facing `heading` on the ground plane.
///
/// `blend` is the fraction of the remaining turn applied, clamped to [0, 1].
/// Headings without a horizontal component leave the rotation unchanged.
pub fn face_heading(rotation: Quat, heading: Vec3, blend: f32) -> Quat {
    let flat = Vec3::new(heading.x, 0.0, heading.z);
    if flat.length_squared() <= ARRIVAL_EPSILON * ARRIVAL_EPSILON {
        return rotation;
    }
    let yaw = flat.x.atan2(flat.z);
    let goal = Quat::from_rotation_y(yaw);
    rotation.slerp(goal, blend.clamp(0.0, 1.0)).normalize()
}
