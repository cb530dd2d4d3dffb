//=========================================================================
// Movement Offset
//=========================================================================

use glam::Vec3;

use crate::core::input::KeyState;

/// Unit steps on the ground plane for each held direction.
///
/// Forward is +Z, right is +X. Opposite keys cancel; `y` is always zero.
pub fn movement_offset(keys: KeyState) -> Vec3 {
    let mut offset = Vec3::ZERO;
    if keys.forward {
        offset.z += 1.0;
    }
    if keys.backward {
        offset.z -= 1.0;
    }
    if keys.left {
        offset.x -= 1.0;
    }
    if keys.right {
        offset.x += 1.0;
    }
    offset
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_key_combination() {
        for bits in 0u8..16 {
            let keys = KeyState {
                forward: bits & 1 != 0,
                backward: bits & 2 != 0,
                left: bits & 4 != 0,
                right: bits & 8 != 0,
            };

            let expected_z = keys.forward as i32 - keys.backward as i32;
            let expected_x = keys.right as i32 - keys.left as i32;

            let offset = movement_offset(keys);
            assert_eq!(
                offset,
                Vec3::new(expected_x as f32, 0.0, expected_z as f32),
                "keys {:?}",
                keys
            );
        }
    }

    #[test]
    fn idle_is_zero() {
        assert_eq!(movement_offset(KeyState::IDLE), Vec3::ZERO);
    }

    #[test]
    fn diagonal_is_not_normalized() {
        let keys = KeyState { forward: true, right: true, ..KeyState::IDLE };
        assert_eq!(movement_offset(keys), Vec3::new(1.0, 0.0, 1.0));
    }
}
