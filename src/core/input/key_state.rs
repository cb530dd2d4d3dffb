//=========================================================================
// Key State
//=========================================================================
//
// The four directional flags scenes poll each tick.
//
//=========================================================================

/// Directional keys currently held, after binding resolution.
///
/// Flags are independent: opposite directions can both be set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeyState {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
}

impl KeyState {
    /// No directional key held.
    pub const IDLE: Self = Self {
        forward: false,
        backward: false,
        left: false,
        right: false,
    };

    /// Returns `true` if any of the four flags is set.
    pub fn any(&self) -> bool {
        self.forward || self.backward || self.left || self.right
    }

    /// Sets the flag for `direction`.
    pub fn press(&mut self, direction: Direction) {
        match direction {
            Direction::Forward => self.forward = true,
            Direction::Backward => self.backward = true,
            Direction::Left => self.left = true,
            Direction::Right => self.right = true,
        }
    }
}

/// One of the four movement directions a key can be bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Forward,
    Backward,
    Left,
    Right,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_has_no_flags() {
        assert!(!KeyState::IDLE.any());
        assert_eq!(KeyState::default(), KeyState::IDLE);
    }

    #[test]
    fn any_flag_counts() {
        for direction in [Direction::Forward, Direction::Backward, Direction::Left, Direction::Right] {
            let mut keys = KeyState::IDLE;
            keys.press(direction);
            assert!(keys.any(), "{:?} should count as movement", direction);
        }
    }
}
