//=========================================================================
// Input System
//=========================================================================
//
// Turns the platform's per-frame input batches into the state scenes poll.
//
// Architecture:
// ```text
//   Vec<Vec<InputEvent>> ──► StateTracker ──► KeyBindings ──► KeyState
//                                   │
//                                   └──► toggle key (edge) ──► game mode
// ```
//
// Owned by the core thread; updated once per tick before any scene
// callback runs.
//
//=========================================================================

//=== Module Declarations =================================================

pub mod bindings;
pub mod event;
pub mod key_state;
pub mod state_tracker;

//=== Public API ==========================================================

pub use bindings::KeyBindings;
pub use event::{InputEvent, KeyCode};
pub use key_state::{Direction, KeyState};
pub use state_tracker::StateTracker;

//=== External Dependencies ===============================================

use log::debug;

//=== InputSystem =========================================================

/// Per-tick input processing.
pub struct InputSystem {
    bindings: KeyBindings,
    last_keys: KeyState,
}

/// What one tick of input produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputFrame {
    pub keys: KeyState,
    pub toggle_game_mode: bool,
}

impl InputSystem {
    pub fn new(bindings: KeyBindings) -> Self {
        Self {
            bindings,
            last_keys: KeyState::IDLE,
        }
    }

    /// Applies this tick's batches to `tracker` and resolves the result.
    pub fn process_frame(
        &mut self,
        tracker: &mut StateTracker,
        batches: &[Vec<InputEvent>],
    ) -> InputFrame {
        tracker.clear();
        for batch in batches {
            tracker.process_events(batch);
        }

        let keys = self.bindings.resolve(tracker);
        if keys != self.last_keys {
            debug!("Key state changed: {:?}", keys);
            self.last_keys = keys;
        }

        InputFrame {
            keys,
            toggle_game_mode: self.bindings.toggle_requested(tracker),
        }
    }
}

impl Default for InputSystem {
    fn default() -> Self {
        Self::new(KeyBindings::default())
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::input::InputEvent::{FocusLost, KeyDown, KeyUp};

    #[test]
    fn batches_are_applied_in_order() {
        let mut system = InputSystem::default();
        let mut tracker = StateTracker::new();

        let frame = system.process_frame(
            &mut tracker,
            &[vec![KeyDown(KeyCode::KeyD)], vec![KeyUp(KeyCode::KeyD), KeyDown(KeyCode::KeyS)]],
        );

        assert_eq!(
            frame.keys,
            KeyState { forward: false, backward: true, left: false, right: false }
        );
        assert!(!frame.toggle_game_mode);
    }

    #[test]
    fn held_keys_survive_empty_ticks() {
        let mut system = InputSystem::default();
        let mut tracker = StateTracker::new();

        system.process_frame(&mut tracker, &[vec![KeyDown(KeyCode::KeyW)]]);
        let frame = system.process_frame(&mut tracker, &[]);

        assert!(frame.keys.forward);
    }

    #[test]
    fn focus_loss_stops_held_movement() {
        let mut system = InputSystem::default();
        let mut tracker = StateTracker::new();

        let held = system.process_frame(&mut tracker, &[vec![KeyDown(KeyCode::KeyW)]]);
        assert!(held.keys.forward);

        // The release of W happens in another window and is never reported
        let unfocused = system.process_frame(&mut tracker, &[vec![FocusLost]]);
        assert_eq!(unfocused.keys, KeyState::IDLE);

        let refocused = system.process_frame(&mut tracker, &[]);
        assert!(!refocused.keys.any());
    }

    #[test]
    fn toggle_reported_once() {
        let mut system = InputSystem::default();
        let mut tracker = StateTracker::new();

        let first = system.process_frame(&mut tracker, &[vec![KeyDown(KeyCode::KeyP)]]);
        let second = system.process_frame(&mut tracker, &[]);

        assert!(first.toggle_game_mode);
        assert!(!second.toggle_game_mode);
    }
}
