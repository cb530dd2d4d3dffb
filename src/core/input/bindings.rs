//=========================================================================
// Key Bindings
//=========================================================================
//
// Resolves physical keys to movement directions.
//
// Architecture:
//   keys held (StateTracker) → HashMap<KeyCode, Direction> → KeyState
//
// Several keys may share a direction (W and ArrowUp both mean forward).
// A key bound twice keeps its last binding.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashMap;

use log::warn;

//=== Internal Dependencies ===============================================

use super::event::KeyCode;
use super::key_state::{Direction, KeyState};
use super::state_tracker::StateTracker;
use crate::config::InputConfig;

//=== KeyBindings =========================================================

/// Key → direction lookup plus the game-mode toggle key.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    directions: HashMap<KeyCode, Direction>,
    toggle_game_mode: Option<KeyCode>,
}

impl KeyBindings {
    /// Creates bindings with nothing bound.
    pub fn empty() -> Self {
        Self {
            directions: HashMap::new(),
            toggle_game_mode: None,
        }
    }

    /// Builds bindings from the `[input]` configuration table.
    pub fn from_config(config: &InputConfig) -> Self {
        let mut bindings = Self::empty();

        let groups = [
            (&config.forward, Direction::Forward),
            (&config.backward, Direction::Backward),
            (&config.left, Direction::Left),
            (&config.right, Direction::Right),
        ];
        for (keys, direction) in groups {
            for &key in keys {
                bindings.bind(key, direction);
            }
        }

        bindings.toggle_game_mode = config.toggle_game_mode;
        bindings
    }

    //--- Binding API ------------------------------------------------------

    pub fn bind(&mut self, key: KeyCode, direction: Direction) {
        if let Some(previous) = self.directions.insert(key, direction) {
            if previous != direction {
                warn!("{:?} rebound from {:?} to {:?}", key, previous, direction);
            }
        }
    }

    pub fn direction_of(&self, key: KeyCode) -> Option<Direction> {
        self.directions.get(&key).copied()
    }

    //--- Resolution -------------------------------------------------------

    /// Folds every held key into the four directional flags.
    pub fn resolve(&self, tracker: &StateTracker) -> KeyState {
        let mut keys = KeyState::IDLE;
        for key in tracker.keys_down() {
            if let Some(direction) = self.direction_of(*key) {
                keys.press(direction);
            }
        }
        keys
    }

    /// `true` on the tick the game-mode toggle key went down.
    pub fn toggle_requested(&self, tracker: &StateTracker) -> bool {
        self.toggle_game_mode
            .is_some_and(|key| tracker.is_key_pressed(key))
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self::from_config(&InputConfig::default())
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
