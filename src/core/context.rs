//=========================================================================
// Game Context
//=========================================================================
//
// Data handed to both scene callbacks each tick. The game-mode flag lives
// here instead of in a global, so scenes only see it through the context.
//
//=========================================================================

use crate::core::input::{KeyState, StateTracker};

/// Per-tick state shared with scenes.
pub struct GameContext {
    /// Scene callbacks do nothing while this is `false`.
    pub game_mode: bool,

    /// Directional flags resolved from the held keys this tick.
    pub keys: KeyState,

    /// Raw key state for anything beyond the four directions.
    pub input_state: StateTracker,

    /// Number of completed ticks.
    pub tick: u64,
}

impl GameContext {
    pub fn new(game_mode: bool) -> Self {
        Self {
            game_mode,
            keys: KeyState::IDLE,
            input_state: StateTracker::new(),
            tick: 0,
        }
    }

    /// Context with `keys` held and game mode on; meant for driving scenes
    /// outside the engine loop.
    pub fn with_keys(keys: KeyState) -> Self {
        Self {
            keys,
            ..Self::new(true)
        }
    }
}

impl Default for GameContext {
    fn default() -> Self {
        Self::new(true)
    }
}
