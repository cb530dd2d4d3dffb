//=========================================================================
// Input Events
//=========================================================================
//
// Engine-side representation of keyboard input.
//
// The platform layer translates winit events into these types before they
// cross the thread boundary, so nothing past `platform` depends on winit.
//
// Flow:
// ```text
//   winit KeyEvent ──► input_processor ──► InputEvent ──► StateTracker
//                                                          │
//                                                  KeyBindings ──► KeyState
// ```
//
//=========================================================================

//=== External Dependencies ===============================================

use serde::Deserialize;

//=== KeyCode =============================================================

/// Physical keyboard key, independent of layout.
///
/// Variant names double as the spelling used in configuration files
/// (`forward = ["KeyW", "ArrowUp"]`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum KeyCode {
    Digit0, Digit1, Digit2, Digit3, Digit4,
    Digit5, Digit6, Digit7, Digit8, Digit9,

    KeyA, KeyB, KeyC, KeyD, KeyE, KeyF, KeyG, KeyH, KeyI,
    KeyJ, KeyK, KeyL, KeyM, KeyN, KeyO, KeyP, KeyQ, KeyR,
    KeyS, KeyT, KeyU, KeyV, KeyW, KeyX, KeyY, KeyZ,

    ArrowDown,
    ArrowLeft,
    ArrowRight,
    ArrowUp,

    Space,
    Enter,
    Escape,
    Tab,
    Backspace,
    Delete,
}

//=== InputEvent ==========================================================

/// A single normalized input event, in arrival order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    KeyDown(KeyCode),
    KeyUp(KeyCode),

    /// The window lost keyboard focus. Releases arriving while unfocused are
    /// not delivered on every platform, so every held key counts as released.
    FocusLost,
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_events_compare_by_kind_and_key() {
        assert_eq!(InputEvent::KeyDown(KeyCode::KeyW), InputEvent::KeyDown(KeyCode::KeyW));
        assert_ne!(InputEvent::KeyDown(KeyCode::KeyW), InputEvent::KeyDown(KeyCode::KeyS));
        assert_ne!(InputEvent::KeyDown(KeyCode::KeyW), InputEvent::KeyUp(KeyCode::KeyW));
    }

    #[test]
    fn key_code_deserializes_from_variant_name() {
        #[derive(Deserialize)]
        struct Wrapper {
            key: KeyCode,
        }

        let parsed: Wrapper = toml::from_str(r#"key = "ArrowUp""#).unwrap();
        assert_eq!(parsed.key, KeyCode::ArrowUp);
    }
}
