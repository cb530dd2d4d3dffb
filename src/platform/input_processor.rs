//=========================================================================
// Input Processor
//=========================================================================
//
// Translates winit keyboard events into engine `InputEvent`s. Keys outside
// the engine's `KeyCode` set are dropped.
//
//=========================================================================

//=== External Dependencies ===============================================

use winit::{
    event::{ElementState, KeyEvent},
    keyboard::{KeyCode as WinitKeyCode, PhysicalKey},
};

//=== Internal Dependencies ===============================================

use crate::core::input::{InputEvent, KeyCode};

/// `None` for keys the engine does not know about.
pub(crate) fn key_event(event: &KeyEvent) -> Option<InputEvent> {
    match event.physical_key {
        PhysicalKey::Code(code) => map_key_code(code).map(|key| key_transition(key, event.state)),
        PhysicalKey::Unidentified(_) => None,
    }
}

fn key_transition(key: KeyCode, state: ElementState) -> InputEvent {
    match state {
        ElementState::Pressed => InputEvent::KeyDown(key),
        ElementState::Released => InputEvent::KeyUp(key),
    }
}

//=== Winit Conversions ===================================================

fn map_key_code(code: WinitKeyCode) -> Option<KeyCode> {
    use WinitKeyCode as W;
    Some(match code {
        W::Digit0 => KeyCode::Digit0, W::Digit1 => KeyCode::Digit1,
        W::Digit2 => KeyCode::Digit2, W::Digit3 => KeyCode::Digit3,
        W::Digit4 => KeyCode::Digit4, W::Digit5 => KeyCode::Digit5,
        W::Digit6 => KeyCode::Digit6, W::Digit7 => KeyCode::Digit7,
        W::Digit8 => KeyCode::Digit8, W::Digit9 => KeyCode::Digit9,

        W::KeyA => KeyCode::KeyA, W::KeyB => KeyCode::KeyB, W::KeyC => KeyCode::KeyC,
        W::KeyD => KeyCode::KeyD, W::KeyE => KeyCode::KeyE, W::KeyF => KeyCode::KeyF,
        W::KeyG => KeyCode::KeyG, W::KeyH => KeyCode::KeyH, W::KeyI => KeyCode::KeyI,
        W::KeyJ => KeyCode::KeyJ, W::KeyK => KeyCode::KeyK, W::KeyL => KeyCode::KeyL,
        W::KeyM => KeyCode::KeyM, W::KeyN => KeyCode::KeyN, W::KeyO => KeyCode::KeyO,
        W::KeyP => KeyCode::KeyP, W::KeyQ => KeyCode::KeyQ, W::KeyR => KeyCode::KeyR,
        W::KeyS => KeyCode::KeyS, W::KeyT => KeyCode::KeyT, W::KeyU => KeyCode::KeyU,
        W::KeyV => KeyCode::KeyV, W::KeyW => KeyCode::KeyW, W::KeyX => KeyCode::KeyX,
        W::KeyY => KeyCode::KeyY, W::KeyZ => KeyCode::KeyZ,

        W::ArrowUp => KeyCode::ArrowUp, W::ArrowDown => KeyCode::ArrowDown,
        W::ArrowLeft => KeyCode::ArrowLeft, W::ArrowRight => KeyCode::ArrowRight,

        W::Space => KeyCode::Space, W::Enter => KeyCode::Enter,
        W::Escape => KeyCode::Escape, W::Tab => KeyCode::Tab,
        W::Backspace => KeyCode::Backspace, W::Delete => KeyCode::Delete,

        _ => return None,
    })
}

//=========================================================================
// Tests
//=========================================================================
