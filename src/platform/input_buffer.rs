//=========================================================================
// Input Buffer
//
// Per-frame key event store on the platform thread. Drained on every
// RedrawRequested and sent to the core thread as one
// `PlatformEvent::Inputs`.
//
// Events keep arrival order; a repeat of the previous event (OS key
// repeat) is dropped.
//
//=========================================================================

use crate::core::input::InputEvent;

//=== InputBuffer =========================================================

pub(crate) struct InputBuffer {
    events: Vec<InputEvent>,
}

impl InputBuffer {
    pub(crate) fn new() -> Self {
        const BASE_CAPACITY: usize = 64;

        Self {
            events: Vec::with_capacity(BASE_CAPACITY),
        }
    }

    pub(crate) fn push(&mut self, event: InputEvent) {
        if self.events.last() != Some(&event) {
            self.events.push(event);
        }
    }

    //--- Drain ------------------------------------------------------------
    //
    // Returns None when nothing was buffered so empty frames are not sent.
    //
    pub(crate) fn drain(&mut self) -> Option<Vec<InputEvent>> {
        if self.events.is_empty() {
            return None;
        }
        Some(std::mem::take(&mut self.events))
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::input::KeyCode;

    #[test]
    fn repeated_key_down_is_collapsed() {
        let mut buffer = InputBuffer::new();
        buffer.push(InputEvent::KeyDown(KeyCode::KeyW));
        buffer.push(InputEvent::KeyDown(KeyCode::KeyW));
        buffer.push(InputEvent::KeyDown(KeyCode::KeyD));
        assert_eq!(buffer.events.len(), 2);
    }

    #[test]
    fn press_release_press_is_kept() {
        let mut buffer = InputBuffer::new();
        for event in [
            InputEvent::KeyDown(KeyCode::KeyA),
            InputEvent::KeyUp(KeyCode::KeyA),
            InputEvent::KeyDown(KeyCode::KeyA),
        ] {
            buffer.push(event);
        }
        assert_eq!(buffer.drain().map(|events| events.len()), Some(3));
    }

    #[test]
    fn drain_empties_buffer() {
        let mut buffer = InputBuffer::new();
        buffer.push(InputEvent::KeyDown(KeyCode::KeyA));
        buffer.push(InputEvent::FocusLost);

        let events = buffer.drain().unwrap();
        assert_eq!(events, [InputEvent::KeyDown(KeyCode::KeyA), InputEvent::FocusLost]);
        assert!(buffer.drain().is_none());
    }

    #[test]
    fn empty_buffer_drains_to_none() {
        let mut buffer = InputBuffer::new();
        assert!(buffer.drain().is_none());
    }
}
