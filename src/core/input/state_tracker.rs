//=========================================================================
// State Tracker
//=========================================================================
//
// Held keys plus the transitions seen during the current tick.
//
// Tick lifecycle: clear() → process_events() → query
//
//=========================================================================

use std::collections::HashSet;

use super::event::{InputEvent, KeyCode};

/// Which keys are held, and which went down or up this tick.
#[derive(Debug, Default)]
pub struct StateTracker {
    held: HashSet<KeyCode>,

    // reset by clear()
    went_down: HashSet<KeyCode>,
    went_up: HashSet<KeyCode>,
}

impl StateTracker {
    pub fn new() -> Self {
        Self::default()
    }

    //--- Tick Processing --------------------------------------------------

    pub(crate) fn clear(&mut self) {
        self.went_down.clear();
        self.went_up.clear();
    }

    pub(crate) fn process_events(&mut self, events: &[InputEvent]) {
        for event in events {
            match *event {
                // OS key repeat sends KeyDown while held; only the first counts
                InputEvent::KeyDown(key) => {
                    if self.held.insert(key) {
                        self.went_down.insert(key);
                    }
                }
                InputEvent::KeyUp(key) => self.release(key),
                InputEvent::FocusLost => self.release_all(),
            }
        }
    }

    fn release(&mut self, key: KeyCode) {
        if self.held.remove(&key) {
            self.went_up.insert(key);
        }
    }

    fn release_all(&mut self) {
        self.went_up.extend(self.held.drain());
    }

    //--- Queries ----------------------------------------------------------

    /// `true` only on the tick the key went down.
    pub fn is_key_pressed(&self, key: KeyCode) -> bool {
        self.went_down.contains(&key)
    }

    /// `true` while the key is held.
    pub fn is_key_down(&self, key: KeyCode) -> bool {
        self.held.contains(&key)
    }

    /// `true` only on the tick the key went up.
    pub fn is_key_released(&self, key: KeyCode) -> bool {
        self.went_up.contains(&key)
    }

    pub fn keys_down(&self) -> impl Iterator<Item = &KeyCode> {
        self.held.iter()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::input::InputEvent::{FocusLost, KeyDown, KeyUp};

    fn tick(tracker: &mut StateTracker, events: &[InputEvent]) {
        tracker.clear();
        tracker.process_events(events);
    }

    #[test]
    fn pressed_only_on_transition_tick() {
        let mut tracker = StateTracker::new();

        tick(&mut tracker, &[KeyDown(KeyCode::KeyW)]);
        assert!(tracker.is_key_pressed(KeyCode::KeyW));
        assert!(tracker.is_key_down(KeyCode::KeyW));

        tick(&mut tracker, &[]);
        assert!(!tracker.is_key_pressed(KeyCode::KeyW));
        assert!(tracker.is_key_down(KeyCode::KeyW));

        tick(&mut tracker, &[KeyUp(KeyCode::KeyW)]);
        assert!(!tracker.is_key_down(KeyCode::KeyW));
        assert!(tracker.is_key_released(KeyCode::KeyW));
    }

    #[test]
    fn key_repeat_is_not_a_new_press() {
        let mut tracker = StateTracker::new();

        tick(&mut tracker, &[KeyDown(KeyCode::KeyD)]);
        tick(&mut tracker, &[KeyDown(KeyCode::KeyD)]);

        assert!(!tracker.is_key_pressed(KeyCode::KeyD));
        assert!(tracker.is_key_down(KeyCode::KeyD));
    }

    #[test]
    fn tap_within_one_tick_ends_released() {
        let mut tracker = StateTracker::new();

        tick(&mut tracker, &[KeyDown(KeyCode::KeyS), KeyUp(KeyCode::KeyS)]);

        assert!(tracker.is_key_pressed(KeyCode::KeyS));
        assert!(tracker.is_key_released(KeyCode::KeyS));
        assert!(!tracker.is_key_down(KeyCode::KeyS));
    }

    #[test]
    fn release_without_press_is_ignored() {
        let mut tracker = StateTracker::new();
        tick(&mut tracker, &[KeyUp(KeyCode::KeyZ)]);
        assert!(!tracker.is_key_released(KeyCode::KeyZ));
    }

    #[test]
    fn focus_loss_releases_every_held_key() {
        let mut tracker = StateTracker::new();
        tick(&mut tracker, &[KeyDown(KeyCode::KeyW), KeyDown(KeyCode::ArrowLeft)]);

        tick(&mut tracker, &[FocusLost]);

        assert_eq!(tracker.keys_down().count(), 0);
        assert!(tracker.is_key_released(KeyCode::KeyW));
        assert!(tracker.is_key_released(KeyCode::ArrowLeft));
    }

    #[test]
    fn keys_pressed_after_focus_loss_are_held() {
        let mut tracker = StateTracker::new();
        tick(&mut tracker, &[KeyDown(KeyCode::KeyW)]);

        tick(&mut tracker, &[FocusLost, KeyDown(KeyCode::KeyD)]);

        assert!(!tracker.is_key_down(KeyCode::KeyW));
        assert!(tracker.is_key_down(KeyCode::KeyD));
        assert!(tracker.is_key_pressed(KeyCode::KeyD));
    }
}
