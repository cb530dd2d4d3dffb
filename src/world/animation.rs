//=========================================================================
// Animation Clips
//=========================================================================
//
// Named clips per entity and the one currently selected. Only the
// selection and its playback clock live here; no pose is evaluated.
//
//=========================================================================

use std::collections::HashMap;

use super::asset::AssetRef;

#[derive(Debug, Clone, Default)]
pub struct AnimationSet {
    clips: HashMap<String, AssetRef>,
    current: Option<String>,
    time: f32,
}

/// Outcome of selecting a clip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClipChange {
    Switched,
    AlreadyPlaying,
    Unknown,
}

impl AnimationSet {
    /// Registers (or replaces) a clip under `name`.
    pub fn insert(&mut self, name: &str, asset: AssetRef) -> Option<AssetRef> {
        self.clips.insert(name.to_owned(), asset)
    }

    /// Selects `name`. Playback restarts only when the clip actually changes.
    pub fn select(&mut self, name: &str) -> ClipChange {
        if !self.clips.contains_key(name) {
            return ClipChange::Unknown;
        }
        if self.current.as_deref() == Some(name) {
            return ClipChange::AlreadyPlaying;
        }
        self.current = Some(name.to_owned());
        self.time = 0.0;
        ClipChange::Switched
    }

    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// Number of registered clips.
    pub(crate) fn len(&self) -> usize {
        self.clips.len()
    }

    /// Seconds since the current clip was selected.
    pub fn time(&self) -> f32 {
        self.time
    }

    pub fn advance(&mut self, dt: f32) {
        if self.current.is_some() {
            self.time += dt;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set_with_two_clips() -> AnimationSet {
        let mut set = AnimationSet::default();
        set.insert("running", AssetRef::new("runninganim", "usdc"));
        set.insert("idle", AssetRef::new("idleanim", "usdc"));
        set
    }

    #[test]
    fn select_switches_and_resets_clock() {
        let mut set = set_with_two_clips();
        assert_eq!(set.select("idle"), ClipChange::Switched);
        set.advance(0.5);
        assert_eq!(set.time(), 0.5);

        assert_eq!(set.select("running"), ClipChange::Switched);
        assert_eq!(set.current(), Some("running"));
        assert_eq!(set.time(), 0.0);
    }

    #[test]
    fn reselecting_keeps_playback() {
        let mut set = set_with_two_clips();
        set.select("running");
        set.advance(1.0);

        assert_eq!(set.select("running"), ClipChange::AlreadyPlaying);
        assert_eq!(set.time(), 1.0);
    }

    #[test]
    fn unknown_clip_leaves_selection() {
        let mut set = set_with_two_clips();
        set.select("idle");
        assert_eq!(set.select("jumping"), ClipChange::Unknown);
        assert_eq!(set.current(), Some("idle"));
    }

    #[test]
    fn inserting_same_name_replaces_clip() {
        let mut set = set_with_two_clips();
        let previous = set.insert("idle", AssetRef::new("breathing", "usdc"));

        assert_eq!(previous, Some(AssetRef::new("idleanim", "usdc")));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn clock_idle_without_selection() {
        let mut set = set_with_two_clips();
        set.advance(2.0);
        assert_eq!(set.time(), 0.0);
        assert_eq!(set.len(), 2);
    }
}
