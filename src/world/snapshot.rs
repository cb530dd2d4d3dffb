//=========================================================================
// Frame Snapshot
//=========================================================================
//
// Immutable per-tick copy of what the renderer draws. Built on the core
// thread and sent to the platform thread, so it owns all of its data.
//
//=========================================================================

use glam::Mat4;

use super::asset::AssetRef;
use super::camera::Camera;
use super::entity::EntityId;
use super::light::DirectionalLight;

#[derive(Debug, Clone, PartialEq)]
pub struct DrawItem {
    pub entity: EntityId,
    pub mesh: AssetRef,
    pub world: Mat4,
    pub animation: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FrameSnapshot {
    pub tick: u64,
    pub camera: Camera,
    pub sun: Option<DirectionalLight>,
    pub items: Vec<DrawItem>,
}

impl FrameSnapshot {
    /// A frame with nothing but the default camera.
    pub fn empty() -> Self {
        Self {
            tick: 0,
            camera: Camera::default(),
            sun: None,
            items: Vec::new(),
        }
    }
}
