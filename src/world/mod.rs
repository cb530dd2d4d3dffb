//=========================================================================
// World
//=========================================================================
//
// Entity registry and the component stores behind the calls scenes make.
//
// Architecture:
// ```text
//   World
//     ├─ entities:   EntityManager
//     ├─ transforms: HashMap<EntityId, Transform>     (every entity)
//     ├─ parents:    HashMap<EntityId, EntityId>
//     ├─ meshes:     HashMap<EntityId, MeshBinding>
//     ├─ animations: HashMap<EntityId, AnimationSet>
//     ├─ kinetics:   HashMap<EntityId, Kinetics>
//     ├─ lights:     Vec<(EntityId, DirectionalLight)>
//     └─ camera:     Camera
// ```
//
// Every call is infallible from the caller's point of view: operations on
// unknown entities or missing components log a warning and do nothing.
//
//=========================================================================

//=== Module Declarations =================================================

pub mod animation;
pub mod asset;
pub mod camera;
pub mod entity;
pub mod kinetics;
pub mod light;
pub mod snapshot;
pub mod transform;

//=== Public API ==========================================================

pub use animation::{AnimationSet, ClipChange};
pub use asset::{AssetRef, MeshBinding};
pub use camera::Camera;
pub use entity::EntityId;
pub use kinetics::Kinetics;
pub use light::DirectionalLight;
pub use snapshot::{DrawItem, FrameSnapshot};
pub use transform::Transform;

//=== External Dependencies ===============================================

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use glam::{Mat4, Vec3};
use log::{debug, trace, warn};

//=== Internal Dependencies ===============================================

use entity::EntityManager;

//=== World ===============================================================

pub struct World {
    entities: EntityManager,
    transforms: HashMap<EntityId, Transform>,
    parents: HashMap<EntityId, EntityId>,
    meshes: HashMap<EntityId, MeshBinding>,
    animations: HashMap<EntityId, AnimationSet>,
    kinetics: HashMap<EntityId, Kinetics>,
    lights: Vec<(EntityId, DirectionalLight)>,
    camera: Camera,
    assets_dir: PathBuf,
    tick: u64,
}

impl World {
    pub fn new(assets_dir: impl Into<PathBuf>) -> Self {
        Self {
            entities: EntityManager::new(),
            transforms: HashMap::new(),
            parents: HashMap::new(),
            meshes: HashMap::new(),
            animations: HashMap::new(),
            kinetics: HashMap::new(),
            lights: Vec::new(),
            camera: Camera::default(),
            assets_dir: assets_dir.into(),
            tick: 0,
        }
    }

    //--- Entities ---------------------------------------------------------

    pub fn create_entity(&mut self) -> EntityId {
        let id = self.entities.add();
        self.transforms.insert(id, Transform::IDENTITY);
        debug!("Created entity {}", id);
        id
    }

    pub fn contains(&self, id: EntityId) -> bool {
        self.entities.contains(id)
    }

    pub fn entity_count(&self) -> usize {
        self.entities.count()
    }

    fn check(&self, id: EntityId, op: &str) -> bool {
        if self.entities.contains(id) {
            true
        } else {
            warn!("{}: unknown entity {}", op, id);
            false
        }
    }

    //--- Meshes & Clips ---------------------------------------------------

    pub fn assets_dir(&self) -> &Path {
        &self.assets_dir
    }

    /// Binds a mesh file to `id`, replacing any previous binding.
    pub fn set_entity_mesh(&mut self, id: EntityId, filename: &str, extension: &str, flip: bool) {
        if !self.check(id, "set_entity_mesh") {
            return;
        }
        let asset = AssetRef::new(filename, extension);
        self.warn_if_missing(&asset);
        debug!("Entity {} mesh: {} (flip: {})", id, asset, flip);
        self.meshes.insert(id, MeshBinding { asset, flip });
    }

    pub fn mesh(&self, id: EntityId) -> Option<&MeshBinding> {
        self.meshes.get(&id)
    }

    /// Registers the clip in `filename.extension` under `name`.
    pub fn set_entity_animations(&mut self, id: EntityId, filename: &str, extension: &str, name: &str) {
        if !self.check(id, "set_entity_animations") {
            return;
        }
        let asset = AssetRef::new(filename, extension);
        self.warn_if_missing(&asset);
        debug!("Entity {} clip '{}': {}", id, name, asset);
        if self.animations.entry(id).or_default().insert(name, asset).is_some() {
            warn!("Entity {} clip '{}' was already registered and has been replaced", id, name);
        }
    }

    /// Selects a registered clip; unknown names are ignored.
    pub fn change_animation(&mut self, id: EntityId, name: &str) {
        if !self.check(id, "change_animation") {
            return;
        }
        let Some(set) = self.animations.get_mut(&id) else {
            warn!("change_animation: entity {} has no clips", id);
            return;
        };
        match set.select(name) {
            ClipChange::Switched => debug!("Entity {} animation -> '{}'", id, name),
            ClipChange::AlreadyPlaying => {}
            ClipChange::Unknown => warn!("change_animation: entity {} has no clip '{}'", id, name),
        }
    }

    pub fn current_animation(&self, id: EntityId) -> Option<&str> {
        self.animations.get(&id).and_then(AnimationSet::current)
    }

    pub fn animations(&self, id: EntityId) -> Option<&AnimationSet> {
        self.animations.get(&id)
    }

    fn warn_if_missing(&self, asset: &AssetRef) {
        let path = asset.resolve(&self.assets_dir);
        if !path.exists() {
            warn!("Asset not found: {}", path.display());
        }
    }

    //--- Physics ----------------------------------------------------------

    /// Gives `id` a kinetic body at rest.
    pub fn set_entity_kinetics(&mut self, id: EntityId) {
        if !self.check(id, "set_entity_kinetics") {
            return;
        }
        self.kinetics.entry(id).or_default();
    }

    pub fn pause_physics_component(&mut self, id: EntityId, paused: bool) {
        match self.kinetics.get_mut(&id) {
            Some(body) => {
                if body.paused != paused {
                    trace!("Entity {} physics paused: {}", id, paused);
                    body.paused = paused;
                }
            }
            None => warn!("pause_physics_component: entity {} has no kinetics", id),
        }
    }

    pub fn is_physics_paused(&self, id: EntityId) -> Option<bool> {
        self.kinetics.get(&id).map(|body| body.paused)
    }

    pub fn velocity(&self, id: EntityId) -> Option<Vec3> {
        self.kinetics.get(&id).map(|body| body.velocity)
    }

    /// Seeks `target` at up to `max_speed`, turning at `turn_speed` per second.
    ///
    /// Sets the body's velocity and yaws the entity toward its heading;
    /// the position itself moves in [`World::step`]. Paused bodies are left
    /// alone.
    pub fn steer_to(&mut self, id: EntityId, target: Vec3, max_speed: f32, delta_time: f32, turn_speed: f32) {
        let Some(body) = self.kinetics.get_mut(&id) else {
            warn!("steer_to: entity {} has no kinetics", id);
            return;
        };
        if body.paused {
            return;
        }
        let Some(transform) = self.transforms.get_mut(&id) else {
            return;
        };

        body.velocity = kinetics::seek(transform.translation, target, max_speed);
        transform.rotation =
            kinetics::face_heading(transform.rotation, body.velocity, turn_speed * delta_time);
    }

    //--- Transforms -------------------------------------------------------

    pub fn transform(&self, id: EntityId) -> Option<&Transform> {
        self.transforms.get(&id)
    }

    /// Position relative to the parent (world position for roots).
    pub fn get_position(&self, id: EntityId) -> Vec3 {
        match self.transforms.get(&id) {
            Some(transform) => transform.translation,
            None => {
                warn!("get_position: unknown entity {}", id);
                Vec3::ZERO
            }
        }
    }

    pub fn world_position(&self, id: EntityId) -> Vec3 {
        self.world_matrix(id).transform_point3(Vec3::ZERO)
    }

    pub fn translate_by(&mut self, id: EntityId, offset: Vec3) {
        match self.transforms.get_mut(&id) {
            Some(transform) => transform.translation += offset,
            None => warn!("translate_by: unknown entity {}", id),
        }
    }

    /// Rotates `id` by `degrees` about `axis`, expressed in the parent frame.
    pub fn rotate_by(&mut self, id: EntityId, degrees: f32, axis: Vec3) {
        match self.transforms.get_mut(&id) {
            Some(transform) => transform.rotate_by(degrees, axis),
            None => warn!("rotate_by: unknown entity {}", id),
        }
    }

    pub fn get_right_axis_vector(&self, id: EntityId) -> Vec3 {
        self.transforms.get(&id).map_or(Vec3::X, Transform::right)
    }

    pub fn get_up_axis_vector(&self, id: EntityId) -> Vec3 {
        self.transforms.get(&id).map_or(Vec3::Y, Transform::up)
    }

    pub fn get_forward_axis_vector(&self, id: EntityId) -> Vec3 {
        self.transforms.get(&id).map_or(Vec3::Z, Transform::forward)
    }

    //--- Hierarchy --------------------------------------------------------

    /// Attaches `child` under `parent`, keeping the child's local transform.
    ///
    /// Self-parenting and attachments that would close a cycle are refused.
    pub fn set_parent(&mut self, child: EntityId, parent: EntityId) {
        if !self.check(child, "set_parent") || !self.check(parent, "set_parent") {
            return;
        }
        if child == parent || self.is_ancestor(child, parent) {
            warn!("set_parent: attaching {} under {} would create a cycle", child, parent);
            return;
        }
        debug!("Entity {} parented to {}", child, parent);
        self.parents.insert(child, parent);
    }

    pub fn parent_of(&self, id: EntityId) -> Option<EntityId> {
        self.parents.get(&id).copied()
    }

    /// `true` if `ancestor` appears on the parent chain of `id`.
    fn is_ancestor(&self, ancestor: EntityId, id: EntityId) -> bool {
        let mut current = self.parents.get(&id);
        while let Some(&parent) = current {
            if parent == ancestor {
                return true;
            }
            current = self.parents.get(&parent);
        }
        false
    }

    /// Local transform composed with every ancestor's.
    pub fn world_matrix(&self, id: EntityId) -> Mat4 {
        let mut matrix = self.transforms.get(&id).map_or(Mat4::IDENTITY, Transform::matrix);
        let mut current = self.parents.get(&id);
        while let Some(&parent) = current {
            let local = self.transforms.get(&parent).map_or(Mat4::IDENTITY, Transform::matrix);
            matrix = local * matrix;
            current = self.parents.get(&parent);
        }
        matrix
    }

    //--- Lighting & Camera ------------------------------------------------

    pub fn add_directional_light(&mut self, id: EntityId, light: DirectionalLight) {
        if !self.check(id, "add_directional_light") {
            return;
        }
        debug!("Entity {} directional light {:?}", id, light);
        self.lights.retain(|(owner, _)| *owner != id);
        self.lights.push((id, light));
    }

    pub fn directional_lights(&self) -> impl Iterator<Item = &DirectionalLight> {
        self.lights.iter().map(|(_, light)| light)
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    //--- Simulation -------------------------------------------------------

    /// Moves unpaused bodies by their velocity and advances clip clocks.
    pub fn step(&mut self, delta_time: f32) {
        for (id, body) in &self.kinetics {
            if body.paused || body.velocity == Vec3::ZERO {
                continue;
            }
            if let Some(transform) = self.transforms.get_mut(id) {
                transform.translation += body.velocity * delta_time;
            }
        }

        for set in self.animations.values_mut() {
            set.advance(delta_time);
        }

        self.tick += 1;
    }

    pub fn tick(&self) -> u64 {
        self.tick
    }

    /// Copies out everything the renderer needs for this tick.
    pub fn snapshot(&self) -> FrameSnapshot {
        let items = self
            .entities
            .sorted()
            .into_iter()
            .filter_map(|id| {
                let mesh = self.meshes.get(&id)?;
                Some(DrawItem {
                    entity: id,
                    mesh: mesh.asset.clone(),
                    world: self.world_matrix(id),
                    animation: self.current_animation(id).map(str::to_owned),
                })
            })
            .collect();

        FrameSnapshot {
            tick: self.tick,
            camera: self.camera,
            sun: self.directional_lights().next().copied(),
            items,
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
