//=========================================================================
// Scene Trait
//=========================================================================
//
// The two callbacks the engine drives every tick, plus an optional hook
// that runs once right after the scene is constructed.
//
// Tick order:
//   update(world, context, dt) → handle_input(context) → World::step(dt)
//
// `update` therefore sees whatever `handle_input` decided on the previous
// tick.
//
//=========================================================================

use crate::core::GameContext;
use crate::world::World;

/// Game logic driven by the engine.
///
/// # Minimal Implementation
///
/// ```rust
/// use pitch_demo::prelude::*;
///
/// struct Spinner {
///     cube: EntityId,
/// }
///
/// impl Scene for Spinner {
///     fn update(&mut self, world: &mut World, context: &GameContext, _delta_time: f32) {
///         if context.game_mode {
///             world.rotate_by(self.cube, 1.0, Vec3::Y);
///         }
///     }
///
///     fn handle_input(&mut self, _context: &GameContext) {}
/// }
/// ```
pub trait Scene {
    /// Called once after construction, before the first tick.
    fn on_enter(&mut self, _world: &mut World, _context: &GameContext) {}

    /// Called once per tick.
    fn update(&mut self, world: &mut World, context: &GameContext, delta_time: f32);

    /// Called once per tick, after [`Scene::update`].
    fn handle_input(&mut self, context: &GameContext);
}
