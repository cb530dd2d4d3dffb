//=========================================================================
// Game Scene
//=========================================================================
//
// The pitch: a stadium, a player that runs where the direction keys point
// and a ball attached in front of the player's feet, spinning as it goes.
//
// Per tick (game mode only):
//   update       → spin ball → idle (pause body) | run (steer toward keys)
//   handle_input → start_moving = any direction key held
//
// `update` runs first, so it acts on the flag from the previous tick.
//
//=========================================================================

mod movement;

pub use movement::movement_offset;

use glam::Vec3;
use log::info;

use crate::core::{GameContext, Scene};
use crate::world::{DirectionalLight, EntityId, World};

//=== Tuning ==============================================================

pub const MAX_SPEED: f32 = 2.0;
pub const TURN_SPEED: f32 = 5.0;
/// Degrees per tick about the ball's own right axis.
pub const BALL_SPIN_DEGREES: f32 = 5.0;

const IDLE_CLIP: &str = "idle";
const RUNNING_CLIP: &str = "running";
const USD: &str = "usdc";

//=== GameScene ===========================================================

pub struct GameScene {
    stadium: EntityId,
    player: EntityId,
    ball: EntityId,
    sun: EntityId,
    start_moving: bool,
}

impl GameScene {
    /// Builds the pitch in `world`.
    pub fn new(world: &mut World) -> Self {
        world
            .camera_mut()
            .look_at(Vec3::new(0.0, 7.0, 15.0), Vec3::ZERO, Vec3::Y);

        let stadium = world.create_entity();
        world.set_entity_mesh(stadium, "stadium", USD, false);

        let player = world.create_entity();
        world.set_entity_mesh(player, "redshirtplayer", USD, false);
        world.set_entity_animations(player, "runninganim", USD, RUNNING_CLIP);
        world.set_entity_animations(player, "idleanim", USD, IDLE_CLIP);
        world.change_animation(player, IDLE_CLIP);
        world.set_entity_kinetics(player);

        let ball = world.create_entity();
        world.set_entity_mesh(ball, "ball", USD, false);
        world.translate_by(ball, Vec3::new(0.0, 0.6, 1.0));
        world.set_parent(ball, player);

        let sun = world.create_entity();
        world.add_directional_light(sun, DirectionalLight::default());

        info!("Pitch ready: stadium {}, player {}, ball {}, sun {}", stadium, player, ball, sun);

        Self {
            stadium,
            player,
            ball,
            sun,
            start_moving: false,
        }
    }

    pub fn stadium(&self) -> EntityId {
        self.stadium
    }

    pub fn player(&self) -> EntityId {
        self.player
    }

    pub fn ball(&self) -> EntityId {
        self.ball
    }

    pub fn sun(&self) -> EntityId {
        self.sun
    }

    pub fn start_moving(&self) -> bool {
        self.start_moving
    }
}

impl Scene for GameScene {
    fn update(&mut self, world: &mut World, context: &GameContext, delta_time: f32) {
        if !context.game_mode {
            return;
        }

        let spin_axis = world.get_right_axis_vector(self.ball);
        world.rotate_by(self.ball, BALL_SPIN_DEGREES, spin_axis);

        if !self.start_moving {
            world.change_animation(self.player, IDLE_CLIP);
            world.pause_physics_component(self.player, true);
            return;
        }

        world.change_animation(self.player, RUNNING_CLIP);
        world.pause_physics_component(self.player, false);

        let target = world.get_position(self.player) + movement_offset(context.keys);
        world.steer_to(self.player, target, MAX_SPEED, delta_time, TURN_SPEED);
    }

    fn handle_input(&mut self, context: &GameContext) {
        if !context.game_mode {
            return;
        }
        self.start_moving = context.keys.any();
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
