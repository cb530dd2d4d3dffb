//=========================================================================
// Pitch Demo: Library Root
//
// A stadium scene driven by a small winit/wgpu engine runtime.
//
// Responsibilities:
// - Expose the engine facade (`EngineBuilder`, `Engine`)
// - Expose the scene contract (`Scene`, `GameContext`) and the `World`
//   scenes call into
// - Keep the platform layer (window, event loop) private
//
// Typical usage:
// ```no_run
// use pitch_demo::prelude::*;
// use pitch_demo::game::GameScene;
//
// fn main() -> Result<(), EngineError> {
//     EngineBuilder::new().build().run(GameScene::new)
// }
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------
//
// `core` holds the logic-thread systems: input, the scene trait and the
// tick loop. `world` is the entity/component store scenes drive.
// `game` is the pitch scene itself.
//
pub mod config;
pub mod core;
pub mod game;
pub mod logger;
pub mod prelude;
pub mod render;
pub mod world;

//--- Internal Modules ----------------------------------------------------
//
// `platform` owns the winit event loop and is not part of the public API.
//
mod engine;
mod platform;

//--- Public Exports ------------------------------------------------------

pub use config::{ConfigError, EngineConfig, InputConfig, WindowConfig};
pub use engine::{Engine, EngineBuilder, EngineError};

pub use glam;
