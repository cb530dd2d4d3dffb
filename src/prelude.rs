//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types and traits.
//
// Usage:
//   use pitch_demo::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Engine
pub use crate::config::EngineConfig;
pub use crate::engine::{Engine, EngineBuilder, EngineError};

// Scene contract
pub use crate::core::{GameContext, Scene};

// Input
pub use crate::core::input::{KeyCode, KeyState};

// World
pub use crate::world::{DirectionalLight, EntityId, World};

// Math
pub use glam::{Quat, Vec3};
