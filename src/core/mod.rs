//=========================================================================
// Core Systems Orchestrator
//
// Central coordinator for everything running on the logic (non-platform)
// thread.
//
// Responsibilities:
// - Own the World, the input system and the GameContext
// - Wait for the platform to report a working renderer, then build the scene
// - Drive the scene callbacks at a fixed tick rate (TPS)
// - Publish a FrameSnapshot to the platform after every tick
//
// Notes:
// The orchestrator runs independently from the platform layer.
// Communication occurs only through crossbeam channels, so the scene and
// the world never leave this thread.
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::thread;
use std::time::{Duration, Instant};

//=== External Crates =====================================================

use crossbeam_channel::{Receiver, Sender, TrySendError};
use log::{debug, info, trace};

//=== Internal Modules ====================================================

pub mod context;
pub mod input;
pub(crate) mod platform_bridge;
pub mod scene;

pub use context::GameContext;
pub use platform_bridge::PlatformError;
pub use scene::Scene;

use crate::config::EngineConfig;
use crate::world::{FrameSnapshot, World};
use input::{InputEvent, InputSystem, KeyBindings};
use platform_bridge::{EventCollector, PlatformEvent, TickControl};

//=== CoreSystemsOrchestrator =============================================
//
// Owns the simulation state until it is moved into the logic thread.
//
pub(crate) struct CoreSystemsOrchestrator {
    world: World,
    context: GameContext,
    input: InputSystem,
}

impl CoreSystemsOrchestrator {
    //--- Construction -----------------------------------------------------

    pub(crate) fn new(config: &EngineConfig) -> Self {
        Self {
            world: World::new(config.assets_dir.clone()),
            context: GameContext::new(config.start_in_game_mode),
            input: InputSystem::new(KeyBindings::from_config(&config.input)),
        }
    }

    //--- run_tick() -------------------------------------------------------
    //
    // One fixed step:
    //  1. Fold input batches into the tracker and resolve KeyState
    //  2. Apply the game-mode toggle
    //  3. scene.update, then scene.handle_input
    //  4. Step the world and capture a snapshot
    //
    pub(crate) fn run_tick<S: Scene>(
        &mut self,
        scene: &mut S,
        batches: &[Vec<InputEvent>],
        delta_time: f32,
    ) -> FrameSnapshot {
        let frame = self.input.process_frame(&mut self.context.input_state, batches);
        self.context.keys = frame.keys;

        if frame.toggle_game_mode {
            self.context.game_mode = !self.context.game_mode;
            info!(
                "Game mode {}",
                if self.context.game_mode { "resumed" } else { "paused" }
            );
        }

        self.context.tick = self.world.tick();

        scene.update(&mut self.world, &self.context, delta_time);
        scene.handle_input(&self.context);

        self.world.step(delta_time);
        self.world.snapshot()
    }

    //--- spawn_core_thread() ---------------------------------------------
    //
    // Spawns the logic thread.
    //
    // The scene factory runs on the logic thread once the platform sends
    // RendererReady. If the window closes first, the thread exits without
    // ever calling it.
    //
    pub(crate) fn spawn_core_thread<S, F>(
        self,
        receiver: Receiver<PlatformEvent>,
        snapshots: Sender<FrameSnapshot>,
        tps: f64,
        factory: F,
    ) -> thread::JoinHandle<()>
    where
        S: Scene,
        F: FnOnce(&mut World) -> S + Send + 'static,
    {
        let frame_duration = Duration::from_secs_f64(1.0 / tps);
        let delta_time = frame_duration.as_secs_f32();

        thread::spawn(move || {
            let mut orchestrator = self;
            let mut collector = EventCollector::new(receiver);

            //--- Startup: wait for the renderer ---------------------------
            if collector.wait_for_renderer() == TickControl::Exit {
                info!("Core thread exiting before the scene was created");
                return;
            }

            let mut scene = factory(&mut orchestrator.world);
            scene.on_enter(&mut orchestrator.world, &orchestrator.context);
            info!(
                "Scene ready ({} entities), ticking at {} TPS",
                orchestrator.world.entity_count(),
                tps
            );

            loop {
                let frame_start = Instant::now();

                //--- Step 1: Gather platform events ------------------------
                if collector.collect_frame() == TickControl::Exit {
                    info!("Core thread exiting.");
                    break;
                }

                //--- Step 2: Simulate -------------------------------------
                let snapshot = orchestrator.run_tick(&mut scene, collector.batches(), delta_time);

                //--- Step 3: Publish --------------------------------------
                match snapshots.try_send(snapshot) {
                    Ok(()) => {}
                    Err(TrySendError::Full(snapshot)) => {
                        trace!("Platform behind, dropped snapshot for tick {}", snapshot.tick);
                    }
                    Err(TrySendError::Disconnected(_)) => {
                        debug!("Snapshot receiver gone");
                        break;
                    }
                }

                //--- Step 4: Maintain deterministic pacing ----------------
                let elapsed = frame_start.elapsed();
                if elapsed < frame_duration {
                    thread::sleep(frame_duration - elapsed);
                }
            }
        })
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
