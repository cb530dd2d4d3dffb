//=========================================================================
// Engine
//
// Main entry point and coordinator.
//
// Architecture:
// ```text
//     EngineBuilder  ──build()──>  Engine  ──run(factory)──>  [Runtime]
//         │                          │
//         ├─ with_config()           └─ spawns the logic thread
//         ├─ with_tps()                 runs the platform
//         ├─ with_channel_capacity()    blocks until exit
//         ├─ with_title()
//         └─ with_window_size()
// ```
//
//=========================================================================

//=== External Dependencies ===============================================

use crossbeam_channel::{bounded, Receiver, Sender};
use log::{error, info};
use thiserror::Error;

//=== Internal Dependencies ===============================================

use crate::config::{is_valid_tps, EngineConfig, TPS_RANGE};
use crate::core::platform_bridge::PlatformEvent;
use crate::core::{CoreSystemsOrchestrator, PlatformError, Scene};
use crate::platform::Platform;
use crate::world::{FrameSnapshot, World};

/// Snapshots in flight between core and platform; older ones are dropped.
const SNAPSHOT_QUEUE: usize = 2;

//=== EngineError =========================================================

#[derive(Debug, Error)]
pub enum EngineError {
    #[error(transparent)]
    Platform(#[from] PlatformError),

    #[error("core thread panicked")]
    CoreThreadPanicked,
}

//=== EngineBuilder =======================================================

/// Builder for configuring and constructing an [`Engine`].
///
/// # Default Values
///
/// Taken from [`EngineConfig::default`]:
///
/// - **TPS**: 60.0 (logic updates per second)
/// - **Channel capacity**: 128 events
/// - **Window**: "Pitch Demo v0.2", 1280×720
///
/// # Examples
///
/// ```no_run
/// use pitch_demo::prelude::*;
/// use pitch_demo::game::GameScene;
///
/// EngineBuilder::new()
///     .with_tps(120.0)
///     .with_window_size(1600, 900)
///     .build()
///     .run(GameScene::new)
///     .expect("engine failed");
/// ```
pub struct EngineBuilder {
    config: EngineConfig,
}

impl EngineBuilder {
    pub fn new() -> Self {
        Self {
            config: EngineConfig::default(),
        }
    }

    /// Replaces every setting with `config`; later `with_*` calls still apply.
    ///
    /// # Panics
    ///
    /// Panics if `config` fails [`EngineConfig::validate`].
    pub fn with_config(mut self, config: EngineConfig) -> Self {
        if let Err(e) = config.validate() {
            panic!("Rejected engine config: {}", e);
        }
        self.config = config;
        self
    }

    /// Sets the target ticks per second for the logic thread.
    ///
    /// # Panics
    ///
    /// Panics if `tps` is not finite or lies outside [`TPS_RANGE`].
    pub fn with_tps(mut self, tps: f64) -> Self {
        assert!(
            is_valid_tps(tps),
            "TPS must be within {}..={}, got {}",
            TPS_RANGE.start(),
            TPS_RANGE.end(),
            tps
        );
        self.config.tps = tps;
        self
    }

    /// Sets the channel capacity for platform → core communication.
    ///
    /// # Panics
    ///
    /// Panics if `capacity == 0`.
    pub fn with_channel_capacity(mut self, capacity: usize) -> Self {
        assert!(capacity > 0, "Channel capacity must be positive");
        self.config.channel_capacity = capacity;
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.config.window.title = title.into();
        self
    }

    /// # Panics
    ///
    /// Panics if either dimension is zero.
    pub fn with_window_size(mut self, width: u32, height: u32) -> Self {
        assert!(width > 0 && height > 0, "Window size must be non-zero, got {}x{}", width, height);
        self.config.window.width = width;
        self.config.window.height = height;
        self
    }

    pub fn build(self) -> Engine {
        info!(
            "Building engine (TPS: {}, channel: {})",
            self.config.tps, self.config.channel_capacity
        );

        Engine {
            orchestrator: CoreSystemsOrchestrator::new(&self.config),
            config: self.config,
        }
    }
}

impl Default for EngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

//=== Engine ==============================================================

/// Engine runtime.
///
/// # Architecture
///
/// ```text
/// Engine (Main Thread)
///   ├─► CoreSystemsOrchestrator (Logic Thread @ TPS)
///   │     └─► World, InputSystem, Scene
///   │
///   └─► Platform (Event Loop)
///         └─► Window, Renderer, Input Polling
///
/// Communication: crossbeam channels (PlatformEvent ►, ◄ FrameSnapshot)
/// ```
pub struct Engine {
    orchestrator: CoreSystemsOrchestrator,
    config: EngineConfig,
}

impl Engine {
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Starts the runtime and blocks until the application exits.
    ///
    /// `factory` builds the scene on the logic thread once the renderer is
    /// up. If the renderer cannot be created the factory is never called
    /// and the renderer error is returned.
    ///
    /// # Lifecycle
    ///
    /// 1. Creates the platform → core and core → platform channels
    /// 2. Spawns the logic thread, which waits for `RendererReady`
    /// 3. Runs the platform event loop (blocks here)
    /// 4. On window close: core receives `WindowClosed` and the thread joins
    pub fn run<S, F>(self, factory: F) -> Result<(), EngineError>
    where
        S: Scene,
        F: FnOnce(&mut World) -> S + Send + 'static,
    {
        info!("Starting engine runtime (TPS: {})", self.config.tps);

        //--- 1. Create communication channels ----------------------------
        let (tx, rx): (Sender<PlatformEvent>, Receiver<PlatformEvent>) =
            bounded(self.config.channel_capacity);
        let (snapshot_tx, snapshot_rx) = bounded::<FrameSnapshot>(SNAPSHOT_QUEUE);

        info!("Channels created (capacity: {})", self.config.channel_capacity);

        //--- 2. Spawn the core logic thread -------------------------------
        let core_handle = self
            .orchestrator
            .spawn_core_thread(rx, snapshot_tx, self.config.tps, factory);
        info!("Core logic thread spawned");

        //--- 3. Launch the platform subsystem -----------------------------
        let platform = Platform::new(tx, snapshot_rx, self.config.window.clone());
        info!("Platform initialized, entering event loop");

        let platform_result = platform.run();
        if let Err(e) = &platform_result {
            error!("Platform error: {}", e);
        }

        info!("Platform event loop exited");

        //--- 4. Cleanup: Wait for logic thread to terminate --------------
        let core_result = core_handle.join();
        match &core_result {
            Ok(()) => info!("Core thread terminated cleanly"),
            Err(e) => error!("Core thread panicked: {:?}", e),
        }

        info!("Engine shutdown complete");

        platform_result?;
        core_result.map_err(|_| EngineError::CoreThreadPanicked)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    //=====================================================================
    // EngineBuilder Tests
    //=====================================================================

    #[test]
    fn builder_defaults() {
        let builder = EngineBuilder::new();
        assert_eq!(builder.config.tps, 60.0);
        assert_eq!(builder.config.channel_capacity, 128);
        assert_eq!(builder.config.window.title, "Pitch Demo v0.2");
        assert_eq!((builder.config.window.width, builder.config.window.height), (1280, 720));
    }

    #[test]
    fn builder_with_tps() {
        let builder = EngineBuilder::new().with_tps(120.0);
        assert_eq!(builder.config.tps, 120.0);
    }

    #[test]
    #[should_panic(expected = "TPS must be within")]
    fn builder_with_tps_panics_on_zero() {
        EngineBuilder::new().with_tps(0.0);
    }

    #[test]
    #[should_panic(expected = "TPS must be within")]
    fn builder_with_tps_panics_on_negative() {
        EngineBuilder::new().with_tps(-60.0);
    }

    #[test]
    #[should_panic(expected = "TPS must be within")]
    fn builder_with_tps_panics_on_infinity() {
        EngineBuilder::new().with_tps(f64::INFINITY);
    }

    #[test]
    #[should_panic(expected = "TPS must be within")]
    fn builder_with_tps_panics_on_nan() {
        EngineBuilder::new().with_tps(f64::NAN);
    }

    #[test]
    #[should_panic(expected = "TPS must be within")]
    fn builder_with_tps_panics_on_tiny_rate() {
        EngineBuilder::new().with_tps(1e-30);
    }

    #[test]
    fn builder_with_channel_capacity() {
        let builder = EngineBuilder::new().with_channel_capacity(256);
        assert_eq!(builder.config.channel_capacity, 256);
    }

    #[test]
    #[should_panic(expected = "Channel capacity must be positive")]
    fn builder_with_channel_capacity_panics_on_zero() {
        EngineBuilder::new().with_channel_capacity(0);
    }

    #[test]
    #[should_panic(expected = "Window size must be non-zero")]
    fn builder_with_window_size_panics_on_zero() {
        EngineBuilder::new().with_window_size(0, 720);
    }

    #[test]
    fn builder_with_config_then_overrides() {
        let config = EngineConfig { tps: 30.0, ..EngineConfig::default() };
        let engine = EngineBuilder::new()
            .with_config(config)
            .with_title("Replay")
            .build();

        assert_eq!(engine.config().tps, 30.0);
        assert_eq!(engine.config().window.title, "Replay");
    }

    #[test]
    #[should_panic(expected = "Rejected engine config")]
    fn builder_with_config_rejects_infinite_tps() {
        let config = EngineConfig { tps: f64::INFINITY, ..EngineConfig::default() };
        EngineBuilder::new().with_config(config);
    }

    #[test]
    fn builder_fluent_api_chaining() {
        let engine = EngineBuilder::new()
            .with_tps(120.0)
            .with_channel_capacity(256)
            .with_window_size(800, 600)
            .build();

        assert_eq!(engine.config().tps, 120.0);
        assert_eq!(engine.config().channel_capacity, 256);
        assert_eq!(engine.config().window.width, 800);
    }
}
