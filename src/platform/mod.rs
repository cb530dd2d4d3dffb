//=========================================================================
// Platform Subsystem
//
// Owns the OS window and the renderer, and bridges winit with the core
// thread through crossbeam channels.
//
// Architecture:
// ```text
//  Main Thread:                       Logic Thread:
//  ┌────────────────────────────┐    ┌──────────────────┐
//  │  Winit Event Loop          │    │  Core Systems    │
//  │   ↓                        │    │                  │
//  │  input_processor           │    │  InputSystem     │
//  │   ↓                        │    │  ↓               │
//  │  InputBuffer               │    │  Scene callbacks │
//  │   ↓                        │    │  ↓               │
//  │  RedrawRequested (flush) ──┼───►│  World::step     │
//  │                            │    │  ↓               │
//  │  Renderer::render  ◄───────┼────┤  FrameSnapshot   │
//  └────────────────────────────┘    └──────────────────┘
// ```
//
// Startup:
//   resumed() → hidden window → Renderer::create
//     ├─ Err → log, WindowClosed to core, exit loop (window never shown)
//     └─ Ok  → init_resources, show window, RendererReady to core
//
// Winit requires the event loop on the main thread (macOS/iOS), so this
// runs on the thread that called `Engine::run()`.
//
//=========================================================================

//=== Submodules ==========================================================

mod input_buffer;
mod input_processor;

//=== External Crates =====================================================

use std::sync::Arc;

use crossbeam_channel::{Receiver, Sender};
use log::*;
use winit::{
    application::ApplicationHandler,
    dpi::LogicalSize,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, EventLoop},
    window::{Window, WindowAttributes, WindowId},
};

//=== Internal Imports ====================================================

use crate::config::WindowConfig;
use crate::core::input::InputEvent;
use crate::core::platform_bridge::{PlatformError, PlatformEvent};
use crate::render::Renderer;
use crate::world::FrameSnapshot;
use input_buffer::InputBuffer;

//=== Platform ============================================================

/// Window, renderer and input aggregation on the main thread.
///
/// # Lifecycle
///
/// 1. **Construction**: `Platform::new(..)`, nothing created yet
/// 2. **Execution**: `platform.run()` blocks in the winit event loop
/// 3. **Startup**: `resumed()` builds window and renderer, then signals core
/// 4. **Shutdown**: window closed → `WindowClosed` to core → loop exits
///
/// This type is not `Send`; it stays on the main thread.
pub(crate) struct Platform {
    window_config: WindowConfig,

    /// Created in `resumed()`.
    window: Option<Arc<Window>>,
    renderer: Option<Renderer>,

    buffer: InputBuffer,

    event_sender: Sender<PlatformEvent>,
    snapshots: Receiver<FrameSnapshot>,

    /// Most recent snapshot from core; redrawn until a newer one arrives.
    latest: FrameSnapshot,

    /// Fatal startup error, reported once the loop has exited.
    failure: Option<PlatformError>,
}

impl Platform {
    //--- Construction -----------------------------------------------------

    pub fn new(
        event_sender: Sender<PlatformEvent>,
        snapshots: Receiver<FrameSnapshot>,
        window_config: WindowConfig,
    ) -> Self {
        info!(target: "platform", "Platform subsystem initialized");
        Self {
            window_config,
            window: None,
            renderer: None,
            buffer: InputBuffer::new(),
            event_sender,
            snapshots,
            latest: FrameSnapshot::empty(),
            failure: None,
        }
    }

    //--- Execution --------------------------------------------------------

    /// Runs the winit event loop until the window closes.
    ///
    /// # Errors
    ///
    /// Event loop creation or execution failures, and a window or renderer
    /// that could not be created at startup.
    pub fn run(mut self) -> Result<(), PlatformError> {
        debug!(target: "platform", "Starting Winit event loop");

        let event_loop = EventLoop::new().map_err(PlatformError::EventLoopCreation)?;
        event_loop
            .run_app(&mut self)
            .map_err(PlatformError::EventLoopExecution)?;

        match self.failure.take() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }

    //--- Internal Helpers -------------------------------------------------

    /// Sends buffered input to the core thread; empty frames are skipped.
    fn flush_input_buffer(&mut self) {
        if let Some(events) = self.buffer.drain() {
            let count = events.len();
            trace!(target: "platform::input", "Flushing {} key events", count);

            if self.event_sender.send(PlatformEvent::Inputs(events)).is_err() {
                warn!(target: "platform::input", "Channel disconnected, dropping {} events", count);
            }
        }
    }

    /// Key releases made while another window has focus may never arrive,
    /// so losing focus releases every held key.
    fn focus_changed(&mut self, focused: bool) {
        if !focused {
            debug!(target: "platform::input", "Focus lost, releasing held keys");
            self.buffer.push(InputEvent::FocusLost);
        }
    }

    /// Keeps only the newest snapshot published since the last frame.
    fn pull_snapshots(&mut self) {
        while let Ok(snapshot) = self.snapshots.try_recv() {
            self.latest = snapshot;
        }
    }

    /// Aborts startup: core is told to stop and the loop exits.
    fn abort(&mut self, event_loop: &ActiveEventLoop, failure: PlatformError) {
        self.failure = Some(failure);
        let _ = self.event_sender.send(PlatformEvent::WindowClosed);
        event_loop.exit();
    }

    fn start(&mut self, event_loop: &ActiveEventLoop) {
        let attrs = WindowAttributes::default()
            .with_title(self.window_config.title.clone())
            .with_inner_size(LogicalSize::new(self.window_config.width, self.window_config.height))
            .with_visible(false);

        let window = match event_loop.create_window(attrs) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                error!(target: "platform", "Window creation failed: {}", e);
                self.abort(event_loop, PlatformError::WindowCreation(e));
                return;
            }
        };

        let mut renderer =
            match pollster::block_on(Renderer::create(Arc::clone(&window), &self.window_config)) {
                Ok(renderer) => renderer,
                Err(e) => {
                    error!(target: "platform", "Failed to initialize the renderer: {}", e);
                    self.abort(event_loop, PlatformError::Renderer(e));
                    return;
                }
            };

        renderer.init_resources();
        window.set_visible(true);
        window.request_redraw();

        info!(
            target: "platform",
            "Window created: {}x{} @ {}x DPI",
            window.inner_size().width,
            window.inner_size().height,
            window.scale_factor()
        );

        self.window = Some(window);
        self.renderer = Some(renderer);

        if self.event_sender.send(PlatformEvent::RendererReady).is_err() {
            warn!(target: "platform", "Core thread gone before the renderer was ready");
        }
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        // Frame boundary
        self.flush_input_buffer();
        self.pull_snapshots();

        let Some(renderer) = &mut self.renderer else {
            return;
        };

        match renderer.render(&self.latest) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                debug!(target: "platform::render", "Surface lost or outdated, reconfiguring");
                renderer.reconfigure();
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                error!(target: "platform::render", "GPU out of memory, shutting down");
                let _ = self.event_sender.send(PlatformEvent::WindowClosed);
                event_loop.exit();
                return;
            }
            Err(e) => {
                warn!(target: "platform::render", "Frame skipped: {}", e);
            }
        }

        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    //--- Test Accessors ---------------------------------------------------

    #[cfg(test)]
    pub(crate) fn window(&self) -> Option<&Arc<Window>> {
        self.window.as_ref()
    }
}

//=== Winit Integration ===================================================

impl ApplicationHandler for Platform {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            debug!(target: "platform", "Window already exists (mobile resume?)");
            return;
        }
        self.start(event_loop);
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _window_id: WindowId, event: WindowEvent) {
        match &event {
            WindowEvent::CloseRequested => {
                info!(target: "platform", "Window close requested");
                let _ = self.event_sender.send(PlatformEvent::WindowClosed);
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                if let Some(renderer) = &mut self.renderer {
                    renderer.resize(*size);
                }
            }

            WindowEvent::Focused(focused) => self.focus_changed(*focused),

            WindowEvent::KeyboardInput { event: key_event, .. } => {
                match input_processor::key_event(key_event) {
                    Some(event) => self.buffer.push(event),
                    None => trace!(target: "platform::input", "Unmapped key ignored"),
                }
            }

            WindowEvent::RedrawRequested => self.redraw(event_loop),

            _ => {}
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::input::KeyCode;
    use crossbeam_channel::{bounded, unbounded};

    fn platform() -> (Platform, Receiver<PlatformEvent>, Sender<FrameSnapshot>) {
        let (tx, rx) = unbounded();
        let (snap_tx, snap_rx) = bounded(4);
        (Platform::new(tx, snap_rx, WindowConfig::default()), rx, snap_tx)
    }

    fn space() -> InputEvent {
        InputEvent::KeyDown(KeyCode::Space)
    }

    #[test]
    fn window_and_renderer_created_lazily() {
        let (platform, _rx, _snap) = platform();
        assert!(platform.window().is_none());
        assert!(platform.renderer.is_none());
        assert!(platform.failure.is_none());
    }

    #[test]
    fn flush_empty_buffer_is_noop() {
        let (mut platform, rx, _snap) = platform();
        platform.flush_input_buffer();
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn flush_sends_buffered_events() {
        let (mut platform, rx, _snap) = platform();
        platform.buffer.push(space());
        platform.buffer.push(InputEvent::KeyUp(KeyCode::Space));

        platform.flush_input_buffer();

        match rx.try_recv() {
            Ok(PlatformEvent::Inputs(events)) => assert_eq!(events.len(), 2),
            other => panic!("Expected Inputs event, got {:?}", other),
        }
        platform.flush_input_buffer();
        assert!(rx.try_recv().is_err(), "second flush must not resend");
    }

    #[test]
    fn focus_loss_is_forwarded_after_pending_keys() {
        let (mut platform, rx, _snap) = platform();
        platform.buffer.push(InputEvent::KeyDown(KeyCode::KeyW));

        platform.focus_changed(false);
        platform.focus_changed(true);
        platform.flush_input_buffer();

        match rx.try_recv() {
            Ok(PlatformEvent::Inputs(events)) => {
                assert_eq!(events, [InputEvent::KeyDown(KeyCode::KeyW), InputEvent::FocusLost]);
            }
            other => panic!("Expected Inputs event, got {:?}", other),
        }
    }

    #[test]
    fn flush_survives_disconnected_core() {
        let (mut platform, rx, _snap) = platform();
        platform.buffer.push(space());
        drop(rx);
        platform.flush_input_buffer();
    }

    #[test]
    fn newest_snapshot_wins() {
        let (mut platform, _rx, snap_tx) = platform();

        for tick in [4, 5, 6] {
            let snapshot = FrameSnapshot { tick, ..FrameSnapshot::empty() };
            snap_tx.send(snapshot).unwrap();
        }
        platform.pull_snapshots();

        assert_eq!(platform.latest.tick, 6);
    }

    #[test]
    fn latest_snapshot_kept_when_core_is_quiet() {
        let (mut platform, _rx, snap_tx) = platform();
        snap_tx.send(FrameSnapshot { tick: 9, ..FrameSnapshot::empty() }).unwrap();

        platform.pull_snapshots();
        platform.pull_snapshots();

        assert_eq!(platform.latest.tick, 9);
    }
}
