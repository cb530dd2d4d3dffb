//=========================================================================
// Platform Bridge Interface
//=========================================================================
//
// Messages and errors shared by the platform (main) thread and the core
// (logic) thread.
//
//=========================================================================

//=== External Dependencies ===============================================

use thiserror::Error;

//=== Internal Dependencies ===============================================

use crate::core::input::InputEvent;
use crate::render::RendererError;

//=== PlatformEvent =======================================================

/// Platform → core messages.
#[derive(Debug, Clone)]
pub(crate) enum PlatformEvent {
    /// Key events buffered since the previous redraw, in arrival order.
    Inputs(Vec<InputEvent>),

    /// The renderer exists and the window is visible; the scene may be built.
    RendererReady,

    /// Window closed, or startup aborted.
    WindowClosed,
}

//=== PlatformError =======================================================

#[derive(Debug, Error)]
pub enum PlatformError {
    #[error("event loop creation failed: {0}")]
    EventLoopCreation(#[source] winit::error::EventLoopError),

    #[error("event loop error: {0}")]
    EventLoopExecution(#[source] winit::error::EventLoopError),

    #[error("window creation failed: {0}")]
    WindowCreation(#[source] winit::error::OsError),

    #[error("failed to initialize the renderer: {0}")]
    Renderer(#[from] RendererError),
}
