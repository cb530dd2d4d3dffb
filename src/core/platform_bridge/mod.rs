//=========================================================================
// Platform Bridge
//=========================================================================
//
// Contract between the platform layer and the core thread.
//
// Components:
// - `interface`: message and error types crossing the thread boundary
// - `event_collector`: core-side draining of platform messages
//
//=========================================================================

pub(crate) mod event_collector;
pub(crate) mod interface;

pub(crate) use event_collector::{EventCollector, TickControl};
pub(crate) use interface::PlatformEvent;
pub use interface::PlatformError;
