//=========================================================================
// Event Collector
//=========================================================================
//
// Core-side receiving end of the platform channel.
//
// Architecture:
//   Receiver<PlatformEvent> → collect_frame() → input_batches → TickControl
//
// Draining is bounded per tick so a flood of input cannot stall the
// simulation.
//
//=========================================================================

//=== External Dependencies ===============================================

use crossbeam_channel::{Receiver, TryRecvError};
use log::{debug, warn};

//=== Internal Dependencies ===============================================

use super::PlatformEvent;
use crate::core::input::InputEvent;

const MAX_EVENTS_PER_FRAME: usize = 100;

//=== TickControl =========================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TickControl {
    Continue,
    Exit,
}

//=== EventCollector ======================================================

pub(crate) struct EventCollector {
    receiver: Receiver<PlatformEvent>,
    input_batches: Vec<Vec<InputEvent>>,
}

impl EventCollector {
    pub(crate) fn new(receiver: Receiver<PlatformEvent>) -> Self {
        Self {
            receiver,
            input_batches: Vec::with_capacity(4),
        }
    }

    /// Blocks until the platform reports the renderer ready.
    ///
    /// Returns `Exit` if the window closes or the platform goes away first;
    /// input arriving before that point is discarded.
    pub(crate) fn wait_for_renderer(&mut self) -> TickControl {
        loop {
            match self.receiver.recv() {
                Ok(PlatformEvent::RendererReady) => return TickControl::Continue,
                Ok(PlatformEvent::WindowClosed) | Err(_) => return TickControl::Exit,
                Ok(PlatformEvent::Inputs(_)) => {
                    debug!("Dropping input received before the renderer was ready");
                }
            }
        }
    }

    /// Drains pending platform events without blocking.
    pub(crate) fn collect_frame(&mut self) -> TickControl {
        self.input_batches.clear();
        let mut drained = 0;

        while drained < MAX_EVENTS_PER_FRAME {
            match self.receiver.try_recv() {
                Ok(event) => {
                    if self.handle_event(event) == TickControl::Exit {
                        return TickControl::Exit;
                    }
                    drained += 1;
                }
                Err(TryRecvError::Disconnected) => return TickControl::Exit,
                Err(TryRecvError::Empty) => break,
            }
        }

        if drained >= MAX_EVENTS_PER_FRAME {
            warn!("Event queue backlog: drained {} events this tick", drained);
        }

        TickControl::Continue
    }

    pub(crate) fn batches(&self) -> &[Vec<InputEvent>] {
        &self.input_batches
    }

    fn handle_event(&mut self, event: PlatformEvent) -> TickControl {
        match event {
            PlatformEvent::Inputs(events) => {
                if !events.is_empty() {
                    self.input_batches.push(events);
                }
                TickControl::Continue
            }
            PlatformEvent::RendererReady => {
                warn!("Renderer reported ready twice");
                TickControl::Continue
            }
            PlatformEvent::WindowClosed => TickControl::Exit,
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
    use crossbeam_channel::unbounded;

    fn key_batch(key: KeyCode) -> PlatformEvent {
        PlatformEvent::Inputs(vec![InputEvent::KeyDown(key)])
    }

    #[test]
    fn empty_queue_continues() {
        let (_tx, rx) = unbounded::<PlatformEvent>();
        let mut collector = EventCollector::new(rx);

        assert_eq!(collector.collect_frame(), TickControl::Continue);
        assert!(collector.batches().is_empty());
    }

    #[test]
    fn batches_are_aggregated_per_tick() {
        let (tx, rx) = unbounded();
        let mut collector = EventCollector::new(rx);

        tx.send(key_batch(KeyCode::KeyW)).unwrap();
        tx.send(PlatformEvent::Inputs(vec![])).unwrap();
        tx.send(PlatformEvent::Inputs(vec![InputEvent::FocusLost])).unwrap();

        assert_eq!(collector.collect_frame(), TickControl::Continue);
        assert_eq!(
            collector.batches(),
            [vec![InputEvent::KeyDown(KeyCode::KeyW)], vec![InputEvent::FocusLost]]
        );

        assert_eq!(collector.collect_frame(), TickControl::Continue);
        assert!(collector.batches().is_empty(), "batches must not leak into the next tick");
    }

    #[test]
    fn window_closed_exits() {
        let (tx, rx) = unbounded();
        let mut collector = EventCollector::new(rx);
        tx.send(PlatformEvent::WindowClosed).unwrap();
        assert_eq!(collector.collect_frame(), TickControl::Exit);
    }

    #[test]
    fn disconnect_exits() {
        let (tx, rx) = unbounded::<PlatformEvent>();
        let mut collector = EventCollector::new(rx);
        drop(tx);
        assert_eq!(collector.collect_frame(), TickControl::Exit);
    }

    #[test]
    fn wait_skips_early_input() {
        let (tx, rx) = unbounded();
        let mut collector = EventCollector::new(rx);

        tx.send(key_batch(KeyCode::KeyA)).unwrap();
        tx.send(PlatformEvent::RendererReady).unwrap();

        assert_eq!(collector.wait_for_renderer(), TickControl::Continue);
        assert_eq!(collector.collect_frame(), TickControl::Continue);
        assert!(collector.batches().is_empty());
    }

    #[test]
    fn wait_exits_when_startup_aborts() {
        let (tx, rx) = unbounded();
        let mut collector = EventCollector::new(rx);
        tx.send(PlatformEvent::WindowClosed).unwrap();
        assert_eq!(collector.wait_for_renderer(), TickControl::Exit);
    }
}
