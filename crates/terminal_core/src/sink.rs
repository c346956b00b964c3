use std::sync::Mutex;

use shared::protocol::RenderEvent;

/// Presentation adapter seam: receives every render event in order.
pub trait RenderSink: Send + Sync {
    fn emit(&self, event: &RenderEvent);
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl RenderSink for NullSink {
    fn emit(&self, _event: &RenderEvent) {}
}

/// Keeps every event; used by tests and event dumps.
#[derive(Debug, Default)]
pub struct RecordingSink {
    events: Mutex<Vec<RenderEvent>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<RenderEvent> {
        self.events
            .lock()
            .map(|events| events.clone())
            .unwrap_or_default()
    }

    pub fn take(&self) -> Vec<RenderEvent> {
        self.events
            .lock()
            .map(|mut events| std::mem::take(&mut *events))
            .unwrap_or_default()
    }
}

impl RenderSink for RecordingSink {
    fn emit(&self, event: &RenderEvent) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event.clone());
        }
    }
}
