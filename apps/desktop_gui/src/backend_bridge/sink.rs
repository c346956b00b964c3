use crossbeam_channel::Sender;
use shared::protocol::RenderEvent;
use terminal_core::RenderSink;

use crate::controller::events::UiEvent;

/// Forwards render events to the UI thread. Blocks while the queue is full
/// so the UI mirror never misses an event.
pub struct ChannelSink {
    ui_tx: Sender<UiEvent>,
}

impl ChannelSink {
    pub fn new(ui_tx: Sender<UiEvent>) -> Self {
        Self { ui_tx }
    }
}

impl RenderSink for ChannelSink {
    fn emit(&self, event: &RenderEvent) {
        if self.ui_tx.send(UiEvent::Render(event.clone())).is_err() {
            tracing::trace!("ui receiver dropped; render event discarded");
        }
    }
}
