use std::sync::Arc;

use shared::{domain::SlotId, protocol::RenderEvent};

use crate::{history::HistoryLog, sink::RenderSink, transcript::Transcript};

/// Everything one terminal session mutates. Owned by the sequencer during
/// boot and by the dispatcher afterwards.
pub struct SessionState {
    transcript: Transcript,
    history: HistoryLog,
    animating: bool,
    active_slot: Option<SlotId>,
    next_slot: u64,
    sink: Arc<dyn RenderSink>,
}

impl SessionState {
    pub fn new(sink: Arc<dyn RenderSink>) -> Self {
        Self {
            transcript: Transcript::new(),
            history: HistoryLog::new(),
            animating: true,
            active_slot: None,
            next_slot: 1,
            sink,
        }
    }

    pub(crate) fn emit(&mut self, event: RenderEvent) {
        self.transcript.apply(&event);
        self.sink.emit(&event);
    }

    pub(crate) fn set_animating(&mut self, animating: bool) {
        self.animating = animating;
        self.emit(if animating {
            RenderEvent::AnimationStarted
        } else {
            RenderEvent::AnimationFinished
        });
    }

    /// Disables the current input, if any, then opens a fresh one.
    pub(crate) fn replace_input(&mut self) -> SlotId {
        self.disable_active_input();
        let slot = SlotId(self.next_slot);
        self.next_slot += 1;
        self.active_slot = Some(slot);
        self.emit(RenderEvent::InputOpened { slot });
        slot
    }

    pub(crate) fn disable_active_input(&mut self) {
        if let Some(slot) = self.active_slot.take() {
            self.emit(RenderEvent::InputDisabled { slot });
        }
    }

    pub(crate) fn set_input(&mut self, value: String) {
        if let Some(slot) = self.active_slot {
            self.emit(RenderEvent::InputChanged { slot, value });
        }
    }

    pub(crate) fn history_mut(&mut self) -> &mut HistoryLog {
        &mut self.history
    }

    pub(crate) fn replace_sink(&mut self, sink: Arc<dyn RenderSink>) {
        self.sink = sink;
    }

    pub fn is_animating(&self) -> bool {
        self.animating
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn history(&self) -> &HistoryLog {
        &self.history
    }

    pub fn active_slot(&self) -> Option<SlotId> {
        self.active_slot
    }
}
