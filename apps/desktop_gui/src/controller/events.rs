//! Events flowing from the boot worker to the UI thread.

use shared::protocol::RenderEvent;
use terminal_core::SessionDispatcher;

pub enum UiEvent {
    Render(RenderEvent),
    /// Boot finished; the UI owns the session from here on.
    SessionReady(Box<SessionDispatcher>),
    BackendFailed(String),
}

impl std::fmt::Debug for UiEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Render(event) => f.debug_tuple("Render").field(event).finish(),
            Self::SessionReady(_) => f.write_str("SessionReady"),
            Self::BackendFailed(message) => f.debug_tuple("BackendFailed").field(message).finish(),
        }
    }
}
