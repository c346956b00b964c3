//! Boot worker thread and the channel sink feeding the UI.

pub mod runtime;
pub mod sink;
