pub mod actions;
pub mod commands;
pub mod config;
pub mod content;
pub mod dispatcher;
pub mod history;
pub mod pacing;
pub mod sequencer;
pub mod session;
pub mod sink;
pub mod transcript;

pub use actions::{ExternalActions, LoggingLauncher, SystemLauncher};
pub use commands::{Command, CommandOutput, CommandRegistry};
pub use dispatcher::{Outcome, SessionDispatcher, Submission};
pub use history::Direction;
pub use pacing::{Pacer, PacingProfile, TokioPacer};
pub use sequencer::{BootedSession, Sequencer};
pub use session::SessionState;
pub use sink::{NullSink, RecordingSink, RenderSink};
pub use transcript::Transcript;
