//! Interactive command loop that takes over once boot has finished.

use std::sync::Arc;

use shared::protocol::{CommandResult, InputSlot, RenderEvent};
use tracing::{debug, warn};

use crate::{
    commands::{CommandOutput, CommandRegistry},
    history::{Direction, HistoryLog, Navigation},
    sequencer::BootedSession,
    session::SessionState,
    sink::RenderSink,
    transcript::Transcript,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Result(CommandResult),
    /// The handler produced nothing to display.
    Silent,
    Cleared,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub line: String,
    pub outcome: Outcome,
}

pub fn not_found_message(name: &str) -> String {
    format!("Command not found: {name}. Type 'help' for available commands.")
}

/// Lowercases and splits on whitespace; `None` for a blank line.
pub fn parse_line(line: &str) -> Option<(String, Vec<String>)> {
    let lowered = line.to_lowercase();
    let mut tokens = lowered.split_whitespace();
    let name = tokens.next()?.to_string();
    Some((name, tokens.map(str::to_string).collect()))
}

pub struct SessionDispatcher {
    state: SessionState,
    registry: CommandRegistry,
}

impl SessionDispatcher {
    pub fn new(booted: BootedSession, registry: CommandRegistry) -> Self {
        Self {
            state: booted.state,
            registry,
        }
    }

    /// Runs one command without touching the transcript or history.
    pub fn dispatch(&self, name: &str, args: &[String]) -> Outcome {
        let Some(command) = self.registry.get(name) else {
            return Outcome::Result(CommandResult::new(not_found_message(name)));
        };
        match command.execute(args) {
            Ok(CommandOutput::Text(text)) if text.is_empty() => Outcome::Silent,
            Ok(CommandOutput::Text(text)) => Outcome::Result(CommandResult::new(text)),
            Ok(CommandOutput::ClearTranscript) => Outcome::Cleared,
            Err(err) => {
                warn!(command = name, error = %err, "command failed");
                Outcome::Result(CommandResult::new(err.to_result_text()))
            }
        }
    }

    /// The single entry point for submitted lines. Blank lines, and any line
    /// arriving while the boot animation runs, are ignored.
    pub fn submit(&mut self, raw: &str) -> Option<Submission> {
        if self.state.is_animating() {
            return None;
        }
        let line = raw.trim();
        let (name, args) = parse_line(line)?;

        self.state.history_mut().record(line);
        debug!(command = %name, args = args.len(), "dispatching command");

        self.state.disable_active_input();
        self.state.emit(RenderEvent::CommandEchoed {
            line: line.to_string(),
        });

        let outcome = self.dispatch(&name, &args);
        match &outcome {
            Outcome::Result(result) => self.state.emit(RenderEvent::ResultAppended(result.clone())),
            Outcome::Cleared => self.clear_interactive(),
            Outcome::Silent => {}
        }

        self.state.replace_input();
        self.state.emit(RenderEvent::Scroll);

        Some(Submission {
            line: line.to_string(),
            outcome,
        })
    }

    /// Submits whatever the active input currently holds.
    pub fn submit_active(&mut self) -> Option<Submission> {
        let value = self.active_input()?.value.clone();
        self.submit(&value)
    }

    /// Clears interactive output without recording a command (Ctrl+L).
    pub fn clear_transcript(&mut self) {
        if self.state.is_animating() {
            return;
        }
        self.state.disable_active_input();
        self.clear_interactive();
        self.state.replace_input();
        self.state.emit(RenderEvent::Scroll);
    }

    /// Shared by the `clear` command and the shortcut; boot blocks survive.
    fn clear_interactive(&mut self) {
        self.state.emit(RenderEvent::InteractiveCleared);
    }

    pub fn navigate_history(&mut self, direction: Direction) {
        match self.state.history_mut().navigate(direction) {
            Navigation::Load(line) => self.state.set_input(line),
            Navigation::Reset => self.state.set_input(String::new()),
            Navigation::Unchanged => {}
        }
    }

    pub fn set_input(&mut self, value: impl Into<String>) {
        self.state.set_input(value.into());
    }

    pub fn active_input(&self) -> Option<&InputSlot> {
        self.state.transcript().active_input()
    }

    pub fn transcript(&self) -> &Transcript {
        self.state.transcript()
    }

    pub fn history(&self) -> &HistoryLog {
        self.state.history()
    }

    pub fn is_animating(&self) -> bool {
        self.state.is_animating()
    }

    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    pub fn replace_sink(&mut self, sink: Arc<dyn RenderSink>) {
        self.state.replace_sink(sink);
    }
}

#[cfg(test)]
#[path = "tests/dispatcher_tests.rs"]
mod tests;
