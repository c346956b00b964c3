//! Line-mode presentation of render events on stdout.

use std::{
    io::{self, IsTerminal, Write},
    sync::Mutex,
};

use shared::protocol::{CommandResult, LineStyle, RenderEvent, RenderedLine, ResultKind};
use terminal_core::{RenderSink, Transcript};

const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";
const BULLET: &str = "▶";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Text,
    Json,
}

pub struct ConsoleSink {
    prompt: String,
    mode: OutputMode,
    color: bool,
    backdrop: Mutex<String>,
}

impl ConsoleSink {
    pub fn new(prompt: impl Into<String>, mode: OutputMode) -> Self {
        Self {
            prompt: prompt.into(),
            mode,
            color: io::stdout().is_terminal(),
            backdrop: Mutex::new(String::new()),
        }
    }

    /// Text redrawn after the screen is cleared.
    pub fn set_backdrop(&self, transcript: &Transcript) {
        if let Ok(mut backdrop) = self.backdrop.lock() {
            *backdrop = transcript_text(transcript, &self.prompt);
        }
    }

    pub fn reprompt(&self) {
        if self.mode == OutputMode::Text {
            self.write(&format!("{} ", self.prompt));
        }
    }

    fn write(&self, text: &str) {
        let mut out = io::stdout().lock();
        let _ = out.write_all(text.as_bytes());
        let _ = out.flush();
    }

    fn text_for(&self, event: &RenderEvent) -> Option<String> {
        match event {
            RenderEvent::HeaderLineStarted { style } | RenderEvent::LineStarted { style } => {
                Some(format!("\n{}", line_prefix(*style, &self.prompt)))
            }
            RenderEvent::TypeChar(ch) => Some(ch.to_string()),
            RenderEvent::StaticLine(line) => Some(format!("\n{}", line_text(line, &self.prompt))),
            RenderEvent::BlockFinished { .. } => Some("\n".to_string()),
            RenderEvent::AnimationFinished => Some("\n".to_string()),
            RenderEvent::InputOpened { .. } => Some(format!("{} ", self.prompt)),
            RenderEvent::ResultAppended(result) => Some(format!("{}\n", self.paint(result))),
            RenderEvent::InteractiveCleared => {
                let backdrop = self.backdrop.lock().map(|b| b.clone()).unwrap_or_default();
                Some(format!("{CLEAR_SCREEN}{backdrop}"))
            }
            _ => None,
        }
    }

    fn paint(&self, result: &CommandResult) -> String {
        if !self.color {
            return result.text.clone();
        }
        match result.kind {
            ResultKind::Error => format!("\x1b[31m{}\x1b[0m", result.text),
            ResultKind::Success => format!("\x1b[32m{}\x1b[0m", result.text),
            ResultKind::Plain => result.text.clone(),
        }
    }
}

impl RenderSink for ConsoleSink {
    fn emit(&self, event: &RenderEvent) {
        match self.mode {
            OutputMode::Json => match serde_json::to_string(event) {
                Ok(json) => self.write(&format!("{json}\n")),
                Err(err) => tracing::warn!("failed to encode render event: {err}"),
            },
            OutputMode::Text => {
                if let Some(text) = self.text_for(event) {
                    self.write(&text);
                }
            }
        }
    }
}

fn line_prefix(style: LineStyle, prompt: &str) -> String {
    match style {
        LineStyle::Prompt => format!("{prompt} "),
        LineStyle::CategoryItem => format!("  {BULLET} "),
        _ => String::new(),
    }
}

pub fn line_text(line: &RenderedLine, prompt: &str) -> String {
    let prefix = line_prefix(line.style, prompt);
    match &line.href {
        Some(href) => format!("{prefix}{} {href}", line.text),
        None => format!("{prefix}{}", line.text),
    }
}

/// The header and every block as plain text, followed by a blank line.
pub fn transcript_text(transcript: &Transcript, prompt: &str) -> String {
    let mut out = String::new();
    for line in transcript.header() {
        out.push('\n');
        out.push_str(&line_text(line, prompt));
    }
    for block in transcript.blocks() {
        for line in &block.lines {
            out.push('\n');
            out.push_str(&line_text(line, prompt));
        }
        out.push('\n');
    }
    out.push('\n');
    out
}
