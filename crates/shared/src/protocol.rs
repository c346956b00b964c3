use serde::{Deserialize, Serialize};

use crate::{domain::SlotId, error::ERROR_MARKER};

/// Word that marks a result as the confirmation of an external action.
pub const SUCCESS_MARKER: &str = "Opening";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineStyle {
    /// Command text typed after the prompt label.
    Prompt,
    GreetingResponse,
    Ascii,
    Prose,
    PaperTitle,
    PaperAuthors,
    PaperVenue,
    PaperDescription,
    ProjectName,
    ProjectDescription,
    ProjectTech,
    CategoryHeader,
    CategoryItem,
    Preformatted,
    Link,
    Tags,
    /// Empty spacer opening a card or category group.
    Separator,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderedLine {
    pub style: LineStyle,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

impl RenderedLine {
    pub fn empty(style: LineStyle) -> Self {
        Self {
            style,
            text: String::new(),
            href: None,
        }
    }

    pub fn link(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            style: LineStyle::Link,
            text: label.into(),
            href: Some(href.into()),
        }
    }

    pub fn text(style: LineStyle, text: impl Into<String>) -> Self {
        Self {
            style,
            text: text.into(),
            href: None,
        }
    }
}

/// One top-level block produced by the boot sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderedBlock {
    pub section: usize,
    pub lines: Vec<RenderedLine>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultKind {
    Plain,
    Error,
    Success,
}

impl ResultKind {
    /// Cosmetic classification by content sniffing.
    pub fn classify(text: &str) -> Self {
        if text.starts_with(ERROR_MARKER) {
            Self::Error
        } else if text.contains(SUCCESS_MARKER) {
            Self::Success
        } else {
            Self::Plain
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandResult {
    pub text: String,
    pub kind: ResultKind,
}

impl CommandResult {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let kind = ResultKind::classify(&text);
        Self { text, kind }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputSlot {
    pub id: SlotId,
    pub value: String,
    pub enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum TranscriptEntry {
    Block(RenderedBlock),
    CommandEcho { line: String },
    Result(CommandResult),
    Input(InputSlot),
}

impl TranscriptEntry {
    /// Entries produced after boot; `clear` removes exactly these.
    pub fn is_interactive(&self) -> bool {
        !matches!(self, Self::Block(_))
    }
}

/// What to render, independent of how it is drawn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum RenderEvent {
    AnimationStarted,
    HeaderLineStarted { style: LineStyle },
    BlockStarted { section: usize },
    LineStarted { style: LineStyle },
    /// Appends one character to the most recently started line.
    TypeChar(char),
    StaticLine(RenderedLine),
    BlockFinished { section: usize },
    Scroll,
    Pause { millis: u64 },
    AnimationFinished,
    InputOpened { slot: SlotId },
    InputChanged { slot: SlotId, value: String },
    InputDisabled { slot: SlotId },
    CommandEchoed { line: String },
    ResultAppended(CommandResult),
    InteractiveCleared,
}
