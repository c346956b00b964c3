//! The visible transcript, folded from render events.

use shared::{
    domain::SlotId,
    protocol::{InputSlot, RenderEvent, RenderedBlock, RenderedLine, TranscriptEntry},
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
enum Target {
    #[default]
    None,
    Header,
    Block(usize),
}

#[derive(Debug, Clone, Default)]
pub struct Transcript {
    header: Vec<RenderedLine>,
    entries: Vec<TranscriptEntry>,
    target: Target,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&mut self, event: &RenderEvent) {
        match event {
            RenderEvent::AnimationStarted
            | RenderEvent::AnimationFinished
            | RenderEvent::Scroll
            | RenderEvent::Pause { .. } => {}
            RenderEvent::HeaderLineStarted { style } => {
                self.header.push(RenderedLine::empty(*style));
                self.target = Target::Header;
            }
            RenderEvent::BlockStarted { section } => {
                self.entries.push(TranscriptEntry::Block(RenderedBlock {
                    section: *section,
                    lines: Vec::new(),
                }));
                self.target = Target::Block(self.entries.len() - 1);
            }
            RenderEvent::LineStarted { style } => {
                if let Some(lines) = self.target_lines() {
                    lines.push(RenderedLine::empty(*style));
                }
            }
            RenderEvent::TypeChar(ch) => {
                if let Some(line) = self.target_lines().and_then(|lines| lines.last_mut()) {
                    line.text.push(*ch);
                }
            }
            RenderEvent::StaticLine(line) => {
                if let Some(lines) = self.target_lines() {
                    lines.push(line.clone());
                }
            }
            RenderEvent::BlockFinished { .. } => self.target = Target::None,
            RenderEvent::InputOpened { slot } => {
                self.target = Target::None;
                self.entries.push(TranscriptEntry::Input(InputSlot {
                    id: *slot,
                    value: String::new(),
                    enabled: true,
                }));
            }
            RenderEvent::InputChanged { slot, value } => {
                if let Some(input) = self.input_mut(*slot).filter(|input| input.enabled) {
                    input.value.clone_from(value);
                }
            }
            RenderEvent::InputDisabled { slot } => {
                if let Some(input) = self.input_mut(*slot) {
                    input.enabled = false;
                    input.value.clear();
                }
            }
            RenderEvent::CommandEchoed { line } => {
                self.entries
                    .push(TranscriptEntry::CommandEcho { line: line.clone() });
            }
            RenderEvent::ResultAppended(result) => {
                self.entries.push(TranscriptEntry::Result(result.clone()));
            }
            RenderEvent::InteractiveCleared => {
                self.target = Target::None;
                self.entries.retain(|entry| !entry.is_interactive());
            }
        }
    }

    fn target_lines(&mut self) -> Option<&mut Vec<RenderedLine>> {
        match self.target {
            Target::None => None,
            Target::Header => Some(&mut self.header),
            Target::Block(index) => match self.entries.get_mut(index) {
                Some(TranscriptEntry::Block(block)) => Some(&mut block.lines),
                _ => None,
            },
        }
    }

    fn input_mut(&mut self, slot: SlotId) -> Option<&mut InputSlot> {
        self.entries.iter_mut().find_map(|entry| match entry {
            TranscriptEntry::Input(input) if input.id == slot => Some(input),
            _ => None,
        })
    }

    pub fn header(&self) -> &[RenderedLine] {
        &self.header
    }

    pub fn entries(&self) -> &[TranscriptEntry] {
        &self.entries
    }

    pub fn blocks(&self) -> impl Iterator<Item = &RenderedBlock> {
        self.entries.iter().filter_map(|entry| match entry {
            TranscriptEntry::Block(block) => Some(block),
            _ => None,
        })
    }

    pub fn inputs(&self) -> impl Iterator<Item = &InputSlot> {
        self.entries.iter().filter_map(|entry| match entry {
            TranscriptEntry::Input(input) => Some(input),
            _ => None,
        })
    }

    pub fn active_input(&self) -> Option<&InputSlot> {
        self.inputs().find(|input| input.enabled)
    }

    pub fn enabled_input_count(&self) -> usize {
        self.inputs().filter(|input| input.enabled).count()
    }

    pub fn interactive_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|entry| entry.is_interactive())
            .count()
    }
}

#[cfg(test)]
mod tests {
    use shared::protocol::{CommandResult, LineStyle};

    use super::*;

    fn fold(events: &[RenderEvent]) -> Transcript {
        let mut transcript = Transcript::new();
        for event in events {
            transcript.apply(event);
        }
        transcript
    }

    #[test]
    fn typed_characters_land_in_the_latest_line() {
        let transcript = fold(&[
            RenderEvent::BlockStarted { section: 0 },
            RenderEvent::LineStarted {
                style: LineStyle::Prompt,
            },
            RenderEvent::TypeChar('l'),
            RenderEvent::TypeChar('s'),
            RenderEvent::LineStarted {
                style: LineStyle::Prose,
            },
            RenderEvent::TypeChar('x'),
            RenderEvent::BlockFinished { section: 0 },
        ]);
        let block = transcript.blocks().next().expect("block");
        assert_eq!(block.lines[0].text, "ls");
        assert_eq!(block.lines[1].text, "x");
    }

    #[test]
    fn header_lines_are_not_entries() {
        let transcript = fold(&[
            RenderEvent::HeaderLineStarted {
                style: LineStyle::Prompt,
            },
            RenderEvent::TypeChar('w'),
            RenderEvent::StaticLine(RenderedLine::text(LineStyle::GreetingResponse, "me")),
        ]);
        assert_eq!(transcript.header().len(), 2);
        assert_eq!(transcript.header()[0].text, "w");
        assert!(transcript.entries().is_empty());
    }

    #[test]
    fn clearing_keeps_boot_blocks_only() {
        let slot = SlotId(1);
        let transcript = fold(&[
            RenderEvent::BlockStarted { section: 0 },
            RenderEvent::BlockFinished { section: 0 },
            RenderEvent::InputOpened { slot },
            RenderEvent::CommandEchoed { line: "pwd".into() },
            RenderEvent::ResultAppended(CommandResult::new("/home")),
            RenderEvent::InteractiveCleared,
        ]);
        assert_eq!(transcript.entries().len(), 1);
        assert_eq!(transcript.interactive_count(), 0);
    }

    #[test]
    fn disabled_inputs_ignore_later_edits() {
        let slot = SlotId(3);
        let transcript = fold(&[
            RenderEvent::InputOpened { slot },
            RenderEvent::InputChanged {
                slot,
                value: "hel".into(),
            },
            RenderEvent::InputDisabled { slot },
            RenderEvent::InputChanged {
                slot,
                value: "help".into(),
            },
        ]);
        let input = transcript.inputs().next().expect("input");
        assert!(!input.enabled);
        assert!(input.value.is_empty());
        assert!(transcript.active_input().is_none());
    }
}
