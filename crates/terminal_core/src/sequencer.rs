//! One-shot boot animation driver.

use rand::{rngs::StdRng, SeedableRng};
use shared::{
    domain::{BootScript, Category, ContentSection, Greeting, Paper, Payload, Project, Record},
    protocol::{LineStyle, RenderEvent, RenderedLine},
};
use tracing::{debug, info};

use crate::{
    pacing::{scaled_millis, Pacer, PacingProfile, TypingSpeed},
    session::SessionState,
};

/// A session whose boot sequence has completed. Only [`Sequencer::run`]
/// produces one, so a dispatcher can never start before the animation ends.
pub struct BootedSession {
    pub(crate) state: SessionState,
}

impl BootedSession {
    pub fn state(&self) -> &SessionState {
        &self.state
    }
}

pub struct Sequencer<P: Pacer> {
    script: BootScript,
    pacing: PacingProfile,
    pace_scale: f64,
    rng: StdRng,
    pacer: P,
}

impl<P: Pacer> Sequencer<P> {
    pub fn new(script: BootScript, pacer: P) -> Self {
        Self {
            script,
            pacing: PacingProfile::default(),
            pace_scale: 1.0,
            rng: StdRng::from_entropy(),
            pacer,
        }
    }

    pub fn with_pacing(mut self, pacing: PacingProfile) -> Self {
        self.pacing = pacing;
        self
    }

    pub fn with_pace_scale(mut self, pace_scale: f64) -> Self {
        self.pace_scale = pace_scale;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// Plays the whole script into `state`, then opens the first input.
    pub async fn run(self, mut state: SessionState) -> BootedSession {
        let Self {
            script,
            pacing,
            pace_scale,
            rng,
            pacer,
        } = self;
        info!(sections = script.sections.len(), "boot sequence started");

        let mut reveal = Reveal {
            state: &mut state,
            pacing: &pacing,
            pace_scale,
            rng,
            pacer: &pacer,
        };
        reveal.state.set_animating(true);

        if let Some(greeting) = &script.greeting {
            reveal.greeting(greeting).await;
        }
        for (index, section) in script.sections.iter().enumerate() {
            debug!(section = index, "revealing section");
            reveal.state.emit(RenderEvent::BlockStarted { section: index });
            match section {
                ContentSection::Ascii { text } => reveal.ascii(text).await,
                ContentSection::Command { command, payload } => {
                    reveal.command(command, payload).await
                }
            }
            reveal.state.emit(RenderEvent::BlockFinished { section: index });
            reveal.state.emit(RenderEvent::Scroll);
            reveal.pause(pacing.pauses.after_section).await;
        }

        state.set_animating(false);
        let slot = state.replace_input();
        state.emit(RenderEvent::Scroll);
        info!(%slot, "boot sequence finished");
        BootedSession { state }
    }
}

struct Reveal<'a, P: Pacer> {
    state: &'a mut SessionState,
    pacing: &'a PacingProfile,
    pace_scale: f64,
    rng: StdRng,
    pacer: &'a P,
}

impl<P: Pacer> Reveal<'_, P> {
    async fn pause(&mut self, millis: u64) {
        self.state.emit(RenderEvent::Pause { millis });
        self.pacer
            .pause(scaled_millis(millis as f64, self.pace_scale))
            .await;
    }

    async fn step(&mut self, speed: TypingSpeed) {
        let delay = speed.sample(&mut self.rng, self.pace_scale);
        self.pacer.pause(delay).await;
    }

    /// Shows the empty line, then one character per step: `len + 1` steps.
    async fn type_chars(&mut self, text: &str, speed: TypingSpeed) {
        self.step(speed).await;
        for ch in text.chars() {
            self.state.emit(RenderEvent::TypeChar(ch));
            self.step(speed).await;
        }
    }

    async fn type_line(&mut self, style: LineStyle, text: &str, speed: TypingSpeed) {
        self.state.emit(RenderEvent::LineStarted { style });
        self.type_chars(text, speed).await;
    }

    fn static_line(&mut self, line: RenderedLine) {
        self.state.emit(RenderEvent::StaticLine(line));
    }

    async fn greeting(&mut self, greeting: &Greeting) {
        let pauses = &self.pacing.pauses;
        let (before, after_prompt, after_response, before_sections) = (
            pauses.before_greeting,
            pauses.after_greeting_prompt,
            pauses.after_greeting_response,
            pauses.before_sections,
        );

        self.pause(before).await;
        self.state.emit(RenderEvent::HeaderLineStarted {
            style: LineStyle::Prompt,
        });
        self.type_chars(&greeting.command, self.pacing.greeting_prompt)
            .await;
        self.pause(after_prompt).await;
        self.static_line(RenderedLine::text(
            LineStyle::GreetingResponse,
            greeting.response.as_str(),
        ));
        self.pause(after_response).await;
        self.pause(before_sections).await;
    }

    async fn ascii(&mut self, text: &str) {
        for line in text.trim().split('\n') {
            self.type_line(LineStyle::Ascii, line, self.pacing.ascii_line)
                .await;
            self.state.emit(RenderEvent::Scroll);
            self.pause(self.pacing.pauses.after_ascii_line).await;
        }
    }

    async fn command(&mut self, command: &str, payload: &Payload) {
        self.type_line(LineStyle::Prompt, command, self.pacing.command_echo)
            .await;
        self.pause(self.pacing.pauses.after_command_echo).await;

        match payload {
            Payload::Lines(lines) => {
                for line in lines {
                    self.type_line(LineStyle::Prose, line, self.pacing.prose_line)
                        .await;
                    self.state.emit(RenderEvent::Scroll);
                    self.pause(self.pacing.pauses.after_prose_line).await;
                }
            }
            Payload::Records(records) => {
                for record in records {
                    self.static_line(RenderedLine::empty(LineStyle::Separator));
                    match record {
                        Record::Paper(paper) => self.paper(paper).await,
                        Record::Project(project) => self.project(project).await,
                    }
                    self.state.emit(RenderEvent::Scroll);
                    self.pause(self.pacing.pauses.after_card).await;
                }
            }
            Payload::Categories(categories) => {
                for category in categories {
                    self.category(category).await;
                }
            }
            Payload::Preformatted(blob) => {
                self.type_line(LineStyle::Preformatted, blob, self.pacing.preformatted)
                    .await;
                self.state.emit(RenderEvent::Scroll);
            }
        }
    }

    async fn paper(&mut self, paper: &Paper) {
        let detail = self.pacing.paper_detail;
        self.type_line(LineStyle::PaperTitle, &paper.title, self.pacing.paper_title)
            .await;
        self.type_line(LineStyle::PaperAuthors, &paper.authors, detail)
            .await;
        self.type_line(LineStyle::PaperVenue, &paper.venue, detail)
            .await;
        self.type_line(LineStyle::PaperDescription, &paper.description, detail)
            .await;

        self.static_line(RenderedLine::link("[arxiv]", paper.link.as_str()));
        if let Some(github) = &paper.github {
            self.static_line(RenderedLine::link("[github]", github.as_str()));
        }
        self.static_line(RenderedLine::text(LineStyle::Tags, paper.tags.as_str()));
    }

    async fn project(&mut self, project: &Project) {
        let detail = self.pacing.project_detail;
        self.type_line(LineStyle::ProjectName, &project.name, self.pacing.project_name)
            .await;
        self.type_line(LineStyle::ProjectDescription, &project.description, detail)
            .await;
        self.type_line(LineStyle::ProjectTech, &project.tech, detail)
            .await;
    }

    async fn category(&mut self, category: &Category) {
        let pauses = &self.pacing.pauses;
        let (after_header, after_item, after_category) = (
            pauses.after_category_header,
            pauses.after_category_item,
            pauses.after_category,
        );

        self.static_line(RenderedLine::empty(LineStyle::Separator));
        self.type_line(
            LineStyle::CategoryHeader,
            &category.category,
            self.pacing.category_header,
        )
        .await;
        self.pause(after_header).await;
        for item in &category.items {
            self.type_line(LineStyle::CategoryItem, item, self.pacing.category_item)
                .await;
            self.pause(after_item).await;
        }
        self.pause(after_category).await;
    }
}

#[cfg(test)]
#[path = "tests/sequencer_tests.rs"]
mod tests;
