use std::time::Duration;

use crossbeam_channel::Receiver;
use eframe::egui::{self, RichText};
use shared::protocol::{LineStyle, RenderedLine, TranscriptEntry};
use terminal_core::{Direction, SessionDispatcher, Transcript};

use crate::{
    controller::{
        events::UiEvent,
        input::{collect_actions, InputAction},
    },
    ui::theme,
};

#[derive(Debug, Clone)]
pub struct StartupConfig {
    pub prompt: String,
}

pub struct PortfolioApp {
    ui_rx: Receiver<UiEvent>,
    prompt: String,
    /// Folded from render events until the session is handed over.
    mirror: Transcript,
    dispatcher: Option<Box<SessionDispatcher>>,
    input: String,
    focus_input: bool,
    status: Option<String>,
}

impl PortfolioApp {
    pub fn new(ui_rx: Receiver<UiEvent>, startup: StartupConfig) -> Self {
        Self {
            ui_rx,
            prompt: startup.prompt,
            mirror: Transcript::new(),
            dispatcher: None,
            input: String::new(),
            focus_input: true,
            status: None,
        }
    }

    fn is_animating(&self) -> bool {
        self.dispatcher
            .as_ref()
            .map_or(true, |dispatcher| dispatcher.is_animating())
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            match event {
                UiEvent::Render(event) => self.mirror.apply(&event),
                UiEvent::SessionReady(dispatcher) => {
                    tracing::info!(
                        commands = dispatcher.registry().len(),
                        "session ready for input"
                    );
                    self.mirror = Transcript::new();
                    self.dispatcher = Some(dispatcher);
                    self.focus_input = true;
                }
                UiEvent::BackendFailed(message) => {
                    tracing::error!("boot worker failed: {message}");
                    self.status = Some(message);
                }
            }
        }
    }

    fn handle_shortcuts(&mut self, ctx: &egui::Context) {
        let actions = ctx.input(|i| collect_actions(&i.events));
        for action in actions {
            self.apply_action(action);
        }
    }

    fn apply_action(&mut self, action: InputAction) {
        if action == InputAction::FocusInput {
            self.focus_input = true;
            return;
        }
        let Some(dispatcher) = self.dispatcher.as_mut() else {
            return;
        };
        match action {
            InputAction::Submit => {
                dispatcher.set_input(self.input.clone());
                dispatcher.submit_active();
                self.input.clear();
                self.focus_input = true;
            }
            InputAction::HistoryUp | InputAction::HistoryDown => {
                let direction = if action == InputAction::HistoryUp {
                    Direction::Up
                } else {
                    Direction::Down
                };
                dispatcher.navigate_history(direction);
                if let Some(active) = dispatcher.active_input() {
                    self.input.clone_from(&active.value);
                }
            }
            InputAction::ClearScreen => {
                dispatcher.clear_transcript();
                self.input.clear();
                self.focus_input = true;
            }
            InputAction::FocusInput => {}
        }
    }

    fn submit_line(&mut self, line: &str) {
        if let Some(dispatcher) = self.dispatcher.as_mut() {
            dispatcher.submit(line);
            self.input.clear();
            self.focus_input = true;
        }
    }

    fn show_footer(&mut self, ctx: &egui::Context) {
        let mut privacy_clicked = false;
        egui::TopBottomPanel::bottom("footer")
            .frame(theme::terminal_frame())
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    if let Some(status) = &self.status {
                        ui.label(RichText::new(status).monospace().color(theme::ERROR));
                    }
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let link = RichText::new("privacy").monospace().small().color(theme::MUTED);
                        privacy_clicked = ui.link(link).clicked();
                    });
                });
            });
        if privacy_clicked {
            self.submit_line("privacy");
        }
    }

    fn show_terminal(&mut self, ctx: &egui::Context) {
        let animating = self.is_animating();
        let Self {
            dispatcher,
            mirror,
            input,
            prompt,
            focus_input,
            ..
        } = self;
        let transcript: &Transcript = match dispatcher.as_deref() {
            Some(dispatcher) => dispatcher.transcript(),
            None => &*mirror,
        };
        let prompt: &str = prompt;
        let mut input_changed = false;

        egui::CentralPanel::default()
            .frame(theme::terminal_frame())
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .id_salt("transcript_scroll")
                    .auto_shrink([false, false])
                    .stick_to_bottom(true)
                    .show(ui, |ui| {
                        for line in transcript.header() {
                            show_line(ui, line, prompt);
                        }
                        for entry in transcript.entries() {
                            match entry {
                                TranscriptEntry::Block(block) => {
                                    ui.add_space(theme::BLOCK_GAP);
                                    for line in &block.lines {
                                        show_line(ui, line, prompt);
                                    }
                                }
                                TranscriptEntry::CommandEcho { line } => {
                                    show_prompted(ui, prompt, line);
                                }
                                TranscriptEntry::Result(result) => {
                                    ui.add(
                                        egui::Label::new(
                                            RichText::new(&result.text)
                                                .monospace()
                                                .color(theme::result_color(result.kind)),
                                        )
                                        .wrap(),
                                    );
                                }
                                TranscriptEntry::Input(slot) if slot.enabled && !animating => {
                                    ui.horizontal(|ui| {
                                        ui.label(theme::prompt_text(prompt));
                                        let response = ui.add(
                                            egui::TextEdit::singleline(&mut *input)
                                                .id_salt(("input", slot.id.0))
                                                .frame(false)
                                                .font(egui::TextStyle::Monospace)
                                                .desired_width(f32::INFINITY),
                                        );
                                        if std::mem::take(&mut *focus_input) {
                                            response.request_focus();
                                        }
                                        input_changed |= response.changed();
                                    });
                                }
                                // submitted slots are shown by their echo line
                                TranscriptEntry::Input(_) => {}
                            }
                        }
                    });
            });

        if input_changed {
            if let Some(dispatcher) = self.dispatcher.as_mut() {
                dispatcher.set_input(self.input.clone());
            }
        }
    }
}

fn show_prompted(ui: &mut egui::Ui, prompt: &str, text: &str) {
    ui.horizontal(|ui| {
        ui.label(theme::prompt_text(prompt));
        ui.label(RichText::new(text).monospace().color(theme::FOREGROUND));
    });
}

fn show_line(ui: &mut egui::Ui, line: &RenderedLine, prompt: &str) {
    match (&line.href, line.style) {
        (Some(href), _) => {
            ui.hyperlink_to(
                RichText::new(&line.text).monospace().color(theme::LINK),
                href,
            );
        }
        (None, LineStyle::Separator) => ui.add_space(theme::CARD_GAP),
        (None, LineStyle::Prompt) => show_prompted(ui, prompt, &line.text),
        (None, style) => {
            ui.add(egui::Label::new(theme::styled(style, &line.text)).wrap());
        }
    }
}

impl eframe::App for PortfolioApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();
        self.handle_shortcuts(ctx);

        self.show_footer(ctx);
        self.show_terminal(ctx);

        if self.is_animating() {
            ctx.request_repaint_after(Duration::from_millis(16));
        } else {
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }
}
