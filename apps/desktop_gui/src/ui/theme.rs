use eframe::egui::{self, Color32, RichText};
use shared::protocol::{LineStyle, ResultKind};

pub const BACKGROUND: Color32 = Color32::from_rgb(0x0c, 0x0c, 0x0c);
pub const FOREGROUND: Color32 = Color32::from_rgb(0xcc, 0xcc, 0xcc);
pub const PROMPT: Color32 = Color32::from_rgb(0x4e, 0xc9, 0x4e);
pub const ACCENT: Color32 = Color32::from_rgb(0xf0, 0xc6, 0x74);
pub const LINK: Color32 = Color32::from_rgb(0x5f, 0xb3, 0xf9);
pub const MUTED: Color32 = Color32::from_rgb(0x80, 0x80, 0x80);
pub const ERROR: Color32 = Color32::from_rgb(0xf1, 0x4c, 0x4c);

pub const BLOCK_GAP: f32 = 10.0;
pub const CARD_GAP: f32 = 6.0;
pub const BULLET: &str = "▶";

pub fn line_color(style: LineStyle) -> Color32 {
    match style {
        LineStyle::Prompt => PROMPT,
        LineStyle::Ascii | LineStyle::GreetingResponse => PROMPT,
        LineStyle::PaperTitle | LineStyle::ProjectName | LineStyle::CategoryHeader => ACCENT,
        LineStyle::PaperAuthors
        | LineStyle::PaperVenue
        | LineStyle::ProjectTech
        | LineStyle::Tags => MUTED,
        LineStyle::Link => LINK,
        _ => FOREGROUND,
    }
}

pub fn result_color(kind: ResultKind) -> Color32 {
    match kind {
        ResultKind::Plain => FOREGROUND,
        ResultKind::Error => ERROR,
        ResultKind::Success => PROMPT,
    }
}

pub fn styled(style: LineStyle, text: &str) -> RichText {
    let text = match style {
        LineStyle::CategoryItem => format!("  {BULLET} {text}"),
        _ => text.to_string(),
    };
    let rich = RichText::new(text).monospace().color(line_color(style));
    match style {
        LineStyle::PaperTitle | LineStyle::ProjectName | LineStyle::CategoryHeader => rich.strong(),
        LineStyle::PaperVenue | LineStyle::Tags => rich.italics(),
        _ => rich,
    }
}

pub fn prompt_text(prompt: &str) -> RichText {
    RichText::new(prompt).monospace().color(PROMPT).strong()
}

pub fn terminal_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(BACKGROUND)
        .inner_margin(egui::Margin::same(16))
}

pub fn apply(ctx: &egui::Context) {
    let mut visuals = egui::Visuals::dark();
    visuals.panel_fill = BACKGROUND;
    visuals.window_fill = BACKGROUND;
    visuals.extreme_bg_color = BACKGROUND;
    visuals.override_text_color = Some(FOREGROUND);
    ctx.set_visuals(visuals);
}
