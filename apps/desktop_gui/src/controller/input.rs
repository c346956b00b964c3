//! Keyboard shortcuts understood by the terminal window.

use eframe::egui::{Event, Key, Modifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    Submit,
    HistoryUp,
    HistoryDown,
    ClearScreen,
    FocusInput,
}

pub fn input_action(key: Key, modifiers: Modifiers) -> Option<InputAction> {
    match key {
        Key::Enter if !modifiers.shift => Some(InputAction::Submit),
        Key::ArrowUp => Some(InputAction::HistoryUp),
        Key::ArrowDown => Some(InputAction::HistoryDown),
        Key::L if modifiers.ctrl => Some(InputAction::ClearScreen),
        Key::Escape => Some(InputAction::FocusInput),
        _ => None,
    }
}

/// Actions for every key press in this frame, in order.
pub fn collect_actions(events: &[Event]) -> Vec<InputAction> {
    events
        .iter()
        .filter_map(|event| match event {
            Event::Key {
                key,
                pressed: true,
                modifiers,
                ..
            } => input_action(*key, *modifiers),
            _ => None,
        })
        .collect()
}
