//! UI events - messages from UI layer to App layer

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Events generated from user input in the UI layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiEvent {
    // Counter
    Increment,
    Decrement,
    SetCount(i64),
    Reassign,

    // Provider lifecycle
    Remount,

    // Popups
    ToggleHelp,
    CloseHelp,

    // System
    Quit,
}

/// Convert a key event to a UiEvent based on current UI context
pub fn key_to_ui_event(key: KeyEvent, show_help: bool) -> Option<UiEvent> {
    use crossterm::event::KeyEventKind;

    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        if let KeyCode::Char('c') = key.code {
            return Some(UiEvent::Quit);
        }
    }

    // Any key dismisses the help popup
    if show_help {
        return Some(UiEvent::CloseHelp);
    }

    match key.code {
        KeyCode::Char('q') => Some(UiEvent::Quit),
        KeyCode::Char('?') => Some(UiEvent::ToggleHelp),
        KeyCode::Char('+') | KeyCode::Char('k') | KeyCode::Up => Some(UiEvent::Increment),
        KeyCode::Char('-') | KeyCode::Char('j') | KeyCode::Down => Some(UiEvent::Decrement),
        KeyCode::Char('=') => Some(UiEvent::Reassign),
        KeyCode::Char('r') => Some(UiEvent::Remount),
        KeyCode::Char(c) => c.to_digit(10).map(|d| UiEvent::SetCount(i64::from(d))),
        _ => None,
    }
}
