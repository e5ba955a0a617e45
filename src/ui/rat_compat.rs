//! Glue between our input types and the crossterm events rat-widget handles.

use crossterm::event::{
    Event, KeyCode as CtKeyCode, KeyEvent, KeyEventKind, KeyModifiers,
};
use rat_event::Outcome;

use super::input::{InputEvent, KeyCode, Modifiers};

pub fn to_crossterm_key_event(event: &InputEvent) -> Event {
    let code = match event.key {
        KeyCode::Char(c) => CtKeyCode::Char(c),
        KeyCode::Up => CtKeyCode::Up,
        KeyCode::Down => CtKeyCode::Down,
        KeyCode::Left => CtKeyCode::Left,
        KeyCode::Right => CtKeyCode::Right,
        KeyCode::Enter => CtKeyCode::Enter,
        KeyCode::Escape => CtKeyCode::Esc,
        KeyCode::Backspace => CtKeyCode::Backspace,
        KeyCode::Tab => CtKeyCode::Tab,
        KeyCode::BackTab => CtKeyCode::BackTab,
        KeyCode::Home => CtKeyCode::Home,
        KeyCode::End => CtKeyCode::End,
        KeyCode::PageUp => CtKeyCode::PageUp,
        KeyCode::PageDown => CtKeyCode::PageDown,
        KeyCode::Insert => CtKeyCode::Insert,
        KeyCode::Delete => CtKeyCode::Delete,
        KeyCode::F(n) => CtKeyCode::F(n),
    };

    let mut mods = KeyModifiers::NONE;
    if event.modifiers.ctrl {
        mods |= KeyModifiers::CONTROL;
    }
    if event.modifiers.alt {
        mods |= KeyModifiers::ALT;
    }
    if event.modifiers.shift {
        mods |= KeyModifiers::SHIFT;
    }

    Event::Key(KeyEvent::new_with_kind(code, mods, KeyEventKind::Press))
}

/// Translate a crossterm key event from the terminal. Releases and repeats
/// are dropped.
pub fn from_crossterm_key_event(event: &KeyEvent) -> Option<InputEvent> {
    if event.kind != KeyEventKind::Press {
        return None;
    }
    let key = match event.code {
        CtKeyCode::Char(c) => KeyCode::Char(c),
        CtKeyCode::Up => KeyCode::Up,
        CtKeyCode::Down => KeyCode::Down,
        CtKeyCode::Left => KeyCode::Left,
        CtKeyCode::Right => KeyCode::Right,
        CtKeyCode::Enter => KeyCode::Enter,
        CtKeyCode::Esc => KeyCode::Escape,
        CtKeyCode::Backspace => KeyCode::Backspace,
        CtKeyCode::Tab => KeyCode::Tab,
        CtKeyCode::BackTab => KeyCode::BackTab,
        CtKeyCode::Home => KeyCode::Home,
        CtKeyCode::End => KeyCode::End,
        CtKeyCode::PageUp => KeyCode::PageUp,
        CtKeyCode::PageDown => KeyCode::PageDown,
        CtKeyCode::Insert => KeyCode::Insert,
        CtKeyCode::Delete => KeyCode::Delete,
        CtKeyCode::F(n) => KeyCode::F(n),
        _ => return None,
    };
    let modifiers = Modifiers {
        ctrl: event.modifiers.contains(KeyModifiers::CONTROL),
        alt: event.modifiers.contains(KeyModifiers::ALT),
        shift: event.modifiers.contains(KeyModifiers::SHIFT),
    };
    Some(InputEvent::new(key, modifiers))
}

pub fn outcome_consumed(outcome: Outcome) -> bool {
    !matches!(outcome, Outcome::Continue)
}
