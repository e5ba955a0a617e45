use super::input::{InputEvent, KeyCode};

/// What a binding matches against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyPattern {
    Char(char),
    Key(KeyCode),
    Ctrl(char),
    Alt(char),
    CtrlKey(KeyCode),
    ShiftKey(KeyCode),
}

impl KeyPattern {
    pub fn matches(&self, event: &InputEvent) -> bool {
        let m = event.modifiers;
        match *self {
            // Shift is implied by the character itself ('G' vs 'g')
            KeyPattern::Char(c) => event.key == KeyCode::Char(c) && !m.ctrl && !m.alt,
            // Terminals report Shift+Tab as BackTab with Shift still set
            KeyPattern::Key(KeyCode::BackTab) => {
                event.key == KeyCode::BackTab && !m.ctrl && !m.alt
            }
            KeyPattern::Key(k) => event.key == k && m.none(),
            KeyPattern::Ctrl(c) => {
                event.key == KeyCode::Char(c.to_ascii_lowercase()) && m.ctrl && !m.alt
            }
            KeyPattern::Alt(c) => event.key == KeyCode::Char(c) && m.alt && !m.ctrl,
            KeyPattern::CtrlKey(k) => event.key == k && m.ctrl && !m.alt,
            KeyPattern::ShiftKey(k) => event.key == k && m.shift && !m.ctrl && !m.alt,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct KeyBinding {
    pub pattern: KeyPattern,
    pub action: &'static str,
    pub description: &'static str,
}

/// Ordered list of bindings; the first match wins
#[derive(Debug, Clone, Default)]
pub struct Keymap {
    bindings: Vec<KeyBinding>,
}

impl Keymap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_bindings(bindings: Vec<KeyBinding>) -> Self {
        Self { bindings }
    }

    pub fn lookup(&self, event: &InputEvent) -> Option<&'static str> {
        self.bindings
            .iter()
            .find(|b| b.pattern.matches(event))
            .map(|b| b.action)
    }

    pub fn bindings(&self) -> &[KeyBinding] {
        &self.bindings
    }
}
