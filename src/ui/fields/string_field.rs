use ratatui::buffer::Buffer;

use super::ParamField;
use crate::dispatch::fields::{FieldBinding, ParamUpdate, StringBinding};
use crate::state::{ParamId, ParamKind};
use crate::ui::input::InputEvent;
use crate::ui::widgets::TextInput;

/// Single-line text field. Every edit reports the whole new string.
pub struct StringField {
    binding: StringBinding,
    input: TextInput,
}

impl StringField {
    pub fn new(binding: StringBinding) -> Self {
        let input = TextInput::new().with_value(&binding.value);
        Self { binding, input }
    }
}

impl ParamField for StringField {
    fn id(&self) -> ParamId {
        self.binding.id
    }

    fn kind(&self) -> ParamKind {
        ParamKind::String
    }

    fn label(&self) -> &str {
        &self.binding.label
    }

    fn sync(&mut self, binding: &FieldBinding) {
        if let FieldBinding::String(b) = binding {
            if self.input.value() != b.value {
                self.input.set_value(&b.value);
            }
            self.binding = b.clone();
        }
    }

    fn set_focused(&mut self, focused: bool) {
        self.input.set_focused(focused);
    }

    fn handle_input(&mut self, event: &InputEvent) -> Option<ParamUpdate> {
        let before = self.input.value().to_string();
        if !self.input.handle_input(event) {
            return None;
        }
        let after = self.input.value();
        if after == before {
            return None;
        }
        Some(self.binding.update(after.to_string()))
    }

    fn clear(&mut self) -> Option<ParamUpdate> {
        if self.input.value().is_empty() {
            return None;
        }
        self.input.clear();
        Some(self.binding.update(String::new()))
    }

    fn display_value(&self) -> String {
        self.input.value().to_string()
    }

    fn render_buf(&mut self, buf: &mut Buffer, x: u16, y: u16, width: u16) -> u16 {
        self.input.render_buf(buf, x, y, width)
    }
}
