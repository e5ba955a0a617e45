use ratatui::buffer::Buffer;

use super::ParamField;
use crate::dispatch::fields::{FieldBinding, NumberBinding, ParamUpdate};
use crate::state::{ParamId, ParamKind};
use crate::ui::input::InputEvent;
use crate::ui::widgets::NumericInput;

/// Numeric field. Reports the parsed number after each edit that changes it.
/// `min`/`max` from the schema are carried in the binding but not applied.
pub struct NumberField {
    binding: NumberBinding,
    input: NumericInput,
}

impl NumberField {
    pub fn new(binding: NumberBinding) -> Self {
        let mut input = NumericInput::float();
        input.set_value_f64(binding.value);
        Self { binding, input }
    }
}

impl ParamField for NumberField {
    fn id(&self) -> ParamId {
        self.binding.id
    }

    fn kind(&self) -> ParamKind {
        ParamKind::Number
    }

    fn label(&self) -> &str {
        &self.binding.label
    }

    fn sync(&mut self, binding: &FieldBinding) {
        if let FieldBinding::Number(b) = binding {
            if self.input.value_f64() != Some(b.value) {
                self.input.set_value_f64(b.value);
            }
            self.binding = b.clone();
        }
    }

    fn set_focused(&mut self, focused: bool) {
        self.input.set_focused(focused);
    }

    fn handle_input(&mut self, event: &InputEvent) -> Option<ParamUpdate> {
        let before = self.input.value_f64();
        if !self.input.handle_input(event) {
            return None;
        }
        // Cursor moves are consumed too; only a changed number is an edit
        let value = self.input.value_f64()?;
        if Some(value) == before || value == self.binding.value {
            return None;
        }
        self.binding.value = value;
        Some(self.binding.update(value))
    }

    fn display_value(&self) -> String {
        format!("{}", self.binding.value)
    }

    fn render_buf(&mut self, buf: &mut Buffer, x: u16, y: u16, width: u16) -> u16 {
        self.input.render_buf(buf, x, y, width)
    }
}
