use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

use super::ParamField;
use crate::dispatch::fields::{FieldBinding, ParamUpdate, SelectBinding};
use crate::state::{ParamId, ParamKind};
use crate::ui::input::{InputEvent, KeyCode};
use crate::ui::theme::FormTheme;

/// Shows the chosen option; Left/Right step through the declared options.
pub struct SelectField {
    binding: SelectBinding,
    focused: bool,
}

impl SelectField {
    pub fn new(binding: SelectBinding) -> Self {
        Self {
            binding,
            focused: false,
        }
    }

    fn selected_index(&self) -> Option<usize> {
        self.binding
            .options
            .iter()
            .position(|o| *o == self.binding.value)
    }

    fn step(&mut self, forward: bool) -> Option<ParamUpdate> {
        let len = self.binding.options.len();
        if len == 0 {
            return None;
        }
        let next = match (self.selected_index(), forward) {
            (Some(idx), true) => (idx + 1) % len,
            (Some(idx), false) => (idx + len - 1) % len,
            (None, true) => 0,
            (None, false) => len - 1,
        };
        let option = self.binding.options[next].clone();
        if option == self.binding.value {
            return None;
        }
        self.binding.value = option.clone();
        Some(self.binding.update(option))
    }
}

impl ParamField for SelectField {
    fn id(&self) -> ParamId {
        self.binding.id
    }

    fn kind(&self) -> ParamKind {
        ParamKind::Select
    }

    fn label(&self) -> &str {
        &self.binding.label
    }

    fn sync(&mut self, binding: &FieldBinding) {
        if let FieldBinding::Select(b) = binding {
            self.binding = b.clone();
        }
    }

    fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    fn handle_input(&mut self, event: &InputEvent) -> Option<ParamUpdate> {
        if !self.focused {
            return None;
        }
        match event.key {
            KeyCode::Right | KeyCode::Char(' ') => self.step(true),
            KeyCode::Left => self.step(false),
            _ => None,
        }
    }

    fn display_value(&self) -> String {
        if self.binding.options.is_empty() {
            "Not implemented".to_string()
        } else {
            self.binding.value.label.clone()
        }
    }

    fn render_buf(&mut self, buf: &mut Buffer, x: u16, y: u16, width: u16) -> u16 {
        let text = if self.binding.options.is_empty() {
            self.display_value()
        } else {
            format!("< {} >", self.display_value())
        };
        Paragraph::new(Line::from(Span::styled(text, FormTheme::value_style(self.focused))))
            .render(Rect::new(x, y, width, 1), buf);
        1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{FieldValue, SelectValue};

    fn options() -> Vec<SelectValue> {
        vec![
            SelectValue::new("a", "Admin"),
            SelectValue::new("u", "User"),
            SelectValue::new("g", "Guest"),
        ]
    }

    fn field(value: SelectValue) -> SelectField {
        SelectField::new(SelectBinding {
            id: ParamId::new(5),
            label: "Role".into(),
            value,
            options: options(),
        })
    }

    #[test]
    fn right_and_left_wrap_around() {
        let mut f = field(SelectValue::new("g", "Guest"));
        f.set_focused(true);

        let update = f.handle_input(&InputEvent::key(KeyCode::Right));
        assert_eq!(
            update,
            Some(ParamUpdate::new(ParamId::new(5), FieldValue::Select(options()[0].clone())))
        );

        let update = f.handle_input(&InputEvent::key(KeyCode::Left));
        assert_eq!(update.map(|u| u.value), Some(FieldValue::Select(options()[2].clone())));
        assert_eq!(f.display_value(), "Guest");
    }

    #[test]
    fn unfocused_select_ignores_keys() {
        let mut f = field(SelectValue::new("a", "Admin"));
        assert_eq!(f.handle_input(&InputEvent::key(KeyCode::Right)), None);
    }

    #[test]
    fn no_options_is_a_stub() {
        let mut f = SelectField::new(SelectBinding {
            id: ParamId::new(5),
            label: "Role".into(),
            value: SelectValue::new("", ""),
            options: Vec::new(),
        });
        f.set_focused(true);
        assert_eq!(f.display_value(), "Not implemented");
        assert_eq!(f.handle_input(&InputEvent::key(KeyCode::Right)), None);
    }
}
