//! One field per parameter kind.
//!
//! A field shows the current value of its parameter and turns key presses
//! into `ParamUpdate`s addressed to that parameter. It never writes the
//! model itself; the update travels up to the editor, and the field is
//! re-synced from the next binding.

mod number_field;
mod select_field;
mod string_field;

use ratatui::buffer::Buffer;

use crate::dispatch::fields::{FieldBinding, ParamUpdate};
use crate::state::{ParamId, ParamKind};
use crate::ui::input::InputEvent;

pub use number_field::NumberField;
pub use select_field::SelectField;
pub use string_field::StringField;

pub trait ParamField {
    fn id(&self) -> ParamId;
    fn kind(&self) -> ParamKind;
    fn label(&self) -> &str;

    /// Re-seed from the current binding. Leaves the editing state alone when
    /// the value already matches.
    fn sync(&mut self, binding: &FieldBinding);

    fn set_focused(&mut self, focused: bool);

    fn handle_input(&mut self, event: &InputEvent) -> Option<ParamUpdate>;

    /// Reset to an empty value, if the kind has one
    fn clear(&mut self) -> Option<ParamUpdate> {
        None
    }

    /// Text currently shown in the field
    fn display_value(&self) -> String;

    fn render_buf(&mut self, buf: &mut Buffer, x: u16, y: u16, width: u16) -> u16;
}

/// Build the field matching a binding's kind
pub fn build_field(binding: &FieldBinding) -> Box<dyn ParamField> {
    match binding {
        FieldBinding::String(b) => Box::new(StringField::new(b.clone())),
        FieldBinding::Select(b) => Box::new(SelectField::new(b.clone())),
        FieldBinding::Number(b) => Box::new(NumberField::new(b.clone())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch::fields::{NumberBinding, SelectBinding, StringBinding};
    use crate::state::SelectValue;

    #[test]
    fn build_field_follows_binding_kind() {
        let bindings = [
            FieldBinding::String(StringBinding {
                id: ParamId::new(1),
                label: "Name".into(),
                value: "Ivan".into(),
            }),
            FieldBinding::Select(SelectBinding {
                id: ParamId::new(2),
                label: "Role".into(),
                value: SelectValue::new("a", "Admin"),
                options: vec![SelectValue::new("a", "Admin")],
            }),
            FieldBinding::Number(NumberBinding {
                id: ParamId::new(3),
                label: "Age".into(),
                value: 30.0,
                min: None,
                max: None,
            }),
        ];

        for binding in &bindings {
            let field = build_field(binding);
            assert_eq!(field.id(), binding.id());
            assert_eq!(field.kind(), binding.kind());
            assert_eq!(field.label(), binding.label());
        }
    }
}
