use ratatui::buffer::Buffer;
use ratatui::layout::Rect as RatatuiRect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Widget};

use crate::dispatch::fields::ParamUpdate;
use crate::editor::ParamsEditor;
use crate::error::EditorError;
use crate::state::{Model, ParamId};
use crate::ui::fields::{build_field, ParamField};
use crate::ui::layout_helpers::center_rect;
use crate::ui::theme::FormTheme;
use crate::ui::{Action, Color, InputEvent, Keymap, Pane, Style};

const LABEL_WIDTH: u16 = 20;

/// The form: one row per parameter, in schema order.
pub struct ParamsEditorPane {
    keymap: Keymap,
    editor: ParamsEditor,
    /// One slot per parameter; None where the value's kind doesn't match
    fields: Vec<Option<Box<dyn ParamField>>>,
    focused: Option<usize>,
    status: Option<String>,
    error: Option<EditorError>,
}

impl ParamsEditorPane {
    pub fn new(keymap: Keymap, editor: ParamsEditor) -> Self {
        let mut pane = Self {
            keymap,
            editor,
            fields: Vec::new(),
            focused: None,
            status: None,
            error: None,
        };
        pane.sync_fields();
        let first = pane.focusable().next();
        pane.focused = first;
        pane.apply_focus();
        pane
    }

    pub fn editor(&self) -> &ParamsEditor {
        &self.editor
    }

    /// Snapshot of the current values for the host
    pub fn get_model(&self) -> Model {
        self.editor.get_model()
    }

    /// Apply an edit reported by a field and refresh the fields from the new state
    pub fn apply_update(&mut self, update: ParamUpdate) -> bool {
        let changed = self.editor.apply_update(update);
        if changed {
            self.sync_fields();
        }
        changed
    }

    pub fn set_status(&mut self, status: &str) {
        self.status = Some(status.to_string());
    }

    /// Value shown by the field of `id`, if it is rendered
    pub fn field_value(&self, id: ParamId) -> Option<String> {
        self.field(id).map(|f| f.display_value())
    }

    /// Labels of the rendered fields, top to bottom
    pub fn field_labels(&self) -> Vec<&str> {
        self.fields.iter().flatten().map(|f| f.label()).collect()
    }

    pub fn focused_id(&self) -> Option<ParamId> {
        self.focused
            .and_then(|i| self.fields.get(i))
            .and_then(|slot| slot.as_ref())
            .map(|f| f.id())
    }

    /// Move focus to the field of `id`. Returns false if it isn't rendered.
    pub fn focus(&mut self, id: ParamId) -> bool {
        let Some(index) = self
            .fields
            .iter()
            .position(|slot| slot.as_ref().is_some_and(|f| f.id() == id))
        else {
            return false;
        };
        self.focused = Some(index);
        self.apply_focus();
        true
    }

    fn field(&self, id: ParamId) -> Option<&dyn ParamField> {
        self.fields
            .iter()
            .flatten()
            .find(|f| f.id() == id)
            .map(|f| &**f)
    }

    fn focused_field_mut(&mut self) -> Option<&mut Box<dyn ParamField>> {
        let index = self.focused?;
        self.fields.get_mut(index)?.as_mut()
    }

    fn focusable(&self) -> impl Iterator<Item = usize> + '_ {
        self.fields
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.is_some())
            .map(|(i, _)| i)
    }

    /// Rebuild or re-seed the field widgets from the editor's current state
    fn sync_fields(&mut self) {
        let bindings = match self.editor.bindings() {
            Ok(bindings) => bindings,
            Err(e) => {
                self.error = Some(e);
                return;
            }
        };

        let mut old: Vec<Option<Box<dyn ParamField>>> = std::mem::take(&mut self.fields);
        old.resize_with(bindings.len(), || None);

        self.fields = bindings
            .iter()
            .zip(old)
            .map(|(binding, existing)| {
                let binding = binding.as_ref()?;
                match existing {
                    Some(mut field) if field.id() == binding.id() && field.kind() == binding.kind() => {
                        field.sync(binding);
                        Some(field)
                    }
                    _ => Some(build_field(binding)),
                }
            })
            .collect();
        self.apply_focus();
    }

    fn apply_focus(&mut self) {
        let focused = self.focused;
        for (i, slot) in self.fields.iter_mut().enumerate() {
            if let Some(field) = slot {
                field.set_focused(Some(i) == focused);
            }
        }
    }

    fn move_focus(&mut self, forward: bool) {
        let slots: Vec<usize> = self.focusable().collect();
        if slots.is_empty() {
            return;
        }
        let pos = self
            .focused
            .and_then(|f| slots.iter().position(|&i| i == f));
        let next = match (pos, forward) {
            (Some(p), true) => (p + 1) % slots.len(),
            (Some(p), false) => (p + slots.len() - 1) % slots.len(),
            (None, _) => 0,
        };
        self.focused = Some(slots[next]);
        self.apply_focus();
    }

    fn update_action(update: Option<ParamUpdate>) -> Action {
        match update {
            Some(update) => Action::UpdateParam(update),
            None => Action::None,
        }
    }
}

impl Pane for ParamsEditorPane {
    fn id(&self) -> &'static str {
        "params_editor"
    }

    fn handle_action(&mut self, action: &str, _event: &InputEvent) -> Action {
        match action {
            "next" => {
                self.move_focus(true);
                Action::None
            }
            "prev" => {
                self.move_focus(false);
                Action::None
            }
            "clear" => {
                let update = self.focused_field_mut().and_then(|f| f.clear());
                Self::update_action(update)
            }
            "save" => Action::Export,
            _ => Action::None,
        }
    }

    fn handle_raw_input(&mut self, event: &InputEvent) -> Action {
        self.status = None;
        let update = self.focused_field_mut().and_then(|f| f.handle_input(event));
        Self::update_action(update)
    }

    fn render(&mut self, area: RatatuiRect, buf: &mut Buffer) {
        let width = 64_u16.min(area.width);
        let height = (self.fields.len() as u16 + 6).min(area.height);
        let rect = center_rect(area, width, height);

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Parameter Editor ")
            .border_style(ratatui::style::Style::from(Style::new().fg(Color::CYAN)))
            .title_style(ratatui::style::Style::from(Style::new().fg(Color::CYAN)));
        let inner = block.inner(rect);
        block.render(rect, buf);

        if let Some(ref error) = self.error {
            let err_style = ratatui::style::Style::from(Style::new().fg(Color::ERROR));
            Paragraph::new(Line::from(Span::styled(error.to_string(), err_style)))
                .render(RatatuiRect::new(inner.x + 1, inner.y + 1, inner.width.saturating_sub(2), 1), buf);
            return;
        }

        let label_col = inner.x + 2;
        let value_col = label_col + LABEL_WIDTH;
        let value_width = (inner.x + inner.width).saturating_sub(value_col + 1);

        // Mismatched slots take no row
        let mut y = inner.y + 1;
        for (i, slot) in self.fields.iter_mut().enumerate() {
            let Some(field) = slot else { continue };
            if y >= inner.y + inner.height.saturating_sub(2) {
                break;
            }
            let is_focused = self.focused == Some(i);

            if is_focused {
                if let Some(cell) = buf.cell_mut((inner.x, y)) {
                    cell.set_char('>').set_style(FormTheme::label_style(true));
                }
            }

            let label: String = field.label().chars().take(LABEL_WIDTH as usize - 1).collect();
            Paragraph::new(Line::from(Span::styled(label, FormTheme::label_style(is_focused))))
                .render(RatatuiRect::new(label_col, y, LABEL_WIDTH - 1, 1), buf);

            y += field.render_buf(buf, value_col, y, value_width);
        }

        let footer_y = rect.y + rect.height.saturating_sub(2);
        if footer_y > inner.y {
            let footer = match self.status {
                Some(ref status) => Span::styled(
                    status.clone(),
                    ratatui::style::Style::from(Style::new().fg(Color::OK)),
                ),
                None => Span::styled(
                    "[Tab] Next  [Ctrl+s] Save  [Ctrl+q] Quit",
                    FormTheme::hint_style(),
                ),
            };
            Paragraph::new(Line::from(footer))
                .render(RatatuiRect::new(inner.x + 1, footer_y, inner.width.saturating_sub(2), 1), buf);
        }
    }

    fn keymap(&self) -> &Keymap {
        &self.keymap
    }
}
