use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::StatefulWidget;

use rat_event::{HandleEvent, Regular};
use rat_widget::focus::HasFocus;
use rat_widget::text_input::{TextInput as RatTextInput, TextInputState};

use crate::ui::input::InputEvent;
use crate::ui::rat_compat::{outcome_consumed, to_crossterm_key_event};
use crate::ui::theme::FormTheme;

/// A single-line text input backed by rat-widget.
///
/// Text editing, cursor and selection are handled by
/// `rat_widget::text_input`; this wrapper adapts it to our input events.
pub struct TextInput {
    state: TextInputState,
}

impl TextInput {
    pub fn new() -> Self {
        Self {
            state: TextInputState::new(),
        }
    }

    pub fn with_value(mut self, value: &str) -> Self {
        self.state.set_value(value);
        self
    }

    pub fn value(&self) -> &str {
        self.state.text()
    }

    pub fn set_value(&mut self, value: &str) {
        self.state.set_value(value);
    }

    pub fn clear(&mut self) {
        self.state.set_value("");
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.state.focus.set(focused);
    }

    pub fn is_focused(&self) -> bool {
        self.state.is_focused()
    }

    /// Handle input, returns true if the event was consumed
    pub fn handle_input(&mut self, event: &InputEvent) -> bool {
        if !self.state.is_focused() {
            return false;
        }
        let ct_event = to_crossterm_key_event(event);
        let outcome: rat_event::Outcome = self.state.handle(&ct_event, Regular).into();
        outcome_consumed(outcome)
    }

    /// Render the input field into a ratatui buffer at the given position.
    pub fn render_buf(&mut self, buf: &mut Buffer, x: u16, y: u16, width: u16) -> u16 {
        if width == 0 {
            return 1;
        }

        let widget = RatTextInput::new()
            .style(FormTheme::text_input_style())
            .focus_style(FormTheme::text_input_focus_style())
            .select_style(FormTheme::text_input_select_style())
            .cursor_style(FormTheme::text_input_cursor_style());

        let area = Rect::new(x, y, width, 1);
        widget.render(area, buf, &mut self.state);
        1
    }
}

impl Default for TextInput {
    fn default() -> Self {
        Self::new()
    }
}
