use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::StatefulWidget;

use log::warn;
use rat_event::{HandleEvent, Regular};
use rat_widget::focus::HasFocus;
use rat_widget::number_input::{NumberInput as RatNumberInput, NumberInputState};

use crate::ui::input::InputEvent;
use crate::ui::rat_compat::{outcome_consumed, to_crossterm_key_event};
use crate::ui::theme::FormTheme;

/// A numeric input backed by rat-widget NumberInput.
pub struct NumericInput {
    state: NumberInputState,
}

impl NumericInput {
    pub fn new(pattern: &str) -> Self {
        Self {
            state: NumberInputState::new_pattern(pattern).expect("valid number format pattern"),
        }
    }

    /// Decimal with sixteen integer and two fractional digits
    pub fn float() -> Self {
        Self::new("###############0.00")
    }

    pub fn value_f64(&self) -> Option<f64> {
        self.state.value::<f64>().ok()
    }

    /// Show `val`. Returns false, leaving the old text, if the pattern
    /// can't hold it.
    pub fn set_value_f64(&mut self, val: f64) -> bool {
        match self.state.set_value(val) {
            Ok(()) => true,
            Err(e) => {
                warn!("number {} does not fit the input pattern: {:?}", val, e);
                false
            }
        }
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.state.focus().set(focused);
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

    pub fn render_buf(&mut self, buf: &mut Buffer, x: u16, y: u16, width: u16) -> u16 {
        let widget = RatNumberInput::new()
            .style(FormTheme::number_input_style())
            .focus_style(FormTheme::number_input_focus_style())
            .select_style(FormTheme::number_input_select_style());

        let area = Rect::new(x, y, width, 1);
        widget.render(area, buf, &mut self.state);
        1
    }
}
