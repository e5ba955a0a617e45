use ratatui::style::Style as RatStyle;

use super::style::{Color, Style};

/// Styles handed to rat-widget inputs
pub struct FormTheme;

impl FormTheme {
    pub fn text_input_style() -> RatStyle {
        Style::new().fg(Color::WHITE).bg(Color::FIELD_BG).into()
    }

    pub fn text_input_focus_style() -> RatStyle {
        Style::new().fg(Color::WHITE).bg(Color::SELECTION_BG).into()
    }

    pub fn text_input_select_style() -> RatStyle {
        Style::new().fg(Color::BLACK).bg(Color::CYAN).into()
    }

    pub fn text_input_cursor_style() -> RatStyle {
        Style::new().fg(Color::BLACK).bg(Color::WHITE).into()
    }

    pub fn number_input_style() -> RatStyle {
        Self::text_input_style()
    }

    pub fn number_input_focus_style() -> RatStyle {
        Self::text_input_focus_style()
    }

    pub fn number_input_select_style() -> RatStyle {
        Self::text_input_select_style()
    }

    pub fn label_style(focused: bool) -> RatStyle {
        if focused {
            Style::new().fg(Color::CYAN).bg(Color::SELECTION_BG).bold().into()
        } else {
            Style::new().fg(Color::CYAN).into()
        }
    }

    pub fn value_style(focused: bool) -> RatStyle {
        if focused {
            Style::new().fg(Color::WHITE).bg(Color::SELECTION_BG).into()
        } else {
            Style::new().fg(Color::WHITE).bg(Color::FIELD_BG).into()
        }
    }

    pub fn hint_style() -> RatStyle {
        Style::new().fg(Color::DARK_GRAY).into()
    }
}
