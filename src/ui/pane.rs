use ratatui::buffer::Buffer;
use ratatui::layout::Rect;

use super::{Action, InputEvent, Keymap};

/// A full-screen view driven by the main loop.
///
/// Keys bound in `keymap()` arrive as named actions; everything else is
/// passed through `handle_raw_input`.
pub trait Pane {
    fn id(&self) -> &'static str;
    fn handle_action(&mut self, action: &str, event: &InputEvent) -> Action;
    fn handle_raw_input(&mut self, event: &InputEvent) -> Action;
    fn render(&mut self, area: Rect, buf: &mut Buffer);
    fn keymap(&self) -> &Keymap;
}
