pub mod backend;
pub mod fields;
pub mod input;
pub mod keybindings;
pub mod keymap;
pub mod layout_helpers;
pub mod pane;
pub mod rat_compat;
pub mod style;
pub mod theme;
pub mod widgets;

use crate::dispatch::fields::ParamUpdate;

pub use backend::RatatuiBackend;
pub use input::{AppEvent, InputEvent, KeyCode, Modifiers};
pub use keymap::{KeyBinding, KeyPattern, Keymap};
pub use pane::Pane;
pub use style::{Color, Style};

/// Actions represent user intentions; panes return them, `dispatch` applies them
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    None,
    Quit,
    /// Take a snapshot of the current values and hand it to the host
    Export,
    UpdateParam(ParamUpdate),
}
