use std::collections::HashMap;
use std::path::{Path, PathBuf};

use log::warn;
use serde::Deserialize;

use super::keymap::{KeyBinding, KeyPattern, Keymap};
use super::KeyCode;

/// Raw TOML structure for the keybindings file
#[derive(Deserialize)]
struct KeybindingConfig {
    #[allow(dead_code)]
    version: u32,
    layers: HashMap<String, LayerConfig>,
}

#[derive(Deserialize)]
struct LayerConfig {
    bindings: Vec<RawBinding>,
}

/// A single binding entry from TOML
#[derive(Deserialize)]
struct RawBinding {
    key: String,
    action: String,
    description: String,
}

/// Intern a String into a &'static str.
/// These are loaded once at startup and never freed.
fn intern(s: String) -> &'static str {
    Box::leak(s.into_boxed_str())
}

/// Parse a key notation string into a KeyPattern.
///
/// Supported formats:
/// - `"q"` → Char('q')
/// - `"Up"` → Key(KeyCode::Up)
/// - `"Ctrl+s"` → Ctrl('s')
/// - `"Alt+x"` → Alt('x')
/// - `"Ctrl+Left"` → CtrlKey(KeyCode::Left)
/// - `"Shift+Right"` → ShiftKey(KeyCode::Right)
/// - `"F1"` → Key(KeyCode::F(1))
fn parse_key(s: &str) -> Option<KeyPattern> {
    if let Some(rest) = s.strip_prefix("Ctrl+") {
        match single_char(rest) {
            Some(c) => Some(KeyPattern::Ctrl(c)),
            None => parse_named_key(rest).map(KeyPattern::CtrlKey),
        }
    } else if let Some(rest) = s.strip_prefix("Alt+") {
        single_char(rest).map(KeyPattern::Alt)
    } else if let Some(rest) = s.strip_prefix("Shift+") {
        parse_named_key(rest).map(KeyPattern::ShiftKey)
    } else if let Some(c) = single_char(s) {
        Some(KeyPattern::Char(c))
    } else if s == "Space" {
        Some(KeyPattern::Char(' '))
    } else {
        parse_named_key(s).map(KeyPattern::Key)
    }
}

fn single_char(s: &str) -> Option<char> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

/// Parse a named key string (e.g., "Up", "Enter", "F1") into a KeyCode
fn parse_named_key(s: &str) -> Option<KeyCode> {
    let key = match s {
        "Up" => KeyCode::Up,
        "Down" => KeyCode::Down,
        "Left" => KeyCode::Left,
        "Right" => KeyCode::Right,
        "Enter" => KeyCode::Enter,
        "Escape" => KeyCode::Escape,
        "Backspace" => KeyCode::Backspace,
        "Tab" => KeyCode::Tab,
        "BackTab" => KeyCode::BackTab,
        "Home" => KeyCode::Home,
        "End" => KeyCode::End,
        "PageUp" => KeyCode::PageUp,
        "PageDown" => KeyCode::PageDown,
        "Insert" => KeyCode::Insert,
        "Delete" => KeyCode::Delete,
        _ => {
            let n = s.strip_prefix('F')?.parse::<u8>().ok()?;
            KeyCode::F(n)
        }
    };
    Some(key)
}

/// Embedded default keybindings TOML
const DEFAULT_KEYBINDINGS: &str = include_str!("../../keybindings.toml");

/// Load keybindings: embedded default, optionally merged with the user
/// override. Returns one keymap per layer ("global", "params_editor").
pub fn load_keybindings() -> HashMap<String, Keymap> {
    let mut config: KeybindingConfig =
        toml::from_str(DEFAULT_KEYBINDINGS).expect("Failed to parse embedded keybindings.toml");

    if let Some(path) = user_keybindings_path() {
        if let Some(user_config) = read_user_config(&path) {
            merge_config(&mut config, user_config);
        }
    }

    build_keymaps(&config.layers)
}

fn user_keybindings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("paramform").join("keybindings.toml"))
}

fn read_user_config(path: &Path) -> Option<KeybindingConfig> {
    if !path.exists() {
        return None;
    }
    let contents = std::fs::read_to_string(path)
        .map_err(|e| warn!("Failed to read {}: {}", path.display(), e))
        .ok()?;
    toml::from_str::<KeybindingConfig>(&contents)
        .map_err(|e| warn!("Ignoring invalid {}: {}", path.display(), e))
        .ok()
}

/// Merge user config into the base config.
/// User layer entries fully replace the default layer entries.
fn merge_config(base: &mut KeybindingConfig, user: KeybindingConfig) {
    for (layer_id, layer_config) in user.layers {
        base.layers.insert(layer_id, layer_config);
    }
}

fn build_bindings(raw: &[RawBinding]) -> Vec<KeyBinding> {
    raw.iter()
        .filter_map(|b| {
            let Some(pattern) = parse_key(&b.key) else {
                warn!("Unknown key '{}' for action '{}'; binding skipped", b.key, b.action);
                return None;
            };
            Some(KeyBinding {
                pattern,
                action: intern(b.action.clone()),
                description: intern(b.description.clone()),
            })
        })
        .collect()
}

fn build_keymaps(layers: &HashMap<String, LayerConfig>) -> HashMap<String, Keymap> {
    layers
        .iter()
        .map(|(name, config)| {
            (
                name.clone(),
                Keymap::from_bindings(build_bindings(&config.bindings)),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::{InputEvent, Modifiers};

    #[test]
    fn test_parse_key_char() {
        assert_eq!(parse_key("q"), Some(KeyPattern::Char('q')));
        assert_eq!(parse_key("+"), Some(KeyPattern::Char('+')));
    }

    #[test]
    fn test_parse_key_named() {
        assert_eq!(parse_key("Up"), Some(KeyPattern::Key(KeyCode::Up)));
        assert_eq!(parse_key("BackTab"), Some(KeyPattern::Key(KeyCode::BackTab)));
        assert_eq!(parse_key("Space"), Some(KeyPattern::Char(' ')));
    }

    #[test]
    fn test_parse_key_modifiers() {
        assert_eq!(parse_key("Ctrl+s"), Some(KeyPattern::Ctrl('s')));
        assert_eq!(parse_key("Alt+x"), Some(KeyPattern::Alt('x')));
        assert_eq!(parse_key("Ctrl+Left"), Some(KeyPattern::CtrlKey(KeyCode::Left)));
        assert_eq!(parse_key("Shift+Right"), Some(KeyPattern::ShiftKey(KeyCode::Right)));
    }

    #[test]
    fn test_parse_key_f_keys() {
        assert_eq!(parse_key("F1"), Some(KeyPattern::Key(KeyCode::F(1))));
        assert_eq!(parse_key("F12"), Some(KeyPattern::Key(KeyCode::F(12))));
    }

    #[test]
    fn test_parse_key_unknown() {
        assert_eq!(parse_key("Hyper"), None);
        assert_eq!(parse_key("Fx"), None);
    }

    #[test]
    fn test_embedded_keybindings() {
        let config: KeybindingConfig = toml::from_str(DEFAULT_KEYBINDINGS).unwrap();
        let keymaps = build_keymaps(&config.layers);

        let global = &keymaps["global"];
        assert_eq!(
            global.lookup(&InputEvent::new(KeyCode::Char('s'), Modifiers::ctrl())),
            Some("save")
        );
        assert_eq!(
            global.lookup(&InputEvent::new(KeyCode::Char('q'), Modifiers::ctrl())),
            Some("quit")
        );

        let editor = &keymaps["params_editor"];
        assert_eq!(editor.lookup(&InputEvent::key(KeyCode::Tab)), Some("next"));
        assert_eq!(editor.lookup(&InputEvent::key(KeyCode::Up)), Some("prev"));
        // Plain characters must reach the fields
        assert_eq!(editor.lookup(&InputEvent::key(KeyCode::Char('q'))), None);
    }

    #[test]
    fn test_shift_tab_from_terminal_moves_back() {
        use crossterm::event::{KeyCode as CtKeyCode, KeyEvent, KeyModifiers};

        let config: KeybindingConfig = toml::from_str(DEFAULT_KEYBINDINGS).unwrap();
        let keymaps = build_keymaps(&config.layers);

        let ct = KeyEvent::new(CtKeyCode::BackTab, KeyModifiers::SHIFT);
        let event = crate::ui::rat_compat::from_crossterm_key_event(&ct).unwrap();
        assert_eq!(keymaps["params_editor"].lookup(&event), Some("prev"));
    }

    #[test]
    fn test_user_layer_replaces_default() {
        let mut base: KeybindingConfig = toml::from_str(DEFAULT_KEYBINDINGS).unwrap();
        let user: KeybindingConfig = toml::from_str(
            r#"
            version = 1
            [layers.global]
            bindings = [{ key = "F2", action = "save", description = "Save" }]
            "#,
        )
        .unwrap();
        merge_config(&mut base, user);

        let keymaps = build_keymaps(&base.layers);
        let global = &keymaps["global"];
        assert_eq!(global.bindings().len(), 1);
        assert_eq!(global.lookup(&InputEvent::key(KeyCode::F(2))), Some("save"));
        assert!(keymaps.contains_key("params_editor"));
    }
}
