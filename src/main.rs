use std::fs::{self, File};
use std::path::Path;
use std::time::Duration;

use anyhow::Context;
use log::{info, warn};
use simplelog::WriteLogger;

use paramform::config::Config;
use paramform::dispatch::{dispatch_action, ExportLog};
use paramform::form::FormFile;
use paramform::panes::ParamsEditorPane;
use paramform::ui::{keybindings, Action, AppEvent, InputEvent, Keymap, Pane, RatatuiBackend};
use paramform::ParamsEditor;

fn main() -> anyhow::Result<()> {
    let config = Config::load();
    init_logging(&config);

    let form = match std::env::args().nth(1) {
        Some(path) => FormFile::load(Path::new(&path))
            .with_context(|| format!("Failed to load form {}", path))?,
        None => FormFile::demo(),
    };
    let editor = form.into_editor().context("Form is not usable")?;
    info!("editing {} params", editor.params().len());

    let mut backend = RatatuiBackend::new()?;
    backend.start()?;

    let result = run(&mut backend, editor);

    backend.stop()?;
    let exports = result?;

    if config.print_export_on_exit {
        if let Some(model) = exports.last() {
            println!("{}", serde_json::to_string_pretty(model)?);
        }
    }
    Ok(())
}

fn init_logging(config: &Config) {
    let path = config.log_path();
    if let Some(dir) = path.parent() {
        if let Err(e) = fs::create_dir_all(dir) {
            eprintln!("cannot create log directory {}: {}", dir.display(), e);
        }
    }
    match File::create(&path) {
        Ok(file) => {
            if let Err(e) =
                WriteLogger::init(config.log_level_filter(), simplelog::Config::default(), file)
            {
                eprintln!("logging disabled: {}", e);
            }
        }
        Err(e) => eprintln!("logging disabled: cannot open {}: {}", path.display(), e),
    }
}

fn run(backend: &mut RatatuiBackend, editor: ParamsEditor) -> anyhow::Result<ExportLog> {
    let mut keymaps = keybindings::load_keybindings();
    let global = keymaps.remove("global").unwrap_or_else(Keymap::new);
    let pane_keymap = keymaps.remove("params_editor").unwrap_or_else(Keymap::new);

    let mut pane = ParamsEditorPane::new(pane_keymap, editor);
    let mut exports = ExportLog::new();

    loop {
        backend.draw(|area, buf| pane.render(area, buf))?;

        let event = match backend.poll_event(Duration::from_millis(100))? {
            Some(AppEvent::Key(event)) => event,
            Some(AppEvent::Resize(..)) | None => continue,
        };

        let action = resolve_action(&event, &global, &mut pane);
        if dispatch_action(&action, &mut pane, &mut exports) {
            break;
        }
    }

    Ok(exports)
}

/// Global bindings first, then the pane's own, then raw input to the focused field
fn resolve_action(event: &InputEvent, global: &Keymap, pane: &mut ParamsEditorPane) -> Action {
    if let Some(action) = global.lookup(event) {
        return match action {
            "quit" => Action::Quit,
            "save" => Action::Export,
            other => {
                warn!("unknown global action '{}'", other);
                Action::None
            }
        };
    }
    match pane.keymap().lookup(event) {
        Some(action) => pane.handle_action(action, event),
        None => pane.handle_raw_input(event),
    }
}
