pub mod fields;

use log::{debug, info, warn};

use crate::panes::ParamsEditorPane;
use crate::state::Model;
use crate::ui::Action;

/// Snapshots the host has pulled from the editor, oldest first
#[derive(Debug, Default)]
pub struct ExportLog {
    exports: Vec<Model>,
}

impl ExportLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, model: Model) {
        match serde_json::to_string(&model) {
            Ok(json) => info!("exported model: {}", json),
            Err(e) => warn!("exported model could not be serialized: {}", e),
        }
        self.exports.push(model);
    }

    pub fn last(&self) -> Option<&Model> {
        self.exports.last()
    }

    pub fn len(&self) -> usize {
        self.exports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exports.is_empty()
    }
}

/// Dispatch an action. Returns true if the app should quit.
pub fn dispatch_action(
    action: &Action,
    pane: &mut ParamsEditorPane,
    exports: &mut ExportLog,
) -> bool {
    match action {
        Action::None => {}
        Action::Quit => return true,
        Action::Export => {
            let model = pane.get_model();
            let count = model.param_values.len();
            exports.record(model);
            pane.set_status(&format!("Saved {} values", count));
        }
        Action::UpdateParam(update) => {
            if !pane.apply_update(update.clone()) {
                debug!("update for param {} changed nothing", update.id);
            }
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch::fields::ParamUpdate;
    use crate::editor::ParamsEditor;
    use crate::state::{FieldValue, Param, ParamId, ParamValue};
    use crate::ui::Keymap;

    fn pane() -> ParamsEditorPane {
        let editor = ParamsEditor::new(
            vec![Param::string(ParamId::new(1), "Name")],
            Model::new(vec![ParamValue::string(ParamId::new(1), "Ivan")]),
        )
        .unwrap();
        ParamsEditorPane::new(Keymap::new(), editor)
    }

    #[test]
    fn quit_stops_the_loop() {
        let mut pane = pane();
        let mut exports = ExportLog::new();
        assert!(dispatch_action(&Action::Quit, &mut pane, &mut exports));
        assert!(!dispatch_action(&Action::None, &mut pane, &mut exports));
    }

    #[test]
    fn export_records_current_snapshot() {
        let mut pane = pane();
        let mut exports = ExportLog::new();

        let update = ParamUpdate::new(ParamId::new(1), FieldValue::String("Petr".into()));
        dispatch_action(&Action::UpdateParam(update), &mut pane, &mut exports);
        dispatch_action(&Action::Export, &mut pane, &mut exports);

        assert_eq!(exports.len(), 1);
        assert_eq!(
            exports.last(),
            Some(&Model::new(vec![ParamValue::string(ParamId::new(1), "Petr")]))
        );
    }
}
