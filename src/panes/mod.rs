mod params_editor_pane;

pub use params_editor_pane::ParamsEditorPane;
