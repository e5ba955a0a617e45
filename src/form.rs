use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::editor::ParamsEditor;
use crate::error::{EditorError, FormError};
use crate::state::{Model, Param, ParamId, ParamValue};

/// What the host hands the editor: the schema plus the initial values.
///
/// On disk this is `{"params": [...], "model": {"paramValues": [...]}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormFile {
    pub params: Vec<Param>,
    pub model: Model,
}

impl FormFile {
    pub fn load(path: &Path) -> Result<Self, FormError> {
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Built-in form shown when no file is given
    pub fn demo() -> Self {
        Self {
            params: vec![
                Param::string(ParamId::new(1), "Username"),
                Param::string(ParamId::new(2), "Email"),
            ],
            model: Model::new(vec![
                ParamValue::string(ParamId::new(1), "Ivan"),
                ParamValue::string(ParamId::new(2), "ivan@example.com"),
            ]),
        }
    }

    pub fn into_editor(self) -> Result<ParamsEditor, EditorError> {
        ParamsEditor::new(self.params, self.model)
    }
}
