use thiserror::Error;

use crate::state::ParamId;

/// Contract violations in the schema/model pair handed to the editor
#[derive(Debug, Error, Clone, PartialEq)]
pub enum EditorError {
    #[error("The model must contain a value for each parameter (missing value for parameter {param_id})")]
    MissingValue { param_id: ParamId },

    #[error("Parameter id {param_id} is declared more than once")]
    DuplicateParam { param_id: ParamId },
}

/// Failures while reading a host form file
#[derive(Debug, Error)]
pub enum FormError {
    #[error("Failed to read form file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid form file: {0}")]
    Json(#[from] serde_json::Error),
}
