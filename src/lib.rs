//! Typed parameter form editor.
//!
//! A schema of `Param`s and a `Model` of `ParamValue`s go in, one field per
//! parameter comes out, edits flow back through `ParamsEditor`, and the host
//! pulls a deep copy of the values with `ParamsEditor::get_model`.

pub mod config;
pub mod dispatch;
pub mod editor;
pub mod error;
pub mod form;
pub mod panes;
pub mod state;
pub mod ui;

pub use dispatch::fields::{bind_fields, FieldBinding, ParamUpdate};
pub use editor::ParamsEditor;
pub use error::{EditorError, FormError};
pub use state::{FieldValue, Model, Param, ParamId, ParamKind, ParamValue, SelectValue};
