pub mod model;
pub mod param;

pub use model::Model;
pub use param::{FieldValue, Param, ParamId, ParamKind, ParamValue, SelectValue};
