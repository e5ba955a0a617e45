use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a parameter and of the value bound to it.
///
/// Kept apart from plain integers so ids can't be mixed up with indices,
/// counts or other numeric data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParamId(u32);

impl ParamId {
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }
}

impl fmt::Display for ParamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Type tag shared by `Param` and `ParamValue`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamKind {
    String,
    Select,
    Number,
}

impl ParamKind {
    pub const ALL: [ParamKind; 3] = [ParamKind::String, ParamKind::Select, ParamKind::Number];

    pub fn name(&self) -> &'static str {
        match self {
            ParamKind::String => "string",
            ParamKind::Select => "select",
            ParamKind::Number => "number",
        }
    }
}

impl fmt::Display for ParamKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One option of a select parameter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectValue {
    pub value: String,
    pub label: String,
}

impl SelectValue {
    pub fn new(value: &str, label: &str) -> Self {
        Self {
            value: value.to_string(),
            label: label.to_string(),
        }
    }
}

/// Schema entry: identity, display label and kind of one editable field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Param {
    String {
        id: ParamId,
        name: String,
    },
    Select {
        id: ParamId,
        name: String,
        options: Vec<SelectValue>,
    },
    Number {
        id: ParamId,
        name: String,
        // Reserved: carried through but not enforced by any field.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        min: Option<f64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        max: Option<f64>,
    },
}

impl Param {
    pub fn string(id: ParamId, name: &str) -> Self {
        Param::String {
            id,
            name: name.to_string(),
        }
    }

    pub fn select(id: ParamId, name: &str, options: Vec<SelectValue>) -> Self {
        Param::Select {
            id,
            name: name.to_string(),
            options,
        }
    }

    pub fn number(id: ParamId, name: &str) -> Self {
        Param::Number {
            id,
            name: name.to_string(),
            min: None,
            max: None,
        }
    }

    pub fn id(&self) -> ParamId {
        match self {
            Param::String { id, .. } | Param::Select { id, .. } | Param::Number { id, .. } => *id,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Param::String { name, .. } | Param::Select { name, .. } | Param::Number { name, .. } => {
                name
            }
        }
    }

    pub fn kind(&self) -> ParamKind {
        match self {
            Param::String { .. } => ParamKind::String,
            Param::Select { .. } => ParamKind::Select,
            Param::Number { .. } => ParamKind::Number,
        }
    }
}

/// Typed payload of a value, as reported by a field when the user edits it.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    String(String),
    Select(SelectValue),
    Number(f64),
}

impl FieldValue {
    pub fn kind(&self) -> ParamKind {
        match self {
            FieldValue::String(_) => ParamKind::String,
            FieldValue::Select(_) => ParamKind::Select,
            FieldValue::Number(_) => ParamKind::Number,
        }
    }
}

/// Current data for one parameter, tagged with the parameter's kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ParamValue {
    String {
        #[serde(rename = "paramId")]
        param_id: ParamId,
        value: String,
    },
    Select {
        #[serde(rename = "paramId")]
        param_id: ParamId,
        value: SelectValue,
    },
    Number {
        #[serde(rename = "paramId")]
        param_id: ParamId,
        value: f64,
    },
}

impl ParamValue {
    pub fn string(param_id: ParamId, value: &str) -> Self {
        ParamValue::String {
            param_id,
            value: value.to_string(),
        }
    }

    pub fn select(param_id: ParamId, value: SelectValue) -> Self {
        ParamValue::Select { param_id, value }
    }

    pub fn number(param_id: ParamId, value: f64) -> Self {
        ParamValue::Number { param_id, value }
    }

    pub fn param_id(&self) -> ParamId {
        match self {
            ParamValue::String { param_id, .. }
            | ParamValue::Select { param_id, .. }
            | ParamValue::Number { param_id, .. } => *param_id,
        }
    }

    pub fn kind(&self) -> ParamKind {
        match self {
            ParamValue::String { .. } => ParamKind::String,
            ParamValue::Select { .. } => ParamKind::Select,
            ParamValue::Number { .. } => ParamKind::Number,
        }
    }

    pub fn value(&self) -> FieldValue {
        match self {
            ParamValue::String { value, .. } => FieldValue::String(value.clone()),
            ParamValue::Select { value, .. } => FieldValue::Select(value.clone()),
            ParamValue::Number { value, .. } => FieldValue::Number(*value),
        }
    }

    /// Copy of this entry holding `value` instead.
    /// Returns None if the payload is of a different kind.
    pub fn with_value(&self, value: FieldValue) -> Option<ParamValue> {
        let param_id = self.param_id();
        match (self.kind(), value) {
            (ParamKind::String, FieldValue::String(value)) => {
                Some(ParamValue::String { param_id, value })
            }
            (ParamKind::Select, FieldValue::Select(value)) => {
                Some(ParamValue::Select { param_id, value })
            }
            (ParamKind::Number, FieldValue::Number(value)) => {
                Some(ParamValue::Number { param_id, value })
            }
            _ => None,
        }
    }
}
