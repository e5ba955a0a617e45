//! Routing of each `(Param, ParamValue)` pair to the field that edits it.

use std::borrow::Borrow;

use log::debug;

use crate::error::EditorError;
use crate::state::{FieldValue, Param, ParamId, ParamKind, ParamValue, SelectValue};

/// A new value reported by a field, addressed to the parameter it edits
#[derive(Debug, Clone, PartialEq)]
pub struct ParamUpdate {
    pub id: ParamId,
    pub value: FieldValue,
}

impl ParamUpdate {
    pub fn new(id: ParamId, value: FieldValue) -> Self {
        Self { id, value }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StringBinding {
    pub id: ParamId,
    pub label: String,
    pub value: String,
}

impl StringBinding {
    pub fn update(&self, value: String) -> ParamUpdate {
        ParamUpdate::new(self.id, FieldValue::String(value))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SelectBinding {
    pub id: ParamId,
    pub label: String,
    pub value: SelectValue,
    pub options: Vec<SelectValue>,
}

impl SelectBinding {
    pub fn update(&self, value: SelectValue) -> ParamUpdate {
        ParamUpdate::new(self.id, FieldValue::Select(value))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NumberBinding {
    pub id: ParamId,
    pub label: String,
    pub value: f64,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl NumberBinding {
    pub fn update(&self, value: f64) -> ParamUpdate {
        ParamUpdate::new(self.id, FieldValue::Number(value))
    }
}

/// Everything a field needs for one render pass: identity, label,
/// current typed value, and the kind-specific props from the schema.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldBinding {
    String(StringBinding),
    Select(SelectBinding),
    Number(NumberBinding),
}

impl FieldBinding {
    pub fn id(&self) -> ParamId {
        match self {
            FieldBinding::String(b) => b.id,
            FieldBinding::Select(b) => b.id,
            FieldBinding::Number(b) => b.id,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            FieldBinding::String(b) => &b.label,
            FieldBinding::Select(b) => &b.label,
            FieldBinding::Number(b) => &b.label,
        }
    }

    pub fn kind(&self) -> ParamKind {
        match self {
            FieldBinding::String(_) => ParamKind::String,
            FieldBinding::Select(_) => ParamKind::Select,
            FieldBinding::Number(_) => ParamKind::Number,
        }
    }

    pub fn value(&self) -> FieldValue {
        match self {
            FieldBinding::String(b) => FieldValue::String(b.value.clone()),
            FieldBinding::Select(b) => FieldValue::Select(b.value.clone()),
            FieldBinding::Number(b) => FieldValue::Number(b.value),
        }
    }
}

/// Pair a parameter with its value. None when the kinds differ.
fn bind(param: &Param, value: &ParamValue) -> Option<FieldBinding> {
    match (param, value) {
        (Param::String { id, name }, ParamValue::String { value, .. }) => {
            Some(FieldBinding::String(StringBinding {
                id: *id,
                label: name.clone(),
                value: value.clone(),
            }))
        }
        (Param::Select { id, name, options }, ParamValue::Select { value, .. }) => {
            Some(FieldBinding::Select(SelectBinding {
                id: *id,
                label: name.clone(),
                value: value.clone(),
                options: options.clone(),
            }))
        }
        (Param::Number { id, name, min, max }, ParamValue::Number { value, .. }) => {
            Some(FieldBinding::Number(NumberBinding {
                id: *id,
                label: name.clone(),
                value: *value,
                min: *min,
                max: *max,
            }))
        }
        _ => None,
    }
}

/// Bind every parameter, in schema order, to its value.
///
/// Returns one slot per parameter. A value of a different kind leaves the
/// slot empty (nothing is rendered for it); a parameter with no value at all
/// fails the whole pass.
pub fn bind_fields<V: Borrow<ParamValue>>(
    params: &[Param],
    values: &[V],
) -> Result<Vec<Option<FieldBinding>>, EditorError> {
    params
        .iter()
        .map(|param| {
            let value = values
                .iter()
                .map(|v| v.borrow())
                .find(|v| v.param_id() == param.id())
                .ok_or(EditorError::MissingValue {
                    param_id: param.id(),
                })?;

            let binding = bind(param, value);
            if binding.is_none() {
                debug!(
                    "param {} is {} but its value is {}; not rendered",
                    param.id(),
                    param.kind(),
                    value.kind()
                );
            }
            Ok(binding)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    fn id(raw: u32) -> ParamId {
        ParamId::new(raw)
    }

    #[test]
    fn binds_in_schema_order() {
        let params = vec![Param::string(id(2), "Email"), Param::string(id(1), "Name")];
        let values = vec![
            ParamValue::string(id(1), "Ivan"),
            ParamValue::string(id(2), "ivan@example.com"),
        ];

        let bindings = bind_fields(&params, &values).unwrap();
        let labels: Vec<&str> = bindings.iter().flatten().map(|b| b.label()).collect();
        assert_eq!(labels, vec!["Email", "Name"]);
        assert_eq!(
            bindings[1].as_ref().map(|b| b.value()),
            Some(FieldValue::String("Ivan".into()))
        );
    }

    #[test]
    fn missing_value_fails() {
        let params = vec![Param::string(id(1), "Field")];
        let values: Vec<ParamValue> = Vec::new();

        let err = bind_fields(&params, &values).unwrap_err();
        assert_eq!(err, EditorError::MissingValue { param_id: id(1) });
        assert!(err
            .to_string()
            .contains("The model must contain a value for each parameter"));
    }

    #[test]
    fn kind_mismatch_leaves_slot_empty() {
        let params = vec![Param::number(id(1), "Age"), Param::string(id(2), "Name")];
        let values = vec![
            ParamValue::string(id(1), "not a number"),
            ParamValue::string(id(2), "Ivan"),
        ];

        let bindings = bind_fields(&params, &values).unwrap();
        assert_eq!(bindings.len(), 2);
        assert!(bindings[0].is_none());
        assert_eq!(bindings[1].as_ref().map(|b| b.id()), Some(id(2)));
    }

    #[test]
    fn first_value_in_model_order_wins() {
        let params = vec![Param::string(id(1), "Name")];
        let values = vec![
            ParamValue::string(id(1), "first"),
            ParamValue::string(id(1), "second"),
        ];

        let bindings = bind_fields(&params, &values).unwrap();
        assert_eq!(
            bindings[0].as_ref().map(|b| b.value()),
            Some(FieldValue::String("first".into()))
        );
    }

    #[test]
    fn select_and_number_carry_schema_props() {
        let options = vec![SelectValue::new("a", "Admin"), SelectValue::new("u", "User")];
        let params = vec![
            Param::select(id(1), "Role", options.clone()),
            Param::Number {
                id: id(2),
                name: "Age".into(),
                min: Some(0.0),
                max: None,
            },
        ];
        let values = vec![
            Rc::new(ParamValue::select(id(1), options[1].clone())),
            Rc::new(ParamValue::number(id(2), 30.0)),
        ];

        let bindings = bind_fields(&params, &values).unwrap();
        match &bindings[0] {
            Some(FieldBinding::Select(b)) => assert_eq!(b.options, options),
            other => panic!("Expected select binding, got {:?}", other),
        }
        match &bindings[1] {
            Some(FieldBinding::Number(b)) => {
                assert_eq!(b.value, 30.0);
                assert_eq!(b.min, Some(0.0));
            }
            other => panic!("Expected number binding, got {:?}", other),
        }
    }

    #[test]
    fn binding_update_is_addressed_to_its_param() {
        let binding = StringBinding {
            id: id(7),
            label: "Name".into(),
            value: String::new(),
        };
        assert_eq!(
            binding.update("Petr".into()),
            ParamUpdate::new(id(7), FieldValue::String("Petr".into()))
        );
    }
}
