use serde::{Deserialize, Serialize};

use super::param::{ParamId, ParamValue};

/// The full collection of current values for a schema.
///
/// Lookup is by `ParamId`; order is kept as given and carried through export.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Model {
    #[serde(rename = "paramValues")]
    pub param_values: Vec<ParamValue>,
}

impl Model {
    pub fn new(param_values: Vec<ParamValue>) -> Self {
        Self { param_values }
    }

    /// First value whose `param_id` matches, in model order
    pub fn find(&self, id: ParamId) -> Option<&ParamValue> {
        self.param_values.iter().find(|pv| pv.param_id() == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_returns_first_match() {
        let model = Model::new(vec![
            ParamValue::string(ParamId::new(1), "first"),
            ParamValue::string(ParamId::new(2), "other"),
            ParamValue::string(ParamId::new(1), "second"),
        ]);
        assert_eq!(
            model.find(ParamId::new(1)),
            Some(&ParamValue::string(ParamId::new(1), "first"))
        );
        assert_eq!(model.find(ParamId::new(9)), None);
    }

    #[test]
    fn model_json_uses_param_values_key() {
        let json = r#"{"paramValues":[{"paramId":1,"type":"string","value":"Ivan"}]}"#;
        let model: Model = serde_json::from_str(json).unwrap();
        assert_eq!(model, Model::new(vec![ParamValue::string(ParamId::new(1), "Ivan")]));
    }
}
