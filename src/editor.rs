use std::collections::HashSet;
use std::rc::Rc;

use log::{debug, warn};

use crate::dispatch::fields::{bind_fields, FieldBinding, ParamUpdate};
use crate::error::EditorError;
use crate::state::{Model, Param, ParamValue};

/// Owns the working copy of one form's values.
///
/// Seeded once from the host's model and diverges from it from then on.
/// Every edit swaps in a new value list; entries that didn't change keep
/// their allocation, so a previous state (and whatever was rendered from it)
/// is never modified.
#[derive(Debug, Clone)]
pub struct ParamsEditor {
    params: Vec<Param>,
    values: Rc<Vec<Rc<ParamValue>>>,
}

impl ParamsEditor {
    /// Take the schema and the initial model.
    ///
    /// Fails if any parameter has no value, or if an id is declared twice.
    pub fn new(params: Vec<Param>, model: Model) -> Result<Self, EditorError> {
        let mut seen = HashSet::new();
        for param in &params {
            if !seen.insert(param.id()) {
                return Err(EditorError::DuplicateParam {
                    param_id: param.id(),
                });
            }
        }

        let values: Vec<Rc<ParamValue>> = model.param_values.into_iter().map(Rc::new).collect();
        bind_fields(&params, &values)?;

        Ok(Self {
            params,
            values: Rc::new(values),
        })
    }

    pub fn params(&self) -> &[Param] {
        &self.params
    }

    /// Current state. Cloning the `Rc` gives a view that later edits won't touch.
    pub fn values(&self) -> Rc<Vec<Rc<ParamValue>>> {
        Rc::clone(&self.values)
    }

    /// Bind the schema against the current state for one render pass.
    pub fn bindings(&self) -> Result<Vec<Option<FieldBinding>>, EditorError> {
        bind_fields(&self.params, self.values.as_slice())
    }

    /// Replace the value of the first entry whose id matches.
    ///
    /// Unknown ids and payloads of the wrong kind leave the state as it was.
    /// Returns true if the state changed.
    pub fn apply_update(&mut self, update: ParamUpdate) -> bool {
        let ParamUpdate { id, value } = update;

        let Some(index) = self.values.iter().position(|pv| pv.param_id() == id) else {
            debug!("update for unknown param {} ignored", id);
            return false;
        };

        let Some(replacement) = self.values[index].with_value(value) else {
            warn!(
                "update for param {} has the wrong kind (expected {}); ignored",
                id,
                self.values[index].kind()
            );
            return false;
        };

        let mut next: Vec<Rc<ParamValue>> = self.values.iter().cloned().collect();
        next[index] = Rc::new(replacement);
        self.values = Rc::new(next);
        true
    }

    /// Independent deep copy of the current state.
    pub fn get_model(&self) -> Model {
        Model::new(self.values.iter().map(|pv| ParamValue::clone(pv)).collect())
    }
}
