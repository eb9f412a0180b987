use serde::Deserialize;
use serde_json::{Map, Value};

pub const RATIOS: &str = "ratios";
pub const RATIOS_VAR: &str = "ratiosvar";
pub const ABS_FITNESS: &str = "absfitness";
pub const ABS_FITNESS_VAR: &str = "absfitnessvar";

/// One experiment's bundle of mouse x day x gene-id arrays, in document order.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct ExperimentRecord {
    fields: Map<String, Value>,
}

impl ExperimentRecord {
    pub fn keys(&self) -> Vec<String> {
        self.fields.keys().cloned().collect()
    }

    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }
}
