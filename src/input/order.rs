use std::collections::HashMap;
use std::path::Path;

use tracing::debug;

use crate::input::{InputError, open_maybe_gz};

/// Experiment name to record position.
#[derive(Debug, Clone, Default)]
pub struct ExperimentOrder {
    positions: HashMap<String, usize>,
}

impl ExperimentOrder {
    pub fn position(&self, name: &str) -> Option<usize> {
        self.positions.get(name).copied()
    }

    pub fn resolve(&self, name: &str) -> Result<usize, InputError> {
        self.position(name)
            .ok_or_else(|| InputError::NotFound(format!("experiment '{name}'")))
    }
}

pub fn read_experiment_order(path: &Path) -> Result<ExperimentOrder, InputError> {
    let mut reader = open_maybe_gz(path)?;
    let mut buf = String::new();
    let mut order = ExperimentOrder::default();
    let mut line_no = 0usize;

    loop {
        buf.clear();
        let read = reader.read_line(&mut buf)?;
        if read == 0 {
            break;
        }
        let position = line_no;
        line_no += 1;

        let name = buf.trim();
        if name.is_empty() {
            continue;
        }
        if order.positions.insert(name.to_string(), position).is_some() {
            debug!(
                experiment = name,
                line = position,
                "duplicate experiment in order listing; later line wins"
            );
        }
    }

    Ok(order)
}

pub fn resolve_experiment(path: &Path, name: &str) -> Result<usize, InputError> {
    let order = read_experiment_order(path)?;
    let index = order.resolve(name)?;
    debug!(
        experiment = name,
        index,
        listed = order.positions.len(),
        "resolved experiment position"
    );
    Ok(index)
}
