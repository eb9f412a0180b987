use std::path::Path;

use tracing::debug;

use crate::input::InputError;
use crate::input::order::resolve_experiment;
use crate::input::records::load_record;
use crate::model::record::ExperimentRecord;

/// Resolves `experiment` against the order listing and loads its record.
/// Both files are re-read on every call.
pub fn run_stage1(
    order_path: &Path,
    records_path: &Path,
    experiment: &str,
) -> Result<ExperimentRecord, InputError> {
    let index = resolve_experiment(order_path, experiment)?;
    let record = load_record(records_path, index)?;
    debug!(experiment, index, fields = record.keys().len(), "stage1 lookup complete");
    Ok(record)
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage1_lookup.rs"]
mod tests;
