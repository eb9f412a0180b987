use serde_json::Value;

use crate::input::{InputError, parse_optional_f64};
use crate::model::record::ExperimentRecord;
use crate::model::sample::{GeneSlice, LongFormSample};

/// Gene-id position read from every array.
///
/// Records are assumed to carry the requested gene at index 0 of the innermost
/// axis. Arrays with several gene-ids are still only read at index 0; this is
/// kept as-is until the record layout documents what the other entries hold.
pub const GENE_ID_INDEX: usize = 0;

pub fn extract_gene_slice(record: &ExperimentRecord, field: &str) -> Result<GeneSlice, InputError> {
    let value = record
        .field(field)
        .ok_or_else(|| InputError::Shape(format!("field '{field}' is missing")))?;

    let mice = as_axis(value, field, "mouse")?;
    let mut n_days: Option<usize> = None;
    let mut n_ids: Option<usize> = None;
    let mut values = Vec::with_capacity(mice.len());

    for mouse in mice {
        let days = as_axis(mouse, field, "day")?;
        check_extent(&mut n_days, days.len(), field, "day")?;

        let mut row = Vec::with_capacity(days.len());
        for day in days {
            let ids = as_axis(day, field, "gene-id")?;
            check_extent(&mut n_ids, ids.len(), field, "gene-id")?;
            if ids.iter().any(Value::is_array) {
                return Err(InputError::Shape(format!(
                    "field '{field}' has more than 3 dimensions"
                )));
            }
            row.push(cell_value(&ids[GENE_ID_INDEX]));
        }
        values.push(row);
    }

    Ok(GeneSlice { values })
}

/// Row-major flattening: mouse outer, day inner.
pub fn to_long_form(slice: &GeneSlice) -> Vec<LongFormSample> {
    let mut out = Vec::with_capacity(slice.n_mice() * slice.n_days());
    for (mouse, row) in slice.values.iter().enumerate() {
        for (day, value) in row.iter().enumerate() {
            out.push(LongFormSample {
                mouse,
                day,
                value: *value,
            });
        }
    }
    out
}

pub fn long_form_field(
    record: &ExperimentRecord,
    field: &str,
) -> Result<Vec<LongFormSample>, InputError> {
    Ok(to_long_form(&extract_gene_slice(record, field)?))
}

fn as_axis<'a>(value: &'a Value, field: &str, axis: &str) -> Result<&'a [Value], InputError> {
    match value {
        Value::Array(items) if !items.is_empty() => Ok(items),
        Value::Array(_) => Err(InputError::Shape(format!(
            "field '{field}' has an empty {axis} axis"
        ))),
        _ => Err(InputError::Shape(format!(
            "field '{field}' is not 3-dimensional: no {axis} axis"
        ))),
    }
}

fn check_extent(
    expected: &mut Option<usize>,
    actual: usize,
    field: &str,
    axis: &str,
) -> Result<(), InputError> {
    match *expected {
        None => {
            *expected = Some(actual);
            Ok(())
        }
        Some(n) if n == actual => Ok(()),
        Some(n) => Err(InputError::Shape(format!(
            "field '{field}' is ragged along the {axis} axis ({n} vs {actual})"
        ))),
    }
}

/// Numbers and numeric strings are values; everything else is missing.
fn cell_value(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64().filter(|v| !v.is_nan()),
        Value::String(s) => parse_optional_f64(s),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        _ => None,
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_reshape.rs"]
mod tests;
