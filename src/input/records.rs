use std::fs::File;
use std::path::Path;

use memmap2::Mmap;
use tracing::debug;

use crate::input::{InputError, is_gz, open_maybe_gz};
use crate::model::record::ExperimentRecord;

pub fn read_records(path: &Path) -> Result<Vec<ExperimentRecord>, InputError> {
    if is_gz(path) {
        let reader = open_maybe_gz(path)?;
        return Ok(serde_json::from_reader(reader)?);
    }

    let file = File::open(path)?;
    if file.metadata()?.len() == 0 {
        return Err(InputError::Parse(format!(
            "records document {} is empty",
            path.display()
        )));
    }
    let mmap = unsafe { Mmap::map(&file)? };
    Ok(serde_json::from_slice(&mmap)?)
}

pub fn load_record(path: &Path, index: usize) -> Result<ExperimentRecord, InputError> {
    let mut records = read_records(path)?;
    let len = records.len();
    if index >= len {
        return Err(InputError::OutOfRange { index, len });
    }
    debug!(index, records = len, "loaded experiment record");
    Ok(records.swap_remove(index))
}
