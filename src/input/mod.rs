use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use flate2::read::MultiGzDecoder;
use thiserror::Error;

pub mod fitness;
pub mod order;
pub mod records;
pub mod summary;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("index {index} is out of range for {len} records")]
    OutOfRange { index: usize, len: usize },
    #[error("parse error: {0}")]
    Parse(String),
    #[error("shape error: {0}")]
    Shape(String),
    #[error("missing column '{0}'")]
    MissingColumn(String),
}

impl From<csv::Error> for InputError {
    fn from(value: csv::Error) -> Self {
        if value.is_io_error() {
            match value.into_kind() {
                csv::ErrorKind::Io(e) => InputError::Io(e),
                other => InputError::Parse(format!("{other:?}")),
            }
        } else {
            InputError::Parse(value.to_string())
        }
    }
}

impl From<serde_json::Error> for InputError {
    fn from(value: serde_json::Error) -> Self {
        if value.is_io() {
            InputError::Io(value.into())
        } else {
            InputError::Parse(value.to_string())
        }
    }
}

impl InputError {
    pub fn is_missing_file(&self) -> bool {
        matches!(self, InputError::Io(e) if e.kind() == std::io::ErrorKind::NotFound)
    }
}

pub fn is_gz(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "gz")
}

pub fn open_maybe_gz(path: &Path) -> Result<Box<dyn BufRead>, InputError> {
    let file = File::open(path)?;
    if is_gz(path) {
        Ok(Box::new(BufReader::new(MultiGzDecoder::new(file))))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}

/// Prefers `dir/name`, then `dir/name.gz`. Falls back to the plain path so
/// that the eventual open reports the missing file.
pub fn find_data_file(dir: &Path, name: &str) -> PathBuf {
    let plain = dir.join(name);
    if plain.exists() {
        return plain;
    }
    let gz = dir.join(format!("{name}.gz"));
    if gz.exists() {
        return gz;
    }
    plain
}

/// Missing-value markers recognised in delimited tables.
const NA_MARKERS: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

pub fn is_missing_value(raw: &str) -> bool {
    NA_MARKERS.contains(&raw.trim())
}

pub fn parse_optional_f64(raw: &str) -> Option<f64> {
    if is_missing_value(raw) {
        return None;
    }
    raw.trim().parse::<f64>().ok().filter(|v| !v.is_nan())
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;
