use std::path::{Path, PathBuf};

use crate::input::find_data_file;

pub const DEFAULT_DATA_DIR: &str = "data";
pub const SUMMARY_FILE: &str = "Barseq20250124.csv";
pub const FITNESS_FILE: &str = "temp.csv";
pub const ORDER_FILE: &str = "experiment_order.txt";
pub const RECORDS_FILE: &str = "arrays.json";

/// Locations of the four backing files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataPaths {
    pub summary: PathBuf,
    pub fitness: PathBuf,
    pub order: PathBuf,
    pub records: PathBuf,
}

impl DataPaths {
    /// Default file names under `dir`, each falling back to its `.gz` twin.
    pub fn from_dir(dir: &Path) -> Self {
        Self {
            summary: find_data_file(dir, SUMMARY_FILE),
            fitness: find_data_file(dir, FITNESS_FILE),
            order: find_data_file(dir, ORDER_FILE),
            records: find_data_file(dir, RECORDS_FILE),
        }
    }

    pub fn with_overrides(
        mut self,
        summary: Option<PathBuf>,
        fitness: Option<PathBuf>,
        order: Option<PathBuf>,
        records: Option<PathBuf>,
    ) -> Self {
        if let Some(path) = summary {
            self.summary = path;
        }
        if let Some(path) = fitness {
            self.fitness = path;
        }
        if let Some(path) = order {
            self.order = path;
        }
        if let Some(path) = records {
            self.records = path;
        }
        self
    }
}

impl Default for DataPaths {
    fn default() -> Self {
        Self::from_dir(Path::new(DEFAULT_DATA_DIR))
    }
}
