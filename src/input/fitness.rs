use std::path::Path;

use tracing::{debug, warn};

use crate::input::{InputError, is_missing_value, open_maybe_gz, parse_optional_f64};

pub const GENE_COLUMN: &str = "gene";
pub const EXPERIMENT_COLUMN: &str = "experiment";
pub const FITNESS_COLUMN: &str = "fitness";
pub const LOWER_COLUMN: &str = "lower";
pub const UPPER_COLUMN: &str = "upper";

/// Column titles of the per-gene detail view, in display order.
pub const DETAIL_HEADERS: [&str; 4] = ["experiment", "Relative Growth Rate", "lower", "upper"];

/// Per-experiment fitness table, unfiltered, as read from disk.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FitnessTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl FitnessTable {
    pub fn column(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    pub fn require(&self, name: &str) -> Result<usize, InputError> {
        self.column(name)
            .ok_or_else(|| InputError::MissingColumn(name.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GeneDetailRow {
    pub experiment: String,
    pub relative_growth_rate: f64,
    pub lower: Option<f64>,
    pub upper: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GeneDetails {
    pub rows: Vec<GeneDetailRow>,
    pub table: FitnessTable,
}

impl GeneDetails {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

pub fn read_fitness_table(path: &Path) -> Result<FitnessTable, InputError> {
    let reader = open_maybe_gz(path)?;
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(reader);

    let headers = csv_reader
        .headers()?
        .iter()
        .map(|h| h.trim().to_string())
        .collect::<Vec<_>>();

    let mut rows = Vec::new();
    for result in csv_reader.records() {
        let record = result?;
        rows.push(record.iter().map(|s| s.to_string()).collect());
    }

    Ok(FitnessTable { headers, rows })
}

/// Rows of `gene` with a present fitness value. A table without a `fitness`
/// column is a schema mismatch and always fails, even when nothing matches.
pub fn filter_gene(table: FitnessTable, gene: &str) -> Result<GeneDetails, InputError> {
    let fitness_col = table.require(FITNESS_COLUMN)?;
    let gene_col = table.require(GENE_COLUMN)?;

    let matching = table
        .rows
        .iter()
        .filter(|row| cell(row, gene_col) == gene && !is_missing_value(cell(row, fitness_col)))
        .collect::<Vec<_>>();

    if matching.is_empty() {
        debug!(gene, "no fitness rows for gene");
        return Ok(GeneDetails {
            rows: Vec::new(),
            table,
        });
    }

    let experiment_col = table.require(EXPERIMENT_COLUMN)?;
    let lower_col = table.require(LOWER_COLUMN)?;
    let upper_col = table.require(UPPER_COLUMN)?;

    let mut rows = Vec::with_capacity(matching.len());
    for row in matching {
        let raw = cell(row, fitness_col);
        let Some(relative_growth_rate) = parse_optional_f64(raw) else {
            warn!(gene, value = raw, "non-numeric fitness value; skipping row");
            continue;
        };
        rows.push(GeneDetailRow {
            experiment: cell(row, experiment_col).to_string(),
            relative_growth_rate,
            lower: parse_optional_f64(cell(row, lower_col)),
            upper: parse_optional_f64(cell(row, upper_col)),
        });
    }

    Ok(GeneDetails { rows, table })
}

pub fn find_gene_details(path: &Path, gene: &str) -> Result<GeneDetails, InputError> {
    let table = read_fitness_table(path)?;
    debug!(path = %path.display(), rows = table.rows.len(), "read fitness table");
    filter_gene(table, gene)
}

fn cell(row: &[String], idx: usize) -> &str {
    row.get(idx).map(|s| s.as_str()).unwrap_or("")
}
