use std::fmt;

use serde::{Deserialize, Serialize};

use crate::input::is_missing_value;

pub const GENE: &str = "gene";
pub const GENE_NAME: &str = "gene_name";
pub const GENE_PRODUCT: &str = "gene_product";
pub const CURRENT_VERSION_ID: &str = "current_version_ID";
pub const RELATIVE_GROWTH_RATE: &str = "Relative.Growth.Rate";
pub const CONFIDENCE: &str = "Confidence";
pub const PHENOTYPE: &str = "phenotype";

pub const SUMMARY_COLUMNS: [&str; 7] = [
    GENE,
    GENE_NAME,
    GENE_PRODUCT,
    CURRENT_VERSION_ID,
    RELATIVE_GROWTH_RATE,
    CONFIDENCE,
    PHENOTYPE,
];

/// Label shown for rows whose phenotype cell is empty or a missing marker.
pub const UNLABELLED_PHENOTYPE: &str = "Unknown";

/// Phenotype call of a gene. Labels outside the known set are kept verbatim
/// in `Other` so one odd row never invalidates the table.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Phenotype {
    Slow,
    Essential,
    Dispensable,
    InsufficientData,
    Fast,
    Other(String),
}

impl Phenotype {
    pub fn label(&self) -> &str {
        match self {
            Phenotype::Slow => "Slow",
            Phenotype::Essential => "Essential",
            Phenotype::Dispensable => "Dispensable",
            Phenotype::InsufficientData => "Insufficient data",
            Phenotype::Fast => "Fast",
            Phenotype::Other(label) => label,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Phenotype::Other(_))
    }
}

impl From<String> for Phenotype {
    fn from(raw: String) -> Self {
        match raw.trim() {
            "Slow" => Phenotype::Slow,
            "Essential" => Phenotype::Essential,
            "Dispensable" => Phenotype::Dispensable,
            "Insufficient data" => Phenotype::InsufficientData,
            "Fast" => Phenotype::Fast,
            other if is_missing_value(other) => Phenotype::Other(UNLABELLED_PHENOTYPE.to_string()),
            other => Phenotype::Other(other.to_string()),
        }
    }
}

impl From<Phenotype> for String {
    fn from(phenotype: Phenotype) -> Self {
        phenotype.label().to_string()
    }
}

impl fmt::Display for Phenotype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneSummaryRow {
    pub gene: String,
    #[serde(default)]
    pub gene_name: String,
    #[serde(default)]
    pub gene_product: String,
    #[serde(rename = "current_version_ID", default)]
    pub current_version_id: String,
    #[serde(
        rename = "Relative.Growth.Rate",
        deserialize_with = "csv::invalid_option"
    )]
    pub relative_growth_rate: Option<f64>,
    #[serde(rename = "Confidence", deserialize_with = "csv::invalid_option")]
    pub confidence: Option<f64>,
    pub phenotype: Phenotype,
}

/// The gene summary file as loaded: header and raw records in file order,
/// plus the typed rows. Never mutated after load.
#[derive(Debug, Clone)]
pub struct SummaryTable {
    headers: csv::StringRecord,
    records: Vec<csv::StringRecord>,
    rows: Vec<GeneSummaryRow>,
}

impl SummaryTable {
    pub fn new(
        headers: csv::StringRecord,
        records: Vec<csv::StringRecord>,
        rows: Vec<GeneSummaryRow>,
    ) -> Self {
        Self {
            headers,
            records,
            rows,
        }
    }

    /// Table with the expected columns and no rows.
    pub fn empty() -> Self {
        Self {
            headers: csv::StringRecord::from(SUMMARY_COLUMNS.to_vec()),
            records: Vec::new(),
            rows: Vec::new(),
        }
    }

    pub fn headers(&self) -> &csv::StringRecord {
        &self.headers
    }

    pub fn records(&self) -> &[csv::StringRecord] {
        &self.records
    }

    pub fn rows(&self) -> &[GeneSummaryRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn row(&self, index: usize) -> Option<&GeneSummaryRow> {
        self.rows.get(index)
    }

    pub fn find(&self, gene: &str) -> Option<&GeneSummaryRow> {
        self.rows.iter().find(|row| row.gene == gene)
    }
}

impl Default for SummaryTable {
    fn default() -> Self {
        Self::empty()
    }
}
