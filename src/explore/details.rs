use std::path::Path;

use tracing::warn;

use crate::config::DataPaths;
use crate::input::InputError;
use crate::input::fitness::{GeneDetails, find_gene_details};
use crate::model::summary::{GeneSummaryRow, Phenotype, SummaryTable};
use crate::pipeline::{ExperimentPlots, experiment_plots};
use crate::report::format_f64_2;

pub const SELECT_PROMPT: &str =
    "Select a gene by clicking a point on the plot or selecting a row in the table.";
pub const NO_EXPERIMENT_MESSAGE: &str = "Please select an experiment.";
pub const NO_GENE_MESSAGE: &str = "Please select a gene first.";
pub const NO_KEYS_MESSAGE: &str = "No keys found for the selected experiment and gene.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// A plot click or search pick, by gene id.
    Gene(String),
    /// A table row, by position.
    Row(usize),
}

pub fn select<'a>(table: &'a SummaryTable, selection: &Selection) -> Option<&'a GeneSummaryRow> {
    match selection {
        Selection::Gene(gene) => table.find(gene),
        Selection::Row(idx) => table.row(*idx),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GeneCard {
    pub gene: String,
    pub growth_rate: Option<f64>,
    pub confidence: Option<f64>,
    pub phenotype: Phenotype,
}

impl GeneCard {
    pub fn from_row(row: &GeneSummaryRow) -> Self {
        Self {
            gene: row.gene.clone(),
            growth_rate: row.relative_growth_rate,
            confidence: row.confidence,
            phenotype: row.phenotype.clone(),
        }
    }

    pub fn lines(&self) -> Vec<String> {
        vec![
            format!("Gene: {}", self.gene),
            format!("Growth Rate: {}", format_f64_2(self.growth_rate)),
            format!("Confidence: {}", format_f64_2(self.confidence)),
            format!("Phenotype: {}", self.phenotype),
        ]
    }
}

/// Per-experiment fitness of one gene, with the experiment picker state.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneView {
    pub gene: String,
    pub details: GeneDetails,
    pub experiments: Vec<String>,
    pub selected_experiment: Option<String>,
}

impl GeneView {
    pub fn from_details(gene: &str, details: GeneDetails) -> Self {
        let mut experiments = details
            .rows
            .iter()
            .map(|row| row.experiment.clone())
            .collect::<Vec<_>>();
        experiments.sort();
        experiments.dedup();
        let selected_experiment = experiments.first().cloned();
        Self {
            gene: gene.to_string(),
            details,
            experiments,
            selected_experiment,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.details.is_empty()
    }

    pub fn empty_message(&self) -> Option<String> {
        self.is_empty()
            .then(|| format!("No details found for gene: {}", self.gene))
    }

    pub fn table_rows(&self) -> Vec<[String; 4]> {
        self.details
            .rows
            .iter()
            .map(|row| {
                [
                    row.experiment.clone(),
                    format_f64_2(Some(row.relative_growth_rate)),
                    format_f64_2(row.lower),
                    format_f64_2(row.upper),
                ]
            })
            .collect()
    }
}

/// A missing fitness file reads as "no details"; any other failure, notably
/// a missing column, is returned to the caller.
pub fn gene_view(fitness_path: &Path, gene: &str) -> Result<GeneView, InputError> {
    let details = match find_gene_details(fitness_path, gene) {
        Ok(details) => details,
        Err(err) if err.is_missing_file() => {
            warn!(path = %fitness_path.display(), error = %err, "fitness table not found");
            GeneDetails::default()
        }
        Err(err) => return Err(err),
    };
    Ok(GeneView::from_details(gene, details))
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExperimentView {
    pub message: String,
    pub plots: ExperimentPlots,
}

pub fn keys_message(keys: &[String]) -> String {
    if keys.is_empty() {
        NO_KEYS_MESSAGE.to_string()
    } else {
        format!(
            "Keys for selected experiment and gene: {}",
            keys.join(", ")
        )
    }
}

pub fn experiment_view(
    paths: &DataPaths,
    experiment: Option<&str>,
    gene: Option<&str>,
) -> ExperimentView {
    let Some(experiment) = experiment.filter(|e| !e.is_empty()) else {
        return ExperimentView {
            message: NO_EXPERIMENT_MESSAGE.to_string(),
            plots: ExperimentPlots::empty(),
        };
    };
    let Some(gene) = gene.filter(|g| !g.is_empty()) else {
        return ExperimentView {
            message: NO_GENE_MESSAGE.to_string(),
            plots: ExperimentPlots::empty(),
        };
    };

    let plots = experiment_plots(&paths.order, &paths.records, experiment, gene);
    if plots.keys.is_empty() {
        return ExperimentView {
            message: NO_KEYS_MESSAGE.to_string(),
            plots: ExperimentPlots::empty(),
        };
    }
    ExperimentView {
        message: keys_message(&plots.keys),
        plots,
    }
}
