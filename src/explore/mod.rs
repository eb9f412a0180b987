//! Read-side operations of the explorer, over one shared summary snapshot.

use std::path::Path;
use std::sync::Arc;

use tracing::debug;

use crate::config::DataPaths;
use crate::input::InputError;
use crate::input::summary::load_summary_or_empty;
use crate::model::chart::ChartSpec;
use crate::model::summary::{GeneSummaryRow, SummaryTable};
use crate::report::export::{ExportError, ExportFormat, export_summary};

pub mod details;
pub mod overview;
pub mod search;

use details::{ExperimentView, GeneCard, GeneView, Selection};
use overview::Highlight;
use search::SearchOption;

#[derive(Debug, Clone)]
pub struct Explorer {
    paths: DataPaths,
    summary: Arc<SummaryTable>,
}

impl Explorer {
    /// Loads the summary table once; an unreadable table yields an empty one.
    pub fn open(paths: DataPaths) -> Self {
        let summary = Arc::new(load_summary_or_empty(&paths.summary));
        if summary.is_empty() {
            debug!("gene summary table has no rows");
        }
        Self { paths, summary }
    }

    pub fn search(&self, query: Option<&str>) -> Vec<SearchOption> {
        search::search_options(&self.summary, query)
    }

    pub fn overview(&self) -> ChartSpec {
        overview::overview_chart(&self.summary)
    }

    pub fn highlight(&self, gene: &str) -> Highlight {
        overview::highlight_gene(&self.summary, gene)
    }

    pub fn select(&self, selection: &Selection) -> Option<&GeneSummaryRow> {
        details::select(&self.summary, selection)
    }

    pub fn card(&self, selection: &Selection) -> Option<GeneCard> {
        self.select(selection).map(GeneCard::from_row)
    }

    pub fn gene_view(&self, gene: &str) -> Result<GeneView, InputError> {
        details::gene_view(&self.paths.fitness, gene)
    }

    pub fn experiment_view(&self, experiment: Option<&str>, gene: Option<&str>) -> ExperimentView {
        details::experiment_view(&self.paths, experiment, gene)
    }

    pub fn export(&self, path: &Path, format: ExportFormat) -> Result<(), ExportError> {
        export_summary(&self.summary, path, format)
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/explore/tests.rs"]
mod tests;
