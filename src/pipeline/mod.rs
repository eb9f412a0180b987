use std::path::Path;

use thiserror::Error;
use tracing::{info, warn};

use crate::input::InputError;
use crate::model::chart::ChartSpec;
use crate::model::record::{ABS_FITNESS, ABS_FITNESS_VAR, ExperimentRecord, RATIOS, RATIOS_VAR};

pub mod stage1_lookup;
pub mod stage2_reshape;
pub mod stage3_transform;
pub mod stage4_render;

use stage1_lookup::run_stage1;
use stage2_reshape::long_form_field;
use stage3_transform::{abs_fitness_series, inverse_variance_series, ratio_series};
use stage4_render::{render_abs_fitness, render_inverse_variance, render_ratios};

#[derive(Debug, Error)]
pub enum PlotError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error("no plottable values for the {0} chart")]
    NoData(&'static str),
}

pub fn build_ratios_chart(record: &ExperimentRecord, gene: &str) -> Result<ChartSpec, PlotError> {
    let ratios = long_form_field(record, RATIOS)?;
    let variances = long_form_field(record, RATIOS_VAR)?;
    render_ratios(&ratio_series(&ratios, &variances), gene)
}

pub fn build_abs_fitness_chart(
    record: &ExperimentRecord,
    gene: &str,
) -> Result<ChartSpec, PlotError> {
    let samples = long_form_field(record, ABS_FITNESS)?;
    render_abs_fitness(&abs_fitness_series(&samples), gene)
}

pub fn build_inverse_variance_chart(
    record: &ExperimentRecord,
    gene: &str,
) -> Result<ChartSpec, PlotError> {
    let samples = long_form_field(record, ABS_FITNESS_VAR)?;
    render_inverse_variance(&inverse_variance_series(&samples), gene)
}

fn chart_or_none(chart: &'static str, result: Result<ChartSpec, PlotError>) -> Option<ChartSpec> {
    match result {
        Ok(spec) => Some(spec),
        Err(err) => {
            warn!(chart, error = %err, "chart not rendered");
            None
        }
    }
}

pub fn ratios_chart(record: &ExperimentRecord, gene: &str) -> Option<ChartSpec> {
    chart_or_none("ratios", build_ratios_chart(record, gene))
}

pub fn abs_fitness_chart(record: &ExperimentRecord, gene: &str) -> Option<ChartSpec> {
    chart_or_none("abs_fitness", build_abs_fitness_chart(record, gene))
}

pub fn inverse_variance_chart(record: &ExperimentRecord, gene: &str) -> Option<ChartSpec> {
    chart_or_none("inverse_variance", build_inverse_variance_chart(record, gene))
}

/// Everything the experiment view shows for one (experiment, gene) pair.
/// `None` charts and empty keys mean the data could not be plotted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExperimentPlots {
    pub keys: Vec<String>,
    pub ratios: Option<ChartSpec>,
    pub abs_fitness: Option<ChartSpec>,
    pub inverse_variance: Option<ChartSpec>,
}

impl ExperimentPlots {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_record(record: &ExperimentRecord, gene: &str) -> Self {
        Self {
            keys: record.keys(),
            ratios: ratios_chart(record, gene),
            abs_fitness: abs_fitness_chart(record, gene),
            inverse_variance: inverse_variance_chart(record, gene),
        }
    }

    pub fn charts(&self) -> [(&'static str, Option<&ChartSpec>); 3] {
        [
            ("ratios", self.ratios.as_ref()),
            ("abs_fitness", self.abs_fitness.as_ref()),
            ("inverse_variance", self.inverse_variance.as_ref()),
        ]
    }
}

pub fn experiment_plots(
    order_path: &Path,
    records_path: &Path,
    experiment: &str,
    gene: &str,
) -> ExperimentPlots {
    let record = match run_stage1(order_path, records_path, experiment) {
        Ok(record) => record,
        Err(err) => {
            warn!(experiment, gene, error = %err, "experiment lookup failed");
            return ExperimentPlots::empty();
        }
    };
    let plots = ExperimentPlots::from_record(&record, gene);
    info!(
        experiment,
        gene,
        keys = plots.keys.len(),
        ratios = plots.ratios.is_some(),
        abs_fitness = plots.abs_fitness.is_some(),
        inverse_variance = plots.inverse_variance.is_some(),
        "experiment plots built"
    );
    plots
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/pipeline.rs"]
mod tests;
