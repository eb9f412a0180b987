use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::{DEFAULT_DATA_DIR, DataPaths};
use crate::report::export::ExportFormat;

#[derive(Debug, Parser)]
#[command(
    name = "barseq-explorer",
    version,
    about = "Explore Barseq gene fitness screens"
)]
pub struct Cli {
    #[command(flatten)]
    pub data: DataArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Args)]
pub struct DataArgs {
    #[arg(long, global = true, default_value = DEFAULT_DATA_DIR, help = "Directory holding the backing files")]
    pub data_dir: PathBuf,

    #[arg(long, global = true, help = "Gene summary table (CSV)")]
    pub summary: Option<PathBuf>,

    #[arg(long, global = true, help = "Per-experiment fitness table (CSV)")]
    pub fitness: Option<PathBuf>,

    #[arg(long, global = true, help = "Experiment order listing")]
    pub order: Option<PathBuf>,

    #[arg(long, global = true, help = "Experiment records document (JSON)")]
    pub records: Option<PathBuf>,
}

impl DataArgs {
    pub fn paths(&self) -> DataPaths {
        DataPaths::from_dir(&self.data_dir).with_overrides(
            self.summary.clone(),
            self.fitness.clone(),
            self.order.clone(),
            self.records.clone(),
        )
    }
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List genes matching a query.
    Search(SearchArgs),
    /// Write the growth-rate/confidence overview chart.
    Overview(OverviewArgs),
    /// Show one gene's card and per-experiment fitness.
    Gene(GeneArgs),
    /// Write the three time-series charts for a gene in one experiment.
    Plots(PlotsArgs),
    /// Export the gene summary table as CSV or a spreadsheet.
    Export(ExportArgs),
}

#[derive(Debug, Args)]
pub struct SearchArgs {
    pub query: Option<String>,
}

#[derive(Debug, Args)]
pub struct OverviewArgs {
    #[arg(long)]
    pub highlight: Option<String>,

    #[arg(long)]
    pub out: PathBuf,
}

#[derive(Debug, Args)]
#[group(required = true, multiple = false)]
pub struct GeneArgs {
    #[arg(long)]
    pub id: Option<String>,

    #[arg(long, help = "Row position in the summary table (0-based)")]
    pub row: Option<usize>,
}

#[derive(Debug, Args)]
pub struct PlotsArgs {
    #[arg(long)]
    pub gene: String,

    #[arg(long, help = "Defaults to the first experiment listing the gene")]
    pub experiment: Option<String>,

    #[arg(long)]
    pub out: PathBuf,
}

#[derive(Debug, Args)]
pub struct ExportArgs {
    #[arg(long)]
    pub out: PathBuf,

    #[arg(long, value_enum, default_value_t = ExportFormat::Csv)]
    pub format: ExportFormat,
}
