use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::model::chart::ChartSpec;
use crate::pipeline::ExperimentPlots;

pub fn write_chart_json(chart: &ChartSpec, path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let mut w = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut w, chart)?;
    w.write_all(b"\n")?;
    w.flush()
}

/// Writes `<name>.json` for each chart that was rendered; returns the paths written.
pub fn write_experiment_charts(
    plots: &ExperimentPlots,
    out_dir: &Path,
) -> std::io::Result<Vec<PathBuf>> {
    fs::create_dir_all(out_dir)?;
    let mut written = Vec::new();
    for (name, chart) in plots.charts() {
        let Some(chart) = chart else {
            continue;
        };
        let path = out_dir.join(format!("{name}.json"));
        write_chart_json(chart, &path)?;
        written.push(path);
    }
    Ok(written)
}
