use tracing::debug;

use crate::model::chart::{Axis, ChartSpec, Layout, Legend, Title, Trace, TraceKind};
use crate::model::palette::{HIGHLIGHT_FALLBACK_COLOR, phenotype_color};
use crate::model::summary::{GeneSummaryRow, Phenotype, SummaryTable};

pub const OVERVIEW_TITLE: &str = "Scatter Plot of Growth Rate vs Confidence";
pub const HIGHLIGHT_TRACE: &str = "Selected Gene";
const MARKER_SIZE: f64 = 6.0;
const HIGHLIGHT_SIZE: f64 = 20.0;
const BACKGROUND_OPACITY: f64 = 0.2;

/// Growth rate against confidence, one trace per phenotype in order of first
/// appearance. Rows lacking either coordinate are not drawn.
pub fn overview_chart(table: &SummaryTable) -> ChartSpec {
    let mut traces: Vec<(Phenotype, Trace)> = Vec::new();
    for row in table.rows() {
        let idx = match traces.iter().position(|(p, _)| p == &row.phenotype) {
            Some(idx) => idx,
            None => {
                let mut trace = Trace::new(
                    TraceKind::Scatter,
                    row.phenotype.label(),
                    phenotype_color(&row.phenotype),
                );
                trace.mode = Some("markers".to_string());
                trace.marker.size = Some(MARKER_SIZE);
                trace.marker.opacity = Some(1.0);
                traces.push((row.phenotype.clone(), trace));
                traces.len() - 1
            }
        };
        if let (Some(x), Some(y)) = (row.relative_growth_rate, row.confidence) {
            let trace = &mut traces[idx].1;
            trace.push(x, y);
            trace.customdata.push(vec![row.gene.clone()]);
        }
    }

    let mut layout = Layout::new(
        OVERVIEW_TITLE,
        Axis::titled("Growth Rate"),
        Axis::titled("Confidence"),
    );
    layout.legend = Some(Legend {
        title: Title::new("phenotype"),
    });
    layout.template = Some("plotly_white".to_string());

    ChartSpec {
        data: traces.into_iter().map(|(_, t)| t).collect(),
        layout,
    }
}

/// Overview with one gene emphasised, and the table rows narrowed to it.
#[derive(Debug, Clone, PartialEq)]
pub struct Highlight {
    pub chart: ChartSpec,
    pub rows: Vec<GeneSummaryRow>,
    pub gene: Option<String>,
}

pub fn highlight_gene(table: &SummaryTable, gene: &str) -> Highlight {
    let mut chart = overview_chart(table);
    let selected = table
        .rows()
        .iter()
        .filter(|row| row.gene == gene)
        .cloned()
        .collect::<Vec<_>>();

    let Some(first) = selected.first() else {
        debug!(gene, "gene not in summary table; overview left unchanged");
        return Highlight {
            chart,
            rows: table.rows().to_vec(),
            gene: None,
        };
    };

    let color = chart
        .trace(first.phenotype.label())
        .map(|t| t.marker.color.clone())
        .unwrap_or_else(|| HIGHLIGHT_FALLBACK_COLOR.to_string());

    for trace in &mut chart.data {
        trace.marker.opacity = Some(BACKGROUND_OPACITY);
    }

    let mut marker = Trace::new(TraceKind::Scatter, HIGHLIGHT_TRACE, &color);
    marker.mode = Some("markers".to_string());
    marker.marker.size = Some(HIGHLIGHT_SIZE);
    marker.marker.opacity = Some(1.0);
    marker.hoverinfo = Some("skip".to_string());
    for row in &selected {
        if let (Some(x), Some(y)) = (row.relative_growth_rate, row.confidence) {
            marker.push(x, y);
        }
    }
    chart.data.push(marker);

    Highlight {
        chart,
        rows: selected,
        gene: Some(gene.to_string()),
    }
}
