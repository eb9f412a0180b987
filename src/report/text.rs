use crate::explore::details::{GeneCard, GeneView};
use crate::explore::search::SearchOption;
use crate::input::fitness::DETAIL_HEADERS;

pub fn render_search_options(options: &[SearchOption]) -> String {
    let mut out = String::new();
    for option in options {
        out.push_str(&format!("{}\t{}\n", option.value, option.label));
    }
    out
}

pub fn render_gene_card(card: &GeneCard) -> String {
    let mut out = card.lines().join("\n");
    out.push('\n');
    out
}

/// Aligned plain-text table of a gene's per-experiment fitness.
pub fn render_gene_view(view: &GeneView) -> String {
    if let Some(message) = view.empty_message() {
        return format!("{message}\n");
    }

    let rows = view.table_rows();
    let mut widths = DETAIL_HEADERS.map(str::len);
    for row in &rows {
        for (w, cell) in widths.iter_mut().zip(row.iter()) {
            *w = (*w).max(cell.len());
        }
    }

    let mut out = String::new();
    push_row(&mut out, &DETAIL_HEADERS.map(str::to_string), &widths);
    push_row(&mut out, &widths.map(|w| "-".repeat(w)), &widths);
    for row in &rows {
        push_row(&mut out, row, &widths);
    }

    out.push('\n');
    out.push_str(&format!("Experiments: {}\n", view.experiments.join(", ")));
    if let Some(selected) = &view.selected_experiment {
        out.push_str(&format!("Selected experiment: {selected}\n"));
    }
    out
}

fn push_row(out: &mut String, cells: &[String; 4], widths: &[usize; 4]) {
    let line = cells
        .iter()
        .zip(widths.iter())
        .map(|(cell, w)| format!("{cell:<w$}"))
        .collect::<Vec<_>>()
        .join("  ");
    out.push_str(line.trim_end());
    out.push('\n');
}
