use regex::{Regex, RegexBuilder};
use serde::Serialize;
use tracing::debug;

use crate::model::summary::{GeneSummaryRow, SummaryTable};

pub const ALL_LABEL: &str = "All";
pub const ALL_VALUE: &str = "all";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchOption {
    pub label: String,
    pub value: String,
}

impl SearchOption {
    pub fn all() -> Self {
        Self {
            label: ALL_LABEL.to_string(),
            value: ALL_VALUE.to_string(),
        }
    }

    fn for_row(row: &GeneSummaryRow) -> Self {
        Self {
            label: format!("{} ({} - {})", row.gene, row.gene_name, row.gene_product),
            value: row.gene.clone(),
        }
    }
}

/// Case-insensitive pattern search over gene, name, product and version id.
pub fn matches(row: &GeneSummaryRow, pattern: &Regex) -> bool {
    [
        row.gene.as_str(),
        row.gene_name.as_str(),
        row.gene_product.as_str(),
        row.current_version_id.as_str(),
    ]
    .iter()
    .any(|field| pattern.is_match(field))
}

/// `All` first, then matching genes in table order. The query is a regular
/// expression; one that does not compile matches nothing.
pub fn search_options(table: &SummaryTable, query: Option<&str>) -> Vec<SearchOption> {
    let mut options = vec![SearchOption::all()];
    let Some(query) = query.filter(|q| !q.is_empty()) else {
        return options;
    };
    let pattern = match RegexBuilder::new(query).case_insensitive(true).build() {
        Ok(pattern) => pattern,
        Err(err) => {
            debug!(query, error = %err, "search query is not a valid pattern");
            return options;
        }
    };
    options.extend(
        table
            .rows()
            .iter()
            .filter(|row| matches(row, &pattern))
            .map(SearchOption::for_row),
    );
    options
}
