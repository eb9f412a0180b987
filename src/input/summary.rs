use std::path::Path;

use tracing::{info, warn};

use crate::input::{InputError, open_maybe_gz};
use crate::model::summary::{GeneSummaryRow, SUMMARY_COLUMNS, SummaryTable};

pub fn read_summary(path: &Path) -> Result<SummaryTable, InputError> {
    let reader = open_maybe_gz(path)?;
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    for column in SUMMARY_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(InputError::MissingColumn(column.to_string()));
        }
    }

    let mut records = Vec::new();
    let mut rows = Vec::new();
    for (idx, result) in csv_reader.records().enumerate() {
        let record = result?;
        let row: GeneSummaryRow = record.deserialize(Some(&headers)).map_err(|e| {
            // +2: header line, then 1-based numbering.
            InputError::Parse(format!("summary line {}: {e}", idx + 2))
        })?;
        records.push(record);
        rows.push(row);
    }

    let unlabelled = rows.iter().filter(|row| !row.phenotype.is_known()).count();
    if unlabelled > 0 {
        warn!(
            path = %path.display(),
            rows = unlabelled,
            "summary rows with an unrecognised or empty phenotype"
        );
    }

    Ok(SummaryTable::new(headers, records, rows))
}

/// Startup load: an unreadable summary leaves the explorer usable with no rows.
pub fn load_summary_or_empty(path: &Path) -> SummaryTable {
    match read_summary(path) {
        Ok(table) => {
            info!(path = %path.display(), genes = table.len(), "loaded gene summary table");
            table
        }
        Err(err) => {
            warn!(
                path = %path.display(),
                error = %err,
                "gene summary table unavailable; using an empty table"
            );
            SummaryTable::empty()
        }
    }
}
