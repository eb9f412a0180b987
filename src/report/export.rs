use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use clap::ValueEnum;
use csv::StringRecord;
use rust_xlsxwriter::{ColNum, RowNum, Workbook, Worksheet, XlsxError};
use thiserror::Error;
use tracing::info;

use crate::input::is_missing_value;
use crate::model::summary::SummaryTable;

pub const SHEET_NAME: &str = "Sheet1";

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("spreadsheet error: {0}")]
    Xlsx(#[from] XlsxError),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    #[default]
    Csv,
    Xlsx,
}

/// Header plus every record, in the loaded column and row order.
pub fn write_summary<W: Write>(table: &SummaryTable, out: W) -> Result<(), ExportError> {
    let mut writer = csv::WriterBuilder::new().has_headers(false).from_writer(out);
    writer.write_record(table.headers())?;
    for record in table.records() {
        writer.write_record(record)?;
    }
    writer.flush()?;
    Ok(())
}

pub fn write_summary_csv(table: &SummaryTable, path: &Path) -> Result<(), ExportError> {
    create_parent(path)?;
    write_summary(table, File::create(path)?)?;
    info!(path = %path.display(), rows = table.len(), "exported summary table");
    Ok(())
}

/// Single-sheet workbook with the header row, then one row per record.
/// Numeric cells are stored as numbers and missing markers as empty cells.
pub fn write_summary_xlsx(table: &SummaryTable, path: &Path) -> Result<(), ExportError> {
    create_parent(path)?;
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name(SHEET_NAME)?;

    write_sheet_row(sheet, 0, table.headers(), false)?;
    for (idx, record) in table.records().iter().enumerate() {
        write_sheet_row(sheet, idx + 1, record, true)?;
    }

    workbook.save(path)?;
    info!(path = %path.display(), rows = table.len(), "exported summary workbook");
    Ok(())
}

pub fn export_summary(
    table: &SummaryTable,
    path: &Path,
    format: ExportFormat,
) -> Result<(), ExportError> {
    match format {
        ExportFormat::Csv => write_summary_csv(table, path),
        ExportFormat::Xlsx => write_summary_xlsx(table, path),
    }
}

fn create_parent(path: &Path) -> std::io::Result<()> {
    match path.parent().filter(|p| !p.as_os_str().is_empty()) {
        Some(parent) => fs::create_dir_all(parent),
        None => Ok(()),
    }
}

fn write_sheet_row(
    sheet: &mut Worksheet,
    row: usize,
    record: &StringRecord,
    typed: bool,
) -> Result<(), XlsxError> {
    let row = RowNum::try_from(row).map_err(|_| XlsxError::RowColumnLimitError)?;
    for (col, cell) in record.iter().enumerate() {
        let col = ColNum::try_from(col).map_err(|_| XlsxError::RowColumnLimitError)?;
        if !typed {
            sheet.write_string(row, col, cell)?;
            continue;
        }
        if is_missing_value(cell) {
            continue;
        }
        match cell.trim().parse::<f64>() {
            Ok(value) if value.is_finite() => {
                sheet.write_number(row, col, value)?;
            }
            _ => {
                sheet.write_string(row, col, cell)?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/export.rs"]
mod tests;
