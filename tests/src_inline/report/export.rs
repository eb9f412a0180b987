use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::*;
use crate::input::summary::read_summary;

static DIR_COUNTER: AtomicUsize = AtomicUsize::new(0);

fn make_temp_dir() -> PathBuf {
    let mut dir = std::env::temp_dir();
    let id = DIR_COUNTER.fetch_add(1, Ordering::SeqCst);
    dir.push(format!("barseq_export_test_{}_{}", std::process::id(), id));
    fs::create_dir_all(&dir).unwrap();
    dir
}

// Extra column and quoted commas must survive unchanged.
const SUMMARY_CSV: &str = "\
gene,gene_name,gene_product,current_version_ID,Relative.Growth.Rate,Confidence,phenotype,notes
PBANKA_0100,,conserved protein,PBANKA_010010,0.95,3.2,Dispensable,
PBANKA_0300,KIN,\"kinase, putative\",PBANKA_020030,NA,1.1,Insufficient data,checked
";

#[test]
fn test_export_reloads_to_same_table() {
    let dir = make_temp_dir();
    let source = dir.join("Barseq20250124.csv");
    fs::write(&source, SUMMARY_CSV).unwrap();
    let table = read_summary(&source).unwrap();

    let exported = dir.join("out").join("gene_data.csv");
    write_summary_csv(&table, &exported).unwrap();
    let reloaded = read_summary(&exported).unwrap();

    assert_eq!(reloaded.headers(), table.headers());
    assert_eq!(reloaded.records(), table.records());
    assert_eq!(reloaded.rows(), table.rows());
}

#[test]
fn test_export_empty_table_writes_header_only() {
    let mut out = Vec::new();
    write_summary(&SummaryTable::empty(), &mut out).unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "gene,gene_name,gene_product,current_version_ID,Relative.Growth.Rate,Confidence,phenotype\n"
    );
}

#[test]
fn test_xlsx_export_keeps_header_and_row_order() {
    use calamine::{Data, Reader, Xlsx, open_workbook};

    let dir = make_temp_dir();
    let source = dir.join("Barseq20250124.csv");
    fs::write(&source, SUMMARY_CSV).unwrap();
    let table = read_summary(&source).unwrap();

    let exported = dir.join("out").join("gene_data.xlsx");
    export_summary(&table, &exported, ExportFormat::Xlsx).unwrap();

    let mut book: Xlsx<_> = open_workbook(&exported).unwrap();
    assert_eq!(book.sheet_names(), [SHEET_NAME]);
    let range = book.worksheet_range(SHEET_NAME).unwrap();
    let rows = range.rows().map(|r| r.to_vec()).collect::<Vec<_>>();
    assert_eq!(rows.len(), 3);

    let header = rows[0]
        .iter()
        .map(|cell| match cell {
            Data::String(s) => s.as_str(),
            other => panic!("header cell is not text: {other:?}"),
        })
        .collect::<Vec<_>>();
    assert_eq!(header, table.headers().iter().collect::<Vec<_>>());

    let text = |s: &str| Data::String(s.to_string());
    assert_eq!(
        rows[1],
        [
            text("PBANKA_0100"),
            Data::Empty,
            text("conserved protein"),
            text("PBANKA_010010"),
            Data::Float(0.95),
            Data::Float(3.2),
            text("Dispensable"),
            Data::Empty,
        ]
    );
    assert_eq!(
        rows[2],
        [
            text("PBANKA_0300"),
            text("KIN"),
            text("kinase, putative"),
            text("PBANKA_020030"),
            Data::Empty,
            Data::Float(1.1),
            text("Insufficient data"),
            text("checked"),
        ]
    );
}

#[test]
fn test_csv_is_the_default_export_format() {
    let dir = make_temp_dir();
    let path = dir.join("gene_data.csv");
    export_summary(&SummaryTable::empty(), &path, ExportFormat::default()).unwrap();
    assert!(
        fs::read_to_string(&path)
            .unwrap()
            .starts_with("gene,gene_name,")
    );
}
