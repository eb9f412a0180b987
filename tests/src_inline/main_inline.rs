use super::*;
use crate::report::export::ExportFormat;
use std::path::PathBuf;

#[test]
fn test_parse_plots_command_with_defaults() {
    let cli = Cli::try_parse_from([
        "barseq-explorer",
        "plots",
        "--gene",
        "PBANKA_0100",
        "--out",
        "charts",
    ])
    .unwrap();
    let paths = cli.data.paths();
    assert_eq!(paths.order, PathBuf::from("data/experiment_order.txt"));
    match cli.command {
        Commands::Plots(args) => {
            assert_eq!(args.gene, "PBANKA_0100");
            assert_eq!(args.experiment, None);
            assert_eq!(args.out, PathBuf::from("charts"));
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn test_global_file_overrides_after_subcommand() {
    let cli = Cli::try_parse_from([
        "barseq-explorer",
        "search",
        "kinase",
        "--data-dir",
        "/srv/barseq",
        "--records",
        "/tmp/arrays.json.gz",
    ])
    .unwrap();
    let paths = cli.data.paths();
    assert_eq!(paths.summary, PathBuf::from("/srv/barseq/Barseq20250124.csv"));
    assert_eq!(paths.records, PathBuf::from("/tmp/arrays.json.gz"));
}

#[test]
fn test_gene_command_requires_exactly_one_selector() {
    assert!(Cli::try_parse_from(["barseq-explorer", "gene"]).is_err());
    assert!(
        Cli::try_parse_from(["barseq-explorer", "gene", "--id", "g1", "--row", "2"]).is_err()
    );

    let cli = Cli::try_parse_from(["barseq-explorer", "gene", "--row", "2"]).unwrap();
    match cli.command {
        Commands::Gene(args) => assert_eq!(selection_from(&args).unwrap(), Selection::Row(2)),
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn test_export_format_flag() {
    let cli = Cli::try_parse_from(["barseq-explorer", "export", "--out", "genes.csv"]).unwrap();
    match cli.command {
        Commands::Export(args) => assert_eq!(args.format, ExportFormat::Csv),
        other => panic!("unexpected command: {other:?}"),
    }

    let cli = Cli::try_parse_from([
        "barseq-explorer",
        "export",
        "--out",
        "genes.xlsx",
        "--format",
        "xlsx",
    ])
    .unwrap();
    match cli.command {
        Commands::Export(args) => assert_eq!(args.format, ExportFormat::Xlsx),
        other => panic!("unexpected command: {other:?}"),
    }
}
