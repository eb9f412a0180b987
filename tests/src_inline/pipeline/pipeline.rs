use std::fs;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

use serde_json::json;

use super::*;

static DIR_COUNTER: AtomicUsize = AtomicUsize::new(0);

fn make_temp_dir() -> PathBuf {
    let mut dir = std::env::temp_dir();
    let id = DIR_COUNTER.fetch_add(1, Ordering::SeqCst);
    dir.push(format!("barseq_pipeline_test_{}_{}", std::process::id(), id));
    fs::create_dir_all(&dir).unwrap();
    dir
}

/// Two mice, five days, two gene-ids per cell.
fn full_record() -> serde_json::Value {
    json!({
        "ratios": [
            [[0.10, 0.0], [0.12, 0.0], [0.15, 0.0], [0.11, 0.0], [0.09, 0.0]],
            [[0.20, 0.0], [0.22, 0.0], [0.25, 0.0], [0.21, 0.0], [0.19, 0.0]]
        ],
        "ratiosvar": [
            [[0.0001, 0.0], [0.0001, 0.0], [0.0004, 0.0], [0.0001, 0.0], [0.0001, 0.0]],
            [[0.0001, 0.0], [0.0001, 0.0], [0.0001, 0.0], [0.0001, 0.0], [0.0001, 0.0]]
        ],
        "absfitness": [
            [[1.0, 0.0], [0.9, 0.0], [0.8, 0.0], [0.7, 0.0], [0.6, 0.0]],
            [[1.1, 0.0], [1.0, 0.0], [0.9, 0.0], [0.8, 0.0], [0.7, 0.0]]
        ],
        "absfitnessvar": [
            [[0.5, 0.0], [0.25, 0.0], [0.0, 0.0], [0.5, 0.0], [0.5, 0.0]],
            [[0.5, 0.0], [0.5, 0.0], [0.5, 0.0], [0.5, 0.0], [0.5, 0.0]]
        ]
    })
}

fn write_fixture(records: serde_json::Value) -> (PathBuf, PathBuf) {
    let dir = make_temp_dir();
    let order = dir.join("experiment_order.txt");
    let path = dir.join("arrays.json");
    fs::write(&order, "inv1\nPbSTM19\n").unwrap();
    fs::write(&path, serde_json::to_vec(&records).unwrap()).unwrap();
    (order, path)
}

#[test]
fn test_experiment_plots_full_pipeline() {
    let (order, records) = write_fixture(json!([{ "ratios": [[[0.5]]] }, full_record()]));
    let plots = experiment_plots(&order, &records, "PbSTM19", "PBANKA_0100");

    assert_eq!(plots.keys, ["ratios", "ratiosvar", "absfitness", "absfitnessvar"]);

    let ratios = plots.ratios.as_ref().unwrap();
    assert_eq!(ratios.trace_names(), ["Mouse 1", "Mouse 2"]);
    assert_eq!(ratios.data[0].x, [4.0, 5.0, 6.0, 7.0, 8.0]);

    let abs = plots.abs_fitness.as_ref().unwrap();
    assert_eq!(abs.data[1].x, [5.0, 6.0, 7.0, 8.0, 9.0]);

    let inverse = plots.inverse_variance.as_ref().unwrap();
    // Mouse 1 day 7 has zero variance and is left out.
    assert_eq!(inverse.data[0].x, [5.0, 6.0, 8.0, 9.0]);
    let [_, hi] = inverse.layout.yaxis.range.unwrap();
    assert!((hi - 4.4).abs() < 1e-9);
}

#[test]
fn test_missing_field_only_drops_its_chart() {
    let (order, records) = write_fixture(json!([
        {},
        { "absfitness": [[[1.0]], [[0.5]]] }
    ]));
    let plots = experiment_plots(&order, &records, "PbSTM19", "g1");
    assert_eq!(plots.keys, ["absfitness"]);
    assert!(plots.ratios.is_none());
    assert!(plots.abs_fitness.is_some());
    assert!(plots.inverse_variance.is_none());
}

#[test]
fn test_unknown_experiment_yields_empty_plots() {
    let (order, records) = write_fixture(json!([full_record()]));
    let plots = experiment_plots(&order, &records, "NonexistentExperiment", "g1");
    assert_eq!(plots, ExperimentPlots::empty());
}

#[test]
fn test_out_of_range_experiment_yields_empty_plots() {
    let (order, records) = write_fixture(json!([full_record()]));
    let plots = experiment_plots(&order, &records, "PbSTM19", "g1");
    assert_eq!(plots, ExperimentPlots::empty());
    assert!(plots.charts().iter().all(|(_, chart)| chart.is_none()));
}

#[test]
fn test_build_errors_are_typed() {
    let record = ExperimentRecord::default();
    assert!(matches!(
        build_ratios_chart(&record, "g1"),
        Err(PlotError::Input(InputError::Shape(_)))
    ));

    let all_missing = serde_json::from_value::<ExperimentRecord>(json!({
        "absfitness": [[[null], [null]]]
    }))
    .unwrap();
    assert!(matches!(
        build_abs_fitness_chart(&all_missing, "g1"),
        Err(PlotError::NoData(_))
    ));
}
