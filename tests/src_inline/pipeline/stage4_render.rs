use super::*;

fn ratio_point(mouse: usize, day: u32, ratio: f64) -> RatioPoint {
    RatioPoint {
        mouse,
        day,
        ratio,
        ratio_var: 0.01,
        sd: 0.1,
        ratio_min: ratio - 0.2,
        ratio_max: ratio + 0.2,
    }
}

fn inverse_point(mouse: usize, day: u32, variance: f64) -> InverseVariancePoint {
    InverseVariancePoint {
        mouse,
        day,
        abs_fitness_var: variance,
        inverse_var: (variance != 0.0).then(|| 1.0 / variance),
    }
}

#[test]
fn test_ratios_one_trace_per_mouse() {
    let points = [
        ratio_point(0, 4, 0.1),
        ratio_point(0, 5, 0.2),
        ratio_point(1, 4, 0.3),
        ratio_point(3, 4, 0.4),
    ];
    let chart = render_ratios(&points, "PBANKA_0100").unwrap();

    assert_eq!(chart.trace_names(), ["Mouse 1", "Mouse 2", "Mouse 4"]);
    let first = chart.trace("Mouse 1").unwrap();
    assert_eq!(first.kind, TraceKind::Scatter);
    assert_eq!(first.mode.as_deref(), Some("markers+lines"));
    assert_eq!(first.x, [4.0, 5.0]);
    assert_eq!(first.y, [0.1, 0.2]);
    assert_eq!(first.marker.color, "red");
    assert_eq!(chart.trace("Mouse 2").unwrap().marker.color, "blue");
    assert_eq!(
        chart.trace("Mouse 4").unwrap().line.as_ref().unwrap().color,
        "black"
    );

    assert_eq!(chart.layout.title.text, "Barcode Abundance for PBANKA_0100");
    assert_eq!(
        chart.layout.xaxis.tickvals.as_deref(),
        Some(&[4.0, 5.0, 6.0, 7.0, 8.0][..])
    );
    assert_eq!(chart.layout.xaxis.dtick, Some(1.0));
    assert_eq!(chart.layout.yaxis.tickformat.as_deref(), Some(".1%"));
    assert_eq!(chart.layout.legend.as_ref().unwrap().title.text, "Mouse");
}

#[test]
fn test_abs_fitness_grouped_bars() {
    let points = [
        AbsFitnessPoint {
            mouse: 0,
            day: 5,
            abs_fitness: 1.0,
        },
        AbsFitnessPoint {
            mouse: 4,
            day: 5,
            abs_fitness: 0.8,
        },
    ];
    let chart = render_abs_fitness(&points, "g1").unwrap();
    assert_eq!(chart.data.len(), 2);
    assert!(chart.data.iter().all(|t| t.kind == TraceKind::Bar));
    assert_eq!(chart.data[1].marker.color, "gray");
    assert_eq!(chart.layout.barmode, Some(BarMode::Group));
    assert_eq!(chart.layout.title.text, "Normalized Relative Growth Rate for g1");
    assert_eq!(
        chart.layout.yaxis.title.as_ref().unwrap().text,
        "Normalized Relative Growth Rate"
    );
}

#[test]
fn test_inverse_variance_range_has_headroom() {
    let points = [
        inverse_point(0, 5, 0.5),
        inverse_point(0, 6, 0.25),
        inverse_point(1, 5, 0.0),
    ];
    let chart = render_inverse_variance(&points, "g1").unwrap();

    assert_eq!(chart.layout.title.text, "Fitness: g1");
    assert_eq!(chart.data.len(), 2);
    assert_eq!(chart.data[0].y, [2.0, 4.0]);
    assert!(chart.data[1].x.is_empty());

    let [lo, hi] = chart.layout.yaxis.range.unwrap();
    assert_eq!(lo, 0.0);
    assert!((hi - 4.4).abs() < 1e-9);
}

#[test]
fn test_inverse_variance_all_zero_leaves_range_unset() {
    let points = [inverse_point(0, 5, 0.0), inverse_point(1, 5, 0.0)];
    let chart = render_inverse_variance(&points, "g1").unwrap();
    assert_eq!(chart.layout.yaxis.range, None);
    assert!(chart.data.iter().all(|t| t.x.is_empty()));
}

#[test]
fn test_empty_series_have_no_chart() {
    assert!(matches!(
        render_ratios(&[], "g1"),
        Err(PlotError::NoData("ratios"))
    ));
    assert!(matches!(
        render_abs_fitness(&[], "g1"),
        Err(PlotError::NoData(_))
    ));
    assert!(matches!(
        render_inverse_variance(&[], "g1"),
        Err(PlotError::NoData(_))
    ));
}

#[test]
fn test_chart_serializes_as_plotly_figure() {
    let chart = render_ratios(&[ratio_point(0, 4, 0.1)], "g1").unwrap();
    let value = serde_json::to_value(&chart).unwrap();
    assert_eq!(value["data"][0]["type"], "scatter");
    assert_eq!(value["layout"]["yaxis"]["tickformat"], ".1%");
    assert!(value["layout"]["yaxis"].get("range").is_none());
}
