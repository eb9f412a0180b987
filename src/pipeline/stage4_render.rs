use crate::model::chart::{Axis, BarMode, ChartSpec, Layout, Legend, LineStyle, Title, Trace, TraceKind};
use crate::model::palette::{ChartStyle, mouse_color};
use crate::model::sample::{AbsFitnessPoint, InverseVariancePoint, RatioPoint};
use crate::pipeline::PlotError;
use crate::pipeline::stage3_transform::RATIO_DAY_WINDOW;

pub const RATIO_TICK_FORMAT: &str = ".1%";
pub const INVERSE_VAR_HEADROOM: f64 = 1.1;

pub fn mouse_label(mouse: usize) -> String {
    format!("Mouse {}", mouse + 1)
}

/// Groups rows by mouse, keeping the order in which mice first appear.
fn group_by_mouse<T>(rows: &[T], mouse_of: impl Fn(&T) -> usize) -> Vec<(usize, Vec<&T>)> {
    let mut groups: Vec<(usize, Vec<&T>)> = Vec::new();
    for row in rows {
        let mouse = mouse_of(row);
        match groups.iter_mut().find(|(m, _)| *m == mouse) {
            Some((_, members)) => members.push(row),
            None => groups.push((mouse, vec![row])),
        }
    }
    groups
}

fn mouse_legend(layout: &mut Layout) {
    layout.legend = Some(Legend {
        title: Title::new("Mouse"),
    });
    layout.showlegend = true;
}

pub fn render_ratios(points: &[RatioPoint], gene: &str) -> Result<ChartSpec, PlotError> {
    if points.is_empty() {
        return Err(PlotError::NoData("ratios"));
    }

    let mut data = Vec::new();
    for (mouse, rows) in group_by_mouse(points, |p| p.mouse) {
        let color = mouse_color(mouse, ChartStyle::Line);
        let mut trace = Trace::new(TraceKind::Scatter, mouse_label(mouse), color);
        trace.mode = Some("markers+lines".to_string());
        trace.line = Some(LineStyle {
            color: color.to_string(),
        });
        for p in rows {
            trace.push(f64::from(p.day), p.ratio);
        }
        data.push(trace);
    }

    let xaxis = Axis {
        dtick: Some(1.0),
        tickvals: Some(RATIO_DAY_WINDOW.map(f64::from).collect()),
        ..Axis::titled("Day")
    };
    let yaxis = Axis {
        tickformat: Some(RATIO_TICK_FORMAT.to_string()),
        ..Axis::titled("Barcode Abundance (%)")
    };
    let mut layout = Layout::new(format!("Barcode Abundance for {gene}"), xaxis, yaxis);
    mouse_legend(&mut layout);

    Ok(ChartSpec { data, layout })
}

pub fn render_abs_fitness(points: &[AbsFitnessPoint], gene: &str) -> Result<ChartSpec, PlotError> {
    if points.is_empty() {
        return Err(PlotError::NoData("absolute fitness"));
    }

    let mut data = Vec::new();
    for (mouse, rows) in group_by_mouse(points, |p| p.mouse) {
        let color = mouse_color(mouse, ChartStyle::Bar);
        let mut trace = Trace::new(TraceKind::Bar, mouse_label(mouse), color);
        for p in rows {
            trace.push(f64::from(p.day), p.abs_fitness);
        }
        data.push(trace);
    }

    let mut layout = Layout::new(
        format!("Normalized Relative Growth Rate for {gene}"),
        Axis::titled("Day"),
        Axis::titled("Normalized Relative Growth Rate"),
    );
    mouse_legend(&mut layout);
    layout.barmode = Some(BarMode::Group);

    Ok(ChartSpec { data, layout })
}

pub fn render_inverse_variance(
    points: &[InverseVariancePoint],
    gene: &str,
) -> Result<ChartSpec, PlotError> {
    if points.is_empty() {
        return Err(PlotError::NoData("inverse variance"));
    }

    let mut data = Vec::new();
    let mut max_inverse: Option<f64> = None;
    for (mouse, rows) in group_by_mouse(points, |p| p.mouse) {
        let color = mouse_color(mouse, ChartStyle::Bar);
        let mut trace = Trace::new(TraceKind::Bar, mouse_label(mouse), color);
        for p in rows {
            // Zero-variance points are undefined and left out.
            let Some(inverse) = p.inverse_var else {
                continue;
            };
            trace.push(f64::from(p.day), inverse);
            max_inverse = Some(max_inverse.map_or(inverse, |m| m.max(inverse)));
        }
        data.push(trace);
    }

    let yaxis = Axis {
        range: max_inverse.map(|max| [0.0, max * INVERSE_VAR_HEADROOM]),
        ..Axis::titled("Weight (Precision)")
    };
    let mut layout = Layout::new(format!("Fitness: {gene}"), Axis::titled("Day"), yaxis);
    mouse_legend(&mut layout);
    layout.barmode = Some(BarMode::Group);

    Ok(ChartSpec { data, layout })
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage4_render.rs"]
mod tests;
