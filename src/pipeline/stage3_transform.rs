use std::collections::HashMap;
use std::ops::RangeInclusive;

use tracing::debug;

use crate::model::sample::{AbsFitnessPoint, InverseVariancePoint, LongFormSample, RatioPoint};

pub const RATIO_DAY_OFFSET: u32 = 3;
pub const FITNESS_DAY_OFFSET: u32 = 4;
pub const RATIO_DAY_WINDOW: RangeInclusive<u32> = 4..=8;
pub const BAND_SIGMAS: f64 = 2.0;

/// Raw day index to the day number shown on charts: 1-based, then shifted.
pub fn display_day(day_index: usize, offset: u32) -> u32 {
    day_index as u32 + 1 + offset
}

#[derive(Debug, Clone, Copy)]
struct Joined {
    mouse: usize,
    day: usize,
    value: f64,
    variance: f64,
}

/// Inner join on (mouse, day); rows missing either side are dropped.
fn join_variance(values: &[LongFormSample], variances: &[LongFormSample]) -> Vec<Joined> {
    let lookup: HashMap<(usize, usize), Option<f64>> = variances
        .iter()
        .map(|s| ((s.mouse, s.day), s.value))
        .collect();

    values
        .iter()
        .filter_map(|s| {
            let value = s.value?;
            let variance = (*lookup.get(&(s.mouse, s.day))?)?;
            Some(Joined {
                mouse: s.mouse,
                day: s.day,
                value,
                variance,
            })
        })
        .collect()
}

/// Ratio rows joined with their variance, limited to the display window.
///
/// Rows with a negative variance are dropped rather than drawn without a
/// band: `sqrt` of a negative variance has no band to draw, and every kept
/// row satisfies `ratio_min <= ratio <= ratio_max` with a band of `4 * sd`.
pub fn ratio_series(ratios: &[LongFormSample], variances: &[LongFormSample]) -> Vec<RatioPoint> {
    let mut out = Vec::new();
    for row in join_variance(ratios, variances) {
        if row.variance < 0.0 {
            debug!(
                mouse = row.mouse,
                day = row.day,
                variance = row.variance,
                "negative ratio variance; dropping row"
            );
            continue;
        }
        let day = display_day(row.day, RATIO_DAY_OFFSET);
        if !RATIO_DAY_WINDOW.contains(&day) {
            continue;
        }
        let sd = row.variance.sqrt();
        out.push(RatioPoint {
            mouse: row.mouse,
            day,
            ratio: row.value,
            ratio_var: row.variance,
            sd,
            ratio_min: row.value - sd * BAND_SIGMAS,
            ratio_max: row.value + sd * BAND_SIGMAS,
        });
    }
    out
}

pub fn abs_fitness_series(samples: &[LongFormSample]) -> Vec<AbsFitnessPoint> {
    samples
        .iter()
        .filter_map(|s| {
            Some(AbsFitnessPoint {
                mouse: s.mouse,
                day: display_day(s.day, FITNESS_DAY_OFFSET),
                abs_fitness: s.value?,
            })
        })
        .collect()
}

pub fn inverse_variance_series(samples: &[LongFormSample]) -> Vec<InverseVariancePoint> {
    samples
        .iter()
        .filter_map(|s| {
            let variance = s.value?;
            let inverse_var = if variance == 0.0 {
                None
            } else {
                Some(1.0 / variance).filter(|v| v.is_finite())
            };
            Some(InverseVariancePoint {
                mouse: s.mouse,
                day: display_day(s.day, FITNESS_DAY_OFFSET),
                abs_fitness_var: variance,
                inverse_var,
            })
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_transform.rs"]
mod tests;
