//! Dense round trip validation: temperature -> chromaticity -> temperature.

use std::fmt::Display;

use itertools::Itertools;

use cct::{Cct, Method, XY};

use crate::error::{AppError, AppResult};

/// Temperatures where error reports are split
pub const BAND_EDGES: [f64; 7] = [
    1000.0, 2000.0, 7000.0, 15000.0, 25000.0, 60000.0, 100_000.0,
];

/// Worst round trip errors over one temperature band
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BandReport {
    pub from: f64,
    pub to: f64,
    pub samples: usize,
    pub failures: usize,
    pub kelvin_error: f64,
    pub duv_error: f64,
}

fn band(kelvin: f64) -> usize {
    BAND_EDGES[1..BAND_EDGES.len() - 1]
        .iter()
        .take_while(|edge| kelvin >= **edge)
        .count()
}

/// Forward path matching the estimator: the polynomial locus for the
/// default method, the exact blackbody otherwise
fn forward(method: Method, expected: Cct) -> XY {
    match method {
        Method::Default => expected.xy(),
        _ => expected.xy_exact(),
    }
}

pub fn run(method: Method, duv: f64, from: f64, to: f64, ratio: f64) -> AppResult<Vec<BandReport>> {
    if !(ratio > 1.0 && from > 0.0 && from <= to) {
        return Err(AppError::EmptySweep(from, to, ratio));
    }

    let reports = itertools::iterate(from, |k| k * ratio)
        .take_while(|k| *k <= to)
        .filter_map(|kelvin| {
            let expected = Cct::new(kelvin, duv);
            let xy = forward(method, expected);
            // outside the forward model's domain
            xy.is_finite().then(|| (kelvin, method.estimate_xy(xy)))
        })
        .chunk_by(|(kelvin, _)| band(*kelvin))
        .into_iter()
        .map(|(index, results)| {
            let mut report = BandReport {
                from: BAND_EDGES[index],
                to: BAND_EDGES[index + 1],
                ..BandReport::default()
            };
            for (kelvin, found) in results {
                report.samples += 1;
                if found.is_valid() {
                    report.kelvin_error = report.kelvin_error.max((found.kelvin - kelvin).abs());
                    report.duv_error = report.duv_error.max((found.duv - duv).abs());
                } else {
                    log::trace!("{method} could not place {kelvin:.1}K");
                    report.failures += 1;
                }
            }
            report
        })
        .collect();

    Ok(reports)
}

impl Display for BandReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:>6.0}K - {:>6.0}K  samples {:>5}  failed {:>5}  max |dK| {:>9.4}  max |dDuv| {:.2e}",
            self.from, self.to, self.samples, self.failures, self.kelvin_error, self.duv_error
        )
    }
}
