use std::ops::RangeInclusive;

use crate::cct::Cct;
use crate::colortemp::{self, BREAKPOINTS};
use crate::inverse::Estimator;
use crate::isotherm::Isotherm;
use crate::locus::Kang;
use crate::xy::{UV, XY};
use crate::{POLYNOMIAL_MAX_KELVIN, POLYNOMIAL_MIN_KELVIN};

/// Chromaticities outside this window are rejected before estimation
pub const X_WINDOW: RangeInclusive<f64> = 0.25..=0.565;
pub const Y_WINDOW: RangeInclusive<f64> = 0.20..=0.45;

/// Iterates are kept inside this range while refining
const SEARCH_MIN_KELVIN: f64 = 1000.0;
const SEARCH_MAX_KELVIN: f64 = 100_000.0;

const MAX_ITERATIONS: usize = 3;

/// Squared residual (in uv) considered converged
const CONVERGED: f64 = 1e-10;

/// Relative distance outside the polynomial domain that a converged estimate
/// may be moved back onto its edge
const EDGE_TOLERANCE: f64 = 1e-4;

/// McCamy's cubic approximation of the temperature of `xy`.
///
///   `McCamy1992`: McCamy, C. S. (1992). Correlated color temperature as an
///    explicit function of chromaticity coordinates. Color Research &
///    Application, 17(2), 142-144.
#[must_use]
pub fn mccamy(xy: XY) -> f64 {
    let n = (xy.x - 0.3320) / (0.1858 - xy.y);
    449.0_f64
        .mul_add(n, 3525.0)
        .mul_add(n, 6823.3)
        .mul_add(n, 5520.33)
}

fn polynomial_uv(kelvin: f64) -> UV {
    colortemp::polynomial_xy(kelvin).into()
}

fn secant_ratio(kelvin: f64) -> f64 {
    if kelvin < 7000.0 {
        1e-4
    } else if kelvin < 15000.0 {
        5e-4
    } else {
        1e-3
    }
}

/// Finite difference derivative of the polynomial locus at `kelvin`, taken
/// on the polynomial piece that owns `kelvin`
fn secant(kelvin: f64) -> UV {
    let h = kelvin * secant_ratio(kelvin);
    let crosses = BREAKPOINTS.iter().any(|&b| kelvin <= b && b < kelvin + h);
    let other = if crosses { kelvin - h } else { kelvin + h };
    (polynomial_uv(other) - polynomial_uv(kelvin)) * (1.0 / (other - kelvin))
}

/// Newton refinement of McCamy's approximation against the polynomial locus.
///
/// Only chromaticities inside [`X_WINDOW`] x [`Y_WINDOW`] are accepted, and
/// only temperatures within the domain of the polynomial are returned.
#[derive(Clone, Copy, Debug, Default)]
pub struct Newton;

impl Newton {
    /// Gauss-Newton correction of `kelvin` towards `uv`
    fn step(uv: UV, kelvin: f64) -> f64 {
        let residual = uv - polynomial_uv(kelvin);
        let t = secant(kelvin);
        residual.dot(t) / t.dot(t)
    }

    /// Refine `kelvin` until the residual from `uv` to the locus is normal
    /// to it
    #[must_use]
    pub fn refine(uv: UV, mut kelvin: f64) -> f64 {
        for _ in 0..MAX_ITERATIONS {
            let residual = uv - polynomial_uv(kelvin);
            if residual.dot(residual) < CONVERGED {
                break;
            }
            kelvin += Self::step(uv, kelvin);
            kelvin = kelvin.clamp(SEARCH_MIN_KELVIN, SEARCH_MAX_KELVIN);
        }
        kelvin
    }

    /// Move an estimate that converged just outside the polynomial domain
    /// onto the nearest edge of it
    #[must_use]
    pub fn snap_to_domain(uv: UV, kelvin: f64) -> f64 {
        let edge = kelvin.clamp(POLYNOMIAL_MIN_KELVIN, POLYNOMIAL_MAX_KELVIN);
        let tolerance = edge * EDGE_TOLERANCE;
        if (kelvin - edge).abs() <= tolerance && Self::step(uv, kelvin).abs() <= tolerance {
            edge
        } else {
            kelvin
        }
    }
}

impl Estimator for Newton {
    fn estimate(&self, uv: UV) -> Cct {
        let xy = XY::from(uv);
        if !(X_WINDOW.contains(&xy.x) && Y_WINDOW.contains(&xy.y)) {
            return Cct::INVALID;
        }

        let seed = mccamy(xy).clamp(SEARCH_MIN_KELVIN, SEARCH_MAX_KELVIN);
        let kelvin = Self::snap_to_domain(uv, Self::refine(uv, seed));

        if !(POLYNOMIAL_MIN_KELVIN..=POLYNOMIAL_MAX_KELVIN).contains(&kelvin) {
            log::trace!("Estimate {kelvin:.1}K for {xy} is outside the polynomial domain");
            return Cct::INVALID;
        }

        Cct::new(kelvin, Isotherm::at(&Kang, kelvin).duv(uv))
    }
}
