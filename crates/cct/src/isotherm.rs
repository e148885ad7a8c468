//! Isotherm geometry: the line of constant correlated color temperature
//! through a point on the locus, perpendicular to the locus.
//!
//! The locus tangent is estimated with a central finite difference. The step
//! is sized relative to the temperature, smaller in the sharply curved
//! 1500K - 2000K region and larger at high temperatures where the locus is
//! numerically flat. Near a domain edge or a polynomial breakpoint the
//! stencil falls back to a second order one-sided difference.

use crate::locus::Locus;
use crate::xy::UV;

/// Step reduction for the single retry after an ill-conditioned difference
pub const RETRY_FACTOR: f64 = 0.01;

/// Finite difference step (in Kelvin) used around `kelvin`
#[must_use]
pub fn derivative_step(kelvin: f64) -> f64 {
    let ratio = if kelvin < 1500.0 {
        1e-4
    } else if kelvin < 2000.0 {
        2e-5
    } else if kelvin < 10_000.0 {
        1e-4
    } else {
        5e-4
    };
    kelvin * ratio
}

fn difference<L: Locus + ?Sized>(locus: &L, kelvin: f64, step: f64) -> UV {
    // the lower polynomial piece owns its breakpoint
    let one_piece =
        |lo: f64, hi: f64| !locus.breakpoints().iter().any(|&brk| lo <= brk && brk < hi);

    if one_piece(kelvin - step, kelvin + step) {
        let (lo, hi) = (locus.uv(kelvin - step), locus.uv(kelvin + step));
        if lo.is_finite() && hi.is_finite() {
            return (hi - lo) * (0.5 / step);
        }
    }

    // second order one-sided difference, on whichever side stays usable
    for h in [-step, step] {
        let far = 2.0f64.mul_add(h, kelvin);
        if !one_piece(kelvin.min(far), kelvin.max(far)) {
            continue;
        }
        let (p0, p1, p2) = (locus.uv(kelvin), locus.uv(kelvin + h), locus.uv(far));
        if p0.is_finite() && p1.is_finite() && p2.is_finite() {
            return (p1 * 4.0 - p0 * 3.0 - p2) * (0.5 / h);
        }
    }

    UV::NAN
}

/// Rate of change of chromaticity per Kelvin at `kelvin`, pointing towards
/// increasing temperature. NaN if the locus cannot be differentiated there,
/// which happens when `kelvin` lies outside the locus' domain.
#[must_use]
pub fn tangent<L: Locus + ?Sized>(locus: &L, kelvin: f64) -> UV {
    let step = derivative_step(kelvin);

    let mut slope = difference(locus, kelvin, step);
    if !slope.is_finite() || slope.length() == 0.0 {
        slope = difference(locus, kelvin, step * RETRY_FACTOR);
    }

    if !slope.is_finite() || slope.length() == 0.0 {
        return UV::NAN;
    }

    // u shrinks as temperature grows, everywhere on the locus
    if slope.u > 0.0 { slope * -1.0 } else { slope }
}

/// Unit normal of the locus at `kelvin`, pointing towards increasing v
#[must_use]
pub fn normal<L: Locus + ?Sized>(locus: &L, kelvin: f64) -> UV {
    tangent(locus, kelvin).perpendicular().normalized()
}

/// An isotherm: a point on the locus together with its unit normal
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Isotherm {
    pub point: UV,
    pub normal: UV,
}

impl Isotherm {
    #[must_use]
    pub const fn new(point: UV, normal: UV) -> Self {
        Self { point, normal }
    }

    #[must_use]
    pub fn at<L: Locus + ?Sized>(locus: &L, kelvin: f64) -> Self {
        Self::new(locus.uv(kelvin), normal(locus, kelvin))
    }

    /// Unit tangent of the locus, pointing towards increasing temperature
    #[must_use]
    pub const fn tangent(&self) -> UV {
        UV::new(-self.normal.v, self.normal.u)
    }

    /// Point `duv` away from the locus along this isotherm
    #[must_use]
    pub fn offset(&self, duv: f64) -> UV {
        self.point + self.normal * duv
    }

    /// Signed distance of `uv` from the locus, measured along the isotherm
    #[must_use]
    pub fn duv(&self, uv: UV) -> f64 {
        (uv - self.point).dot(self.normal)
    }

    /// Signed distance of `uv` from the isotherm line. Positive when `uv` is
    /// on the hotter side.
    #[must_use]
    pub fn along(&self, uv: UV) -> f64 {
        (uv - self.point).dot(self.tangent())
    }
}
