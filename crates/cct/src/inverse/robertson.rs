//! Robertson's isotherm interpolation.
//!
//!   `Robertson1968`: Robertson, A. R. (1968). Computation of correlated color
//!    temperature and distribution temperature. Journal of the Optical
//!    Society of America, 58(11), 1528-1535.

use crate::cct::Cct;
use crate::inverse::{Estimator, lerp};
use crate::isotherm::Isotherm;
use crate::table::{IsothermEntry, IsothermTable};
use crate::xy::UV;

/// Fraction of the way from `a` to `b` where `uv` is found, judged by its
/// distance from the two isotherm lines
fn linear_fraction(a: &IsothermEntry, b: &IsothermEntry, uv: UV) -> f64 {
    let (da, db) = (a.along(uv), b.along(uv));
    da / (da - db)
}

/// Interpolates mired and Duv linearly between the two isotherms that
/// bracket the input.
#[derive(Clone, Copy, Debug)]
pub struct Robertson1968<'a> {
    table: &'a IsothermTable,
}

impl<'a> Robertson1968<'a> {
    #[must_use]
    pub const fn new(table: &'a IsothermTable) -> Self {
        Self { table }
    }
}

impl Estimator for Robertson1968<'_> {
    fn estimate(&self, uv: UV) -> Cct {
        let Some(j) = self.table.bracket(uv) else {
            return Cct::INVALID;
        };
        let (a, b) = (&self.table[j - 1], &self.table[j]);

        let f = linear_fraction(a, b, uv);
        Cct::from_mired(lerp(a.mired, b.mired, f), lerp(a.duv(uv), b.duv(uv), f))
    }
}

/// Finds the isotherm, interpolated between the bracketing pair, that passes
/// exactly through the input, and measures Duv along it.
#[derive(Clone, Copy, Debug)]
pub struct RobertsonImproved<'a> {
    table: &'a IsothermTable,
}

impl<'a> RobertsonImproved<'a> {
    #[must_use]
    pub const fn new(table: &'a IsothermTable) -> Self {
        Self { table }
    }

    /// Solve `(uv - P(f)) . T(f) = 0` for `f` in `[0, 1]`, where `P` and `T`
    /// are the point and tangent interpolated linearly from `a` to `b`. Of two
    /// admissible roots, the one nearest `guess` wins.
    fn solve(a: &IsothermEntry, b: &IsothermEntry, uv: UV, guess: f64) -> Option<f64> {
        let ta = a.isotherm().tangent();
        let dt = b.isotherm().tangent() - ta;
        let dp = b.uv - a.uv;
        let r = uv - a.uv;

        let qa = -dp.dot(dt);
        let qb = r.dot(dt) - dp.dot(ta);
        let qc = r.dot(ta);

        if qa.abs() <= f64::EPSILON * qb.abs() {
            let f = -qc / qb;
            return (0.0..=1.0).contains(&f).then_some(f);
        }

        let disc = qb.mul_add(qb, -4.0 * qa * qc);
        if disc < 0.0 {
            return None;
        }

        // numerically stable pair of roots
        let q = -0.5 * (qb + disc.sqrt().copysign(qb));
        [q / qa, qc / q]
            .into_iter()
            .filter(|f| (0.0..=1.0).contains(f))
            .min_by(|x, y| (x - guess).abs().total_cmp(&(y - guess).abs()))
    }
}

impl Estimator for RobertsonImproved<'_> {
    fn estimate(&self, uv: UV) -> Cct {
        let Some(j) = self.table.bracket(uv) else {
            return Cct::INVALID;
        };
        let (a, b) = (&self.table[j - 1], &self.table[j]);

        let linear = linear_fraction(a, b, uv);
        let f = Self::solve(a, b, uv, linear).unwrap_or(linear);

        let isotherm = Isotherm::new(a.uv.lerp(b.uv, f), a.normal.lerp(b.normal, f).normalized());
        Cct::from_mired(lerp(a.mired, b.mired, f), isotherm.duv(uv))
    }
}
