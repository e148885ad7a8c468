//! Ohno's parabolic search.
//!
//!   `Ohno2014`: Ohno, Y. (2014). Practical use and calculation of CCT and
//!    Duv. LEUKOS, 10(1), 47-55.

use crate::cct::Cct;
use crate::inverse::{Estimator, lerp};
use crate::table::{IsothermEntry, IsothermTable};
use crate::xy::UV;

/// Parabola `a t^2 + b t + c` through three points, with the middle point at
/// `t = 0`
#[derive(Clone, Copy, Debug, PartialEq)]
struct Parabola {
    a: f64,
    b: f64,
    c: f64,
}

impl Parabola {
    fn through(points: [(f64, f64); 3]) -> Self {
        let [(x0, y0), (x1, y1), (x2, y2)] = points;
        let s01 = (y1 - y0) / (x1 - x0);
        let s12 = (y2 - y1) / (x2 - x1);
        let a = (s12 - s01) / (x2 - x0);
        let b = a.mul_add(-(x0 + x1), s01);
        let c = y1 - a * x1 * x1 - b * x1;
        Self { a, b, c }
    }

    fn vertex(&self) -> (f64, f64) {
        let t = -self.b / (2.0 * self.a);
        (t, (self.b * t).mul_add(0.5, self.c))
    }
}

/// Fits a parabola to the squared distance between the input and three
/// neighbouring table entries, as a function of mired. The vertex gives the
/// temperature, and the square root of its height gives |Duv|.
#[derive(Clone, Copy, Debug)]
pub struct Ohno2013<'a> {
    table: &'a IsothermTable,
}

impl<'a> Ohno2013<'a> {
    #[must_use]
    pub const fn new(table: &'a IsothermTable) -> Self {
        Self { table }
    }

    /// Three consecutive entries centred on whichever of the bracketing pair
    /// lies closest to `uv`. The anchor at mired 0 may bracket the input, but
    /// never takes part in the fit.
    fn stencil(&self, j: usize, uv: UV) -> [&IsothermEntry; 3] {
        let dist = |e: &IsothermEntry| (uv - e.uv).length();
        let nearest = if dist(&self.table[j - 1]) < dist(&self.table[j]) {
            j - 1
        } else {
            j
        };
        let centre = nearest.clamp(2, self.table.len() - 2);
        [
            &self.table[centre - 1],
            &self.table[centre],
            &self.table[centre + 1],
        ]
    }
}

impl Estimator for Ohno2013<'_> {
    fn estimate(&self, uv: UV) -> Cct {
        let Some(j) = self.table.bracket(uv) else {
            return Cct::INVALID;
        };

        let stencil = self.stencil(j, uv);
        let centre = stencil[1].mired;
        let parabola = Parabola::through(stencil.map(|e| {
            let d = uv - e.uv;
            (e.mired - centre, d.dot(d))
        }));

        if parabola.a <= 0.0 || !parabola.a.is_finite() {
            return Cct::INVALID;
        }

        let (t, height) = parabola.vertex();
        let mired = centre + t;
        if mired <= 0.0 {
            return Cct::INVALID;
        }

        // the parabola only knows the distance, the isotherms know the side
        let (a, b) = (&self.table[j - 1], &self.table[j]);
        let (da, db) = (a.along(uv), b.along(uv));
        let side = lerp(a.duv(uv), b.duv(uv), da / (da - db));

        Cct::from_mired(mired, height.max(0.0).sqrt().copysign(side))
    }
}

#[cfg(test)]
mod tests {
    use crate::blackbody;
    use crate::inverse::Estimator;
    use crate::inverse::ohno::{Ohno2013, Parabola};
    use crate::table::isotherm_table;
    use crate::xy::UV;
    use crate::{compare, compare_float};

    #[test]
    fn parabola_fit() {
        // y = 2 (t - 0.25)^2 + 1
        let f = |t: f64| 2.0 * (t - 0.25) * (t - 0.25) + 1.0;
        let p = Parabola::through([(-1.0, f(-1.0)), (0.0, f(0.0)), (1.5, f(1.5))]);
        compare!(p.a, 2.0);
        let (t, height) = p.vertex();
        compare!(t, 0.25);
        compare!(height, 1.0);
    }

    #[test]
    fn distance_matches_offset() {
        let table = isotherm_table();
        let ohno = Ohno2013::new(table);
        for duv in [-0.03, 0.01, 0.03] {
            let uv = blackbody::offset_xy(3200.0, duv).into();
            let found = ohno.estimate(uv);
            compare_float!(found.kelvin, 3200.0, 0.5);
            compare!(found.duv, duv);
        }
    }

    #[test]
    fn stencil_at_cool_end() {
        let table = isotherm_table();
        let found = Ohno2013::new(table).estimate(blackbody::locus_uv(1000.0));
        compare_float!(found.kelvin, 1000.0, 0.5);
        compare!(found.duv, 0.0);
    }

    #[test]
    fn stencil_skips_anchor() {
        let table = isotherm_table();
        let ohno = Ohno2013::new(table);
        let uv = table[1].uv;
        let j = table.bracket(uv).unwrap();
        assert!(ohno.stencil(j, uv).iter().all(|e| e.mired > 0.0));
    }

    #[test]
    fn stencil_at_hot_end() {
        let table = isotherm_table();
        let ohno = Ohno2013::new(table);
        for duv in [-0.05, 0.0, 0.05] {
            let found = ohno.estimate(blackbody::offset_xy(100_000.0, duv).into());
            compare_float!(found.kelvin, 100_000.0, 1.0);
            compare!(found.duv, duv);
        }
    }

    #[test]
    fn outside_table() {
        let table = isotherm_table();
        assert!(!Ohno2013::new(table).estimate(UV::NAN).is_valid());
        assert!(!Ohno2013::new(table).estimate(blackbody::locus_uv(900.0)).is_valid());
    }
}
