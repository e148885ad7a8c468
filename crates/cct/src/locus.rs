//! Temperature to chromaticity curves the isotherm geometry can differentiate.

use crate::xy::UV;
use crate::{blackbody, colortemp};

/// A parametric curve mapping temperature to 1960 UCS chromaticity
pub trait Locus {
    /// Chromaticity at `kelvin`, NaN outside the curve's domain
    fn uv(&self, kelvin: f64) -> UV;

    /// Temperatures at which the curve is only piecewise smooth
    fn breakpoints(&self) -> &[f64] {
        &[]
    }
}

/// The exact locus, integrated from Planck's law
#[derive(Clone, Copy, Debug, Default)]
pub struct Planckian;

/// The polynomial approximation of the locus
#[derive(Clone, Copy, Debug, Default)]
pub struct Kang;

impl Locus for Planckian {
    fn uv(&self, kelvin: f64) -> UV {
        blackbody::locus_uv(kelvin)
    }
}

impl Locus for Kang {
    fn uv(&self, kelvin: f64) -> UV {
        colortemp::locus_xy(kelvin).into()
    }

    fn breakpoints(&self) -> &[f64] {
        &colortemp::BREAKPOINTS
    }
}
