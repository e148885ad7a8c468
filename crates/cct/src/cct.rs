use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::colorspace::SRGB;
use crate::inverse::Method;
use crate::rgb::Rgb8;
use crate::spectrum::Spectrum;
use crate::xy::{UV, UVPrime, XY};
use crate::xyz::XYZ;
use crate::{blackbody, colortemp};

/// Correlated color temperature: a temperature in Kelvin, and the signed
/// distance (Duv) from the Planckian locus in the CIE 1960 UCS diagram.
/// Positive Duv is above the locus (greenish), negative is below (pinkish).
#[derive(Copy, Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Cct {
    pub kelvin: f64,
    pub duv: f64,
}

impl Cct {
    /// Result of an estimate that could not be made
    pub const INVALID: Self = Self::new(f64::NAN, f64::NAN);

    #[must_use]
    pub const fn new(kelvin: f64, duv: f64) -> Self {
        Self { kelvin, duv }
    }

    /// A point on the locus itself
    #[must_use]
    pub const fn locus(kelvin: f64) -> Self {
        Self::new(kelvin, 0.0)
    }

    #[must_use]
    pub fn from_mired(mired: f64, duv: f64) -> Self {
        let kelvin = crate::mired(mired);
        if kelvin.is_finite() && kelvin > 0.0 {
            Self::new(kelvin, duv)
        } else {
            Self::INVALID
        }
    }

    #[must_use]
    pub fn from_xy(xy: XY, method: Method) -> Self {
        method.estimate_xy(xy)
    }

    #[must_use]
    pub fn from_uv(uv: UV, method: Method) -> Self {
        method.estimate(uv)
    }

    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.kelvin.is_finite() && self.duv.is_finite()
    }

    #[must_use]
    pub fn mired(&self) -> f64 {
        crate::mired(self.kelvin)
    }

    /// Chromaticity from the polynomial locus. NaN outside 1667K - 25000K.
    #[must_use]
    pub fn xy(&self) -> XY {
        colortemp::offset_xy(self.kelvin, self.duv)
    }

    /// Chromaticity from the exact Planckian locus. NaN outside 100K - 100000K.
    #[must_use]
    pub fn xy_exact(&self) -> XY {
        blackbody::offset_xy(self.kelvin, self.duv)
    }

    #[must_use]
    pub fn uv(&self) -> UV {
        self.xy().into()
    }

    #[must_use]
    pub fn uv_prime(&self) -> UVPrime {
        self.xy().into()
    }

    /// Tristimulus values at unit luminance
    #[must_use]
    pub fn xyz(&self) -> XYZ {
        XYZ::from_xy(self.xy())
    }

    /// Spectral power distribution of a blackbody at this temperature. Duv is
    /// not represented.
    #[must_use]
    pub fn spectrum(&self) -> Spectrum {
        Spectrum::planckian(self.kelvin)
    }

    /// Brightest sRGB color with this chromaticity
    #[must_use]
    pub fn to_rgb(&self) -> Rgb8 {
        SRGB.xy_to_rgb8(self.xy())
    }

    /// [`Self::to_rgb`] as lowercase `rrggbb`
    #[must_use]
    pub fn to_hex(&self) -> String {
        self.to_rgb().to_hex()
    }
}

impl Display for Cct {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_valid() {
            write!(f, "{:.0}K Duv {:+.4}", self.kelvin, self.duv)
        } else {
            write!(f, "invalid")
        }
    }
}
