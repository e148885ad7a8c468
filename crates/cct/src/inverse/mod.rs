//! Chromaticity to temperature estimation.
//!
//! Four estimators are available, selected by [`Method`]. All of them take a
//! CIE 1960 UCS chromaticity and return a [`Cct`], which is
//! [`Cct::INVALID`] when the estimator cannot place the input.

pub mod newton;
pub mod ohno;
pub mod robertson;

use std::fmt::{self, Display};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::cct::Cct;
use crate::error::{CctError, CctResult};
use crate::table::isotherm_table;
use crate::xy::{UV, XY};

pub use newton::Newton;
pub use ohno::Ohno2013;
pub use robertson::{Robertson1968, RobertsonImproved};

pub trait Estimator {
    /// Estimate temperature and Duv of a 1960 UCS chromaticity
    fn estimate(&self, uv: UV) -> Cct;

    fn estimate_xy(&self, xy: XY) -> Cct {
        self.estimate(xy.into())
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Method {
    /// Newton refinement of McCamy's approximation against the polynomial locus
    #[default]
    Default,
    /// Robertson's method: linear interpolation between bracketing isotherms
    Robertson1968,
    /// Robertson's method, solving for the interpolated isotherm through the point
    RobertsonImproved,
    /// Ohno's parabolic fit of the distance to the locus
    Ohno2013,
}

impl Method {
    pub const ALL: [Self; 4] = [
        Self::Default,
        Self::Robertson1968,
        Self::RobertsonImproved,
        Self::Ohno2013,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Robertson1968 => "robertson1968",
            Self::RobertsonImproved => "robertson-improved",
            Self::Ohno2013 => "ohno2013",
        }
    }

    #[must_use]
    pub fn estimate(self, uv: UV) -> Cct {
        match self {
            Self::Default => Newton.estimate(uv),
            Self::Robertson1968 => Robertson1968::new(isotherm_table()).estimate(uv),
            Self::RobertsonImproved => RobertsonImproved::new(isotherm_table()).estimate(uv),
            Self::Ohno2013 => Ohno2013::new(isotherm_table()).estimate(uv),
        }
    }

    #[must_use]
    pub fn estimate_xy(self, xy: XY) -> Cct {
        self.estimate(xy.into())
    }
}

impl Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Method {
    type Err = CctError;

    fn from_str(s: &str) -> CctResult<Self> {
        Self::ALL
            .into_iter()
            .find(|method| method.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| CctError::UnknownMethod(s.to_string()))
    }
}

pub(crate) fn lerp(a: f64, b: f64, t: f64) -> f64 {
    (b - a).mul_add(t, a)
}
