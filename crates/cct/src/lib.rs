//! Correlated color temperature (CCT) engine.
//!
//! Converts a temperature in Kelvin (plus an optional Duv offset) into
//! chromaticity coordinates, and estimates temperature and Duv back from an
//! arbitrary chromaticity.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod blackbody;
pub mod cct;
pub mod cmf;
pub mod colorspace;
pub mod colortemp;
pub mod error;
pub mod gamma;
pub mod inverse;
pub mod isotherm;
pub mod locus;
pub mod rgb;
pub mod spectrum;
pub mod table;
pub mod xy;
pub mod xyz;

pub use crate::cct::Cct;
pub use crate::inverse::{Estimator, Method};
pub use crate::table::{IsothermTable, isotherm_table};
pub use crate::xy::{UV, UVPrime, XY};

/// Lowest temperature accepted by the exact spectral model
pub const BLACKBODY_MIN_KELVIN: f64 = 100.0;

/// Highest temperature accepted by the exact spectral model
pub const BLACKBODY_MAX_KELVIN: f64 = 100_000.0;

/// Lowest temperature covered by the polynomial locus approximation
pub const POLYNOMIAL_MIN_KELVIN: f64 = 1667.0;

/// Highest temperature covered by the polynomial locus approximation
pub const POLYNOMIAL_MAX_KELVIN: f64 = 25000.0;

/// Convert between Kelvin and mired (micro reciprocal degrees). The mapping is
/// its own inverse.
#[must_use]
pub fn mired(value: f64) -> f64 {
    1e6 / value
}
