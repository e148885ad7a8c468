use crate::cmf::{self, C1, C2, SAMPLES};
use crate::xyz::XYZ;
use crate::{BLACKBODY_MAX_KELVIN, BLACKBODY_MIN_KELVIN};

/// Exponents above this are treated as zero radiance, since `exp()` would
/// overflow long before the term could matter.
const MAX_EXPONENT: f64 = 700.0;

/// Spectral power distribution sampled on the observer's wavelength grid
/// (380 nm to 780 nm, 5 nm steps).
#[derive(Clone, Debug, PartialEq)]
pub struct Spectrum {
    values: [f64; SAMPLES],
}

/// Planck's law: spectral radiance of an ideal radiator, in W·sr⁻¹·m⁻³
/// (up to the constant factor of `C1`).
#[must_use]
pub fn planck(wavelength_nm: f64, kelvin: f64) -> f64 {
    let lambda = wavelength_nm * 1e-9;
    let exponent = C2 / (lambda * kelvin);
    if exponent > MAX_EXPONENT {
        0.0
    } else {
        C1 / (lambda.powi(5) * exponent.exp_m1())
    }
}

impl Spectrum {
    pub const NAN: Self = Self {
        values: [f64::NAN; SAMPLES],
    };

    /// Spectrum of an ideal blackbody radiator. Outside the supported
    /// temperature range every sample is NaN.
    #[must_use]
    pub fn planckian(kelvin: f64) -> Self {
        if !(BLACKBODY_MIN_KELVIN..=BLACKBODY_MAX_KELVIN).contains(&kelvin) {
            return Self::NAN;
        }

        let mut values = [0.0; SAMPLES];
        for (i, value) in values.iter_mut().enumerate() {
            *value = planck(cmf::wavelength(i), kelvin);
        }
        Self { values }
    }

    #[must_use]
    pub const fn values(&self) -> &[f64; SAMPLES] {
        &self.values
    }

    /// Iterate over `(wavelength_nm, value)` pairs
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.values
            .iter()
            .enumerate()
            .map(|(i, value)| (cmf::wavelength(i), *value))
    }

    /// Rescale so the highest sample is 1
    #[must_use]
    pub fn relative(&self) -> Self {
        let peak = self.values.iter().copied().fold(0.0, f64::max);
        Self {
            values: self.values.map(|v| v / peak),
        }
    }

    /// Integrate against the color matching functions. No normalization is
    /// applied.
    #[must_use]
    pub fn tristimulus(&self) -> XYZ {
        let mut xyz = [0.0; 3];
        for ((_, cmf), value) in cmf::samples().zip(self.values) {
            for (acc, weight) in xyz.iter_mut().zip(cmf) {
                *acc = value.mul_add(weight, *acc);
            }
        }
        XYZ::new(xyz[0], xyz[1], xyz[2])
    }
}
